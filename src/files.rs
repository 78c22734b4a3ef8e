//! Capability-scoped file reads shared by configuration and fixture loading.
//!
//! Paths supplied on the command line are resolved by opening their parent
//! directory with ambient authority and reading the file through that
//! directory handle.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;

/// Reads a UTF-8 file relative to the process working directory.
///
/// # Errors
///
/// Returns an [`io::Error`] when the path has no file name, the parent
/// directory cannot be opened, or the file cannot be read.
pub fn read_to_string(path: &Utf8Path) -> io::Result<String> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("path has no file name: {path}"),
        )
    })?;
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.read_to_string(file_name)
}
