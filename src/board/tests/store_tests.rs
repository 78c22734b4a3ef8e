//! Board store orchestration tests.

use std::sync::Arc;

use super::{column_id, column_order, seed, task_id};
use crate::board::{
    adapters::memory::InMemoryBoardRepository,
    domain::{Board, DialogState, Priority, Task, TaskDraft, TaskId, TaskPatch},
    ports::{BoardRepository, BoardRepositoryError, BoardRepositoryResult},
    services::{BoardStore, BoardStoreError},
};
use async_trait::async_trait;
use chrono::Utc;
use mockable::DefaultClock;
use mockall::mock;
use rstest::{fixture, rstest};

type TestStore = BoardStore<InMemoryBoardRepository, DefaultClock>;

#[fixture]
fn store() -> TestStore {
    BoardStore::in_memory(seed(), Arc::new(DefaultClock))
}

mock! {
    Repository {}

    #[async_trait]
    impl BoardRepository for Repository {
        async fn load(&self) -> BoardRepositoryResult<Board>;
        async fn save(&self, board: &Board) -> BoardRepositoryResult<()>;
        async fn find_task(&self, id: &TaskId) -> BoardRepositoryResult<Option<Task>>;
    }
}

fn write_failure() -> BoardRepositoryError {
    BoardRepositoryError::persistence(std::io::Error::other("disk full"))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn seeded_store_exposes_the_built_in_board() {
    let store = BoardStore::seeded(Arc::new(DefaultClock)).expect("seed parses");

    let columns = store.sorted_columns().await.expect("columns load");
    let users = store.users().await.expect("users load");

    assert_eq!(columns.len(), 4);
    assert_eq!(users.len(), 4);
    assert_eq!(store.dialog().expect("dialog readable"), DialogState::Closed);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn move_task_reorders_within_column(store: TestStore) {
    store
        .move_task(&task_id("task-1"), &column_id("todo"), 2)
        .await
        .expect("move succeeds");

    let board = store.snapshot().await.expect("snapshot loads");
    assert_eq!(column_order(&board, "todo"), ["task-5", "task-6", "task-1"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn move_task_reports_unknown_task(store: TestStore) {
    let before = store.snapshot().await.expect("snapshot loads");

    let result = store
        .move_task(&task_id("task-404"), &column_id("todo"), 0)
        .await;

    assert!(matches!(result, Err(BoardStoreError::TaskNotFound(id)) if id.as_str() == "task-404"));
    assert_eq!(store.snapshot().await.expect("snapshot loads"), before);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn move_task_reports_unknown_column(store: TestStore) {
    let result = store
        .move_task(&task_id("task-1"), &column_id("archive"), 0)
        .await;

    assert!(matches!(result, Err(BoardStoreError::ColumnNotFound(id)) if id.as_str() == "archive"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn add_task_appends_with_fresh_id_and_closes_dialog(store: TestStore) {
    store.set_is_adding_task(true).expect("dialog opens");
    let started = Utc::now();
    let draft = TaskDraft::new("Triage inbox", column_id("review"))
        .with_description("")
        .with_priority(Priority::Urgent)
        .with_labels(vec!["Bug".to_owned()]);

    let created = store.add_task(draft).await.expect("task is added");

    let board = store.snapshot().await.expect("snapshot loads");
    let last = board.tasks().last().expect("board has tasks");
    assert_eq!(last, &created);
    assert_eq!(board.tasks().len(), 9);
    assert!(board.task(created.id()).is_some());
    assert!(created.id().as_str().starts_with("task-"));
    assert_eq!(created.title(), "Triage inbox");
    assert_eq!(created.description(), "");
    assert_eq!(created.priority(), Priority::Urgent);
    assert_eq!(created.created_at(), created.updated_at());
    assert!(created.created_at() >= started);
    assert_eq!(store.dialog().expect("dialog readable"), DialogState::Closed);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn add_task_rejects_unknown_column(store: TestStore) {
    let result = store
        .add_task(TaskDraft::new("Lost", column_id("archive")))
        .await;

    assert!(matches!(result, Err(BoardStoreError::ColumnNotFound(_))));
    assert_eq!(store.snapshot().await.expect("snapshot loads").tasks().len(), 8);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_task_merges_patch_and_closes_edit_dialog(store: TestStore) {
    store
        .set_editing_task(Some(task_id("task-2")))
        .expect("dialog opens");
    let before = store
        .find_task(&task_id("task-2"))
        .await
        .expect("lookup succeeds")
        .expect("seeded task");

    let updated = store
        .update_task(
            &task_id("task-2"),
            TaskPatch::new().with_priority(Priority::High),
        )
        .await
        .expect("update succeeds");

    assert_eq!(updated.priority(), Priority::High);
    assert_eq!(updated.title(), before.title());
    assert_eq!(updated.description(), before.description());
    assert_eq!(updated.column_id(), before.column_id());
    assert_eq!(updated.labels(), before.labels());
    assert_eq!(updated.assignees(), before.assignees());
    assert_eq!(updated.due_date(), before.due_date());
    assert_eq!(updated.estimated_time(), before.estimated_time());
    assert_eq!(updated.created_at(), before.created_at());
    assert_eq!(updated.updated_at(), before.updated_at());
    assert_eq!(store.dialog().expect("dialog readable"), DialogState::Closed);
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_adds_are_all_kept(store: TestStore) {
    let shared = Arc::new(store);
    let handles: Vec<_> = (0..200)
        .map(|n| {
            let writer = Arc::clone(&shared);
            tokio::spawn(async move {
                writer
                    .add_task(TaskDraft::new(format!("Parallel {n}"), column_id("todo")))
                    .await
            })
        })
        .collect();
    for handle in handles {
        handle
            .await
            .expect("task joins")
            .expect("add succeeds");
    }

    let board = shared.snapshot().await.expect("snapshot loads");
    assert_eq!(board.tasks().len(), 208);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_unknown_task_is_reported(store: TestStore) {
    let result = store
        .update_task(&task_id("task-404"), TaskPatch::new().with_title("Ghost"))
        .await;

    assert!(matches!(result, Err(BoardStoreError::TaskNotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_task_removes_exactly_one(store: TestStore) {
    let removed = store
        .delete_task(&task_id("task-3"))
        .await
        .expect("delete succeeds");

    let board = store.snapshot().await.expect("snapshot loads");
    assert_eq!(removed.id(), &task_id("task-3"));
    assert_eq!(board.tasks().len(), 7);
    assert!(board.task(&task_id("task-3")).is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_missing_task_leaves_board_unchanged(store: TestStore) {
    let before = store.snapshot().await.expect("snapshot loads");

    let result = store.delete_task(&task_id("task-404")).await;

    assert!(matches!(result, Err(BoardStoreError::TaskNotFound(_))));
    assert_eq!(store.snapshot().await.expect("snapshot loads"), before);
}

#[rstest]
#[case(DialogState::Viewing(task_id("task-6")), DialogState::Closed)]
#[case(DialogState::Editing(task_id("task-6")), DialogState::Closed)]
#[case(DialogState::Viewing(task_id("task-5")), DialogState::Viewing(task_id("task-5")))]
#[tokio::test(flavor = "multi_thread")]
async fn delete_task_closes_dialog_only_for_that_task(
    store: TestStore,
    #[case] open: DialogState,
    #[case] expected: DialogState,
) {
    let opened = match open {
        DialogState::Viewing(id) => store.set_viewing_task(Some(id)),
        DialogState::Editing(id) => store.set_editing_task(Some(id)),
        DialogState::Adding => store.set_is_adding_task(true),
        DialogState::Closed => store.close_dialog(),
    };
    opened.expect("dialog opens");

    store
        .delete_task(&task_id("task-6"))
        .await
        .expect("delete succeeds");

    assert_eq!(store.dialog().expect("dialog readable"), expected);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reorder_column_moves_done_to_front(store: TestStore) {
    store
        .reorder_column(&column_id("done"), 0)
        .await
        .expect("reorder succeeds");

    let columns = store.sorted_columns().await.expect("columns load");
    let orders: Vec<(&str, i64)> = columns
        .iter()
        .map(|column| (column.id().as_str(), column.order()))
        .collect();
    assert_eq!(
        orders,
        [("done", 0), ("todo", 1), ("in-progress", 2), ("review", 3)]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn search_query_filters_projections(store: TestStore) {
    store.set_search_query("auth").expect("query set");

    let visible = store.visible_tasks().await.expect("tasks load");
    let todo = store
        .column_tasks(&column_id("todo"))
        .await
        .expect("column loads");

    let ids: Vec<&str> = visible.iter().map(|task| task.id().as_str()).collect();
    assert_eq!(ids, ["task-1", "task-4"]);
    assert_eq!(todo.len(), 1);
    assert_eq!(store.search_query().expect("query readable").as_str(), "auth");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn column_tasks_rejects_unknown_column(store: TestStore) {
    let result = store.column_tasks(&column_id("archive")).await;
    assert!(matches!(result, Err(BoardStoreError::ColumnNotFound(_))));
}

#[rstest]
fn switching_from_view_to_edit_clears_view(store: TestStore) {
    store
        .set_viewing_task(Some(task_id("task-1")))
        .expect("view opens");
    store
        .set_editing_task(Some(task_id("task-1")))
        .expect("edit opens");

    let dialog = store.dialog().expect("dialog readable");
    assert_eq!(dialog.editing_task(), Some(&task_id("task-1")));
    assert_eq!(dialog.viewing_task(), None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_save_surfaces_repository_error() {
    let mut repository = MockRepository::new();
    repository.expect_load().returning(|| Ok(seed()));
    repository.expect_save().returning(|_| Err(write_failure()));
    let store = BoardStore::new(Arc::new(repository), Arc::new(DefaultClock));

    let result = store
        .move_task(&task_id("task-1"), &column_id("done"), 0)
        .await;

    assert!(matches!(result, Err(BoardStoreError::Repository(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_save_keeps_add_dialog_open() {
    let mut repository = MockRepository::new();
    repository.expect_load().returning(|| Ok(seed()));
    repository.expect_save().returning(|_| Err(write_failure()));
    let store = BoardStore::new(Arc::new(repository), Arc::new(DefaultClock));
    store.set_is_adding_task(true).expect("dialog opens");

    let result = store
        .add_task(TaskDraft::new("Unsaved", column_id("todo")))
        .await;

    assert!(matches!(result, Err(BoardStoreError::Repository(_))));
    assert!(store.dialog().expect("dialog readable").is_adding());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_move_never_saves() {
    let mut repository = MockRepository::new();
    repository.expect_load().returning(|| Ok(seed()));
    repository.expect_save().never();
    let store = BoardStore::new(Arc::new(repository), Arc::new(DefaultClock));

    let result = store
        .move_task(&task_id("task-404"), &column_id("todo"), 0)
        .await;

    assert!(matches!(result, Err(BoardStoreError::TaskNotFound(_))));
}
