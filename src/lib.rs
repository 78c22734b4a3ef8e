//! Swimlane: an in-memory kanban board core.
//!
//! This crate provides the state store, drag-and-drop orchestration and
//! editor form model behind a kanban board. Tasks live in ordered columns,
//! can be dragged within and across columns, filtered by search text, and
//! created, edited or deleted through a modal form model.
//!
//! # Architecture
//!
//! Swimlane follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board logic (entities, move algorithm, filtering)
//! - **Ports**: Abstract trait interfaces for storage and collision detection
//! - **Adapters**: Concrete implementations of ports (in-memory, geometry)
//!
//! # Modules
//!
//! - [`board`]: Board state, services and view projections
//! - [`config`]: File and command-line configuration
//! - [`telemetry`]: Tracing subscriber setup

pub mod board;
pub mod config;
pub mod files;
pub mod telemetry;
