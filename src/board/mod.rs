//! Kanban board management for Swimlane.
//!
//! The board owns a flat, ordered task sequence and a set of ordered columns.
//! A task's position within its column is the relative order of tasks that
//! share its column identifier. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Seed data in [`fixture`] and render projections in [`views`]

pub mod adapters;
pub mod domain;
pub mod fixture;
pub mod ports;
pub mod services;
pub mod views;

#[cfg(test)]
mod tests;
