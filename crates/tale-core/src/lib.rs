//! # tale-core
//!
//! Core types and error types for the Tale crowdsourcing task UIs.
//!
//! This crate provides the data model shared across all Tale crates:
//! - Task context supplied by the task-hosting runtime, plus its lifecycle flags
//! - Answer sets for every task variant (interaction, description, safety)
//! - The event/constraint vocabulary understood by the world engine
//! - Submission payload shapes
//! - Tag, role, and state enums
//! - Cross-cutting error types

pub mod answers;
pub mod context;
pub mod enums;
pub mod errors;
pub mod events;
pub mod lifecycle;
pub mod submission;
