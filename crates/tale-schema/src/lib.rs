//! # tale-schema
//!
//! JSON Schema generation, validation, and registry for Tale.
//!
//! This crate provides:
//! - `SchemaRegistry`: central store of the JSON Schemas for every wire type
//! - Validation of inbound task envelopes and answer files
//! - Validation of assembled submission payloads before hand-off
//!
//! ## Architecture
//!
//! Wire types are defined in `tale-core` with `#[derive(JsonSchema)]`.
//! This crate imports those types and provides the registry and validation layer.

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::{SchemaRegistry, names};
