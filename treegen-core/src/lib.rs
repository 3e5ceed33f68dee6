//! Core primitives for the treegen node generator.
//!
//! This crate provides the two pieces shared by every target-language
//! emitter: whitespace normalization for embedded comment and code blocks,
//! and per-field scalar type descriptors.

mod error;
mod scalar;
pub mod text;

// Errors
pub use error::{Error, Result};
// Field type descriptors
pub use scalar::{ScalarType, ScalarTypeBuilder, ScalarTypeOptions};
// Text normalization
pub use text::{compact_blank_lines, reindent, reindent_opt};
