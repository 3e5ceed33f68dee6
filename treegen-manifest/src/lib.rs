//! Scalar type catalogs for the treegen node generator.
//!
//! A catalog declares, in TOML, every scalar field type a generator uses.
//! Parsing resolves each entry into a [`treegen_core::ScalarType`] and
//! reports mistakes as source-located [`miette`] diagnostics.
//!
//! ```toml
//! [scalars.bool]
//! primary_type = "bool"
//! primary_default = "false"
//!
//! [enums.JoinType]
//! scope = "ASTJoin"
//! default = "DEFAULT_JOIN_TYPE"
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod catalog;
mod error;
mod validate;

pub use catalog::{DEFAULT_FILENAME, DEFAULT_SCOPE_SEPARATOR, ScalarCatalog, parse_catalog};
pub use error::{Error, Result, SourceContext};
