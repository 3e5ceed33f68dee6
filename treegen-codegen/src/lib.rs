//! Code assembly utilities for the treegen node generator.
//!
//! Emitters build each output file in a [`CodeBuilder`]. Comment and snippet
//! blocks pass through [`treegen_core::reindent`] on the way in, and the
//! finished buffer through [`treegen_core::compact_blank_lines`].

mod code_builder;
mod indent;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
