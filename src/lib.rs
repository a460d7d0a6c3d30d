//! Plain-text persistence backend for hierarchical key/value configuration
//! stores.
//!
//! The format is line-oriented and human-editable: sections are declared
//! with `:` and nested by indentation, settings are declared with `=` and
//! hold a scalar, a list, or no value at all, and `#` starts a comment.
//!
//! ```text
//! audio:
//!     codecs = opus, speex
//!     device =
//! # a full-line comment
//! user = "J. Random"
//! ```
//!
//! # Pipeline
//!
//! Loading runs in two phases:
//!
//! 1. **Line Tokenizer**: converts each raw line into a structured record,
//!    applying the quoting, escaping, and comment rules.
//!
//! 2. **Hierarchy Builder**: folds the records through an indentation-tracked
//!    stack of open groups to reconstruct the nested mapping.
//!
//! Saving is the single-phase inverse: the **Group Serializer** walks the
//! mapping recursively and emits escaped lines, which the backend publishes
//! to disk atomically.
//!
//! This crate is a storage plugin for an external configuration manager: it
//! loads and saves whole trees and nothing else. Key lookup, schema
//! validation, and change notification belong to the caller, as does any
//! arbitration between concurrent writers.

mod backend;
mod encode;
mod error;
mod parser;
mod tokenizer;
mod value;

pub use backend::FileBackend;
pub use encode::{escape, serialize};
pub use error::{BackendError, ParseError, Result};
pub use parser::parse;
pub use value::{Group, Value};
