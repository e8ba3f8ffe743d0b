//! Core types & traits: domain-agnostic contracts for entries and dispatch.

pub mod content;
pub mod entry;
pub mod error;
pub mod registry;
pub mod schema;

pub use content::Block;
pub use entry::{Args, Entry, EntryKind, Handler, Payload};
pub use error::DispatchError;
pub use registry::Registry;
pub use schema::{FieldType, Schema};
