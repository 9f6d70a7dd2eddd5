//! Core library for CDME, a schema-driven editor for Cataclysm: Dark Days
//! Ahead mod JSON. Provides a comment-tolerant JSON codec with lossless
//! number handling, a schema registry, a project store with dirty tracking,
//! and a per-field coercion engine the GUI edits through.

mod coerce;
mod gui;
mod project;
mod record;
mod schema;
mod schemas;
pub mod statics;
mod value;

pub use coerce::{
    EditValue, FieldMeta, HarvestError, default_value, harvest, infer_kind, materialize,
    resolve_fields,
};
pub use gui::run_gui;
pub use project::{LoadSummary, ProjectError, ProjectStore};
pub use record::{EntryId, Record, record_display_name, record_ident, record_label};
pub use schema::{RegistryError, Schema, SchemaField, SchemaRegistry, ValueKind};
pub use schemas::builtin_schemas;
pub use value::{CdNumber, CdValue};
