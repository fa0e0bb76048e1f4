//! MetaQuery input loading.
//!
//! Two YAML documents feed a run:
//!
//! ```yaml
//! # fields.yml
//! fields:
//!   - field_id: model_id
//!     label: Model ID
//!     datatable_id: MODELS
//!     sql_expr: model_id
//! ```
//!
//! ```yaml
//! # selection.yml
//! selected_field_ids:
//!   - model_id
//! ```
//!
//! Loading only checks document shape; governance rules (identifier and
//! source patterns, existence) are enforced by validation.

mod document;
pub mod error;
mod fields;
mod selection;

pub use error::{IngestError, Result};
pub use fields::{FIELDS_KEY, load_fields, parse_fields};
pub use selection::{SELECTION_KEY, load_selection, parse_selection};
