//! Catalog editor surface
//!
//! [`CatalogEditor`] is the form model behind the editing panel: rows, a live
//! filter, add/edit/delete and an all-or-nothing save. The panel talks to the
//! catalog through the message protocol in [`protocol`], whose only inbound
//! message carries the full replacement list.

mod form;
pub mod protocol;

pub use form::{CatalogEditor, EditorRow, RowField, RowId};
pub use protocol::{EditorMessage, EditorReply, handle_message, handle_raw_message, loaded_reply};
