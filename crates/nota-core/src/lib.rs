//! nota-core - Core library for nota
//!
//! This crate contains the wire model, the remote gateway client, and the
//! list controller shared by every nota interface.

pub mod controller;
pub mod error;
pub mod export;
pub mod gateway;
pub mod models;
pub mod util;

pub use controller::ListController;
pub use error::{Error, Result};
pub use gateway::{HttpNoteGateway, NoteGateway};
pub use models::Note;
