//! Data models shared by all clients

mod note;

pub use note::{Note, UNSAVED_ID};
