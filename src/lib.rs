//! Client core for a document question-answering backend.
//!
//! The crate holds everything that does not depend on where it runs: the chat
//! data model, the transcript, the upload/ask flows and the [`client::Backend`]
//! seam they talk through. The browser app and the terminal client are thin
//! front ends over [`service::dispatch`].

pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;
pub mod transcript;

#[cfg(feature = "native")]
pub mod console;
