//! # Plainpad UI
//!
//! The editor window, built with iced.
//!
//! ## Architecture
//!
//! The UI follows the Elm architecture (TEA):
//! - **Model**: [`App`], which owns the core [`plainpad_core::Editor`]
//! - **Message**: button clicks, key chords, text edits, dialog answers
//! - **Update**: routes each message to Save, Load or the edit notification
//! - **View**: toolbar, text area and status bar derived from the model
//!
//! Nothing is drawn from state the core does not own: the filename label
//! and the line count are asked of the document on every frame.

pub mod app;
pub mod theme;

pub use app::{run, App, EditorContent, Message};
