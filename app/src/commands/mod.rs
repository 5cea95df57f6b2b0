//! Command handlers
//!
//! Each handler maps a `Wave` call onto a serializable `CommandResult`.

pub mod settings;
pub mod words;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

/// Plain-text rendering for `--format text`.
pub trait TextOutput {
    fn to_text(&self) -> String;
}
