//! Backend-to-UI events and error modeling for the card list controller.

use client_core::FetchError;
use shared::domain::UserRecord;

pub enum UiEvent {
    Info(String),
    RecordsLoaded(Vec<UserRecord>),
    LoadFailed(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Decode,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    LoadUsers,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn new(
        category: UiErrorCategory,
        context: UiErrorContext,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            context,
            message: message.into(),
        }
    }

    pub fn from_fetch(context: UiErrorContext, err: &FetchError) -> Self {
        let category = match err {
            FetchError::Transport(_) | FetchError::Status { .. } => UiErrorCategory::Transport,
            FetchError::Decode(_) => UiErrorCategory::Decode,
        };
        Self::new(category, context, err.to_string())
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Transport => "Transport",
        UiErrorCategory::Decode => "Decode",
        UiErrorCategory::Unknown => "Unexpected",
    }
}

#[cfg(test)]
#[path = "tests/events_tests.rs"]
mod tests;
