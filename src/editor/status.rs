//! Transient status bar state
//!
//! Mirrors the host application's status bar: a message shows on a colored
//! background for a few seconds, then the bar drops back to its neutral
//! style.

use std::time::{Duration, Instant};

use egui::Color32;

use crate::constants::status::MESSAGE_TIMEOUT_MS;
use crate::theme::Colors;

/// Severity of a status message, mapped to a background color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Partial,
    Error,
}

impl StatusKind {
    pub fn background(&self, colors: &Colors) -> Color32 {
        match self {
            StatusKind::Success => colors.status_success,
            StatusKind::Partial => colors.status_partial,
            StatusKind::Error => colors.status_error,
        }
    }
}

/// Holds at most one transient message
#[derive(Debug, Default)]
pub struct StatusBar {
    message: Option<(String, StatusKind, Instant)>,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a message for the configured timeout, replacing any current one.
    pub fn show_message(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.message = Some((text.into(), kind, Instant::now()));
    }

    /// Current message, dropping it once the timeout has passed.
    pub fn current(&mut self) -> Option<(&str, StatusKind)> {
        let expired = self.message.as_ref().map_or(false, |(_, _, shown_at)| {
            shown_at.elapsed() >= Duration::from_millis(MESSAGE_TIMEOUT_MS)
        });
        if expired {
            self.message = None;
        }
        self.message
            .as_ref()
            .map(|(text, kind, _)| (text.as_str(), *kind))
    }

    /// Time left before the current message expires.
    pub fn remaining(&self) -> Option<Duration> {
        self.message.as_ref().map(|(_, _, shown_at)| {
            Duration::from_millis(MESSAGE_TIMEOUT_MS).saturating_sub(shown_at.elapsed())
        })
    }
}
