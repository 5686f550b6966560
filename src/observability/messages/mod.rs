// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for the human-readable line and
//! [`StructuredLog`] to emit the same event with its fields attached.
//!
//! * `engine` - query parsing and evaluation events
//! * `loader` - document and configuration loading events
//! * `validation` - descriptor/invocation consistency errors

use tracing::Span;

pub mod engine;
pub mod loader;
pub mod validation;

/// A log event that knows its own level and structured fields.
pub trait StructuredLog {
    /// Emit the event at its level with its fields attached.
    fn log(&self);

    /// Open a span carrying the event's fields.
    fn span(&self, name: &str) -> Span;
}
