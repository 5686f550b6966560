// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for all diagnostic and operational
//! logging in the crate. Message types follow a struct-based pattern with `Display`
//! trait implementation to:
//!
//! * Eliminate magic strings scattered throughout the codebase
//! * Keep log wording in one place
//! * Provide consistent, structured logging output
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::engine` - query parsing and evaluation events
//! * `messages::loader` - document and configuration loading events
//! * `messages::validation` - descriptor/invocation consistency errors
//!
//! # Usage
//!
//! ```rust
//! use descriptor_query::observability::messages::engine::QueryEvaluated;
//! use descriptor_query::observability::messages::StructuredLog;
//!
//! let msg = QueryEvaluated {
//!     query: "inputs/type=Flag",
//!     candidate_count: 8,
//!     match_count: 1,
//! };
//!
//! msg.log();
//! ```

pub mod messages;
