// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;      // evaluator configuration
pub mod descriptor;  // descriptor + invocation model
pub mod engine;      // query evaluation
pub mod errors;      // error handling
pub mod loader;      // document loading
pub mod observability;

mod evaluate;

pub use engine::{Evaluation, QueryResult};
pub use evaluate::{evaluate, evaluate_with_config, evaluate_with_registry};
pub use loader::DocumentRef;
