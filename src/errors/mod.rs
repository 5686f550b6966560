// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod evaluate;
mod load;

pub use config::{ConfigError, ValidationError};
pub use evaluate::EvaluateError;
pub use load::LoadError;
