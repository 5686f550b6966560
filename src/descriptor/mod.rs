// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod model;
mod validation;

pub use model::{Attributes, Descriptor, Group, Input, InputType, Invocation, OutputFile};
pub use validation::validate_documents;
