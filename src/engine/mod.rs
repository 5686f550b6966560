// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Query evaluation over a descriptor/invocation pair.
//!
//! A query string is parsed ([`query`]), its category selects candidate entities
//! ([`target`]), attribute filters narrow them ([`filter`]), and each survivor is
//! resolved to a value ([`value`]) before [`Evaluator`] assembles the mapping.

pub mod evaluator;
pub mod filter;
pub mod query;
pub mod target;
pub mod value;


pub use evaluator::{Evaluation, Evaluator, QueryResult};
pub use query::{Category, Filter, Query};
