// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Referential integrity checks for a descriptor/invocation pair.
//!
//! Query evaluation joins the invocation to the descriptor by input id and expands
//! groups through their member ids. These checks make sure those joins are sound
//! before any query runs.
//!
//! # Validation Pipeline
//!
//! 1. **Uniqueness Validation**: ids are unique within inputs, output-files and groups
//! 2. **Group Member Validation**: every group member is a declared input
//! 3. **Invocation Validation**: every invocation key is a declared input
//!
//! All three checks run and their errors accumulate, so a caller sees every problem at once.
//!
//! # Example
//! ```rust
//! use descriptor_query::descriptor::{validate_documents, Descriptor, Invocation};
//! use descriptor_query::errors::ValidationError;
//!
//! let descriptor = Descriptor::from_json(r#"{
//!     "name": "tool",
//!     "inputs": [{ "id": "a", "type": "String" }]
//! }"#).unwrap();
//! let invocation = Invocation::from_json(r#"{ "b": "x" }"#).unwrap();
//!
//! let errors = validate_documents(&descriptor, &invocation).unwrap_err();
//! assert_eq!(errors, vec![ValidationError::UnknownInvocationInput { input_id: "b".to_string() }]);
//! ```

use std::collections::HashSet;

use crate::descriptor::{Attributes, Descriptor, Invocation};
use crate::errors::ValidationError;
use crate::observability::messages::validation::{
    DuplicateIdDetected, UnknownGroupMember, UnknownInvocationInput, ValidationFailed,
};
use crate::observability::messages::StructuredLog;

/// Validates a descriptor and invocation for referential integrity.
///
/// # Returns
///
/// * `Ok(())` - Every id is unique and every reference resolves
/// * `Err(Vec<ValidationError>)` - All problems found, in pipeline order
pub fn validate_documents(
    descriptor: &Descriptor,
    invocation: &Invocation,
) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    errors.extend(duplicate_ids("inputs", &descriptor.inputs));
    errors.extend(duplicate_ids("output-files", &descriptor.output_files));
    errors.extend(duplicate_ids("groups", &descriptor.groups));

    let input_ids: HashSet<&str> = descriptor.inputs.iter().map(|i| i.id.as_str()).collect();

    if let Err(member_errors) = validate_group_members(descriptor, &input_ids) {
        errors.extend(member_errors);
    }

    if let Err(invocation_errors) = validate_invocation_references(invocation, &input_ids) {
        errors.extend(invocation_errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        ValidationFailed {
            error_count: errors.len(),
        }
        .log();
        Err(errors)
    }
}

fn duplicate_ids<T: Attributes>(collection: &'static str, entities: &[T]) -> Vec<ValidationError> {
    let mut seen = HashSet::new();
    let mut errors = Vec::new();

    for entity in entities {
        if !seen.insert(entity.id()) {
            DuplicateIdDetected {
                collection,
                id: entity.id(),
            }
            .log();
            errors.push(ValidationError::DuplicateId {
                collection,
                id: entity.id().to_string(),
            });
        }
    }

    errors
}

fn validate_group_members(
    descriptor: &Descriptor,
    input_ids: &HashSet<&str>,
) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for group in &descriptor.groups {
        for member in &group.members {
            if !input_ids.contains(member.as_str()) {
                UnknownGroupMember {
                    group_id: &group.id,
                    member_id: member,
                }
                .log();
                errors.push(ValidationError::UnknownGroupMember {
                    group_id: group.id.clone(),
                    member_id: member.clone(),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_invocation_references(
    invocation: &Invocation,
    input_ids: &HashSet<&str>,
) -> Result<(), Vec<ValidationError>> {
    let errors: Vec<ValidationError> = invocation
        .ids()
        .filter(|id| !input_ids.contains(id))
        .map(|id| {
            UnknownInvocationInput { input_id: id }.log();
            ValidationError::UnknownInvocationInput {
                input_id: id.to_string(),
            }
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(text: &str) -> Descriptor {
        Descriptor::from_json(text).unwrap()
    }

    #[test]
    fn test_validate_documents_table_driven() {
        struct TestCase {
            name: &'static str,
            descriptor: &'static str,
            invocation: &'static str,
            expected: Result<(), Vec<ValidationError>>,
        }

        let test_cases = vec![
            TestCase {
                name: "consistent documents",
                descriptor: r#"{
                    "inputs": [{ "id": "a", "type": "String" }, { "id": "b", "type": "Number" }],
                    "groups": [{ "id": "g", "members": ["a", "b"] }]
                }"#,
                invocation: r#"{ "a": "x" }"#,
                expected: Ok(()),
            },
            TestCase {
                name: "duplicate input id",
                descriptor: r#"{
                    "inputs": [{ "id": "a", "type": "String" }, { "id": "a", "type": "Flag" }]
                }"#,
                invocation: "{}",
                expected: Err(vec![ValidationError::DuplicateId {
                    collection: "inputs",
                    id: "a".to_string(),
                }]),
            },
            TestCase {
                name: "duplicate output id",
                descriptor: r#"{
                    "output-files": [
                        { "id": "o", "path-template": "a" },
                        { "id": "o", "path-template": "b" }
                    ]
                }"#,
                invocation: "{}",
                expected: Err(vec![ValidationError::DuplicateId {
                    collection: "output-files",
                    id: "o".to_string(),
                }]),
            },
            TestCase {
                name: "group member missing",
                descriptor: r#"{
                    "inputs": [{ "id": "a", "type": "String" }],
                    "groups": [{ "id": "g", "members": ["a", "nope"] }]
                }"#,
                invocation: "{}",
                expected: Err(vec![ValidationError::UnknownGroupMember {
                    group_id: "g".to_string(),
                    member_id: "nope".to_string(),
                }]),
            },
            TestCase {
                name: "invocation references undeclared input",
                descriptor: r#"{ "inputs": [{ "id": "a", "type": "String" }] }"#,
                invocation: r#"{ "a": "x", "z": 1 }"#,
                expected: Err(vec![ValidationError::UnknownInvocationInput {
                    input_id: "z".to_string(),
                }]),
            },
        ];

        for case in test_cases {
            let invocation = Invocation::from_json(case.invocation).unwrap();
            let result = validate_documents(&descriptor(case.descriptor), &invocation);
            assert_eq!(result, case.expected, "case: {}", case.name);
        }
    }

    #[test]
    fn errors_accumulate_across_checks() {
        let d = descriptor(
            r#"{
                "inputs": [{ "id": "a", "type": "String" }, { "id": "a", "type": "String" }],
                "groups": [{ "id": "g", "members": ["missing"] }]
            }"#,
        );
        let invocation = Invocation::from_json(r#"{ "ghost": true }"#).unwrap();

        let errors = validate_documents(&d, &invocation).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(matches!(errors[0], ValidationError::DuplicateId { .. }));
        assert!(matches!(errors[1], ValidationError::UnknownGroupMember { .. }));
        assert!(matches!(errors[2], ValidationError::UnknownInvocationInput { .. }));
    }
}
