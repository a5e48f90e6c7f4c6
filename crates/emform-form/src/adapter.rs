//! # Dropdown Value Adapter
//!
//! Dropdown widgets report a sequence (`[]` or `["Sales"]`); the schema
//! expects a scalar. The conversion happens here, at the boundary between
//! the form and the validator, on a copy of the submission.
//!
//! Contract of [`first_or_default`]:
//!
//! | input | output |
//! |---|---|
//! | `[first, ...]` | `first` |
//! | `[]` | `""` |
//! | any scalar | unchanged |

use serde_json::Value;

use emform_core::FieldValues;

/// Fields of the employee form whose widget reports a sequence.
pub const DROPDOWN_FIELDS: &[&str] = &["department"];

/// Sequence → first element (or `""` when empty); scalar → itself.
pub fn first_or_default(value: &Value) -> Value {
    match value {
        Value::Array(items) => items
            .first()
            .cloned()
            .unwrap_or_else(|| Value::String(String::new())),
        other => other.clone(),
    }
}

/// Copy of `data` with every field in `sequence_fields` passed through
/// [`first_or_default`]. Absent fields stay absent.
pub fn normalize_submission(data: &FieldValues, sequence_fields: &[&str]) -> FieldValues {
    let mut normalized = data.clone();
    for field in sequence_fields {
        if let Some(value) = normalized.get_mut(*field) {
            *value = first_or_default(value);
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sequence_takes_first() {
        assert_eq!(first_or_default(&json!(["Sales"])), json!("Sales"));
        assert_eq!(first_or_default(&json!(["Sales", "Finance"])), json!("Sales"));
    }

    #[test]
    fn test_empty_sequence_is_empty_string() {
        assert_eq!(first_or_default(&json!([])), json!(""));
    }

    #[test]
    fn test_scalars_pass_through() {
        for v in [json!("Sales"), json!(null), json!(3), json!(true)] {
            assert_eq!(first_or_default(&v), v);
        }
    }

    #[test]
    fn test_normalize_only_touches_listed_fields() {
        let data: FieldValues = json!({
            "department": ["Sales"],
            "tags": ["a", "b"]
        })
        .as_object()
        .cloned()
        .unwrap();

        let normalized = normalize_submission(&data, DROPDOWN_FIELDS);
        assert_eq!(normalized["department"], json!("Sales"));
        assert_eq!(normalized["tags"], json!(["a", "b"]));
        assert_eq!(data["department"], json!(["Sales"]), "input must not change");
    }

    #[test]
    fn test_normalize_leaves_absent_fields_absent() {
        let data = FieldValues::new();
        assert!(normalize_submission(&data, DROPDOWN_FIELDS).is_empty());
    }
}
