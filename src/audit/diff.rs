//! Diff generation for audit logging
//!
//! Summarizes what changed between two JSON snapshots of an entity.

use serde_json::Value;

/// Generate a human-readable diff between two JSON values
///
/// Nested objects are walked and reported with dotted paths, e.g.
/// `month.total: 0 -> 500000`. Returns `None` when nothing changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    let mut changes = Vec::new();
    collect_changes(before, after, "", &mut changes);

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

fn collect_changes(before: &Value, after: &Value, prefix: &str, changes: &mut Vec<String>) {
    let field = |key: &str| {
        if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", prefix, key)
        }
    };

    match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            for (key, before_val) in before_obj {
                match after_obj.get(key) {
                    Some(after_val) => collect_changes(before_val, after_val, &field(key), changes),
                    None => changes.push(format!(
                        "{}: {} -> (removed)",
                        field(key),
                        format_value(before_val)
                    )),
                }
            }

            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) {
                    changes.push(format!(
                        "{}: (added) -> {}",
                        field(key),
                        format_value(after_val)
                    ));
                }
            }
        }
        _ if before != after => {
            let label = if prefix.is_empty() {
                String::new()
            } else {
                format!("{}: ", prefix)
            };
            changes.push(format!(
                "{}{} -> {}",
                label,
                format_value(before),
                format_value(after)
            ));
        }
        _ => {}
    }
}

/// Format a JSON value for human-readable display
fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => {
            // Truncate long strings
            if s.chars().count() > 50 {
                let head: String = s.chars().take(47).collect();
                format!("\"{}...\"", head)
            } else {
                format!("\"{}\"", s)
            }
        }
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_changes() {
        let value = json!({"today": {"total": 0, "spent": 0}});
        assert_eq!(generate_diff(&value, &value), None);
    }

    #[test]
    fn test_nested_change_uses_dotted_path() {
        let before = json!({"month": {"total": 0, "spent": 0}});
        let after = json!({"month": {"total": 500000, "spent": 0}});
        assert_eq!(
            generate_diff(&before, &after),
            Some("month.total: 0 -> 500000".to_string())
        );
    }

    #[test]
    fn test_added_and_removed_fields() {
        let before = json!({"a": 1});
        let after = json!({"b": "x"});
        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("a: 1 -> (removed)"));
        assert!(diff.contains("b: (added) -> \"x\""));
    }

    #[test]
    fn test_scalar_change() {
        assert_eq!(
            generate_diff(&json!(1), &json!(2)),
            Some("1 -> 2".to_string())
        );
    }

    #[test]
    fn test_long_strings_are_truncated() {
        let long = "x".repeat(80);
        let diff = generate_diff(&json!({"s": ""}), &json!({"s": long})).unwrap();
        assert!(diff.ends_with("...\""));
    }
}
