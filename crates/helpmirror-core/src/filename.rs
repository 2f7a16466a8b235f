//! Derived filenames: the stable join key between pipeline stages.
//!
//! Every cached artifact is named after the item that produced it, so the
//! derivation must be pure and deterministic: same four identity fields,
//! same name, on every run. Two items sharing all four fields collide and
//! overwrite each other's artifacts; the stages log a warning when they see
//! a repeat but otherwise accept it.

use crate::manifest::Item;
use serde_json::Value;

const UNKNOWN_CATEGORY: &str = "unknown_category";
const UNKNOWN_ID: &str = "unknown_id";
const UNKNOWN_ORDER: &str = "unknown_order";
const UNKNOWN_NAME: &str = "unknown_name";

const MAX_LEN: usize = 200;

/// Base name (no extension) for an item's cached artifacts:
/// `helpCategoryId_id_order_name`, sanitized.
pub fn derive_filename(item: &Item) -> String {
    let joined = format!(
        "{}_{}_{}_{}",
        field_text(&item.help_category_id, UNKNOWN_CATEGORY),
        field_text(&item.id, UNKNOWN_ID),
        field_text(&item.order, UNKNOWN_ORDER),
        field_text(&item.name, UNKNOWN_NAME),
    );
    sanitize(&joined)
}

/// Render an identity field as text: strings verbatim, other scalars via
/// their JSON rendering, absent or null via the placeholder.
fn field_text(value: &Option<Value>, placeholder: &str) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => placeholder.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Sanitize a candidate name:
/// - whitespace becomes `_`
/// - everything outside word chars, `-`, `.` is dropped
/// - underscore runs collapse; no leading or trailing underscores
/// - capped at 200 chars on a char boundary
pub fn sanitize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_underscore = false;

    for c in name.trim().chars() {
        let mapped = if c.is_whitespace() || c == '_' {
            Some('_')
        } else if c.is_alphanumeric() || c == '-' || c == '.' {
            Some(c)
        } else {
            None
        };

        match mapped {
            Some('_') => {
                if !prev_underscore {
                    out.push('_');
                }
                prev_underscore = true;
            }
            Some(c) => {
                out.push(c);
                prev_underscore = false;
            }
            None => {}
        }
    }

    let capped: String = out.trim_matches('_').chars().take(MAX_LEN).collect();
    // The cap can re-expose a trailing underscore.
    let trimmed = capped.trim_end_matches('_');
    if trimmed.is_empty() {
        return "unnamed".to_string();
    }
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(v: serde_json::Value) -> Item {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn derive_joins_four_fields() {
        let it = item(json!({"helpCategoryId": "c", "id": "1", "order": "1", "name": "My Page!"}));
        assert_eq!(derive_filename(&it), "c_1_1_My_Page");
    }

    #[test]
    fn derive_is_deterministic() {
        let it = item(json!({"helpCategoryId": "cat", "id": "9", "order": "2", "name": "Setup Guide"}));
        let first = derive_filename(&it);
        for _ in 0..10 {
            assert_eq!(derive_filename(&it), first);
        }
        assert_eq!(first, "cat_9_2_Setup_Guide");
    }

    #[test]
    fn missing_fields_use_placeholders() {
        let it = item(json!({}));
        assert_eq!(
            derive_filename(&it),
            "unknown_category_unknown_id_unknown_order_unknown_name"
        );
    }

    #[test]
    fn numeric_fields_are_stringified() {
        let it = item(json!({"helpCategoryId": 3, "id": 41, "order": 2, "name": "FAQ"}));
        assert_eq!(derive_filename(&it), "3_41_2_FAQ");
    }

    #[test]
    fn sanitize_collapses_and_trims_underscores() {
        assert_eq!(sanitize("a  b___c"), "a_b_c");
        assert_eq!(sanitize("__x__"), "x");
        assert_eq!(sanitize("  x  "), "x");
    }

    #[test]
    fn sanitize_strips_punctuation_keeps_dash_dot() {
        assert_eq!(sanitize("v1.2-beta (draft?)"), "v1.2-beta_draft");
        assert_eq!(sanitize("a/b\\c:d"), "abcd");
    }

    #[test]
    fn sanitize_caps_length_without_trailing_underscore() {
        let long = "a".repeat(300);
        assert_eq!(sanitize(&long).chars().count(), 200);

        let mut tricky = "a".repeat(199);
        tricky.push_str("_b");
        let s = sanitize(&tricky);
        assert!(s.chars().count() <= 200);
        assert!(!s.ends_with('_'));
    }

    #[test]
    fn sanitize_never_empty() {
        assert_eq!(sanitize("???"), "unnamed");
        assert_eq!(sanitize(""), "unnamed");
    }

    #[test]
    fn sanitize_output_charset() {
        let s = sanitize("Weird  name!! with, stuff… v2.0");
        assert!(s
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-' || c == '.'));
        assert!(!s.contains("__"));
        assert!(!s.starts_with('_') && !s.ends_with('_'));
    }
}
