//! Review record validation and coercion
//!
//! Remote review data arrives as untyped JSON; records are filtered and
//! coerced field-by-field before they may replace the built-in placeholders.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Lowest rating a review card can show.
pub const MIN_RATING: u8 = 1;
/// Highest rating a review card can show.
pub const MAX_RATING: u8 = 5;

const DEFAULT_RATING: u8 = 5;

/// A single testimonial entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub name: String,
    pub role: String,
    pub text: String,
    pub rating: u8,
}

/// Built-in reviews shown until remote data arrives (or when it never does).
pub fn placeholder_reviews() -> Vec<ReviewRecord> {
    vec![
        ReviewRecord {
            name: "Elena K.".to_string(),
            role: "Parent".to_string(),
            text: "My daughter went from dreading English homework to chatting \
                   with her teacher every week. The lessons are warm, structured, \
                   and genuinely fun."
                .to_string(),
            rating: DEFAULT_RATING,
        },
        ReviewRecord {
            name: "Sergei M.".to_string(),
            role: "Adult learner".to_string(),
            text: "I needed conversational English for work and got exactly that. \
                   Six months in, I lead calls with our London office without a \
                   script."
                .to_string(),
            rating: DEFAULT_RATING,
        },
    ]
}

/// Filter and coerce a JSON payload into displayable review records.
///
/// Records missing `name`, `text`, or `role` are dropped. Returns an empty
/// list when the payload is not an array; the caller treats an empty result
/// as "keep what is currently displayed".
pub fn clean_reviews(payload: &Value) -> Vec<ReviewRecord> {
    let Some(items) = payload.as_array() else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| {
            let name = non_empty_string(item.get("name"))?;
            let text = non_empty_string(item.get("text"))?;
            let role = non_empty_string(item.get("role"))?;
            Some(ReviewRecord {
                name,
                role,
                text,
                rating: coerce_rating(item.get("rating")),
            })
        })
        .collect()
}

/// Coerce an arbitrary JSON rating into `[MIN_RATING, MAX_RATING]`.
///
/// Numeric strings are accepted; anything that is not a number falls back
/// to the default rating before clamping.
pub fn coerce_rating(value: Option<&Value>) -> u8 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(n) if n.is_finite() => n.clamp(f64::from(MIN_RATING), f64::from(MAX_RATING)) as u8,
        _ => DEFAULT_RATING,
    }
}

fn non_empty_string(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_placeholders_are_two_five_star_reviews() {
        let placeholders = placeholder_reviews();
        assert_eq!(placeholders.len(), 2);
        assert!(placeholders.iter().all(|r| r.rating == 5));
    }

    #[test]
    fn test_records_missing_required_fields_are_dropped() {
        let payload = json!([
            { "name": "Anna", "role": "Parent", "text": "Great lessons", "rating": 4 },
            { "role": "Parent", "text": "No name", "rating": 4 },
            { "name": "Boris", "text": "No role", "rating": 4 },
            { "name": "Vera", "role": "Student", "rating": 4 },
            { "name": "", "role": "Student", "text": "Empty name", "rating": 4 },
        ]);

        let cleaned = clean_reviews(&payload);
        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned[0].name, "Anna");
    }

    #[test]
    fn test_rating_is_coerced_and_clamped() {
        assert_eq!(coerce_rating(Some(&json!(0))), 1);
        assert_eq!(coerce_rating(Some(&json!(9))), 5);
        assert_eq!(coerce_rating(Some(&json!("3"))), 3);
        assert_eq!(coerce_rating(Some(&json!("bogus"))), 5);
        assert_eq!(coerce_rating(Some(&json!(null))), 5);
        assert_eq!(coerce_rating(None), 5);
    }

    #[test]
    fn test_non_array_payloads_yield_nothing() {
        assert!(clean_reviews(&json!(null)).is_empty());
        assert!(clean_reviews(&json!({"reviews": []})).is_empty());
        assert!(clean_reviews(&json!("not an array")).is_empty());
        assert!(clean_reviews(&json!([])).is_empty());
    }

    #[test]
    fn test_single_valid_record_survives_alone() {
        let payload = json!([
            { "name": "Olga", "role": "Parent", "text": "Recommended", "rating": "5" },
        ]);

        let cleaned = clean_reviews(&payload);
        assert_eq!(
            cleaned,
            vec![ReviewRecord {
                name: "Olga".to_string(),
                role: "Parent".to_string(),
                text: "Recommended".to_string(),
                rating: 5,
            }]
        );
    }
}
