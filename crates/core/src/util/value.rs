use crate::config::constants::FALSE_WORDS;
use serde_json::Value;

/// Coerce a JSON value into a boolean
///
/// `"false"`, `"f"`, `"no"` and `"n"` (any case) are false; other values
/// follow their usual truthiness.
pub fn boolenize(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => {
            let lower = s.to_lowercase();
            !s.is_empty() && !FALSE_WORDS.contains(&lower.as_str())
        }
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_boolenize() {
        assert!(boolenize(&json!(true)));
        assert!(!boolenize(&json!(false)));
        assert!(boolenize(&json!(1)));
        assert!(!boolenize(&json!(0)));
        assert!(!boolenize(&json!(0.0)));
        assert!(boolenize(&json!("True")));
        assert!(boolenize(&json!("other words")));
        for word in ["False", "falSE", "false", "F", "f", "No", "NO", "no", "N", "n"] {
            assert!(!boolenize(&json!(word)), "{word} should be false");
        }
        assert!(!boolenize(&json!("")));
        assert!(!boolenize(&Value::Null));
    }
}
