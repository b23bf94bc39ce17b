use serde::{Deserialize, Serialize};

/// A single career stat value as shown on the profile page.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    String(String),
}

impl Value {
    /// Integer first, then float, otherwise the text itself.
    pub fn coerce(text: &str) -> Value {
        if let Ok(i) = text.parse::<i64>() {
            return Value::Int(i);
        }
        match text.parse::<f64>() {
            Ok(f) if f.is_finite() => Value::Float(f),
            _ => Value::String(text.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Value;

    #[test]
    fn coerces_integers() {
        assert_eq!(Value::coerce("1234"), Value::Int(1234));
        assert_eq!(Value::coerce("-7"), Value::Int(-7));
    }

    #[test]
    fn coerces_floats() {
        assert_eq!(Value::coerce("0.52"), Value::Float(0.52));
        assert_eq!(Value::coerce("12.0"), Value::Float(12.0));
    }

    #[test]
    fn falls_back_to_text() {
        assert_eq!(Value::coerce("01:02:03"), Value::String("01:02:03".to_string()));
        assert_eq!(Value::coerce("45%"), Value::String("45%".to_string()));
        assert_eq!(Value::coerce("NaN"), Value::String("NaN".to_string()));
        assert_eq!(Value::coerce(""), Value::String("".to_string()));
    }

    #[test]
    fn serializes_untagged() {
        let values = vec![Value::Int(3), Value::Float(1.5), Value::String("--".to_string())];
        assert_eq!(serde_json::to_string(&values).unwrap(), r#"[3,1.5,"--"]"#);
    }
}
