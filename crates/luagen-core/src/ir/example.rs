use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// A representative example value mirroring a schema's shape. Object entries
/// keep the declaration order of the properties they were synthesized from.
#[derive(Debug, Clone, PartialEq)]
pub enum ExampleValue {
    Null,
    Bool(bool),
    Integer(i64),
    Number(f64),
    String(String),
    Array(Vec<ExampleValue>),
    Object(Vec<(String, ExampleValue)>),
}

impl ExampleValue {
    /// Convert an author-supplied JSON example verbatim. Object key order is
    /// preserved (`serde_json` is built with `preserve_order`).
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => ExampleValue::Null,
            serde_json::Value::Bool(b) => ExampleValue::Bool(*b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    ExampleValue::Integer(i)
                } else {
                    ExampleValue::Number(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::String(s) => ExampleValue::String(s.clone()),
            serde_json::Value::Array(items) => {
                ExampleValue::Array(items.iter().map(ExampleValue::from_json).collect())
            }
            serde_json::Value::Object(entries) => ExampleValue::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), ExampleValue::from_json(v)))
                    .collect(),
            ),
        }
    }
}

impl Serialize for ExampleValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ExampleValue::Null => serializer.serialize_unit(),
            ExampleValue::Bool(b) => serializer.serialize_bool(*b),
            ExampleValue::Integer(i) => serializer.serialize_i64(*i),
            ExampleValue::Number(n) => serializer.serialize_f64(*n),
            ExampleValue::String(s) => serializer.serialize_str(s),
            ExampleValue::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            ExampleValue::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_json_scalars() {
        assert_eq!(
            ExampleValue::from_json(&serde_json::json!(true)),
            ExampleValue::Bool(true)
        );
        assert_eq!(
            ExampleValue::from_json(&serde_json::json!(42)),
            ExampleValue::Integer(42)
        );
        assert_eq!(
            ExampleValue::from_json(&serde_json::json!("hi")),
            ExampleValue::String("hi".to_string())
        );
    }

    #[test]
    fn from_json_keeps_object_order() {
        let value: serde_json::Value =
            serde_json::from_str(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        let example = ExampleValue::from_json(&value);
        match example {
            ExampleValue::Object(entries) => {
                let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
                assert_eq!(keys, vec!["z", "a", "m"]);
            }
            other => panic!("expected object, got {other:?}"),
        }
    }
}
