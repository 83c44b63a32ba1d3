//! Conversions from parsed TOML and JSON values.
//!
//! Tables and objects keep their document order, so a definition read from
//! a file renders with its keys in the order the author wrote them.

use crate::Renderable;

impl From<&toml::Value> for Renderable {
    fn from(value: &toml::Value) -> Self {
        match value {
            toml::Value::String(s) => Renderable::string(s),
            toml::Value::Integer(i) => Renderable::int(*i),
            toml::Value::Float(f) => Renderable::float(*f),
            toml::Value::Boolean(b) => Renderable::bool(*b),
            toml::Value::Datetime(dt) => Renderable::string(dt.to_string()),
            toml::Value::Array(items) => Renderable::List(items.iter().map(Into::into).collect()),
            toml::Value::Table(table) => Renderable::Map(
                table
                    .iter()
                    .map(|(k, v)| (k.clone(), Renderable::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&serde_json::Value> for Renderable {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Renderable::null(),
            serde_json::Value::Bool(b) => Renderable::bool(*b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Renderable::int(i)
                } else if n.is_f64() {
                    Renderable::float(n.as_f64().unwrap_or_default())
                } else {
                    // u64 beyond i64::MAX
                    Renderable::raw(n.to_string())
                }
            }
            serde_json::Value::String(s) => Renderable::string(s),
            serde_json::Value::Array(items) => {
                Renderable::List(items.iter().map(Into::into).collect())
            }
            serde_json::Value::Object(object) => Renderable::Map(
                object
                    .iter()
                    .map(|(k, v)| (k.clone(), Renderable::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<serde_json::Value> for Renderable {
    fn from(value: serde_json::Value) -> Self {
        Renderable::from(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_table_keeps_document_order() {
        let value: toml::Value = toml::from_str(
            r#"
            zeta = "last letter"
            alpha = 1
            weight = 0.5
            enabled = true
            tags = ["a", "b"]
            "#,
        )
        .expect("valid toml");

        let Renderable::Map(entries) = Renderable::from(&value) else {
            panic!("Expected Map variant");
        };
        let keys: Vec<_> = entries.keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha", "weight", "enabled", "tags"]);
        assert_eq!(entries["alpha"], Renderable::int(1));
        assert_eq!(entries["weight"], Renderable::float(0.5));
        assert_eq!(entries["tags"], Renderable::list(["a", "b"]));
    }

    #[test]
    fn test_json_values() {
        let value = serde_json::json!({
            "id": "cat",
            "count": 3,
            "ratio": 1.5,
            "parent": null,
            "items": [true, false]
        });

        let Renderable::Map(entries) = Renderable::from(value) else {
            panic!("Expected Map variant");
        };
        let keys: Vec<_> = entries.keys().map(String::as_str).collect();
        assert_eq!(keys, ["id", "count", "ratio", "parent", "items"]);
        assert_eq!(entries["parent"], Renderable::null());
        assert_eq!(entries["ratio"], Renderable::float(1.5));
        assert_eq!(entries["items"], Renderable::list([true, false]));
    }

    #[test]
    fn test_json_large_unsigned_is_raw() {
        let value = serde_json::json!(u64::MAX);
        assert_eq!(Renderable::from(value), Renderable::raw(u64::MAX.to_string()));
    }
}
