//! Read access to the model a form is bound to.

use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

/// Named-field read access on a bound model.
///
/// Returning `None` means the field is absent; the renderer then fills the
/// value slot with an empty string.
pub trait FieldSource {
    fn field(&self, name: &str) -> Option<String>;
}

/// No model bound.
impl FieldSource for () {
    fn field(&self, _name: &str) -> Option<String> {
        None
    }
}

impl<T: FieldSource + ?Sized> FieldSource for &T {
    fn field(&self, name: &str) -> Option<String> {
        (**self).field(name)
    }
}

impl<T: FieldSource> FieldSource for Option<T> {
    fn field(&self, name: &str) -> Option<String> {
        self.as_ref().and_then(|model| model.field(name))
    }
}

impl FieldSource for HashMap<String, String> {
    fn field(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl FieldSource for BTreeMap<String, String> {
    fn field(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// JSON objects: strings verbatim, scalars via display, `null` as absent,
/// nested arrays and objects as compact JSON.
///
/// Booleans render as `true` / `false`, not as `1` / an empty string.
impl FieldSource for Value {
    fn field(&self, name: &str) -> Option<String> {
        match self.get(name)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) => Some(n.to_string()),
            nested => Some(nested.to_string()),
        }
    }
}

/// Adapter turning a closure into a [`FieldSource`].
pub struct FieldFn<F>(pub F);

impl<F> FieldSource for FieldFn<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn field(&self, name: &str) -> Option<String> {
        (self.0)(name)
    }
}

/// Value for `name` on `model`, or empty when absent.
pub fn field_value(model: &dyn FieldSource, name: &str) -> String {
    model.field(name).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unbound_model_has_no_fields() {
        assert_eq!(field_value(&(), "email"), "");
    }

    #[test]
    fn test_map_models() {
        let mut map = HashMap::new();
        map.insert("email".to_string(), "a@b.com".to_string());
        assert_eq!(map.field("email").as_deref(), Some("a@b.com"));
        assert_eq!(map.field("name"), None);

        let tree: BTreeMap<String, String> = map.into_iter().collect();
        assert_eq!(field_value(&tree, "email"), "a@b.com");
    }

    #[test]
    fn test_json_model_conversions() {
        let model = json!({
            "email": "a@b.com",
            "age": 42,
            "active": true,
            "nickname": null,
            "tags": ["x", "y"]
        });

        assert_eq!(field_value(&model, "email"), "a@b.com");
        assert_eq!(field_value(&model, "age"), "42");
        assert_eq!(field_value(&model, "active"), "true");
        assert_eq!(model.field("nickname"), None);
        assert_eq!(field_value(&model, "tags"), r#"["x","y"]"#);
        assert_eq!(model.field("missing"), None);
    }

    #[test]
    fn test_non_object_json_has_no_fields() {
        assert_eq!(json!("plain").field("email"), None);
    }

    #[test]
    fn test_closure_model() {
        let model = FieldFn(|name: &str| (name == "id").then(|| "7".to_string()));
        assert_eq!(field_value(&model, "id"), "7");
        assert_eq!(field_value(&model, "other"), "");
    }

    #[test]
    fn test_optional_model() {
        let none: Option<HashMap<String, String>> = None;
        assert_eq!(none.field("email"), None);
    }
}
