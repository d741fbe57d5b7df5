// File: src/record.rs
// Purpose: Property maps over JSON records for declaratively configured models

use crate::accessor::PropertyMap;
use crate::value::PropertyValue;
use serde_json::Value;
use thiserror::Error;

/// A JSON value with no [`PropertyValue`] counterpart
#[derive(Debug, Error)]
#[error("unsupported JSON {kind} value")]
pub struct UnsupportedValue {
    pub kind: &'static str,
}

/// Build a property map reading `names` from a JSON object
///
/// A missing key or JSON `null` reads as null. Numbers and strings convert;
/// booleans, arrays and objects make the getter fail.
pub fn record_properties(model_name: &str, names: &[String]) -> PropertyMap<Value> {
    names
        .iter()
        .fold(PropertyMap::<Value>::named(model_name), |map, name| {
            let key = name.clone();
            map.try_property(name.clone(), move |record: &Value| read(record, &key))
        })
}

fn read(record: &Value, key: &str) -> Result<Option<PropertyValue>, UnsupportedValue> {
    match record.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                Ok(Some(PropertyValue::Integer(i as i128)))
            } else if let Some(u) = n.as_u64() {
                Ok(Some(PropertyValue::Integer(u as i128)))
            } else {
                n.as_f64()
                    .map(|f| Some(PropertyValue::Float(f)))
                    .ok_or(UnsupportedValue { kind: "number" })
            }
        }
        Some(Value::String(s)) => Ok(Some(PropertyValue::Text(s.clone()))),
        Some(Value::Bool(_)) => Err(UnsupportedValue { kind: "boolean" }),
        Some(Value::Array(_)) => Err(UnsupportedValue { kind: "array" }),
        Some(Value::Object(_)) => Err(UnsupportedValue { kind: "object" }),
    }
}
