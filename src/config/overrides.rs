use serde::Serialize;
use serde_json::Value;

/// Drop unset CLI values so they don't shadow lower config layers.
///
/// Nulls (options that were not given), empty arrays and empty objects are
/// removed at every level.
pub fn filter_unset<T: Serialize>(input: T) -> serde_json::Result<Value> {
    let mut value = serde_json::to_value(input)?;
    filter_unset_recursive(&mut value);
    Ok(value)
}

fn filter_unset_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (_, v) in map.iter_mut() {
                filter_unset_recursive(v);
            }

            map.retain(|_, v| match v {
                Value::Null => false,
                Value::Array(arr) => !arr.is_empty(),
                Value::Object(obj) => !obj.is_empty(),
                _ => true,
            });
        }
        Value::Array(arr) => {
            for item in arr.iter_mut() {
                filter_unset_recursive(item);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_removes_nulls_and_empties() {
        let input = json!({
            "input": null,
            "layout": "per-section",
            "outputs": {},
            "tags": [],
            "startup_hook": false,
        });

        assert_eq!(
            filter_unset(input).unwrap(),
            json!({ "layout": "per-section", "startup_hook": false })
        );
    }

    #[test]
    fn test_keeps_nested_values() {
        let input = json!({ "outputs": { "Server": "server.go", "Cache": null } });
        assert_eq!(
            filter_unset(input).unwrap(),
            json!({ "outputs": { "Server": "server.go" } })
        );
    }

    #[test]
    fn test_serialization_error_is_returned() {
        use std::collections::BTreeMap;

        // JSON object keys must be strings
        let mut input = BTreeMap::new();
        input.insert((1, 2), "value");
        assert!(filter_unset(input).is_err());
    }
}
