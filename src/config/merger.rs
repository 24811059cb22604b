//! Layering of YAML configuration values.
//!
//! # Merge Rules
//!
//! - Mappings merge key by key, recursively
//! - Sequences and scalars in the overlay replace the base value
//! - A null in the overlay removes the key

use serde_yaml::Value;

/// Merge `overlay` on top of `base`.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    let (Value::Mapping(base_map), Value::Mapping(overlay_map)) = (base, overlay) else {
        return overlay.clone();
    };

    let mut merged = base_map.clone();
    for (key, value) in overlay_map {
        if value.is_null() {
            merged.remove(key);
            continue;
        }

        let next = match base_map.get(key) {
            Some(existing) => deep_merge(existing, value),
            None => value.clone(),
        };
        merged.insert(key.clone(), next);
    }

    Value::Mapping(merged)
}

/// Merge layers in order; later layers win.
pub fn merge_configs(layers: &[Value]) -> Value {
    layers
        .iter()
        .fold(Value::Mapping(Default::default()), |acc, layer| {
            deep_merge(&acc, layer)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn nested_mappings_merge() {
        let merged = deep_merge(
            &yaml("github:\n  owner: a\n  repo: r\n"),
            &yaml("github:\n  owner: b\n"),
        );
        assert_eq!(merged, yaml("github:\n  owner: b\n  repo: r\n"));
    }

    #[test]
    fn scalar_overlay_replaces() {
        let merged = deep_merge(&yaml("channel: production"), &yaml("channel: development"));
        assert_eq!(merged, yaml("channel: development"));
    }

    #[test]
    fn sequences_are_replaced() {
        let merged = deep_merge(&yaml("a: [1, 2]"), &yaml("a: [3]"));
        assert_eq!(merged, yaml("a: [3]"));
    }

    #[test]
    fn null_removes_key() {
        let merged = deep_merge(&yaml("store_path: /tmp/x\nchannel: dev"), &yaml("store_path: ~"));
        assert_eq!(merged, yaml("channel: dev"));
    }

    #[test]
    fn merge_configs_applies_in_order() {
        let merged = merge_configs(&[
            yaml("simulated_delay_ms: 1"),
            yaml("simulated_delay_ms: 2"),
            yaml("request_timeout_secs: 3"),
        ]);
        assert_eq!(merged, yaml("simulated_delay_ms: 2\nrequest_timeout_secs: 3"));
    }

    #[test]
    fn merge_configs_empty() {
        assert_eq!(merge_configs(&[]), Value::Mapping(Default::default()));
    }
}
