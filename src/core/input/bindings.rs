//! Key-to-lane bindings.

use std::collections::HashMap;

/// Injective mapping from input keys to lane indices.
///
/// Exactly one lane per key; keys are normalized to ASCII lowercase so
/// a press with shift/caps held still resolves.
#[derive(Debug, Clone)]
pub struct LaneBindings {
    lane_map: HashMap<char, usize>,
    lane_count: usize,
}

impl LaneBindings {
    /// Default 4-lane layout: a / s / d / f.
    pub fn new() -> Self {
        Self::from_keys(&['a', 's', 'd', 'f']).expect("default bindings are valid")
    }

    /// Builds bindings from an ordered key list (lane 0 first).
    ///
    /// Rejects empty lists and duplicate keys: a duplicate would make
    /// two lanes reachable from one key.
    pub fn from_keys(keys: &[char]) -> Result<Self, String> {
        if keys.is_empty() {
            return Err("no keys bound".to_string());
        }
        let mut lane_map = HashMap::new();
        for (lane, key) in keys.iter().enumerate() {
            let normalized = key.to_ascii_lowercase();
            if lane_map.insert(normalized, lane).is_some() {
                return Err(format!("key '{}' bound to more than one lane", normalized));
            }
        }
        Ok(Self {
            lane_map,
            lane_count: keys.len(),
        })
    }

    /// Builds bindings from the config key list, falling back to the
    /// defaults if the list is invalid.
    pub fn from_config(keys: &[char]) -> Self {
        match Self::from_keys(keys) {
            Ok(bindings) => bindings,
            Err(e) => {
                log::warn!("INPUT: Invalid key bindings ({}), using defaults", e);
                Self::new()
            }
        }
    }

    /// Resolves a raw key to its lane, or `None` for unbound keys.
    pub fn lane_for(&self, key: char) -> Option<usize> {
        self.lane_map.get(&key.to_ascii_lowercase()).copied()
    }

    pub fn lane_count(&self) -> usize {
        self.lane_count
    }
}

impl Default for LaneBindings {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_maps_asdf_in_order() {
        let bindings = LaneBindings::new();
        assert_eq!(bindings.lane_for('a'), Some(0));
        assert_eq!(bindings.lane_for('s'), Some(1));
        assert_eq!(bindings.lane_for('d'), Some(2));
        assert_eq!(bindings.lane_for('f'), Some(3));
        assert_eq!(bindings.lane_count(), 4);
    }

    #[test]
    fn unbound_keys_resolve_to_none() {
        let bindings = LaneBindings::new();
        assert_eq!(bindings.lane_for('x'), None);
        assert_eq!(bindings.lane_for(' '), None);
    }

    #[test]
    fn input_is_case_insensitive() {
        let bindings = LaneBindings::new();
        assert_eq!(bindings.lane_for('A'), Some(0));
        assert_eq!(bindings.lane_for('F'), Some(3));
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        assert!(LaneBindings::from_keys(&['a', 'a']).is_err());
        assert!(LaneBindings::from_keys(&['a', 'A']).is_err());
        assert!(LaneBindings::from_keys(&[]).is_err());
    }

    #[test]
    fn invalid_config_falls_back_to_defaults() {
        let bindings = LaneBindings::from_config(&['q', 'q']);
        assert_eq!(bindings.lane_for('a'), Some(0));
        assert_eq!(bindings.lane_count(), 4);
    }
}
