//! Startup configuration from the environment.
//!
//! - `FARAWAY_SEED`: start with the demo items (`true`/`false`, default `true`)
//! - `FARAWAY_SORT`: initial sort criterion (`input`, `description`, `packed`)
//!
//! Log filtering is `RUST_LOG`, handled by `faraway-observability`.

use faraway_packing::SortCriterion;

pub const SEED_VAR: &str = "FARAWAY_SEED";
pub const SORT_VAR: &str = "FARAWAY_SORT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: bool,
    pub sort_by: SortCriterion,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: true,
            sort_by: SortCriterion::Input,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable values are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(SEED_VAR) {
            match parse_flag(&raw) {
                Some(seed) => config.seed = seed,
                None => tracing::warn!(var = SEED_VAR, value = %raw, "expected a boolean; using default"),
            }
        }

        if let Some(raw) = lookup(SORT_VAR) {
            match raw.parse::<SortCriterion>() {
                Ok(sort_by) => config.sort_by = sort_by,
                Err(err) => tracing::warn!(var = SORT_VAR, error = %err, "using default sort"),
            }
        }

        config
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        assert_eq!(config_from(&[]), AppConfig::default());
    }

    #[test]
    fn reads_both_variables() {
        let config = config_from(&[(SEED_VAR, "no"), (SORT_VAR, "description")]);
        assert!(!config.seed);
        assert_eq!(config.sort_by, SortCriterion::Description);
    }

    #[test]
    fn bad_values_fall_back() {
        let config = config_from(&[(SEED_VAR, "maybe"), (SORT_VAR, "weight")]);
        assert_eq!(config, AppConfig::default());
    }
}
