//! Runtime settings
//!
//! Read from the page URL query string (`?mode=stack&seed=7`) on the web,
//! or from the first command-line argument natively.

use serde::{Deserialize, Serialize};

use crate::sim::{InteractionMode, SimConfig};

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Merge or stack rules
    pub mode: InteractionMode,
    /// Fixed RNG seed (None = time based)
    pub seed: Option<u64>,
    /// Piece cap (None = unbounded)
    pub max_pieces: Option<usize>,
    /// Bottom-edge tolerance for merges (0 = exact)
    pub merge_tolerance: f32,
}

impl Settings {
    /// Parse `key=value` pairs separated by `&`, with or without a leading `?`.
    /// Unknown keys and bad values are logged and ignored.
    pub fn from_query(query: &str) -> Self {
        let mut settings = Self::default();
        let query = query.trim_start_matches('?');

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let applied = match key {
                "mode" => InteractionMode::parse(value).map(|mode| settings.mode = mode),
                "seed" => value.parse().ok().map(|seed| settings.seed = Some(seed)),
                "max" => value.parse().ok().map(|max| settings.max_pieces = Some(max)),
                "tolerance" => value
                    .parse::<f32>()
                    .ok()
                    .filter(|t| t.is_finite() && *t >= 0.0)
                    .map(|t| settings.merge_tolerance = t),
                _ => None,
            };
            if applied.is_none() {
                log::warn!("Ignoring setting '{}'", pair);
            }
        }

        settings
    }

    /// Simulation rules for these settings
    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            max_pieces: self.max_pieces,
            merge_tolerance: self.merge_tolerance,
            ..SimConfig::with_mode(self.mode)
        }
    }

    /// Load settings from the page URL (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let search = web_sys::window().and_then(|w| w.location().search().ok());

        match search {
            Some(query) if !query.is_empty() => {
                let settings = Self::from_query(&query);
                log::info!("Loaded settings from URL: {:?}", settings);
                settings
            }
            _ => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Load settings from the first command-line argument (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        match std::env::args().nth(1) {
            Some(query) => Self::from_query(&query),
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::from_query("");
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.sim_config(), SimConfig::default());
    }

    #[test]
    fn test_full_query() {
        let settings = Settings::from_query("?mode=stack&seed=7&max=50&tolerance=0.5");
        assert_eq!(settings.mode, InteractionMode::Stack);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.max_pieces, Some(50));
        assert_eq!(settings.merge_tolerance, 0.5);

        let config = settings.sim_config();
        assert_eq!(config.mode, InteractionMode::Stack);
        assert_eq!(config.max_pieces, Some(50));
        assert_eq!(config.ground_y(), 500.0);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let settings = Settings::from_query("mode=bounce&seed=abc&tolerance=-1&volume=3");
        assert_eq!(settings, Settings::default());
    }
}
