//! Run configuration from environment variables.
//!
//! The binary takes no flags; tuning knobs are read once at startup.
//!
//! - `DVD_FPS`: tick rate (default 30, clamped to 1..=240)
//! - `DVD_SPEED`: cells per second (default 35)
//! - `DVD_ANGLE`: launch angle in radians (default 0.82)
//! - `DVD_SEED`: RNG seed (default: derived from the wall clock)
//! - `DVD_LOG_PATH`: log file; logging is off when unset
//! - `DVD_LOG`: `tracing` filter directives (default "info")

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::core::SimParams;
use crate::types::{DEFAULT_SPEED, FPS, LAUNCH_ANGLE};

pub const MAX_FPS: u32 = 240;

#[derive(Debug, Clone, PartialEq)]
pub struct DvdConfig {
    pub fps: u32,
    pub speed: f64,
    pub angle: f64,
    pub seed: Option<u64>,
    pub log_path: Option<String>,
    pub log_filter: String,
}

impl Default for DvdConfig {
    fn default() -> Self {
        Self {
            fps: FPS,
            speed: DEFAULT_SPEED,
            angle: LAUNCH_ANGLE,
            seed: None,
            log_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl DvdConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Missing or unparsable values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let fps = get("DVD_FPS")
            .and_then(|s| s.parse::<u32>().ok())
            .map(|v| v.clamp(1, MAX_FPS))
            .unwrap_or(defaults.fps);
        let speed = get("DVD_SPEED")
            .and_then(|s| s.parse::<f64>().ok())
            .filter(|v| v.is_finite() && *v >= 0.0)
            .unwrap_or(defaults.speed);
        let angle = get("DVD_ANGLE")
            .and_then(|s| s.parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .unwrap_or(defaults.angle);
        let seed = get("DVD_SEED").and_then(|s| s.parse::<u64>().ok());
        let log_path = get("DVD_LOG_PATH");
        let log_filter = get("DVD_LOG").unwrap_or(defaults.log_filter);

        Self {
            fps,
            speed,
            angle,
            seed,
            log_path,
            log_filter,
        }
    }

    pub fn frame_period(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.fps.max(1)))
    }

    pub fn sim_params(&self, seed: u64) -> SimParams {
        SimParams {
            fps: self.fps,
            speed: self.speed,
            angle: self.angle,
            seed,
        }
    }
}

/// Seed derived from the wall clock, for runs without `DVD_SEED`.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = DvdConfig::from_lookup(|_| None);
        assert_eq!(config, DvdConfig::default());
        assert_eq!(config.fps, 30);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn parses_every_variable() {
        let config = DvdConfig::from_lookup(lookup(&[
            ("DVD_FPS", "60"),
            ("DVD_SPEED", "12.5"),
            ("DVD_ANGLE", " -1.0 "),
            ("DVD_SEED", "42"),
            ("DVD_LOG_PATH", "/tmp/dvd.log"),
            ("DVD_LOG", "debug"),
        ]));

        assert_eq!(config.fps, 60);
        assert_eq!(config.speed, 12.5);
        assert_eq!(config.angle, -1.0);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_path.as_deref(), Some("/tmp/dvd.log"));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn bad_values_fall_back() {
        let config = DvdConfig::from_lookup(lookup(&[
            ("DVD_FPS", "fast"),
            ("DVD_SPEED", "-3"),
            ("DVD_ANGLE", "NaN"),
            ("DVD_SEED", "x"),
            ("DVD_LOG_PATH", "   "),
        ]));

        assert_eq!(config, DvdConfig::default());
    }

    #[test]
    fn fps_is_clamped() {
        assert_eq!(DvdConfig::from_lookup(lookup(&[("DVD_FPS", "0")])).fps, 1);
        assert_eq!(DvdConfig::from_lookup(lookup(&[("DVD_FPS", "9999")])).fps, MAX_FPS);
    }

    #[test]
    fn frame_period_matches_fps() {
        let config = DvdConfig::default();
        assert_eq!(config.frame_period(), Duration::from_secs_f64(1.0 / 30.0));

        let params = config.sim_params(9);
        assert_eq!(params.seed, 9);
        assert_eq!(params.fps, 30);
    }
}
