//! Runner configuration: defaults, then environment, then command-line flags.
//!
//! | Variable | Flag | Default |
//! |----------|------|---------|
//! | `GEM_CASCADE_SEED` | `--seed` | 1 |
//! | `GEM_CASCADE_WIDTH` | `--width` | 8 |
//! | `GEM_CASCADE_HEIGHT` | `--height` | 8 |
//! | `GEM_CASCADE_MAX_ROUNDS` | `--max-rounds` | unbounded |
//! | | `--json` | text output |

use anyhow::{anyhow, Result};

use crate::core::CascadeConfig;
use crate::types::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub seed: u32,
    pub width: usize,
    pub height: usize,
    pub max_rounds: Option<u32>,
    pub json: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            max_rounds: None,
            json: false,
        }
    }
}

impl SimConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`SimConfig::from_env`] with an injectable variable source.
    ///
    /// Unset or unparsable values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            seed: env_value(&lookup, "GEM_CASCADE_SEED").unwrap_or(defaults.seed),
            width: env_value(&lookup, "GEM_CASCADE_WIDTH").unwrap_or(defaults.width),
            height: env_value(&lookup, "GEM_CASCADE_HEIGHT").unwrap_or(defaults.height),
            max_rounds: env_value(&lookup, "GEM_CASCADE_MAX_ROUNDS").or(defaults.max_rounds),
            json: defaults.json,
        }
    }

    /// Override fields from command-line flags
    pub fn apply_args(&mut self, args: &[String]) -> Result<()> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => self.seed = flag_value(args, &mut i, "--seed")?,
                "--width" => self.width = flag_value(args, &mut i, "--width")?,
                "--height" => self.height = flag_value(args, &mut i, "--height")?,
                "--max-rounds" => {
                    self.max_rounds = Some(flag_value(args, &mut i, "--max-rounds")?)
                }
                "--json" => self.json = true,
                other => return Err(anyhow!("unknown argument: {}", other)),
            }
            i += 1;
        }

        if self.width == 0 || self.height == 0 {
            return Err(anyhow!(
                "board dimensions must be positive, got {}x{}",
                self.width,
                self.height
            ));
        }
        Ok(())
    }

    pub fn cascade_config(&self) -> CascadeConfig {
        CascadeConfig {
            max_rounds: self.max_rounds,
        }
    }
}

fn env_value<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    lookup(key).and_then(|s| s.trim().parse().ok())
}

fn flag_value<T: std::str::FromStr>(args: &[String], i: &mut usize, flag: &str) -> Result<T> {
    *i += 1;
    let v = args
        .get(*i)
        .ok_or_else(|| anyhow!("missing value for {}", flag))?;
    v.parse::<T>()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, v))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn env_overrides_defaults() {
        let config = SimConfig::from_lookup(|key| match key {
            "GEM_CASCADE_SEED" => Some("42".to_string()),
            "GEM_CASCADE_WIDTH" => Some(" 5 ".to_string()),
            "GEM_CASCADE_MAX_ROUNDS" => Some("100".to_string()),
            _ => None,
        });
        assert_eq!(config.seed, 42);
        assert_eq!(config.width, 5);
        assert_eq!(config.height, DEFAULT_BOARD_HEIGHT);
        assert_eq!(config.max_rounds, Some(100));
    }

    #[test]
    fn unparsable_env_falls_back() {
        let config = SimConfig::from_lookup(|_| Some("not-a-number".to_string()));
        assert_eq!(config, SimConfig::default());
    }

    #[test]
    fn args_override_env() {
        let mut config = SimConfig::default();
        config
            .apply_args(&args(&["--seed", "9", "--height", "4", "--json"]))
            .unwrap();
        assert_eq!(config.seed, 9);
        assert_eq!(config.height, 4);
        assert!(config.json);
        assert_eq!(config.cascade_config(), CascadeConfig::unbounded());
    }

    #[test]
    fn bad_args_are_rejected() {
        let mut config = SimConfig::default();
        assert!(config.apply_args(&args(&["--seed"])).is_err());
        assert!(config.apply_args(&args(&["--width", "wide"])).is_err());
        assert!(config.apply_args(&args(&["--bogus"])).is_err());
        assert!(config.apply_args(&args(&["--width", "0"])).is_err());
    }

    #[test]
    fn max_rounds_flag_bounds_the_cascade() {
        let mut config = SimConfig::default();
        config.apply_args(&args(&["--max-rounds", "3"])).unwrap();
        assert_eq!(config.cascade_config(), CascadeConfig::bounded(3));
    }
}
