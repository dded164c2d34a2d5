use std::path::Path;

use crate::error::ConfigError;
use crate::players::Strategy;
use crate::random::{CustomNumberGenerator, RandomGenerator, StandardRandomGenerator};
use crate::score::Score;

/// Largest match goal accepted.
pub const MAX_GOAL: u32 = 64;

/// Settings for a self-played match, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Points needed to win the match. Zero plays a single money game.
    pub goal: u32,
    pub crawford: bool,
    /// Seed for reproducible dice and tie-breaks. Unset uses the thread RNG.
    pub seed: Option<i64>,
    pub white: Strategy,
    pub red: Strategy,
    /// Validate every board as it is played.
    pub paranoid: bool,
    /// Print player and move generator diagnostics to stderr.
    pub trace: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            goal: 0,
            crawford: true,
            seed: None,
            white: Strategy::Conservative,
            red: Strategy::Aggressive,
            paranoid: false,
            trace: false,
        }
    }
}

impl MatchConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: MatchConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!("Warning: config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.goal > MAX_GOAL {
            return Err(ConfigError::Validation(format!(
                "goal must be <= {MAX_GOAL}, got {}",
                self.goal
            )));
        }
        Ok(())
    }

    /// The score a new match starts from.
    pub fn score(&self) -> Score {
        Score {
            no_crawford_rule: !self.crawford,
            ..Score::to(self.goal)
        }
    }

    /// A generator for one consumer of randomness. Each `stream` gets its own
    /// sequence so the dice and the two players do not share one.
    pub fn random_generator(&self, stream: i64) -> Box<dyn RandomGenerator> {
        match self.seed {
            Some(seed) => Box::new(CustomNumberGenerator::new(seed.wrapping_add(stream))),
            None => Box::new(StandardRandomGenerator),
        }
    }
}
