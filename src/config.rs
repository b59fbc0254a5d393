use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::scoring::{DecayConfig, FollowerDirectory, MetricWeights, NormalizeConfig};
use crate::trend::TrendConfig;

/// One monitored account: an author id and its follower count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountConfig {
    pub id: String,
    pub followers: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementConfig {
    pub weights: MetricWeights,
    pub decay: DecayConfig,
    pub normalize: NormalizeConfig,
    pub trend: TrendConfig,
    pub accounts: Vec<AccountConfig>,
}

impl Default for EngagementConfig {
    fn default() -> Self {
        Self {
            weights: MetricWeights::default(),
            decay: DecayConfig::default(),
            normalize: NormalizeConfig::default(),
            trend: TrendConfig::default(),
            accounts: Vec::new(),
        }
    }
}

impl EngagementConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), String> {
        let config_path = path.or_else(default_config_path);
        let mut config = if let Some(path) = config_path.as_ref() {
            if path.exists() {
                let contents = std::fs::read_to_string(path)
                    .map_err(|err| format!("failed to read config: {}", err))?;
                toml::from_str(&contents)
                    .map_err(|err| format!("failed to parse config: {}", err))?
            } else {
                EngagementConfig::default()
            }
        } else {
            EngagementConfig::default()
        };

        config.apply_env_overrides();
        Ok((config, config_path))
    }

    pub fn write(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|err| format!("failed to create config dir: {}", err))?;
        }
        let payload = toml::to_string_pretty(self)
            .map_err(|err| format!("failed to serialize config: {}", err))?;
        std::fs::write(path, payload).map_err(|err| format!("failed to write config: {}", err))?;
        Ok(())
    }

    pub fn follower_directory(&self) -> FollowerDirectory {
        FollowerDirectory::from_pairs(
            self.accounts
                .iter()
                .map(|account| (account.id.clone(), account.followers)),
        )
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(hours) = env::var("HALF_LIFE_HOURS") {
            if let Ok(value) = hours.parse::<f64>() {
                self.decay.half_life_hours = value;
            }
        }
        if let Ok(multiplier) = env::var("SPIKE_MULTIPLIER") {
            if let Ok(value) = multiplier.parse::<f64>() {
                self.trend.spike.multiplier = value;
            }
        }
        if let Ok(threshold) = env::var("ENGAGEMENT_LOW_THRESHOLD") {
            if let Ok(value) = threshold.parse::<f64>() {
                self.trend.thresholds.low = value;
            }
        }
        if let Ok(threshold) = env::var("ENGAGEMENT_HIGH_THRESHOLD") {
            if let Ok(value) = threshold.parse::<f64>() {
                self.trend.thresholds.high = value;
            }
        }
        if let Ok(ceiling) = env::var("MAX_POSSIBLE_SCORE") {
            if let Ok(value) = ceiling.parse::<f64>() {
                self.normalize.max_possible_score = value;
            }
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("ENGAGEMENT_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/engagement.toml")))
}
