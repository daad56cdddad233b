use anyhow::{Result, Context};
use serde::{Deserialize, Serialize};
use std::fs;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub generation: GenerationConfig,
    pub mutations: MutationConfig,
    #[serde(default)]
    pub mutation_limits: MutationLimits,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Literal seed words, expanded in this order
    pub base_words: Vec<String>,

    /// Usernames to derive extra seed terms from (split on `.`, `_`, `-`)
    #[serde(default)]
    pub usernames: Vec<String>,

    /// Append date fragments (years, months, days) to every term
    pub use_dates: bool,

    /// Inclusive year range for date fragments
    pub start_year: u16,
    pub end_year: u16,

    /// Seed the list with the built-in weak password catalog
    pub use_common: bool,

    /// Emit keyboard walk candidates
    pub use_keyboard: bool,

    /// Hard cap on the number of candidates a run may emit
    pub max_words: usize,
}

/// Independent mutation toggles. Any subset may be active; with all of them
/// off, seed terms pass through unmodified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationConfig {
    pub leetspeak: bool,
    pub uppercase: bool,
    pub numbers: bool,
    pub special: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationLimits {
    /// Max leet-speak variants per word (prevents combinatorial explosion)
    /// A word with 8 substitutable characters has thousands of combinations;
    /// lower this value to bound work per term.
    #[serde(default = "default_max_leet_variants")]
    pub max_leet_variants: usize,

    /// Upper bound for plain numeric suffixes (0..=max_number)
    #[serde(default = "default_max_number")]
    pub max_number: u32,
}

fn default_max_leet_variants() -> usize {
    64
}

fn default_max_number() -> u32 {
    999
}

impl Default for MutationLimits {
    fn default() -> Self {
        MutationLimits {
            max_leet_variants: default_max_leet_variants(),
            max_number: default_max_number(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Destination path for the wordlist
    pub file: String,

    /// Optional path for a JSON statistics report
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<String>,
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path))?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse TOML config")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration. Failures name the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.generation.max_words == 0 {
            anyhow::bail!("max_words must be greater than 0");
        }

        if self.generation.use_dates {
            if self.generation.start_year > self.generation.end_year {
                anyhow::bail!(
                    "start_year ({}) exceeds end_year ({})",
                    self.generation.start_year,
                    self.generation.end_year
                );
            }
            // The four-digit suffix form assumes four-digit years.
            if self.generation.start_year < 1000 {
                anyhow::bail!("start_year must be a four-digit year");
            }
            if self.generation.end_year > 9999 {
                anyhow::bail!("end_year must be a four-digit year");
            }
        }

        if self.mutation_limits.max_number > 1_000_000 {
            anyhow::bail!(
                "mutation_limits.max_number is too high (>{})",
                1_000_000
            );
        }

        Ok(())
    }

    /// Create default configuration
    pub fn default_toml() -> String {
        r#"
[generation]
base_words = ["password", "admin", "user", "test"]
usernames = []
use_dates = true
start_year = 1990
end_year = 2026
use_common = true
use_keyboard = true
max_words = 100_000

[mutations]
leetspeak = true
uppercase = true
numbers = true
special = false

[mutation_limits]
max_leet_variants = 64
max_number = 999

[output]
file = "output/wordlist.txt"
"#.to_string()
    }

    /// Save default config to file
    pub fn save_default(path: &str) -> Result<()> {
        fs::write(path, Self::default_toml())
            .context("Failed to write default config")?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            generation: GenerationConfig {
                base_words: vec![
                    "password".to_string(),
                    "admin".to_string(),
                    "user".to_string(),
                    "test".to_string(),
                ],
                usernames: Vec::new(),
                use_dates: true,
                start_year: 1990,
                end_year: 2026,
                use_common: true,
                use_keyboard: true,
                max_words: 100_000,
            },
            mutations: MutationConfig {
                leetspeak: true,
                uppercase: true,
                numbers: true,
                special: false,
            },
            mutation_limits: MutationLimits::default(),
            output: OutputConfig {
                file: "output/wordlist.txt".to_string(),
                report: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.generation.max_words, 100_000);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.generation.max_words, config.generation.max_words);
        assert_eq!(parsed.mutation_limits.max_leet_variants, 64);
    }

    #[test]
    fn test_default_toml_parses() {
        let config: Config = toml::from_str(&Config::default_toml()).unwrap();
        assert!(config.validate().is_ok());
        assert!(config.mutations.leetspeak);
        assert!(!config.mutations.special);
    }

    #[test]
    fn test_validate_rejects_inverted_year_range() {
        let mut config = Config::default();
        config.generation.start_year = 2025;
        config.generation.end_year = 2020;
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("start_year (2025) exceeds end_year (2020)"), "got err: {}", err);
    }

    #[test]
    fn test_validate_ignores_year_range_when_dates_disabled() {
        let mut config = Config::default();
        config.generation.use_dates = false;
        config.generation.start_year = 2025;
        config.generation.end_year = 2020;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_cap() {
        let mut config = Config::default();
        config.generation.max_words = 0;
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("max_words"), "got err: {}", err);
    }

    #[test]
    fn test_mutation_limits_default_when_section_missing() {
        let toml = r#"
[generation]
base_words = ["admin"]
use_dates = false
start_year = 2020
end_year = 2024
use_common = false
use_keyboard = false
max_words = 1000

[mutations]
leetspeak = true
uppercase = false
numbers = false
special = false

[output]
file = "wordlist.txt"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.mutation_limits.max_leet_variants, 64);
        assert_eq!(config.mutation_limits.max_number, 999);
    }
}
