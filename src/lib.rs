// lib.rs - Wordlist Generator Library
// Candidate expansion for authorized password-policy auditing

pub mod config;
pub mod generator;
pub mod output;
pub mod patterns;
pub mod stats;

// Re-exports for convenience
pub use config::{Config, GenerationConfig, MutationConfig, MutationLimits, OutputConfig};
pub use generator::{GenerationResult, Generator};
pub use stats::ListStats;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error types
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum GeneratorError {
        #[error("Configuration error: {0}")]
        Config(String),

        #[error("Pattern expansion error: {0}")]
        Pattern(String),

        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),

        #[error("JSON error: {0}")]
        Json(#[from] serde_json::Error),
    }

    pub type Result<T> = std::result::Result<T, GeneratorError>;
}

/// Utilities module
pub mod utils {

    /// Format number with thousands separator
    pub fn format_number(n: u64) -> String {
        let s = n.to_string();
        let mut result = String::new();
        for (i, c) in s.chars().rev().enumerate() {
            if i > 0 && i % 3 == 0 {
                result.push(',');
            }
            result.push(c);
        }
        result.chars().rev().collect()
    }

    /// Format a byte count for display
    pub fn format_file_size(bytes: u64) -> String {
        if bytes < 1024 {
            format!("{} B", bytes)
        } else if bytes < 1024 * 1024 {
            format!("{:.2} KB", bytes as f64 / 1024.0)
        } else {
            format!("{:.2} MB", bytes as f64 / (1024.0 * 1024.0))
        }
    }
}
