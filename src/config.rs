// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Configuration for the operator algebra.
//!
//! Configuration is loaded from multiple sources with the following priority
//! (later sources override earlier ones):
//!
//! 1. Built-in defaults
//! 2. otimes.yaml file
//! 3. Environment variables (QUBITOS_OTIMES_*)

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

use crate::error::{Error, Result};

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Size limits for allocated results
    #[serde(default)]
    pub limits: ResourceLimits,

    /// Diagnostic check settings
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

impl Config {
    /// Load configuration from file and environment.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut config = Config::default();

        if let Some(path) = config_path {
            if path.exists() {
                let content = std::fs::read_to_string(path)?;
                config = serde_yaml::from_str(&content)?;
            }
        } else {
            for path in &["otimes.yaml", "otimes.yml"] {
                let path = Path::new(path);
                if path.exists() {
                    let content = std::fs::read_to_string(path)?;
                    config = serde_yaml::from_str(&content)?;
                    break;
                }
            }
        }

        config.apply_env_overrides();

        Ok(config)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = env::var("QUBITOS_OTIMES_MAX_HILBERT_DIM") {
            if let Ok(dim) = val.parse() {
                self.limits.max_hilbert_dim = dim;
            }
        }
        if let Ok(val) = env::var("QUBITOS_OTIMES_MAX_LIOUVILLE_DIM") {
            if let Ok(dim) = val.parse() {
                self.limits.max_liouville_dim = dim;
            }
        }
        if let Ok(val) = env::var("QUBITOS_OTIMES_ORTHO_THRESHOLD") {
            if let Ok(threshold) = val.parse() {
                self.diagnostics.orthogonality_threshold = threshold;
            }
        }
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<()> {
        if self.limits.max_hilbert_dim == 0 {
            return Err(Error::Config("max_hilbert_dim must be > 0".into()));
        }
        if self.limits.max_liouville_dim == 0 {
            return Err(Error::Config("max_liouville_dim must be > 0".into()));
        }
        let threshold = self.diagnostics.orthogonality_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(Error::Config(format!(
                "orthogonality_threshold must be finite and >= 0, got {threshold}"
            )));
        }
        if self.limits.max_liouville_dim > 1 << 16 {
            tracing::warn!(
                max_liouville_dim = self.limits.max_liouville_dim,
                "Liouville limit allows dense results larger than 2^16 x 2^16"
            );
        }
        Ok(())
    }
}

/// Resource limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceLimits {
    /// Maximum Hilbert-space dimension of a produced operator
    #[serde(default = "default_max_hilbert_dim")]
    pub max_hilbert_dim: usize,

    /// Maximum Liouville-space dimension of a produced superoperator
    #[serde(default = "default_max_liouville_dim")]
    pub max_liouville_dim: usize,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_hilbert_dim: default_max_hilbert_dim(),
            max_liouville_dim: default_max_liouville_dim(),
        }
    }
}

fn default_max_hilbert_dim() -> usize {
    4096
}

fn default_max_liouville_dim() -> usize {
    4096
}

/// Diagnostics configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticsConfig {
    /// Tolerance for column orthonormality checks
    #[serde(default = "default_orthogonality_threshold")]
    pub orthogonality_threshold: f64,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            orthogonality_threshold: default_orthogonality_threshold(),
        }
    }
}

fn default_orthogonality_threshold() -> f64 {
    1e-12
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use std::sync::Mutex;

    // Serializes tests that read or write QUBITOS_OTIMES_* variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.limits.max_hilbert_dim, 4096);
        assert_eq!(config.limits.max_liouville_dim, 4096);
        assert_eq!(config.diagnostics.orthogonality_threshold, 1e-12);
    }

    #[test]
    fn test_config_validation() {
        let config = Config::default();
        assert!(config.validate().is_ok());

        let mut bad_config = Config::default();
        bad_config.limits.max_hilbert_dim = 0;
        assert!(bad_config.validate().is_err());
    }

    #[test]
    fn test_validate_liouville_limit_zero() {
        let mut config = Config::default();
        config.limits.max_liouville_dim = 0;
        let msg = format!("{}", config.validate().unwrap_err());
        assert!(msg.contains("max_liouville_dim"));
    }

    #[test]
    fn test_validate_negative_threshold() {
        let mut config = Config::default();
        config.diagnostics.orthogonality_threshold = -1.0;
        assert!(config.validate().is_err());

        config.diagnostics.orthogonality_threshold = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_load_from_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            f,
            r#"
limits:
  max_hilbert_dim: 64
diagnostics:
  orthogonality_threshold: 1.0e-9
"#
        )
        .unwrap();

        let config = Config::load(Some(f.path())).unwrap();
        assert_eq!(config.limits.max_hilbert_dim, 64);
        // Unspecified fields keep their defaults
        assert_eq!(config.limits.max_liouville_dim, 4096);
        assert_eq!(config.diagnostics.orthogonality_threshold, 1e-9);
    }

    #[test]
    fn test_config_load_nonexistent_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let path = Path::new("/tmp/does_not_exist_qubitos_otimes_test.yaml");
        let config = Config::load(Some(path)).unwrap();
        assert_eq!(config.limits, ResourceLimits::default());
    }

    #[test]
    fn test_config_load_invalid_yaml() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "{{{{not: valid: yaml::::").unwrap();

        let result = Config::load(Some(f.path()));
        assert!(matches!(result, Err(Error::Serialization(_))));
    }

    #[test]
    fn test_env_overrides() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let mut config = Config::default();
        std::env::set_var("QUBITOS_OTIMES_MAX_HILBERT_DIM", "128");
        std::env::set_var("QUBITOS_OTIMES_MAX_LIOUVILLE_DIM", "16384");
        std::env::set_var("QUBITOS_OTIMES_ORTHO_THRESHOLD", "1e-6");
        config.apply_env_overrides();
        assert_eq!(config.limits.max_hilbert_dim, 128);
        assert_eq!(config.limits.max_liouville_dim, 16384);
        assert_eq!(config.diagnostics.orthogonality_threshold, 1e-6);
        std::env::remove_var("QUBITOS_OTIMES_MAX_HILBERT_DIM");
        std::env::remove_var("QUBITOS_OTIMES_MAX_LIOUVILLE_DIM");
        std::env::remove_var("QUBITOS_OTIMES_ORTHO_THRESHOLD");
    }

    #[test]
    fn test_env_override_ignores_garbage() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let mut config = Config::default();
        std::env::set_var("QUBITOS_OTIMES_MAX_LIOUVILLE_DIM", "lots");
        config.apply_env_overrides();
        assert_eq!(config.limits.max_liouville_dim, 4096);
        std::env::remove_var("QUBITOS_OTIMES_MAX_LIOUVILLE_DIM");
    }
}
