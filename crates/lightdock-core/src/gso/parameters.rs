use super::error::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// Constants of the glowworm swarm optimization algorithm.
///
/// The initializer only reads these values; it copies the luciferin, vision
/// and movement settings into every glowworm it creates. Parameters are usually
/// loaded from a TOML file with kebab-case keys; missing keys take their default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct GsoParameters {
    /// Luciferin decay rate, in `[0, 1]`.
    pub rho: f64,
    /// Luciferin enhancement constant.
    pub gamma: f64,
    /// Vision range update rate.
    pub beta: f64,
    pub initial_luciferin: f64,
    pub initial_vision_range: f64,
    pub max_vision_range: f64,
    /// Desired number of neighbors used to adapt the vision range.
    pub max_neighbors: usize,
    /// Movement step size of a glowworm in the search space.
    pub initial_step: f64,
}

impl Default for GsoParameters {
    fn default() -> Self {
        Self {
            rho: 0.4,
            gamma: 0.6,
            beta: 0.08,
            initial_luciferin: 5.0,
            initial_vision_range: 0.2,
            max_vision_range: 5.0,
            max_neighbors: 5,
            initial_step: 0.03,
        }
    }
}

impl GsoParameters {
    /// Loads and validates parameters from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, [`ConfigError::Toml`]
    /// if it is not valid TOML for this structure, and [`ConfigError::Invalid`] if
    /// a value is out of range.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::parse(&content, &path.to_string_lossy())
    }

    /// Parses and validates parameters from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Self::parse(content, "<string>")
    }

    fn parse(content: &str, origin: &str) -> Result<Self, ConfigError> {
        let parameters: Self = toml::from_str(content).map_err(|e| ConfigError::Toml {
            path: origin.to_string(),
            source: e,
        })?;
        parameters.validate()?;
        Ok(parameters)
    }

    /// Checks that every constant lies in its valid range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.rho) {
            return Err(ConfigError::Invalid {
                name: "rho",
                reason: format!("decay rate {} is outside [0, 1]", self.rho),
            });
        }
        if self.initial_vision_range <= 0.0 {
            return Err(ConfigError::Invalid {
                name: "initial-vision-range",
                reason: format!("{} must be positive", self.initial_vision_range),
            });
        }
        if self.max_vision_range < self.initial_vision_range {
            return Err(ConfigError::Invalid {
                name: "max-vision-range",
                reason: format!(
                    "{} is smaller than the initial vision range {}",
                    self.max_vision_range, self.initial_vision_range
                ),
            });
        }
        if self.max_neighbors == 0 {
            return Err(ConfigError::Invalid {
                name: "max-neighbors",
                reason: "at least one neighbor is required".to_string(),
            });
        }
        if self.initial_step <= 0.0 {
            return Err(ConfigError::Invalid {
                name: "initial-step",
                reason: format!("{} must be positive", self.initial_step),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn defaults_are_valid() {
        let parameters = GsoParameters::default();
        assert!(parameters.validate().is_ok());
        assert_eq!(parameters.initial_luciferin, 5.0);
        assert_eq!(parameters.initial_vision_range, 0.2);
    }

    #[test]
    fn from_toml_str_overrides_only_given_keys() {
        let parameters = GsoParameters::from_toml_str(
            r#"
            rho = 0.5
            initial-luciferin = 7.5
            max-neighbors = 3
            "#,
        )
        .unwrap();
        assert_eq!(parameters.rho, 0.5);
        assert_eq!(parameters.initial_luciferin, 7.5);
        assert_eq!(parameters.max_neighbors, 3);
        assert_eq!(parameters.gamma, 0.6);
        assert_eq!(parameters.initial_step, 0.03);
    }

    #[test]
    fn from_toml_str_of_empty_document_gives_defaults() {
        let parameters = GsoParameters::from_toml_str("").unwrap();
        assert_eq!(parameters, GsoParameters::default());
    }

    #[test]
    fn from_toml_str_rejects_unknown_keys() {
        let result = GsoParameters::from_toml_str("luciferin = 1.0");
        assert!(matches!(result, Err(ConfigError::Toml { .. })));
    }

    #[test]
    fn from_toml_str_rejects_out_of_range_decay() {
        let result = GsoParameters::from_toml_str("rho = 1.5");
        assert!(matches!(
            result,
            Err(ConfigError::Invalid { name: "rho", .. })
        ));
    }

    #[test]
    fn from_toml_str_rejects_vision_range_above_maximum() {
        let result =
            GsoParameters::from_toml_str("initial-vision-range = 6.0\nmax-vision-range = 5.0");
        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                name: "max-vision-range",
                ..
            })
        ));
    }

    #[test]
    fn load_reads_parameters_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("glowworm.toml");
        fs::write(&path, "initial-vision-range = 0.4\ninitial-step = 0.5\n").unwrap();

        let parameters = GsoParameters::load(&path).unwrap();
        assert_eq!(parameters.initial_vision_range, 0.4);
        assert_eq!(parameters.initial_step, 0.5);
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let result = GsoParameters::load(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
