//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`HS_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use hyperslice_engine::{Slicer, Vec4, DEFAULT_EPSILON};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Slicing tolerance configuration
    #[serde(default)]
    pub slice: SliceConfig,
    /// Viewing parameters (normally supplied by the presentation layer)
    #[serde(default)]
    pub view: ViewConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`HS_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // User config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // HS_SLICE__EPSILON=0.01 -> slice.epsilon = 0.01
        figment = figment.merge(Env::prefixed("HS_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Slicing tolerance configuration
///
/// The epsilon decides which facets count as "crossed" near exact
/// alignments, so it is configurable rather than a buried constant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliceConfig {
    /// Precision tolerance for parallel/contained classification
    pub epsilon: f32,
}

impl Default for SliceConfig {
    fn default() -> Self {
        Self { epsilon: DEFAULT_EPSILON }
    }
}

impl SliceConfig {
    /// Build a slicer with the configured tolerance
    pub fn slicer(&self) -> Slicer {
        Slicer::new(self.epsilon)
    }
}

/// Viewing parameters: the inputs the presentation layer feeds the engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Rotation mixing the y and w axes, in radians
    pub alpha: f32,
    /// Rotation mixing the x and w axes, in radians
    pub beta: f32,
    /// Tesseract center [x, y, z, w]
    pub center: [f32; 4],
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            alpha: 0.0,
            beta: 0.0,
            center: [0.0, 0.0, 0.0, 0.0],
        }
    }
}

impl ViewConfig {
    /// The configured center as a vector
    pub fn center_vec(&self) -> Vec4 {
        Vec4::new(self.center[0], self.center[1], self.center[2], self.center[3])
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
