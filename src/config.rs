//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`T4D_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use tesseract4d_core::DEFAULT_SCALE;
use tesseract4d_render::{CameraSettings, DEFAULT_CLEAR_COLOR};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Hypercube configuration
    #[serde(default)]
    pub hypercube: HypercubeConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`T4D_*`)
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

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // T4D_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("T4D_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title; the current scale is appended at runtime
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Tesseract4D".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Distance of the camera from the origin along +Z
    pub distance: f32,
    /// Field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        let settings = CameraSettings::default();
        Self {
            distance: settings.distance,
            fov: settings.fov_y_degrees,
            near: settings.near,
            far: settings.far,
        }
    }
}

impl CameraConfig {
    /// Convert to the renderer's camera settings
    pub fn to_camera_settings(&self) -> CameraSettings {
        CameraSettings {
            distance: self.distance,
            fov_y_degrees: self.fov,
            near: self.near,
            far: self.far,
        }
    }
}

/// Hypercube configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HypercubeConfig {
    /// Scale factor at startup; applied to both rotation speed and the world matrix
    pub initial_scale: f32,
}

impl Default for HypercubeConfig {
    fn default() -> Self {
        Self {
            initial_scale: DEFAULT_SCALE,
        }
    }
}

impl HypercubeConfig {
    /// Starting scale, falling back to the default for non-positive values
    pub fn scale(&self) -> f32 {
        if self.initial_scale > 0.0 && self.initial_scale.is_finite() {
            self.initial_scale
        } else {
            log::warn!(
                "Ignoring invalid initial_scale {}; using {}",
                self.initial_scale,
                DEFAULT_SCALE
            );
            DEFAULT_SCALE
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Multisample count (1 disables MSAA)
    pub msaa_samples: u32,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: DEFAULT_CLEAR_COLOR,
            msaa_samples: 4,
        }
    }
}

impl RenderingConfig {
    /// Sample count the GPU is guaranteed to support: 1 or 4
    pub fn sample_count(&self) -> u32 {
        match self.msaa_samples {
            0 | 1 => 1,
            4 => 4,
            other => {
                log::warn!("Unsupported msaa_samples {}; using 4", other);
                4
            }
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.camera.distance, 10.0);
        assert_eq!(config.camera.fov, 45.0);
        assert_eq!(config.camera.near, 1.0);
        assert_eq!(config.camera.far, 200.0);
        assert_eq!(config.hypercube.initial_scale, 2.0);
        assert_eq!(config.rendering.background_color, [0.392, 0.584, 0.929, 1.0]);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("initial_scale"));
        assert!(toml.contains("msaa_samples"));
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config: AppConfig = toml::from_str("[window]\nwidth = 800\n").unwrap();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 720);
        assert_eq!(config.hypercube.initial_scale, 2.0);
    }

    #[test]
    fn test_camera_settings_conversion() {
        let config = CameraConfig {
            distance: 12.0,
            fov: 60.0,
            near: 0.5,
            far: 50.0,
        };
        let settings = config.to_camera_settings();
        assert_eq!(settings.distance, 12.0);
        assert_eq!(settings.fov_y_degrees, 60.0);
        assert_eq!(settings.near, 0.5);
        assert_eq!(settings.far, 50.0);
    }

    #[test]
    fn test_invalid_initial_scale_falls_back() {
        let config = HypercubeConfig { initial_scale: -1.0 };
        assert_eq!(config.scale(), DEFAULT_SCALE);
        let config = HypercubeConfig { initial_scale: 3.0 };
        assert_eq!(config.scale(), 3.0);
    }

    #[test]
    fn test_sample_count() {
        let mut config = RenderingConfig::default();
        assert_eq!(config.sample_count(), 4);
        config.msaa_samples = 1;
        assert_eq!(config.sample_count(), 1);
        config.msaa_samples = 0;
        assert_eq!(config.sample_count(), 1);
        config.msaa_samples = 8;
        assert_eq!(config.sample_count(), 4);
    }
}
