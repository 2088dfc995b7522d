use directories::ProjectDirs;
use library::grid::GridGeometry;
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeType {
    Dark,
    Light,
    #[default]
    Mocha,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ThemeConfig {
    pub theme_type: ThemeType,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct GridConfig {
    /// First hour shown on the grid.
    pub day_start_hour: f32,
    /// Last hour shown on the grid.
    pub day_end_hour: f32,
    pub pixels_per_hour: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            day_start_hour: 6.0,
            day_end_hour: 24.0,
            pixels_per_hour: 80.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub theme: ThemeConfig,
    pub grid: GridConfig,
    /// Optional path to a plan JSON export; the built-in sample plan is used
    /// when absent.
    pub plan_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn load() -> Self {
        let Some(path) = get_config_path() else {
            return Self::default();
        };
        match fs::read_to_string(&path) {
            Ok(text) => match toml::from_str(&text) {
                Ok(config) => {
                    info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    warn!("Failed to parse config {}: {}", path.display(), e);
                    Self::default()
                }
            },
            // First run: no config file yet.
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self) {
        let Some(path) = get_config_path() else {
            return;
        };
        match toml::to_string_pretty(self) {
            Ok(text) => {
                if let Err(e) = fs::write(&path, text) {
                    error!("Failed to write config {}: {}", path.display(), e);
                }
            }
            Err(e) => error!("Failed to serialize config: {}", e),
        }
    }

    pub fn geometry(&self) -> GridGeometry {
        GridGeometry {
            pixels_per_hour: self.grid.pixels_per_hour,
            day_start_hour: self.grid.day_start_hour,
            day_end_hour: self.grid.day_end_hour,
        }
    }
}

fn get_config_path() -> Option<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from("io", "lifeos", "weekly_planner") {
        let config_dir = proj_dirs.config_dir();
        if !config_dir.exists() {
            if let Err(e) = fs::create_dir_all(config_dir) {
                error!("Failed to create config directory: {}", e);
                return None;
            }
        }
        Some(config_dir.join("config.toml"))
    } else {
        None
    }
}
