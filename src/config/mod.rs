use crate::core::layout::shifts::default_shift_specs;
use crate::core::layout::{ColorAssigner, GridFrame, ShiftTable, TimelineLayoutEngine};
use crate::errors::{AppError, AppResult};
use crate::models::shift::ShiftSpec;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    #[serde(default = "default_saturation")]
    pub saturation: u8,
    #[serde(default = "default_lightness")]
    pub lightness: u8,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            saturation: default_saturation(),
            lightness: default_lightness(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_days")]
    pub days: Vec<String>,
    #[serde(default = "default_shift_specs")]
    pub shifts: Vec<ShiftSpec>,
    #[serde(default)]
    pub grid: GridFrame,
    #[serde(default)]
    pub palette: Palette,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_days() -> Vec<String> {
    [
        "Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi", "Samedi", "Dimanche",
    ]
    .iter()
    .map(|d| d.to_string())
    .collect()
}
fn default_saturation() -> u8 {
    140
}
fn default_lightness() -> u8 {
    200
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            days: default_days(),
            shifts: default_shift_specs(),
            grid: GridFrame::default(),
            palette: Palette::default(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("shiftgrid")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".shiftgrid")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("shiftgrid.conf")
    }

    /// Return the full path of the operation log
    pub fn log_file() -> PathBuf {
        Self::config_dir().join("shiftgrid.log")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Write the configuration as YAML.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|_| AppError::ConfigSave)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Create the config directory and, unless in test mode, a default
    /// config file. An existing file is left untouched.
    /// Returns true when a file was written.
    pub fn init_all(path: &Path, is_test: bool) -> AppResult<bool> {
        if is_test || path.exists() {
            return Ok(false);
        }
        Config::default().save(path)?;
        Ok(true)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.days.is_empty() {
            return Err(AppError::Config("at least one day is required".into()));
        }

        let mut seen = HashSet::new();
        for d in &self.days {
            if d.is_empty() {
                return Err(AppError::Config("day labels must not be empty".into()));
            }
            // "Day_Shift" keys split on the first underscore
            if d.contains('_') {
                return Err(AppError::Config(format!(
                    "day label must not contain '_': {d}"
                )));
            }
            if !seen.insert(d.as_str()) {
                return Err(AppError::Config(format!("duplicate day: {d}")));
            }
        }

        let mut seen = HashSet::new();
        for s in &self.shifts {
            if s.start > 23 || s.end > 23 {
                return Err(AppError::Config(format!(
                    "shift {}: hours must be within 0..=23 (got {}-{})",
                    s.name, s.start, s.end
                )));
            }
            if !seen.insert(s.name.as_str()) {
                return Err(AppError::Config(format!("duplicate shift: {}", s.name)));
            }
        }

        self.grid.validate().map_err(AppError::Config)
    }

    pub fn shift_table(&self) -> ShiftTable {
        ShiftTable::from_specs(&self.shifts)
    }

    /// A fresh engine with its own color cache, for one view.
    pub fn layout_engine(&self) -> TimelineLayoutEngine {
        TimelineLayoutEngine::new(
            self.shift_table(),
            ColorAssigner::new(self.palette.saturation, self.palette.lightness),
        )
    }
}
