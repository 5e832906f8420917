use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub visual: VisualConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct VisualConfig {
    #[serde(default = "default_bg_r")]
    pub background_r: u8,
    #[serde(default = "default_bg_g")]
    pub background_g: u8,
    #[serde(default = "default_bg_b")]
    pub background_b: u8,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_enable_match_log")]
    pub enable_match_log: bool,
    #[serde(default = "default_match_log_path")]
    pub match_log_path: String,
}

// Default values
fn default_bg_r() -> u8 { 0 }
fn default_bg_g() -> u8 { 0 }
fn default_bg_b() -> u8 { 0 }
fn default_enable_match_log() -> bool { true }
fn default_match_log_path() -> String { "match_log.json".to_string() }

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            background_r: default_bg_r(),
            background_g: default_bg_g(),
            background_b: default_bg_b(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_match_log: default_enable_match_log(),
            match_log_path: default_match_log_path(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            visual: VisualConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, or use defaults if file doesn't exist
    pub fn load() -> Self {
        match fs::read_to_string("config.toml") {
            Ok(contents) => {
                match toml::from_str(&contents) {
                    Ok(config) => {
                        println!("Loaded configuration from config.toml");
                        config
                    }
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config.toml: {}", e);
                        eprintln!("Using default configuration");
                        Config::default()
                    }
                }
            }
            Err(_) => {
                println!("No config.toml found, using default configuration");
                Config::default()
            }
        }
    }
}
