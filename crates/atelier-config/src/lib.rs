//! Shared configuration for the atelier CLI and TUI.
//!
//! TOML config file layered with environment overrides. Both binaries
//! depend on this crate; the CLI adds flag-level overrides on top.

use std::path::PathBuf;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration shared by CLI and TUI.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// The portfolio content source.
    #[serde(default)]
    pub site: Site,

    /// The contact form relay.
    #[serde(default)]
    pub relay: Relay,

    /// Presentation settings.
    #[serde(default)]
    pub ui: Ui,
}

/// The WordPress.com site the portfolio content comes from.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Site {
    /// Site domain, e.g. `"mirandapineiro05.wordpress.com"`.
    #[serde(default = "default_domain")]
    pub domain: String,

    /// How many posts to request. The API caps this at 100 and the
    /// portfolio never paginates past the first page.
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Site {
    fn default() -> Self {
        Self {
            domain: default_domain(),
            per_page: default_per_page(),
            timeout: default_timeout(),
        }
    }
}

fn default_domain() -> String {
    "mirandapineiro05.wordpress.com".into()
}
fn default_per_page() -> u32 {
    100
}
fn default_timeout() -> u64 {
    30
}

/// The email form-relay service behind the contact page.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Relay {
    /// Relay API endpoint.
    #[serde(default = "default_relay_endpoint")]
    pub endpoint: String,

    /// Relay service id (fixed account-level constant, not a secret).
    #[serde(default = "default_service_id")]
    pub service_id: String,

    /// Relay template id.
    #[serde(default = "default_template_id")]
    pub template_id: String,
}

impl Default for Relay {
    fn default() -> Self {
        Self {
            endpoint: default_relay_endpoint(),
            service_id: default_service_id(),
            template_id: default_template_id(),
        }
    }
}

fn default_relay_endpoint() -> String {
    "https://api.emailjs.com/api/v1.0/email/send".into()
}
fn default_service_id() -> String {
    "service_sg91wkp".into()
}
fn default_template_id() -> String {
    "template_0cawmq8".into()
}

/// Presentation settings shared by the UIs.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Ui {
    /// Brand string used in the lightbox caption.
    #[serde(default = "default_brand")]
    pub brand: String,

    /// Menu categories, in display order. `"all"` is the cover-grid
    /// sentinel and should come first.
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
}

impl Default for Ui {
    fn default() -> Self {
        Self {
            brand: default_brand(),
            categories: default_categories(),
        }
    }
}

fn default_brand() -> String {
    "Miranda's Archive".into()
}
fn default_categories() -> Vec<String> {
    ["all", "Gastronomy", "Exterior", "Editorial", "Portrait"]
        .into_iter()
        .map(str::to_owned)
        .collect()
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "atelier", "atelier").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("atelier");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from defaults + file + environment.
///
/// Environment overrides use double underscores between section and key:
/// `ATELIER_SITE__DOMAIN`, `ATELIER_UI__BRAND`, ...
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load config from an explicit file path (testable seam).
pub fn load_config_from(path: &std::path::Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("ATELIER_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning the defaults if the file doesn't exist or fails.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(&path, toml_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_complete() {
        let cfg = Config::default();
        assert_eq!(cfg.site.per_page, 100);
        assert!(cfg.site.domain.ends_with(".wordpress.com"));
        assert_eq!(cfg.ui.categories[0], "all");
        assert!(cfg.relay.endpoint.starts_with("https://"));
    }

    #[test]
    fn file_and_env_layer_over_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                    [site]
                    domain = "other.wordpress.com"

                    [ui]
                    brand = "Studio North"
                "#,
            )?;
            jail.set_env("ATELIER_SITE__PER_PAGE", "25");

            let cfg = load_config_from(std::path::Path::new("config.toml"))
                .map_err(|e| figment::Error::from(e.to_string()))?;

            assert_eq!(cfg.site.domain, "other.wordpress.com");
            assert_eq!(cfg.site.per_page, 25);
            assert_eq!(cfg.ui.brand, "Studio North");
            // Untouched sections keep their defaults.
            assert_eq!(cfg.relay.service_id, default_service_id());
            Ok(())
        });
    }

    #[test]
    fn roundtrips_through_toml() {
        let cfg = Config::default();
        let s = toml::to_string_pretty(&cfg).expect("config serializes");
        let back: Config = toml::from_str(&s).expect("config deserializes");
        assert_eq!(back.site.domain, cfg.site.domain);
        assert_eq!(back.ui.categories, cfg.ui.categories);
    }
}
