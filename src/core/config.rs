use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Environment variable that replaces `backend.base_url`
pub const BACKEND_URL_ENV: &str = "CHAI_BACKEND_URL";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub demo: DemoConfig,
    #[serde(default)]
    pub cart: CartConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_num_threads")]
    pub num_threads: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

/// Attributes of the demo identity created on first start
#[derive(Debug, Clone, Deserialize)]
pub struct DemoConfig {
    #[serde(default = "default_handle")]
    pub handle: String,
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_university")]
    pub university: String,
    #[serde(default = "default_bio")]
    pub bio: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CartConfig {
    #[serde(default = "default_cart_items")]
    pub items: Vec<String>,
    #[serde(default = "default_cart_total")]
    pub total: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_scene_url")]
    pub scene_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_console")]
    pub console: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind_address: default_bind_address(),
            num_threads: default_num_threads(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            handle: default_handle(),
            name: default_name(),
            university: default_university(),
            bio: default_bio(),
        }
    }
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            items: default_cart_items(),
            total: default_cart_total(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scene_url: default_scene_url(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            console: default_console(),
        }
    }
}

// Default value functions
fn default_port() -> u16 {
    3000
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_num_threads() -> usize {
    num_cpus::get()
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_handle() -> String {
    "@rvu_guest".to_string()
}

fn default_name() -> String {
    "RVU Guest".to_string()
}

fn default_university() -> String {
    "RVU".to_string()
}

fn default_bio() -> String {
    "chai enjoyer".to_string()
}

fn default_cart_items() -> Vec<String> {
    vec!["Masala Chai".to_string(), "Cold Boba Pink".to_string()]
}

fn default_cart_total() -> u32 {
    180
}

fn default_scene_url() -> String {
    "https://prod.spline.design/Tddl75W6Ij9Qp77j/scene.splinecode".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_console() -> bool {
    false
}

impl Config {
    /// Load configuration from a TOML file, applying environment overrides
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&content, std::env::var(BACKEND_URL_ENV).ok())
    }

    /// Parse configuration from TOML text.
    ///
    /// `backend_override` replaces `backend.base_url` when set and non-empty.
    pub fn from_toml(content: &str, backend_override: Option<String>) -> Result<Self> {
        let mut config: Config = toml::from_str(content)
            .context("Failed to parse config file")?;

        if let Some(url) = backend_override.filter(|url| !url.trim().is_empty()) {
            config.backend.base_url = url.trim().to_string();
        }

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            bail!("Server port must be greater than 0");
        }

        if self.server.bind_address.trim().is_empty() {
            bail!("bind_address must not be empty");
        }

        if self.server.num_threads == 0 {
            bail!("num_threads must be greater than 0");
        }

        if self.backend.base_url.is_empty() {
            bail!("backend base_url must not be empty");
        }

        if !self.backend.base_url.starts_with("http://")
            && !self.backend.base_url.starts_with("https://")
        {
            bail!(
                "Invalid backend base_url '{}'. Must start with http:// or https://",
                self.backend.base_url
            );
        }

        if self.backend.request_timeout_secs == 0 {
            bail!("request_timeout_secs must be greater than 0");
        }

        if self.demo.handle.trim().is_empty() {
            bail!("demo handle must not be empty");
        }

        if self.cart.items.is_empty() {
            bail!("cart must contain at least one item");
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            bail!(
                "Invalid log level '{}'. Must be one of: trace, debug, info, warn, error",
                self.logging.level
            );
        }

        let valid_formats = ["json", "console"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            bail!(
                "Invalid log format '{}'. Must be one of: json, console",
                self.logging.format
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MINIMAL: &str = r#"
[server]
port = 3000
"#;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = Config::from_toml(MINIMAL, None).expect("Failed to parse config");

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.bind_address, "0.0.0.0");
        assert_eq!(config.backend.base_url, "http://localhost:8000");
        assert_eq!(config.backend.request_timeout_secs, 30);
        assert_eq!(config.demo.handle, "@rvu_guest");
        assert_eq!(config.demo.name, "RVU Guest");
        assert_eq!(config.demo.university, "RVU");
        assert_eq!(config.demo.bio, "chai enjoyer");
        assert_eq!(config.cart.items, vec!["Masala Chai", "Cold Boba Pink"]);
        assert_eq!(config.cart.total, 180);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_backend_override_replaces_base_url() {
        let config = Config::from_toml(MINIMAL, Some("https://chai.example.com".to_string()))
            .expect("Failed to parse config");

        assert_eq!(config.backend.base_url, "https://chai.example.com");
    }

    #[test]
    fn test_blank_backend_override_is_ignored() {
        let config = Config::from_toml(MINIMAL, Some("   ".to_string()))
            .expect("Failed to parse config");

        assert_eq!(config.backend.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::from_toml("", None).expect("Failed to parse config");
        assert_eq!(config.server.port, 3000);
        assert!(config.server.num_threads > 0);
    }

    #[test]
    fn test_zero_port_rejected() {
        let toml = r#"
[server]
port = 0
"#;
        let err = Config::from_toml(toml, None).unwrap_err();
        assert!(err.to_string().contains("port must be greater than 0"));
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let toml = r#"
[server]
port = 3000

[backend]
base_url = "localhost:8000"
"#;
        assert!(Config::from_toml(toml, None).is_err());
    }

    #[test]
    fn test_empty_cart_rejected() {
        let toml = r#"
[server]
port = 3000

[cart]
items = []
total = 0
"#;
        assert!(Config::from_toml(toml, None).is_err());
    }

    #[test]
    fn test_invalid_log_format_rejected() {
        let toml = r#"
[server]
port = 3000

[logging]
format = "xml"
"#;
        assert!(Config::from_toml(toml, None).is_err());
    }

    #[test]
    fn test_load_config_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[server]
port = 8080
num_threads = 2

[demo]
handle = "@night_owl"

[cart]
items = ["Irani Chai"]
total = 40

[logging]
level = "debug"
format = "console"
"#,
        )
        .unwrap();

        let config = Config::from_file(&path).expect("Failed to load config");

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.num_threads, 2);
        assert_eq!(config.demo.handle, "@night_owl");
        assert_eq!(config.demo.name, "RVU Guest");
        assert_eq!(config.cart.items, vec!["Irani Chai"]);
        assert_eq!(config.cart.total, 40);
        assert_eq!(config.logging.format, "console");
    }

    #[test]
    fn test_missing_file_is_error() {
        let path = PathBuf::from("/definitely/not/here/config.toml");
        assert!(Config::from_file(&path).is_err());
    }
}
