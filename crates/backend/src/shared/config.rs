use contracts::shared::record_view::DEFAULT_PAGE_SIZE;
use once_cell::sync::OnceCell;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Параметры списков
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct ViewConfig {
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    /// Верхняя граница page_size из запроса
    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,
}

/// Параметры CSV-экспорта
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportConfig {
    #[serde(default)]
    pub utf8_bom: bool,
    #[serde(default)]
    pub date_in_filename: bool,
}

fn default_host() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    3000
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_max_page_size() -> usize {
    100
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

impl ViewConfig {
    /// Размер страницы из запроса: 0/отсутствует → по умолчанию, сверху ограничен максимумом
    pub fn effective_page_size(&self, requested: Option<usize>) -> usize {
        let size = match requested {
            Some(0) | None => self.default_page_size,
            Some(n) => n,
        };
        size.min(self.max_page_size.max(1)).max(1)
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[view]
default_page_size = 10
max_page_size = 100

[export]
utf8_bom = false
date_in_filename = false
"#;

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.view.default_page_size == 0 {
        anyhow::bail!("view.default_page_size must be positive");
    }
    Ok(config)
}

/// Сохранить конфигурацию на время работы процесса.
/// Повторный вызов оставляет первую сохранённую.
pub fn install(config: Config) -> &'static Config {
    CONFIG.get_or_init(|| config)
}
