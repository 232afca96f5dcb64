use chrono::NaiveDate;
use contracts::shared::cost_rollup::CostDefaults;
use contracts::shared::reference_code::OrgCodeTable;
use once_cell::sync::OnceCell;
use serde::Deserialize;

static CONFIG: OnceCell<Config> = OnceCell::new();

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub reference_codes: ReferenceCodesConfig,
    #[serde(default)]
    pub cost_defaults: CostDefaults,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReferenceCodesConfig {
    /// Эпоха для поля дней в номере NRE
    pub epoch: NaiveDate,
    /// Двузначные коды организаций
    pub org_codes: OrgCodeTable,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000

[reference_codes]
epoch = "2025-01-01"

[reference_codes.org_codes]
MTN = "10"
CBN = "20"
ASK = "30"
ATL = "40"
GPN = "70"
CAT = "80"
BDI = "90"

[cost_defaults]
returns_freight = 13.00
returns_handling = 0.45
"#;

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
    if config.reference_codes.org_codes.is_empty() {
        tracing::warn!("reference_codes.org_codes is empty: every NRE number will use org code 99");
    }
    Ok(config)
}

/// Зафиксировать конфигурацию процесса (вызывается один раз при старте)
pub fn initialize(config: Config) -> anyhow::Result<()> {
    CONFIG
        .set(config)
        .map_err(|_| anyhow::anyhow!("configuration already initialized"))
}

/// Текущая конфигурация; без `initialize` используется встроенная
pub fn get() -> &'static Config {
    CONFIG.get_or_init(|| {
        toml::from_str(DEFAULT_CONFIG).unwrap_or_else(|e| panic!("embedded config is invalid: {e}"))
    })
}
