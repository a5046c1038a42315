use anyhow::Context;
use qa_config::QaConfig;
use qa_db::service::QaService;

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: QaService,
    pub config: QaConfig,
}

impl AppContext {
    /// Open the configured database.
    pub async fn init(config: QaConfig) -> anyhow::Result<Self> {
        tracing::debug!(path = %config.database.path, "opening forum database");
        let service = QaService::from_config(&config.database).await?;
        Ok(Self { service, config })
    }
}

/// Load layered config, then apply the `--db` override.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<QaConfig> {
    let mut config = QaConfig::load_with_dotenv().context("failed to load configuration")?;
    if let Some(path) = &flags.db {
        config.database.path.clone_from(path);
        config.validate().context("invalid --db value")?;
    }
    Ok(config)
}
