use anyhow::Context;
use tale_config::TaleConfig;

/// Load layered configuration, picking up a `.env` in the working directory.
pub fn load_config() -> anyhow::Result<TaleConfig> {
    let config = TaleConfig::load_with_dotenv().context("failed to load tale configuration")?;
    tracing::debug!(
        default_task = %config.general.default_task,
        outbox = %config.submission.outbox_dir,
        "configuration loaded"
    );
    Ok(config)
}
