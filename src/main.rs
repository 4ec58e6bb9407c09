use anyhow::{Error, Result};
use email_service::{catalog::TemplateCatalog, config::Config, engine::TemplateEngine};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = Config::load()?;
    let engine = TemplateEngine::new(TemplateCatalog::builtin(), &config.currency_symbol);

    println!(
        "Configuration validated. {} templates loaded. Worker is ready to start.",
        engine.catalog().len()
    );

    Ok(())
}
