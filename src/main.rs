use anyhow::{Result, anyhow};
use cdme::{SchemaRegistry, builtin_schemas, run_gui};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let registry = SchemaRegistry::new(builtin_schemas())?;
    // eframe's error type is not Send + Sync, so it cannot ride `?` into anyhow.
    run_gui(registry).map_err(|e| anyhow!("{e}"))?;
    Ok(())
}
