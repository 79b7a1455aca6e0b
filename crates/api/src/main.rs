use anyhow::Context;

use invoicegen_api::config::{Config, FontSource};
use invoicegen_api::context::RenderContext;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("invalid configuration")?;
    invoicegen_observability::init_with(config.log_format);

    match &config.fonts {
        FontSource::Directory(dir) => tracing::info!(dir = %dir.display(), "loading fonts"),
        FontSource::Builtin => tracing::warn!("using builtin PDF fonts instead of font assets"),
    }
    let ctx = RenderContext::from_config(&config).context("startup failed")?;
    tracing::info!(output_dir = %ctx.output_dir().display(), "invoice artifacts directory ready");

    let app = invoicegen_api::app::build_app(ctx);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
