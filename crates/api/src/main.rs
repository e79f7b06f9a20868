use std::sync::Arc;

use anyhow::Context;
use catalog_infra::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    catalog_observability::init();

    let settings = Settings::load()?;
    let services = catalog_api::app::services::build_services(&settings).await?;
    let app = catalog_api::app::build_app(Arc::new(services));

    let addr = settings.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        storage = settings.db_driver.as_str(),
        "listening"
    );

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
