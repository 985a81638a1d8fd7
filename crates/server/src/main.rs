use sitemap_server::{ServerConfig, demo, router, setup_logging};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logging("sitemap_server=debug,tower_http=debug");

    let config = ServerConfig::from_env()?;
    let app = router(
        demo::sitemap_generator(&config.base_url),
        demo::index_generator(&config.base_url),
    );

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, base_url = %config.base_url, "Serving sitemaps");

    axum::serve(listener, app).await?;
    Ok(())
}
