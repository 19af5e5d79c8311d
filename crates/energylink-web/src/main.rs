#[cfg(feature = "ssr")]
#[derive(clap::Parser)]
#[command(name = "energylink-web", about = "EnergyLink royalty dashboard and invoice viewer")]
struct Args {
    /// Settings file ([api] base_url, timeout_secs, cache_ttl_secs)
    #[arg(long, env = "ENERGYLINK_CONFIG", default_value = "energylink.toml")]
    config: std::path::PathBuf,

    /// Royalty API base URL (overrides the settings file)
    #[arg(long = "api-url", env = "ENERGYLINK_API_URL")]
    api_url: Option<String>,

    /// Listen port; 0 picks the first free port in 50000-50049
    #[arg(long)]
    port: Option<u16>,
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use axum::Router;
    use clap::Parser;
    use energylink_web::app::{App, shell};
    use energylink_web::config::{self, Settings};
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower_http::compression::CompressionLayer;
    use tower_http::services::ServeDir;
    use tracing_subscriber::{EnvFilter, fmt};

    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let settings = Settings::load(&args.config)?.with_api_url(args.api_url.as_deref());
    tracing::info!(api = %settings.api_base_url, "royalty API");
    config::install(settings);

    let conf = get_configuration(None).context("Failed to load Leptos configuration")?;
    let mut leptos_options = conf.leptos_options;
    let addr = config::listen_addr(leptos_options.site_addr, args.port)?;
    leptos_options.site_addr = addr;
    let routes = generate_route_list(App);

    let site_root = leptos_options.site_root.clone();
    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback_service(ServeDir::new(&*site_root))
        .layer(CompressionLayer::new())
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // Client entry point is `energylink_web::hydrate`
}
