use emotion_server::build_app;
use lib::env_keys::SERVER_ADDR;
use lib::service::CommonService;
use tracing_subscriber::EnvFilter;


#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("emotion_server=info")))
        .init();

    let service = CommonService::new();
    let app = build_app(service);

    let addr = std::env::var(SERVER_ADDR).unwrap_or("0.0.0.0:5000".to_owned());
    tracing::info!("starting emotion detector on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
