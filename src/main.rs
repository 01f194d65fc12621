use actix_web::HttpServer;
use coaster_api::{create_base_app, CoasterProxy, UpstreamConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger (make sure to run with RUST_LOG=info, for example)
    env_logger::init();

    // A missing or invalid COASTER_API_URL aborts startup.
    let config = UpstreamConfig::from_env().map_err(std::io::Error::other)?;

    // One HTTP client for all workers; cloning shares the connection pool.
    let client = reqwest::Client::new();
    let proxy = CoasterProxy::new(client, config.base_url.as_str());

    // Print a startup message for convenience.
    println!("Server running at http://127.0.0.1:8080");

    HttpServer::new(move || create_base_app(proxy.clone()))
        .bind("127.0.0.1:8080")?
        .run()
        .await
}
