//! Serves the image check endpoint on `127.0.0.1:3000`.
//!
//! Logging is controlled with `RUST_LOG`, e.g. `RUST_LOG=imgcheck=trace`.

use imgcheck::upload;
use volga::App;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "debug";

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut app = App::new()
        .bind(([127, 0, 0, 1], 3000))
        .without_body_limit()
        .with_default_tracing();

    app.use_tracing();
    upload::map_routes(&mut app);

    app.run().await
}
