use std::net::SocketAddr;

use booking_server::times::FixedTimes;
use booking_server::web::{AppState, create_router};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Static assets directory and port are overridable for deployment
    let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    let state = AppState::new(FixedTimes::default());
    let app = create_router(state, &static_dir);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    println!("Little Lemon booking server listening on http://{addr}");
    println!();
    println!("Pages:");
    println!("  GET  /                - Home page");
    println!("  GET  /booking-a-table - Booking form");
    println!("API Endpoints:");
    println!("  GET  /health          - Health check");
    println!("  POST /api/bookings    - Create a booking (JSON)");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
