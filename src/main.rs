use attendance_board::clock::{Clock, SystemClock};
use attendance_board::records::SimulatedSource;
use attendance_board::{router, AppState};
use std::{env, net::SocketAddr, sync::Arc, time::Duration};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let source = SimulatedSource::new(resolve_seed(), clock.clone()).with_latency(resolve_latency());
    let state = AppState::new(Arc::new(source), clock);

    let app = router(state);

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn resolve_seed() -> u64 {
    env::var("ATTENDANCE_SEED")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or_else(rand::random)
}

fn resolve_latency() -> Duration {
    let millis = env::var("SIM_DELAY_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(250);
    Duration::from_millis(millis)
}
