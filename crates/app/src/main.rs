use app::config::{Invocation, print_usage};
use app::{router, telemetry};
use services::{AppServices, Clock};
use storage::Storage;
use tokio::net::TcpListener;
use tracing::{info, warn};

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(%err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let invocation = Invocation::from_env(std::env::args().skip(1)).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    let config = match invocation {
        Invocation::Serve(config) => config,
        Invocation::Help => {
            print_usage();
            return Ok(());
        }
    };

    telemetry::init_tracing();

    let storage = if config.seed {
        Storage::seeded()
    } else {
        Storage::in_memory()
    };
    let services = AppServices::new(&storage, Clock::default_clock(), config.session_idle);
    info!(
        questions = services.catalog().count()?,
        idle_secs = config.session_idle.map(|d| d.num_seconds()),
        "catalog ready"
    );

    let listener = TcpListener::bind(config.bind).await?;
    info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, router(services))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
