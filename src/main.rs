use std::process;

use user_api::{startup, telemetry, AppState, Config, Env};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    telemetry::setup_tracing();

    let config = Config::from_env(&Env::real());
    if let Err(err) = startup::serve(&config, AppState::default()).await {
        tracing::error!(error = %err, "Server failed to start");
        process::exit(1);
    }
}
