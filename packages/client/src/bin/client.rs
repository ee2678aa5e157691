//! Synonym Sleuth terminal client.
//!
//! Joins a room and relays stdin lines as chat. `/secret` starts a round,
//! `/reveal` reveals the sleuth and `/quit` leaves.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin synonym-sleuth-client -- --room R1 --name Dana
//! cargo run --bin synonym-sleuth-client -- -r R1 -n Eli -u ws://127.0.0.1:3000/ws
//! ```

use clap::Parser;

use synonym_sleuth_client::run_client_session;
use synonym_sleuth_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "synonym-sleuth-client")]
#[command(about = "Terminal client for the Synonym Sleuth party game", long_about = None)]
struct Args {
    /// Room to join
    #[arg(short = 'r', long)]
    room: String,

    /// Display name shown to the other players
    #[arg(short = 'n', long)]
    name: String,

    /// WebSocket server URL
    #[arg(short = 'u', long, env = "SLEUTH_URL", default_value = "ws://127.0.0.1:3000/ws")]
    url: String,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    // Run the client
    if let Err(e) = run_client_session(&args.url, &args.room, &args.name).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
