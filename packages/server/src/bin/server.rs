//! Synonym Sleuth room server.
//!
//! Serves the login / room pages and runs the game over WebSocket.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin synonym-sleuth-server
//! cargo run --bin synonym-sleuth-server -- --port 3000 --words words.json --seed 42
//! ```

use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use synonym_sleuth_server::{
    domain::RandomSource,
    infrastructure::{
        message_pusher::WebSocketMessagePusher,
        random::{SeededRandomSource, ThreadRandomSource},
        repository::InMemorySleuthRepository,
        word_list::load_word_list,
    },
    ui::Server,
    usecase::GameCoordinator,
};
use synonym_sleuth_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "synonym-sleuth-server")]
#[command(about = "Room server for the Synonym Sleuth party game", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "PORT", default_value = "3000")]
    port: u16,

    /// JSON array of secret words
    #[arg(short = 'w', long, env = "WORDS_FILE", default_value = "words.json")]
    words: PathBuf,

    /// Directory holding login.html, room.html and other static assets
    #[arg(long, env = "STATIC_DIR", default_value = "public")]
    static_dir: PathBuf,

    /// Seed for reproducible sleuth / word picks
    #[arg(long, env = "SLEUTH_SEED")]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. Word list
    // 2. Random source
    // 3. Repository / MessagePusher
    // 4. Coordinator
    // 5. Server

    // 1. Load the word list; an empty or unreadable list aborts startup
    let word_list = match load_word_list(&args.words) {
        Ok(word_list) => Arc::new(word_list),
        Err(e) => {
            tracing::error!("Failed to load word list: {}", e);
            std::process::exit(1);
        }
    };

    // 2. Random source
    let random: Arc<dyn RandomSource> = match args.seed {
        Some(seed) => {
            tracing::info!("Using seeded random source (seed = {})", seed);
            Arc::new(SeededRandomSource::new(seed))
        }
        None => Arc::new(ThreadRandomSource),
    };

    // 3. Sleuth store (in-memory) and MessagePusher (WebSocket implementation)
    let sleuth_repository = Arc::new(InMemorySleuthRepository::new());
    let message_pusher = Arc::new(WebSocketMessagePusher::new());

    // 4. Coordinator
    let coordinator = GameCoordinator::new(message_pusher, sleuth_repository, random, word_list);

    // 5. Create and run the server
    let server = Server::new(coordinator, args.static_dir);
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
