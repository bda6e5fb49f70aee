mod config;
mod offline;
mod state;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use common::games::tictactoe::SessionRunnerSettings;
use common::logger::{self, LogLevel};
use common::{log, log_warn};
use eframe::egui;
use tokio::sync::mpsc;

use config::{get_config_manager, Config};
use offline::{LocalGameSettings, spawn_local_game};
use state::SharedState;
use ui::TicTacToeApp;

#[derive(Parser)]
#[command(name = "tictactoe_client")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Log debug messages, including rejected moves.
    #[arg(long)]
    verbose: bool,

    /// Directory for the saved board and score; overrides the config file.
    #[arg(long)]
    storage_dir: Option<PathBuf>,

    /// Seed for the computer's random choices.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    let min_level = if args.verbose { LogLevel::Debug } else { LogLevel::Info };
    logger::init_logger(prefix, min_level);

    let config_manager = get_config_manager();
    let config = match config_manager.get_config() {
        Ok(config) => config,
        Err(e) => {
            log_warn!("Using default config: {}", e);
            Config::default()
        }
    };

    let storage_dir = args
        .storage_dir
        .unwrap_or_else(|| PathBuf::from(&config.storage.location));
    let settings = LocalGameSettings {
        storage_dir,
        runner: SessionRunnerSettings {
            computer_delay: config.gameplay.computer_delay(),
        },
        seed: args.seed,
    };

    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let game_thread = spawn_local_game(shared_state.clone(), settings, command_rx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 640.0])
            .with_title("Tic Tac Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic Tac Toe",
        options,
        Box::new(|_cc| {
            Ok(Box::new(TicTacToeApp::new(
                shared_state,
                command_tx,
                config_manager,
            )))
        }),
    )?;

    if game_thread.join().is_err() {
        log_warn!("Game thread panicked");
    }
    log!("Client shut down");

    Ok(())
}
