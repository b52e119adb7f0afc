use clap::Parser;
use draw_match::build_game;
use draw_match::cli::Cli;
use draw_match::panic_hook;
use tracing::info;

mod telemetry;

fn main() {
    let cli = Cli::parse();
    telemetry::init_tracing(cli.log_filter());

    panic_hook::abort_on_panic();

    let game = match build_game(cli.into_config()).build() {
        Ok(game) => game,
        Err(e) => {
            eprintln!("❌ Failed to set up the game: {e}");
            std::process::exit(1);
        }
    };

    match game.play() {
        Ok(summary) => info!(
            seed = ?summary.seed,
            wins = ?summary.wins_by_seat(),
            "game finished"
        ),
        Err(e) => {
            eprintln!("❌ Game aborted: {e}");
            std::process::exit(1);
        }
    }
}
