use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use connect_four::cli::Args;
use connect_four::services::game::Game;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    let (player_a, player_b) = args.players();
    info!(
        "starting game: {} ({}) vs {} ({})",
        player_a.name(),
        player_a.mark().name(),
        player_b.name(),
        player_b.mark().name()
    );

    let engine = args.engine().context("cannot set up the game")?;

    println!("*** CONNECT FOUR ***");
    println!();

    Game::terminal(engine).run().context("game aborted")?;
    Ok(())
}
