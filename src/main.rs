//! Interactive "21" on stdin/stdout.
//!
//! Usage:
//!   cargo run
//!
//! Set `RUST_LOG=debug` to trace rolls and decisions on stderr.

use std::io;

use anyhow::{Context, Result};
use dice21::{Console, GameConfig, TwentyOne};

fn main() -> Result<()> {
    env_logger::init();

    let config = GameConfig::default();
    let mut dice = config.rng();
    log::debug!("dice seed {}", dice.seed());

    let game = TwentyOne::new(config).context("invalid game configuration")?;
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());

    let summary = game.play(&mut console, &mut dice).context("game aborted")?;
    log::info!(
        "{} turns played, result {:?}",
        summary.state.history().len(),
        summary.result
    );
    Ok(())
}
