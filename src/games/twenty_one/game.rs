//! Turn controller for "21".

use std::io::{BufRead, Write};

use crate::console::{Console, FIRST_NAME_PROMPT, SECOND_NAME_PROMPT};
use crate::core::{Decision, DieSource, GameConfig, GameState, PlayerId, TurnRecord};
use crate::error::GameError;
use crate::rules::GameResult;

/// A finished game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSummary {
    pub state: GameState,
    pub result: GameResult,
}

/// Runs games of "21" under a fixed configuration.
#[derive(Clone, Debug)]
pub struct TwentyOne {
    config: GameConfig,
}

impl TwentyOne {
    /// Create a controller, rejecting configurations that cannot be played.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Play a whole game: ask for names, run rounds until both players are
    /// out, then print the report.
    pub fn play<R, W, D>(
        &self,
        console: &mut Console<R, W>,
        dice: &mut D,
    ) -> Result<GameSummary, GameError>
    where
        R: BufRead,
        W: Write,
        D: DieSource + ?Sized,
    {
        let first = console.ask_name(FIRST_NAME_PROMPT)?;
        let second = console.ask_name(SECOND_NAME_PROMPT)?;
        let state = GameState::new(first, second);

        log::info!(
            "starting game: target={} die=d{}",
            self.config.target,
            self.config.die_sides
        );
        self.run(state, console, dice)
    }

    /// Run rounds on an existing state until nobody is left rolling, then
    /// report the result.
    pub fn run<R, W, D>(
        &self,
        mut state: GameState,
        console: &mut Console<R, W>,
        dice: &mut D,
    ) -> Result<GameSummary, GameError>
    where
        R: BufRead,
        W: Write,
        D: DieSource + ?Sized,
    {
        while !state.is_over() {
            self.play_round(&mut state, console, dice)?;
        }

        let result = GameResult::compare(&state);
        log::info!(
            "game over after {} rounds: {:?}",
            state.round,
            result
        );
        console.report(&state, result)?;
        Ok(GameSummary { state, result })
    }

    /// One pass over the seats in order. Players already out are skipped.
    ///
    /// The round counter only advances if someone is still rolling
    /// afterwards.
    pub fn play_round<R, W, D>(
        &self,
        state: &mut GameState,
        console: &mut Console<R, W>,
        dice: &mut D,
    ) -> Result<(), GameError>
    where
        R: BufRead,
        W: Write,
        D: DieSource + ?Sized,
    {
        for id in state.active_players() {
            self.play_turn(state, id, console, dice)?;
        }

        if !state.is_over() {
            state.advance_round();
        }
        Ok(())
    }

    /// Roll for `id`, show the result, and ask whether to continue unless
    /// the roll busted.
    ///
    /// Returns `None` without touching anything if the player is already out.
    pub fn play_turn<R, W, D>(
        &self,
        state: &mut GameState,
        id: PlayerId,
        console: &mut Console<R, W>,
        dice: &mut D,
    ) -> Result<Option<TurnRecord>, GameError>
    where
        R: BufRead,
        W: Write,
        D: DieSource + ?Sized,
    {
        if !state.player(id).in_game() {
            return Ok(None);
        }

        let player = state.player_mut(id);
        let roll = player.roll(dice, &self.config);
        console.announce_roll(player.name(), &roll)?;
        log::debug!(
            "{} ({}) rolled {} -> {}{}",
            id,
            player.name(),
            roll.die,
            roll.score,
            if roll.busted { " bust" } else { "" }
        );

        let decision = if player.in_game() {
            let decision = Decision::from_answer(console.ask_continue(player.name())?);
            if decision == Decision::Stop {
                player.stop();
            }
            log::debug!("{} chose {:?} at {}", id, decision, player.score());
            Some(decision)
        } else {
            None
        };

        let record = TurnRecord::new(id, state.round, roll, decision);
        state.record_turn(record.clone());
        Ok(Some(record))
    }
}
