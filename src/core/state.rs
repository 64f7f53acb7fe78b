//! Game state: the two players, the round counter, and the turn history.
//!
//! The state is a plain value built at game start and threaded through the
//! turn controller. Uses an `im::Vector` for the history so snapshots clone
//! cheaply.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::TurnRecord;
use super::config::PLAYER_COUNT;
use super::player::{Player, PlayerId, PlayerMap};

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Players by seat.
    pub players: PlayerMap<Player>,

    /// Current round (starts at 1).
    pub round: u32,

    /// Every turn taken so far, in order.
    history: Vector<TurnRecord>,
}

impl GameState {
    /// Create a new game state. `first` takes seat 0 and rolls first.
    #[must_use]
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        let mut names = [first.into(), second.into()].into_iter();
        let players = PlayerMap::new(PLAYER_COUNT, |_| {
            Player::new(names.next().unwrap_or_default())
        });

        Self {
            players,
            round: 1,
            history: Vector::new(),
        }
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    /// Seats still in the game, in turn order.
    #[must_use]
    pub fn active_players(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .filter(|(_, p)| p.in_game())
            .map(|(id, _)| id)
            .collect()
    }

    /// The game ends once nobody is left rolling.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.players.iter().all(|(_, p)| !p.in_game())
    }

    // === Turn Advancement ===

    /// Move to the next round.
    pub fn advance_round(&mut self) {
        self.round += 1;
    }

    // === History ===

    /// Record a finished turn.
    pub fn record_turn(&mut self, record: TurnRecord) {
        self.history.push_back(record);
    }

    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// Turns taken by one player, in order.
    pub fn turns_of(&self, player: PlayerId) -> impl Iterator<Item = &TurnRecord> {
        self.history.iter().filter(move |r| r.player == player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Decision, GameConfig, ScriptedDice};

    #[test]
    fn test_game_state_new() {
        let state = GameState::new("Ann", "Bob");

        assert_eq!(state.player_count(), 2);
        assert_eq!(state.round, 1);
        assert_eq!(state.player(PlayerId::new(0)).name(), "Ann");
        assert_eq!(state.player(PlayerId::new(1)).name(), "Bob");
        assert!(state.history().is_empty());
        assert!(!state.is_over());
    }

    #[test]
    fn test_active_players() {
        let mut state = GameState::new("Ann", "Bob");
        assert_eq!(state.active_players(), vec![PlayerId::new(0), PlayerId::new(1)]);

        state.player_mut(PlayerId::new(0)).stop();
        assert_eq!(state.active_players(), vec![PlayerId::new(1)]);
        assert!(!state.is_over());

        state.player_mut(PlayerId::new(1)).stop();
        assert!(state.active_players().is_empty());
        assert!(state.is_over());
    }

    #[test]
    fn test_history() {
        let config = GameConfig::default();
        let mut dice = ScriptedDice::new([3, 5]);
        let mut state = GameState::new("Ann", "Bob");

        for id in [PlayerId::new(0), PlayerId::new(1)] {
            let roll = state.player_mut(id).roll(&mut dice, &config);
            let round = state.round;
            state.record_turn(TurnRecord::new(id, round, roll, Some(Decision::KeepRolling)));
        }
        state.advance_round();

        assert_eq!(state.round, 2);
        assert_eq!(state.history().len(), 2);
        let bob: Vec<_> = state.turns_of(PlayerId::new(1)).collect();
        assert_eq!(bob.len(), 1);
        assert_eq!(bob[0].roll.die, 5);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut state = GameState::new("Ann", "Bob");
        let snapshot = state.clone();

        state.player_mut(PlayerId::new(0)).stop();

        assert!(snapshot.player(PlayerId::new(0)).in_game());
        assert_ne!(state, snapshot);
    }

    #[test]
    fn test_state_serialization() {
        let config = GameConfig::default();
        let mut dice = ScriptedDice::new([6]);
        let mut state = GameState::new("Ann", "Bob");
        let roll = state.player_mut(PlayerId::new(0)).roll(&mut dice, &config);
        state.record_turn(TurnRecord::new(PlayerId::new(0), 1, roll, Some(Decision::Stop)));

        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, back);
    }
}
