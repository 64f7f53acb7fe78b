//! Property tests for the accumulator, the yes/no prompt, and full games.

use std::io::Cursor;

use proptest::prelude::*;

use dice21::console::INVALID_ANSWER;
use dice21::{Console, GameConfig, GameRng, Player, PlayerId, ScriptedDice, TwentyOne};

/// Lines the continue prompt must reject.
fn invalid_answer() -> impl Strategy<Value = String> {
    "[^\r\n]{0,8}".prop_filter("must not be a valid answer", |s| {
        !matches!(s.to_lowercase().as_str(), "y" | "n")
    })
}

proptest! {
    #[test]
    fn score_is_sum_of_dice_since_last_bust(faces in prop::collection::vec(1u32..=6, 0..40)) {
        let config = GameConfig::default();
        let mut dice = ScriptedDice::new(faces.clone());
        let mut player = Player::new("P");
        let mut running = 0;

        for &face in &faces {
            let outcome = player.roll(&mut dice, &config);
            running += face;

            prop_assert_eq!(outcome.die, face);
            prop_assert_eq!(outcome.score, running);

            if running > config.target {
                prop_assert!(outcome.busted);
                prop_assert_eq!(player.score(), 0);
                prop_assert!(!player.in_game());
                running = 0;
            } else {
                prop_assert!(!outcome.busted);
            }

            prop_assert_eq!(player.score(), running);
            prop_assert_eq!(player.dice().iter().sum::<u32>(), player.score());
            if player.in_game() {
                prop_assert!(player.score() <= config.target);
            }
        }
    }

    #[test]
    fn prompt_only_accepts_y_or_n(
        junk in prop::collection::vec(invalid_answer(), 0..6),
        answer in prop::sample::select(vec!["y", "Y", "n", "N"]),
    ) {
        let mut input = String::new();
        for line in &junk {
            input.push_str(line);
            input.push('\n');
        }
        input.push_str(answer);
        input.push('\n');

        let mut console = Console::new(Cursor::new(input.into_bytes()), Vec::new());
        let keep_rolling = console.ask_continue("P").unwrap();
        let transcript = String::from_utf8(console.into_output()).unwrap();

        prop_assert_eq!(keep_rolling, answer.eq_ignore_ascii_case("y"));
        prop_assert_eq!(transcript.matches(INVALID_ANSWER).count(), junk.len());
    }

    #[test]
    fn games_end_with_everyone_out(
        seed in any::<u64>(),
        answers in prop::collection::vec(any::<bool>(), 64),
    ) {
        let game = TwentyOne::new(GameConfig::default()).unwrap();
        let mut input = String::from("A\nB\n");
        for keep_rolling in &answers {
            input.push_str(if *keep_rolling { "y\n" } else { "n\n" });
        }

        let mut console = Console::new(Cursor::new(input.into_bytes()), Vec::new());
        let mut dice = GameRng::new(seed);
        let summary = game.play(&mut console, &mut dice).unwrap();
        let state = &summary.state;

        prop_assert!(state.is_over());

        for id in [PlayerId::new(0), PlayerId::new(1)] {
            let turns: Vec<_> = state.turns_of(id).collect();
            prop_assert!(!turns.is_empty());

            // Every turn but the last kept rolling
            for turn in &turns[..turns.len() - 1] {
                prop_assert!(!turn.roll.busted);
                prop_assert_eq!(turn.decision, Some(dice21::Decision::KeepRolling));
            }

            let last = turns[turns.len() - 1];
            let player = state.player(id);
            if last.roll.busted {
                prop_assert_eq!(last.decision, None);
                prop_assert!(last.roll.score > 21);
                prop_assert_eq!(player.score(), 0);
            } else {
                prop_assert_eq!(last.decision, Some(dice21::Decision::Stop));
                prop_assert_eq!(player.score(), last.roll.score);
                let total: u32 = turns.iter().map(|t| t.roll.die).sum();
                prop_assert_eq!(player.score(), total);
            }
        }
    }
}
