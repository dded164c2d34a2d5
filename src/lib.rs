//! Backgammon rules and heuristic computer players.
//!
//! The library enumerates every legal way to play a roll, ranks those
//! continuations with lexicographic heuristics, and drives games and matches
//! including the doubling cube and the Crawford rule.
//!
//! # Example
//!
//! ```rust
//! use backgammon_lib::game::Game;
//! use backgammon_lib::players::{Player, Strategy};
//! use backgammon_lib::random::CustomNumberGenerator;
//! use backgammon_lib::score::Score;
//!
//! // Two computer players, each with its own seeded tie-breaker
//! let mut white = Player::new(Strategy::Conservative, CustomNumberGenerator::new(1));
//! let mut red = Player::new(Strategy::Aggressive, CustomNumberGenerator::new(2));
//!
//! // Seeded dice make the whole match reproducible
//! let mut game = Game::builder(&mut white, &mut red)
//!     .with_random_generator(CustomNumberGenerator::default())
//!     .with_paranoia(true)
//!     .build();
//!
//! // Play a match to 3 points, printing every board
//! let result = game.play_match(Score::to(3), |board| println!("{board}")).unwrap();
//!
//! assert!(result.score.match_over());
//! println!("{} games, final score {}", result.games.len(), result.score);
//! ```

/// Contains the `Board` aggregate, its layout constants and positional metrics.
pub mod board;
/// Contains the `Checker` colors.
pub mod checker;
/// Contains `MatchConfig`, the TOML-loadable settings of a self-played match.
pub mod config;
/// Contains the legal continuation generator.
pub mod continuations;
/// Contains the error types of the library.
pub mod error;
/// Contains the game and match drivers.
pub mod game;
/// Contains the `Chooser` trait and the heuristic strategies.
pub mod players;
/// Contains `Point`, the occupancy of a single pip.
pub mod point;
/// Contains traits and implementations for random number generation.
pub mod random;
/// Contains `Roll`, the dice left to play.
pub mod roll;
/// Contains the match `Score` and the Crawford rule bookkeeping.
pub mod score;
/// Contains the lexicographic selection engine the strategies are built on.
pub mod selection;
/// Contains the `Tracer` diagnostics sinks.
pub mod trace;
/// Contains turn taking, victory and doubling.
pub mod turn;
