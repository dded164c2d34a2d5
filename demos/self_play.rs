extern crate backgammon_lib;

use backgammon_lib::config::MatchConfig;
use backgammon_lib::game::Game;
use backgammon_lib::players::Player;
use backgammon_lib::trace::{NoopTracer, StderrTracer, Tracer};
use std::error::Error;
use std::path::Path;

fn main() -> Result<(), Box<dyn Error>> {
    // An optional TOML file with the match settings
    let config = match std::env::args().nth(1) {
        Some(path) => MatchConfig::load_or_default(Path::new(&path))?,
        None => MatchConfig::default(),
    };
    config.validate()?;

    let mut white = Player::new(config.white, config.random_generator(1));
    let mut red = Player::new(config.red, config.random_generator(2));
    let tracer: Box<dyn Tracer> = if config.trace {
        Box::new(StderrTracer)
    } else {
        Box::new(NoopTracer)
    };

    let mut game = Game::builder(&mut white, &mut red)
        .with_random_generator(config.random_generator(0))
        .with_tracer(tracer)
        .with_paranoia(config.paranoid)
        .build();

    println!(
        "White plays {}, Red plays {}, {}",
        config.white,
        config.red,
        if config.goal == 0 {
            "a single money game".to_string()
        } else {
            format!("a match to {}", config.goal)
        }
    );

    let mut num_boards = 0;
    let result = game.play_match(config.score(), |board| {
        num_boards += 1;
        println!("{board}");
    })?;

    for (i, played) in result.games.iter().enumerate() {
        println!(
            "Game {}: {} won {} point(s) after {} boards, score {}",
            i + 1,
            played.victor,
            played.stakes,
            played.num_boards,
            played.score
        );
    }
    println!("{num_boards} boards in total, final score {}", result.score);
    Ok(())
}
