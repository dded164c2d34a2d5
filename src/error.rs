use crate::roll::Die;
use std::path::PathBuf;

/// Ways a roll can be malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RollError {
    #[error("too many unique dice: {0:?}")]
    TooManyUniqueDice(Vec<Die>),

    #[error("too many effective dice: {0:?}")]
    TooManyDice(Vec<Die>),

    #[error("die {slot} out of range: {die}")]
    OutOfRange { slot: usize, die: Die },

    #[error("dice must be largest first, got {0} before {1}")]
    NotLargestFirst(Die, Die),

    #[error("a doublet of {0} must fill all four slots")]
    IncompleteDoublet(Die),
}

/// Ways a board can break the data model's invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid roll: {0}")]
    InvalidRoll(#[from] RollError),

    #[error("{0} Red checkers on the White bar")]
    RedOnWhiteBar(u8),

    #[error("{0} White checkers on the Red bar")]
    WhiteOnRedBar(u8),

    #[error("{0} Red checkers borne off on the White side")]
    RedBorneOffAsWhite(u8),

    #[error("{0} White checkers borne off on the Red side")]
    WhiteBorneOffAsRed(u8),

    #[error("{found} White checkers found, not 15")]
    WhiteCount { found: u32 },

    #[error("{found} Red checkers found, not 15")]
    RedCount { found: u32 },
}

/// Bad doubling callback combinations, reported before the board is touched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error("a double may be offered but there is no way to accept it")]
    OfferWithoutAccept,

    #[error("a double may be accepted but is never offered")]
    AcceptWithoutOffer,
}

/// Errors that can occur while driving a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("chooser returned {returned} boards from {offered} candidates")]
    TooManyChoices { returned: usize, offered: usize },

    #[error("chooser picked a board that is not a legal continuation: {0}")]
    NotACandidate(String),

    #[error("board became invalid: {0}")]
    InvalidBoard(#[from] BoardError),

    #[error("turn error: {0}")]
    Turn(#[from] TurnError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
