use crate::challenge::ActiveMode;
use crate::language::Language;
use thiserror::Error;

/// A command the session refused in its current phase. Nothing changes when
/// one of these comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("the game is over; reset to play again")]
    GameOver,
    #[error("an answer is already being evaluated")]
    EvaluationInFlight,
    #[error("no answer is being evaluated")]
    NothingToComplete,
    #[error("this challenge expects a {expected} answer")]
    WrongAnswerKind { expected: ActiveMode },
}

#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("cannot access preferences: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid preferences: {0}")]
    Invalid(#[from] serde_json::Error),
    #[error("{locale} is not a {language} locale")]
    UnsupportedLocale { language: Language, locale: String },
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("cannot read history: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("cannot write csv: {0}")]
    Csv(#[from] csv::Error),
}
