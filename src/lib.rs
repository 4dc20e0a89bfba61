// Library surface for the shell binary and integration tests.
pub mod app_dirs;
pub mod challenge;
pub mod difficulty;
pub mod error;
pub mod evaluator;
pub mod language;
pub mod preferences;
pub mod prompt;
pub mod random;
pub mod session;
pub mod stats;
pub mod time_of_day;

pub use challenge::{ActiveMode, Challenge, ChallengeGenerator, GameMode};
pub use difficulty::DifficultyLevel;
pub use evaluator::{Answer, AnswerEvaluator, Evaluation, Verdict};
pub use language::Language;
pub use session::{GameSession, Phase, SessionConfig};
pub use time_of_day::TimeOfDay;
