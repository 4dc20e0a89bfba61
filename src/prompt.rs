use crate::challenge::{ActiveMode, Challenge};
use crate::language::{Language, LocalizedStringProvider};
use crate::session::{Score, SubmitOutcome};

/// Everything the presentation layer shows for one challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub mode: ActiveMode,
    /// Target as `HH:MM`.
    pub digital: String,
    /// Target as a phrase in the active language.
    pub phrase: String,
    pub instruction: String,
}

impl Prompt {
    pub fn new(
        challenge: &Challenge,
        language: Language,
        strings: &dyn LocalizedStringProvider,
    ) -> Self {
        Self {
            mode: challenge.mode,
            digital: challenge.target.to_string(),
            phrase: language.phrase(challenge.target),
            instruction: strings.get_string(challenge.mode.instruction_key()),
        }
    }

    /// What the player is asked about: the clock face in clock-to-time, the
    /// phrase in time-to-clock.
    pub fn question(&self) -> &str {
        match self.mode {
            ActiveMode::ClockToTime => &self.digital,
            ActiveMode::TimeToClock => &self.phrase,
        }
    }
}

/// "Correct!" or "Not quite", plus high score and game over notices.
pub fn result_message(outcome: &SubmitOutcome, strings: &dyn LocalizedStringProvider) -> String {
    let mut lines = vec![strings.get_string(if outcome.evaluation.is_correct() {
        "ResultCorrect"
    } else {
        "ResultIncorrect"
    })];
    if let Some(detail) = outcome.evaluation.explain() {
        lines.push(detail);
    }
    if outcome.new_high_score.is_some() {
        lines.push(strings.get_string("NewHighScore"));
    }
    if outcome.game_over {
        lines.push(strings.get_string("GameOver"));
    }
    lines.join("\n")
}

/// One-line scoreboard: score, mistakes (out of the limit, if any), high score.
pub fn score_line(score: &Score, high_score: u32, strings: &dyn LocalizedStringProvider) -> String {
    let mistakes = match score.difficulty.max_wrong_answers() {
        Some(max) => format!("{}/{max}", score.wrong),
        None => score.wrong.to_string(),
    };
    format!(
        "{} {} | {} {} | {} {}",
        strings.get_string("ScoreLabel"),
        score.effective(),
        strings.get_string("WrongAnswersLabel"),
        mistakes,
        strings.get_string("HighScoreLabel"),
        high_score,
    )
}
