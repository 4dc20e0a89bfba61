use serde::{Deserialize, Serialize};

/// How forgiving a game is about wrong answers.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DifficultyLevel {
    /// Unlimited tries; wrong answers count against the score.
    Beginner,
    #[default]
    Normal,
    Advanced,
}

impl DifficultyLevel {
    pub const ALL: [DifficultyLevel; 3] = [
        DifficultyLevel::Beginner,
        DifficultyLevel::Normal,
        DifficultyLevel::Advanced,
    ];

    /// Wrong answers that end the game; `None` means the game never ends.
    pub fn max_wrong_answers(&self) -> Option<u32> {
        match self {
            DifficultyLevel::Beginner => None,
            DifficultyLevel::Normal => Some(5),
            DifficultyLevel::Advanced => Some(3),
        }
    }

    /// Difficulty-adjusted score used for high-score comparison.
    pub fn effective_score(&self, correct: u32, wrong: u32) -> u32 {
        match self {
            DifficultyLevel::Beginner => correct.saturating_sub(wrong),
            DifficultyLevel::Normal | DifficultyLevel::Advanced => correct,
        }
    }

    pub fn is_game_over(&self, wrong: u32) -> bool {
        self.max_wrong_answers().is_some_and(|max| wrong >= max)
    }

    /// Resource key for the display name.
    pub fn label_key(&self) -> &'static str {
        match self {
            DifficultyLevel::Beginner => "DifficultyBeginner",
            DifficultyLevel::Normal => "DifficultyNormal",
            DifficultyLevel::Advanced => "DifficultyAdvanced",
        }
    }
}
