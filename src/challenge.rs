use crate::random::RandomSource;
use crate::time_of_day::TimeOfDay;
use serde::{Deserialize, Serialize};

/// What the player asked to practise.
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
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum GameMode {
    /// A clock is shown; the player answers in words.
    #[default]
    ClockToTime,
    /// A phrase is shown; the player sets the hands.
    TimeToClock,
    /// Either of the above, drawn again for every challenge.
    Random,
}

/// A mode with `Random` already resolved.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ActiveMode {
    ClockToTime,
    TimeToClock,
}

impl GameMode {
    pub fn resolve(&self, source: &mut dyn RandomSource) -> ActiveMode {
        match self {
            GameMode::ClockToTime => ActiveMode::ClockToTime,
            GameMode::TimeToClock => ActiveMode::TimeToClock,
            GameMode::Random => {
                if source.next_int(0, 2) == 0 {
                    ActiveMode::ClockToTime
                } else {
                    ActiveMode::TimeToClock
                }
            }
        }
    }

    /// Resource key for the display name.
    pub fn label_key(&self) -> &'static str {
        match self {
            GameMode::ClockToTime => "ModeClockToTime",
            GameMode::TimeToClock => "ModeTimeToClock",
            GameMode::Random => "ModeRandom",
        }
    }
}

impl ActiveMode {
    pub fn instruction_key(&self) -> &'static str {
        match self {
            ActiveMode::ClockToTime => "ClockToTimeInstruction",
            ActiveMode::TimeToClock => "TimeToClockInstruction",
        }
    }
}

/// One round: a target time and the way it is asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Challenge {
    pub target: TimeOfDay,
    pub mode: ActiveMode,
}

/// Minute granularity of generated targets.
pub const MINUTE_STEP: i32 = 5;

/// Draws random targets on five-minute boundaries across the whole day.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChallengeGenerator;

impl ChallengeGenerator {
    pub fn next_time(&self, source: &mut dyn RandomSource) -> TimeOfDay {
        let hour = source.next_int(0, 24);
        let minute = source.next_int(0, 60 / MINUTE_STEP) * MINUTE_STEP;
        TimeOfDay::wrapping(hour, minute)
    }

    /// Resolves the mode first, then draws the time.
    pub fn next(&self, mode: GameMode, source: &mut dyn RandomSource) -> Challenge {
        let mode = mode.resolve(source);
        let target = self.next_time(source);
        Challenge { target, mode }
    }
}
