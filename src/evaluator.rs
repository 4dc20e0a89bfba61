use crate::language::Language;
use crate::time_of_day::TimeOfDay;

/// Largest minute difference still accepted as correct.
pub const MINUTE_TOLERANCE: u8 = 1;

/// A player's answer to the current challenge.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    /// Free text in the active language (clock-to-time).
    Text(String),
    /// Continuous dial positions: hour in 0.0..12.0, minute in 0.0..60.0 (time-to-clock).
    Hands { hour: f64, minute: f64 },
}

impl Answer {
    pub fn text(text: impl Into<String>) -> Self {
        Answer::Text(text.into())
    }

    /// Reads `hour minute` dial positions such as `7 45` or `7.4 44.8`.
    pub fn hands_from_text(text: &str) -> Option<Self> {
        let mut parts = text.split_whitespace().map(str::parse::<f64>);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(Ok(hour)), Some(Ok(minute)), None) => Some(Answer::Hands { hour, minute }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    WrongHour,
    WrongMinute,
    WrongHourAndMinute,
    /// The text matched no phrasing, or the dial positions were not numbers.
    Unrecognized,
}

/// Outcome of comparing one answer against a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub verdict: Verdict,
    /// The answer as understood, when it could be understood at all.
    pub answer: Option<TimeOfDay>,
    pub target: TimeOfDay,
}

impl Evaluation {
    pub fn is_correct(&self) -> bool {
        self.verdict == Verdict::Correct
    }

    /// Why the answer was judged the way it was. Debug builds only; release
    /// builds never show players more than right or wrong.
    pub fn explain(&self) -> Option<String> {
        if !cfg!(debug_assertions) {
            return None;
        }
        let answer = match self.answer {
            Some(t) => t.to_string(),
            None => "unrecognized".to_string(),
        };
        let failed = match self.verdict {
            Verdict::Correct => "all checks passed",
            Verdict::WrongHour => "hour differs",
            Verdict::WrongMinute => "minute off by more than one",
            Verdict::WrongHourAndMinute => "hour and minute differ",
            Verdict::Unrecognized => "could not read answer",
        };
        Some(format!("answer {answer} vs target {}: {failed}", self.target))
    }
}

/// Judges answers for one language.
#[derive(Debug, Clone, Copy)]
pub struct AnswerEvaluator {
    language: Language,
}

impl AnswerEvaluator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn evaluate(&self, answer: &Answer, target: TimeOfDay) -> Evaluation {
        let evaluation = match answer {
            Answer::Text(text) => self.evaluate_text(text, target),
            Answer::Hands { hour, minute } => evaluate_hands(*hour, *minute, target),
        };
        if let Some(detail) = evaluation.explain() {
            log::debug!("{detail}");
        }
        evaluation
    }

    /// Phrase in the active language first, then digital `h:mm`.
    pub fn evaluate_text(&self, text: &str, target: TimeOfDay) -> Evaluation {
        let answer = self
            .language
            .parse(text)
            .or_else(|| TimeOfDay::from_digital(text));
        match answer {
            Some(candidate) => Evaluation {
                verdict: compare(candidate, target),
                answer: Some(candidate),
                target,
            },
            None => Evaluation {
                verdict: Verdict::Unrecognized,
                answer: None,
                target,
            },
        }
    }
}

/// Dial positions are rounded to whole hours and minutes before comparing.
pub fn evaluate_hands(hour: f64, minute: f64, target: TimeOfDay) -> Evaluation {
    if !hour.is_finite() || !minute.is_finite() {
        return Evaluation {
            verdict: Verdict::Unrecognized,
            answer: None,
            target,
        };
    }
    let candidate = TimeOfDay::wrapping(
        (hour.round() as i32).rem_euclid(12),
        minute.round() as i32,
    );
    Evaluation {
        verdict: compare(candidate, target),
        answer: Some(candidate),
        target,
    }
}

/// Same 12-hour position and at most one minute apart. No wraparound across
/// the hour: 11:59 against 12:00 fails on the hour.
pub fn matches(candidate: TimeOfDay, target: TimeOfDay) -> bool {
    compare(candidate, target) == Verdict::Correct
}

fn compare(candidate: TimeOfDay, target: TimeOfDay) -> Verdict {
    let hour_ok = candidate.normalized_hour() == target.normalized_hour();
    let minute_ok = candidate.minute().abs_diff(target.minute()) <= MINUTE_TOLERANCE;
    match (hour_ok, minute_ok) {
        (true, true) => Verdict::Correct,
        (false, true) => Verdict::WrongHour,
        (true, false) => Verdict::WrongMinute,
        (false, false) => Verdict::WrongHourAndMinute,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn t(hour: u8, minute: u8) -> TimeOfDay {
        TimeOfDay::new(hour, minute).unwrap()
    }

    #[test]
    fn test_matches_twelve_hour_positions() {
        assert!(matches(t(7, 45), t(19, 45)));
        assert!(matches(t(12, 0), t(0, 0)));
        assert!(matches(t(12, 30), t(0, 30)));
        assert!(!matches(t(6, 45), t(7, 45)));
    }

    #[test]
    fn test_minute_tolerance() {
        assert!(matches(t(3, 24), t(3, 25)));
        assert!(matches(t(3, 26), t(3, 25)));
        assert!(!matches(t(3, 27), t(3, 25)));
        assert!(!matches(t(3, 23), t(3, 25)));
    }

    #[test]
    fn test_no_wraparound_across_the_hour() {
        assert!(!matches(t(11, 59), t(12, 0)));
        assert!(!matches(t(3, 0), t(3, 59)));
    }

    #[test]
    fn test_text_answers() {
        let dutch = AnswerEvaluator::new(Language::Dutch);
        assert!(dutch.evaluate_text("kwart voor acht", t(19, 45)).is_correct());
        assert!(dutch.evaluate_text("half vijf", t(16, 30)).is_correct());
        assert_matches!(
            dutch.evaluate_text("half vijf", t(17, 30)).verdict,
            Verdict::WrongHour
        );

        let english = AnswerEvaluator::new(Language::English);
        assert!(english.evaluate_text("half past four", t(16, 30)).is_correct());
        assert_matches!(
            english.evaluate_text("ten past four", t(16, 30)).verdict,
            Verdict::WrongMinute
        );
    }

    #[test]
    fn test_text_uses_active_language_only() {
        let english = AnswerEvaluator::new(Language::English);
        let eval = english.evaluate_text("kwart over drie", t(3, 15));
        assert_eq!(eval.verdict, Verdict::Unrecognized);
        assert_eq!(eval.answer, None);
    }

    #[test]
    fn test_digital_fallback() {
        let english = AnswerEvaluator::new(Language::English);
        assert!(english.evaluate_text("19:45", t(7, 45)).is_correct());
        assert!(english.evaluate_text("7:46", t(7, 45)).is_correct());
    }

    #[test]
    fn test_unparseable_text() {
        let dutch = AnswerEvaluator::new(Language::Dutch);
        for text in ["", "   ", "banana time"] {
            assert_eq!(dutch.evaluate_text(text, t(1, 0)).verdict, Verdict::Unrecognized);
        }
    }

    #[test]
    fn test_hands_are_rounded() {
        assert!(evaluate_hands(7.4, 44.6, t(19, 45)).is_correct());
        assert!(evaluate_hands(0.2, 0.4, t(12, 0)).is_correct());
        assert!(evaluate_hands(11.6, 0.0, t(0, 0)).is_correct());
        assert!(evaluate_hands(7.0, 46.4, t(7, 45)).is_correct());
        assert_eq!(evaluate_hands(7.6, 45.0, t(7, 45)).verdict, Verdict::WrongHour);
        assert_eq!(
            evaluate_hands(7.0, 47.5, t(7, 45)).verdict,
            Verdict::WrongMinute
        );
    }

    #[test]
    fn test_hands_from_text() {
        assert_eq!(
            Answer::hands_from_text(" 7 45 "),
            Some(Answer::Hands {
                hour: 7.0,
                minute: 45.0
            })
        );
        assert_eq!(Answer::hands_from_text("7"), None);
        assert_eq!(Answer::hands_from_text("7 45 0"), None);
        assert_eq!(Answer::hands_from_text("seven 45"), None);
    }

    #[test]
    fn test_hands_reject_non_numbers() {
        assert_eq!(
            evaluate_hands(f64::NAN, 0.0, t(1, 0)).verdict,
            Verdict::Unrecognized
        );
    }

    #[test]
    fn test_explain_in_debug_builds() {
        let eval = evaluate_hands(7.0, 50.0, t(7, 45));
        if cfg!(debug_assertions) {
            let detail = eval.explain().unwrap();
            assert!(detail.contains("07:50"));
            assert!(detail.contains("minute"));
        } else {
            assert!(eval.explain().is_none());
        }
    }
}
