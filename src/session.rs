use crate::challenge::{ActiveMode, Challenge, ChallengeGenerator, GameMode};
use crate::difficulty::DifficultyLevel;
use crate::error::SessionError;
use crate::evaluator::{Answer, AnswerEvaluator, Evaluation};
use crate::language::Language;
use crate::random::RandomSource;
use crate::time_of_day::TimeOfDay;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub language: Language,
    pub difficulty: DifficultyLevel,
    pub mode: GameMode,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            language: Language::English,
            difficulty: DifficultyLevel::Normal,
            mode: GameMode::ClockToTime,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingAnswer,
    /// An answer has been judged but not yet applied to the score.
    Evaluating,
    GameOver,
}

/// Running tally for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub correct: u32,
    pub wrong: u32,
    pub difficulty: DifficultyLevel,
}

impl Score {
    pub fn new(difficulty: DifficultyLevel) -> Self {
        Self {
            correct: 0,
            wrong: 0,
            difficulty,
        }
    }

    /// The tally after one more answer.
    pub fn record(self, correct: bool) -> Self {
        if correct {
            Self {
                correct: self.correct + 1,
                ..self
            }
        } else {
            Self {
                wrong: self.wrong + 1,
                ..self
            }
        }
    }

    pub fn effective(&self) -> u32 {
        self.difficulty.effective_score(self.correct, self.wrong)
    }

    pub fn is_game_over(&self) -> bool {
        self.difficulty.is_game_over(self.wrong)
    }

    /// Wrong answers still allowed; `None` when unlimited.
    pub fn lives_left(&self) -> Option<u32> {
        self.difficulty
            .max_wrong_answers()
            .map(|max| max.saturating_sub(self.wrong))
    }
}

/// What a completed submission did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub evaluation: Evaluation,
    pub score: Score,
    /// Set when this answer raised the high score.
    pub new_high_score: Option<u32>,
    pub game_over: bool,
    /// The challenge generated after a correct answer.
    pub next_challenge: Option<Challenge>,
}

/// One play-screen's worth of game state.
///
/// All transitions go through `submit`, `switch_mode`, `next_challenge` and
/// `reset`; the phase guard rejects anything out of order.
#[derive(Debug)]
pub struct GameSession<R: RandomSource> {
    source: R,
    generator: ChallengeGenerator,
    evaluator: AnswerEvaluator,
    mode: GameMode,
    challenge: Challenge,
    score: Score,
    high_score: u32,
    phase: Phase,
    pending: Option<Evaluation>,
}

impl<R: RandomSource> GameSession<R> {
    /// Starts a fresh game. `high_score` is the persisted best so far.
    pub fn new(config: SessionConfig, high_score: u32, mut source: R) -> Self {
        let generator = ChallengeGenerator;
        let challenge = generator.next(config.mode, &mut source);
        log::debug!(
            "new session: {} {} {}",
            config.language,
            config.difficulty,
            config.mode
        );
        Self {
            source,
            generator,
            evaluator: AnswerEvaluator::new(config.language),
            mode: config.mode,
            challenge,
            score: Score::new(config.difficulty),
            high_score,
            phase: Phase::AwaitingAnswer,
            pending: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn challenge(&self) -> Challenge {
        self.challenge
    }

    pub fn target(&self) -> TimeOfDay {
        self.challenge.target
    }

    pub fn active_mode(&self) -> ActiveMode {
        self.challenge.mode
    }

    /// The requested mode; may be `Random`.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn language(&self) -> Language {
        self.evaluator.language()
    }

    pub fn difficulty(&self) -> DifficultyLevel {
        self.score.difficulty
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn correct_answers(&self) -> u32 {
        self.score.correct
    }

    pub fn wrong_answers(&self) -> u32 {
        self.score.wrong
    }

    pub fn effective_score(&self) -> u32 {
        self.score.effective()
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn max_wrong_answers(&self) -> Option<u32> {
        self.score.difficulty.max_wrong_answers()
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Zeroes the counters and deals a new challenge. Always allowed.
    pub fn reset(&mut self) {
        self.score = Score::new(self.score.difficulty);
        self.pending = None;
        self.phase = Phase::AwaitingAnswer;
        self.deal();
        log::debug!("session reset");
    }

    /// Starts over at another difficulty.
    pub fn change_difficulty(&mut self, difficulty: DifficultyLevel) {
        self.score.difficulty = difficulty;
        self.reset();
    }

    /// Answers are read in the new language from the next submission on.
    pub fn set_language(&mut self, language: Language) -> Result<(), SessionError> {
        if self.phase == Phase::Evaluating {
            return Err(SessionError::EvaluationInFlight);
        }
        self.evaluator = AnswerEvaluator::new(language);
        Ok(())
    }

    /// Judges `answer` and enters `Evaluating`. The score is untouched until
    /// [`complete_submission`](Self::complete_submission).
    pub fn begin_submission(&mut self, answer: &Answer) -> Result<Evaluation, SessionError> {
        self.ensure_awaiting()?;
        let expected = self.challenge.mode;
        match (answer, expected) {
            (Answer::Text(_), ActiveMode::ClockToTime)
            | (Answer::Hands { .. }, ActiveMode::TimeToClock) => {}
            _ => return Err(SessionError::WrongAnswerKind { expected }),
        }

        let evaluation = self.evaluator.evaluate(answer, self.challenge.target);
        self.phase = Phase::Evaluating;
        self.pending = Some(evaluation);
        Ok(evaluation)
    }

    /// Applies the pending evaluation to the score and leaves `Evaluating`.
    pub fn complete_submission(&mut self) -> Result<SubmitOutcome, SessionError> {
        let evaluation = match (self.phase, self.pending.take()) {
            (Phase::Evaluating, Some(evaluation)) => evaluation,
            (Phase::GameOver, _) => return Err(SessionError::GameOver),
            _ => return Err(SessionError::NothingToComplete),
        };

        self.score = self.score.record(evaluation.is_correct());
        let new_high_score = self.raise_high_score();
        let game_over = self.score.is_game_over();

        let next_challenge = if game_over {
            self.phase = Phase::GameOver;
            log::debug!("game over after {} wrong answers", self.score.wrong);
            None
        } else {
            self.phase = Phase::AwaitingAnswer;
            if evaluation.is_correct() {
                Some(self.deal())
            } else {
                None
            }
        };

        Ok(SubmitOutcome {
            evaluation,
            score: self.score,
            new_high_score,
            game_over,
            next_challenge,
        })
    }

    /// Evaluates and applies an answer in one step.
    pub fn submit(&mut self, answer: &Answer) -> Result<SubmitOutcome, SessionError> {
        self.begin_submission(answer)?;
        self.complete_submission()
    }

    /// Skips the current challenge, e.g. after a wrong answer the player gave up on.
    pub fn next_challenge(&mut self) -> Result<Challenge, SessionError> {
        self.ensure_awaiting()?;
        Ok(self.deal())
    }

    /// Changes the requested mode and deals a challenge in it.
    pub fn switch_mode(&mut self, mode: GameMode) -> Result<Challenge, SessionError> {
        self.ensure_awaiting()?;
        self.mode = mode;
        Ok(self.deal())
    }

    fn ensure_awaiting(&self) -> Result<(), SessionError> {
        match self.phase {
            Phase::AwaitingAnswer => Ok(()),
            Phase::Evaluating => Err(SessionError::EvaluationInFlight),
            Phase::GameOver => Err(SessionError::GameOver),
        }
    }

    fn deal(&mut self) -> Challenge {
        self.challenge = self.generator.next(self.mode, &mut self.source);
        log::debug!(
            "challenge {} as {}",
            self.challenge.target,
            self.challenge.mode
        );
        self.challenge
    }

    fn raise_high_score(&mut self) -> Option<u32> {
        let effective = self.score.effective();
        if effective > self.high_score {
            self.high_score = effective;
            Some(effective)
        } else {
            None
        }
    }
}
