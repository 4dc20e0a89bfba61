use chrono::{DateTime, Local};
use clap::Parser;
use clockdrill::{
    app_dirs::AppDirs,
    challenge::{ActiveMode, GameMode},
    difficulty::DifficultyLevel,
    evaluator::Answer,
    language::{EmbeddedStrings, Language, LocalizedStringProvider},
    preferences::{FilePreferenceStore, PreferenceStore, Preferences},
    prompt::{result_message, score_line, Prompt},
    random::{RandomSource, RngSource},
    session::{GameSession, SessionConfig},
    stats::{AttemptRecord, GameRecord, StatsDb},
};
use itertools::Itertools;
use std::{
    error::Error,
    io::{self, BufRead, Write},
    path::PathBuf,
};
use time_humanize::{Accuracy, HumanTime, Tense};

/// clock-reading practice in dutch and english
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Practise reading analog clocks. Answers are typed on stdin, one per line; lines starting with ':' are commands (:next, :mode <mode>, :reset, :quit)."
)]
pub struct Cli {
    /// language answers are read in [default: saved preference]
    #[clap(short = 'l', long)]
    language: Option<Language>,

    /// beginner, normal or advanced [default: saved preference]
    #[clap(short = 'd', long)]
    difficulty: Option<DifficultyLevel>,

    /// clock-to-time, time-to-clock or random [default: saved preference]
    #[clap(short = 'm', long)]
    mode: Option<GameMode>,

    /// seed for a reproducible sequence of challenges
    #[clap(long)]
    seed: Option<u64>,

    /// keep preferences and history in this directory
    #[clap(long)]
    data_dir: Option<PathBuf>,

    /// show best games and most-missed minutes, then exit
    #[clap(long)]
    history: bool,

    /// export every recorded answer to a csv file, then exit
    #[clap(long, value_name = "FILE")]
    export: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let (config_path, db_path) = match &cli.data_dir {
        Some(dir) => {
            let (config, db) = AppDirs::in_dir(dir);
            (Some(config), Some(db))
        }
        None => (AppDirs::config_path(), AppDirs::db_path()),
    };
    let store = match config_path {
        Some(path) => FilePreferenceStore::with_path(path),
        None => FilePreferenceStore::new(),
    };
    let stats = db_path.and_then(|path| match StatsDb::open(&path) {
        Ok(db) => Some(db),
        Err(e) => {
            log::warn!("history disabled, cannot open {}: {e}", path.display());
            None
        }
    });

    if cli.history {
        return show_history(stats.as_ref());
    }
    if let Some(path) = &cli.export {
        let db = stats.ok_or("no history database available")?;
        let rows = db.export_csv(path)?;
        println!("exported {rows} answers to {}", path.display());
        return Ok(());
    }

    // An unreadable file is left as it is; this run plays on defaults and
    // saves nothing.
    let (mut prefs, store) = match store.load() {
        Ok(prefs) => (prefs, Some(store)),
        Err(e) => {
            log::warn!(
                "using default preferences, {} left untouched: {e}",
                store.path().display()
            );
            (Preferences::default(), None)
        }
    };
    prefs.language = cli.language.unwrap_or(prefs.language);
    prefs.difficulty = cli.difficulty.unwrap_or(prefs.difficulty);
    prefs.mode = cli.mode.unwrap_or(prefs.mode);
    save_preferences(store.as_ref(), &prefs);

    let config = SessionConfig {
        language: prefs.language,
        difficulty: prefs.difficulty,
        mode: prefs.mode,
    };
    let source = match cli.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };
    let mut shell = Shell {
        session: GameSession::new(config, prefs.high_score, source),
        strings: EmbeddedStrings::new(prefs.language),
        stats,
        store,
        prefs,
        game_recorded: false,
        out: io::stdout().lock(),
    };
    shell.run(io::stdin().lock())
}

fn show_history(stats: Option<&StatsDb>) -> Result<(), Box<dyn Error>> {
    let db = stats.ok_or("no history database available")?;
    let games = db.best_games(10)?;
    if games.is_empty() {
        println!("no games played yet");
    }
    for (rank, game) in games.iter().enumerate() {
        println!(
            "{:>2}. {:>3} points  {:<8} {}",
            rank + 1,
            game.effective,
            game.difficulty,
            ago(game.timestamp)
        );
    }

    let misses = db
        .miss_rate_by_minute()?
        .into_iter()
        .filter(|m| m.misses > 0)
        .sorted_by(|a, b| b.rate().total_cmp(&a.rate()))
        .take(5)
        .map(|m| format!(":{:02} ({:.0}%)", m.minute, m.rate()))
        .join(", ");
    if !misses.is_empty() {
        println!("most missed: {misses}");
    }
    Ok(())
}

fn ago(timestamp: DateTime<Local>) -> String {
    let elapsed = (Local::now() - timestamp).to_std().unwrap_or_default();
    HumanTime::from(elapsed).to_text_en(Accuracy::Rough, Tense::Past)
}

fn save_preferences(store: Option<&FilePreferenceStore>, prefs: &Preferences) {
    if let Some(Err(e)) = store.map(|s| s.save(prefs)) {
        log::warn!("cannot save preferences: {e}");
    }
}

struct Shell<R: RandomSource, W: Write> {
    session: GameSession<R>,
    strings: EmbeddedStrings,
    stats: Option<StatsDb>,
    store: Option<FilePreferenceStore>,
    prefs: Preferences,
    game_recorded: bool,
    out: W,
}

impl<R: RandomSource, W: Write> Shell<R, W> {
    fn run(&mut self, input: impl BufRead) -> Result<(), Box<dyn Error>> {
        writeln!(
            self.out,
            "{}: {}, {}",
            self.strings.get_string("AppTitle"),
            self.strings.get_string(self.session.difficulty().label_key()),
            self.strings.get_string(self.session.mode().label_key()),
        )?;
        self.show_prompt()?;

        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match line.strip_prefix(':') {
                Some("quit") => break,
                Some(command) => self.command(command)?,
                None => self.answer(line)?,
            }
        }

        self.finish_game();
        Ok(())
    }

    fn command(&mut self, command: &str) -> Result<(), Box<dyn Error>> {
        let mut words = command.split_whitespace();
        match (words.next(), words.next()) {
            (Some("next"), None) => match self.session.next_challenge() {
                Ok(_) => self.show_prompt()?,
                Err(e) => writeln!(self.out, "{e}")?,
            },
            (Some("reset"), None) => {
                self.finish_game();
                self.session.reset();
                self.game_recorded = false;
                self.show_prompt()?;
            }
            (Some("mode"), Some(name)) => match name.parse::<GameMode>() {
                Ok(mode) => match self.session.switch_mode(mode) {
                    Ok(_) => {
                        self.prefs.mode = mode;
                        save_preferences(self.store.as_ref(), &self.prefs);
                        self.show_prompt()?;
                    }
                    Err(e) => writeln!(self.out, "{e}")?,
                },
                Err(_) => writeln!(
                    self.out,
                    "unknown mode {name}, expected one of {}",
                    [GameMode::ClockToTime, GameMode::TimeToClock, GameMode::Random]
                        .iter()
                        .join(", ")
                )?,
            },
            _ => writeln!(self.out, "commands: :next, :mode <mode>, :reset, :quit")?,
        }
        Ok(())
    }

    fn answer(&mut self, line: &str) -> Result<(), Box<dyn Error>> {
        let target = self.session.challenge();
        let answer = match target.mode {
            ActiveMode::ClockToTime => Answer::text(line),
            ActiveMode::TimeToClock => match Answer::hands_from_text(line) {
                Some(hands) => hands,
                None => {
                    writeln!(
                        self.out,
                        "{} {}",
                        self.strings.get_string("HourLabel"),
                        self.strings.get_string("MinuteLabel")
                    )?;
                    return Ok(());
                }
            },
        };

        let outcome = match self.session.submit(&answer) {
            Ok(outcome) => outcome,
            Err(e) => {
                writeln!(self.out, "{e}")?;
                return Ok(());
            }
        };
        self.record_attempt(&AttemptRecord {
            target: target.target,
            answer: line.to_string(),
            mode: target.mode,
            language: self.session.language(),
            correct: outcome.evaluation.is_correct(),
            timestamp: Local::now(),
        });
        if let Some(high) = outcome.new_high_score {
            if self.prefs.record_high_score(high) {
                save_preferences(self.store.as_ref(), &self.prefs);
            }
        }

        writeln!(self.out, "{}", result_message(&outcome, &self.strings))?;
        writeln!(
            self.out,
            "{}",
            score_line(&outcome.score, self.session.high_score(), &self.strings)
        )?;
        if outcome.game_over {
            writeln!(
                self.out,
                "{} {}",
                self.strings.get_string("AnswerWas"),
                self.session.language().phrase(target.target)
            )?;
            self.finish_game();
        } else if outcome.next_challenge.is_some() {
            self.show_prompt()?;
        }
        Ok(())
    }

    fn show_prompt(&mut self) -> io::Result<()> {
        let prompt = Prompt::new(
            &self.session.challenge(),
            self.session.language(),
            &self.strings,
        );
        writeln!(self.out, "{}", prompt.instruction)?;
        writeln!(
            self.out,
            "{}: {}",
            self.strings.get_string("PromptLabel"),
            prompt.question()
        )?;
        self.out.flush()
    }

    fn record_attempt(&self, attempt: &AttemptRecord) {
        if let Some(db) = &self.stats {
            if let Err(e) = db.record_attempt(attempt) {
                log::warn!("cannot record answer: {e}");
            }
        }
    }

    /// Stores the game once, if anything was answered.
    fn finish_game(&mut self) {
        let score = self.session.score();
        if self.game_recorded || score.correct + score.wrong == 0 {
            return;
        }
        self.game_recorded = true;
        if let Some(db) = &self.stats {
            let game = GameRecord {
                difficulty: score.difficulty,
                correct: score.correct,
                wrong: score.wrong,
                effective: score.effective(),
                timestamp: Local::now(),
            };
            if let Err(e) = db.record_game(&game) {
                log::warn!("cannot record game: {e}");
            }
        }
    }
}
