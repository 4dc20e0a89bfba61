use crate::challenge::ActiveMode;
use crate::difficulty::DifficultyLevel;
use crate::error::ExportError;
use crate::language::Language;
use crate::time_of_day::TimeOfDay;
use chrono::{DateTime, Local};
use rusqlite::types::Type;
use rusqlite::{params, Connection, Result, Row};
use serde::Serialize;
use std::path::Path;
use std::str::FromStr;

/// One evaluated answer.
#[derive(Debug, Clone, PartialEq)]
pub struct AttemptRecord {
    pub target: TimeOfDay,
    pub answer: String,
    pub mode: ActiveMode,
    pub language: Language,
    pub correct: bool,
    pub timestamp: DateTime<Local>,
}

/// One finished (or abandoned) game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub difficulty: DifficultyLevel,
    pub correct: u32,
    pub wrong: u32,
    pub effective: u32,
    pub timestamp: DateTime<Local>,
}

/// How often targets at one minute mark were missed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinuteMissRate {
    pub minute: u8,
    pub attempts: u32,
    pub misses: u32,
}

impl MinuteMissRate {
    /// Percentage of missed attempts.
    pub fn rate(&self) -> f64 {
        if self.attempts == 0 {
            0.0
        } else {
            self.misses as f64 * 100.0 / self.attempts as f64
        }
    }
}

#[derive(Debug, Serialize)]
struct AttemptRow<'a> {
    timestamp: String,
    target: String,
    answer: &'a str,
    mode: String,
    language: String,
    correct: bool,
}

/// Play history backed by SQLite.
#[derive(Debug)]
pub struct StatsDb {
    conn: Connection,
}

impl StatsDb {
    /// Opens (creating if needed) the database at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                rusqlite::Error::SqliteFailure(
                    rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_CANTOPEN),
                    Some(format!("Failed to create directory: {}", e)),
                )
            })?;
        }
        Self::init(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS attempts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                target_hour INTEGER NOT NULL,
                target_minute INTEGER NOT NULL,
                answer TEXT NOT NULL,
                mode TEXT NOT NULL,
                language TEXT NOT NULL,
                correct BOOLEAN NOT NULL,
                timestamp TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_attempts_minute ON attempts(target_minute);
            CREATE TABLE IF NOT EXISTS games (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                difficulty TEXT NOT NULL,
                correct INTEGER NOT NULL,
                wrong INTEGER NOT NULL,
                effective INTEGER NOT NULL,
                timestamp TEXT NOT NULL
            );
            "#,
        )?;
        Ok(StatsDb { conn })
    }

    pub fn record_attempt(&self, attempt: &AttemptRecord) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO attempts
            (target_hour, target_minute, answer, mode, language, correct, timestamp)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                attempt.target.hour(),
                attempt.target.minute(),
                attempt.answer,
                attempt.mode.to_string(),
                attempt.language.to_string(),
                attempt.correct,
                attempt.timestamp.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    pub fn record_game(&self, game: &GameRecord) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO games (difficulty, correct, wrong, effective, timestamp)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                game.difficulty.to_string(),
                game.correct,
                game.wrong,
                game.effective,
                game.timestamp.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// All attempts, newest first.
    pub fn attempts(&self) -> Result<Vec<AttemptRecord>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT target_hour, target_minute, answer, mode, language, correct, timestamp
            FROM attempts
            ORDER BY timestamp DESC, id DESC
            "#,
        )?;
        let rows = stmt.query_map([], |row| {
            let hour: u8 = row.get(0)?;
            let minute: u8 = row.get(1)?;
            let target = TimeOfDay::new(hour, minute).ok_or_else(|| {
                rusqlite::Error::IntegralValueOutOfRange(0, i64::from(hour))
            })?;
            Ok(AttemptRecord {
                target,
                answer: row.get(2)?,
                mode: parse_column(row, 3)?,
                language: parse_column(row, 4)?,
                correct: row.get(5)?,
                timestamp: timestamp_column(row, 6)?,
            })
        })?;
        rows.collect()
    }

    /// Highest effective scores first; ties go to the earlier game.
    pub fn best_games(&self, limit: usize) -> Result<Vec<GameRecord>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT difficulty, correct, wrong, effective, timestamp
            FROM games
            ORDER BY effective DESC, timestamp ASC
            LIMIT ?1
            "#,
        )?;
        let rows = stmt.query_map([limit as i64], |row| {
            Ok(GameRecord {
                difficulty: parse_column(row, 0)?,
                correct: row.get(1)?,
                wrong: row.get(2)?,
                effective: row.get(3)?,
                timestamp: timestamp_column(row, 4)?,
            })
        })?;
        rows.collect()
    }

    /// Miss rate per target minute, for minutes that were ever asked.
    pub fn miss_rate_by_minute(&self) -> Result<Vec<MinuteMissRate>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT
                target_minute,
                COUNT(*) as attempts,
                SUM(CASE WHEN correct = 0 THEN 1 ELSE 0 END) as misses
            FROM attempts
            GROUP BY target_minute
            ORDER BY target_minute
            "#,
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(MinuteMissRate {
                minute: row.get(0)?,
                attempts: row.get(1)?,
                misses: row.get(2)?,
            })
        })?;
        rows.collect()
    }

    /// Clear all history (for testing or reset purposes)
    pub fn clear_all(&self) -> Result<()> {
        self.conn
            .execute_batch("DELETE FROM attempts; DELETE FROM games;")
    }

    /// Writes every attempt to a CSV file; returns how many rows were written.
    pub fn export_csv<P: AsRef<Path>>(&self, path: P) -> std::result::Result<usize, ExportError> {
        let attempts = self.attempts()?;
        let mut writer = csv::Writer::from_path(path)?;
        for attempt in &attempts {
            writer.serialize(AttemptRow {
                timestamp: attempt.timestamp.to_rfc3339(),
                target: attempt.target.to_string(),
                answer: &attempt.answer,
                mode: attempt.mode.to_string(),
                language: attempt.language.to_string(),
                correct: attempt.correct,
            })?;
        }
        writer.flush().map_err(csv::Error::from)?;
        Ok(attempts.len())
    }
}

fn parse_column<T>(row: &Row<'_>, idx: usize) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let text: String = row.get(idx)?;
    T::from_str(&text)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn timestamp_column(row: &Row<'_>, idx: usize) -> Result<DateTime<Local>> {
    let text: String = row.get(idx)?;
    DateTime::parse_from_rfc3339(&text)
        .map(|t| t.with_timezone(&Local))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
