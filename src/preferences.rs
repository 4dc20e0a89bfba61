use crate::app_dirs::AppDirs;
use crate::challenge::GameMode;
use crate::difficulty::DifficultyLevel;
use crate::error::PreferencesError;
use crate::language::Language;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Settings that outlive a game.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Preferences {
    pub high_score: u32,
    pub difficulty: DifficultyLevel,
    pub language: Language,
    pub mode: GameMode,
    preferred_locales: BTreeMap<Language, String>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            high_score: 0,
            difficulty: DifficultyLevel::Normal,
            language: Language::English,
            mode: GameMode::ClockToTime,
            preferred_locales: BTreeMap::new(),
        }
    }
}

impl Preferences {
    /// Chosen voice locale, or the language default.
    pub fn preferred_locale(&self, language: Language) -> &str {
        self.preferred_locales
            .get(&language)
            .map(String::as_str)
            .unwrap_or_else(|| language.default_locale())
    }

    pub fn set_preferred_locale(
        &mut self,
        language: Language,
        locale: &str,
    ) -> Result<(), PreferencesError> {
        let known = language
            .locales()
            .iter()
            .find(|l| l.eq_ignore_ascii_case(locale))
            .ok_or_else(|| PreferencesError::UnsupportedLocale {
                language,
                locale: locale.to_string(),
            })?;
        self.preferred_locales.insert(language, known.to_string());
        Ok(())
    }

    /// Keeps the larger of the stored and the given score.
    pub fn record_high_score(&mut self, score: u32) -> bool {
        if score > self.high_score {
            self.high_score = score;
            true
        } else {
            false
        }
    }
}

pub trait PreferenceStore {
    fn load(&self) -> Result<Preferences, PreferencesError>;
    fn save(&self, prefs: &Preferences) -> Result<(), PreferencesError>;
}

#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            path: AppDirs::config_path().unwrap_or_else(|| PathBuf::from("clockdrill.json")),
        }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FilePreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Result<Preferences, PreferencesError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Preferences::default()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, prefs: &Preferences) -> Result<(), PreferencesError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(prefs)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

/// Keeps preferences in memory only.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    prefs: RefCell<Option<Preferences>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Result<Preferences, PreferencesError> {
        Ok(self.prefs.borrow().clone().unwrap_or_default())
    }

    fn save(&self, prefs: &Preferences) -> Result<(), PreferencesError> {
        *self.prefs.borrow_mut() = Some(prefs.clone());
        Ok(())
    }
}
