use super::Language;
use include_dir::{include_dir, Dir};
use serde_json::from_str;
use std::collections::HashMap;
use std::error::Error;

static STRINGS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/strings");

/// Source of user-facing text by resource key.
pub trait LocalizedStringProvider {
    /// Falls back to the key itself when no translation exists.
    fn get_string(&self, key: &str) -> String;
}

/// String tables compiled into the binary, one JSON object per language.
#[derive(Debug, Clone)]
pub struct EmbeddedStrings {
    language: Language,
    table: HashMap<String, String>,
}

impl EmbeddedStrings {
    pub fn new(language: Language) -> Self {
        let table = read_table(language).unwrap_or_else(|e| {
            log::warn!("no string table for {language}: {e}");
            HashMap::new()
        });
        Self { language, table }
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

impl LocalizedStringProvider for EmbeddedStrings {
    fn get_string(&self, key: &str) -> String {
        self.table
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

fn read_table(language: Language) -> Result<HashMap<String, String>, Box<dyn Error>> {
    let file_name = format!("{}.json", language.code());
    let file = STRINGS_DIR
        .get_file(&file_name)
        .ok_or_else(|| format!("{file_name} not embedded"))?;
    let contents = file
        .contents_utf8()
        .ok_or_else(|| format!("{file_name} is not utf-8"))?;
    Ok(from_str(contents)?)
}
