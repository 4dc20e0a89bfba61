use crate::time_of_day::TimeOfDay;

/// Lowercases, trims and splits a phrase into bare word tokens.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    text.trim()
        .to_lowercase()
        .replace(&['\u{2019}', '\u{2018}', '`'][..], "'")
        .split_whitespace()
        .map(|t| t.trim_matches(|c| matches!(c, '.' | ',' | '!' | '?' | ';' | ':' | '"')))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Plain decimal token, no sign.
pub(crate) fn digits(token: &str) -> Option<u8> {
    if token.is_empty() || token.len() > 2 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// Position of `token` in a 1-based word table.
pub(crate) fn lookup(table: &[&str], token: &str) -> Option<u8> {
    table
        .iter()
        .position(|w| *w == token)
        .and_then(|i| u8::try_from(i + 1).ok())
}

/// Resolves captured tokens into numbers for one language.
pub(crate) trait Vocabulary {
    /// Hour words and digits, 1..=12.
    fn hour(&self, token: &str) -> Option<u8>;
    /// Minute words and digits, 0..=59.
    fn minute(&self, token: &str) -> Option<u8>;
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum Slot {
    Word(&'static [&'static str]),
    Minute,
    Hour,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Captures {
    pub minute: u8,
    pub hour: u8,
}

/// One phrasing: a fixed token pattern and how to turn its captures into a time.
pub(crate) struct Rule {
    pub name: &'static str,
    pub pattern: &'static [Slot],
    pub build: fn(Captures) -> Option<TimeOfDay>,
}

impl Rule {
    /// The leftmost window whose literal words line up and whose captures
    /// resolve to a time.
    fn apply<V: Vocabulary>(&self, vocab: &V, tokens: &[String]) -> Option<TimeOfDay> {
        tokens
            .windows(self.pattern.len())
            .filter(|w| self.literals_match(w))
            .find_map(|w| self.resolve(vocab, w))
    }

    fn resolve<V: Vocabulary>(&self, vocab: &V, window: &[String]) -> Option<TimeOfDay> {
        let mut captures = Captures::default();
        for (slot, token) in self.pattern.iter().zip(window) {
            match slot {
                Slot::Word(_) => {}
                Slot::Minute => captures.minute = vocab.minute(token)?,
                Slot::Hour => captures.hour = vocab.hour(token)?,
            }
        }
        (self.build)(captures)
    }

    fn literals_match(&self, window: &[String]) -> bool {
        self.pattern.iter().zip(window).all(|(slot, token)| match slot {
            Slot::Word(words) => words.contains(&token.as_str()),
            Slot::Minute | Slot::Hour => true,
        })
    }
}

/// Tries `rules` in order; the first one that produces a time wins.
pub(crate) fn first_match<V: Vocabulary>(
    vocab: &V,
    rules: &[Rule],
    tokens: &[String],
) -> Option<TimeOfDay> {
    if tokens.is_empty() {
        return None;
    }
    rules.iter().find_map(|rule| {
        let time = rule.apply(vocab, tokens)?;
        log::debug!("phrase {:?} matched rule {}", tokens.join(" "), rule.name);
        Some(time)
    })
}
