use super::tokens::{self, digits, lookup, Captures, Rule, Slot, Vocabulary};
use super::{PhraseFormatter, TimeParser};
use crate::time_of_day::{dial_add, dial_sub, previous_dial_hour, TimeOfDay};

/// Number words 1..=30. The first twelve double as hour words.
///
/// Stored without diacritics; tokens are folded the same way before lookup.
const NUMBERS: [&str; 30] = [
    "een",
    "twee",
    "drie",
    "vier",
    "vijf",
    "zes",
    "zeven",
    "acht",
    "negen",
    "tien",
    "elf",
    "twaalf",
    "dertien",
    "veertien",
    "vijftien",
    "zestien",
    "zeventien",
    "achttien",
    "negentien",
    "twintig",
    "eenentwintig",
    "tweeentwintig",
    "drieentwintig",
    "vierentwintig",
    "vijfentwintig",
    "zesentwintig",
    "zevenentwintig",
    "achtentwintig",
    "negenentwintig",
    "dertig",
];

const OVER: &[&str] = &["over", "na"];
const VOOR: &[&str] = &["voor"];

// "5 voor half twaalf" also fits the plain "voor" and "half" rules, and
// "kwart over half drie" contains "half drie", so the compound forms must
// stay first.
const RULES: &[Rule] = &[
    Rule {
        name: "kwart voor half",
        pattern: &[Slot::Word(&["kwart"]), Slot::Word(VOOR), Slot::Word(&["half"]), Slot::Hour],
        build: |c| voor_half(Captures { minute: 15, ..c }),
    },
    Rule {
        name: "kwart over half",
        pattern: &[Slot::Word(&["kwart"]), Slot::Word(OVER), Slot::Word(&["half"]), Slot::Hour],
        build: |c| over_half(Captures { minute: 15, ..c }),
    },
    Rule {
        name: "voor half",
        pattern: &[Slot::Minute, Slot::Word(VOOR), Slot::Word(&["half"]), Slot::Hour],
        build: voor_half,
    },
    Rule {
        name: "over half",
        pattern: &[Slot::Minute, Slot::Word(OVER), Slot::Word(&["half"]), Slot::Hour],
        build: over_half,
    },
    Rule {
        name: "kwart over",
        pattern: &[Slot::Word(&["kwart"]), Slot::Word(OVER), Slot::Hour],
        build: |c| TimeOfDay::new(c.hour, 15),
    },
    Rule {
        name: "kwart voor",
        pattern: &[Slot::Word(&["kwart"]), Slot::Word(VOOR), Slot::Hour],
        build: |c| TimeOfDay::new(previous_dial_hour(c.hour), 45),
    },
    Rule {
        name: "half",
        pattern: &[Slot::Word(&["half"]), Slot::Hour],
        build: |c| TimeOfDay::new(previous_dial_hour(c.hour), 30),
    },
    Rule {
        name: "minuten over",
        pattern: &[Slot::Minute, Slot::Word(OVER), Slot::Hour],
        build: |c| TimeOfDay::new(c.hour, c.minute),
    },
    Rule {
        name: "minuten voor",
        pattern: &[Slot::Minute, Slot::Word(VOOR), Slot::Hour],
        build: minuten_voor,
    },
    Rule {
        name: "uur",
        pattern: &[Slot::Hour, Slot::Word(&["uur"])],
        build: |c| TimeOfDay::new(c.hour, 0),
    },
];

/// Half an hour before `hour`: "half vijf" is 4:30.
fn half_anchor(hour: u8) -> (u8, u8) {
    (previous_dial_hour(hour), 30)
}

fn voor_half(c: Captures) -> Option<TimeOfDay> {
    let (hour, minute) = half_anchor(c.hour);
    let (hour, minute) = dial_sub(hour, minute, c.minute);
    TimeOfDay::new(hour, minute)
}

fn over_half(c: Captures) -> Option<TimeOfDay> {
    let (hour, minute) = half_anchor(c.hour);
    let (hour, minute) = dial_add(hour, minute, c.minute);
    TimeOfDay::new(hour, minute)
}

fn minuten_voor(c: Captures) -> Option<TimeOfDay> {
    if c.minute == 0 {
        return None;
    }
    TimeOfDay::new(previous_dial_hour(c.hour), 60 - c.minute)
}

fn fold(token: &str) -> String {
    token.replace(&['ë', 'é'][..], "e")
}

/// Dutch clock phrases: "kwart voor acht", "half vijf", "tien voor half elf".
#[derive(Debug, Clone, Copy, Default)]
pub struct DutchParser;

impl Vocabulary for DutchParser {
    fn hour(&self, token: &str) -> Option<u8> {
        digits(token)
            .filter(|h| (1..=12).contains(h))
            .or_else(|| lookup(&NUMBERS[..12], &fold(token)))
    }

    fn minute(&self, token: &str) -> Option<u8> {
        match digits(token) {
            Some(m) => (m < 60).then_some(m),
            None => lookup(&NUMBERS, &fold(token)),
        }
    }
}

impl TimeParser for DutchParser {
    fn parse(&self, text: &str) -> Option<TimeOfDay> {
        tokens::first_match(self, RULES, &tokens::tokenize(text))
    }
}

fn number(n: u8) -> &'static str {
    NUMBERS[usize::from(n - 1)]
}

impl PhraseFormatter for DutchParser {
    fn phrase(&self, time: TimeOfDay) -> String {
        let hour = number(time.dial_hour());
        let next = number(time.next_dial_hour());
        match time.minute() {
            0 => format!("{hour} uur"),
            15 => format!("kwart over {hour}"),
            m @ (1..=14 | 16..=19) => format!("{} over {hour}", number(m)),
            m @ 20..=29 => format!("{} voor half {next}", number(30 - m)),
            30 => format!("half {next}"),
            m @ 31..=40 => format!("{} over half {next}", number(m - 30)),
            45 => format!("kwart voor {next}"),
            m => format!("{} voor {next}", number(60 - m)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Option<TimeOfDay> {
        DutchParser.parse(text)
    }

    fn at(hour: u8, minute: u8) -> Option<TimeOfDay> {
        TimeOfDay::new(hour, minute)
    }

    #[test]
    fn test_half_counts_towards_next_hour() {
        assert_eq!(parse("half vijf"), at(4, 30));
        assert_eq!(parse("half een"), at(12, 30));
        assert_eq!(parse("Half 8"), at(7, 30));
    }

    #[test]
    fn test_compound_half_forms() {
        assert_eq!(parse("5 voor half twaalf"), at(11, 25));
        assert_eq!(parse("5 over half twee"), at(1, 35));
        assert_eq!(parse("vijf over half twee"), at(1, 35));
        assert_eq!(parse("vijf na half drie"), at(2, 35));
        assert_eq!(parse("tien voor half acht"), at(7, 20));
        assert_eq!(parse("vijf voor half een"), at(12, 25));
    }

    #[test]
    fn test_kwart_around_half() {
        assert_eq!(parse("kwart over half drie"), at(2, 45));
        assert_eq!(parse("kwart voor half drie"), at(2, 15));
        assert_eq!(parse("kwart na half een"), at(12, 45));
    }

    #[test]
    fn test_compound_half_carries_hours() {
        assert_eq!(parse("40 over half twaalf"), at(12, 10));
        assert_eq!(parse("40 over half een"), at(1, 10));
        assert_eq!(parse("40 voor half een"), at(11, 50));
    }

    #[test]
    fn test_kwart() {
        assert_eq!(parse("kwart over vijf"), at(5, 15));
        assert_eq!(parse("kwart na vijf"), at(5, 15));
        assert_eq!(parse("kwart voor acht"), at(7, 45));
        assert_eq!(parse("kwart voor een"), at(12, 45));
    }

    #[test]
    fn test_minutes_over_and_voor() {
        assert_eq!(parse("tien over drie"), at(3, 10));
        assert_eq!(parse("tien na drie"), at(3, 10));
        assert_eq!(parse("10 over 3"), at(3, 10));
        assert_eq!(parse("vijf voor twaalf"), at(11, 55));
        assert_eq!(parse("tweeëntwintig over negen"), at(9, 22));
        assert_eq!(parse("tweeentwintig over negen"), at(9, 22));
        assert_eq!(parse("dertig voor een"), at(12, 30));
    }

    #[test]
    fn test_minute_words_stop_at_thirty() {
        assert_eq!(parse("eenendertig over vijf"), None);
        assert_eq!(parse("31 over vijf"), at(5, 31));
    }

    #[test]
    fn test_uur() {
        assert_eq!(parse("acht uur"), at(8, 0));
        assert_eq!(parse("één uur"), at(1, 0));
        assert_eq!(parse("12 uur"), at(12, 0));
        assert_eq!(parse("dertien uur"), None);
    }

    #[test]
    fn test_sentence_context() {
        assert_eq!(parse("het is kwart over vijf"), at(5, 15));
    }

    #[test]
    fn test_unknown_words() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("  "), None);
        assert_eq!(parse("banana time"), None);
        assert_eq!(parse("tien over half"), None);
        assert_eq!(parse("kwart over middag"), None);
    }

    #[test]
    fn test_phrases() {
        let phrase = |h, m| DutchParser.phrase(TimeOfDay::new(h, m).unwrap());
        assert_eq!(phrase(8, 0), "acht uur");
        assert_eq!(phrase(0, 0), "twaalf uur");
        assert_eq!(phrase(17, 15), "kwart over vijf");
        assert_eq!(phrase(4, 30), "half vijf");
        assert_eq!(phrase(11, 25), "vijf voor half twaalf");
        assert_eq!(phrase(1, 35), "vijf over half twee");
        assert_eq!(phrase(7, 45), "kwart voor acht");
        assert_eq!(phrase(11, 55), "vijf voor twaalf");
        assert_eq!(phrase(12, 10), "tien over twaalf");
        assert_eq!(phrase(23, 50), "tien voor twaalf");
    }
}
