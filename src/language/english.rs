use super::tokens::{self, digits, lookup, Captures, Rule, Slot, Vocabulary};
use super::{PhraseFormatter, TimeParser};
use crate::time_of_day::{previous_dial_hour, TimeOfDay};

const HOURS: [&str; 12] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve",
];

const MINUTE_WORDS: [(&str, u8); 6] = [
    ("five", 5),
    ("ten", 10),
    ("quarter", 15),
    ("twenty", 20),
    ("twenty-five", 25),
    ("half", 30),
];

const PAST: &[&str] = &["past", "over", "after"];
const TO: &[&str] = &["to", "before", "of"];

const RULES: &[Rule] = &[
    Rule {
        name: "quarter past",
        pattern: &[Slot::Word(&["quarter"]), Slot::Word(PAST), Slot::Hour],
        build: |c| TimeOfDay::new(c.hour, 15),
    },
    Rule {
        name: "quarter to",
        pattern: &[Slot::Word(&["quarter"]), Slot::Word(TO), Slot::Hour],
        build: |c| TimeOfDay::new(previous_dial_hour(c.hour), 45),
    },
    Rule {
        name: "half past",
        pattern: &[Slot::Word(&["half"]), Slot::Word(PAST), Slot::Hour],
        build: |c| TimeOfDay::new(c.hour, 30),
    },
    Rule {
        name: "minutes past",
        pattern: &[Slot::Minute, Slot::Word(PAST), Slot::Hour],
        build: |c| TimeOfDay::new(c.hour, c.minute),
    },
    Rule {
        name: "minutes to",
        pattern: &[Slot::Minute, Slot::Word(TO), Slot::Hour],
        build: minutes_to,
    },
    Rule {
        name: "o'clock",
        pattern: &[Slot::Hour, Slot::Word(&["o'clock", "oclock"])],
        build: |c| TimeOfDay::new(c.hour, 0),
    },
];

fn minutes_to(c: Captures) -> Option<TimeOfDay> {
    if c.minute == 0 {
        return None;
    }
    TimeOfDay::new(previous_dial_hour(c.hour), 60 - c.minute)
}

/// English clock phrases: "quarter to four", "twenty-five past 3", "ten o'clock".
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishParser;

impl Vocabulary for EnglishParser {
    fn hour(&self, token: &str) -> Option<u8> {
        digits(token)
            .filter(|h| (1..=12).contains(h))
            .or_else(|| lookup(&HOURS, token))
    }

    fn minute(&self, token: &str) -> Option<u8> {
        if let Some(&(_, m)) = MINUTE_WORDS.iter().find(|(w, _)| *w == token) {
            return Some(m);
        }
        if let Some(m) = digits(token) {
            return (m < 60).then_some(m);
        }
        let (tens, ones) = token.split_once('-')?;
        if tens != "twenty" {
            return None;
        }
        lookup(&HOURS[..9], ones).map(|o| 20 + o)
    }
}

impl TimeParser for EnglishParser {
    fn parse(&self, text: &str) -> Option<TimeOfDay> {
        let tokens = join_spoken_compounds(tokens::tokenize(text));
        tokens::first_match(self, RULES, &tokens)
    }
}

/// Speech input splits what is typed as one token: "twenty five", "o clock".
fn join_spoken_compounds(tokens: Vec<String>) -> Vec<String> {
    let mut joined = Vec::with_capacity(tokens.len());
    let mut iter = tokens.into_iter().peekable();
    while let Some(token) = iter.next() {
        let next = iter.peek().map(String::as_str);
        match (token.as_str(), next) {
            ("twenty", Some(ones)) if lookup(&HOURS[..9], ones).is_some() => {
                joined.push(format!("twenty-{ones}"));
                iter.next();
            }
            ("o", Some("clock")) => {
                joined.push("o'clock".to_string());
                iter.next();
            }
            _ => joined.push(token),
        }
    }
    joined
}

fn minute_name(minute: u8) -> String {
    match minute {
        21..=29 => format!("twenty-{}", HOURS[usize::from(minute - 21)]),
        _ => MINUTE_WORDS
            .iter()
            .find(|(_, m)| *m == minute)
            .map(|(w, _)| w.to_string())
            .unwrap_or_else(|| minute.to_string()),
    }
}

fn hour_name(hour: u8) -> &'static str {
    HOURS[usize::from(hour - 1)]
}

impl PhraseFormatter for EnglishParser {
    fn phrase(&self, time: TimeOfDay) -> String {
        let hour = hour_name(time.dial_hour());
        let next = hour_name(time.next_dial_hour());
        match time.minute() {
            0 => format!("{hour} o'clock"),
            15 => format!("quarter past {hour}"),
            30 => format!("half past {hour}"),
            45 => format!("quarter to {next}"),
            m @ 1..=29 => format!("{} past {hour}", minute_name(m)),
            m => format!("{} to {next}", minute_name(60 - m)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Option<TimeOfDay> {
        EnglishParser.parse(text)
    }

    fn at(hour: u8, minute: u8) -> Option<TimeOfDay> {
        TimeOfDay::new(hour, minute)
    }

    #[test]
    fn test_quarter_forms() {
        assert_eq!(parse("quarter past three"), at(3, 15));
        assert_eq!(parse("quarter to four"), at(3, 45));
        assert_eq!(parse("quarter to one"), at(12, 45));
        assert_eq!(parse("quarter of 7"), at(6, 45));
        assert_eq!(parse("quarter before twelve"), at(11, 45));
    }

    #[test]
    fn test_half_past_is_after_the_hour() {
        assert_eq!(parse("half past two"), at(2, 30));
        assert_eq!(parse("half past 12"), at(12, 30));
    }

    #[test]
    fn test_minutes_past_and_to() {
        assert_eq!(parse("25 past 3"), at(3, 25));
        assert_eq!(parse("twenty-five past three"), at(3, 25));
        assert_eq!(parse("twenty-two past nine"), at(9, 22));
        assert_eq!(parse("ten after six"), at(6, 10));
        assert_eq!(parse("five to 12"), at(11, 55));
        assert_eq!(parse("Five before 12"), at(11, 55));
        assert_eq!(parse("five of 12"), at(11, 55));
        assert_eq!(parse("5 to 12"), at(11, 55));
        assert_eq!(parse("20 to one"), at(12, 40));
    }

    #[test]
    fn test_zero_minutes_to_is_rejected() {
        assert_eq!(parse("0 to 5"), None);
    }

    #[test]
    fn test_oclock() {
        assert_eq!(parse("seven o'clock"), at(7, 0));
        assert_eq!(parse("7 oclock"), at(7, 0));
        assert_eq!(parse("twelve o clock"), at(12, 0));
        assert_eq!(parse("13 o'clock"), None);
    }

    #[test]
    fn test_spoken_compounds() {
        assert_eq!(parse("twenty five to four"), at(3, 35));
        assert_eq!(parse("twenty past four"), at(4, 20));
    }

    #[test]
    fn test_embedded_in_sentence() {
        assert_eq!(parse("I think it is quarter past ten."), at(10, 15));
        assert_eq!(parse("time to go, ten to four"), at(3, 50));
    }

    #[test]
    fn test_unknown_words() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("   "), None);
        assert_eq!(parse("banana time"), None);
        assert_eq!(parse("seventeen past three"), None);
        assert_eq!(parse("twenty-banana past three"), None);
        assert_eq!(parse("quarter past noon"), None);
    }

    #[test]
    fn test_phrases() {
        let phrase = |h, m| EnglishParser.phrase(TimeOfDay::new(h, m).unwrap());
        assert_eq!(phrase(0, 0), "twelve o'clock");
        assert_eq!(phrase(15, 15), "quarter past three");
        assert_eq!(phrase(2, 30), "half past two");
        assert_eq!(phrase(23, 45), "quarter to twelve");
        assert_eq!(phrase(9, 25), "twenty-five past nine");
        assert_eq!(phrase(9, 35), "twenty-five to ten");
        assert_eq!(phrase(9, 7), "7 past nine");
        assert_eq!(phrase(12, 50), "ten to one");
    }
}
