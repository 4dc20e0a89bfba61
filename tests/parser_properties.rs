use clockdrill::language::Language;
use clockdrill::TimeOfDay;
use proptest::prelude::*;

fn every_five_minutes() -> impl Iterator<Item = TimeOfDay> {
    (0..24u8).flat_map(|h| (0..60u8).step_by(5).filter_map(move |m| TimeOfDay::new(h, m)))
}

// Every generated phrase reads back as the same dial position.
#[test]
fn phrases_round_trip_in_both_languages() {
    for language in Language::ALL {
        let mut checked = 0;
        for time in every_five_minutes() {
            let phrase = language.phrase(time);
            assert_eq!(
                language.parse(&phrase),
                Some(time.on_dial()),
                "{language}: {time} -> {phrase:?}"
            );
            checked += 1;
        }
        assert_eq!(checked, 288);
    }
}

#[test]
fn whole_hours_in_words_and_digits() {
    const DUTCH: [&str; 12] = [
        "een", "twee", "drie", "vier", "vijf", "zes", "zeven", "acht", "negen", "tien", "elf",
        "twaalf",
    ];
    const ENGLISH: [&str; 12] = [
        "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
        "twelve",
    ];
    for hour in 1..=12u8 {
        let expected = TimeOfDay::new(hour, 0);
        let idx = usize::from(hour - 1);
        assert_eq!(Language::Dutch.parse(&format!("{} uur", DUTCH[idx])), expected);
        assert_eq!(Language::Dutch.parse(&format!("{hour} uur")), expected);
        assert_eq!(
            Language::English.parse(&format!("{} o'clock", ENGLISH[idx])),
            expected
        );
        assert_eq!(Language::English.parse(&format!("{hour} o'clock")), expected);
    }
}

#[test]
fn half_means_different_things() {
    // Dutch counts half towards the next hour, English past the named one.
    assert_eq!(Language::Dutch.parse("half drie"), TimeOfDay::new(2, 30));
    assert_eq!(Language::English.parse("half past three"), TimeOfDay::new(3, 30));
    assert_eq!(Language::Dutch.parse("half een"), TimeOfDay::new(12, 30));
}

#[test]
fn anchored_phrasings() {
    assert_eq!(Language::Dutch.parse("5 voor half twaalf"), TimeOfDay::new(11, 25));
    assert_eq!(Language::Dutch.parse("5 over half twee"), TimeOfDay::new(1, 35));
    assert_eq!(Language::Dutch.parse("kwart voor een"), TimeOfDay::new(12, 45));
    assert_eq!(Language::English.parse("quarter to one"), TimeOfDay::new(12, 45));
    assert_eq!(Language::English.parse("25 past 3"), TimeOfDay::new(3, 25));
    for to in ["to", "before", "of"] {
        assert_eq!(
            Language::English.parse(&format!("five {to} 12")),
            TimeOfDay::new(11, 55)
        );
    }
}

#[test]
fn case_and_punctuation_are_ignored() {
    assert_eq!(
        Language::English.parse("  Quarter TO Four! "),
        TimeOfDay::new(3, 45)
    );
    assert_eq!(Language::Dutch.parse("Kwart over drie."), TimeOfDay::new(3, 15));
}

#[test]
fn malformed_input_is_rejected() {
    for text in [
        "",
        "   ",
        "quarter",
        "past three",
        "half",
        "thirteen o'clock",
        "0 to three",
        "13 uur",
        "kwart over",
        "voor half",
        "banana time",
    ] {
        assert_eq!(Language::English.parse(text), None, "english {text:?}");
        assert_eq!(Language::Dutch.parse(text), None, "dutch {text:?}");
    }
}

#[test]
fn languages_do_not_cross() {
    assert_eq!(Language::English.parse("kwart voor vier"), None);
    assert_eq!(Language::Dutch.parse("quarter to four"), None);
}

proptest! {
    #[test]
    fn parsing_never_panics(text in "\\PC{0,40}") {
        for language in Language::ALL {
            if let Some(time) = language.parse(&text) {
                prop_assert!((1..=12).contains(&time.hour()));
                prop_assert!(time.minute() < 60);
            }
        }
    }

    #[test]
    fn word_soup_never_panics(words in proptest::collection::vec(
        prop_oneof![
            Just("half"), Just("kwart"), Just("quarter"), Just("voor"), Just("over"),
            Just("past"), Just("to"), Just("uur"), Just("o'clock"), Just("drie"),
            Just("three"), Just("twaalf"), Just("twenty"), Just("five"), Just("0"), Just("12"),
        ],
        0..6,
    )) {
        let text = words.join(" ");
        for language in Language::ALL {
            if let Some(time) = language.parse(&text) {
                prop_assert!((1..=12).contains(&time.hour()), "{} -> {:?}", text, time);
            }
        }
    }

    #[test]
    fn formatted_phrase_matches_any_minute(hour in 0u8..24, minute in 0u8..60) {
        let time = TimeOfDay::new(hour, minute).unwrap();
        for language in Language::ALL {
            let phrase = language.phrase(time);
            prop_assert_eq!(language.parse(&phrase), Some(time.on_dial()), "{}", phrase);
        }
    }
}
