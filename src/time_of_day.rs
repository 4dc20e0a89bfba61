use std::fmt;

/// A wall-clock reading without date or seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    pub const MINUTES_PER_HOUR: u8 = 60;

    /// Returns `None` when either component is out of range.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour < 24 && minute < Self::MINUTES_PER_HOUR {
            Some(Self { hour, minute })
        } else {
            None
        }
    }

    /// Folds arbitrary integers onto the day: hours modulo 24, minutes modulo 60.
    pub(crate) fn wrapping(hour: i32, minute: i32) -> Self {
        Self {
            hour: hour.rem_euclid(24) as u8,
            minute: minute.rem_euclid(60) as u8,
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Hour on a 12-hour dial, 1..=12.
    pub fn dial_hour(&self) -> u8 {
        match self.hour % 12 {
            0 => 12,
            h => h,
        }
    }

    /// The hour the minute hand is heading towards, 1..=12.
    pub fn next_dial_hour(&self) -> u8 {
        self.dial_hour() % 12 + 1
    }

    /// Same clock position with the hour folded onto 1..=12.
    ///
    /// Parsers only ever produce dial hours, so this is the form to compare
    /// against when a target was drawn from the full day.
    pub fn on_dial(&self) -> Self {
        Self {
            hour: self.dial_hour(),
            minute: self.minute,
        }
    }

    /// 12-hour normalization into 12..=23, avoiding an ambiguous zero.
    pub fn normalized_hour(&self) -> u8 {
        self.hour % 12 + 12
    }

    /// Position of the hour hand in hours past twelve, 0.0..12.0.
    pub fn hour_hand(&self) -> f64 {
        f64::from(self.hour % 12) + f64::from(self.minute) / 60.0
    }

    /// Position of the minute hand in minutes, 0.0..60.0.
    pub fn minute_hand(&self) -> f64 {
        f64::from(self.minute)
    }

    /// Parse digital clock notation: `h:mm` or `hh:mm`, hours 0..=23.
    pub fn from_digital(text: &str) -> Option<Self> {
        let (h, m) = text.trim().split_once(':')?;
        if h.is_empty() || h.len() > 2 || m.len() != 2 {
            return None;
        }
        if !h.bytes().chain(m.bytes()).all(|b| b.is_ascii_digit()) {
            return None;
        }
        Self::new(h.parse().ok()?, m.parse().ok()?)
    }
}

/// Adds minutes to a dial time, wrapping 12 back to 1.
pub(crate) fn dial_add(hour: u8, minute: u8, delta: u8) -> (u8, u8) {
    let total = u16::from(minute) + u16::from(delta);
    let (carry, minute) = (total / 60, (total % 60) as u8);
    let mut hour = hour;
    for _ in 0..carry {
        hour = if hour >= 12 { 1 } else { hour + 1 };
    }
    (hour, minute)
}

/// Subtracts minutes from a dial time, borrowing hours and wrapping 1 back to 12.
pub(crate) fn dial_sub(hour: u8, minute: u8, delta: u8) -> (u8, u8) {
    let mut hour = hour;
    let mut minute = i16::from(minute) - i16::from(delta);
    while minute < 0 {
        minute += 60;
        hour = previous_dial_hour(hour);
    }
    (hour, minute as u8)
}

/// The dial hour before `hour`; one o'clock is preceded by twelve.
pub(crate) fn previous_dial_hour(hour: u8) -> u8 {
    if hour <= 1 {
        12
    } else {
        hour - 1
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
