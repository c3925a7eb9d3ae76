use crate::models::measurement::MeasurementEntry;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

impl Trend {
    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "↑",
            Trend::Down => "↓",
            Trend::Neutral => "→",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Neutral => "neutral",
        };
        f.write_str(s)
    }
}

/// Compare the two most recent entries of `kind`.
pub fn trend<'a, I>(entries: I, kind: &str) -> Trend
where
    I: IntoIterator<Item = &'a MeasurementEntry>,
{
    let mut of_kind: Vec<&MeasurementEntry> =
        entries.into_iter().filter(|e| e.kind == kind).collect();
    of_kind.sort_by_key(|e| e.date);

    match of_kind.as_slice() {
        [.., previous, latest] => {
            if latest.value > previous.value {
                Trend::Up
            } else if latest.value < previous.value {
                Trend::Down
            } else {
                Trend::Neutral
            }
        }
        _ => Trend::Neutral,
    }
}
