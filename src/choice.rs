//! Color choice tracking
//!
//! On every page load the remembered color is read back (or picked at random
//! on a first visit), rewritten, and the matching tally bumped by one.
//!
//! Known quirk kept on purpose: a stored color that is neither "red" nor
//! "blue" is reused verbatim, and because only the literal "red" selects the
//! red tally, such a load is counted as blue.
//!
//! Tallies saturate at `i64::MAX`: a load whose counter is already there
//! leaves both counts unchanged, the one case where a visit is not counted.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::consts::*;
use crate::store::{Expiry, Store};

/// The two outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Red,
    Blue,
}

impl Choice {
    pub fn as_str(&self) -> &'static str {
        match self {
            Choice::Red => "red",
            Choice::Blue => "blue",
        }
    }

    /// Exact, case-sensitive match on the stored spelling
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "red" => Some(Choice::Red),
            "blue" => Some(Choice::Blue),
            _ => None,
        }
    }

    /// Map a unit-interval sample to an outcome (even odds)
    pub fn from_unit(sample: f64) -> Self {
        if sample < 0.5 { Choice::Red } else { Choice::Blue }
    }
}

/// Source of samples in `[0, 1)`
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<F: FnMut() -> f64> RandomSource for F {
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// PCG-backed random source
pub fn seeded_source(seed: u64) -> impl RandomSource {
    let mut rng = Pcg32::seed_from_u64(seed);
    move || rng.random::<f64>()
}

/// Result of one page load
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceState {
    pub red_count: i64,
    pub blue_count: i64,
    /// Color remembered from the last visit, empty on a first visit
    pub previous_color: String,
    /// Color for this visit
    pub color: String,
}

impl ChoiceState {
    /// This visit's color, if it is a recognized one
    pub fn choice(&self) -> Option<Choice> {
        Choice::parse(&self.color)
    }

    pub fn is_first_visit(&self) -> bool {
        self.previous_color.is_empty()
    }

    /// Indented JSON for the diagnostic log line
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Recall or pick the color, persist it, and count this visit
pub fn get_or_assign_choice<S, R>(store: &mut S, random: &mut R) -> ChoiceState
where
    S: Store + ?Sized,
    R: RandomSource + ?Sized,
{
    let previous_color = store.read(COLOR_KEY).unwrap_or_default();

    let color = if previous_color.is_empty() {
        Choice::from_unit(random.next_unit()).as_str().to_string()
    } else {
        previous_color.clone()
    };

    let expiry = Expiry::days(CHOICE_EXPIRY_DAYS);
    store.write(COLOR_KEY, &color, expiry);

    let mut red_count = read_count(store, RED_COUNT_KEY);
    let mut blue_count = read_count(store, BLUE_COUNT_KEY);

    if color == Choice::Red.as_str() {
        red_count = red_count.saturating_add(1);
        store.write(RED_COUNT_KEY, &red_count.to_string(), expiry);
    } else {
        blue_count = blue_count.saturating_add(1);
        store.write(BLUE_COUNT_KEY, &blue_count.to_string(), expiry);
    }

    ChoiceState {
        red_count,
        blue_count,
        previous_color,
        color,
    }
}

fn read_count<S: Store + ?Sized>(store: &S, name: &str) -> i64 {
    store
        .read(name)
        .as_deref()
        .and_then(parse_leading_int)
        .unwrap_or(0)
}

/// Parse the integer prefix of `text`
///
/// Skips leading whitespace, accepts one sign, treats a `0x`/`0X` prefix as
/// hexadecimal, and stops at the first non-digit. Returns `None` when no
/// digits were found. Out-of-range values saturate.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let s = text.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, digits) = match s.get(..2) {
        Some("0x") | Some("0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude = digits[..end].chars().fold(0i64, |acc, c| {
        let digit = c.to_digit(radix).unwrap_or(0) as i64;
        acc.saturating_mul(radix as i64).saturating_add(digit)
    });
    Some(if negative { -magnitude } else { magnitude })
}
