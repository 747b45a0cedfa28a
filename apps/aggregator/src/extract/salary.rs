//! Salary Normalizer — collapses a free-text salary string into a single
//! annualized USD figure, or nothing when the text carries no usable number.
//! Pure function of its input; any failure normalizes to `None`, never an
//! error.

use regex::Regex;

/// Strings that signal "no real figure here".
const DISMISSIVE_TERMS: &[&str] = &["call", "contact", "competitive", "negotiable"];

/// 40 hours x 52 weeks.
const HOURS_PER_YEAR: f64 = 2080.0;

/// Figures below this are assumed to be unlabeled hourly rates.
const HOURLY_SUSPICION_CEILING: f64 = 1000.0;

const MIN_PLAUSIBLE_ANNUAL: f64 = 10_000.0;
const MAX_PLAUSIBLE_ANNUAL: f64 = 1_000_000.0;

pub struct SalaryNormalizer {
    number_pattern: Regex,
}

impl Default for SalaryNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SalaryNormalizer {
    pub fn new() -> Self {
        Self {
            // Comma-grouped integers with an optional decimal tail.
            number_pattern: Regex::new(r"[\d,]+\.?\d*").expect("hardcoded pattern is valid"),
        }
    }

    /// Normalizes raw salary text to an annual USD value.
    ///
    /// Ranges average their first two figures (reordered so min <= max).
    /// Hourly rates, explicit or suspected, are annualized at 2080 hours.
    /// Results outside [10_000, 1_000_000] are rejected as implausible.
    pub fn normalize(&self, raw: &str) -> Option<f64> {
        let lower = raw.trim().to_lowercase();
        if lower.is_empty() || lower == "na" {
            return None;
        }
        if DISMISSIVE_TERMS.iter().any(|term| lower.contains(term)) {
            return None;
        }

        let mut is_hourly = lower.contains("per hour") || lower.contains("hourly");

        let numbers: Vec<f64> = self
            .number_pattern
            .find_iter(&lower)
            .filter_map(|m| m.as_str().replace(',', "").parse::<f64>().ok())
            .collect();

        let average = match numbers.as_slice() {
            [] => return None,
            [single] => *single,
            [first, second, ..] => {
                let (min, max) = if first > second {
                    (*second, *first)
                } else {
                    (*first, *second)
                };
                (min + max) / 2.0
            }
        };

        // Unlabeled hourly rates show up as implausibly small annual figures.
        if !is_hourly && average < HOURLY_SUSPICION_CEILING {
            is_hourly = true;
        }

        let annual = if is_hourly {
            average * HOURS_PER_YEAR
        } else {
            average
        };

        if !(MIN_PLAUSIBLE_ANNUAL..=MAX_PLAUSIBLE_ANNUAL).contains(&annual) {
            return None;
        }
        Some(annual)
    }
}
