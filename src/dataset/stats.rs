//! Deterministic EDA aggregates over loaded dataset rows.
//!
//! Each function is a pure function of the rows; the chart panels render
//! these directly.

use std::collections::BTreeMap;

use super::loader::{FireClass, FireRow};

/// Fire / not-fire totals for the whole dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassCounts {
    /// Rows labeled `fire`.
    pub fire: usize,
    /// Rows labeled `not fire`.
    pub not_fire: usize,
}

impl ClassCounts {
    /// Total row count.
    pub fn total(&self) -> usize {
        self.fire + self.not_fire
    }
}

/// Per-class counts keyed by some chart bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketCounts {
    /// Bucket label shown on the chart axis.
    pub label: String,
    /// Rows labeled `fire` in this bucket.
    pub fire: usize,
    /// Rows labeled `not fire` in this bucket.
    pub not_fire: usize,
}

impl BucketCounts {
    fn new(label: String) -> Self {
        Self {
            label,
            fire: 0,
            not_fire: 0,
        }
    }

    fn bump(&mut self, class: FireClass) {
        match class {
            FireClass::Fire => self.fire += 1,
            FireClass::NotFire => self.not_fire += 1,
        }
    }
}

/// Count rows per class.
pub fn class_counts(rows: &[FireRow]) -> ClassCounts {
    let mut counts = ClassCounts::default();
    for row in rows {
        match row.class {
            FireClass::Fire => counts.fire += 1,
            FireClass::NotFire => counts.not_fire += 1,
        }
    }
    counts
}

/// Per-class counts for each month present in the data, ascending.
pub fn counts_by_month(rows: &[FireRow]) -> Vec<BucketCounts> {
    let mut by_month: BTreeMap<u8, ClassCounts> = BTreeMap::new();
    for row in rows {
        let entry = by_month.entry(row.month).or_default();
        match row.class {
            FireClass::Fire => entry.fire += 1,
            FireClass::NotFire => entry.not_fire += 1,
        }
    }
    by_month
        .into_iter()
        .map(|(month, counts)| BucketCounts {
            label: month_name(month).to_string(),
            fire: counts.fire,
            not_fire: counts.not_fire,
        })
        .collect()
}

/// Per-class counts for each whole degree of temperature, ascending.
pub fn counts_by_temperature(rows: &[FireRow]) -> Vec<BucketCounts> {
    let mut by_degree: BTreeMap<i32, ClassCounts> = BTreeMap::new();
    for row in rows {
        let entry = by_degree.entry(row.temperature.round() as i32).or_default();
        match row.class {
            FireClass::Fire => entry.fire += 1,
            FireClass::NotFire => entry.not_fire += 1,
        }
    }
    by_degree
        .into_iter()
        .map(|(degree, counts)| BucketCounts {
            label: format!("{degree}"),
            fire: counts.fire,
            not_fire: counts.not_fire,
        })
        .collect()
}

/// Relative-humidity bins of width 5 over the documented 21..=90 range.
///
/// Values outside the documented range are skipped rather than clamped so
/// the chart mirrors the dataset's stated bounds.
pub fn rh_bins(rows: &[FireRow]) -> Vec<BucketCounts> {
    let mut bins: Vec<BucketCounts> = (0..14)
        .map(|idx| {
            let low = 21 + idx * 5;
            BucketCounts::new(format!("{low}-{}", low + 4))
        })
        .collect();
    for row in rows {
        let rh = row.rh.round() as i32;
        if !(21..=90).contains(&rh) {
            continue;
        }
        let idx = ((rh - 21) / 5) as usize;
        bins[idx].bump(row.class);
    }
    bins
}

/// Fire counts per distinct rain reading, ascending.
///
/// Only fire rows contribute: the chart answers how much rain was falling
/// when fires actually started. Readings are keyed to a tenth of a
/// millimetre, matching the dataset's precision.
pub fn fire_counts_by_rain(rows: &[FireRow]) -> Vec<BucketCounts> {
    let mut by_rain: BTreeMap<i32, usize> = BTreeMap::new();
    for row in rows {
        if row.class != FireClass::Fire {
            continue;
        }
        *by_rain.entry((row.rain * 10.0).round() as i32).or_default() += 1;
    }
    by_rain
        .into_iter()
        .map(|(tenths, fire)| BucketCounts {
            label: format!("{:.1}", tenths as f32 / 10.0),
            fire,
            not_fire: 0,
        })
        .collect()
}

/// FWI danger rating labels, lowest first.
pub const FWI_CATEGORY_LABELS: [&str; 4] = ["Low", "Moderate", "High", "Very High"];

/// Per-class counts for each FWI danger category.
///
/// Category edges follow the published rating: Low 0-1, Moderate 2-6,
/// High 7-13, Very High above 13.
pub fn fwi_categories(rows: &[FireRow]) -> Vec<BucketCounts> {
    let mut bins: Vec<BucketCounts> = FWI_CATEGORY_LABELS
        .iter()
        .map(|label| BucketCounts::new(label.to_string()))
        .collect();
    for row in rows {
        let idx = if row.fwi <= 1.0 {
            0
        } else if row.fwi <= 6.0 {
            1
        } else if row.fwi <= 13.0 {
            2
        } else {
            3
        };
        bins[idx].bump(row.class);
    }
    bins
}

/// Mean temperature across fire rows, if any exist.
pub fn mean_fire_temperature(rows: &[FireRow]) -> Option<f32> {
    let mut sum = 0.0f32;
    let mut count = 0usize;
    for row in rows {
        if row.class == FireClass::Fire {
            sum += row.temperature;
            count += 1;
        }
    }
    if count == 0 {
        None
    } else {
        Some(sum / count as f32)
    }
}

fn month_name(month: u8) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}
