use std::collections::BTreeMap;

use thiserror::Error;

use super::model::{AirQualityDataset, Pollutant};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failure modes of the aggregation functions.
///
/// Both aggregations are all-or-nothing: no partial result is returned on
/// failure, and nothing is retried or logged here. The caller decides how to
/// surface the error.
#[derive(Debug, Error, PartialEq)]
pub enum AggregateError {
    /// A requested pollutant has no reading in some row, so its column sum
    /// is undefined.
    #[error("row {row} has no {pollutant} reading")]
    MissingReading { row: usize, pollutant: Pollutant },

    /// All requested pollutant sums are zero, so proportional shares are
    /// undefined.
    #[error("pollutant totals sum to zero; shares are undefined")]
    ZeroTotal,
}

// ---------------------------------------------------------------------------
// Yearly PM2.5 average
// ---------------------------------------------------------------------------

/// Mean PM2.5 per distinct year, keyed ascending.
///
/// Years are compared as discrete labels, not numeric ranges: rows group by
/// exact equality of `year`. Rows whose PM2.5 reading is missing are excluded
/// from both the sum and the count of their group, so a year where every
/// reading is missing produces no entry at all. An empty dataset yields an
/// empty map.
pub fn yearly_pm25_average(dataset: &AirQualityDataset) -> BTreeMap<i32, f64> {
    let mut sums: BTreeMap<i32, (f64, u32)> = BTreeMap::new();

    for record in &dataset.records {
        if let Some(pm25) = record.reading(Pollutant::Pm25) {
            let entry = sums.entry(record.year).or_insert((0.0, 0));
            entry.0 += pm25;
            entry.1 += 1;
        }
    }

    sums.into_iter()
        .map(|(year, (sum, count))| (year, sum / count as f64))
        .collect()
}

// ---------------------------------------------------------------------------
// Per-pollutant proportional shares
// ---------------------------------------------------------------------------

/// The proportion each pollutant contributes to the combined total of all
/// requested pollutants across the whole dataset.
///
/// Output pairs preserve the order of `pollutants` so downstream legends stay
/// consistent across runs. The shares sum to 1.0 up to floating-point
/// rounding. A single pollutant summing to zero is a legitimate 0.0 share;
/// a grand total of zero (empty dataset or all-zero readings) is
/// [`AggregateError::ZeroTotal`].
pub fn feature_share(
    dataset: &AirQualityDataset,
    pollutants: &[Pollutant],
) -> Result<Vec<(Pollutant, f64)>, AggregateError> {
    let mut sums: Vec<f64> = vec![0.0; pollutants.len()];

    for (row, record) in dataset.records.iter().enumerate() {
        for (i, &pollutant) in pollutants.iter().enumerate() {
            match record.reading(pollutant) {
                Some(value) => sums[i] += value,
                None => return Err(AggregateError::MissingReading { row, pollutant }),
            }
        }
    }

    let grand_total: f64 = sums.iter().sum();
    if grand_total == 0.0 {
        return Err(AggregateError::ZeroTotal);
    }

    Ok(pollutants
        .iter()
        .zip(sums)
        .map(|(&pollutant, sum)| (pollutant, sum / grand_total))
        .collect())
}
