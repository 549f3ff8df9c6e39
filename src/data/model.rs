use std::fmt;

// ---------------------------------------------------------------------------
// Pollutant – the six measured air components
// ---------------------------------------------------------------------------

/// One of the six pollutants tracked by the dataset.
///
/// The variant order is the fixed display order: chart legends, pie slices
/// and share listings all iterate pollutants in this order so the output is
/// stable across runs regardless of row order in the source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Pollutant {
    Pm25,
    Pm10,
    So2,
    No2,
    Co,
    O3,
}

impl Pollutant {
    /// All pollutants in display order.
    pub const ALL: [Pollutant; 6] = [
        Pollutant::Pm25,
        Pollutant::Pm10,
        Pollutant::So2,
        Pollutant::No2,
        Pollutant::Co,
        Pollutant::O3,
    ];

    /// The column header spelling used by the source CSV.
    pub fn column_name(self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::So2 => "SO2",
            Pollutant::No2 => "NO2",
            Pollutant::Co => "CO",
            Pollutant::O3 => "O3",
        }
    }

    /// Index into a [`Record`]'s readings array.
    pub(crate) fn idx(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the dataset
// ---------------------------------------------------------------------------

/// A single measurement row: one year label plus one reading per pollutant.
///
/// A reading of `None` means the cell was empty in the source file. Missing
/// readings are never treated as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub year: i32,
    readings: [Option<f64>; 6],
}

impl Record {
    pub fn new(year: i32, readings: [Option<f64>; 6]) -> Self {
        Record { year, readings }
    }

    /// The reading for a pollutant, if present.
    pub fn reading(&self, pollutant: Pollutant) -> Option<f64> {
        self.readings[pollutant.idx()]
    }
}

// ---------------------------------------------------------------------------
// AirQualityDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with the distinct years pre-computed.
#[derive(Debug, Clone, PartialEq)]
pub struct AirQualityDataset {
    /// All rows, in source order.
    pub records: Vec<Record>,
    /// Distinct years observed, ascending.
    pub years: Vec<i32>,
}

impl AirQualityDataset {
    /// Build the dataset and its year index from parsed rows.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut years: Vec<i32> = records.iter().map(|r| r.year).collect();
        years.sort_unstable();
        years.dedup();
        AirQualityDataset { records, years }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: i32, pm25: f64) -> Record {
        Record::new(
            year,
            [Some(pm25), Some(1.0), Some(1.0), Some(1.0), Some(1.0), Some(1.0)],
        )
    }

    #[test]
    fn from_records_collects_distinct_years_ascending() {
        let ds = AirQualityDataset::from_records(vec![
            record(2015, 10.0),
            record(2013, 20.0),
            record(2015, 30.0),
            record(2014, 40.0),
        ]);
        assert_eq!(ds.years, vec![2013, 2014, 2015]);
        assert_eq!(ds.len(), 4);
    }

    #[test]
    fn empty_dataset_has_no_years() {
        let ds = AirQualityDataset::from_records(Vec::new());
        assert!(ds.is_empty());
        assert!(ds.years.is_empty());
    }

    #[test]
    fn pollutant_order_matches_source_columns() {
        let names: Vec<&str> = Pollutant::ALL.iter().map(|p| p.column_name()).collect();
        assert_eq!(names, vec!["PM2.5", "PM10", "SO2", "NO2", "CO", "O3"]);
    }
}
