use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};

use super::model::{AirQualityDataset, Pollutant, Record};

/// Where the dashboard looks for the cleaned dataset on startup.
pub const DEFAULT_DATA_PATH: &str = "data/main_data.csv";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load an air-quality dataset from a file.  Dispatch by extension.
///
/// Only `.csv` is supported: a header row naming `year` and the six pollutant
/// columns (`PM2.5`, `PM10`, `SO2`, `NO2`, `CO`, `O3`), one measurement row
/// per line. Extra columns are ignored; empty pollutant cells become missing
/// readings rather than zeros.
pub fn load_file(path: &Path) -> Result<AirQualityDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("opening {}", path.display()))?;
            parse_csv(file)
        }
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Parse CSV from any reader into a dataset.
pub fn parse_csv<R: Read>(reader: R) -> Result<AirQualityDataset> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers: Vec<String> = csv_reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let year_idx = headers
        .iter()
        .position(|h| h == "year")
        .context("CSV missing 'year' column")?;

    let mut pollutant_idx = [0usize; 6];
    for (i, pollutant) in Pollutant::ALL.iter().enumerate() {
        pollutant_idx[i] = headers
            .iter()
            .position(|h| h == pollutant.column_name())
            .with_context(|| format!("CSV missing '{pollutant}' column"))?;
    }

    let mut records = Vec::new();

    for (row_no, result) in csv_reader.records().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;

        let year: i32 = row
            .get(year_idx)
            .unwrap_or("")
            .trim()
            .parse()
            .with_context(|| format!("Row {row_no}: 'year' is not an integer"))?;

        let mut readings = [None; 6];
        for (i, pollutant) in Pollutant::ALL.iter().enumerate() {
            let cell = row.get(pollutant_idx[i]).unwrap_or("").trim();
            if cell.is_empty() {
                continue;
            }
            let value: f64 = cell
                .parse()
                .with_context(|| format!("Row {row_no}, {pollutant}: '{cell}' is not a number"))?;
            readings[i] = Some(value);
        }

        records.push(Record::new(year, readings));
    }

    Ok(AirQualityDataset::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
year,PM2.5,PM10,SO2,NO2,CO,O3
2013,10.0,5.0,1.0,2.0,20.0,3.0
2013,20.0,5.0,1.0,2.0,20.0,3.0
2014,30.0,5.0,1.0,2.0,20.0,3.0
";

    #[test]
    fn parses_rows_and_years() {
        let ds = parse_csv(SAMPLE.as_bytes()).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.years, vec![2013, 2014]);
        assert_eq!(ds.records[2].reading(Pollutant::Pm25), Some(30.0));
        assert_eq!(ds.records[0].reading(Pollutant::Co), Some(20.0));
    }

    #[test]
    fn empty_cell_becomes_missing_reading() {
        let csv = "\
year,PM2.5,PM10,SO2,NO2,CO,O3
2013,,5.0,1.0,2.0,20.0,3.0
";
        let ds = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(ds.records[0].reading(Pollutant::Pm25), None);
        assert_eq!(ds.records[0].reading(Pollutant::Pm10), Some(5.0));
    }

    #[test]
    fn extra_columns_are_ignored() {
        let csv = "\
station,year,PM2.5,PM10,SO2,NO2,CO,O3,wind
Guanyuan,2013,10.0,5.0,1.0,2.0,20.0,3.0,NW
";
        let ds = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(ds.records[0].year, 2013);
        assert_eq!(ds.records[0].reading(Pollutant::O3), Some(3.0));
    }

    #[test]
    fn missing_pollutant_column_is_an_error() {
        let csv = "\
year,PM2.5,PM10,SO2,NO2,CO
2013,10.0,5.0,1.0,2.0,20.0
";
        let err = parse_csv(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("O3"));
    }

    #[test]
    fn non_numeric_cell_is_an_error() {
        let csv = "\
year,PM2.5,PM10,SO2,NO2,CO,O3
2013,ten,5.0,1.0,2.0,20.0,3.0
";
        assert!(parse_csv(csv.as_bytes()).is_err());
    }
}
