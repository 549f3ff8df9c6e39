use std::collections::BTreeMap;

use crate::color::ColorMap;
use crate::data::aggregate::{feature_share, yearly_pm25_average};
use crate::data::model::{AirQualityDataset, Pollutant};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The two chart summaries derived from a dataset.
///
/// Computed once per loaded dataset and cached here so the render loop never
/// re-runs the aggregations frame after frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Summaries {
    /// Mean PM2.5 per year, ascending.
    pub yearly_pm25: BTreeMap<i32, f64>,
    /// Per-pollutant share of the combined total, in display order.
    pub shares: Vec<(Pollutant, f64)>,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a file loads successfully).
    pub dataset: Option<AirQualityDataset>,

    /// Cached aggregation results for the current dataset.
    pub summaries: Option<Summaries>,

    /// Slice / line colours, fixed per pollutant.
    pub color_map: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            summaries: None,
            color_map: ColorMap::default(),
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset and recompute both summaries.
    ///
    /// An aggregation failure (a row missing a pollutant reading, or an
    /// all-zero dataset) rejects the dataset and surfaces the error as a
    /// status message.
    pub fn set_dataset(&mut self, dataset: AirQualityDataset) {
        match feature_share(&dataset, &Pollutant::ALL) {
            Ok(shares) => {
                self.summaries = Some(Summaries {
                    yearly_pm25: yearly_pm25_average(&dataset),
                    shares,
                });
                self.dataset = Some(dataset);
                self.status_message = None;
            }
            Err(e) => {
                self.summaries = None;
                self.dataset = None;
                self.status_message = Some(format!("Failed to summarise data: {e}"));
            }
        }
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn readings(values: [f64; 6]) -> [Option<f64>; 6] {
        values.map(Some)
    }

    #[test]
    fn set_dataset_caches_both_summaries() {
        let mut state = AppState::default();
        state.set_dataset(AirQualityDataset::from_records(vec![
            Record::new(2013, readings([10.0, 5.0, 1.0, 2.0, 20.0, 3.0])),
            Record::new(2014, readings([30.0, 5.0, 1.0, 2.0, 20.0, 3.0])),
        ]));

        let summaries = state.summaries.as_ref().unwrap();
        assert_eq!(summaries.yearly_pm25[&2013], 10.0);
        assert_eq!(summaries.yearly_pm25[&2014], 30.0);
        assert_eq!(summaries.shares.len(), 6);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn set_dataset_rejects_unsummarisable_data() {
        let mut state = AppState::default();
        state.set_dataset(AirQualityDataset::from_records(Vec::new()));

        assert!(state.dataset.is_none());
        assert!(state.summaries.is_none());
        assert!(state.status_message.is_some());
    }
}
