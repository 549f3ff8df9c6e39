/// Data layer: core types, loading, and aggregation.
///
/// Architecture:
/// ```text
///       .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → AirQualityDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────────┐
///   │ AirQualityDataset │  Vec<Record>, year index
///   └───────────────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  yearly PM2.5 means, pollutant shares
///   └───────────┘
/// ```
pub mod aggregate;
pub mod loader;
pub mod model;
