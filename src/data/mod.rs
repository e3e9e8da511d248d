/// Data layer: point table, PTS loading, and derived series.
///
/// Architecture:
/// ```text
///  .pts (header + rows)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → PointTable
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ PointTable  │  row-major f64, fixed width ≥ 3
///   └────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  series   │  intensity per point, change between points
///   └──────────┘
/// ```

pub mod error;
pub mod loader;
pub mod model;
pub mod series;
