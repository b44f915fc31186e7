/// Data layer: performance table types, loading, and nearest-match lookup.
///
/// Architecture:
/// ```text
///  .json / .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → PerformanceTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────────────┐
///   │ PerformanceTable  │  model → weight → ISA deviation → cruise points
///   └──────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  lookup   │  nearest weight, ISA deviation, altitude → CruisePoint
///   └──────────┘
/// ```

pub mod loader;
pub mod lookup;
pub mod model;
pub mod nearest;
