/// Data layer: the measurement matrix and file loading.
///
/// Architecture:
/// ```text
///  .csv / .txt / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Matrix
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Matrix   │  rows × cols, row-major f64
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
