/// Data layer: capture reading and the derived series.
///
/// Architecture:
/// ```text
///  capture file (3 preamble lines + "t, a, b, c, d" rows)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  skip preamble, split rows → Sample
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Traces   │  time[], v1 = a - b, v2 = c - d
///   └──────────┘
/// ```

pub mod error;
pub mod loader;
pub mod model;
