/// Data layer: core types, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///  oscars_data.csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  source   │  owned cache → loader → NominationTable
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ NominationTable │  Vec<Nomination>, categories, year bounds
///   └────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  view mode, years, category → Subset (row indices)
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  group by nominee → top-N AggregateRows
///   └───────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
pub mod source;
