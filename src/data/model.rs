use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Nomination – one row of the source table
// ---------------------------------------------------------------------------

/// A single nomination (one row of the source table).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nomination {
    /// Year the nominated film was released.
    pub year_film: i32,
    /// Year the ceremony took place, when the source provides it.
    pub year_ceremony: Option<i32>,
    /// Ceremony number, when the source provides it.
    pub ceremony: Option<u32>,
    pub category: String,
    /// Nominee. Missing for some honorary and technical awards.
    pub name: Option<String>,
    /// Film / work title. Missing for some honorary awards.
    pub film: Option<String>,
    pub winner: bool,
}

// ---------------------------------------------------------------------------
// YearBounds – observed film-year range
// ---------------------------------------------------------------------------

/// Inclusive range of film years observed in a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearBounds {
    pub min: i32,
    pub max: i32,
}

impl YearBounds {
    /// Clamp a single year into the bounds.
    pub fn clamp(&self, year: i32) -> i32 {
        year.clamp(self.min, self.max)
    }
}

impl fmt::Display for YearBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// NominationTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed table with pre-computed control metadata.
///
/// Immutable once built; shared through `Arc` by [`super::source::DataSource`].
#[derive(Debug, Clone, PartialEq)]
pub struct NominationTable {
    /// All nominations in source order.
    pub rows: Vec<Nomination>,
    /// Sorted distinct categories.
    pub categories: Vec<String>,
    /// Observed film-year range.
    pub years: YearBounds,
}

impl NominationTable {
    /// Build the category index and year bounds. Returns `None` for an empty
    /// row set, since no year bounds can be derived from it.
    pub fn from_rows(rows: Vec<Nomination>) -> Option<Self> {
        let min = rows.iter().map(|r| r.year_film).min()?;
        let max = rows.iter().map(|r| r.year_film).max()?;

        let categories: Vec<String> = rows
            .iter()
            .map(|r| r.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        Some(NominationTable {
            rows,
            categories,
            years: YearBounds { min, max },
        })
    }

    /// Number of nominations.
    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::Nomination;

    pub fn nomination(name: &str, film: &str, year: i32, category: &str, winner: bool) -> Nomination {
        Nomination {
            year_film: year,
            year_ceremony: Some(year + 1),
            ceremony: None,
            category: category.to_string(),
            name: Some(name.to_string()),
            film: Some(film.to_string()),
            winner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::nomination;
    use super::*;

    #[test]
    fn from_rows_indexes_categories_and_years() {
        let table = NominationTable::from_rows(vec![
            nomination("A", "X", 1995, "Best Actor", false),
            nomination("B", "Y", 1930, "Best Picture", true),
            nomination("C", "Z", 2001, "Best Actor", false),
        ])
        .unwrap();

        assert_eq!(table.categories, vec!["Best Actor", "Best Picture"]);
        assert_eq!(table.years, YearBounds { min: 1930, max: 2001 });
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn from_rows_rejects_empty() {
        assert!(NominationTable::from_rows(Vec::new()).is_none());
    }

    #[test]
    fn year_bounds_clamp() {
        let b = YearBounds { min: 1927, max: 2023 };
        assert_eq!(b.clamp(1900), 1927);
        assert_eq!(b.clamp(2030), 2023);
        assert_eq!(b.clamp(1990), 1990);
        assert_eq!(b.to_string(), "1927-2023");
    }
}
