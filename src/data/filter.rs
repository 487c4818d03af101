use super::model::{Nomination, NominationTable};

// ---------------------------------------------------------------------------
// Selection predicates
// ---------------------------------------------------------------------------

/// Whether the dashboard counts every nomination or only wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    AllNominations,
    WinnersOnly,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::AllNominations => "All Nominations",
            ViewMode::WinnersOnly => "Winners Only",
        }
    }
}

// ---------------------------------------------------------------------------
// Subset – a filtered view over the table
// ---------------------------------------------------------------------------

/// Rows of a [`NominationTable`] that passed the filters, in table order.
/// Borrows the table; nothing is copied.
#[derive(Debug, Clone)]
pub struct Subset<'a> {
    table: &'a NominationTable,
    indices: Vec<usize>,
}

impl<'a> Subset<'a> {
    pub fn iter(&self) -> impl Iterator<Item = &'a Nomination> + '_ {
        let table = self.table;
        self.indices.iter().map(move |&i| &table.rows[i])
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Return the nominations that pass all filters.
///
/// A row passes when:
/// * `view` is `WinnersOnly` → the row is a win
/// * its film year lies in `[year_low, year_high]` (bounds clamped to the
///   table's years, swapped if reversed)
/// * its category equals `category`
///
/// An unknown category yields an empty subset.
pub fn filter<'a>(
    table: &'a NominationTable,
    view: ViewMode,
    year_low: i32,
    year_high: i32,
    category: &str,
) -> Subset<'a> {
    let (low, high) = clamp_year_range(table, year_low, year_high);

    let indices = table
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| view == ViewMode::AllNominations || row.winner)
        .filter(|(_, row)| (low..=high).contains(&row.year_film))
        .filter(|(_, row)| row.category == category)
        .map(|(i, _)| i)
        .collect();

    Subset { table, indices }
}

/// Clamp a year range to the table's bounds, ordering it `low <= high`.
pub fn clamp_year_range(table: &NominationTable, year_low: i32, year_high: i32) -> (i32, i32) {
    let (mut low, mut high) = (year_low, year_high);
    if low > high {
        log::warn!("Year range {low}-{high} is reversed; swapping");
        std::mem::swap(&mut low, &mut high);
    }
    let clamped = (table.years.clamp(low), table.years.clamp(high));
    if clamped != (low, high) {
        log::warn!(
            "Year range {low}-{high} clamped to {}-{} (data covers {})",
            clamped.0,
            clamped.1,
            table.years
        );
    }
    clamped
}
