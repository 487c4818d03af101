use std::cmp::Ordering;
use std::collections::HashMap;

use super::filter::Subset;

/// Separator between film titles in [`AggregateRow::films`].
pub const FILM_SEPARATOR: &str = ", ";

// ---------------------------------------------------------------------------
// AggregateRow – one bar of the chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateRow {
    pub name: String,
    /// Nominations (or wins) summed over every film of this nominee. Always >= 1.
    pub count: usize,
    /// Distinct film titles, in order of first appearance in the subset.
    pub films: String,
}

/// Count descending, then name ascending.
fn rank(a: &AggregateRow, b: &AggregateRow) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name))
}

/// Group the subset by nominee and keep the `top_n` largest counts.
///
/// Rows without a nominee name or film title are skipped. Counts are first
/// collapsed per (nominee, film) pair and then summed per nominee. The result
/// is ordered by count descending, ties broken by name. `top_n` of 0 is
/// treated as 1.
pub fn aggregate(subset: &Subset<'_>, top_n: usize) -> Vec<AggregateRow> {
    let top_n = top_n.max(1);

    // (nominee, film) → occurrences, remembering first appearance.
    let mut pair_counts: HashMap<(&str, &str), usize> = HashMap::new();
    let mut pair_order: Vec<(&str, &str)> = Vec::new();
    for row in subset.iter() {
        let (Some(name), Some(film)) = (row.name.as_deref(), row.film.as_deref()) else {
            continue;
        };
        let count = pair_counts.entry((name, film)).or_insert(0);
        if *count == 0 {
            pair_order.push((name, film));
        }
        *count += 1;
    }

    // nominee → (total, films)
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<(&str, usize, Vec<&str>)> = Vec::new();
    for pair in &pair_order {
        let (name, film) = *pair;
        let count = pair_counts[pair];
        let slot = *slots.entry(name).or_insert_with(|| {
            totals.push((name, 0, Vec::new()));
            totals.len() - 1
        });
        let entry = &mut totals[slot];
        entry.1 += count;
        entry.2.push(film);
    }

    let mut rows: Vec<AggregateRow> = totals
        .into_iter()
        .map(|(name, count, films)| AggregateRow {
            name: name.to_string(),
            count,
            films: films.join(FILM_SEPARATOR),
        })
        .collect();

    if rows.len() > top_n {
        rows.select_nth_unstable_by(top_n - 1, rank);
        rows.truncate(top_n);
    }
    rows.sort_by(rank);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{ViewMode, filter};
    use crate::data::model::fixtures::nomination;
    use crate::data::model::NominationTable;

    fn scenario() -> NominationTable {
        NominationTable::from_rows(vec![
            nomination("A", "X", 1990, "Best Actor", false),
            nomination("A", "X", 1990, "Best Actor", false),
            nomination("B", "Y", 1990, "Best Actor", true),
        ])
        .unwrap()
    }

    fn row(name: &str, count: usize, films: &str) -> AggregateRow {
        AggregateRow {
            name: name.to_string(),
            count,
            films: films.to_string(),
        }
    }

    #[test]
    fn all_nominations_scenario() {
        let table = scenario();
        let subset = filter(&table, ViewMode::AllNominations, 1990, 1990, "Best Actor");
        assert_eq!(
            aggregate(&subset, 2),
            vec![row("A", 2, "X"), row("B", 1, "Y")]
        );
    }

    #[test]
    fn winners_only_scenario() {
        let table = scenario();
        let subset = filter(&table, ViewMode::WinnersOnly, 1990, 1990, "Best Actor");
        assert_eq!(aggregate(&subset, 2), vec![row("B", 1, "Y")]);
    }

    #[test]
    fn films_joined_in_first_appearance_order() {
        let table = NominationTable::from_rows(vec![
            nomination("Meryl Streep", "Sophie's Choice", 1982, "ACTRESS", true),
            nomination("Meryl Streep", "Doubt", 2008, "ACTRESS", false),
            nomination("Meryl Streep", "Sophie's Choice", 1982, "ACTRESS", false),
            nomination("Meryl Streep", "Adaptation", 2002, "ACTRESS", false),
        ])
        .unwrap();
        let subset = filter(&table, ViewMode::AllNominations, 1900, 2100, "ACTRESS");
        assert_eq!(
            aggregate(&subset, 10),
            vec![row("Meryl Streep", 4, "Sophie's Choice, Doubt, Adaptation")]
        );
    }

    #[test]
    fn count_is_conserved_across_films() {
        let table = NominationTable::from_rows(vec![
            nomination("A", "X", 1990, "C", false),
            nomination("A", "Y", 1991, "C", false),
            nomination("A", "X", 1992, "C", false),
            nomination("B", "Z", 1990, "C", false),
        ])
        .unwrap();
        let subset = filter(&table, ViewMode::AllNominations, 1990, 1992, "C");
        let rows = aggregate(&subset, 10);

        for r in &rows {
            let per_film: usize = r
                .films
                .split(FILM_SEPARATOR)
                .map(|film| {
                    subset
                        .iter()
                        .filter(|n| {
                            n.name.as_deref() == Some(r.name.as_str())
                                && n.film.as_deref() == Some(film)
                        })
                        .count()
                })
                .sum();
            assert_eq!(per_film, r.count);
        }
        assert_eq!(rows.iter().map(|r| r.count).sum::<usize>(), subset.len());
    }

    #[test]
    fn truncates_to_top_n_sorted_descending() {
        let mut rows = Vec::new();
        for (i, name) in ["A", "B", "C", "D", "E", "F"].iter().enumerate() {
            for _ in 0..=i {
                rows.push(nomination(name, "Film", 2000, "C", false));
            }
        }
        let table = NominationTable::from_rows(rows).unwrap();
        let subset = filter(&table, ViewMode::AllNominations, 2000, 2000, "C");

        for top_n in 1..=8 {
            let out = aggregate(&subset, top_n);
            assert_eq!(out.len(), top_n.min(6));
            assert!(out.windows(2).all(|w| w[0].count >= w[1].count));
            assert_eq!(out[0].name, "F");
        }
    }

    #[test]
    fn ties_break_by_name() {
        let table = NominationTable::from_rows(vec![
            nomination("Zoe", "X", 2000, "C", false),
            nomination("Adam", "Y", 2000, "C", false),
            nomination("Mia", "Z", 2000, "C", false),
            nomination("Mia", "Z", 2000, "C", false),
        ])
        .unwrap();
        let subset = filter(&table, ViewMode::AllNominations, 2000, 2000, "C");
        let names: Vec<_> = aggregate(&subset, 2).into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Mia", "Adam"]);
    }

    #[test]
    fn rows_without_name_or_film_are_skipped() {
        let mut nameless = nomination("", "Wings", 1927, "PICTURE", true);
        nameless.name = None;
        let mut filmless = nomination("Charlie Chaplin", "", 1927, "PICTURE", true);
        filmless.film = None;
        let table = NominationTable::from_rows(vec![nameless, filmless]).unwrap();
        let subset = filter(&table, ViewMode::AllNominations, 1927, 1927, "PICTURE");

        assert_eq!(subset.len(), 2);
        assert!(aggregate(&subset, 5).is_empty());
    }

    #[test]
    fn empty_subset_gives_no_rows() {
        let table = scenario();
        let subset = filter(&table, ViewMode::AllNominations, 1990, 1990, "Best Picture");
        assert!(aggregate(&subset, 10).is_empty());
    }

    #[test]
    fn zero_top_n_behaves_as_one() {
        let table = scenario();
        let subset = filter(&table, ViewMode::AllNominations, 1990, 1990, "Best Actor");
        assert_eq!(aggregate(&subset, 0), vec![row("A", 2, "X")]);
    }
}
