use eframe::egui::Color32;

use crate::color::CountRamp;
use crate::data::aggregate::AggregateRow;
use crate::data::filter::{Subset, ViewMode};

/// Plot size hint in points (width, height).
pub const CHART_SIZE: [f32; 2] = [800.0, 600.0];

pub const NOMINEE_AXIS_LABEL: &str = "Nominee";

// ---------------------------------------------------------------------------
// Chart artifact – everything the plot widget needs, free of egui state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub name: String,
    pub count: usize,
    pub films: String,
    pub color: Color32,
}

impl ChartBar {
    /// Text shown when hovering the bar.
    pub fn hover_text(&self, value_label: &str) -> String {
        format!(
            "{NOMINEE_AXIS_LABEL}: {}\n{value_label}: {}\nFilms: {}",
            self.name, self.count, self.films
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartArtifact {
    pub title: String,
    /// Label of the value (horizontal) axis.
    pub value_label: &'static str,
    /// Label of the category (vertical) axis.
    pub category_label: &'static str,
    /// Bars from bottom to top; the last bar is drawn topmost.
    pub bars: Vec<ChartBar>,
}

impl ChartArtifact {
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

pub fn value_axis_label(view: ViewMode) -> &'static str {
    match view {
        ViewMode::AllNominations => "Number of Nominations",
        ViewMode::WinnersOnly => "Number of Wins",
    }
}

pub fn chart_title(view: ViewMode, top_n: usize, category: &str, year_low: i32, year_high: i32) -> String {
    let header = match view {
        ViewMode::AllNominations => "Most Nominated",
        ViewMode::WinnersOnly => "Most Wins",
    };
    format!("Top {top_n} {header} in {category} ({year_low}-{year_high})")
}

/// Lay out one horizontal bar per aggregate row.
///
/// Vertical order is derived from the counts themselves, ascending from the
/// bottom, so the largest count sits on top whatever order `rows` arrive in.
/// Equal counts keep their incoming top-to-bottom order.
pub fn render_chart(
    rows: &[AggregateRow],
    category: &str,
    year_low: i32,
    year_high: i32,
    view: ViewMode,
    top_n: usize,
) -> ChartArtifact {
    let counts: Vec<usize> = rows.iter().map(|r| r.count).collect();
    let ramp = CountRamp::new(&counts);

    let mut ordered: Vec<(usize, &AggregateRow)> = rows.iter().enumerate().collect();
    ordered.sort_by(|(ia, a), (ib, b)| a.count.cmp(&b.count).then(ib.cmp(ia)));

    let bars = ordered
        .into_iter()
        .map(|(_, row)| ChartBar {
            name: row.name.clone(),
            count: row.count,
            films: row.films.clone(),
            color: ramp.color_for(row.count),
        })
        .collect();

    ChartArtifact {
        title: chart_title(view, top_n, category, year_low, year_high),
        value_label: value_axis_label(view),
        category_label: NOMINEE_AXIS_LABEL,
        bars,
    }
}

// ---------------------------------------------------------------------------
// Table artifact – the raw filtered rows as text
// ---------------------------------------------------------------------------

pub const TABLE_COLUMNS: [&str; 7] = [
    "year_film",
    "year_ceremony",
    "ceremony",
    "category",
    "name",
    "film",
    "winner",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableArtifact {
    pub columns: &'static [&'static str],
    pub rows: Vec<[String; 7]>,
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Render the untransformed filtered rows.
pub fn render_table(subset: &Subset<'_>) -> TableArtifact {
    let rows = subset
        .iter()
        .map(|n| {
            [
                n.year_film.to_string(),
                optional(n.year_ceremony),
                optional(n.ceremony),
                n.category.clone(),
                optional(n.name.as_deref()),
                optional(n.film.as_deref()),
                n.winner.to_string(),
            ]
        })
        .collect();

    TableArtifact {
        columns: &TABLE_COLUMNS,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::filter;
    use crate::data::model::fixtures::nomination;
    use crate::data::model::NominationTable;

    fn row(name: &str, count: usize, films: &str) -> AggregateRow {
        AggregateRow {
            name: name.to_string(),
            count,
            films: films.to_string(),
        }
    }

    fn names(chart: &ChartArtifact) -> Vec<&str> {
        chart.bars.iter().map(|b| b.name.as_str()).collect()
    }

    #[test]
    fn largest_count_is_topmost_regardless_of_input_order() {
        let rows = vec![row("B", 1, "Y"), row("C", 5, "Z"), row("A", 2, "X")];
        let chart = render_chart(&rows, "Best Actor", 1990, 2000, ViewMode::AllNominations, 3);
        assert_eq!(names(&chart), vec!["B", "A", "C"]);
    }

    #[test]
    fn ties_keep_incoming_order_top_to_bottom() {
        let rows = vec![row("A", 2, "X"), row("B", 2, "Y"), row("C", 1, "Z")];
        let chart = render_chart(&rows, "Best Actor", 1990, 2000, ViewMode::AllNominations, 3);
        // Bottom to top: C, then B below A.
        assert_eq!(names(&chart), vec!["C", "B", "A"]);
    }

    #[test]
    fn labels_follow_view_mode() {
        let nominations = render_chart(&[], "ACTOR", 1929, 2024, ViewMode::AllNominations, 10);
        assert_eq!(nominations.value_label, "Number of Nominations");
        assert_eq!(nominations.category_label, "Nominee");
        assert_eq!(nominations.title, "Top 10 Most Nominated in ACTOR (1929-2024)");

        let wins = render_chart(&[], "ACTOR", 1950, 1950, ViewMode::WinnersOnly, 3);
        assert_eq!(wins.value_label, "Number of Wins");
        assert_eq!(wins.title, "Top 3 Most Wins in ACTOR (1950-1950)");
    }

    #[test]
    fn empty_rows_render_empty_chart() {
        let chart = render_chart(&[], "ACTOR", 1929, 2024, ViewMode::AllNominations, 10);
        assert!(chart.is_empty());
        assert!(!chart.title.is_empty());
    }

    #[test]
    fn hover_lists_films() {
        let chart = render_chart(
            &[row("Meryl Streep", 2, "Doubt, Adaptation")],
            "ACTRESS",
            2000,
            2010,
            ViewMode::AllNominations,
            10,
        );
        let hover = chart.bars[0].hover_text(chart.value_label);
        assert!(hover.contains("Films: Doubt, Adaptation"));
        assert!(hover.contains("Number of Nominations: 2"));
    }

    #[test]
    fn table_shows_raw_subset() {
        let mut honorary = nomination("", "", 1990, "Best Actor", true);
        honorary.name = None;
        honorary.film = None;
        let table = NominationTable::from_rows(vec![
            nomination("A", "X", 1990, "Best Actor", false),
            nomination("B", "Y", 1990, "Best Picture", true),
            honorary,
        ])
        .unwrap();
        let subset = filter(&table, ViewMode::AllNominations, 1990, 1990, "Best Actor");
        let artifact = render_table(&subset);

        assert_eq!(artifact.columns, &TABLE_COLUMNS);
        assert_eq!(artifact.rows.len(), 2);
        assert_eq!(artifact.rows[0][4], "A");
        assert_eq!(artifact.rows[0][1], "1991");
        assert_eq!(artifact.rows[1][4], "");
        assert_eq!(artifact.rows[1][6], "true");
    }
}
