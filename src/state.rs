use std::ops::RangeInclusive;
use std::sync::Arc;

use crate::chart::{ChartArtifact, TableArtifact, render_chart, render_table};
use crate::data::aggregate::aggregate;
use crate::data::filter::{ViewMode, clamp_year_range, filter};
use crate::data::model::NominationTable;
use crate::data::source::{DataError, DataSource};

/// Initial year range before clamping to the loaded data.
pub const DEFAULT_YEAR_RANGE: (i32, i32) = (1929, 2024);
pub const TOP_N_RANGE: RangeInclusive<usize> = 1..=20;
pub const DEFAULT_TOP_N: usize = 10;

// ---------------------------------------------------------------------------
// Control values
// ---------------------------------------------------------------------------

/// Current value of every dashboard control. The pipeline output is a pure
/// function of this and the loaded table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlState {
    pub view_mode: ViewMode,
    pub year_low: i32,
    pub year_high: i32,
    pub category: String,
    pub top_n: usize,
    pub show_raw: bool,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::default(),
            year_low: DEFAULT_YEAR_RANGE.0,
            year_high: DEFAULT_YEAR_RANGE.1,
            category: String::new(),
            top_n: DEFAULT_TOP_N,
            show_raw: false,
        }
    }
}

impl ControlState {
    /// Default controls for a freshly loaded table.
    pub fn for_table(table: &NominationTable) -> Self {
        let mut controls = Self::default();
        controls.fit_to(table);
        controls
    }

    /// Bring the values back inside what `table` can offer: years clamped to
    /// the observed range, category replaced by the first one if unknown,
    /// top-N kept inside its slider range.
    pub fn fit_to(&mut self, table: &NominationTable) {
        (self.year_low, self.year_high) = clamp_year_range(table, self.year_low, self.year_high);
        if !table.categories.contains(&self.category) {
            self.category = table.categories.first().cloned().unwrap_or_default();
        }
        self.top_n = self.top_n.clamp(*TOP_N_RANGE.start(), *TOP_N_RANGE.end());
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Output of one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderArtifacts {
    pub chart: ChartArtifact,
    /// Present only when the raw-data toggle is on.
    pub table: Option<TableArtifact>,
    /// Number of filtered rows feeding the chart.
    pub matched_rows: usize,
}

/// filter → aggregate → render, for one set of control values.
pub fn run_pipeline(controls: &ControlState, table: &NominationTable) -> RenderArtifacts {
    let (year_low, year_high) = clamp_year_range(table, controls.year_low, controls.year_high);
    let subset = filter(table, controls.view_mode, year_low, year_high, &controls.category);
    let rows = aggregate(&subset, controls.top_n);

    log::debug!(
        "Pipeline: {:?} {} {}-{} top {} → {} rows, {} nominees",
        controls.view_mode,
        controls.category,
        year_low,
        year_high,
        controls.top_n,
        subset.len(),
        rows.len()
    );

    RenderArtifacts {
        chart: render_chart(
            &rows,
            &controls.category,
            year_low,
            year_high,
            controls.view_mode,
            controls.top_n,
        ),
        table: controls.show_raw.then(|| render_table(&subset)),
        matched_rows: subset.len(),
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    source: DataSource,

    /// Loaded table (None if loading failed).
    pub dataset: Option<Arc<NominationTable>>,

    /// Error from the last load attempt; the dashboard cannot render while set.
    pub load_error: Option<DataError>,

    /// Values edited by the control widgets.
    pub controls: ControlState,

    /// Output of the last pipeline run, and the controls it was computed for.
    pub artifacts: Option<RenderArtifacts>,
    rendered_for: Option<ControlState>,
}

impl AppState {
    /// Create the state and load the table from `source`.
    pub fn new(source: DataSource) -> Self {
        let mut state = Self {
            source,
            dataset: None,
            load_error: None,
            controls: ControlState::default(),
            artifacts: None,
            rendered_for: None,
        };
        state.load();
        state
    }

    fn load(&mut self) {
        match self.source.table() {
            Ok(table) => {
                if self.dataset.is_none() {
                    self.controls = ControlState::for_table(&table);
                } else {
                    self.controls.fit_to(&table);
                }
                self.dataset = Some(table);
                self.load_error = None;
            }
            Err(e) => {
                self.dataset = None;
                self.load_error = Some(e);
            }
        }
        self.artifacts = None;
        self.rendered_for = None;
        self.refresh();
    }

    pub fn source_path(&self) -> &std::path::Path {
        self.source.path()
    }

    /// Drop the cached table and read the file again.
    pub fn reload(&mut self) {
        self.source.invalidate();
        self.load();
    }

    /// Re-run the pipeline if any control changed since the last run.
    pub fn refresh(&mut self) {
        let Some(table) = &self.dataset else {
            return;
        };
        if self.rendered_for.as_ref() == Some(&self.controls) {
            return;
        }
        self.artifacts = Some(run_pipeline(&self.controls, table));
        self.rendered_for = Some(self.controls.clone());
    }
}
