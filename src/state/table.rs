//! Sortable, filterable table model.
//!
//! Sorting reorders `rows` in place (ascending only, no copy of the prior
//! order is kept). Filtering never removes rows; it only decides which rows
//! render with `display: none`.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use crate::util::table_sort::{SortKind, compare_cells};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableColumn {
    pub title: String,
    pub kind: SortKind,
    pub sortable: bool,
}

impl TableColumn {
    pub fn new(title: impl Into<String>, kind: SortKind) -> Self {
        Self { title: title.into(), kind, sortable: true }
    }

    #[must_use]
    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }
}

/// One body row. `key` identifies the record behind the row (row actions,
/// keyed rendering); `cells` hold the rendered text per column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRow {
    pub key: String,
    pub cells: Vec<String>,
}

impl TableRow {
    pub fn new(key: impl Into<String>, cells: Vec<String>) -> Self {
        Self { key: key.into(), cells }
    }

    /// Cell text used for sorting; missing cells read as empty.
    #[must_use]
    pub fn cell(&self, column: usize) -> &str {
        self.cells.get(column).map_or("", String::as_str)
    }

    /// Row text the filter searches: every cell, space-joined.
    #[must_use]
    pub fn text(&self) -> String {
        self.cells.join(" ")
    }
}

/// Whether `row_text` contains `query`, ignoring case. Empty queries match.
#[must_use]
pub fn row_matches(row_text: &str, query: &str) -> bool {
    row_text.to_lowercase().contains(&query.to_lowercase())
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableState {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<TableRow>,
    pub query: String,
    /// Column of the most recent sort, for header highlighting.
    pub sorted_by: Option<usize>,
}

impl TableState {
    #[must_use]
    pub fn new(columns: Vec<TableColumn>, rows: Vec<TableRow>) -> Self {
        Self { columns, rows, query: String::new(), sorted_by: None }
    }

    /// Sort ascending by `column` using that column's kind. Out-of-range
    /// columns leave the table untouched.
    pub fn sort_by(&mut self, column: usize) {
        let Some(kind) = self.columns.get(column).map(|c| c.kind) else {
            return;
        };
        self.sort_by_kind(column, kind);
    }

    /// Sort ascending by `column`, reading its cells as `kind`.
    pub fn sort_by_kind(&mut self, column: usize, kind: SortKind) {
        if column >= self.columns.len() {
            return;
        }
        self.rows
            .sort_by(|a, b| compare_cells(kind, a.cell(column), b.cell(column)));
        self.sorted_by = Some(column);
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    #[must_use]
    pub fn is_row_visible(&self, row: &TableRow) -> bool {
        row_matches(&row.text(), &self.query)
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.rows.iter().filter(|row| self.is_row_visible(row)).count()
    }
}

/// Inline style for a body row.
#[must_use]
pub fn row_style(visible: bool) -> &'static str {
    if visible { "" } else { "display: none" }
}
