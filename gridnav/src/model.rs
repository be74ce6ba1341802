use std::collections::HashMap;

/// One row of host data. Cell values are keyed by column key; one entry
/// (named by the grid's row key field) holds the row's unique key.
pub type RowRecord = HashMap<String, String>;

/// Custom render hook for a column header cell.
pub type HeaderRenderer = fn(title: &str, column_key: &str, column_index: usize) -> String;

/// Custom render hook for a data cell in a column.
pub type CellRenderer = fn(row: &RowRecord, column_key: &str) -> String;

/// Describes one column of the grid. Definition order defines both the
/// physical column layout and arrow/Home/End traversal order.
#[derive(Debug, Clone)]
pub struct ColumnDefinition {
    /// Identifies the data item displayed in this column. Must be unique
    /// within the column sequence.
    pub key: String,
    /// Column title shown in the header row.
    pub title: String,
    /// Column width in a grid-template-compatible form ("50px", "1fr", ...).
    pub width: String,
    /// Custom render function for the header cell.
    pub header_renderer: Option<HeaderRenderer>,
    /// Custom render function for data cells in this column.
    pub cell_renderer: Option<CellRenderer>,
}

impl ColumnDefinition {
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        width: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            width: width.into(),
            header_renderer: None,
            cell_renderer: None,
        }
    }
}

/// Row index that key lookups fall back to when a row key matches nothing.
pub const DEFAULT_ROW_INDEX: usize = 0;

/// Read-only view over the host's column and row data for one frame.
/// Borrows whatever the host currently holds; rebuilt per render, owns
/// nothing, mutates nothing.
#[derive(Debug, Clone, Copy)]
pub struct GridModel<'a> {
    columns: &'a [ColumnDefinition],
    rows: &'a [RowRecord],
    row_key_field: &'a str,
}

impl<'a> GridModel<'a> {
    pub fn new(
        columns: &'a [ColumnDefinition],
        rows: &'a [RowRecord],
        row_key_field: &'a str,
    ) -> Self {
        Self {
            columns,
            rows,
            row_key_field,
        }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_at(&self, index: usize) -> Option<&'a ColumnDefinition> {
        self.columns.get(index)
    }

    pub fn column_key_at(&self, index: usize) -> Option<&'a str> {
        self.columns.get(index).map(|c| c.key.as_str())
    }

    /// Index of the column with the given key, scanning in definition order.
    pub fn column_index_of(&self, column_key: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.key == column_key)
    }

    /// Key of the row at the given index. Falls back to the index itself
    /// (rendered as a string) when the record lacks the key field.
    pub fn row_key_at(&self, index: usize) -> Option<String> {
        self.rows
            .get(index)
            .map(|row| self.extract_row_key(row, index))
    }

    /// Index of the row whose extracted key matches.
    ///
    /// On no match this returns [`DEFAULT_ROW_INDEX`], not a sentinel:
    /// callers cannot distinguish a miss from an explicit match on row 0.
    /// Use [`GridModel::has_row`] when a real membership answer is needed.
    pub fn row_index_of(&self, row_key: &str) -> usize {
        self.position_of_row(row_key).unwrap_or(DEFAULT_ROW_INDEX)
    }

    /// Whether any row's extracted key matches.
    pub fn has_row(&self, row_key: &str) -> bool {
        self.position_of_row(row_key).is_some()
    }

    /// Resolve a candidate focus row key: the candidate when it matches a
    /// row, else the default row's key when rows exist, else the candidate
    /// unchanged.
    pub fn resolved_focus_row_key(&self, candidate: &str) -> String {
        if self.position_of_row(candidate).is_none() && !self.rows.is_empty() {
            self.extract_row_key(&self.rows[DEFAULT_ROW_INDEX], DEFAULT_ROW_INDEX)
        } else {
            candidate.to_string()
        }
    }

    /// Joined column width specs, a layout hint for grid-template hosts.
    pub fn column_template(&self) -> String {
        self.columns
            .iter()
            .map(|c| c.width.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn position_of_row(&self, row_key: &str) -> Option<usize> {
        // First match wins; duplicate extracted keys are a documented
        // limitation of the key contract.
        self.rows
            .iter()
            .enumerate()
            .position(|(index, row)| self.extract_row_key(row, index) == row_key)
    }

    fn extract_row_key(&self, row: &RowRecord, index: usize) -> String {
        row.get(self.row_key_field)
            .cloned()
            .unwrap_or_else(|| index.to_string())
    }
}
