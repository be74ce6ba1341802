use log::debug;

/// Opaque handle to a rendered element, assigned by the rendering layer.
pub type ElementId = String;

/// One materialized row: its rendering handle plus the handles of its
/// cells, keyed by column key.
#[derive(Debug, Clone)]
pub struct MountedRow {
    row_key: String,
    element: ElementId,
    cells: Vec<(String, ElementId)>,
}

impl MountedRow {
    pub fn new(row_key: impl Into<String>, element: impl Into<ElementId>) -> Self {
        Self {
            row_key: row_key.into(),
            element: element.into(),
            cells: Vec::new(),
        }
    }

    pub fn with_cell(
        mut self,
        column_key: impl Into<String>,
        element: impl Into<ElementId>,
    ) -> Self {
        self.cells.push((column_key.into(), element.into()));
        self
    }

    pub fn row_key(&self) -> &str {
        &self.row_key
    }

    pub fn element(&self) -> &ElementId {
        &self.element
    }

    /// Handle of the cell tagged with the given column key, if that cell
    /// is mounted.
    pub fn cell(&self, column_key: &str) -> Option<&ElementId> {
        self.cells
            .iter()
            .find(|(key, _)| key == column_key)
            .map(|(_, element)| element)
    }
}

/// Index of the rows currently materialized by the rendering layer (the
/// virtualization window), in visual order. The rendering layer rebuilds
/// it whenever the window moves; the coordinator only queries it.
///
/// A missing row or cell is a routine outcome here, not an error: the
/// target is simply outside the mounted window at this moment.
#[derive(Debug, Default)]
pub struct MountedWindow {
    grid: Option<ElementId>,
    rows: Vec<MountedRow>,
}

impl MountedWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the grid container's own handle (used as the anchor for
    /// ambient direction resolution).
    pub fn set_grid_element(&mut self, element: impl Into<ElementId>) {
        self.grid = Some(element.into());
    }

    pub fn grid_element(&self) -> Option<&str> {
        self.grid.as_deref()
    }

    pub fn mount_row(&mut self, row: MountedRow) {
        self.rows.push(row);
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[MountedRow] {
        &self.rows
    }

    pub fn row(&self, row_key: &str) -> Option<&MountedRow> {
        self.rows.iter().find(|row| row.row_key == row_key)
    }

    pub fn row_element(&self, row_key: &str) -> Option<&ElementId> {
        self.row(row_key).map(MountedRow::element)
    }

    pub fn first_row(&self) -> Option<&MountedRow> {
        self.rows.first()
    }

    pub fn last_row(&self) -> Option<&MountedRow> {
        self.rows.last()
    }

    /// Composed lookup from logical position to cell handle. Either miss
    /// yields None; callers treat that as "do not move focus".
    pub fn locate_cell(&self, row_key: &str, column_key: &str) -> Option<&ElementId> {
        self.row(row_key).and_then(|row| row.cell(column_key))
    }

    /// Virtualization fallback rule: the exact row when mounted, else the
    /// nearest mounted edge in the direction of travel (last row when
    /// travelling forward, first when travelling backward). None only when
    /// nothing is mounted at all.
    pub fn row_or_nearest_edge(&self, row_key: &str, travel: i64) -> Option<&MountedRow> {
        if let Some(row) = self.row(row_key) {
            return Some(row);
        }

        let edge = if travel > 0 {
            self.last_row()
        } else {
            self.first_row()
        };

        if let Some(edge) = edge {
            debug!(
                "[mount] row {:?} not mounted, falling back to edge row {:?}",
                row_key,
                edge.row_key()
            );
        }

        edge
    }
}
