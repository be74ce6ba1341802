use log::trace;

use crate::model::RowRecord;

/// Default row height in layout units when the host supplies neither a
/// fixed height nor a callback result.
pub const DEFAULT_ITEM_HEIGHT: u16 = 33;

/// Vertical bounds of one known row. For contiguous rows
/// `top == previous.bottom`, and `bottom > top` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowPosition {
    pub index: usize,
    pub top: u32,
    pub bottom: u32,
}

/// Per-row height override: `(row, row_index, default_height) -> height`.
pub type ItemHeightCallback = dyn Fn(&RowRecord, usize, u16) -> u16;

/// Maintains vertical bounds for the currently known rows.
///
/// Rebuilt whenever the row sequence or the height source changes; queried
/// to align virtualized scroll positions to a target offset without
/// materializing every row.
#[derive(Debug, Default)]
pub struct RowPositionIndex {
    positions: Vec<RowPosition>,
}

impl RowPositionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute bounds for the given rows. Heights come from the callback
    /// when present, else the fixed `item_height`; either way heights are
    /// clamped to at least one unit so bounds stay strictly increasing.
    pub fn rebuild(
        &mut self,
        rows: &[RowRecord],
        item_height: u16,
        item_height_callback: Option<&ItemHeightCallback>,
    ) {
        self.positions.clear();
        self.positions.reserve(rows.len());

        let mut top: u32 = 0;
        for (index, row) in rows.iter().enumerate() {
            let height = match item_height_callback {
                Some(callback) => callback(row, index, item_height),
                None => item_height,
            }
            .max(1);

            let bottom = top + u32::from(height);
            self.positions.push(RowPosition { index, top, bottom });
            top = bottom;
        }

        trace!(
            "[positions] rebuilt {} rows, total height {}",
            self.positions.len(),
            top
        );
    }

    pub fn positions(&self) -> &[RowPosition] {
        &self.positions
    }

    pub fn get(&self, index: usize) -> Option<RowPosition> {
        self.positions.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Combined height of all known rows.
    pub fn total_height(&self) -> u32 {
        self.positions.last().map_or(0, |p| p.bottom)
    }

    /// Index of the first row, scanning forward from `start_index`, whose
    /// bottom meets or exceeds `threshold`. Returns the last row's index
    /// when no row in range reaches the threshold, and 0 when the index
    /// is empty.
    pub fn threshold_row_index(&self, start_index: usize, threshold: u32) -> usize {
        if self.positions.is_empty() {
            return 0;
        }

        for position in &self.positions[start_index.min(self.positions.len())..] {
            if position.bottom >= threshold {
                return position.index;
            }
        }

        self.positions.len() - 1
    }
}
