use log::debug;

use crate::direction::{DirectionSource, TextDirection};
use crate::event::{CellRef, FocusInput, Key, KeyInput, Modifiers};
use crate::model::GridModel;
use crate::mount::{ElementId, MountedWindow};

/// Logical focus position: the cell that should hold input focus,
/// whether or not it is currently rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusState {
    pub row_key: String,
    pub column_key: String,
}

impl FocusState {
    pub fn new(row_key: impl Into<String>, column_key: impl Into<String>) -> Self {
        Self {
            row_key: row_key.into(),
            column_key: column_key.into(),
        }
    }
}

/// A movement decoded from keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveIntent {
    RowBy(i64),
    ColumnBy(i64),
    RowToStart,
    RowToEnd,
    ColumnToStart,
    ColumnToEnd,
}

/// A resolved focus move: the rendering layer should give `element` input
/// focus, then report back through the cell-focused notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusTarget {
    pub element: ElementId,
    pub cell: CellRef,
}

/// Map a key press to a movement intent. Arrow keys move by one step in
/// the pressed direction; Home/End jump within the row, or across rows
/// when Ctrl is held. Unmapped keys pass through unhandled.
pub fn intent_for_key(key: Key, modifiers: Modifiers) -> Option<MoveIntent> {
    match key {
        Key::Down => Some(MoveIntent::RowBy(1)),
        Key::Up => Some(MoveIntent::RowBy(-1)),
        Key::Right => Some(MoveIntent::ColumnBy(1)),
        Key::Left => Some(MoveIntent::ColumnBy(-1)),
        Key::Home if modifiers.ctrl => Some(MoveIntent::RowToStart),
        Key::Home => Some(MoveIntent::ColumnToStart),
        Key::End if modifiers.ctrl => Some(MoveIntent::RowToEnd),
        Key::End => Some(MoveIntent::ColumnToEnd),
        _ => None,
    }
}

/// Resolve a movement intent to the logical cell focus should land on.
///
/// Pure: no hidden context, no side effects. Horizontal deltas are
/// direction-adjusted so arrows move in visual reading order; Home/End
/// jumps clamp straight to the first/last index. Targets are always
/// clamped into valid range, and an empty model resolves to the state
/// unchanged.
pub fn resolve_move(
    state: &FocusState,
    intent: MoveIntent,
    direction: TextDirection,
    model: &GridModel,
) -> FocusState {
    match intent {
        MoveIntent::ColumnBy(delta) => {
            let current = model.column_index_of(&state.column_key).unwrap_or(0) as i64;
            let target = current.saturating_add(delta.saturating_mul(direction.multiplier()));
            column_state(state, model, target)
        }
        MoveIntent::ColumnToStart => column_state(state, model, 0),
        MoveIntent::ColumnToEnd => column_state(state, model, i64::MAX),
        MoveIntent::RowBy(delta) => {
            let current = model.row_index_of(&state.row_key) as i64;
            row_state(state, model, current.saturating_add(delta))
        }
        MoveIntent::RowToStart => row_state(state, model, 0),
        MoveIntent::RowToEnd => row_state(state, model, i64::MAX),
    }
}

fn column_state(state: &FocusState, model: &GridModel, target: i64) -> FocusState {
    let Some(last) = model.column_count().checked_sub(1) else {
        return state.clone();
    };
    let index = target.clamp(0, last as i64) as usize;
    match model.column_key_at(index) {
        Some(key) => FocusState::new(state.row_key.clone(), key),
        None => state.clone(),
    }
}

fn row_state(state: &FocusState, model: &GridModel, target: i64) -> FocusState {
    let Some(last) = model.row_count().checked_sub(1) else {
        return state.clone();
    };
    let index = target.clamp(0, last as i64) as usize;
    match model.row_key_at(index) {
        Some(key) => FocusState::new(key, state.column_key.clone()),
        None => state.clone(),
    }
}

const fn is_horizontal(intent: MoveIntent) -> bool {
    matches!(
        intent,
        MoveIntent::ColumnBy(_) | MoveIntent::ColumnToStart | MoveIntent::ColumnToEnd
    )
}

/// Sign of travel along the row axis, used to pick the mounted edge when
/// the exact target row is outside the virtualization window.
const fn row_travel(intent: MoveIntent) -> i64 {
    match intent {
        MoveIntent::RowBy(delta) => delta,
        MoveIntent::RowToEnd => 1,
        _ => -1,
    }
}

/// Owns the authoritative logical focus state and the keyboard-to-movement
/// state machine. One coordinator per grid; all handlers run synchronously
/// on the UI thread and check the input's handled flag before acting.
#[derive(Debug)]
pub struct FocusCoordinator {
    state: FocusState,
    is_focused: bool,
}

impl FocusCoordinator {
    /// Seed the focus state from the optional default keys, falling back to
    /// the first row/column. Defaults that match nothing are ignored; an
    /// empty model seeds empty keys, leaving every move a no-op until data
    /// arrives.
    pub fn new(
        model: &GridModel,
        default_row_key: Option<&str>,
        default_column_key: Option<&str>,
    ) -> Self {
        let row_key = if model.row_count() > 0 {
            match default_row_key {
                Some(key) if model.has_row(key) => key.to_string(),
                _ => model.row_key_at(0).unwrap_or_default(),
            }
        } else {
            String::new()
        };

        let column_key = if model.column_count() > 0 {
            match default_column_key {
                Some(key) if model.column_index_of(key).is_some() => key.to_string(),
                _ => model.column_key_at(0).unwrap_or_default().to_string(),
            }
        } else {
            String::new()
        };

        Self {
            state: FocusState::new(row_key, column_key),
            is_focused: false,
        }
    }

    pub fn state(&self) -> &FocusState {
        &self.state
    }

    /// Observability hook for styling; never affects the focus state.
    pub fn is_focused(&self) -> bool {
        self.is_focused
    }

    /// Resolve the current logical position against the mounted window,
    /// for hosts that want to focus the grid programmatically. Exact
    /// lookup only; None when the focus cell is not mounted right now.
    pub fn focus_target(&self, window: &MountedWindow) -> Option<FocusTarget> {
        let element = window
            .locate_cell(&self.state.row_key, &self.state.column_key)?
            .clone();
        Some(FocusTarget {
            element,
            cell: CellRef::new(self.state.row_key.clone(), self.state.column_key.clone()),
        })
    }

    /// Keyboard input reported by a cell. Decodes the key into a movement
    /// intent, resolves it against the model, and locates the target cell
    /// in the mounted window.
    ///
    /// Row-axis moves fall back to the nearest mounted edge when the exact
    /// target row is outside the virtualization window; column-axis moves
    /// require the focus row itself to be mounted. The focus state is not
    /// updated here: it follows the cell-focused notification that arrives
    /// once the rendering layer acts on the returned target.
    pub fn handle_cell_key_down(
        &mut self,
        cell: &CellRef,
        input: &mut KeyInput,
        model: &GridModel,
        window: &MountedWindow,
        directions: &dyn DirectionSource,
    ) -> Option<FocusTarget> {
        if input.is_handled() {
            return None;
        }

        let intent = intent_for_key(input.key, input.modifiers)?;
        input.consume();

        // Ambient direction may change without the grid re-rendering, so
        // horizontal moves read it fresh every time.
        let direction = if is_horizontal(intent) {
            directions.current_direction(window.grid_element().unwrap_or(""))
        } else {
            TextDirection::Ltr
        };

        debug!(
            "[grid-focus] {:?} on ({}, {}) -> {:?} ({:?})",
            input.key, cell.row_key, cell.column_key, intent, direction
        );

        let target = resolve_move(&self.state, intent, direction, model);

        let row = if is_horizontal(intent) {
            window.row(&target.row_key)?
        } else {
            window.row_or_nearest_edge(&target.row_key, row_travel(intent))?
        };
        let element = row.cell(&target.column_key)?.clone();

        Some(FocusTarget {
            element,
            cell: CellRef::new(row.row_key(), target.column_key),
        })
    }

    /// A cell reported that it received focus. The authoritative state
    /// follows whatever actually holds focus, including moves the
    /// coordinator did not initiate (mouse, tab order, programmatic).
    pub fn handle_cell_focus(&mut self, cell: &CellRef, input: &FocusInput) {
        if input.is_handled() {
            return;
        }
        debug!(
            "[grid-focus] cell ({}, {}) received focus",
            cell.row_key, cell.column_key
        );
        self.state = FocusState::new(cell.row_key.clone(), cell.column_key.clone());
    }

    /// The grid container received focus. Unless a cell itself was the
    /// target, redirect to the cell at the current focus state so the grid
    /// presents a single focusable cell rather than the container.
    pub fn handle_grid_focus(
        &mut self,
        input: &FocusInput,
        target_is_cell: bool,
        window: &MountedWindow,
    ) -> Option<FocusTarget> {
        let redirect = if !input.is_handled() && !target_is_cell {
            self.focus_target(window)
        } else {
            None
        };
        self.is_focused = true;
        redirect
    }

    /// Focus moved away from the grid. Clears the focused flag only when
    /// the new target is outside the container entirely.
    pub fn handle_grid_blur(&mut self, next_target_inside: bool) {
        if !next_target_inside {
            self.is_focused = false;
        }
    }
}
