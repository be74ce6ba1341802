pub mod direction;
pub mod event;
pub mod focus;
pub mod model;
pub mod mount;
pub mod position;

pub use direction::{DirectionSource, DirectionTree, TextDirection};
pub use event::{CellRef, FocusInput, Key, KeyInput, Modifiers};
pub use focus::{
    intent_for_key, resolve_move, FocusCoordinator, FocusState, FocusTarget, MoveIntent,
};
pub use model::{
    CellRenderer, ColumnDefinition, GridModel, HeaderRenderer, RowRecord, DEFAULT_ROW_INDEX,
};
pub use mount::{ElementId, MountedRow, MountedWindow};
pub use position::{ItemHeightCallback, RowPosition, RowPositionIndex, DEFAULT_ITEM_HEIGHT};
