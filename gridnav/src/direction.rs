use std::collections::HashMap;

/// Reading direction of the ambient text context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    /// Multiplier applied to horizontal movement deltas so arrow keys
    /// always move in visual reading order.
    pub const fn multiplier(self) -> i64 {
        match self {
            TextDirection::Ltr => 1,
            TextDirection::Rtl => -1,
        }
    }
}

/// Source of the ambient reading direction at a point in the UI tree.
///
/// Queried fresh on every horizontal move: ambient direction can change
/// without the grid being told, so answers must never be cached.
pub trait DirectionSource {
    fn current_direction(&self, anchor: &str) -> TextDirection;
}

/// A fixed direction doubles as a source, for hosts without ambient
/// direction context.
impl DirectionSource for TextDirection {
    fn current_direction(&self, _anchor: &str) -> TextDirection {
        *self
    }
}

/// Containment hierarchy with per-element direction declarations.
/// Resolves an anchor's direction by walking upward to the nearest
/// explicit declaration, defaulting to ltr when none is found or the
/// anchor is not attached.
#[derive(Debug, Default)]
pub struct DirectionTree {
    parents: HashMap<String, String>,
    declared: HashMap<String, TextDirection>,
}

impl DirectionTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an element under a parent (or as a root when `parent` is None).
    pub fn attach(&mut self, id: impl Into<String>, parent: Option<&str>) {
        let id = id.into();
        match parent {
            Some(parent) => {
                self.parents.insert(id, parent.to_string());
            }
            None => {
                self.parents.remove(&id);
            }
        }
    }

    /// Declare an explicit direction on an element.
    pub fn declare(&mut self, id: impl Into<String>, direction: TextDirection) {
        self.declared.insert(id.into(), direction);
    }

    /// Remove an element's explicit declaration.
    pub fn undeclare(&mut self, id: &str) {
        self.declared.remove(id);
    }
}

impl DirectionSource for DirectionTree {
    fn current_direction(&self, anchor: &str) -> TextDirection {
        // Walk bounded by the parent-map size so a malformed cyclic map
        // cannot loop forever.
        let mut id = anchor;
        for _ in 0..=self.parents.len() {
            if let Some(direction) = self.declared.get(id) {
                return *direction;
            }
            match self.parents.get(id) {
                Some(parent) => id = parent,
                None => break,
            }
        }
        TextDirection::Ltr
    }
}
