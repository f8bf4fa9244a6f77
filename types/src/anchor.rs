//! The anchor specification — the system's secret key.

use serde::{Deserialize, Serialize};

use crate::cell::{Coord, SpaceValue};

/// The secret constraint a hidden grid is constructed to satisfy: one
/// coordinate/value pair, plus the value pinned at the grid center.
///
/// The center constraint is always evaluated at [`Coord::CENTER`]; it has no
/// coordinate of its own. Whoever holds the anchor can regenerate the hidden
/// grid; nobody else can single it out from the observable composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorSpec {
    anchor: Coord,
    value: SpaceValue,
    center_value: SpaceValue,
}

impl AnchorSpec {
    /// Anchor with the default center value of 1.
    #[must_use]
    pub fn new(anchor: Coord, value: SpaceValue) -> Self {
        Self {
            anchor,
            value,
            center_value: SpaceValue::MIN,
        }
    }

    #[must_use]
    pub fn with_center_value(mut self, center_value: SpaceValue) -> Self {
        self.center_value = center_value;
        self
    }

    #[must_use]
    pub fn anchor(&self) -> Coord {
        self.anchor
    }

    #[must_use]
    pub fn value(&self) -> SpaceValue {
        self.value
    }

    #[must_use]
    pub fn center_value(&self) -> SpaceValue {
        self.center_value
    }
}
