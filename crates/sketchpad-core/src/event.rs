//! Input event vocabulary
//!
//! Provides:
//! - Pointer and keyboard events delivered by the windowing host
//! - The modifier-key bitmask carried by primary-button events
//! - Editor key commands (delete, clipboard, history, grouping)

use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Modifier-key bitmask attached to pointer events.
///
/// Bit values follow the X11 state mask used by most toolkits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Modifiers(pub u32);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const SHIFT: Modifiers = Modifiers(0x0001);
    pub const CONTROL: Modifiers = Modifiers(0x0004);
    pub const ALT: Modifiers = Modifiers(0x0008);

    /// True when every bit of `other` is set.
    pub fn contains(self, other: Modifiers) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Modifiers) -> Modifiers {
        Modifiers(self.0 | rhs.0)
    }
}

/// Keyboard commands understood by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorKey {
    Delete,
    Copy,
    Cut,
    Paste,
    /// Paste through a live preview that follows the pointer.
    PastePreview,
    Undo,
    Redo,
    Group,
    Ungroup,
    SelectAll,
    /// Cancels a paste preview or an in-progress polygon.
    Escape,
}

/// One input event from the host, processed to completion before the next.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum InputEvent {
    /// Primary button pressed.
    PrimaryDown {
        x: f64,
        y: f64,
        #[serde(default)]
        modifiers: Modifiers,
    },
    /// Pointer moved with the primary button held.
    PrimaryDrag {
        x: f64,
        y: f64,
        #[serde(default)]
        modifiers: Modifiers,
    },
    /// Primary button released.
    PrimaryUp {
        x: f64,
        y: f64,
        #[serde(default)]
        modifiers: Modifiers,
    },
    /// Secondary button pressed (finishes a polygon).
    SecondaryDown { x: f64, y: f64 },
    /// Pointer moved with no button held.
    PointerMove { x: f64, y: f64 },
    Key { key: EditorKey },
}

impl InputEvent {
    pub fn primary_down(x: f64, y: f64) -> Self {
        InputEvent::PrimaryDown {
            x,
            y,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn primary_drag(x: f64, y: f64) -> Self {
        InputEvent::PrimaryDrag {
            x,
            y,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn primary_up(x: f64, y: f64) -> Self {
        InputEvent::PrimaryUp {
            x,
            y,
            modifiers: Modifiers::NONE,
        }
    }

    /// Pointer position carried by the event, if any.
    pub fn position(&self) -> Option<Point> {
        match *self {
            InputEvent::PrimaryDown { x, y, .. }
            | InputEvent::PrimaryDrag { x, y, .. }
            | InputEvent::PrimaryUp { x, y, .. }
            | InputEvent::SecondaryDown { x, y }
            | InputEvent::PointerMove { x, y } => Some(Point::new(x, y)),
            InputEvent::Key { .. } => None,
        }
    }
}

impl fmt::Display for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputEvent::PrimaryDown { x, y, modifiers } => {
                write!(f, "primary down at ({}, {}) mods={:#x}", x, y, modifiers.0)
            }
            InputEvent::PrimaryDrag { x, y, .. } => write!(f, "primary drag to ({}, {})", x, y),
            InputEvent::PrimaryUp { x, y, .. } => write!(f, "primary up at ({}, {})", x, y),
            InputEvent::SecondaryDown { x, y } => write!(f, "secondary down at ({}, {})", x, y),
            InputEvent::PointerMove { x, y } => write!(f, "pointer move to ({}, {})", x, y),
            InputEvent::Key { key } => write!(f, "key {:?}", key),
        }
    }
}
