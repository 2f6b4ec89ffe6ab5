//! Pointer input as delivered by the host toolkit.
//!
//! Positions are in panel (screen) coordinates; the viewer converts them to
//! pixel coordinates itself.

use rasterview_core::ScreenPoint;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mouse buttons the viewer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Primary,
    Middle,
    Secondary,
}

/// Keyboard modifiers held during a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        control: false,
        alt: false,
        meta: false,
    };

    /// The modifier that suppresses selection so the gesture can be used
    /// for panning or inspection instead.
    pub fn is_alternate(&self) -> bool {
        self.shift
    }

    pub fn is_empty(&self) -> bool {
        !(self.shift || self.control || self.alt || self.meta)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = Vec::new();
        if self.shift {
            names.push("Shift");
        }
        if self.control {
            names.push("Ctrl");
        }
        if self.alt {
            names.push("Alt");
        }
        if self.meta {
            names.push("Meta");
        }
        if names.is_empty() {
            f.write_str("none")
        } else {
            f.write_str(&names.join("+"))
        }
    }
}

/// A pointer event on the image panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Pressed {
        position: ScreenPoint,
        button: MouseButton,
        modifiers: Modifiers,
    },
    Released {
        position: ScreenPoint,
        button: MouseButton,
        modifiers: Modifiers,
    },
    /// A press and release without movement in between.
    Clicked {
        position: ScreenPoint,
        button: MouseButton,
        modifiers: Modifiers,
    },
    /// Movement with no button held. Some toolkits still report the last
    /// button here.
    Moved {
        position: ScreenPoint,
        button: Option<MouseButton>,
        modifiers: Modifiers,
    },
    /// Movement with a button held.
    Dragged {
        position: ScreenPoint,
        modifiers: Modifiers,
    },
    /// Wheel rotation; negative notches zoom in.
    Wheel {
        position: ScreenPoint,
        notches: i32,
        modifiers: Modifiers,
    },
    /// The pointer left the panel.
    Exited,
}

impl PointerEvent {
    pub fn position(&self) -> Option<ScreenPoint> {
        match self {
            Self::Pressed { position, .. }
            | Self::Released { position, .. }
            | Self::Clicked { position, .. }
            | Self::Moved { position, .. }
            | Self::Dragged { position, .. }
            | Self::Wheel { position, .. } => Some(*position),
            Self::Exited => None,
        }
    }

    pub fn modifiers(&self) -> Modifiers {
        match self {
            Self::Pressed { modifiers, .. }
            | Self::Released { modifiers, .. }
            | Self::Clicked { modifiers, .. }
            | Self::Moved { modifiers, .. }
            | Self::Dragged { modifiers, .. }
            | Self::Wheel { modifiers, .. } => *modifiers,
            Self::Exited => Modifiers::NONE,
        }
    }

    /// Short name used in the interaction log.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Pressed { .. } => "pressed",
            Self::Released { .. } => "released",
            Self::Clicked { .. } => "clicked",
            Self::Moved { .. } => "moved",
            Self::Dragged { .. } => "dragged",
            Self::Wheel { .. } => "wheel",
            Self::Exited => "exited",
        }
    }
}
