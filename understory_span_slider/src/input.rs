// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer input vocabulary accepted by [`SpanSlider`](crate::SpanSlider).

use alloc::vec::Vec;

use bitflags::bitflags;

use crate::event::SpanEvent;

/// The button that triggered a pointer press.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Left mouse button, pen contact, or touch.
    Primary,
    /// Right mouse button.
    Secondary,
    /// Middle mouse button.
    Auxiliary,
    /// Browser-back side button.
    Back,
    /// Browser-forward side button.
    Forward,
}

bitflags! {
    /// The set of buttons held while a pointer event was generated.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PointerButtons: u8 {
        /// Left mouse button, pen contact, or touch.
        const PRIMARY   = 0b0_0001;
        /// Right mouse button.
        const SECONDARY = 0b0_0010;
        /// Middle mouse button.
        const AUXILIARY = 0b0_0100;
        /// Browser-back side button.
        const BACK      = 0b0_1000;
        /// Browser-forward side button.
        const FORWARD   = 0b1_0000;
    }
}

impl From<PointerButton> for PointerButtons {
    fn from(button: PointerButton) -> Self {
        match button {
            PointerButton::Primary => Self::PRIMARY,
            PointerButton::Secondary => Self::SECONDARY,
            PointerButton::Auxiliary => Self::AUXILIARY,
            PointerButton::Back => Self::BACK,
            PointerButton::Forward => Self::FORWARD,
        }
    }
}

impl PointerButtons {
    /// Returns `true` if more than one button is held at once.
    #[must_use]
    pub fn is_chorded(self) -> bool {
        self.bits().count_ones() > 1
    }

    /// Returns `true` if `button` is the only button held.
    #[must_use]
    pub fn is_only(self, button: PointerButton) -> bool {
        self == Self::from(button)
    }
}

/// Result of feeding a pointer event to the slider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PointerOutcome {
    /// The slider did not take the event; the host should keep routing it.
    Ignored,
    /// The slider consumed the event and produced these notifications.
    Handled(Vec<SpanEvent>),
}

impl PointerOutcome {
    /// Returns `true` if the event was consumed.
    #[must_use]
    pub fn is_handled(&self) -> bool {
        matches!(self, Self::Handled(_))
    }

    /// Returns the notifications, empty when the event was ignored.
    #[must_use]
    pub fn events(&self) -> &[SpanEvent] {
        match self {
            Self::Ignored => &[],
            Self::Handled(events) => events,
        }
    }

    /// Consumes the outcome, returning the notifications.
    #[must_use]
    pub fn into_events(self) -> Vec<SpanEvent> {
        match self {
            Self::Ignored => Vec::new(),
            Self::Handled(events) => events,
        }
    }
}
