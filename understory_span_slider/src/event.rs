// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notifications produced by [`SpanSlider`](crate::SpanSlider).

use crate::types::Handle;

/// A change reported by the slider.
///
/// Every mutating call returns the events it produced, in the order they
/// happened. Hosts typically forward value events to their model and treat any
/// event as a reason to repaint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpanEvent {
    /// The bounds of the slider changed.
    RangeChanged {
        /// New minimum.
        minimum: i32,
        /// New maximum.
        maximum: i32,
    },
    /// The committed span changed; carries both values after the change.
    SpanChanged {
        /// Committed lower value.
        lower: i32,
        /// Committed upper value.
        upper: i32,
    },
    /// The committed lower value changed.
    LowerValueChanged(i32),
    /// The committed upper value changed.
    UpperValueChanged(i32),
    /// The lower handle moved while the slider was held down.
    LowerPositionChanged(i32),
    /// The upper handle moved while the slider was held down.
    UpperPositionChanged(i32),
    /// A handle was grabbed.
    HandlePressed(Handle),
    /// The grabbed handle was let go.
    HandleReleased(Handle),
}

impl SpanEvent {
    /// Returns `true` for events that report a committed value change.
    #[must_use]
    pub fn is_value_change(&self) -> bool {
        matches!(
            self,
            Self::SpanChanged { .. } | Self::LowerValueChanged(_) | Self::UpperValueChanged(_)
        )
    }
}
