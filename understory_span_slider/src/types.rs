// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small value types shared by the slider, its geometry, and its configuration.

use kurbo::Point;

/// One of the two handles of a span slider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Handle {
    /// The handle that defines the lower bound of the span.
    Lower,
    /// The handle that defines the upper bound of the span.
    Upper,
}

impl Handle {
    /// Returns the other handle.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Lower => Self::Upper,
            Self::Upper => Self::Lower,
        }
    }
}

/// How the position of one handle constrains the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MovementPolicy {
    /// Handles move independently and may pass through each other.
    ///
    /// When one handle is pushed past the other the two swap roles, so the
    /// grabbed handle keeps moving and becomes the opposite bound.
    #[default]
    Free,
    /// Handles may touch but never cross.
    NoCrossing,
    /// Handles keep at least one unit between them.
    NoOverlapping,
}

/// A logical slider action, resolved against one of the handles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SliderAction {
    /// Commit the current positions without moving anything.
    NoAction,
    /// Add the single step to the target handle.
    SingleStepAdd,
    /// Subtract the single step from the target handle.
    SingleStepSub,
    /// Add the page step to the target handle.
    PageStepAdd,
    /// Subtract the page step from the target handle.
    PageStepSub,
    /// Move the target handle to the range minimum.
    ToMinimum,
    /// Move the target handle to the range maximum.
    ToMaximum,
    /// Re-apply the target handle's current position and commit it.
    Move,
}

/// Which control an action is resolved against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    /// The handle currently configured as the main control.
    Main,
    /// The handle that is not the main control.
    Alternate,
}

/// The part of the slider under a pointer, as reported by a hit test.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SubControl {
    /// Nothing of the slider.
    #[default]
    None,
    /// The slider, but not the tested handle.
    Groove,
    /// The tested handle.
    Handle,
}

/// The axis a slider track runs along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// The track runs along the x axis.
    #[default]
    Horizontal,
    /// The track runs along the y axis.
    Vertical,
}

impl Orientation {
    /// Returns the coordinate of `point` along this axis.
    #[must_use]
    pub fn pick(self, point: Point) -> f64 {
        match self {
            Self::Horizontal => point.x,
            Self::Vertical => point.y,
        }
    }
}

/// Inclusive integer bounds of a slider.
///
/// Constructed through [`ValueRange::new`], which keeps `minimum <= maximum`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ValueRange {
    minimum: i32,
    maximum: i32,
}

impl ValueRange {
    /// Creates a range, raising `maximum` to `minimum` if the pair is inverted.
    #[must_use]
    pub const fn new(minimum: i32, maximum: i32) -> Self {
        let maximum = if maximum < minimum { minimum } else { maximum };
        Self { minimum, maximum }
    }

    /// Lowest admissible value.
    #[must_use]
    pub const fn minimum(self) -> i32 {
        self.minimum
    }

    /// Highest admissible value.
    #[must_use]
    pub const fn maximum(self) -> i32 {
        self.maximum
    }

    /// Returns `true` when the range holds a single value.
    ///
    /// A slider over a degenerate range does not accept pointer input.
    #[must_use]
    pub const fn is_degenerate(self) -> bool {
        self.minimum == self.maximum
    }

    /// Number of steps between the bounds, widened so it cannot overflow.
    #[must_use]
    pub const fn extent(self) -> i64 {
        self.maximum as i64 - self.minimum as i64
    }

    /// Clamps `value` into the range.
    #[must_use]
    pub fn clamp(self, value: i32) -> i32 {
        value.clamp(self.minimum, self.maximum)
    }

    /// Returns `true` if `value` lies within the bounds.
    #[must_use]
    pub const fn contains(self, value: i32) -> bool {
        self.minimum <= value && value <= self.maximum
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::new(0, 99)
    }
}
