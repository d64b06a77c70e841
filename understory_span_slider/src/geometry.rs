// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry collaborator: pixel ↔ position mapping and handle hit testing.
//!
//! The slider never measures anything itself. While it interprets a press or
//! a move it asks a [`SpanGeometry`] implementation where the handles are and
//! which logical position a pointer coordinate corresponds to. Nothing returned
//! here is cached across events, so the host is free to resize or restyle the
//! slider between any two calls.
//!
//! [`LinearTrack`] covers the common case of a straight track whose handles
//! share one fixed length along the axis.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_span_slider::{Handle, LinearTrack, SpanGeometry, SubControl, ValueRange};
//!
//! // 110px wide, handles 10px long: 100px of travel for 0..=100.
//! let track = LinearTrack::new(Rect::new(0.0, 0.0, 110.0, 20.0), 10.0);
//! let range = ValueRange::new(0, 100);
//!
//! assert_eq!(track.pixel_to_position(45.0, range), 40);
//! assert_eq!(track.handle_center(Handle::Lower, 40, range), Point::new(45.0, 10.0));
//! assert_eq!(
//!     track.hit_test_handle(Point::new(47.0, 5.0), Handle::Lower, 40, range),
//!     SubControl::Handle,
//! );
//! ```

use kurbo::{Point, Rect};

use crate::types::{Handle, Orientation, SubControl, ValueRange};

/// Host-supplied mapping between screen space and slider positions.
pub trait SpanGeometry {
    /// The axis pointer coordinates are picked from.
    fn orientation(&self) -> Orientation;

    /// Maps a coordinate along the axis, taken as a handle center, to a
    /// position within `range`.
    fn pixel_to_position(&self, pixel: f64, range: ValueRange) -> i32;

    /// Returns the screen-space center of `handle` drawn at `position`.
    fn handle_center(&self, handle: Handle, position: i32, range: ValueRange) -> Point;

    /// Reports what lies under `point` if `handle` is drawn at `position`.
    fn hit_test_handle(
        &self,
        point: Point,
        handle: Handle,
        position: i32,
        range: ValueRange,
    ) -> SubControl;

    /// Region the pointer may roam during a drag.
    ///
    /// Outside of it the drag snaps back to the value the handle had when it
    /// was pressed. `None` means the drag is never snapped back.
    fn drag_region(&self) -> Option<Rect> {
        None
    }
}

/// A straight track with equally sized handles.
///
/// A handle at the range minimum sits flush with the start of `bounds`, one at
/// the maximum flush with the end, and values in between are spread linearly
/// over the remaining travel. Pixel to value conversion rounds to the nearest
/// value and saturates outside the track.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearTrack {
    bounds: Rect,
    handle_length: f64,
    orientation: Orientation,
    inverted: bool,
    max_drag_distance: Option<f64>,
}

impl LinearTrack {
    /// Creates a horizontal track filling `bounds` with handles
    /// `handle_length` long along the axis.
    #[must_use]
    pub fn new(bounds: Rect, handle_length: f64) -> Self {
        Self {
            bounds,
            handle_length: handle_length.max(0.0),
            orientation: Orientation::Horizontal,
            inverted: false,
            max_drag_distance: None,
        }
    }

    /// Sets the axis of the track.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Places the maximum at the start of the axis instead of the end.
    #[must_use]
    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    /// Limits how far outside `bounds` a drag may wander before it snaps back.
    #[must_use]
    pub fn with_max_drag_distance(mut self, distance: Option<f64>) -> Self {
        self.max_drag_distance = distance;
        self
    }

    /// The rectangle the track occupies.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Length of each handle along the axis.
    #[must_use]
    pub fn handle_length(&self) -> f64 {
        self.handle_length
    }

    /// Returns `true` if the maximum sits at the start of the axis.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// Distance the handle center can travel along the axis.
    #[must_use]
    pub fn travel(&self) -> f64 {
        let length = match self.orientation {
            Orientation::Horizontal => self.bounds.width(),
            Orientation::Vertical => self.bounds.height(),
        };
        (length - self.handle_length).max(0.0)
    }

    fn track_start(&self) -> f64 {
        let start = match self.orientation {
            Orientation::Horizontal => self.bounds.x0,
            Orientation::Vertical => self.bounds.y0,
        };
        start + self.handle_length / 2.0
    }

    /// Converts an offset along the travel into a value.
    #[must_use]
    pub fn value_from_offset(&self, offset: f64, range: ValueRange) -> i32 {
        let travel = self.travel();
        let extent = range.extent();
        if travel <= 0.0 || extent == 0 {
            return if self.inverted {
                range.maximum()
            } else {
                range.minimum()
            };
        }

        let offset = if self.inverted {
            travel - offset
        } else {
            offset
        };
        if offset <= 0.0 {
            return range.minimum();
        }
        if offset >= travel {
            return range.maximum();
        }

        let scaled = offset / travel * extent as f64 + 0.5;
        #[expect(
            clippy::cast_possible_truncation,
            reason = "scaled lies in [0.5, extent + 0.5]; truncation rounds to nearest"
        )]
        let steps = (scaled as i64).min(extent);
        i32::try_from(i64::from(range.minimum()) + steps).unwrap_or(range.maximum())
    }

    /// Converts a value into an offset along the travel.
    #[must_use]
    pub fn offset_from_value(&self, value: i32, range: ValueRange) -> f64 {
        let travel = self.travel();
        let extent = range.extent();
        let along = if extent == 0 {
            0.0
        } else {
            let steps = i64::from(range.clamp(value)) - i64::from(range.minimum());
            steps as f64 / extent as f64 * travel
        };
        if self.inverted { travel - along } else { along }
    }

    /// Rectangle covered by a handle drawn at `position`.
    #[must_use]
    pub fn handle_rect(&self, position: i32, range: ValueRange) -> Rect {
        let center = self.track_start() + self.offset_from_value(position, range);
        let half = self.handle_length / 2.0;
        match self.orientation {
            Orientation::Horizontal => {
                Rect::new(center - half, self.bounds.y0, center + half, self.bounds.y1)
            }
            Orientation::Vertical => {
                Rect::new(self.bounds.x0, center - half, self.bounds.x1, center + half)
            }
        }
    }
}

impl SpanGeometry for LinearTrack {
    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn pixel_to_position(&self, pixel: f64, range: ValueRange) -> i32 {
        self.value_from_offset(pixel - self.track_start(), range)
    }

    fn handle_center(&self, _handle: Handle, position: i32, range: ValueRange) -> Point {
        self.handle_rect(position, range).center()
    }

    fn hit_test_handle(
        &self,
        point: Point,
        _handle: Handle,
        position: i32,
        range: ValueRange,
    ) -> SubControl {
        if self.handle_rect(position, range).contains(point) {
            SubControl::Handle
        } else if self.bounds.contains(point) {
            SubControl::Groove
        } else {
            SubControl::None
        }
    }

    fn drag_region(&self) -> Option<Rect> {
        self.max_drag_distance
            .map(|distance| self.bounds.inflate(distance, distance))
    }
}
