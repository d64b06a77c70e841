// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The span slider state machine.
//!
//! ## Values and positions
//!
//! Each handle has a committed **value** and a transient **position**. Outside
//! of a drag the two are equal. While a handle is dragged its position follows
//! the pointer; with tracking enabled every position change is committed to
//! the value straight away, without tracking the value is only committed on
//! release.
//!
//! ## Handle identity
//!
//! Under [`MovementPolicy::Free`] a handle dragged past the other one takes
//! over the other's role: the grabbed handle keeps following the pointer and
//! becomes the opposite bound, while the stationary handle becomes the bound
//! the grabbed one used to be. The main control and the last pressed handle
//! follow the swap.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_span_slider::{
//!     LinearTrack, PointerButton, PointerButtons, SpanEvent, SpanSlider,
//! };
//!
//! let track = LinearTrack::new(Rect::new(0.0, 0.0, 110.0, 20.0), 10.0);
//! let mut slider = SpanSlider::new();
//! slider.set_range(0, 100);
//! slider.set_span(30, 70);
//!
//! // Grab the lower handle (centered at x = 35) and drag it to 40.
//! let pressed = slider.pointer_down(
//!     &track,
//!     Point::new(35.0, 10.0),
//!     PointerButton::Primary,
//!     PointerButtons::PRIMARY,
//! );
//! assert!(pressed.is_handled());
//! let moved = slider.pointer_move(&track, Point::new(45.0, 10.0), PointerButtons::PRIMARY);
//! assert!(moved.events().contains(&SpanEvent::LowerValueChanged(40)));
//! slider.pointer_up();
//!
//! assert_eq!(slider.span(), (40, 70));
//! ```

use alloc::vec::Vec;
use core::mem;

use kurbo::Point;

use crate::config::{ConfigError, SpanSliderConfig};
use crate::event::SpanEvent;
use crate::geometry::SpanGeometry;
use crate::input::{PointerButton, PointerButtons, PointerOutcome};
use crate::types::{Control, Handle, MovementPolicy, SliderAction, SubControl, ValueRange};

/// Where the slider is in a press/drag/release cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InteractionPhase {
    /// No handle is held.
    Idle,
    /// A handle is held but has not moved yet.
    Pressed(Handle),
    /// A held handle has received at least one move.
    Dragging(Handle),
}

/// A headless two-handle range slider.
///
/// Each handle has a committed value and a transient position that only
/// differ while the handle is dragged without tracking. Under
/// [`MovementPolicy::Free`] a handle dragged past the other one takes over the
/// opposite role; the main control and the last pressed handle follow it.
#[derive(Clone, Debug)]
pub struct SpanSlider {
    range: ValueRange,
    lower: i32,
    upper: i32,
    lower_pos: i32,
    upper_pos: i32,
    single_step: i32,
    page_step: i32,
    tracking: bool,
    movement: MovementPolicy,
    main_control: Handle,
    last_pressed: Option<Handle>,
    lower_pressed: SubControl,
    upper_pressed: SubControl,
    slider_down: bool,
    first_movement: bool,
    // Set while `trigger` runs so position updates do not cascade again.
    block_tracking: bool,
    drag_offset: f64,
    drag_anchor_value: i32,
    repaint: bool,
    events: Vec<SpanEvent>,
}

impl Default for SpanSlider {
    fn default() -> Self {
        Self::new()
    }
}

impl SpanSlider {
    /// Creates a slider over `0..=99` with an empty span at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            range: ValueRange::default(),
            lower: 0,
            upper: 0,
            lower_pos: 0,
            upper_pos: 0,
            single_step: 1,
            page_step: 10,
            tracking: true,
            movement: MovementPolicy::Free,
            main_control: Handle::Lower,
            last_pressed: None,
            lower_pressed: SubControl::None,
            upper_pressed: SubControl::None,
            slider_down: false,
            first_movement: false,
            block_tracking: false,
            drag_offset: 0.0,
            drag_anchor_value: 0,
            repaint: false,
            events: Vec::new(),
        }
    }

    /// Builds a slider from a stored configuration.
    ///
    /// The span is clamped into the configured range. No events are produced.
    pub fn from_config(config: &SpanSliderConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut slider = Self::new();
        slider.range = ValueRange::new(config.minimum, config.maximum);
        slider.single_step = config.single_step;
        slider.page_step = config.page_step;
        slider.tracking = config.tracking;
        slider.movement = config.movement;
        slider.main_control = config.main_control;
        slider.apply_span(config.lower, config.upper);
        slider.events.clear();
        slider.repaint = false;
        Ok(slider)
    }

    /// Captures the current configuration and committed span.
    #[must_use]
    pub fn config(&self) -> SpanSliderConfig {
        SpanSliderConfig {
            minimum: self.range.minimum(),
            maximum: self.range.maximum(),
            lower: self.lower_value(),
            upper: self.upper_value(),
            single_step: self.single_step,
            page_step: self.page_step,
            tracking: self.tracking,
            movement: self.movement,
            main_control: self.main_control,
        }
    }

    // --- Range and span -------------------------------------------------

    /// The bounds values are clamped to.
    #[must_use]
    pub fn range(&self) -> ValueRange {
        self.range
    }

    /// Lowest admissible value.
    #[must_use]
    pub fn minimum(&self) -> i32 {
        self.range.minimum()
    }

    /// Highest admissible value.
    #[must_use]
    pub fn maximum(&self) -> i32 {
        self.range.maximum()
    }

    /// Replaces the bounds and re-clamps the span into them.
    ///
    /// An inverted pair is normalized by raising `maximum` to `minimum`.
    pub fn set_range(&mut self, minimum: i32, maximum: i32) -> Vec<SpanEvent> {
        let range = ValueRange::new(minimum, maximum);
        if range != self.range {
            self.range = range;
            self.events.push(SpanEvent::RangeChanged {
                minimum: range.minimum(),
                maximum: range.maximum(),
            });
            // Committed values already inside the new bounds are left alone,
            // so a pending swap during a deferred drag survives.
            let (low, high) = self.span();
            if !range.contains(low) || !range.contains(high) {
                self.apply_span(low, high);
            }
            // Uncommitted positions must not be left outside the new bounds.
            self.lower_pos = range.clamp(self.lower_pos);
            self.upper_pos = range.clamp(self.upper_pos);
            self.repaint = true;
        }
        self.take_events()
    }

    /// Committed lower value.
    #[must_use]
    pub fn lower_value(&self) -> i32 {
        self.lower.min(self.upper)
    }

    /// Committed upper value.
    #[must_use]
    pub fn upper_value(&self) -> i32 {
        self.lower.max(self.upper)
    }

    /// Committed `(lower, upper)` pair.
    #[must_use]
    pub fn span(&self) -> (i32, i32) {
        (self.lower_value(), self.upper_value())
    }

    /// Commits a new span.
    ///
    /// The arguments may come in either order; both are clamped into the
    /// range. Nothing is reported when the committed span does not change.
    pub fn set_span(&mut self, lower: i32, upper: i32) -> Vec<SpanEvent> {
        self.apply_span(lower, upper);
        self.take_events()
    }

    /// Commits a new lower value, keeping the current upper one.
    pub fn set_lower_value(&mut self, lower: i32) -> Vec<SpanEvent> {
        self.apply_span(lower, self.upper_value());
        self.take_events()
    }

    /// Commits a new upper value, keeping the current lower one.
    pub fn set_upper_value(&mut self, upper: i32) -> Vec<SpanEvent> {
        self.apply_span(self.lower_value(), upper);
        self.take_events()
    }

    // --- Positions ------------------------------------------------------

    /// Transient position of the lower handle.
    #[must_use]
    pub fn lower_position(&self) -> i32 {
        self.lower_pos
    }

    /// Transient position of the upper handle.
    #[must_use]
    pub fn upper_position(&self) -> i32 {
        self.upper_pos
    }

    /// Transient position of `handle`.
    #[must_use]
    pub fn position(&self, handle: Handle) -> i32 {
        match handle {
            Handle::Lower => self.lower_pos,
            Handle::Upper => self.upper_pos,
        }
    }

    /// Moves the lower handle without necessarily committing its value.
    ///
    /// With tracking enabled the new position is resolved against the
    /// movement policy and committed immediately.
    pub fn set_lower_position(&mut self, position: i32) -> Vec<SpanEvent> {
        self.set_position(Handle::Lower, position);
        self.take_events()
    }

    /// Moves the upper handle without necessarily committing its value.
    ///
    /// With tracking enabled the new position is resolved against the
    /// movement policy and committed immediately.
    pub fn set_upper_position(&mut self, position: i32) -> Vec<SpanEvent> {
        self.set_position(Handle::Upper, position);
        self.take_events()
    }

    // --- Behavior -------------------------------------------------------

    /// Current movement policy.
    #[must_use]
    pub fn movement_policy(&self) -> MovementPolicy {
        self.movement
    }

    /// Changes how the handles constrain each other from the next update on.
    pub fn set_movement_policy(&mut self, movement: MovementPolicy) {
        self.movement = movement;
    }

    /// Handle targeted by [`Control::Main`] actions.
    #[must_use]
    pub fn main_control(&self) -> Handle {
        self.main_control
    }

    /// Selects the handle targeted by [`Control::Main`] actions.
    pub fn set_main_control(&mut self, handle: Handle) {
        self.main_control = handle;
    }

    /// Returns `true` if drags commit values continuously.
    #[must_use]
    pub fn has_tracking(&self) -> bool {
        self.tracking
    }

    /// Enables or disables continuous commits while dragging.
    pub fn set_tracking(&mut self, tracking: bool) {
        self.tracking = tracking;
    }

    /// Amount moved by single-step actions.
    #[must_use]
    pub fn single_step(&self) -> i32 {
        self.single_step
    }

    /// Sets the amount moved by single-step actions; negative steps are ignored.
    pub fn set_single_step(&mut self, step: i32) {
        if step >= 0 {
            self.single_step = step;
        }
    }

    /// Amount moved by page-step actions.
    #[must_use]
    pub fn page_step(&self) -> i32 {
        self.page_step
    }

    /// Sets the amount moved by page-step actions; negative steps are ignored.
    pub fn set_page_step(&mut self, step: i32) {
        if step >= 0 {
            self.page_step = step;
        }
    }

    // --- Interaction state ----------------------------------------------

    /// The handle most recently grabbed, if any.
    #[must_use]
    pub fn last_pressed(&self) -> Option<Handle> {
        self.last_pressed
    }

    /// Returns `true` while a handle is held.
    #[must_use]
    pub fn is_slider_down(&self) -> bool {
        self.slider_down
    }

    /// What the last press found under the pointer for `handle`.
    #[must_use]
    pub fn pressed_sub_control(&self, handle: Handle) -> SubControl {
        match handle {
            Handle::Lower => self.lower_pressed,
            Handle::Upper => self.upper_pressed,
        }
    }

    /// Where the slider is in a press/drag/release cycle.
    #[must_use]
    pub fn phase(&self) -> InteractionPhase {
        match self.pressed_handle() {
            None => InteractionPhase::Idle,
            Some(handle) if self.first_movement => InteractionPhase::Pressed(handle),
            Some(handle) => InteractionPhase::Dragging(handle),
        }
    }

    /// Returns `true` if something visible changed since the last
    /// [`take_repaint_request`](Self::take_repaint_request).
    #[must_use]
    pub fn needs_repaint(&self) -> bool {
        self.repaint
    }

    /// Returns and clears the pending repaint request.
    pub fn take_repaint_request(&mut self) -> bool {
        mem::take(&mut self.repaint)
    }

    // --- Actions --------------------------------------------------------

    /// Applies `action` to the main or alternate handle and commits the result.
    pub fn trigger_action(&mut self, action: SliderAction, control: Control) -> Vec<SpanEvent> {
        self.trigger(action, control);
        self.take_events()
    }

    /// Exchanges the roles of the two handles.
    ///
    /// Swaps the raw values, the pressed state, the last pressed handle, and
    /// the main control. Positions are left alone; the caller assigns them.
    fn swap_controls(&mut self) {
        mem::swap(&mut self.lower, &mut self.upper);
        mem::swap(&mut self.lower_pressed, &mut self.upper_pressed);
        self.last_pressed = self.last_pressed.map(Handle::opposite);
        self.main_control = self.main_control.opposite();
        #[cfg(feature = "tracing")]
        tracing::trace!(
            main_control = ?self.main_control,
            last_pressed = ?self.last_pressed,
            "span slider swapped controls"
        );
    }

    fn trigger(&mut self, action: SliderAction, control: Control) {
        self.block_tracking = true;

        let target = match control {
            Control::Main => self.main_control,
            Control::Alternate => self.main_control.opposite(),
        };
        let own = self.raw_value(target);
        let candidate = match action {
            SliderAction::NoAction => None,
            SliderAction::SingleStepAdd => Some(own.saturating_add(self.single_step)),
            SliderAction::SingleStepSub => Some(own.saturating_sub(self.single_step)),
            SliderAction::PageStepAdd => Some(own.saturating_add(self.page_step)),
            SliderAction::PageStepSub => Some(own.saturating_sub(self.page_step)),
            SliderAction::ToMinimum => Some(self.range.minimum()),
            SliderAction::ToMaximum => Some(self.range.maximum()),
            SliderAction::Move => Some(self.position(target)),
        };
        if let Some(candidate) = candidate {
            self.move_handle(target, self.range.clamp(candidate));
        }

        self.block_tracking = false;
        self.apply_span(self.lower_pos, self.upper_pos);
    }

    /// Resolves `candidate` for `handle` against the movement policy and
    /// stores it as a position, swapping roles when a free handle crosses.
    fn move_handle(&mut self, handle: Handle, candidate: i32) {
        match handle {
            Handle::Lower => {
                let value = match self.movement {
                    MovementPolicy::Free => candidate,
                    MovementPolicy::NoCrossing => candidate.min(self.upper),
                    MovementPolicy::NoOverlapping => candidate.min(self.upper.saturating_sub(1)),
                };
                if self.movement == MovementPolicy::Free && value > self.upper {
                    self.swap_controls();
                    self.sync_position(Handle::Lower);
                    self.set_position(Handle::Upper, value);
                } else {
                    self.set_position(Handle::Lower, value);
                }
            }
            Handle::Upper => {
                let value = match self.movement {
                    MovementPolicy::Free => candidate,
                    MovementPolicy::NoCrossing => candidate.max(self.lower),
                    MovementPolicy::NoOverlapping => candidate.max(self.lower.saturating_add(1)),
                };
                if self.movement == MovementPolicy::Free && value < self.lower {
                    self.swap_controls();
                    self.sync_position(Handle::Upper);
                    self.set_position(Handle::Lower, value);
                } else {
                    self.set_position(Handle::Upper, value);
                }
            }
        }
    }

    /// Commits on release if the pressed handle was left uncommitted.
    fn move_pressed_handle(&mut self) {
        let Some(handle) = self.last_pressed else {
            return;
        };
        if self.position(handle) != self.raw_value(handle) {
            self.trigger(SliderAction::Move, self.control_for(handle));
        }
    }

    // --- Pointer input --------------------------------------------------

    /// Handles a pointer press at `point`.
    ///
    /// The upper handle is tested first, so it wins when both handles sit on
    /// top of each other. Ignored when the range is degenerate or when any
    /// button besides `button` is held.
    pub fn pointer_down<G: SpanGeometry + ?Sized>(
        &mut self,
        geometry: &G,
        point: Point,
        button: PointerButton,
        buttons: PointerButtons,
    ) -> PointerOutcome {
        if self.range.is_degenerate() || !buttons.is_only(button) {
            return PointerOutcome::Ignored;
        }

        self.upper_pressed = self.press_handle(geometry, point, Handle::Upper);
        if self.upper_pressed != SubControl::Handle {
            self.lower_pressed = self.press_handle(geometry, point, Handle::Lower);
        }
        self.first_movement = true;
        PointerOutcome::Handled(self.take_events())
    }

    /// Handles pointer motion while a handle is held.
    ///
    /// Ignored when no handle is held or when several buttons are held.
    pub fn pointer_move<G: SpanGeometry + ?Sized>(
        &mut self,
        geometry: &G,
        point: Point,
        buttons: PointerButtons,
    ) -> PointerOutcome {
        if self.pressed_handle().is_none() || buttons.is_chorded() {
            return PointerOutcome::Ignored;
        }

        let axis = geometry.orientation();
        let mut position =
            geometry.pixel_to_position(axis.pick(point) - self.drag_offset, self.range);
        if geometry
            .drag_region()
            .is_some_and(|region| !region.contains(point))
        {
            position = self.drag_anchor_value;
        }

        // On a zero-width span the drag direction decides which handle moves.
        if self.first_movement {
            if self.lower == self.upper && position < self.lower_value() {
                self.swap_controls();
            }
            self.first_movement = false;
        }

        if let Some(handle) = self.pressed_handle() {
            self.move_handle(handle, position);
        }
        PointerOutcome::Handled(self.take_events())
    }

    /// Handles the pointer being released.
    ///
    /// A position that was never committed, for instance with tracking
    /// disabled, is committed here.
    pub fn pointer_up(&mut self) -> PointerOutcome {
        let engaged = self.slider_down
            || self.lower_pressed != SubControl::None
            || self.upper_pressed != SubControl::None;
        if !engaged {
            return PointerOutcome::Ignored;
        }

        if mem::take(&mut self.slider_down) {
            if let Some(handle) = self.last_pressed {
                self.events.push(SpanEvent::HandleReleased(handle));
                #[cfg(feature = "tracing")]
                tracing::debug!(?handle, "span slider handle released");
            }
            self.move_pressed_handle();
        }
        self.lower_pressed = SubControl::None;
        self.upper_pressed = SubControl::None;
        self.first_movement = false;
        self.repaint = true;
        PointerOutcome::Handled(self.take_events())
    }

    fn press_handle<G: SpanGeometry + ?Sized>(
        &mut self,
        geometry: &G,
        point: Point,
        handle: Handle,
    ) -> SubControl {
        let previous = self.pressed_sub_control(handle);
        let position = self.position(handle);
        let hit = geometry.hit_test_handle(point, handle, position, self.range);
        if hit == SubControl::Handle {
            let axis = geometry.orientation();
            let center = geometry.handle_center(handle, position, self.range);
            self.drag_offset = axis.pick(point) - axis.pick(center);
            self.drag_anchor_value = self.raw_value(handle);
            self.last_pressed = Some(handle);
            self.slider_down = true;
            self.events.push(SpanEvent::HandlePressed(handle));
            #[cfg(feature = "tracing")]
            tracing::debug!(
                ?handle,
                position,
                offset = self.drag_offset,
                "span slider handle pressed"
            );
        }
        if hit != previous {
            self.repaint = true;
        }
        hit
    }

    // --- Internals ------------------------------------------------------

    fn pressed_handle(&self) -> Option<Handle> {
        if self.lower_pressed == SubControl::Handle {
            Some(Handle::Lower)
        } else if self.upper_pressed == SubControl::Handle {
            Some(Handle::Upper)
        } else {
            None
        }
    }

    fn raw_value(&self, handle: Handle) -> i32 {
        match handle {
            Handle::Lower => self.lower,
            Handle::Upper => self.upper,
        }
    }

    fn control_for(&self, handle: Handle) -> Control {
        if handle == self.main_control {
            Control::Main
        } else {
            Control::Alternate
        }
    }

    fn apply_span(&mut self, a: i32, b: i32) {
        let low = self.range.clamp(a.min(b));
        let high = self.range.clamp(a.max(b));
        if low == self.lower && high == self.upper {
            return;
        }

        // Notifications compare against the ordered values, which a pending
        // swap of the raw fields does not change.
        let (old_low, old_high) = self.span();
        if low != self.lower {
            self.lower = low;
            self.lower_pos = low;
        }
        if high != self.upper {
            self.upper = high;
            self.upper_pos = high;
        }
        if low != old_low {
            self.events.push(SpanEvent::LowerValueChanged(low));
        }
        if high != old_high {
            self.events.push(SpanEvent::UpperValueChanged(high));
        }
        if low != old_low || high != old_high {
            self.events.push(SpanEvent::SpanChanged {
                lower: low,
                upper: high,
            });
        }
        self.repaint = true;
    }

    fn set_position(&mut self, handle: Handle, position: i32) {
        let position = self.range.clamp(position);
        let slot = match handle {
            Handle::Lower => &mut self.lower_pos,
            Handle::Upper => &mut self.upper_pos,
        };
        if *slot == position {
            return;
        }
        *slot = position;

        if !self.tracking {
            self.repaint = true;
        }
        if self.slider_down {
            self.events.push(position_event(handle, position));
        }
        if self.tracking && !self.block_tracking {
            self.trigger(SliderAction::Move, self.control_for(handle));
        }
    }

    /// Aligns a handle's position with its raw value after a swap.
    fn sync_position(&mut self, handle: Handle) {
        let value = self.raw_value(handle);
        let slot = match handle {
            Handle::Lower => &mut self.lower_pos,
            Handle::Upper => &mut self.upper_pos,
        };
        if *slot == value {
            return;
        }
        *slot = value;
        self.repaint = true;
        if self.slider_down {
            self.events.push(position_event(handle, value));
        }
    }

    fn take_events(&mut self) -> Vec<SpanEvent> {
        mem::take(&mut self.events)
    }
}

fn position_event(handle: Handle, position: i32) -> SpanEvent {
    match handle {
        Handle::Lower => SpanEvent::LowerPositionChanged(position),
        Handle::Upper => SpanEvent::UpperPositionChanged(position),
    }
}
