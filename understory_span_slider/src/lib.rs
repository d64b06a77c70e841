// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_span_slider --heading-base-level=0

//! Understory Span Slider: a headless two-handle range slider.
//!
//! This crate implements the state machine behind a "span" slider: a single
//! track with a lower and an upper handle that select a sub-range of a fixed
//! integer range. It covers:
//!
//! - The **value model**: two committed values, kept ordered and clamped to the
//!   slider's range no matter how they are set.
//! - The **position model**: transient handle positions that follow the
//!   pointer during a drag and are committed continuously (tracking) or on
//!   release.
//! - **Movement policies**: whether handles may pass through each other
//!   ([`MovementPolicy::Free`]), only touch ([`MovementPolicy::NoCrossing`]), or
//!   must keep a gap ([`MovementPolicy::NoOverlapping`]).
//! - The **pointer state machine**: press attribution, first-movement
//!   disambiguation on a zero-width span, drag snapping, and release commits.
//!
//! The crate does not draw anything and does not know how the slider is laid
//! out. Pointer handling asks a [`SpanGeometry`] implementation to hit-test
//! handles and to map pointer coordinates to positions; [`LinearTrack`] is
//! provided for straight tracks. Every mutating call returns the
//! [`SpanEvent`]s it produced, in order, so hosts can forward them to their
//! model and schedule a repaint.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_span_slider::{MovementPolicy, SpanEvent, SpanSlider};
//!
//! let mut slider = SpanSlider::new();
//! slider.set_range(0, 100);
//!
//! // Order and bounds are normalized.
//! let events = slider.set_span(150, 20);
//! assert_eq!(slider.span(), (20, 100));
//! assert_eq!(events.last(), Some(&SpanEvent::SpanChanged { lower: 20, upper: 100 }));
//!
//! // Handles may touch but not cross.
//! slider.set_movement_policy(MovementPolicy::NoCrossing);
//! slider.set_lower_position(120);
//! assert_eq!(slider.span(), (100, 100));
//! ```
//!
//! ## Pointer input
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_span_slider::{
//!     Handle, LinearTrack, PointerButton, PointerButtons, SpanSlider,
//! };
//!
//! // 100px of travel for the range 0..=100.
//! let track = LinearTrack::new(Rect::new(0.0, 0.0, 110.0, 20.0), 10.0);
//! let mut slider = SpanSlider::new();
//! slider.set_range(0, 100);
//! slider.set_span(50, 50);
//!
//! // Both handles sit at 50; dragging left moves the lower one.
//! slider.pointer_down(&track, Point::new(55.0, 10.0), PointerButton::Primary, PointerButtons::PRIMARY);
//! slider.pointer_move(&track, Point::new(45.0, 10.0), PointerButtons::PRIMARY);
//! slider.pointer_up();
//!
//! assert_eq!(slider.span(), (40, 50));
//! assert_eq!(slider.last_pressed(), Some(Handle::Lower));
//! ```
//!
//! ## Features
//!
//! - `std` (default): build Kurbo with the standard library.
//! - `libm`: build Kurbo with `libm` for `no_std` targets.
//! - `serde`: derive `Serialize`/`Deserialize` for [`SpanSliderConfig`] and
//!   the public enums it contains.
//! - `tracing`: emit `tracing` records for presses, releases, and handle swaps.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod event;
mod geometry;
mod input;
mod slider;
mod types;

pub use config::{ConfigError, SpanSliderConfig};
pub use event::SpanEvent;
pub use geometry::{LinearTrack, SpanGeometry};
pub use input::{PointerButton, PointerButtons, PointerOutcome};
pub use slider::{InteractionPhase, SpanSlider};
pub use types::{Control, Handle, MovementPolicy, Orientation, SliderAction, SubControl, ValueRange};
