// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-based invariant tests for `SpanSlider`.
//!
//! Random sequences of programmatic calls and pointer events must keep:
//!
//! 1. `minimum <= lower <= upper <= maximum` for the committed span.
//! 2. Both positions inside the range.
//! 3. At most one notification per value per call, with `SpanChanged`
//!    carrying the span the call left behind.
//! 4. `set_span` independent of argument order and idempotent.
//! 5. A drag committed on release ending where a tracked drag ends.

use kurbo::{Point, Rect};
use proptest::prelude::*;
use understory_span_slider::{
    Control, LinearTrack, MovementPolicy, PointerButton, PointerButtons, SliderAction, SpanEvent,
    SpanSlider,
};

// ── Helpers ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
enum Op {
    SetRange(i32, i32),
    SetSpan(i32, i32),
    SetLowerPosition(i32),
    SetUpperPosition(i32),
    Action(SliderAction, Control),
    Policy(MovementPolicy),
    Tracking(bool),
    Press(f64),
    Move(f64),
    Release,
}

fn policy() -> impl Strategy<Value = MovementPolicy> {
    prop_oneof![
        Just(MovementPolicy::Free),
        Just(MovementPolicy::NoCrossing),
        Just(MovementPolicy::NoOverlapping),
    ]
}

fn action() -> impl Strategy<Value = SliderAction> {
    prop_oneof![
        Just(SliderAction::NoAction),
        Just(SliderAction::SingleStepAdd),
        Just(SliderAction::SingleStepSub),
        Just(SliderAction::PageStepAdd),
        Just(SliderAction::PageStepSub),
        Just(SliderAction::ToMinimum),
        Just(SliderAction::ToMaximum),
        Just(SliderAction::Move),
    ]
}

fn control() -> impl Strategy<Value = Control> {
    prop_oneof![Just(Control::Main), Just(Control::Alternate)]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (-50i32..150, -50i32..150).prop_map(|(a, b)| Op::SetRange(a, b)),
        (-50i32..150, -50i32..150).prop_map(|(a, b)| Op::SetSpan(a, b)),
        (-50i32..150).prop_map(Op::SetLowerPosition),
        (-50i32..150).prop_map(Op::SetUpperPosition),
        (action(), control()).prop_map(|(a, c)| Op::Action(a, c)),
        policy().prop_map(Op::Policy),
        any::<bool>().prop_map(Op::Tracking),
        (-20.0f64..130.0).prop_map(Op::Press),
        (-20.0f64..130.0).prop_map(Op::Move),
        Just(Op::Release),
    ]
}

fn track() -> LinearTrack {
    LinearTrack::new(Rect::new(0.0, 0.0, 110.0, 20.0), 10.0)
}

fn apply(slider: &mut SpanSlider, op: &Op) -> Vec<SpanEvent> {
    let geometry = track();
    match *op {
        Op::SetRange(a, b) => slider.set_range(a, b),
        Op::SetSpan(a, b) => slider.set_span(a, b),
        Op::SetLowerPosition(p) => slider.set_lower_position(p),
        Op::SetUpperPosition(p) => slider.set_upper_position(p),
        Op::Action(a, c) => slider.trigger_action(a, c),
        Op::Policy(p) => {
            slider.set_movement_policy(p);
            Vec::new()
        }
        Op::Tracking(t) => {
            slider.set_tracking(t);
            Vec::new()
        }
        Op::Press(x) => slider
            .pointer_down(
                &geometry,
                Point::new(x, 10.0),
                PointerButton::Primary,
                PointerButtons::PRIMARY,
            )
            .into_events(),
        Op::Move(x) => slider
            .pointer_move(&geometry, Point::new(x, 10.0), PointerButtons::PRIMARY)
            .into_events(),
        Op::Release => slider.pointer_up().into_events(),
    }
}

fn count(events: &[SpanEvent], pred: impl Fn(&SpanEvent) -> bool) -> usize {
    events.iter().filter(|&e| pred(e)).count()
}

// ═════════════════════════════════════════════════════════════════════════
// 1-3. Ordering, containment, and notification invariants
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn random_sequences_keep_span_ordered(ops in proptest::collection::vec(op(), 1..60)) {
        let mut slider = SpanSlider::new();
        for op in &ops {
            let events = apply(&mut slider, op);

            let (lower, upper) = slider.span();
            prop_assert!(
                slider.minimum() <= lower && lower <= upper && upper <= slider.maximum(),
                "span ({}, {}) escaped range {:?} after {:?}", lower, upper, slider.range(), op
            );
            prop_assert!(slider.range().contains(slider.lower_position()));
            prop_assert!(slider.range().contains(slider.upper_position()));

            let lower_changes = count(&events, |e| matches!(e, SpanEvent::LowerValueChanged(_)));
            let upper_changes = count(&events, |e| matches!(e, SpanEvent::UpperValueChanged(_)));
            prop_assert!(lower_changes <= 1, "lower reported twice after {:?}", op);
            prop_assert!(upper_changes <= 1, "upper reported twice after {:?}", op);

            let spans: Vec<_> = events
                .iter()
                .filter_map(|e| match *e {
                    SpanEvent::SpanChanged { lower, upper } => Some((lower, upper)),
                    _ => None,
                })
                .collect();
            prop_assert!(spans.len() <= 1, "span reported twice after {:?}", op);
            if let Some(&reported) = spans.first() {
                prop_assert_eq!(reported, slider.span());
            }
            if lower_changes + upper_changes > 0 {
                prop_assert_eq!(spans.len(), 1);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. set_span normalization
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn set_span_is_order_independent_and_idempotent(
        a in -50i32..150,
        b in -50i32..150,
    ) {
        let mut forward = SpanSlider::new();
        forward.set_range(0, 100);
        let mut backward = forward.clone();

        let first = forward.set_span(a, b);
        let mirrored = backward.set_span(b, a);
        prop_assert_eq!(forward.span(), backward.span());
        prop_assert_eq!(first, mirrored);
        prop_assert_eq!(forward.span(), (a.min(b).clamp(0, 100), a.max(b).clamp(0, 100)));

        prop_assert!(forward.set_span(a, b).is_empty());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Deferred commit matches tracked commit
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn release_commit_matches_tracking(
        lower in 0i32..=100,
        upper in 0i32..=100,
        grab_upper in any::<bool>(),
        movement in policy(),
        path in proptest::collection::vec(-20.0f64..130.0, 1..12),
    ) {
        let mut tracked = SpanSlider::new();
        tracked.set_range(0, 100);
        tracked.set_span(lower, upper);
        tracked.set_movement_policy(movement);
        let mut deferred = tracked.clone();
        deferred.set_tracking(false);

        let (low, high) = tracked.span();
        let grab = f64::from(if grab_upper { high } else { low }) + 5.0;
        for slider in [&mut tracked, &mut deferred] {
            slider.pointer_down(
                &track(),
                Point::new(grab, 10.0),
                PointerButton::Primary,
                PointerButtons::PRIMARY,
            );
            for &x in &path {
                slider.pointer_move(&track(), Point::new(x, 10.0), PointerButtons::PRIMARY);
            }
            slider.pointer_up();
        }

        prop_assert_eq!(tracked.span(), deferred.span());
        prop_assert_eq!(tracked.last_pressed(), deferred.last_pressed());
    }
}
