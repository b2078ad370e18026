//! End-to-end pipeline scenarios driven by a manual clock.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use rstest::rstest;
use spark_input::{
    Action, BufferError, Classification, EventClassifier, InputPipeline, ManualClock, Modifiers,
    PipelineConfig, RawInputEvent, RingBuffer, RING_CAPACITY,
};

fn key(code: u32, action: Action, t: f64) -> RawInputEvent {
    RawInputEvent::key(code, Modifiers::empty(), action, t)
}

fn button(id: u8, action: Action, t: f64) -> RawInputEvent {
    RawInputEvent::button(id, Modifiers::empty(), action, t)
}

fn drain(c: &mut EventClassifier) -> Vec<RawInputEvent> {
    std::iter::from_fn(|| c.drain_one()).collect()
}

// =============================================================================
// RING BUFFER
// =============================================================================

#[rstest]
#[case(RING_CAPACITY)]
#[case(RING_CAPACITY + 1)]
#[case(3 * RING_CAPACITY + 7)]
fn ring_buffer_retains_newest(#[case] inserts: usize) {
    let mut rb: RingBuffer<usize> = RingBuffer::new();
    for v in 0..inserts {
        rb.insert(v);
    }

    assert_eq!(rb.size(), RING_CAPACITY);
    assert_eq!(*rb.elem(0).unwrap(), inserts - RING_CAPACITY);
    assert_eq!(*rb.elem(RING_CAPACITY - 1).unwrap(), inserts - 1);
    assert_eq!(
        rb.elem(RING_CAPACITY),
        Err(BufferError::OutOfRange {
            index: RING_CAPACITY,
            size: RING_CAPACITY
        })
    );
}

// =============================================================================
// PAIRING
// =============================================================================

#[rstest]
#[case::key_fast(key(5, Action::Press, 0.0), key(5, Action::Release, 0.2), true)]
#[case::key_slow(key(5, Action::Press, 0.0), key(5, Action::Release, 0.5), false)]
#[case::key_other(key(5, Action::Press, 0.0), key(6, Action::Release, 0.1), false)]
#[case::click_fast(button(0, Action::Press, 0.0), button(0, Action::Release, 0.3), true)]
#[case::click_slow(button(0, Action::Press, 0.0), button(0, Action::Release, 0.31), false)]
#[case::click_other(button(0, Action::Press, 0.0), button(1, Action::Release, 0.1), false)]
#[case::press_press(key(5, Action::Press, 0.0), key(5, Action::Press, 0.1), false)]
#[case::button_move(button(0, Action::Press, 0.0), RawInputEvent::move_to(1.0, 1.0, 0.1), false)]
#[case::move_move(RawInputEvent::move_to(0.0, 0.0, 0.0), RawInputEvent::move_to(1.0, 1.0, 0.1), false)]
fn pairing_rule(#[case] first: RawInputEvent, #[case] second: RawInputEvent, #[case] merges: bool) {
    let mut c = EventClassifier::default();
    c.ingest(first);
    c.ingest(second);

    let outcome = c.classify(second.timestamp()).unwrap();
    let out = drain(&mut c);

    if merges {
        assert_eq!(outcome, Classification::Merged);
        assert_eq!(out, vec![second.with_action(Action::Click)]);
    } else {
        assert_eq!(outcome, Classification::Split);
        assert_eq!(out, vec![first, second]);
    }
}

#[test]
fn custom_windows_apply() {
    let config = PipelineConfig::default()
        .with_key_window(Duration::from_millis(100))
        .with_click_window(Duration::from_millis(500));
    let mut c = EventClassifier::new(config);

    c.ingest(key(1, Action::Press, 0.0));
    c.ingest(key(1, Action::Release, 0.2));
    assert_eq!(c.classify(0.2), Ok(Classification::Split));

    c.ingest(button(0, Action::Press, 1.0));
    c.ingest(button(0, Action::Release, 1.4));
    assert_eq!(c.classify(1.4), Ok(Classification::Merged));
}

// =============================================================================
// PIPELINE
// =============================================================================

#[test]
fn typing_session_logs_in_order() {
    let clock = ManualClock::new(0.0);
    let mut pipeline = InputPipeline::with_clock(PipelineConfig::default(), clock.clone());

    let seen = Rc::new(RefCell::new(Vec::new()));
    let seen_clone = seen.clone();
    let _cleanup = pipeline.event_log().on(move |event| {
        seen_clone.borrow_mut().push(*event);
    });

    // 'a' tapped quickly, then 'b' held too long
    pipeline.record_key('a' as u32, Modifiers::empty(), Action::Press);
    clock.set(0.1);
    pipeline.record_key('a' as u32, Modifiers::empty(), Action::Release);
    assert!(pipeline.tick().unwrap().is_some());

    clock.set(1.0);
    pipeline.record_key('b' as u32, Modifiers::SHIFT, Action::Press);
    clock.set(1.2);
    assert_eq!(pipeline.tick(), Ok(None)); // waiting for a partner
    clock.set(1.6);
    pipeline.record_key('b' as u32, Modifiers::SHIFT, Action::Release);
    pipeline.tick().unwrap();
    pipeline.tick().unwrap();

    let seen = seen.borrow();
    assert_eq!(seen.len(), 3);
    assert_eq!(seen[0], key('a' as u32, Action::Click, 0.1));
    assert_eq!(seen[1].action(), Some(Action::Press));
    assert_eq!(seen[2].action(), Some(Action::Release));

    let lines: Vec<_> = pipeline.event_log().lines().collect();
    assert_eq!(lines[0], "0.100000 : KEY(61,0) KeyPress");
    assert_eq!(lines[1], "1.000000 : KEY(62,1) Press");
    assert_eq!(lines[2], "1.600000 : KEY(62,1) Release");
}

#[test]
fn lone_click_press_expires() {
    let clock = ManualClock::new(0.0);
    let mut pipeline = InputPipeline::with_clock(PipelineConfig::default(), clock.clone());

    pipeline.record_button(0, Modifiers::empty(), Action::Press);

    clock.set(0.29);
    assert_eq!(pipeline.tick(), Ok(None));
    assert_eq!(pipeline.classifier().pending_len(), 1);

    clock.set(0.31);
    assert_eq!(
        pipeline.tick(),
        Ok(Some(button(0, Action::Press, 0.0)))
    );
    assert_eq!(pipeline.classifier().pending_len(), 0);
}

#[test]
fn burst_overload_drops_oldest() {
    let clock = ManualClock::new(0.0);
    let mut pipeline = InputPipeline::with_clock(PipelineConfig::default(), clock.clone());

    for i in 0..(RING_CAPACITY + 10) {
        pipeline.record_move(i as f64, 0.0);
    }
    assert_eq!(pipeline.classifier().pending_len(), RING_CAPACITY);

    let first = pipeline.tick().unwrap();
    assert_eq!(first, Some(RawInputEvent::move_to(10.0, 0.0, 0.0)));
}
