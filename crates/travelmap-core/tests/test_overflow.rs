mod common;

use approx::assert_relative_eq;
use common::{RecordingView, ViewCall};
use travelmap_core::config::PopupConfig;
use travelmap_core::popup::view::{InfoOverflow, MeasuredHeights, ReadMore, ScrollTarget};
use travelmap_core::popup::OverflowGate;

fn gate() -> OverflowGate {
    OverflowGate::new(&PopupConfig::default())
}

fn heights(title: f32, tombstone: f32, description: f32, divider: f32) -> MeasuredHeights {
    MeasuredHeights {
        title,
        tombstone,
        description,
        divider,
    }
}

#[test]
fn test_required_height_adds_dividers_twice_and_padding() {
    let h = heights(30.0, 20.0, 100.0, 5.0);
    // 30 + 20 + 100 + 2*5 + 10*10
    assert_relative_eq!(gate().required_height(&h), 260.0);
}

#[test]
fn test_evaluate_compares_strictly() {
    let h = heights(30.0, 20.0, 100.0, 5.0);
    assert!(!gate().evaluate(&h, 260.0));
    assert!(gate().evaluate(&h, 259.9));
    assert!(!gate().evaluate(&h, 1000.0));
}

#[test]
fn test_evaluate_is_monotonic_in_every_height() {
    let gate = gate();
    let container = 300.0;
    let base = heights(40.0, 20.0, 150.0, 4.0);
    assert!(gate.evaluate(&base, container));

    for step in [0.0_f32, 0.5, 10.0, 250.0] {
        let grown = [
            heights(base.title + step, base.tombstone, base.description, base.divider),
            heights(base.title, base.tombstone + step, base.description, base.divider),
            heights(base.title, base.tombstone, base.description + step, base.divider),
            heights(base.title, base.tombstone, base.description, base.divider + step),
        ];
        for h in grown {
            if gate.evaluate(&base, container) {
                assert!(gate.evaluate(&h, container), "{h:?}");
            }
            assert!(gate.required_height(&h) >= gate.required_height(&base));
        }
    }

    // Grow the description until it overflows, then keep growing.
    let mut h = heights(10.0, 10.0, 0.0, 1.0);
    let mut seen_overflow = false;
    for _ in 0..100 {
        let overflowing = gate.evaluate(&h, container);
        assert!(!(seen_overflow && !overflowing));
        seen_overflow |= overflowing;
        h.description += 7.0;
    }
    assert!(seen_overflow);
}

#[test]
fn test_apply_shows_and_hides_read_more() {
    let mut gate = gate();
    let mut view = RecordingView::default();

    gate.apply(true, &mut view);
    assert!(gate.is_overflowing());
    assert!(gate.read_more_available());
    assert_eq!(view.calls.last(), Some(&ViewCall::ReadMore(ReadMore::Visible)));
    assert!(!view
        .calls
        .contains(&ViewCall::InfoOverflow(InfoOverflow::Scroll)));

    gate.apply(false, &mut view);
    assert!(!gate.read_more_available());
    assert_eq!(view.calls.last(), Some(&ViewCall::ReadMore(ReadMore::Hidden)));
}

#[test]
fn test_enable_scroll_reveals_description_and_spends_read_more() {
    let mut gate = gate();
    let mut view = RecordingView::default();
    gate.apply(true, &mut view);

    gate.enable_scroll(&mut view);
    assert!(gate.is_scroll_enabled());
    assert!(!gate.read_more_available());
    assert_eq!(
        &view.calls[1..],
        &[
            ViewCall::InfoOverflow(InfoOverflow::Scroll),
            ViewCall::Scroll(ScrollTarget::Description),
            ViewCall::ReadMore(ReadMore::Hidden),
        ]
    );
}

#[test]
fn test_disable_scroll_clips_panel() {
    let mut gate = gate();
    let mut view = RecordingView::default();
    gate.enable_scroll(&mut view);
    gate.disable_scroll(&mut view);
    assert!(!gate.is_scroll_enabled());
    assert_eq!(
        view.calls.last(),
        Some(&ViewCall::InfoOverflow(InfoOverflow::Hidden))
    );
}
