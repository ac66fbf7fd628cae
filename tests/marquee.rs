//! Behavior of the marquee engine across frames.

use pretty_assertions::assert_eq;
use rstest::rstest;
use stats_marquee::marquee::{
    recycler, step, CardId, Gap, Marquee, MarqueeConfig, MarqueeState, Measure, Playback, Track,
    MAX_RECYCLES_PER_FRAME,
};
use stats_marquee::state::{Card, Icon};

/// Layout with a fixed gap and per-label widths.
struct FixedLayout {
    gap: Option<String>,
    widths: Vec<(&'static str, f64)>,
}

impl FixedLayout {
    fn new(gap: &str, widths: &[(&'static str, f64)]) -> Self {
        Self {
            gap: Some(gap.to_string()),
            widths: widths.to_vec(),
        }
    }
}

impl Measure for FixedLayout {
    fn computed_gap(&self) -> Option<String> {
        self.gap.clone()
    }

    fn width_of(&self, card: &Card) -> Option<f64> {
        self.widths
            .iter()
            .find(|(label, _)| *label == card.label)
            .map(|(_, width)| *width)
    }
}

fn cards(labels: &[&str]) -> Vec<Card> {
    labels
        .iter()
        .map(|label| Card::new(*label, "1", Icon::Reviews))
        .collect()
}

fn order(state: &MarqueeState) -> Vec<usize> {
    state.track.iter().map(|id| id.0).collect()
}

#[test]
fn slow_frame_recycles_tail_card() {
    // A, B, C at 100 columns with a 20 column gap; 3s at 40 col/s covers 120
    let widths = [100.0, 100.0, 100.0];
    let state = MarqueeState::new(Track::sequential(3), Gap::new(20.0));

    let (state, report) = step(state, 3.0, false, &MarqueeConfig::default(), |id| widths[id.0]);

    assert_eq!(report.recycled, 1);
    assert_eq!(state.offset, 0.0);
    assert_eq!(order(&state), vec![2, 0, 1]);
}

#[test]
fn recycling_never_moves_other_cards() {
    let widths = [30.0, 55.0, 12.0, 71.0, 40.0];
    let width_of = |id: CardId| widths[id.0];
    let mut state = MarqueeState::new(Track::sequential(5), Gap::new(3.0));
    state.offset = 80.0;

    let before = state.positions(width_of);
    let recycled = state.track.last().expect("non-empty");
    let report = recycler::recycle(&mut state.track, state.offset, 3.0, 1, width_of);
    state.offset = report.offset;
    let after = state.positions(width_of);

    assert_eq!(report.offset, 80.0 - (40.0 + 3.0));
    for (id, x) in &before {
        if *id == recycled {
            continue;
        }
        let moved = after.iter().find(|(other, _)| other == id).map(|(_, x)| *x);
        assert_eq!(moved, Some(*x), "card {} jumped", id.0);
    }
    // The recycled card now sits at the head, just left of the old head
    assert_eq!(after[0], (recycled, report.offset));
}

#[rstest]
#[case(0.016)]
#[case(0.5)]
#[case(7.0)]
fn offset_settles_at_or_below_zero(#[case] dt: f64) {
    let widths = [20.0, 35.0, 50.0, 15.0];
    let mut state = MarqueeState::new(Track::sequential(4), Gap::new(2.0));

    for _ in 0..50 {
        let (next, report) = step(state, dt, false, &MarqueeConfig::default(), |id| widths[id.0]);
        assert!(next.offset <= 0.0 || report.hit_bound);
        state = next;
    }
}

#[test]
fn recycling_preserves_relative_order() {
    let mut track = Track::sequential(6);
    for _ in 0..4 {
        let (state, _) = step(
            MarqueeState { offset: 1.0, gap: Gap::new(0.0), track },
            0.0,
            false,
            &MarqueeConfig::default(),
            |_| 10.0,
        );
        track = state.track;
    }

    // Four tail-to-head moves are a rotation by four
    let ids: Vec<usize> = track.iter().map(|id| id.0).collect();
    assert_eq!(ids, vec![2, 3, 4, 5, 0, 1]);
}

#[test]
fn degenerate_cards_hit_the_bound_every_frame() {
    let layout = FixedLayout::new("0", &[("A", 0.0), ("B", 0.0)]);
    let mut marquee = Marquee::new(MarqueeConfig::default());
    marquee.mount(&cards(&["A", "B"]), &layout);

    marquee.frame(0.0, &layout);
    for ts in [16.0, 32.0, 48.0] {
        let report = marquee.frame(ts, &layout).expect("mounted");
        assert!(report.hit_bound);
        assert_eq!(report.recycled, MAX_RECYCLES_PER_FRAME);
    }
    assert!(marquee.state().map(|s| s.offset > 0.0).unwrap_or(false));
}

#[test]
fn unmeasurable_widths_degrade_to_gap_only() {
    // No widths at all: each recycle shifts by the gap alone
    let layout = FixedLayout::new("5px", &[]);
    let mut marquee = Marquee::new(MarqueeConfig::default());
    marquee.mount(&cards(&["A", "B", "C"]), &layout);

    marquee.frame(0.0, &layout);
    let report = marquee.frame(500.0, &layout).expect("mounted");

    assert_eq!(report.recycled, 4);
    assert_eq!(report.offset, 0.0);
}

#[test]
fn hover_pause_is_idempotent_and_freezes_everything() {
    let layout = FixedLayout::new("2", &[("A", 10.0), ("B", 14.0)]);
    let mut marquee = Marquee::new(MarqueeConfig::default());
    marquee.mount(&cards(&["A", "B"]), &layout);
    marquee.frame(0.0, &layout);
    marquee.frame(300.0, &layout);

    marquee.pointer_enter();
    marquee.pointer_enter();
    let frozen = marquee.state().cloned();
    for ts in (400..5_000).step_by(16) {
        marquee.frame(f64::from(ts), &layout);
    }
    assert_eq!(marquee.playback(), Playback::Paused);
    assert_eq!(marquee.state().cloned(), frozen);

    marquee.pointer_leave();
    marquee.pointer_leave();
    assert_eq!(marquee.playback(), Playback::Running);
}

#[test]
fn resize_remeasures_gap_only() {
    let narrow = FixedLayout::new("2", &[("A", 10.0), ("B", 14.0)]);
    let wide = FixedLayout::new("6px", &[("A", 10.0), ("B", 14.0)]);
    let mut marquee = Marquee::new(MarqueeConfig::default());
    marquee.mount(&cards(&["A", "B"]), &narrow);
    marquee.frame(0.0, &narrow);
    marquee.frame(450.0, &narrow);
    let before = marquee.state().cloned().expect("mounted");

    marquee.resize(&wide);

    let after = marquee.state().cloned().expect("mounted");
    assert_eq!(after.gap, Gap::new(6.0));
    assert_eq!(after.offset, before.offset);
    assert_eq!(after.track, before.track);
}

#[test]
fn motion_is_frame_rate_independent() {
    let layout = FixedLayout::new("0", &[("A", 1_000.0)]);
    let run = |step_ms: usize| {
        let mut marquee = Marquee::new(MarqueeConfig { speed: 40.0, ..MarqueeConfig::default() });
        marquee.mount(&cards(&["A"]), &layout);
        for ts in (0..=2_000).step_by(step_ms) {
            marquee.frame(ts as f64, &layout);
        }
        marquee.state().map(|s| s.offset).expect("mounted")
    };

    // 2s at 40 col/s, with one 1000-column recycle pulling the offset back
    let coarse = run(1_000);
    let fine = run(250);
    assert!((coarse - fine).abs() < 1e-9);
    assert!((coarse - (80.0 - 1_000.0)).abs() < 1e-9);
}
