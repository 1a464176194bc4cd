// Copyright 2026 the Spendpie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::RefCell;
use std::rc::Rc;

use peniko::Brush;
use peniko::color::palette::css;
use serde_json::json;
use spendpie_charts::{PercentLabels, PieStyle};
use spendpie_core::{MarkPayload, Palette, Record, Selection};

use crate::{
    MeasureSpec, PieChartView, SavedState, SvgCanvas, TouchAction, TouchEvent, ViewConfig,
};

fn spending() -> Vec<Record> {
    vec![
        Record::new("Food", 100),
        Record::new("Transport", 100),
        Record::new("Food", 100),
    ]
}

/// A 400x400 view: center (200, 200), radius 100, touch band 50..=150.
fn view_with_data() -> PieChartView {
    let mut view = PieChartView::default();
    view.on_size_changed(400.0, 400.0);
    view.set_data(&spending());
    view
}

fn record_taps(view: &mut PieChartView) -> Rc<RefCell<Vec<String>>> {
    let taps = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&taps);
    view.set_on_category_click_listener(move |category| {
        sink.borrow_mut().push(category.to_string());
    });
    taps
}

fn annotation(view: &PieChartView) -> Option<String> {
    view.marks().into_iter().find_map(|m| match m.payload {
        MarkPayload::Text(t) => Some(t.text),
        _ => None,
    })
}

#[test]
fn set_data_builds_slices_and_requests_a_redraw() {
    let view = view_with_data();
    let slices = view.slices().slices();
    assert_eq!(slices.len(), 2);
    assert_eq!(slices[0].category, "Food");
    assert_eq!(slices[0].amount, 200);
    assert_eq!(slices[1].start_angle, 240.0);
    assert!(view.needs_redraw());
    assert_eq!(view.selection(), &Selection::Unselected);
}

#[test]
fn tap_selects_notifies_and_invalidates() {
    let mut view = view_with_data();
    let taps = record_taps(&mut view);
    let mut canvas = SvgCanvas::new(400.0, 400.0);
    view.draw(&mut canvas);
    assert!(!view.needs_redraw());

    assert!(view.on_touch_event(&TouchEvent::down(300.0, 200.0)));
    assert_eq!(view.selected_category(), Some("Food"));
    assert!(view.needs_redraw());

    assert!(view.on_touch_event(&TouchEvent::down(200.0, 100.0)));
    assert_eq!(view.selected_category(), Some("Transport"));

    assert_eq!(*taps.borrow(), ["Food", "Transport"]);
}

#[test]
fn touches_outside_the_band_change_nothing() {
    let mut view = view_with_data();
    let taps = record_taps(&mut view);
    assert!(view.on_touch_event(&TouchEvent::down(300.0, 200.0)));
    view.draw(&mut SvgCanvas::new(400.0, 400.0));

    // Center, just inside the hole, and past the outer edge.
    for (x, y) in [(200.0, 200.0), (249.0, 200.0), (351.0, 200.0), (200.0, 0.0)] {
        assert!(!view.on_touch_event(&TouchEvent::down(x, y)));
    }
    assert_eq!(view.selected_category(), Some("Food"));
    assert!(!view.needs_redraw());
    assert_eq!(taps.borrow().len(), 1);
}

#[test]
fn only_touch_down_is_hit_tested() {
    let mut view = view_with_data();
    for action in [TouchAction::Move, TouchAction::Up, TouchAction::Cancel] {
        let event = TouchEvent {
            action,
            pos: kurbo::Point::new(300.0, 200.0),
        };
        assert!(!view.on_touch_event(&event));
    }
    assert_eq!(view.selection(), &Selection::Unselected);
}

#[test]
fn touch_on_a_shared_boundary_selects_the_later_slice() {
    let mut view = PieChartView::default();
    view.on_size_changed(400.0, 400.0);
    view.set_data(&[
        Record::new("a", 1),
        Record::new("b", 1),
        Record::new("c", 1),
        Record::new("d", 1),
    ]);
    // Straight down is 90 degrees, where "b" starts.
    assert!(view.on_touch_event(&TouchEvent::down(200.0, 300.0)));
    assert_eq!(view.selected_category(), Some("b"));
}

#[test]
fn selected_slice_is_annotated() {
    let mut view = view_with_data();
    assert_eq!(annotation(&view), None);
    view.on_touch_event(&TouchEvent::down(300.0, 200.0));
    assert_eq!(annotation(&view).as_deref(), Some("Food: 200"));
}

#[test]
fn selection_survives_a_save_and_restore_into_a_fresh_view() {
    let mut view = view_with_data();
    view.on_touch_event(&TouchEvent::down(300.0, 200.0));
    let before = view.marks();

    let bundle = view
        .save_state(Some(json!({ "scrollY": 12 })))
        .to_json()
        .unwrap();

    let mut restored = view_with_data();
    let super_state = restored.restore_state(SavedState::from_json(&bundle).unwrap());
    assert_eq!(super_state, Some(json!({ "scrollY": 12 })));
    assert_eq!(restored.selected_category(), Some("Food"));
    assert!(restored.needs_redraw());
    assert_eq!(restored.marks(), before);
}

#[test]
fn unselected_state_restores_as_unselected() {
    let view = view_with_data();
    let state = view.save_state(None);
    assert_eq!(state, SavedState::default());

    let mut restored = view_with_data();
    restored.on_touch_event(&TouchEvent::down(300.0, 200.0));
    assert_eq!(restored.restore_state(state), None);
    assert_eq!(restored.selection(), &Selection::Unselected);
}

#[test]
fn zero_total_draws_nothing_and_ignores_taps() {
    let mut view = PieChartView::default();
    view.on_size_changed(400.0, 400.0);
    view.set_data(&[Record::new("Food", 0)]);
    assert!(view.marks().is_empty());
    assert!(!view.on_touch_event(&TouchEvent::down(300.0, 200.0)));

    let mut canvas = SvgCanvas::new(400.0, 400.0);
    view.draw(&mut canvas);
    assert_eq!(canvas.element_count(), 0);
}

#[test]
fn eleven_categories_render_without_fault() {
    let records: Vec<Record> = (0..11)
        .map(|i| Record::new(format!("category {i}"), 10))
        .collect();
    let mut view = PieChartView::default();
    view.on_size_changed(400.0, 400.0);
    view.set_data(&records);

    let mut canvas = SvgCanvas::new(400.0, 400.0);
    view.draw(&mut canvas);
    assert_eq!(canvas.element_count(), 11);
}

#[test]
fn registering_a_listener_replaces_the_previous_one() {
    let mut view = view_with_data();
    let first = record_taps(&mut view);
    let second = record_taps(&mut view);
    view.on_touch_event(&TouchEvent::down(300.0, 200.0));
    assert!(first.borrow().is_empty());
    assert_eq!(*second.borrow(), ["Food"]);
}

#[test]
fn draw_writes_the_highlight_to_svg() {
    let mut view = view_with_data();
    view.on_touch_event(&TouchEvent::down(300.0, 200.0));
    let mut canvas = SvgCanvas::new(400.0, 400.0);
    view.draw(&mut canvas);

    let svg = canvas.to_svg_string();
    assert!(svg.contains(">Food: 200</text>"), "{svg}");
    assert!(svg.contains(">66%</textPath>"), "{svg}");
    assert!(svg.contains(r#"stroke-linejoin="bevel""#), "{svg}");
    // Two sectors, one outline, one arc label, one annotation.
    assert_eq!(canvas.element_count(), 5);
}

#[test]
fn measure_prefers_density_scaled_width() {
    let view = PieChartView::new(
        ViewConfig::default()
            .with_density(2.0)
            .with_min_height(100)
            .with_vertical_padding(8, 12),
    );
    assert_eq!(
        view.on_measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified),
        (720, 120)
    );
    assert_eq!(
        view.on_measure(MeasureSpec::AtMost(500), MeasureSpec::AtMost(50)),
        (500, 50)
    );
    assert_eq!(
        view.on_measure(MeasureSpec::Exactly(1080), MeasureSpec::Exactly(1920)),
        (1080, 1920)
    );
}

#[test]
fn custom_palette_and_style_are_used_when_drawing() {
    let mut view = PieChartView::default()
        .with_palette(Palette::new(vec![css::TOMATO]).unwrap())
        .with_style(PieStyle::default().with_percent_labels(PercentLabels::All));
    view.on_size_changed(400.0, 400.0);
    view.set_data(&spending());

    let marks = view.marks();
    let mut sectors = 0;
    let mut labels = 0;
    for mark in &marks {
        match &mark.payload {
            MarkPayload::Path(p) => {
                let Brush::Solid(color) = &p.fill else {
                    panic!("expected solid fill");
                };
                let rgba = color.to_rgba8();
                assert_eq!((rgba.r, rgba.g, rgba.b), (0xff, 0x63, 0x47));
                sectors += 1;
            }
            MarkPayload::TextOnPath(_) => labels += 1,
            MarkPayload::Text(_) => panic!("nothing is selected yet"),
        }
    }
    assert_eq!((sectors, labels), (2, 2));
}
