use quill_engine::coords::{Rect, Vec2};
use quill_engine::frame::FrameContext;
use quill_engine::input::PointerState;
use quill_engine::text::{GlyphMetrics, GlyphMetricsSource};
use quill_ui::prelude::*;

struct Mono;

impl GlyphMetricsSource for Mono {
    fn metrics(&mut self, _codepoint: u32, font_size: f32) -> Option<GlyphMetrics> {
        let m = GlyphMetrics {
            advance: 0.5,
            bearing: Vec2::new(0.0, 1.0),
            size: Vec2::new(0.5, 1.0),
            ..GlyphMetrics::default()
        };
        Some(m.scaled(font_size))
    }
}

#[test]
fn stacked_widgets_do_not_overlap() {
    let theme = Theme::default();
    let mut frame = FrameContext::default();
    let mut fonts = Mono;
    let mut checked = false;

    frame.begin_frame(PointerState::default());
    let mut rects = Vec::new();
    let column = v_stack(Vec2::new(8.0, 8.0), 4.0, |col| {
        let (_, r) = button(&mut frame, &mut fonts, col.position(), "first", &theme.button);
        rects.push(r);
        col.advance(r);

        let r = Rect::from_origin_size(col.position(), Vec2::splat(20.0));
        let r = checkbox(&mut frame, r, &mut checked, &theme.checkbox).rect;
        rects.push(r);
        col.advance(r);
    });
    frame.end_frame();

    assert!((rects[1].origin.y - rects[0].max().y - 4.0).abs() < 1e-4);
    assert!((column.max().y - rects[1].max().y).abs() < 1e-4);
    assert_eq!(column.size.x, rects[0].size.x.max(20.0));
}

#[test]
fn button_click_in_a_row() {
    let theme = Theme::light();
    let mut frame = FrameContext::default();
    let mut fonts = Mono;
    let mut clicked = Vec::new();

    // "ab" at 16px: 16 x 21.3 label, 32 x 29.3 with padding.
    frame.begin_frame(PointerState { up: true, ..PointerState::at(Vec2::new(50.0, 10.0)) });
    h_stack(Vec2::zero(), 2.0, |row| {
        for name in ["ab", "cd"] {
            let (hit, r) = button(&mut frame, &mut fonts, row.position(), name, &theme.button);
            hit.mouse_up(|| clicked.push(name));
            row.advance(r);
        }
    });
    frame.end_frame();

    assert_eq!(clicked, vec!["cd"]);
}
