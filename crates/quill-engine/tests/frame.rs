use quill_engine::coords::{CornerRadii, Rect, Vec2};
use quill_engine::frame::{CircleStyle, ClipId, FrameContext, GlyphQuad, RectStyle, TextureId};
use quill_engine::input::PointerState;
use quill_engine::paint::Color;
use quill_engine::render::RecordingBackend;
use quill_engine::{BatchCapacities, EngineConfig};

fn begin(frame: &mut FrameContext, pointer: Vec2) {
    frame.begin_frame(PointerState::at(pointer));
}

// ── lifecycle ─────────────────────────────────────────────────────────────

#[test]
fn empty_frames_are_idempotent() {
    let mut frame = FrameContext::default();
    for _ in 0..100 {
        frame.begin_frame(PointerState::default());
        assert_eq!(frame.peek_depth(), 1.0);
        let out = frame.end_frame();
        assert!(out.is_empty());
        assert!(out.clips.is_empty());
        assert_eq!(out.stats.primitives, 0);
    }
    assert_eq!(frame.frame_index(), 100);
}

#[test]
fn begin_frame_resets_previous_content() {
    let mut frame = FrameContext::default();
    begin(&mut frame, Vec2::zero());
    frame.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::BLACK);
    frame.image(Rect::new(0.0, 0.0, 10.0, 10.0), TextureId(1));
    frame.push_clip(Rect::new(0.0, 0.0, 5.0, 5.0), CornerRadii::zero(), 0.0);
    frame.pop_clip();
    assert_eq!(frame.end_frame().stats.rects, 1);

    begin(&mut frame, Vec2::zero());
    assert_eq!(frame.peek_depth(), 1.0);
    let out = frame.end_frame();
    assert!(out.is_empty());
    assert!(out.clip_table.is_empty());
}

#[test]
fn steady_frames_do_not_grow_buffers() {
    let caps = BatchCapacities { rects: 4, ..BatchCapacities::default() };
    let mut frame = FrameContext::new(EngineConfig::default().with_capacities(caps));
    let mut backend = RecordingBackend::new();

    for _ in 0..3 {
        begin(&mut frame, Vec2::zero());
        for i in 0..10 {
            frame.fill_rect(Rect::new(i as f32, 0.0, 1.0, 1.0), Color::WHITE);
        }
        frame.submit(&mut backend);
    }

    assert!(backend.frames().iter().all(|f| f.rects.len() == 10));
    assert_eq!(backend.frames().len(), 3);
}

#[test]
#[should_panic(expected = "begin_frame called while a frame is being recorded")]
fn begin_frame_twice_panics_in_debug() {
    let mut frame = FrameContext::default();
    begin(&mut frame, Vec2::zero());
    begin(&mut frame, Vec2::zero());
}

#[test]
#[should_panic(expected = "clip stack imbalance at end of frame")]
fn open_clip_at_end_of_frame_panics_in_debug() {
    let mut frame = FrameContext::default();
    begin(&mut frame, Vec2::zero());
    frame.push_clip(Rect::new(0.0, 0.0, 10.0, 10.0), CornerRadii::zero(), 0.0);
    frame.end_frame();
}

#[test]
#[should_panic(expected = "pop_clip called without matching push_clip")]
fn unmatched_pop_clip_panics_in_debug() {
    let mut frame = FrameContext::default();
    begin(&mut frame, Vec2::zero());
    frame.pop_clip();
}

#[test]
#[should_panic(expected = "looks like straight alpha")]
fn straight_alpha_color_panics_in_debug() {
    let mut frame = FrameContext::default();
    begin(&mut frame, Vec2::zero());
    frame.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::from_premul(1.0, 1.0, 1.0, 0.5));
}

// ── depth ─────────────────────────────────────────────────────────────────

#[test]
fn depth_is_strictly_increasing_across_kinds() {
    let mut frame = FrameContext::default();
    let mut backend = RecordingBackend::new();
    begin(&mut frame, Vec2::zero());

    frame.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE);
    frame.fill_circle(Vec2::new(5.0, 5.0), 2.0, Color::WHITE);
    frame.image(Rect::new(0.0, 0.0, 1.0, 1.0), TextureId(3));
    frame.line(Vec2::zero(), Vec2::new(1.0, 1.0), Color::BLACK, 1.0);
    frame.glyph_run(
        [GlyphQuad { rect: Rect::new(0.0, 0.0, 1.0, 1.0), uv_min: Vec2::zero(), uv_max: Vec2::splat(1.0) }; 3],
        Color::BLACK,
    );
    frame.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE);
    let stats = frame.submit(&mut backend);

    let Some(rec) = backend.last() else { panic!("no frame recorded") };
    assert_eq!(rec.rects[0].depth, 1.0);
    assert_eq!(rec.circles[0].depth, 2.0);
    assert_eq!(rec.images[0].1[0].depth, 3.0);
    assert_eq!(rec.lines[0].depth, 4.0);
    assert!(rec.glyphs.iter().all(|g| g.depth == 5.0));
    assert_eq!(rec.rects[1].depth, 6.0);

    assert_eq!(rec.depths(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!(stats.primitives, 6);
    assert_eq!(stats.glyphs, 3);
}

// ── clipping ──────────────────────────────────────────────────────────────

#[test]
fn hit_test_inside_clip() {
    let mut frame = FrameContext::default();

    begin(&mut frame, Vec2::new(15.0, 15.0));
    let hit = frame.clip(Rect::new(0.0, 0.0, 100.0, 100.0), |f, _| {
        f.hit_test(Rect::new(10.0, 10.0, 20.0, 20.0))
    });
    frame.end_frame();
    assert!(hit.is_hit());

    begin(&mut frame, Vec2::new(200.0, 200.0));
    let hit = frame.clip(Rect::new(0.0, 0.0, 100.0, 100.0), |f, _| {
        f.hit_test(Rect::new(10.0, 10.0, 20.0, 20.0))
    });
    frame.end_frame();
    assert!(!hit.is_hit());
}

#[test]
fn clip_excludes_pointer_outside_region_but_inside_bounds() {
    let mut frame = FrameContext::default();
    begin(&mut frame, Vec2::new(80.0, 80.0));
    let hit = frame.clip(Rect::new(0.0, 0.0, 50.0, 50.0), |f, _| {
        f.hit_test(Rect::new(0.0, 0.0, 100.0, 100.0))
    });
    frame.end_frame();
    assert!(!hit.is_hit());
}

#[test]
fn nested_clip_honours_ancestors() {
    let mut frame = FrameContext::default();
    // Inside the inner clip and the bounds, outside the outer clip.
    begin(&mut frame, Vec2::new(40.0, 40.0));
    let hit = frame.clip(Rect::new(0.0, 0.0, 30.0, 30.0), |f, _| {
        f.clip(Rect::new(20.0, 20.0, 50.0, 50.0), |f, _| f.hit_test(Rect::new(20.0, 20.0, 50.0, 50.0)))
    });
    frame.end_frame();
    assert!(!hit.is_hit());
}

#[test]
fn clip_ids_follow_push_order_and_tag_primitives() {
    let mut frame = FrameContext::default();
    let mut backend = RecordingBackend::new();
    begin(&mut frame, Vec2::zero());

    frame.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE);
    let (outer, inner) = frame.clip(Rect::new(0.0, 0.0, 100.0, 100.0), |f, _| {
        let outer = f.current_clip();
        let inner = f.clip(Rect::new(10.0, 10.0, 10.0, 10.0), |f, _| {
            f.fill_rect(Rect::new(10.0, 10.0, 5.0, 5.0), Color::WHITE);
            f.current_clip()
        });
        f.fill_rect(Rect::new(0.0, 0.0, 5.0, 5.0), Color::WHITE);
        (outer, inner)
    });
    assert_eq!(frame.current_clip(), ClipId::NONE);
    frame.submit(&mut backend);

    assert!(inner > outer);
    let Some(rec) = backend.last() else { panic!("no frame recorded") };
    let ids: Vec<u32> = rec.rects.iter().map(|r| r.clip_id).collect();
    assert_eq!(ids, vec![0, inner.0 as u32, outer.0 as u32]);
    assert_eq!(rec.clip_table.len(), 2);
    assert_eq!(rec.clip_table[1].parent, outer.0 as u32);
}

#[test]
fn rect_clipped_away_by_an_ancestor_is_never_hit() {
    let mut frame = FrameContext::default();
    begin(&mut frame, Vec2::new(5.0, 5.0));
    let hit = frame.clip(Rect::new(0.0, 0.0, 10.0, 10.0), |f, _| {
        f.clip(Rect::new(50.0, 50.0, 10.0, 10.0), |f, _| f.hit_test(Rect::new(0.0, 0.0, 100.0, 100.0)))
    });
    frame.end_frame();
    assert!(!hit.is_hit());
}

#[test]
fn scoped_clip_survives_a_body_that_pops_itself() {
    let mut frame = FrameContext::default();
    let mut backend = RecordingBackend::new();
    begin(&mut frame, Vec2::new(500.0, 500.0));

    let (outer, after, hit) = frame.clip(Rect::new(0.0, 0.0, 10.0, 10.0), |f, _| {
        let outer = f.current_clip();
        f.clip(Rect::new(0.0, 0.0, 1000.0, 1000.0), |f, _| f.pop_clip());
        let after = f.current_clip();
        f.fill_rect(Rect::new(0.0, 0.0, 1000.0, 1000.0), Color::WHITE);
        (outer, after, f.hit_test(Rect::new(0.0, 0.0, 1000.0, 1000.0)))
    });
    assert_eq!(after, outer);
    assert!(!hit.is_hit());
    assert_eq!(frame.current_clip(), ClipId::NONE);
    frame.submit(&mut backend);

    let Some(rec) = backend.last() else { panic!("no frame recorded") };
    assert_eq!(rec.rects[0].clip_id, outer.0 as u32);
}

// ── texture batching ──────────────────────────────────────────────────────

#[test]
fn images_split_into_slot_bounded_batches() {
    let mut frame = FrameContext::new(EngineConfig::default().with_max_texture_slots(31));
    let mut backend = RecordingBackend::new();
    begin(&mut frame, Vec2::zero());

    let assigned: Vec<_> = (0..35u64)
        .map(|i| frame.image(Rect::new(i as f32, 0.0, 1.0, 1.0), TextureId(i)))
        .collect();
    let stats = frame.submit(&mut backend);

    assert_eq!(stats.image_batches, 2);
    assert!(assigned[..31].iter().all(|b| b.batch_index == 0));
    assert!(assigned[31..].iter().all(|b| b.batch_index == 1));

    let Some(rec) = backend.last() else { panic!("no frame recorded") };
    assert_eq!(rec.images[0].0.len(), 31);
    assert_eq!(rec.images[1].0, (31..35).map(TextureId).collect::<Vec<_>>());

    // Depth follows submission order, not batch order.
    let depths: Vec<f32> = rec.images.iter().flat_map(|(_, i)| i.iter().map(|i| i.depth)).collect();
    let expected: Vec<f32> = (1..=35).map(|d| d as f32).collect();
    assert_eq!(depths, expected);
}

#[test]
fn texture_assignment_is_forgotten_between_frames() {
    let mut frame = FrameContext::new(EngineConfig::default().with_max_texture_slots(1));
    begin(&mut frame, Vec2::zero());
    frame.image(Rect::new(0.0, 0.0, 1.0, 1.0), TextureId(1));
    let second = frame.image(Rect::new(0.0, 0.0, 1.0, 1.0), TextureId(2));
    assert_eq!(second.batch_index, 1);
    frame.end_frame();

    begin(&mut frame, Vec2::zero());
    let first = frame.image(Rect::new(0.0, 0.0, 1.0, 1.0), TextureId(2));
    assert_eq!((first.batch_index, first.slot), (0, 0));
    frame.end_frame();
}

// ── batches ───────────────────────────────────────────────────────────────

#[test]
fn records_come_back_in_submission_order() {
    let mut frame = FrameContext::default();
    let mut backend = RecordingBackend::new();
    begin(&mut frame, Vec2::zero());
    for i in 0..50 {
        let style = RectStyle::rounded(Color::WHITE, 2.0).with_border(1.0, Color::BLACK);
        frame.rect(Rect::new(i as f32, 2.0 * i as f32, 3.0, 4.0), style);
    }
    frame.submit(&mut backend);

    let Some(rec) = backend.last() else { panic!("no frame recorded") };
    assert_eq!(rec.rects.len(), 50);
    for (i, r) in rec.rects.iter().enumerate() {
        assert_eq!(r.origin, [i as f32, 2.0 * i as f32]);
        assert_eq!(r.size, [3.0, 4.0]);
        assert_eq!(r.corner_radii, [2.0; 4]);
        assert_eq!(r.color, [1.0; 4]);
        assert_eq!(r.border_color, [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(r.border_width, 1.0);
    }
}

#[test]
fn every_kind_keeps_its_fields() {
    let mut frame = FrameContext::default();
    let mut backend = RecordingBackend::new();
    // Exact in binary: 1*0.5, 0.5*0.5, 0.25*0.5.
    let tint = Color::from_straight(1.0, 0.5, 0.25, 0.5);
    let premul = [0.5, 0.25, 0.125, 0.5];
    begin(&mut frame, Vec2::zero());

    for i in 0..20 {
        let f = i as f32;
        frame.circle(Vec2::new(f, -f), -(f + 1.0), CircleStyle { color: tint, border_width: 0.25 });
        frame.line(Vec2::new(f, 0.0), Vec2::new(0.0, f), tint, f + 2.0);
        frame.glyph_run(
            [GlyphQuad {
                rect: Rect::new(f, 1.0, 2.0, 3.0),
                uv_min: Vec2::new(0.25, 0.5),
                uv_max: Vec2::new(0.75, 1.0),
            }],
            tint,
        );
        frame.image(Rect::new(f, 2.0, 4.0, 5.0), TextureId(i % 3));
    }
    frame.submit(&mut backend);

    let Some(rec) = backend.last() else { panic!("no frame recorded") };
    assert_eq!((rec.circles.len(), rec.lines.len(), rec.glyphs.len()), (20, 20, 20));
    for i in 0..20 {
        let f = i as f32;
        let c = &rec.circles[i];
        assert_eq!((c.center, c.radius, c.border_width, c.color), ([f, -f], f + 1.0, 0.25, premul));

        let l = &rec.lines[i];
        assert_eq!((l.start, l.end, l.width, l.color), ([f, 0.0], [0.0, f], f + 2.0, premul));

        let g = &rec.glyphs[i];
        assert_eq!((g.origin, g.size), ([f, 1.0], [2.0, 3.0]));
        assert_eq!((g.uv_min, g.uv_max, g.color), ([0.25, 0.5], [0.75, 1.0], premul));
        assert!(g.depth < rec.images[0].1[i].depth);
    }

    let (textures, images) = &rec.images[0];
    assert_eq!(textures, &vec![TextureId(0), TextureId(1), TextureId(2)]);
    for (i, img) in images.iter().enumerate() {
        assert_eq!((img.origin, img.size), ([i as f32, 2.0], [4.0, 5.0]));
        assert_eq!(img.texture_slot, (i % 3) as u32);
    }
}

#[test]
fn small_capacities_grow_without_losing_records() {
    let caps = BatchCapacities { rects: 1, circles: 1, lines: 1, glyphs: 1, images: 1, clips: 1 };
    let mut frame = FrameContext::new(EngineConfig::default().with_capacities(caps));
    let mut backend = RecordingBackend::new();
    begin(&mut frame, Vec2::zero());

    for i in 0..33 {
        let f = i as f32;
        let id = frame.push_clip(Rect::new(0.0, 0.0, 100.0 - f, 100.0), CornerRadii::zero(), 0.0);
        assert_eq!(id, ClipId(i as u16 + 1));
        frame.fill_rect(Rect::new(f, 0.0, 1.0, 1.0), Color::WHITE);
        frame.fill_circle(Vec2::new(f, 0.0), 1.0, Color::WHITE);
        frame.line(Vec2::zero(), Vec2::new(f, 1.0), Color::BLACK, 1.0);
        frame.glyph_run(
            [GlyphQuad { rect: Rect::new(f, 0.0, 1.0, 1.0), uv_min: Vec2::zero(), uv_max: Vec2::splat(1.0) }; 2],
            Color::BLACK,
        );
        frame.image(Rect::new(f, 0.0, 1.0, 1.0), TextureId(0));
        frame.pop_clip();
    }
    let stats = frame.submit(&mut backend);

    let Some(rec) = backend.last() else { panic!("no frame recorded") };
    assert_eq!((rec.rects.len(), rec.circles.len(), rec.lines.len()), (33, 33, 33));
    assert_eq!(rec.glyphs.len(), 66);
    assert_eq!(rec.images[0].1.len(), 33);
    assert_eq!(rec.clip_table.len(), 33);
    assert_eq!(stats.primitives, 33 * 5);
    for (i, r) in rec.rects.iter().enumerate() {
        assert_eq!(r.origin[0], i as f32);
        assert_eq!(r.clip_id, i as u32 + 1);
        assert_eq!(rec.clip_table[i].rect[2], 100.0 - i as f32);
    }
    let depths = rec.depths();
    assert_eq!(depths.len(), 33 * 5);
    assert!(depths.windows(2).all(|w| w[0] < w[1]));
}

// ── hit-test chaining ─────────────────────────────────────────────────────

#[test]
fn chained_reactions_follow_pointer_flags() {
    let mut frame = FrameContext::default();
    let bounds = Rect::new(0.0, 0.0, 10.0, 10.0);

    let pointers = [
        PointerState { down: true, pressed: true, ..PointerState::at(Vec2::new(5.0, 5.0)) },
        PointerState { pressed: true, ..PointerState::at(Vec2::new(5.0, 5.0)) },
        PointerState { up: true, ..PointerState::at(Vec2::new(5.0, 5.0)) },
        PointerState { down: true, ..PointerState::at(Vec2::new(50.0, 5.0)) },
    ];
    let mut log = Vec::new();
    for p in pointers {
        frame.begin_frame(p);
        let (mut a, mut b) = (false, false);
        frame.hit_test(bounds).mouse_down(|| a = true).mouse_up(|| b = true);
        log.push((a, b));
        frame.end_frame();
    }
    assert_eq!(log, vec![(true, false), (false, false), (false, true), (false, false)]);
}

#[test]
fn hit_tolerance_extends_bounds_outward() {
    let mut frame = FrameContext::new(EngineConfig::default().with_hit_tolerance(2.0));
    begin(&mut frame, Vec2::new(11.5, 5.0));
    assert!(frame.hit_test(Rect::new(0.0, 0.0, 10.0, 10.0)).is_hit());
    frame.end_frame();
}
