//! Compositor contract tests: sizing, clamping, fill idempotence and
//! title-tab decoration.

mod common;

use common::FakeSurface;
use tui_hangman::geom::Size;
use tui_hangman::term::buffer::glyph;
use tui_hangman::term::{Attr, DrawBuffer, TerminalSurface};

#[test]
fn buffer_length_tracks_the_surface_after_resize() {
    let mut surface = FakeSurface::new(40, 12);
    let mut buf = DrawBuffer::new(Size::new(1, 1));

    buf.resize(&mut surface).unwrap();
    assert_eq!(buf.len(), 40 * 12);
    assert_eq!(buf.size(), Size::new(40, 12));

    surface.set_size(Size::new(80, 25)).unwrap();
    buf.resize(&mut surface).unwrap();
    assert_eq!(buf.len(), 80 * 25);
    assert_eq!(buf.len(), buf.size().offset());
}

#[test]
fn resize_clears_to_the_default_attribute() {
    let mut surface = FakeSurface::new(10, 3);
    let mut buf = DrawBuffer::new(Size::new(5, 5));
    buf.fill(Attr::BG_RED, true, 'x');

    buf.resize(&mut surface).unwrap();

    assert!(buf
        .cells()
        .iter()
        .all(|c| c.glyph == ' ' && c.attr == Attr::DEFAULT));
}

#[test]
fn fill_is_idempotent() {
    let mut once = DrawBuffer::new(Size::new(12, 4));
    once.fill(Attr::FG_CYAN | Attr::BG_BLUE, true, '.');

    let mut twice = DrawBuffer::new(Size::new(12, 4));
    twice.fill(Attr::FG_CYAN | Attr::BG_BLUE, true, '.');
    twice.fill(Attr::FG_CYAN | Attr::BG_BLUE, true, '.');

    assert_eq!(once, twice);
}

#[test]
fn move_char_clamps_at_the_buffer_end() {
    let mut buf = DrawBuffer::new(Size::new(8, 2));

    // Run extends 4 cells past the end; exactly len - indent cells are
    // written.
    buf.move_char(12, '#', Attr::FG_RED, 8);
    let written = buf.cells().iter().filter(|c| c.glyph == '#').count();
    assert_eq!(written, 4);
    assert_eq!(buf.cells()[15].glyph, '#');
}

#[test]
fn move_char_past_the_end_is_a_no_op() {
    let mut buf = DrawBuffer::new(Size::new(8, 2));
    let before = buf.clone();

    buf.move_char(16, '#', Attr::FG_RED, 1);
    buf.move_char(100, '#', Attr::FG_RED, 5);

    assert_eq!(buf, before);
}

#[test]
fn decorated_string_has_two_cells_of_decoration_each_side() {
    let mut buf = DrawBuffer::new(Size::new(20, 2));

    buf.move_text(5, "AB", Attr::FG_WHITE, true);

    assert_eq!(buf.cells()[3].glyph, glyph::TEE_LEFT);
    assert_eq!(buf.cells()[4].glyph, ' ');
    assert_eq!(buf.cells()[5].glyph, 'A');
    assert_eq!(buf.cells()[6].glyph, 'B');
    assert_eq!(buf.cells()[7].glyph, ' ');
    assert_eq!(buf.cells()[8].glyph, glyph::TEE_RIGHT);
    // Decoration carries the string's attribute.
    assert_eq!(buf.cells()[3].attr, Attr::FG_WHITE);
}

#[test]
fn flush_hands_the_whole_grid_to_the_surface() {
    let mut surface = FakeSurface::new(6, 2);
    let log = surface.log_handle();
    let mut buf = DrawBuffer::new(Size::new(6, 2));
    buf.move_text(0, "hello!", Attr::FG_GREY, false);

    buf.flush_to(&mut surface).unwrap();

    let log = log.borrow();
    assert_eq!(log.flushes, 1);
    let frame: String = log.last_frame.iter().collect();
    assert!(frame.starts_with("hello!"));
    assert_eq!(log.last_frame.len(), 12);
}
