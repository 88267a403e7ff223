//! Gallows artwork and the staged reveal compositor.
//!
//! The picture is built by layering fixed tiles onto a background in a
//! strict order: background, gallows, executioner, victim. Each guess
//! used reveals one more row of the current layer; the band boundaries
//! are the literal tile heights, so the reveal sequence is gallows
//! bottom-up, then the executioner bottom-up, then the standing victim
//! head-first, and finally the hanged victim.

use crate::picmap::PicMap;
use crate::term::{ACell, Attr};

pub const ART_WIDTH: i32 = 22;
pub const ART_HEIGHT: i32 = 10;

/// Tile heights; these are the reveal-band boundaries.
pub const VICTIM_HEIGHT: usize = 3;
pub const EXECUTIONER_HEIGHT: usize = 4;
pub const GALLOWS_HEIGHT: usize = 9;

/// A fixed block of glyph rows placed at a known position on the
/// background. Every row must be exactly `width` characters.
struct Tile {
    left: i32,
    top: i32,
    width: i32,
    attr: Attr,
    rows: &'static [&'static str],
}

const GALLOWS: Tile = Tile {
    left: 4,
    top: 1,
    width: 11,
    attr: Attr::FG_YELLOW,
    rows: &[
        "┌────┬───┐ ",
        "│    │   │ ",
        "│        │ ",
        "│        │ ",
        "│        │ ",
        "│        │ ",
        "│        │ ",
        "│        │ ",
        "┴────────┴─",
    ],
};

const EXECUTIONER: Tile = Tile {
    left: 15,
    top: 6,
    width: 6,
    attr: Attr::FG_GREY,
    rows: &[
        "  O   ",
        " /|\\  ",
        "  |   ",
        " / \\  ",
    ],
};

const VICTIM_STANDING: Tile = Tile {
    left: 7,
    top: 2,
    width: 5,
    attr: Attr::FG_WHITE.union(Attr::FG_INTENSE),
    rows: &[
        "  O  ",
        " /|\\ ",
        " / \\ ",
    ],
};

const VICTIM_HANGING: Tile = Tile {
    left: 5,
    top: 2,
    width: 7,
    attr: Attr::FG_WHITE.union(Attr::FG_INTENSE),
    rows: &[
        "    │  ",
        "    O  ",
        "   /│\\ ",
        "    │  ",
        "   / \\ ",
        "       ",
    ],
};

/// One step of the reveal sequence. The payload is the number of rows
/// of that layer still hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Gallows(usize),
    Executioner(usize),
    VictimStanding(usize),
    VictimHanging,
}

/// Map remaining lives onto a reveal stage.
///
/// With no lives left the victim hangs. Otherwise `lives - 1` walks
/// the bands from the top of the sequence: values up to the standing
/// victim's height reveal the victim, the next executioner-height
/// band reveals the executioner, and everything above reveals the
/// gallows.
pub fn stage_for(lives_remaining: usize, max_lives: usize) -> Stage {
    if max_lives - lives_remaining == max_lives {
        return Stage::VictimHanging;
    }

    let step = lives_remaining - 1;
    if step <= VICTIM_HEIGHT {
        Stage::VictimStanding(step)
    } else if step < EXECUTIONER_HEIGHT + VICTIM_HEIGHT {
        Stage::Executioner(step - VICTIM_HEIGHT)
    } else {
        Stage::Gallows(step - (EXECUTIONER_HEIGHT + VICTIM_HEIGHT))
    }
}

/// Build the full picture for the given lives count.
pub fn picture_for(lives_remaining: usize, max_lives: usize) -> PicMap {
    match stage_for(lives_remaining, max_lives) {
        Stage::Gallows(hidden) => gallows(hidden),
        Stage::Executioner(hidden) => executioner(hidden),
        Stage::VictimStanding(hidden) => victim_standing(hidden),
        Stage::VictimHanging => victim_hanging(),
    }
}

/// Copy a tile onto the base, unconditionally, blanks included.
fn overlay(base: &mut PicMap, tile: &Tile) {
    limited_overlay(base, tile, 0, false);
}

/// Copy a tile with `hidden` of its rows withheld. When `from_top` is
/// false the first `hidden` source rows are withheld (the tile appears
/// bottom-up as `hidden` shrinks); when true the last rows are
/// withheld (the tile appears head-first). Visible rows keep their
/// absolute position.
fn limited_overlay(base: &mut PicMap, tile: &Tile, hidden: usize, from_top: bool) {
    let height = tile.rows.len();

    for (i, row) in tile.rows.iter().enumerate() {
        let visible = if from_top {
            i < height.saturating_sub(hidden)
        } else {
            i >= hidden
        };
        if !visible {
            continue;
        }

        let y = tile.top + i as i32;
        for (j, glyph) in row.chars().enumerate() {
            let x = tile.left + j as i32;
            let pos = (x + y * ART_WIDTH) as usize;
            *base.at_mut(pos) = ACell::new(glyph, tile.attr);
        }
    }
}

fn background() -> PicMap {
    let mut base = PicMap::new(ART_WIDTH, ART_HEIGHT);
    // Ground line along the bottom row.
    let start = ((ART_HEIGHT - 1) * ART_WIDTH) as usize;
    for x in 0..ART_WIDTH as usize {
        *base.at_mut(start + x) = ACell::new('─', Attr::FG_GREEN);
    }
    base
}

fn gallows(hidden: usize) -> PicMap {
    let mut base = background();
    limited_overlay(&mut base, &GALLOWS, hidden, false);
    base
}

fn executioner(hidden: usize) -> PicMap {
    let mut base = gallows(0);
    limited_overlay(&mut base, &EXECUTIONER, hidden, false);
    base
}

fn victim_standing(hidden: usize) -> PicMap {
    let mut base = executioner(0);
    limited_overlay(&mut base, &VICTIM_STANDING, hidden, true);
    base
}

fn victim_hanging() -> PicMap {
    let mut base = executioner(0);
    overlay(&mut base, &VICTIM_HANGING);
    base
}
