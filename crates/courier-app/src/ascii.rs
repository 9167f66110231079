//! Plain-text frame of a world snapshot.
//!
//! One character per cell, row y = 0 first, so the top-center depot
//! appears on the first grid line. When several things share a
//! cell the highest layer wins: depot, then courier, then needy entity.

use std::fmt::Write;

use courier_core::enums::{DisplayState, DEPOT_COLOUR};
use courier_core::state::WorldSnapshot;

pub const EMPTY_GLYPH: char = '.';
pub const DEPOT_GLYPH: char = '#';

/// How a frame is written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FrameStyle {
    #[default]
    Plain,
    /// Glyphs wrapped in ANSI colour escapes following `DisplayState::colour`.
    Ansi,
}

/// What ends up drawn in one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Agent(DisplayState),
    Depot,
}

impl Mark {
    fn layer(self) -> u8 {
        match self {
            Mark::Agent(DisplayState::Fed | DisplayState::Hungry) => 0,
            Mark::Agent(DisplayState::Searching | DisplayState::Returning) => 1,
            Mark::Depot => 2,
        }
    }

    fn glyph(self) -> char {
        match self {
            Mark::Agent(display) => glyph(display),
            Mark::Depot => DEPOT_GLYPH,
        }
    }

    fn colour(self) -> &'static str {
        match self {
            Mark::Agent(display) => display.colour(),
            Mark::Depot => DEPOT_COLOUR,
        }
    }
}

pub fn glyph(display: DisplayState) -> char {
    match display {
        DisplayState::Fed => 'o',
        DisplayState::Hungry => 'H',
        DisplayState::Searching => 'c',
        DisplayState::Returning => 'C',
    }
}

/// SGR foreground code for a colour name. Black maps to bright black so
/// depots stay visible on dark terminals.
fn ansi_code(colour: &str) -> Option<&'static str> {
    match colour {
        "black" => Some("90"),
        "red" => Some("31"),
        "green" => Some("32"),
        "blue" => Some("34"),
        _ => None,
    }
}

pub fn render_frame(snapshot: &WorldSnapshot) -> String {
    render_frame_styled(snapshot, FrameStyle::Plain)
}

pub fn render_frame_styled(snapshot: &WorldSnapshot, style: FrameStyle) -> String {
    let width = snapshot.grid.width as usize;
    let height = snapshot.grid.height as usize;
    let mut cells: Vec<Option<Mark>> = vec![None; width * height];

    let index = |x: i32, y: i32| -> Option<usize> {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        (x < width && y < height).then_some(y * width + x)
    };
    let mut mark = |i: usize, candidate: Mark| {
        // Hungry beats fed on a shared cell so it stays visible.
        let replace = match cells[i] {
            None => true,
            Some(current) => {
                candidate.layer() > current.layer()
                    || (candidate.layer() == current.layer()
                        && current == Mark::Agent(DisplayState::Fed))
            }
        };
        if replace {
            cells[i] = Some(candidate);
        }
    };

    for agent in &snapshot.agents {
        if let Some(i) = index(agent.position.x, agent.position.y) {
            mark(i, Mark::Agent(agent.display));
        }
    }
    for depot in &snapshot.depots {
        if let Some(i) = index(depot.position.x, depot.position.y) {
            mark(i, Mark::Depot);
        }
    }

    let mut out = String::with_capacity((width + 1) * height + 32);
    let _ = writeln!(
        out,
        "tick {} | hungry {}",
        snapshot.time.tick, snapshot.hungry_count
    );
    for row in cells.chunks(width.max(1)) {
        for cell in row {
            let Some(m) = cell else {
                out.push(EMPTY_GLYPH);
                continue;
            };
            match (style, ansi_code(m.colour())) {
                (FrameStyle::Ansi, Some(code)) => {
                    let _ = write!(out, "\x1b[{code}m{}\x1b[0m", m.glyph());
                }
                _ => out.push(m.glyph()),
            }
        }
        out.push('\n');
    }
    out
}
