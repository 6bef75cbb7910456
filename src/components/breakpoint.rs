use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::art::CloudSize;
use crate::i18n::TextDirection;

/// Below this many columns the card stacks its blocks vertically.
pub const NARROW_MAX_WIDTH: u16 = 60;

/// Responsive layout mode derived from the terminal width
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Breakpoint {
    Narrow,
    Wide,
}

impl Breakpoint {
    pub fn for_width(width: u16) -> Self {
        if width < NARROW_MAX_WIDTH {
            Breakpoint::Narrow
        } else {
            Breakpoint::Wide
        }
    }

    /// Row on wide terminals, column on narrow ones
    pub fn direction(self) -> Direction {
        match self {
            Breakpoint::Narrow => Direction::Vertical,
            Breakpoint::Wide => Direction::Horizontal,
        }
    }

    pub fn is_narrow(self) -> bool {
        self == Breakpoint::Narrow
    }

    pub fn cloud_size(self) -> CloudSize {
        match self {
            Breakpoint::Narrow => CloudSize::Small,
            Breakpoint::Wide => CloudSize::Large,
        }
    }
}

/// Split `area` into two children along the breakpoint's direction.
///
/// Rows are mirrored for right-to-left text so `first` sits on the right.
/// Columns are never mirrored.
pub fn flow_pair(
    area: Rect,
    breakpoint: Breakpoint,
    text_direction: TextDirection,
    first: Constraint,
    second: Constraint,
) -> (Rect, Rect) {
    match breakpoint.direction() {
        Direction::Vertical => {
            let chunks = Layout::vertical([first, second]).split(area);
            (chunks[0], chunks[1])
        }
        Direction::Horizontal if text_direction.is_rtl() => {
            let chunks = Layout::horizontal([second, first]).split(area);
            (chunks[1], chunks[0])
        }
        Direction::Horizontal => {
            let chunks = Layout::horizontal([first, second]).split(area);
            (chunks[0], chunks[1])
        }
    }
}
