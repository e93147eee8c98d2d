//! Board Cell Style
//!
//! Typed cell state and the total mapping from (cell, turn) to CSS classes.

use crate::models::Dot;

bitflags::bitflags! {
    /// Visual flags of one dot. Combine with bitwise OR.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u16 {
        const BASE = 1 << 0;
        const GRAYED = 1 << 1;
        const CONTAINER = 1 << 2;
        const BLINK = 1 << 3;
        const PLAYER_ONE_TURN = 1 << 4;
        const PLAYER_TWO_TURN = 1 << 5;
        const BLUE_PIECE = 1 << 6;
        const RED_PIECE = 1 << 7;
    }
}

/// Flags every dot carries regardless of state
const ALWAYS: StyleFlags = StyleFlags::BASE
    .union(StyleFlags::GRAYED)
    .union(StyleFlags::CONTAINER);

/// Flag → class name, in render order
const FLAG_CLASSES: &[(StyleFlags, &str)] = &[
    (StyleFlags::BASE, "dot_image"),
    (StyleFlags::GRAYED, "dot_image_gray"),
    (StyleFlags::BLINK, "blink"),
    (StyleFlags::CONTAINER, "dot_container"),
];

const TURN_CLASSES: &[(StyleFlags, &str)] = &[
    (StyleFlags::PLAYER_ONE_TURN, "player_one"),
    (StyleFlags::PLAYER_TWO_TURN, "player_two"),
    (StyleFlags::BLUE_PIECE, "dot_image_blue"),
    (StyleFlags::RED_PIECE, "dot_image_red"),
];

/// Whose move it is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Turn {
    #[default]
    PlayerOne,
    PlayerTwo,
}

impl Turn {
    pub fn number(self) -> u8 {
        match self {
            Turn::PlayerOne => 1,
            Turn::PlayerTwo => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Owner {
    PlayerOne,
    Opponent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Occupancy {
    #[default]
    Empty,
    Occupied(Owner),
}

/// Layout class for a dot (e.g. `top`, `left_side`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Placement(String);

impl Placement {
    /// Accepts CSS-safe identifiers only
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let valid = !raw.is_empty()
            && raw.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        valid.then(|| Placement(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Rendering-relevant state of one dot
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellState {
    pub id: String,
    pub placement: [Option<Placement>; 2],
    pub occupancy: Occupancy,
    pub blinking: bool,
}

impl From<&Dot> for CellState {
    fn from(dot: &Dot) -> Self {
        let placement_at = |i: usize| dot.positions.get(i).and_then(|p| Placement::parse(p));
        let occupancy = if dot.has_piece.unwrap_or(false) {
            let is_one = dot.player.as_ref().map_or(false, |p| p.is_player_one());
            Occupancy::Occupied(if is_one { Owner::PlayerOne } else { Owner::Opponent })
        } else {
            Occupancy::Empty
        };

        Self {
            id: dot.id.clone(),
            placement: [placement_at(0), placement_at(1)],
            occupancy,
            blinking: dot.blink_dot.unwrap_or(false),
        }
    }
}

/// Computed appearance of a dot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellStyle {
    pub flags: StyleFlags,
    pub placement: [Option<Placement>; 2],
}

impl CellStyle {
    /// Space-separated class attribute value
    pub fn class_list(&self) -> String {
        let mut classes: Vec<&str> = FLAG_CLASSES
            .iter()
            .filter(|(flag, _)| self.flags.contains(*flag))
            .map(|(_, class)| *class)
            .collect();
        classes.extend(self.placement.iter().flatten().map(Placement::as_str));
        classes.extend(
            TURN_CLASSES
                .iter()
                .filter(|(flag, _)| self.flags.contains(*flag))
                .map(|(_, class)| *class),
        );
        classes.join(" ")
    }
}

pub fn cell_style(cell: &CellState, turn: Turn) -> CellStyle {
    let mut flags = ALWAYS;

    if cell.blinking {
        flags |= StyleFlags::BLINK;
    }

    flags |= match turn {
        Turn::PlayerOne => StyleFlags::PLAYER_ONE_TURN,
        Turn::PlayerTwo => StyleFlags::PLAYER_TWO_TURN,
    };

    flags |= match cell.occupancy {
        Occupancy::Occupied(Owner::PlayerOne) => StyleFlags::BLUE_PIECE,
        Occupancy::Occupied(Owner::Opponent) => StyleFlags::RED_PIECE,
        Occupancy::Empty => StyleFlags::empty(),
    };

    CellStyle {
        flags,
        placement: cell.placement.clone(),
    }
}
