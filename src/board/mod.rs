//! Board Presentation
//!
//! Visual state of board dots. Game rules live with the game server.

pub mod cell;
pub mod context;
pub mod layout;

pub use cell::{cell_style, CellState, CellStyle, Occupancy, Owner, Placement, StyleFlags, Turn};
pub use context::BoardContext;
