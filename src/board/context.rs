//! Board Context
//!
//! Turn indicator and click dispatch shared by all dots of a board.

use leptos::prelude::*;

use super::cell::Turn;

#[derive(Clone, Copy)]
pub struct BoardContext {
    pub player_turn: Signal<Turn>,
    /// Receives the id of the clicked dot
    pub click_in_dot: Callback<String>,
}

impl BoardContext {
    pub fn new(player_turn: Signal<Turn>, click_in_dot: Callback<String>) -> Self {
        Self { player_turn, click_in_dot }
    }
}

pub fn use_board() -> BoardContext {
    expect_context::<BoardContext>()
}
