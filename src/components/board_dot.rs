//! Board Dot Component
//!
//! One clickable dot of the board.

use leptos::prelude::*;

use crate::board::{cell_style, CellState};
use crate::board::context::use_board;

/// Renders a dot from its state and the board's current turn.
/// Clicking reports the dot id to the board.
#[component]
pub fn BoardDot(cell: CellState) -> impl IntoView {
    let board = use_board();
    let id = cell.id.clone();
    let label = cell.id.clone();
    let class = move || cell_style(&cell, board.player_turn.get()).class_list();

    view! {
        <div on:click=move |_| board.click_in_dot.run(id.clone())>
            <button type="button" class=class title="Botão">
                <div>
                    <strong>{label}</strong>
                </div>
            </button>
        </div>
    }
}
