//! Board Page
//!
//! Owns the dots and the turn indicator; dots report clicks back here.

use leptos::prelude::*;

use crate::board::context::BoardContext;
use crate::board::layout::{empty_board, toggle_highlight};
use crate::board::{CellState, Turn};
use crate::components::BoardDot;

#[component]
pub fn BoardPage() -> impl IntoView {
    let dots = RwSignal::new(empty_board());
    let player_turn = Signal::stored(Turn::PlayerOne);

    let click_in_dot = Callback::new(move |id: String| {
        log::debug!("[Board] Dot {} clicked", id);
        dots.update(|dots| toggle_highlight(dots, &id));
    });
    provide_context(BoardContext::new(player_turn, click_in_dot));

    view! {
        <div class="board-page">
            <p class="turn-indicator">{move || format!("Vez do jogador {}", player_turn.get().number())}</p>
            <div class="board">
                <For
                    each=move || dots.with(|dots| dots.iter().map(CellState::from).collect::<Vec<_>>())
                    key=|cell| cell.clone()
                    children=|cell| view! { <BoardDot cell=cell /> }
                />
            </div>
        </div>
    }
}
