//! Board Layout
//!
//! Empty starting board: three concentric squares of eight dots.

use crate::models::Dot;

/// Ring names, outermost first
pub const RINGS: &[&str] = &["outer", "middle", "inner"];

/// Spots around a ring, clockwise from the top-left corner
pub const SPOTS: &[&str] = &[
    "top_left", "top", "top_right", "right",
    "bottom_right", "bottom", "bottom_left", "left",
];

/// All dots, unoccupied, ids `"{ring}{spot}"` numbered from 1
pub fn empty_board() -> Vec<Dot> {
    RINGS
        .iter()
        .enumerate()
        .flat_map(|(ring_idx, ring)| {
            let layer = ring_idx as i32 + 1;
            SPOTS.iter().enumerate().map(move |(spot_idx, spot)| Dot {
                id: format!("{}{}", layer, spot_idx + 1),
                positions: vec![ring.to_string(), spot.to_string()],
                main_layer: layer,
                layers: vec![layer],
                can_join: Vec::new(),
                has_piece: None,
                player: None,
                blink_dot: None,
            })
        })
        .collect()
}

/// Highlight `id`; clicking the highlighted dot again clears it
pub fn toggle_highlight(dots: &mut [Dot], id: &str) {
    for dot in dots.iter_mut() {
        let selected = dot.id == id && !dot.blink_dot.unwrap_or(false);
        dot.blink_dot = Some(selected);
    }
}
