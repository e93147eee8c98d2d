//! Frontend Models
//!
//! Data structures matching backend entities. Field names follow the
//! backend's JSON contract.

use serde::{Deserialize, Serialize};

/// New account sent to `usuarios/create`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub nome: String,
    pub email: String,
    pub senha: String,
    #[serde(rename = "confirmarSenha")]
    pub confirmar_senha: String,
    /// Starting coin balance, always assigned client-side
    pub moedas: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tema {
    pub tmanome: String,
    pub tmapreco: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icone {
    pub icnnome: String,
    pub icnurl: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Imagem {
    pub imgnome: String,
    pub imgurl: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Peca {
    pub pcanome: String,
    pub pcaurl: String,
}

/// Theme with its icon, board image and piece, created in one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeBundle {
    pub tema: Tema,
    pub icone: Icone,
    pub imagem: Imagem,
    pub peca: Peca,
}

/// Image belonging to a theme (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub imgcodigo: u32,
    pub imgnome: String,
    pub imgurl: String,
    pub tmacodigo: u32,
}

/// Owner marker as sent by the game server. Any JSON value is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlayerTag {
    Number(f64),
    Other(serde_json::Value),
}

impl PlayerTag {
    /// Only the number 1 is player one; the string `"1"` is not.
    pub fn is_player_one(&self) -> bool {
        matches!(self, PlayerTag::Number(n) if *n == 1.0)
    }
}

/// One board square as computed by the game state owner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dot {
    pub id: String,
    #[serde(default)]
    pub positions: Vec<String>,
    #[serde(default)]
    pub main_layer: i32,
    #[serde(default)]
    pub layers: Vec<i32>,
    #[serde(default)]
    pub can_join: Vec<i32>,
    #[serde(default)]
    pub has_piece: Option<bool>,
    #[serde(default)]
    pub player: Option<PlayerTag>,
    #[serde(default)]
    pub blink_dot: Option<bool>,
}
