//! Pages
//!
//! One component per route.

mod board;
mod cadastro;
mod image_list;
mod login;
mod theme_create;

pub use board::BoardPage;
pub use cadastro::CadastroPage;
pub use image_list::ImageListPage;
pub use login::LoginPage;
pub use theme_create::ThemeCreatePage;
