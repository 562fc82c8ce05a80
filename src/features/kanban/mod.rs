pub mod board_state;
pub mod components;
pub mod hooks;
pub mod reorder;

pub use board_state::*;
pub use components::*;
pub use hooks::*;
