pub mod pointer;
pub mod scroll;

pub use pointer::{wire_card_hover, wire_heart_burst};
pub use scroll::wire_parallax;
