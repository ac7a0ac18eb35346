//! Pure data structures for the menu and order domain.

pub mod menu;
pub mod order;

pub use menu::*;
pub use order::*;
