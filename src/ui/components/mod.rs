pub mod header;
pub mod keyboard_help;
pub mod menu;
pub mod modal;
pub mod progress_bar;
pub mod rewards;
pub mod tutorial;
pub mod word_board;
