pub mod controller;
pub mod focus;
pub mod messages;
pub mod pool;
pub mod state;
