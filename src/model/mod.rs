pub mod cost;
pub mod state;
pub mod stockroom;
