pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod types;

// Re-export the core rules surface.
pub use board::*;
pub use error::*;
pub use game::*;
pub use movegen::*;
pub use perft::perft;
pub use types::*;
