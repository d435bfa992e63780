pub mod collision;
pub mod input;
pub mod match_flow;
pub mod movement;
pub mod scoring;

pub use collision::*;
pub use input::*;
pub use match_flow::*;
pub use movement::*;
pub use scoring::*;
