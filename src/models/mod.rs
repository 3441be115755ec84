pub mod chat;
pub mod ids;
pub mod turn;

pub use chat::*;
pub use ids::*;
pub use turn::*;
