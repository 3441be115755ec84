//! API endpoint handlers.
//!
//! One module per resource; handlers stay thin and delegate to the
//! conversation service.

pub mod chat;
pub mod conversations;
pub mod health;
