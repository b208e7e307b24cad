pub mod api;
pub mod health;
pub mod todos;

pub use todos::TodoHandler;
