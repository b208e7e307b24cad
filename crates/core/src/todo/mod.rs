mod types;

pub use types::{parse_id, Todo};
