pub mod compose;
pub mod identify;
