pub mod feedback;
pub mod outcome;
pub mod summary;
