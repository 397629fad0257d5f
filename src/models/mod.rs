pub mod evaluation;
pub mod feedback;
pub mod goal;
pub mod metric;
pub mod profile;
