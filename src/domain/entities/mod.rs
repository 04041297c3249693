pub mod id;
pub mod project;
