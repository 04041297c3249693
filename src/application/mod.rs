pub mod app_error;
pub mod interactors;
pub mod interface;
