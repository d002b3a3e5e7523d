pub mod api;
pub mod refine;
pub mod ui;
