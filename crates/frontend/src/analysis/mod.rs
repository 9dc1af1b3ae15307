//! Resume Analysis - single-page submission form

pub mod model;
pub mod state;
pub mod view;
pub mod view_model;

pub use view::AnalysisPage;
