pub mod api_utils;
pub mod components;
pub mod text_utils;
