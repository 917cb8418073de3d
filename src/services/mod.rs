pub mod page_service;
pub mod render_service;
pub mod response_matcher;
