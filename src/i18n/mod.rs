pub mod categories;
pub mod chatbot;
pub mod header;
pub mod home;
pub mod job_card;
pub mod sidebar;
pub mod state_selector;
