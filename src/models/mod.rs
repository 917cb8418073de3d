pub mod category;
pub mod chat;
pub mod job;
pub mod language;
pub mod page;
