pub mod categories;
pub mod jobs;
pub mod navigation;
pub mod regions;
