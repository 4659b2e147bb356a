pub mod competitor;
pub mod content_strategy;
pub mod instagram_account;
pub mod project;
pub mod project_file;
pub mod studio;
