//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Saves are atomic upserts
//! (`INSERT ... ON CONFLICT ... DO UPDATE`) keyed by the entity's natural
//! key plus the demo PIN, with empty incoming text fields preserving the
//! stored values.

pub mod competitor_repo;
pub mod content_strategy_repo;
pub mod instagram_account_repo;
pub mod project_file_repo;
pub mod project_repo;
pub mod studio_repo;

pub use competitor_repo::CompetitorRepo;
pub use content_strategy_repo::ContentStrategyRepo;
pub use instagram_account_repo::InstagramAccountRepo;
pub use project_file_repo::ProjectFileRepo;
pub use project_repo::ProjectRepo;
pub use studio_repo::StudioRepo;
