//! Social-graph client for the instagram-api function.
//!
//! Two data sources behind one interface: a live Instagram Graph API client
//! (when an access token is configured) and a canned demo dataset. Both
//! yield [`formaflow_core::social::Post`] lists, so the analytics the demo
//! derives from them (type mix, top posts, timing) are computed identically
//! by `formaflow_core::social` regardless of source.

pub mod client;
pub mod mock;
pub mod types;

pub use client::{InstagramClient, InstagramConfig, InstagramError};
pub use types::{CompetitorProfile, Profile};
