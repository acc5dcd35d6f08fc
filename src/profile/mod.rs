//! Questionnaire Profiles
//!
//! Profiles configure the header a questionnaire must open with.

pub mod registry;
pub mod schema;

pub use registry::{DEFAULT_PROFILE, LoadedProfile, ProfilePriority, ProfileRegistry};
pub use schema::{HeaderSpec, Profile, ProfileFile, ProfileMeta};
