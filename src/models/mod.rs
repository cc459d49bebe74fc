//! Static display data: the owner profile and the project catalog.

mod profile;
mod project;

pub use profile::{Profile, SocialLink, OWNER_EMAIL, OWNER_NAME, PROFILE};
pub use project::{
    find_detail, ProjectDetail, ProjectSummary, PROJECT_DETAILS, PROJECT_SUMMARIES,
};
