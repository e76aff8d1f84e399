pub mod build_docs;
pub mod clean;
pub mod create_agent;
pub mod regenerate;
pub mod stats;
pub mod strip_emoji;
pub mod update_version;
pub mod validate;
