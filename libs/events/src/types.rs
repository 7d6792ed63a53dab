//! Well-known operation verbs and resource types.
//!
//! Producers should prefer these constants, but resolution accepts any string.

/// Operation verbs.
pub mod operations {
    pub const CREATE: &str = "create";
    pub const UPDATE: &str = "update";
    pub const DELETE: &str = "delete";
    pub const PULL: &str = "pull";
    pub const PUSH: &str = "push";
}

/// Resource categories.
pub mod resource_types {
    pub const ARTIFACT: &str = "artifact";
    pub const TAG: &str = "tag";
    pub const REPOSITORY: &str = "repository";
    pub const PROJECT: &str = "project";
    pub const USER: &str = "user";
    pub const ROBOT: &str = "robot";
    pub const CONFIGURATION: &str = "configuration";
}
