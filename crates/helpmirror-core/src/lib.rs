pub mod config;
pub mod logging;

pub mod extract;
pub mod fetch;
pub mod filename;
pub mod manifest;
pub mod relink;
pub mod report;
pub mod validate;
