//! Almanac calendar service - integration test support.
//!
//! This crate re-exports the workspace crates so integration tests can use
//! `almanac_test::` paths.

pub mod component {
    pub use almanac_calendar::*;
    pub use almanac_core::error as core_error;
    pub use almanac_core::types;
    pub use almanac_core::util;

    // Re-export config from both core and app
    pub mod config {
        pub use almanac_app::config::{ConfigHandler, get_config_from_depot};
        pub use almanac_core::config::*;
    }
}

pub mod app {
    pub use almanac_app::*;

    pub mod api {
        pub use almanac_app::app::api::*;
    }
}
