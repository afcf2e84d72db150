//! Test module organization
//!
//! This module re-exports test helpers for use in test files.

mod helpers;

#[allow(unused_imports)]
pub use helpers::{
    build_test_config, build_test_config_with_empty_credentials, DUMMY_ACCESS_KEY, DUMMY_API_KEY,
    DUMMY_PASSPHRASE, DUMMY_SECRET_KEY, STATUS_PATH,
};
