//! Integration test suite for the prdoc CLI

mod helpers;

mod test_audience;
mod test_changelog;
mod test_version;
