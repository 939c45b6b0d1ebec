//! Integration test harness for the vsp CLI

#[path = "integration/helpers.rs"]
mod helpers;

#[path = "integration/cli_test.rs"]
mod cli_test;
#[path = "integration/info_test.rs"]
mod info_test;
#[path = "integration/ls_test.rs"]
mod ls_test;
#[path = "integration/play_test.rs"]
mod play_test;
