//! Integration tests for rmchars

mod cli_binary;
mod dry_run;
mod rerun;
mod test_utils;
