// tests/common/mod.rs
#![allow(dead_code)]

use assert_cmd::Command;

pub mod collector;

pub fn probe_cmd() -> Command {
    let mut cmd = Command::cargo_bin("syslog-probe").unwrap();
    cmd.env("LC_ALL", "C")
        .env("LANG", "C")
        .env_remove("INJECT_UUID")
        .env_remove("SYSLOG_HOST")
        .env_remove("RUST_LOG");
    cmd
}
