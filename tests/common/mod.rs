#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn folio_cmd() -> Command {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.env_remove("FOLIO_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// `folio -C <root> ...`
pub fn folio_in(root: &Path) -> Command {
    let mut cmd = folio_cmd();
    cmd.arg("-C").arg(root);
    cmd
}

pub fn init_site(root: &Path) {
    folio_cmd()
        .arg("init")
        .arg(root)
        .arg("--name")
        .arg("V01")
        .assert()
        .success();
}
