#![allow(dead_code)]

use std::path::PathBuf;

pub fn repo_root_from_crate() -> PathBuf {
    // crates/greg-core -> repo root (two levels up)
    let crate_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    crate_dir
        .parent()
        .and_then(|p| p.parent())
        .map(|p| p.to_path_buf())
        .expect("resolve repo root from CARGO_MANIFEST_DIR")
}

pub fn domain_config_dir() -> PathBuf {
    repo_root_from_crate().join("config/domains")
}

pub fn fixture_path(rel: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(rel)
}

pub fn normalize_sql(s: &str) -> String {
    s.lines()
        .map(|l| l.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
