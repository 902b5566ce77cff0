//! End-to-End CLI Tests for aegis

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command pointing to the aegis binary
fn aegis() -> Command {
    cargo_bin_cmd!("aegis")
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        aegis()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("render"))
            .stdout(predicate::str::contains("check"))
            .stdout(predicate::str::contains("content"));
    }

    #[test]
    fn shows_version() {
        aegis()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn rejects_unknown_subcommand() {
        aegis().arg("deploy").assert().failure();
    }
}

// ============================================
// render
// ============================================

mod render {
    use super::*;

    #[test]
    fn writes_page_to_out_path() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("public").join("index.html");

        aegis()
            .current_dir(temp.path())
            .args(["render", "--out"])
            .arg(&out)
            .assert()
            .success()
            .stdout(predicate::str::contains("index.html"))
            .stdout(predicate::str::contains("bytes"));

        let html = std::fs::read_to_string(&out).expect("read output");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"id="technology""#));
    }

    #[test]
    fn defaults_to_dist_index() {
        let temp = TempDir::new().expect("temp dir");

        aegis().current_dir(temp.path()).arg("render").assert().success();

        assert!(temp.path().join("dist").join("index.html").is_file());
    }

    #[test]
    fn reads_config_and_flag_overrides_title() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(
            temp.path().join("aegis.toml"),
            r#"
[page]
title = "From Config"
lang = "en-GB"

[export]
output = "site/home.html"
"#,
        )
        .expect("write config");

        aegis()
            .current_dir(temp.path())
            .args(["render", "--title", "From Flag"])
            .assert()
            .success();

        let html = std::fs::read_to_string(temp.path().join("site").join("home.html")).expect("read output");
        assert!(html.contains("<title>From Flag</title>"));
        assert!(html.contains(r#"lang="en-GB""#));
    }

    #[test]
    fn title_with_attribute_text_still_renders() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("index.html");

        aegis()
            .current_dir(temp.path())
            .args(["render", "--title", r##"See our id="x" a href="#pricing" deal"##, "--out"])
            .arg(&out)
            .assert()
            .success();

        let html = std::fs::read_to_string(&out).expect("read output");
        assert!(html.contains("See our id"));
    }

    #[test]
    fn invalid_config_falls_back_to_defaults() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(temp.path().join("aegis.toml"), "[page\n").expect("write config");

        aegis()
            .current_dir(temp.path())
            .env_remove("RUST_LOG")
            .arg("render")
            .assert()
            .success()
            .stderr(predicate::str::contains("Failed to parse"));

        assert!(temp.path().join("dist").join("index.html").is_file());
    }

    #[test]
    fn unwritable_output_fails() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("taken");
        std::fs::create_dir(&out).expect("create dir");

        aegis()
            .current_dir(temp.path())
            .args(["render", "--out"])
            .arg(&out)
            .assert()
            .failure()
            .stderr(predicate::str::contains("[aegis] Error:"));
    }
}

// ============================================
// check / content
// ============================================

mod inspect {
    use super::*;

    #[test]
    fn check_passes_on_rendered_page() {
        let temp = TempDir::new().expect("temp dir");

        aegis()
            .current_dir(temp.path())
            .arg("check")
            .assert()
            .success()
            .stdout(predicate::str::contains("ok"));
    }

    #[test]
    fn check_warns_on_missing_explicit_config() {
        let temp = TempDir::new().expect("temp dir");

        aegis()
            .current_dir(temp.path())
            .env_remove("RUST_LOG")
            .args(["check", "--config", "nowhere.toml"])
            .assert()
            .success()
            .stderr(predicate::str::contains("nowhere.toml not found"));
    }

    #[test]
    fn content_dumps_json() {
        let output = aegis().args(["content"]).assert().success().get_output().stdout.clone();

        let json: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
        assert_eq!(json["company"], "Aegis Applied Computing");
        assert_eq!(json["nav_links"].as_array().map(Vec::len), Some(4));
        assert_eq!(json["contact"]["email"], "slam@mba2027.hbs.edu");
    }

    #[test]
    fn content_pretty_prints() {
        aegis()
            .args(["content", "--pretty"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\n  \"company\": \"Aegis Applied Computing\""));
    }

    #[test]
    fn log_level_flag_is_global() {
        aegis()
            .args(["content", "--log-level", "debug"])
            .env_remove("RUST_LOG")
            .assert()
            .success();
    }
}
