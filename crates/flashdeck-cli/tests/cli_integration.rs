use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn flashdeck(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("flashdeck").unwrap();
    cmd.env_remove("FLASHDECK_DATA_DIR")
        .env_remove("FLASHDECK_DEBUG_LOG")
        .arg("--data-dir")
        .arg(data_dir);
    cmd
}

fn parse_json_output(output: &[u8]) -> Value {
    serde_json::from_str(&String::from_utf8_lossy(output)).expect("Failed to parse JSON output")
}

fn run_ok(data_dir: &Path, args: &[&str]) -> Value {
    let output = flashdeck(data_dir)
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json = parse_json_output(&output);
    assert!(json["success"].as_bool().unwrap());
    json
}

fn ids(json: &Value) -> Vec<String> {
    json["data"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|card| card["id"].as_str().unwrap().to_string())
        .collect()
}

fn write_script(dir: &Path, script: &str) -> String {
    let path = dir.join("script.json");
    fs::write(&path, script).unwrap();
    path.to_str().unwrap().to_string()
}

mod list_tests {
    use super::*;

    #[test]
    fn test_fresh_data_dir_lists_sample_deck() {
        let dir = tempdir().unwrap();
        let json = run_ok(dir.path(), &["list"]);

        assert_eq!(json["data"]["count"], 8);
        assert_eq!(json["data"]["items"][0]["id"], "1");
        assert_eq!(json["data"]["items"][0]["color"], "#dbeafe");
    }

    #[test]
    fn test_list_by_tag() {
        let dir = tempdir().unwrap();
        let json = run_ok(dir.path(), &["list", "--tag", "Tutorial"]);

        assert_eq!(json["data"]["count"], 5);
        assert_eq!(ids(&json), vec!["4", "5", "6", "7", "8"]);
    }

    #[test]
    fn test_list_unknown_tag_is_empty() {
        let dir = tempdir().unwrap();
        let json = run_ok(dir.path(), &["list", "--tag", "Klingon"]);
        assert_eq!(json["data"]["count"], 0);
    }

    #[test]
    fn test_tags_start_with_all() {
        let dir = tempdir().unwrap();
        let json = run_ok(dir.path(), &["tags"]);

        assert_eq!(
            json["data"]["items"],
            serde_json::json!(["All", "Chinese", "Japanese", "English", "Tutorial"])
        );
    }

    #[test]
    fn test_data_dir_from_env() {
        let dir = tempdir().unwrap();
        Command::cargo_bin("flashdeck")
            .unwrap()
            .env("FLASHDECK_DATA_DIR", dir.path())
            .args(["add", "--front", "gato", "--back", "cat"])
            .assert()
            .success();

        assert!(dir.path().join("cards.json").exists());
    }
}

mod card_tests {
    use super::*;

    #[test]
    fn test_add_appends_and_persists() {
        let dir = tempdir().unwrap();
        let json = run_ok(
            dir.path(),
            &["add", "--front", "hola", "--back", "hello", "--tag", "spanish"],
        );
        assert_eq!(json["data"]["front"], "hola");
        assert_eq!(json["data"]["tag"], "spanish");
        assert_eq!(json["data"]["color"], "#ffffff");

        let list = run_ok(dir.path(), &["list"]);
        assert_eq!(list["data"]["count"], 9);
        assert_eq!(list["data"]["items"][8]["front"], "hola");
    }

    #[test]
    fn test_add_without_tag_uses_default() {
        let dir = tempdir().unwrap();
        let json = run_ok(dir.path(), &["add", "--front", "Q", "--back", "A"]);
        assert_eq!(json["data"]["tag"], "Custom");
    }

    #[test]
    fn test_add_blank_front_is_rejected() {
        let dir = tempdir().unwrap();
        flashdeck(dir.path())
            .args(["add", "--front", "   ", "--back", "hello"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("front is empty"));

        assert!(!dir.path().join("cards.json").exists());
    }

    #[test]
    fn test_edit_keeps_identity() {
        let dir = tempdir().unwrap();
        let json = run_ok(
            dir.path(),
            &["edit", "--id", "3", "--back", "苹果", "--color", "#fef3c7"],
        );

        assert_eq!(json["data"]["id"], "3");
        assert_eq!(json["data"]["front"], "Apple");
        assert_eq!(json["data"]["back"], "苹果");
        assert_eq!(json["data"]["color"], "#fef3c7");
    }

    #[test]
    fn test_edit_unknown_card_fails() {
        let dir = tempdir().unwrap();
        flashdeck(dir.path())
            .args(["edit", "--id", "nope", "--front", "x"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("\"success\":false"));
    }

    #[test]
    fn test_delete_removes_card() {
        let dir = tempdir().unwrap();
        let json = run_ok(dir.path(), &["delete", "--id", "4"]);
        assert_eq!(json["data"]["deleted"], "4");

        let list = run_ok(dir.path(), &["list"]);
        assert_eq!(list["data"]["count"], 7);
        assert!(!ids(&list).contains(&"4".to_string()));
    }

    #[test]
    fn test_delete_unknown_card_fails() {
        let dir = tempdir().unwrap();
        flashdeck(dir.path())
            .args(["delete", "--id", "missing"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Card not found: missing"));
    }

    #[test]
    fn test_seeded_shuffle_is_reproducible() {
        let first = tempdir().unwrap();
        let second = tempdir().unwrap();

        let a = ids(&run_ok(first.path(), &["shuffle", "--seed", "7"]));
        let b = ids(&run_ok(second.path(), &["shuffle", "--seed", "7"]));
        assert_eq!(a, b);

        let mut sorted = a.clone();
        sorted.sort();
        assert_eq!(sorted, vec!["1", "2", "3", "4", "5", "6", "7", "8"]);

        // The shuffled order is what gets stored
        assert_eq!(ids(&run_ok(first.path(), &["list"])), a);
    }
}

mod import_tests {
    use super::*;

    #[test]
    fn test_import_rows() {
        let dir = tempdir().unwrap();
        let rows = dir.path().join("rows.json");
        fs::write(
            &rows,
            r#"[["perro", "dog"], ["", "skipped"], ["tres", 3], ["only one cell"]]"#,
        )
        .unwrap();

        let json = run_ok(dir.path(), &["import", rows.to_str().unwrap()]);
        assert_eq!(json["data"]["imported"], 2);
        assert_eq!(json["data"]["total"], 10);

        let imported = run_ok(dir.path(), &["list", "--tag", "Imported"]);
        assert_eq!(imported["data"]["items"][1]["back"], "3");
    }

    #[test]
    fn test_malformed_import_leaves_cards_untouched() {
        let dir = tempdir().unwrap();
        let rows = dir.path().join("rows.json");
        fs::write(&rows, "this is not a sheet").unwrap();

        flashdeck(dir.path())
            .args(["import", rows.to_str().unwrap()])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Import"));

        assert_eq!(run_ok(dir.path(), &["list"])["data"]["count"], 8);
    }
}

mod settings_tests {
    use super::*;

    #[test]
    fn test_settings_show_defaults() {
        let dir = tempdir().unwrap();
        let json = run_ok(dir.path(), &["settings", "show"]);

        assert_eq!(json["data"]["font_size"], 24);
        assert_eq!(json["data"]["panel_color"], "#ffffff");
        assert_eq!(json["data"]["text_color"], "#1f2937");
    }

    #[test]
    fn test_dark_panel_switches_text_color() {
        let dir = tempdir().unwrap();
        run_ok(
            dir.path(),
            &["settings", "set", "--panel-color", "#1f2937", "--font-size", "100"],
        );

        let json = run_ok(dir.path(), &["settings", "show"]);
        assert_eq!(json["data"]["text_color"], "#ffffff");
        assert_eq!(json["data"]["font_size"], 64);
    }
}

mod replay_tests {
    use super::*;

    const SWIPE_LEFT: &str = r#"[
        {"at_ms": 0, "kind": "down"},
        {"at_ms": 40, "kind": "move", "dx": -120, "dy": 0},
        {"at_ms": 80, "kind": "up"}
    ]"#;

    const SWIPE_UP: &str = r#"[
        {"at_ms": 0, "kind": "down"},
        {"at_ms": 40, "kind": "move", "dx": -30, "dy": -100},
        {"at_ms": 80, "kind": "up"}
    ]"#;

    #[test]
    fn test_swipe_left_advances() {
        let dir = tempdir().unwrap();
        let script = write_script(dir.path(), SWIPE_LEFT);
        let json = run_ok(dir.path(), &["replay", &script]);

        assert_eq!(json["data"]["steps"][2]["action"], "Advance");
        assert_eq!(json["data"]["active_card"]["id"], "2");
        assert_eq!(json["data"]["status"]["position"], 2);
        assert_eq!(json["data"]["status"]["total"], 8);
    }

    #[test]
    fn test_replay_within_tag() {
        let dir = tempdir().unwrap();
        let script = write_script(dir.path(), SWIPE_LEFT);
        let json = run_ok(dir.path(), &["replay", &script, "--tag", "Tutorial"]);

        assert_eq!(json["data"]["active_card"]["id"], "5");
        assert_eq!(json["data"]["status"]["filter"], "Tutorial");
    }

    #[test]
    fn test_long_press_requests_edit() {
        let dir = tempdir().unwrap();
        let script = write_script(
            dir.path(),
            r#"[{"at_ms": 0, "kind": "down"}, {"at_ms": 5000, "kind": "up"}]"#,
        );
        let json = run_ok(dir.path(), &["replay", &script]);
        let steps = json["data"]["steps"].as_array().unwrap();

        assert_eq!(steps.len(), 3);
        assert!(steps[1].get("event").is_none());
        assert_eq!(steps[1]["at_ms"], 600);
        assert_eq!(steps[2]["at_ms"], 5000);
        assert_eq!(steps[1]["action"], "Edit");
        assert_eq!(steps[1]["effects"][0]["haptic"]["duration_ms"], 50);
        assert_eq!(steps[1]["effects"][1]["open_editor"]["editing"]["id"], "1");
        assert!(steps[2].get("action").is_none());
        assert_eq!(json["data"]["active_card"]["id"], "1");
    }

    #[test]
    fn test_pointer_leave_after_deadline_reports_edit() {
        let dir = tempdir().unwrap();
        let script = write_script(
            dir.path(),
            r#"[{"at_ms": 100, "kind": "down"}, {"at_ms": 900, "kind": "leave"}]"#,
        );
        let json = run_ok(dir.path(), &["replay", &script]);
        let steps = json["data"]["steps"].as_array().unwrap();

        assert_eq!(steps.len(), 3);
        assert_eq!(steps[1]["at_ms"], 700);
        assert_eq!(steps[1]["action"], "Edit");
        assert_eq!(steps[2]["action"], "Cancel");
        assert_eq!(steps[2]["phase"], "Idle");
        assert_eq!(json["data"]["total_cards"], 8);
    }

    #[test]
    fn test_replay_is_dry_run_unless_saved() {
        let dir = tempdir().unwrap();
        let script = write_script(dir.path(), SWIPE_UP);

        let json = run_ok(dir.path(), &["replay", &script]);
        assert_eq!(json["data"]["steps"][2]["action"], "Delete");
        assert_eq!(json["data"]["total_cards"], 7);
        assert_eq!(run_ok(dir.path(), &["list"])["data"]["count"], 8);

        run_ok(dir.path(), &["replay", &script, "--save"]);
        assert_eq!(run_ok(dir.path(), &["list"])["data"]["count"], 7);
    }

    #[test]
    fn test_bad_script_fails() {
        let dir = tempdir().unwrap();
        let script = write_script(dir.path(), r#"{"kind": "down"}"#);
        flashdeck(dir.path())
            .args(["replay", &script])
            .assert()
            .failure()
            .stderr(predicate::str::contains("JSON array of pointer events"));
    }
}

#[test]
fn test_completions() {
    let dir = tempdir().unwrap();
    flashdeck(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("flashdeck"));
}
