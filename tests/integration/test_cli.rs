//! Test: grammar-drift binary end to end
//!
//! Each test copies the demo fixtures into an isolated workspace and runs the
//! compiled binary there.

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn fixture_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/demo")
}

fn with_demo_workspace<F>(test: F)
where
    F: FnOnce(&Path),
{
    let temp_dir = TempDir::new().expect("create temp dir");
    for relative in ["grammar/Demo.g4", "include/Parser.h", "src/Parser.cpp"] {
        let target = temp_dir.path().join(relative);
        std::fs::create_dir_all(target.parent().unwrap()).expect("create fixture dir");
        std::fs::copy(fixture_root().join(relative), &target).expect("copy fixture");
    }
    test(temp_dir.path());
}

fn run_cli(workspace: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_grammar-drift"))
        .args(args)
        .current_dir(workspace)
        .env_remove("GD_DEBUG")
        .output()
        .expect("run grammar-drift CLI");

    let code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (code, stdout, stderr)
}

const DEMO_INPUTS: [&str; 6] = [
    "--grammar",
    "grammar/Demo.g4",
    "--header",
    "include/Parser.h",
    "--source",
    "src/Parser.cpp",
];

#[test]
fn check_prints_stubs_for_missing_rules() {
    with_demo_workspace(|workspace| {
        let mut args = vec!["check"];
        args.extend(DEMO_INPUTS);
        let (code, stdout, stderr) = run_cli(workspace, &args);

        assert_eq!(code, 0, "stderr: {stderr}");
        assert!(stdout.starts_with("---Analysis Complete---\n"));
        assert!(stdout.contains(
            "---Missing Method Declarations (for include/Parser.h)---\n    std::unique_ptr<Block> block();\n"
        ));
        assert!(stdout.contains("---Missing Method Implementations (for src/Parser.cpp)---\n"));
        assert!(stdout.contains("    // TODO: Implement parsing logic for expr_statement\n"));
    });
}

#[test]
fn check_fail_on_drift_exits_seven() {
    with_demo_workspace(|workspace| {
        let mut args = vec!["check", "--fail-on-drift"];
        args.extend(DEMO_INPUTS);
        let (code, _, _) = run_cli(workspace, &args);
        assert_eq!(code, 7);
    });
}

#[test]
fn check_json_output() {
    with_demo_workspace(|workspace| {
        let mut args = vec!["check", "--json"];
        args.extend(DEMO_INPUTS);
        let (code, stdout, _) = run_cli(workspace, &args);

        assert_eq!(code, 0);
        let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
        assert_eq!(json["status"], "success");
        assert_eq!(json["code"], "DRIFT_DETECTED");
        assert_eq!(
            json["data"]["discrepancies"]["missing_implementations"],
            serde_json::json!(["block", "expr_statement"])
        );
    });
}

#[test]
fn check_in_sync_after_adding_methods() {
    with_demo_workspace(|workspace| {
        let header = workspace.join("include/Parser.h");
        let content = std::fs::read_to_string(&header).unwrap().replace(
            "    std::unique_ptr<Expr> expr();\n",
            "    std::unique_ptr<Expr> expr();\n    std::unique_ptr<Block> block();\n",
        );
        std::fs::write(&header, content).unwrap();

        let source = workspace.join("src/Parser.cpp");
        let mut content = std::fs::read_to_string(&source).unwrap();
        content.push_str("\nstd::unique_ptr<Block> Parser::block() { return nullptr; }\n");
        content.push_str(
            "std::unique_ptr<ExprStatement> Parser::expr_statement() { return nullptr; }\n",
        );
        std::fs::write(&source, content).unwrap();

        let mut args = vec!["check", "--fail-on-drift"];
        args.extend(DEMO_INPUTS);
        let (code, stdout, _) = run_cli(workspace, &args);

        assert_eq!(code, 0);
        assert_eq!(
            stdout,
            "The parser appears to be in sync with the grammar. No missing items found.\n"
        );
    });
}

#[test]
fn check_missing_grammar_exits_three() {
    with_demo_workspace(|workspace| {
        let (code, stdout, stderr) = run_cli(workspace, &["check", "--grammar", "nope.g4"]);

        assert_eq!(code, 3);
        assert!(stdout.is_empty());
        assert!(stderr.contains("nope.g4 not found."));
        assert_eq!(stderr.lines().count(), 1, "stderr: {stderr}");
    });
}

#[test]
fn check_reads_paths_from_settings() {
    with_demo_workspace(|workspace| {
        let config_dir = workspace.join(".grammar-drift");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(
            config_dir.join("settings.toml"),
            "[paths]\ngrammar = \"grammar/Demo.g4\"\n",
        )
        .unwrap();

        let (code, stdout, stderr) = run_cli(workspace, &["check"]);
        assert_eq!(code, 0, "stderr: {stderr}");
        assert!(stdout.contains("std::unique_ptr<Block> block();"));
    });
}

#[test]
fn symbols_lists_rules_and_tokens() {
    with_demo_workspace(|workspace| {
        let (code, stdout, _) =
            run_cli(workspace, &["symbols", "--grammar", "grammar/Demo.g4", "--json"]);

        assert_eq!(code, 0);
        let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
        assert_eq!(
            json["data"]["rules"],
            serde_json::json!(["block", "expr", "expr_statement", "program", "statement"])
        );
        assert_eq!(json["data"]["tokens"], serde_json::json!(["ID", "NUMBER", "WS"]));
    });
}

#[test]
fn init_then_config_round_trip() {
    with_demo_workspace(|workspace| {
        let (code, stdout, _) = run_cli(workspace, &["init"]);
        assert_eq!(code, 0);
        assert!(stdout.contains("settings.toml"));
        assert!(workspace.join(".grammar-drift/settings.toml").is_file());

        let (code, _, stderr) = run_cli(workspace, &["init"]);
        assert_eq!(code, 6);
        assert!(stderr.contains("--force"));

        let (code, stdout, _) = run_cli(workspace, &["config"]);
        assert_eq!(code, 0);
        assert!(stdout.contains("[paths]"));
        assert!(stdout.contains("owning_pointer = \"std::unique_ptr\""));
    });
}

#[test]
fn init_force_replaces_broken_settings() {
    with_demo_workspace(|workspace| {
        let config_dir = workspace.join(".grammar-drift");
        std::fs::create_dir_all(&config_dir).unwrap();
        let settings_path = config_dir.join("settings.toml");
        std::fs::write(&settings_path, "[extraction]\nsignature_style = \"sideways\"\n").unwrap();

        let (code, _, _) = run_cli(workspace, &["check"]);
        assert_eq!(code, 6);

        let (code, _, stderr) = run_cli(workspace, &["init", "--force"]);
        assert_eq!(code, 0, "stderr: {stderr}");
        let content = std::fs::read_to_string(&settings_path).unwrap();
        assert!(content.contains("signature_style = \"leading\""));

        let (code, _, _) = run_cli(workspace, &["config"]);
        assert_eq!(code, 0);
    });
}

#[test]
fn symbols_warning_stays_off_stdout() {
    with_demo_workspace(|workspace| {
        std::fs::write(workspace.join("empty.g4"), "grammar Empty;\n").unwrap();

        let (code, stdout, stderr) = run_cli(workspace, &["symbols", "--grammar", "empty.g4"]);
        assert_eq!(code, 0);
        assert!(stderr.contains("No rules or tokens found in grammar"));
        assert!(!stdout.contains("No rules or tokens found"));
    });
}
