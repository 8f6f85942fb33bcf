//! End-to-end CLI integration tests for the `cpc` binary.
//!
//! Each test runs the binary as a subprocess via `assert_cmd`, inside its
//! own temporary directory so no `.cpc/` from the host leaks in.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Build a `Command` targeting the cargo-built `cpc` binary.
fn cpc(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cpc").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("CPC_DIR")
        .env_remove("CPC_JSON")
        .env_remove("CPC_COLOR")
        .env("NO_COLOR", "1");
    cmd
}

fn json_output(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

fn write_config(dir: &TempDir, yaml: &str) {
    let cpc_dir = dir.path().join(".cpc");
    std::fs::create_dir_all(&cpc_dir).unwrap();
    std::fs::write(cpc_dir.join("config.yaml"), yaml).unwrap();
}

// ---------------------------------------------------------------------------
// Forward translation
// ---------------------------------------------------------------------------

#[test]
fn parse_conjunction_json() {
    let tmp = TempDir::new().unwrap();
    let json = json_output(cpc(&tmp).args(["parse", "Maria estuda e João trabalha", "--json"]));

    assert_eq!(json["formula"], "(P ∧ Q)");
    let mapping = json["mapping"].as_array().unwrap();
    assert_eq!(mapping.len(), 2);
    assert_eq!(mapping[0]["variable"], "P");
    assert_eq!(mapping[0]["clause"], "Maria estuda");
    assert_eq!(mapping[1]["variable"], "Q");
    assert_eq!(mapping[1]["clause"], "João trabalha");
}

#[test]
fn parse_implication_text() {
    let tmp = TempDir::new().unwrap();
    cpc(&tmp)
        .args(["parse", "Se", "chove", "então", "a", "grama", "fica", "molhada"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("P → Q\n"))
        .stdout(predicate::str::contains("a grama fica molhada"))
        .stdout(predicate::str::contains("Variable"));
}

#[test]
fn parse_quiet_prints_only_formula() {
    let tmp = TempDir::new().unwrap();
    cpc(&tmp)
        .args(["-q", "nl", "não chove"])
        .assert()
        .success()
        .stdout("¬P\n");
}

#[test]
fn parse_repeated_clause_reuses_variable() {
    let tmp = TempDir::new().unwrap();
    let json = json_output(cpc(&tmp).args(["--json", "parse", "A ocorre e a ocorre"]));
    assert_eq!(json["formula"], "(P ∧ P)");
    assert_eq!(json["mapping"].as_array().unwrap().len(), 1);
}

#[test]
fn parse_empty_sentence_fails() {
    let tmp = TempDir::new().unwrap();
    cpc(&tmp)
        .args(["parse", "   "])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("input is empty"));
}

#[test]
fn parse_bad_conditional_reports_shapes() {
    let tmp = TempDir::new().unwrap();
    cpc(&tmp)
        .args(["parse", "chove então se molha"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Se X então Y"));
}

#[test]
fn parse_lone_negation_explains_usage() {
    let tmp = TempDir::new().unwrap();
    cpc(&tmp)
        .args(["parse", "chove e não"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("as in 'não X'"));
}

#[test]
fn errors_are_json_with_json_flag() {
    let tmp = TempDir::new().unwrap();
    let output = cpc(&tmp).args(["--json", "parse", ""]).output().unwrap();
    assert!(!output.status.success());
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"], "input is empty");
}

// ---------------------------------------------------------------------------
// Reverse translation
// ---------------------------------------------------------------------------

#[test]
fn render_with_meaning_flags() {
    let tmp = TempDir::new().unwrap();
    cpc(&tmp)
        .args([
            "render",
            "P → Q",
            "-m",
            "P=chove",
            "-m",
            "Q=a grama fica molhada",
        ])
        .assert()
        .success()
        .stdout("Se chove, então a grama fica molhada\n");
}

#[test]
fn render_prompts_on_stdin() {
    let tmp = TempDir::new().unwrap();
    cpc(&tmp)
        .args(["render", "¬P ∨ Q"])
        .write_stdin("chove\nneva\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Digite o significado de P:"))
        .stderr(predicate::str::contains("Digite o significado de Q:"))
        .stdout("não chove ou neva\n");
}

#[test]
fn render_blank_answer_is_missing_meaning() {
    let tmp = TempDir::new().unwrap();
    cpc(&tmp)
        .args(["render", "P"])
        .write_stdin("\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no meaning given for P"));
}

#[test]
fn render_no_prompt_fails_on_missing_meaning() {
    let tmp = TempDir::new().unwrap();
    cpc(&tmp)
        .args(["render", "P -> Q", "-m", "P=chove", "--no-prompt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no meaning given for Q"));
}

#[test]
fn render_without_variables_fails() {
    let tmp = TempDir::new().unwrap();
    cpc(&tmp)
        .args(["render", "(¬ ∧ ∨)", "--no-prompt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no propositions found"));
}

#[test]
fn render_meanings_file_and_flag_priority() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("meanings.yaml"),
        "P: chove\nQ: faz frio\n",
    )
    .unwrap();

    let json = json_output(cpc(&tmp).args([
        "--json",
        "render",
        "P <-> Q",
        "--meanings",
        "meanings.yaml",
        "-m",
        "Q=neva",
        "--no-prompt",
    ]));
    assert_eq!(json["formula"], "P <-> Q");
    assert_eq!(json["sentence"], "chove se e somente se neva");
    let meanings = json["meanings"].as_array().unwrap();
    assert_eq!(meanings[1]["variable"], "Q");
    assert_eq!(meanings[1]["clause"], "neva");
}

#[test]
fn render_uses_config_meanings_and_verbs() {
    let tmp = TempDir::new().unwrap();
    write_config(
        &tmp,
        "meanings:\n  P: João dorme\nnegation:\n  extra-forms: [dorme]\n",
    );

    cpc(&tmp)
        .args(["render", "¬P", "--no-prompt"])
        .assert()
        .success()
        .stdout("João não dorme\n");
}

#[test]
fn render_negates_conjugated_verbs() {
    let tmp = TempDir::new().unwrap();
    cpc(&tmp)
        .args(["render", "¬P ∧ ¬Q", "-m", "P=Os alunos estudam", "-m", "Q=as ruas ficaram molhadas"])
        .assert()
        .success()
        .stdout("Os alunos não estudam e as ruas não ficaram molhadas\n");
}

#[test]
fn render_without_known_verb_appends_negation() {
    let tmp = TempDir::new().unwrap();
    cpc(&tmp)
        .args(["render", "~P", "-m", "P=João dorme"])
        .assert()
        .success()
        .stdout("João dorme não\n");
}

// ---------------------------------------------------------------------------
// Round trip
// ---------------------------------------------------------------------------

#[test]
fn roundtrip_flat_sentences() {
    let tmp = TempDir::new().unwrap();
    let json = json_output(cpc(&tmp).args([
        "roundtrip",
        "Se chove então a grama fica molhada",
        "--json",
    ]));
    assert_eq!(json["formula"], "P → Q");
    assert_eq!(json["sentence"], "Se chove, então a grama fica molhada");

    let json = json_output(cpc(&tmp).args(["roundtrip", "Maria estuda ou João trabalha", "--json"]));
    assert_eq!(json["sentence"], "Maria estuda ou João trabalha");
}

#[test]
fn roundtrip_text_ends_with_sentence() {
    let tmp = TempDir::new().unwrap();
    cpc(&tmp)
        .args(["-q", "roundtrip", "não chove"])
        .assert()
        .success()
        .stdout("¬P\nnão chove\n");
}

// ---------------------------------------------------------------------------
// Utilities
// ---------------------------------------------------------------------------

#[test]
fn symbols_lists_connectives() {
    let tmp = TempDir::new().unwrap();
    let json = json_output(cpc(&tmp).args(["symbols", "--json"]));
    let symbols = json.as_array().unwrap();
    assert_eq!(symbols.len(), 5);
    assert!(symbols.iter().any(|s| s["glyph"] == "→" && s["word"] == "então"));

    cpc(&tmp)
        .arg("symbols")
        .assert()
        .success()
        .stdout(predicate::str::contains("se e somente se"))
        .stdout(predicate::str::contains("Negation: 'não' must be followed by a clause"));
}

#[test]
fn config_init_then_show() {
    let tmp = TempDir::new().unwrap();
    cpc(&tmp)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.yaml"));
    assert!(tmp.path().join(".cpc").join("config.yaml").is_file());

    cpc(&tmp)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    cpc(&tmp)
        .args(["config", "init", "--force"])
        .assert()
        .success();

    let json = json_output(cpc(&tmp).args(["config", "show", "--json"]));
    assert_eq!(json["config"]["json"], false);
    assert_eq!(json["config"]["color"], "auto");
}

#[test]
fn config_show_without_directory_uses_defaults() {
    let tmp = TempDir::new().unwrap();
    cpc(&tmp)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no .cpc directory found"))
        .stdout(predicate::str::contains("color: auto"));
}

#[test]
fn config_json_default_switches_output() {
    let tmp = TempDir::new().unwrap();
    write_config(&tmp, "json: true\n");
    let json = json_output(cpc(&tmp).args(["parse", "chove"]));
    assert_eq!(json["formula"], "P");
}

#[test]
fn broken_config_is_reported() {
    let tmp = TempDir::new().unwrap();
    write_config(&tmp, "color: [always\n");
    cpc(&tmp)
        .args(["parse", "chove"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load configuration"));
}

#[test]
fn completion_bash() {
    let tmp = TempDir::new().unwrap();
    cpc(&tmp)
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cpc"));
}

#[test]
fn version_json() {
    let tmp = TempDir::new().unwrap();
    let json = json_output(cpc(&tmp).args(["version", "--json"]));
    assert!(json["version"].is_string());
}
