mod common;

use common::{GOOD_SPEC, TestFixture};
use predicates::prelude::*;

#[test]
fn validate_passing_spec_exits_zero() {
    let fixture = TestFixture::new();
    let path = fixture.create_file("checkout.md", GOOD_SPEC);

    spec_guard!()
        .arg("validate")
        .arg(&path)
        .arg("--no-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS"))
        .stdout(predicate::str::contains("score 100"));
}

#[test]
fn validate_failing_spec_exits_one() {
    let fixture = TestFixture::new();
    let path = fixture.create_bad_spec("broken.md");

    spec_guard!()
        .arg("validate")
        .arg(&path)
        .arg("--no-config")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("FAIL"))
        .stdout(predicate::str::contains("missing-requirements"));
}

#[test]
fn validate_warning_only_spec_exits_zero() {
    let fixture = TestFixture::new();
    let doc = format!("{GOOD_SPEC}\n[NEEDS CLARIFICATION: payment provider]\n");
    let path = fixture.create_file("warn.md", &doc);

    spec_guard!()
        .arg("validate")
        .arg(&path)
        .arg("--no-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("WARN"))
        .stdout(predicate::str::contains("score 97"));
}

#[test]
fn validate_missing_target_exits_two() {
    spec_guard!()
        .arg("validate")
        .arg("/no/such/spec.md")
        .arg("--no-config")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn validate_directory_reports_each_spec() {
    let fixture = TestFixture::new();
    fixture.create_file("a.md", GOOD_SPEC);
    fixture.create_bad_spec("b.md");

    spec_guard!()
        .arg("validate")
        .arg(fixture.dir.path())
        .arg("--no-config")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("2 specs"))
        .stdout(predicate::str::contains("1 passed"))
        .stdout(predicate::str::contains("1 failed"));
}

#[test]
fn validate_all_walks_specs_tree() {
    let fixture = TestFixture::new();
    fixture.create_file("specs/checkout/spec.md", GOOD_SPEC);
    fixture.create_file("specs/refunds/spec.md", GOOD_SPEC);

    spec_guard!()
        .arg("validate")
        .arg("--all")
        .arg("--path")
        .arg(fixture.dir.path())
        .arg("--no-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 specs"))
        .stdout(predicate::str::contains("2 passed"));
}

#[test]
fn json_single_file_shape() {
    let fixture = TestFixture::new();
    let path = fixture.create_bad_spec("broken.md");

    let output = spec_guard!()
        .arg("validate")
        .arg(&path)
        .arg("--no-config")
        .arg("--format")
        .arg("json")
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["status"], "fail");
    assert!(json["spec_path"].as_str().unwrap().ends_with("broken.md"));
    assert!(json["quality_score"].as_u64().unwrap() < 100);
    assert!(json["issues"].as_array().unwrap().len() > 1);
    assert!(json["validated_at"].is_string());
}

#[test]
fn json_batch_shape_has_summary() {
    let fixture = TestFixture::new();
    fixture.create_file("a.md", GOOD_SPEC);
    fixture.create_bad_spec("b.md");

    let output = spec_guard!()
        .arg("validate")
        .arg(fixture.dir.path())
        .arg("--no-config")
        .arg("--format")
        .arg("json")
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["summary"]["total_specs"], 2);
    assert_eq!(json["summary"]["passed"], 1);
    assert_eq!(json["summary"]["failed"], 1);
    assert_eq!(json["results"].as_array().unwrap().len(), 2);
}

#[test]
fn batch_results_are_sorted_by_path() {
    let fixture = TestFixture::new();
    fixture.create_file("zz.md", GOOD_SPEC);
    fixture.create_file("aa.md", GOOD_SPEC);
    fixture.create_file("mm.md", GOOD_SPEC);

    let output = spec_guard!()
        .arg("validate")
        .arg(fixture.dir.path())
        .arg("--no-config")
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let paths: Vec<&str> = json["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["spec_path"].as_str().unwrap())
        .collect();
    let mut sorted = paths.clone();
    sorted.sort_unstable();
    assert_eq!(paths, sorted);
}

#[test]
fn severity_filter_trims_text_output() {
    let fixture = TestFixture::new();
    let doc = format!("{GOOD_SPEC}\nTODO finish refunds\n");
    let path = fixture.create_file("todo.md", &doc);

    spec_guard!()
        .arg("validate")
        .arg(&path)
        .arg("--no-config")
        .arg("--severity")
        .arg("warning")
        .assert()
        .success()
        .stdout(predicate::str::contains("todo-marker").not());
}

#[test]
fn config_file_can_disable_a_rule() {
    let fixture = TestFixture::new();
    fixture.create_file(
        ".spec-guard.toml",
        "disabled_rules = [\"unresolved-clarification\"]\n",
    );
    let doc = format!("{GOOD_SPEC}\n[NEEDS CLARIFICATION: scope]\n");
    fixture.create_file("spec.md", &doc);

    spec_guard!()
        .arg("validate")
        .arg(fixture.dir.path().join("spec.md"))
        .arg("--path")
        .arg(fixture.dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("score 100"));
}

#[test]
fn unknown_disabled_rule_aborts_with_exit_two() {
    let fixture = TestFixture::new();
    fixture.create_file(".spec-guard.toml", "disabled_rules = [\"not-a-real-rule\"]\n");
    fixture.create_file("spec.md", GOOD_SPEC);

    spec_guard!()
        .arg("validate")
        .arg(fixture.dir.path().join("spec.md"))
        .arg("--path")
        .arg(fixture.dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not-a-real-rule"));
}

#[test]
fn custom_rule_from_config_fires() {
    let fixture = TestFixture::new();
    fixture.create_file(
        ".spec-guard.toml",
        r#"
[[custom_rules]]
name = "no-lorem-ipsum"
description = "Placeholder prose must not ship"
pattern = "(?i)lorem ipsum"
severity = "error"
category = "clarity"
check = "pattern-absent"
"#,
    );
    let doc = format!("{GOOD_SPEC}\nLorem ipsum dolor sit amet.\n");
    fixture.create_file("spec.md", &doc);

    spec_guard!()
        .arg("validate")
        .arg(fixture.dir.path().join("spec.md"))
        .arg("--path")
        .arg(fixture.dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("no-lorem-ipsum"))
        .stdout(predicate::str::contains("Placeholder prose must not ship"));
}

#[test]
fn empty_spec_fails_without_crashing() {
    let fixture = TestFixture::new();
    let path = fixture.create_file("empty.md", "");

    spec_guard!()
        .arg("validate")
        .arg(&path)
        .arg("--no-config")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("empty-file"));
}

#[test]
fn quiet_flag_suppresses_issue_detail() {
    let fixture = TestFixture::new();
    let path = fixture.create_bad_spec("broken.md");

    spec_guard!()
        .arg("validate")
        .arg(&path)
        .arg("--no-config")
        .arg("--quiet")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("missing-requirements").not())
        .stdout(predicate::str::contains("FAIL"));
}
