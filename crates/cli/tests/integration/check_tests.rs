//! Integration tests for `breg check`.

use predicates::prelude::*;

use crate::common::{NOT_MARKUP, VALID_BUILD, breg_cmd, temp_project, write_file};

#[test]
fn eligible_file_exits_zero() {
  let temp = temp_project();
  let valid = write_file(temp.path(), "build.xml", VALID_BUILD);

  breg_cmd()
    .arg("check")
    .arg(&valid)
    .arg("--project")
    .arg(temp.path())
    .assert()
    .success()
    .stdout(predicate::str::contains("eligible build definition"));
}

#[test]
fn unparseable_file_reports_not_markup() {
  let temp = temp_project();
  let notes = write_file(temp.path(), "notes.txt", NOT_MARKUP);

  breg_cmd()
    .arg("check")
    .arg(&notes)
    .arg("--project")
    .arg(temp.path())
    .assert()
    .failure()
    .stderr(predicate::str::contains("not a markup document"));
}

#[test]
fn rootless_document_reports_no_root() {
  let temp = temp_project();
  let empty = write_file(temp.path(), "empty.xml", "<!-- placeholder -->");

  breg_cmd()
    .arg("check")
    .arg(&empty)
    .arg("--project")
    .arg(temp.path())
    .assert()
    .failure()
    .stderr(predicate::str::contains("no root element"));
}

#[test]
fn missing_project_reports_no_project() {
  let temp = temp_project();
  let valid = write_file(temp.path(), "build.xml", VALID_BUILD);

  breg_cmd()
    .arg("check")
    .arg(&valid)
    .arg("--project")
    .arg(temp.path().join("no-such-dir"))
    .assert()
    .failure()
    .stderr(predicate::str::contains("no project context"));
}

#[test]
fn json_verdict_for_ineligible_file() {
  let temp = temp_project();
  let module = write_file(temp.path(), "module.xml", "<module/>");

  let assert = breg_cmd()
    .arg("check")
    .arg(&module)
    .arg("--project")
    .arg(temp.path())
    .arg("--format")
    .arg("json")
    .assert()
    .failure();

  let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
  let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();

  assert_eq!(value["eligible"], false);
  assert_eq!(value["reason"], "root-tag-mismatch");
}

#[test]
fn json_verdict_for_eligible_file() {
  let temp = temp_project();
  let valid = write_file(temp.path(), "build.xml", VALID_BUILD);

  let assert = breg_cmd()
    .arg("check")
    .arg(&valid)
    .arg("--project")
    .arg(temp.path())
    .arg("--format")
    .arg("json")
    .assert()
    .success();

  let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
  let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();

  assert_eq!(value["eligible"], true);
  assert!(value["reason"].is_null());
}
