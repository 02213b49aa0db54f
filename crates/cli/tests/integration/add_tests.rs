//! Integration tests for `breg add`.

use predicates::prelude::*;

use crate::common::{NOT_MARKUP, VALID_BUILD, breg_cmd, temp_project, write_file};

#[test]
fn partial_success_warns_and_lists_panel() {
  let temp = temp_project();
  let valid = write_file(temp.path(), "build.xml", VALID_BUILD);
  let notes = write_file(temp.path(), "notes.txt", NOT_MARKUP);

  // One success is enough to activate the panel; the rejection still
  // surfaces as a warning.
  breg_cmd()
    .arg("add")
    .arg(&valid)
    .arg(&notes)
    .arg("--project")
    .arg(temp.path())
    .assert()
    .success()
    .stdout(predicate::str::contains("Registered: 1"))
    .stdout(predicate::str::contains("Build Files:"))
    .stdout(predicate::str::contains("demo"))
    .stderr(predicate::str::contains("Cannot Add Build File"))
    .stderr(predicate::str::contains("notes.txt"));
}

#[test]
fn duplicate_arguments_register_once() {
  let temp = temp_project();
  let valid = write_file(temp.path(), "build.xml", VALID_BUILD);

  breg_cmd()
    .arg("add")
    .arg(&valid)
    .arg(&valid)
    .arg("--project")
    .arg(temp.path())
    .assert()
    .success()
    .stdout(predicate::str::contains("Registered: 1"))
    .stdout(predicate::str::contains("Rejected: 0"));
}

#[test]
fn excluded_directory_uses_template_message() {
  let temp = temp_project();
  let excluded = write_file(temp.path(), "out/build.xml", VALID_BUILD);

  breg_cmd()
    .arg("add")
    .arg(&excluded)
    .arg("--project")
    .arg(temp.path())
    .arg("--exclude")
    .arg(temp.path().join("out"))
    .assert()
    .failure()
    .stderr(predicate::str::contains("cannot add build files from excluded directories"));
}

#[test]
fn all_rejections_exit_nonzero_without_panel() {
  let temp = temp_project();
  let a = write_file(temp.path(), "a.txt", NOT_MARKUP);
  let b = write_file(temp.path(), "b.xml", "<module/>");

  breg_cmd()
    .arg("add")
    .arg(&a)
    .arg(&b)
    .arg("--project")
    .arg(temp.path())
    .assert()
    .failure()
    .stdout(predicate::str::contains("Registered: 0"))
    .stdout(predicate::str::contains("Build Files:").not());
}

#[test]
fn json_output_carries_outcome_and_entries() {
  let temp = temp_project();
  let valid = write_file(temp.path(), "build.xml", VALID_BUILD);
  let notes = write_file(temp.path(), "notes.txt", NOT_MARKUP);

  let assert = breg_cmd()
    .arg("add")
    .arg(&valid)
    .arg(&notes)
    .arg("--project")
    .arg(temp.path())
    .arg("--format")
    .arg("json")
    .assert()
    .success();

  let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
  let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();

  assert_eq!(value["added"], 1);
  assert_eq!(value["panel_activated"], true);
  assert_eq!(value["errors"].as_array().unwrap().len(), 1);
  assert_eq!(value["entries"][0]["name"], "demo");
}

#[test]
fn rootless_document_is_rejected() {
  let temp = temp_project();
  let empty = write_file(temp.path(), "empty.xml", "<!-- placeholder -->");

  breg_cmd()
    .arg("add")
    .arg(&empty)
    .arg("--project")
    .arg(temp.path())
    .assert()
    .failure()
    .stderr(predicate::str::contains("not a build definition"));
}
