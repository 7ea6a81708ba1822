//! Integration tests for `fb touch`.

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn creates_missing_files_when_asked() {
  let env = TestEnv::new();
  let target = env.root().join("out/site.dev.css");
  std::fs::create_dir_all(target.parent().unwrap()).unwrap();

  env
    .fb_cmd()
    .args(["touch", "--delay", "0s", "--create"])
    .arg(&target)
    .assert()
    .success()
    .stderr(predicate::str::contains("Created"));

  assert!(target.exists());
}

#[test]
fn missing_files_only_warn() {
  let env = TestEnv::new();
  let target = env.root().join("absent.js");

  env
    .fb_cmd()
    .args(["touch", "--delay", "10ms"])
    .arg(&target)
    .assert()
    .success()
    .stderr(predicate::str::contains("File does not exist"));

  assert!(!target.exists());
}

#[test]
fn touches_existing_files() {
  let env = TestEnv::new();
  env.write_file("templates/app.min.js", "x");

  env
    .fb_cmd()
    .args(["touch", "--delay", "0s", "app.min.js"])
    .assert()
    .success()
    .stderr(predicate::str::contains("Touched: app.min.js"));

  assert_eq!(env.read_file("templates/app.min.js"), "x");
}

#[test]
fn returns_after_the_delay_has_elapsed() {
  let env = TestEnv::new();
  env.write_file("templates/late.css", "");
  let started = std::time::Instant::now();

  env
    .fb_cmd()
    .args(["touch", "--delay", "200ms", "late.css"])
    .assert()
    .success()
    .stderr(predicate::str::contains("Touched: late.css"));

  assert!(started.elapsed() >= std::time::Duration::from_millis(200));
}
