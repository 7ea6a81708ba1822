//! Integration tests for `fb compose`.

use predicates::prelude::*;
use serde_json::{Value, json};

use super::common::TestEnv;

const SITE: &str = r#"{
  // Scripts for the public site.
  "site": {
    "js": {"src": ["a.js", "b.js"], "dest": "out/site", "rules": ["concatenate", "minify"]}
  }
}"#;

fn compose_json(env: &TestEnv) -> Value {
  let output = env.fb_cmd().args(["compose", "--no-self-lint"]).output().unwrap();
  assert!(
    output.status.success(),
    "compose failed: {}",
    String::from_utf8_lossy(&output.stderr)
  );
  serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn composes_site_scripts() {
  let env = TestEnv::new();
  env.write_file("templates/site/grunt.json", SITE);
  env.write_file("templates/a.js", "var a;");
  env.write_file("templates/b.js", "var b;");

  let value = compose_json(&env);

  assert_eq!(value["tasks"]["site.js"], json!(["concatenate:site.js", "minify:site.js"]));
  assert_eq!(value["tasks"]["site"], json!(["site.js"]));
  assert_eq!(value["tasks"]["all-js"], json!(["site.js"]));
  assert_eq!(value["tasks"]["default"], json!(["watch"]));
  assert_eq!(value["config"]["concatenate"]["site.js"]["dest"], json!("out/site.dev.js"));
  assert_eq!(value["config"]["watch"]["site.js"]["files"], json!(["a.js", "b.js"]));
  assert!(value["tasks"].get("versionbump").is_none());
}

#[test]
fn missing_source_exits_with_status_one() {
  let env = TestEnv::new();
  env.write_file("templates/site/grunt.json", SITE);
  env.write_file("templates/b.js", "var b;");

  env
    .fb_cmd()
    .args(["compose", "--no-self-lint"])
    .assert()
    .code(1)
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains("Missing source file: a.js"));
}

#[test]
fn missing_lint_config_exits_with_status_one() {
  let env = TestEnv::empty();
  env.write_file("templates/site/grunt.json", "{}");

  env
    .fb_cmd()
    .arg("compose")
    .assert()
    .code(1)
    .stderr(predicate::str::contains("core file"));
}

#[test]
fn unknown_rule_is_logged_not_fatal() {
  let env = TestEnv::new();
  env.write_file(
    "templates/grunt.json",
    r#"{"site": {"js": {"src": ["a.js"], "rules": ["nonexistent-rule"]}}}"#,
  );
  env.write_file("templates/a.js", "");

  let output = env.fb_cmd().args(["compose", "--no-self-lint"]).output().unwrap();

  assert!(output.status.success());
  assert!(String::from_utf8_lossy(&output.stderr).contains("missing rule"));
  let value: Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(value["tasks"]["site.js"], json!([]));
}

#[test]
fn broken_descriptor_is_skipped() {
  let env = TestEnv::new();
  env.write_file("templates/a/grunt.json", "{ this is not json");
  env.write_file(
    "templates/b/grunt.json",
    r#"{"site": {"js": {"src": ["a.js"], "rules": ["lint"]}}}"#,
  );
  env.write_file("templates/a.js", "");

  let value = compose_json(&env);
  assert_eq!(value["tasks"]["site.js"], json!(["lint:site.js"]));
}

#[test]
fn later_descriptor_wins() {
  let env = TestEnv::new();
  env.write_file(
    "templates/a/grunt.json",
    r#"{"site": {"js": {"src": ["a.js"], "rules": ["lint"]}, "css": {"src": ["a.styl"], "rules": ["compile-style"]}}}"#,
  );
  env.write_file(
    "templates/b/grunt.json",
    r#"{"site": {"js": {"src": ["a.js"], "dest": "out/site", "rules": ["concatenate"]}}}"#,
  );
  env.write_file("templates/a.js", "");

  let value = compose_json(&env);
  assert_eq!(value["tasks"]["site"], json!(["site.js"]));
  assert_eq!(value["tasks"]["site.js"], json!(["concatenate:site.js"]));
  assert!(value["tasks"].get("site.css").is_none());
}

#[test]
fn styles_wire_version_bump() {
  let env = TestEnv::new();
  env.write_file(
    "templates/grunt.json",
    r#"{"site": {"css": {"src": ["main.styl"], "dest": "out/site", "bump": true, "rules": ["compile-style", "minify-style"]}}}"#,
  );
  env.write_file("templates/main.styl", "");

  let value = compose_json(&env);

  assert_eq!(value["tasks"]["versionbump"], json!(["exec:versionbump", "all-css"]));
  assert_eq!(
    value["config"]["watch"]["versionbump"]["files"],
    json!([env.versions_ini().to_string_lossy(), "main.styl"])
  );
  let cmd = value["config"]["exec"]["versionbump"]["cmd"].as_str().unwrap();
  assert!(cmd.starts_with("fb version-bump --root "));
  assert!(cmd.contains(&format!("--versions-ini '{}'", env.versions_ini().display())));
}

#[test]
fn emitted_bump_command_reads_the_composed_versions_file() {
  let env = TestEnv::new();
  env.write_file("versions.ini", "css_version=42\n");
  env.write_file("templates/frags/common/css/vars.styl", "$version = '1'\n");

  let value = compose_json(&env);
  let cmd = value["config"]["exec"]["versionbump"]["cmd"].as_str().unwrap();
  let args: Vec<String> = cmd
    .split_whitespace()
    .skip(1)
    .map(|arg| arg.trim_matches('\'').to_string())
    .collect();

  env
    .fb_cmd()
    .env_remove("FRONTBUILD_VERSIONS_INI")
    .current_dir(env.temp.path())
    .args(&args)
    .assert()
    .success()
    .stdout(predicate::str::contains("echo Version bumped to 42"));

  assert_eq!(env.read_file("templates/frags/common/css/vars.styl"), "$version = '42'\n");
}

#[test]
fn self_lint_includes_descriptors() {
  let env = TestEnv::new();
  env.write_file("templates/site/grunt.json", r#"{"site": {}}"#);

  let output = env.fb_cmd().arg("compose").output().unwrap();
  assert!(output.status.success());

  let value: Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(value["tasks"]["buildfile.js"], json!(["lint:buildfile.js"]));
  let src = value["config"]["lint"]["buildfile.js"]["src"].as_array().unwrap();
  assert_eq!(src.len(), 2);
  assert!(src[1].as_str().unwrap().ends_with("grunt.json"));
}

#[test]
fn custom_descriptor_name() {
  let env = TestEnv::new();
  env.write_file(
    "templates/build.json",
    r#"{"site": {"js": {"src": ["*.js"], "rules": ["lint"]}}}"#,
  );

  let output = env
    .fb_cmd()
    .args(["compose", "--no-self-lint", "--descriptor", "build.json"])
    .output()
    .unwrap();

  let value: Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(value["tasks"]["site.js"], json!(["lint:site.js"]));
}

#[test]
fn writes_configuration_to_file() {
  let env = TestEnv::new();
  env.write_file("templates/grunt.json", r#"{"site": {"js": {"src": ["*.js"], "rules": ["lint"]}}}"#);

  env
    .fb_cmd()
    .args(["compose", "--no-self-lint", "--output"])
    .arg(env.temp.path().join("config.json"))
    .assert()
    .success()
    .stdout(predicate::str::is_empty());

  let value: Value = serde_json::from_str(&env.read_file("config.json")).unwrap();
  assert_eq!(value["tasks"]["all-js"], json!(["site.js"]));
}

#[test]
fn text_summary_lists_tasks() {
  let env = TestEnv::new();
  env.write_file("templates/grunt.json", r#"{"site": {"js": {"src": ["*.js"], "rules": ["lint"]}}}"#);

  env
    .fb_cmd()
    .args(["compose", "--no-self-lint", "--format", "text"])
    .assert()
    .success()
    .stdout(predicate::str::contains("site.js"))
    .stdout(predicate::str::contains("lint:site.js"));
}
