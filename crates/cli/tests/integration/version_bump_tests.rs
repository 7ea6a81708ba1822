//! Integration tests for `fb version-bump`.

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn bumps_style_variables() {
  let env = TestEnv::new();
  env.write_file("versions.ini", "js_version=3\ncss_version=815\n");
  env.write_file(
    "templates/frags/common/css/vars.styl",
    "$brand = #c00\n$version = '814'\n",
  );

  env
    .fb_cmd()
    .arg("version-bump")
    .assert()
    .success()
    .stdout(predicate::str::contains("echo Version bumped to 815"));

  assert_eq!(
    env.read_file("templates/frags/common/css/vars.styl"),
    "$brand = #c00\n$version = '815'\n"
  );
}

#[test]
fn missing_style_variables_fail() {
  let env = TestEnv::new();

  env
    .fb_cmd()
    .arg("version-bump")
    .assert()
    .failure()
    .stderr(predicate::str::contains("Version bump failed"));
}

#[test]
fn explicit_paths_win_over_environment() {
  let env = TestEnv::new();
  env.write_file("other/versions.ini", "css_version=9\n");
  env.write_file("other/vars.styl", "$version = '1'\n");

  env
    .fb_cmd()
    .arg("version-bump")
    .arg("--versions-ini")
    .arg(env.temp.path().join("other/versions.ini"))
    .arg("--style-variables")
    .arg(env.temp.path().join("other/vars.styl"))
    .assert()
    .success()
    .stdout(predicate::str::contains("echo Version bumped to 9"));

  assert_eq!(env.read_file("other/vars.styl"), "$version = '9'\n");
}
