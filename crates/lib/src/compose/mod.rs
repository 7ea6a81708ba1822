//! Task composition.
//!
//! [`ConfigBuilder`] turns merged applications into a runner configuration.
//! For every application medium that declares rules it:
//! - normalizes and validates the source files
//! - registers a watch entry (unless `watch` is `false`)
//! - applies each rule, storing the fragment under the rule's runner section
//! - registers the `<application>.<medium>` task with its `<rule>:<task>` steps
//!
//! [`ConfigBuilder::finalize`] then derives the umbrella tasks
//! (`<application>`, `all-<medium>`) and, when styles are built, the
//! `versionbump` task and its watch entry.

mod paths;
mod types;

use std::collections::BTreeMap;

use serde_json::json;
use tracing::{debug, error, info};

use crate::consts::{SCRIPT_WRAPPER, STYLE_IMPORT, STYLE_URL_EMBEDDER};
use crate::descriptor::{Application, Applications, Descriptor, MediumOptions};
use crate::rules::{Command, Fragment, Rule, RuleInput};
use crate::settings::Settings;

pub use paths::{is_glob, normalize_separator};
pub use types::{BuildConfig, ComposeError, Section, Target, WatchEntry};

const WATCH_SECTION: &str = "watch";
const EXEC_SECTION: &str = "exec";
const VERSION_BUMP_TASK: &str = "versionbump";
const STYLE_MEDIUM: &str = "css";

/// Incrementally builds a [`BuildConfig`].
#[derive(Debug)]
pub struct ConfigBuilder<'a> {
  settings: &'a Settings,
  config: BTreeMap<String, Section>,
  tasks: BTreeMap<String, Vec<String>>,
  application_tasks: BTreeMap<String, Vec<String>>,
  medium_tasks: BTreeMap<String, Vec<String>>,
  version_bump_files: Vec<String>,
}

impl<'a> ConfigBuilder<'a> {
  /// Start from the base runner configuration.
  pub fn new(settings: &'a Settings) -> Self {
    let mut config = BTreeMap::new();
    config.insert(
      Rule::Lint.runner_key().to_string(),
      Section::with_options(json!({ "jshintrc": settings.lint_config.to_string_lossy() })),
    );
    config.insert(Rule::Concatenate.runner_key().to_string(), Section::default());
    config.insert(
      Rule::Minify.runner_key().to_string(),
      Section::with_options(json!({ "compress": true, "mangle": true })),
    );
    config.insert(
      Rule::Wrap.runner_key().to_string(),
      Section::with_options(json!({ "wrapper": SCRIPT_WRAPPER })),
    );
    config.insert(
      Rule::CompileStyle.runner_key().to_string(),
      Section::with_options(json!({
        "linenos": false,
        "compress": false,
        "import": [STYLE_IMPORT],
        "urlfunc": STYLE_URL_EMBEDDER,
      })),
    );
    config.insert(
      Rule::MinifyStyle.runner_key().to_string(),
      Section::with_options(json!({ "keepSpecialComments": 0 })),
    );
    config.insert(
      WATCH_SECTION.to_string(),
      Section::with_options(json!({ "spawn": false })),
    );
    config.insert(
      Rule::Touch.runner_key().to_string(),
      Section::with_options(json!({ "create": false })),
    );

    let mut exec = Section::default();
    exec.targets.insert(
      VERSION_BUMP_TASK.to_string(),
      Target::Fragment(Fragment::Command(Command {
        cmd: settings.version_bump_command(),
      })),
    );
    config.insert(EXEC_SECTION.to_string(), exec);

    let mut tasks = BTreeMap::new();
    tasks.insert("default".to_string(), vec![WATCH_SECTION.to_string()]);

    Self {
      settings,
      config,
      tasks,
      application_tasks: BTreeMap::new(),
      medium_tasks: BTreeMap::new(),
      version_bump_files: vec![settings.versions_ini.to_string_lossy().into_owned()],
    }
  }

  /// Compose every medium of `application` that declares rules.
  pub fn compose_application(&mut self, name: &str, application: &Application) -> Result<(), ComposeError> {
    for (medium_name, medium) in application {
      if let Some(rules) = &medium.rules {
        info!(application = %name, medium = %medium_name, "composing rules");
        self.compose_medium(name, medium_name, medium, rules)?;
      }
    }
    Ok(())
  }

  fn compose_medium(
    &mut self,
    application: &str,
    medium_name: &str,
    medium: &MediumOptions,
    rules: &[String],
  ) -> Result<(), ComposeError> {
    let settings = self.settings;

    let src: Vec<String> = medium.src.iter().map(|file| normalize_separator(file)).collect();
    for file in src.iter().filter(|file| !is_glob(file)) {
      if !settings.resolve(file).exists() {
        error!("Missing source file: {}", file);
        return Err(ComposeError::MissingSource { path: file.clone() });
      }
    }

    let dest = medium.dest.as_deref().map(normalize_separator);

    if medium.bump {
      self.version_bump_files.extend(src.iter().cloned());
    }

    let task = format!("{}.{}", application, medium_name);

    if !medium.watch.is_disabled() {
      let mut files = src.clone();
      files.extend(medium.watch.extra_files().iter().map(|file| normalize_separator(file)));

      if !files.is_empty() {
        let entry = WatchEntry {
          files,
          tasks: vec![task.clone()],
          options: medium.options.clone(),
        };
        self.set_target(WATCH_SECTION, &task, Target::Watch(entry));
      }
    }

    let input = RuleInput {
      src: &src,
      dest: dest.as_deref(),
      extension: medium_name,
      retina: medium.retina,
      sprite_injector: &settings.sprite_injector,
    };

    let mut steps = Vec::with_capacity(rules.len());
    for rule_name in rules {
      let rule = match rule_name.parse::<Rule>() {
        Ok(rule) => rule,
        Err(e) => {
          error!(task = %task, error = %e, "missing rule");
          continue;
        }
      };

      match rule.apply(&input) {
        Ok(fragment) => {
          self.set_target(rule.runner_key(), &task, Target::Fragment(fragment));
          debug!(section = rule.runner_key(), task = %task, "configured rule");
          steps.push(format!("{}:{}", rule.name(), task));
        }
        Err(e) => error!(task = %task, error = %e, "dropping rule"),
      }
    }

    self.tasks.insert(task.clone(), steps);
    self
      .application_tasks
      .entry(application.to_string())
      .or_default()
      .push(task.clone());
    self.medium_tasks.entry(medium_name.to_string()).or_default().push(task);

    Ok(())
  }

  fn set_target(&mut self, section: &str, name: &str, target: Target) {
    self
      .config
      .entry(section.to_string())
      .or_default()
      .targets
      .insert(name.to_string(), target);
  }

  /// Derive umbrella tasks and version-bump wiring.
  pub fn finalize(mut self) -> BuildConfig {
    for (application, tasks) in std::mem::take(&mut self.application_tasks) {
      if !tasks.is_empty() {
        self.tasks.insert(application, tasks);
      }
    }

    for rule in Rule::ALL.into_iter().filter(|rule| rule.is_alias()) {
      self
        .tasks
        .insert(rule.name().to_string(), vec![rule.runner_key().to_string()]);
    }

    for (medium, tasks) in std::mem::take(&mut self.medium_tasks) {
      if !tasks.is_empty() {
        self.tasks.insert(format!("all-{}", medium), tasks);
      }
    }

    let all_styles = format!("all-{}", STYLE_MEDIUM);
    if self.tasks.contains_key(&all_styles) {
      self.tasks.insert(
        VERSION_BUMP_TASK.to_string(),
        vec![format!("{}:{}", EXEC_SECTION, VERSION_BUMP_TASK), all_styles],
      );

      let entry = WatchEntry {
        files: self.version_bump_files.clone(),
        tasks: vec![VERSION_BUMP_TASK.to_string()],
        options: None,
      };
      self.set_target(WATCH_SECTION, VERSION_BUMP_TASK, Target::Watch(entry));
    }

    BuildConfig {
      config: self.config,
      tasks: self.tasks,
      version_bump_files: self.version_bump_files,
    }
  }
}

/// Compose all applications into a finished configuration.
pub fn compose(settings: &Settings, applications: &Applications) -> Result<BuildConfig, ComposeError> {
  let mut builder = ConfigBuilder::new(settings);
  for (name, application) in applications {
    builder.compose_application(name, application)?;
  }
  Ok(builder.finalize())
}

/// The application that lints the lint configuration and every descriptor.
pub fn self_lint_application(settings: &Settings, descriptors: &[Descriptor]) -> Application {
  let src = std::iter::once(settings.lint_config.as_path())
    .chain(descriptors.iter().map(|d| d.path.as_path()))
    .map(|path| path.to_string_lossy().into_owned())
    .collect();

  let medium = MediumOptions {
    src,
    rules: Some(vec![Rule::Lint.name().to_string()]),
    options: Some(json!({ "reload": true })),
    ..Default::default()
  };

  let mut application = Application::new();
  application.insert("js".to_string(), medium);
  application
}
