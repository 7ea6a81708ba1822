//! Fixed names and values shared across the crate.

pub const APP_NAME: &str = "frontbuild";

/// Name of the CLI binary, used when emitting commands that call back into it.
pub const BIN_NAME: &str = "fb";

/// Basename of the per-application build descriptor.
pub const DESCRIPTOR_FILE_NAME: &str = "grunt.json";

/// Lint configuration, relative to the template root.
pub const LINT_CONFIG: &str = ".jshintrc";

/// Style variables holding `$version`, relative to the template root.
pub const STYLE_VARIABLES: &str = "frags/common/css/vars.styl";

/// Sprite injection tool, relative to the template root.
pub const SPRITE_INJECTOR: &str = "build/tools/injectSprite";

pub const VERSIONS_INI: &str = "/www/hotelmodules/versions.ini";

pub const VERSION_PREFIX: &str = "css_version=";

pub const STYLE_VERSION_VARIABLE: &str = "$version";

pub const STYLE_URL_EMBEDDER: &str = "embedUrl";

pub const STYLE_IMPORT: &str = "nib";

pub const CONCAT_SEPARATOR: &str = ";";

/// Prologue and epilogue wrapped around concatenated scripts.
pub const SCRIPT_WRAPPER: [&str; 2] = ["('sly' in this ? sly : (sly = [])).push(function slyify (sly) {\n", "\n});"];

/// Application that lints the build inputs themselves.
pub const SELF_LINT_APPLICATION: &str = "buildfile";

/// Default delay before the touch task mutates files.
pub const TOUCH_DELAY_MS: u64 = 1000;

pub const ENV_VERSIONS_INI: &str = "FRONTBUILD_VERSIONS_INI";
pub const ENV_SPRITE_INJECTOR: &str = "FRONTBUILD_SPRITE_INJECTOR";
pub const ENV_STYLE_VARIABLES: &str = "FRONTBUILD_STYLE_VARIABLES";
