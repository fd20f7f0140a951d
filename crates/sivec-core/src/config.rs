use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::path::{
  Path,
  PathBuf
};

use anyhow::{
  Context,
  anyhow
};
use sivec_gui_shared::TitleConfig;
use tracing::{
  debug,
  info,
  warn
};

pub const CONFIG_ENV_VAR: &str =
  "SIVEC_CONFIG";
const USER_CONFIG_FILE: &str =
  "sivec/titles.toml";

/// Where the effective title table came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
  Flag(PathBuf),
  Env(PathBuf),
  UserDir(PathBuf),
  Builtin
}

impl ConfigSource {
  pub fn path(&self) -> Option<&Path> {
    match self {
      | ConfigSource::Flag(path)
      | ConfigSource::Env(path)
      | ConfigSource::UserDir(path) => {
        Some(path)
      }
      | ConfigSource::Builtin => None
    }
  }
}

impl fmt::Display for ConfigSource {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    match self {
      | ConfigSource::Flag(path) => {
        write!(
          f,
          "--config {}",
          path.display()
        )
      }
      | ConfigSource::Env(path) => {
        write!(
          f,
          "${CONFIG_ENV_VAR} {}",
          path.display()
        )
      }
      | ConfigSource::UserDir(path) => {
        write!(f, "{}", path.display())
      }
      | ConfigSource::Builtin => {
        write!(f, "builtin")
      }
    }
  }
}

#[derive(Debug, Clone)]
pub struct LoadedConfig {
  pub titles: TitleConfig,
  pub source: ConfigSource
}

/// Loads the title table: `--config`, then `$SIVEC_CONFIG`, then the
/// user config dir, then the builtin table.
#[tracing::instrument(skip(
  override_path
))]
pub fn load(
  override_path: Option<&Path>
) -> anyhow::Result<LoadedConfig> {
  let source = resolve_config_source(
    override_path,
    std::env::var_os(CONFIG_ENV_VAR),
    dirs::config_dir()
  );
  load_from(source)
}

pub fn load_from(
  source: ConfigSource
) -> anyhow::Result<LoadedConfig> {
  let titles = match source.path() {
    | Some(path) => {
      info!(config = %path.display(), "loading title config");
      load_file(path)?
    }
    | None => {
      warn!(
        "no title config found; using \
         builtin table"
      );
      TitleConfig::builtin()
    }
  };

  debug!(
    source = %source,
    app_name = %titles.app_name,
    route_count = titles.routes.len(),
    "title config ready"
  );

  Ok(LoadedConfig {
    titles,
    source
  })
}

/// Explicit paths (flag or env) are returned even if missing so that
/// reading them fails loudly. The user config dir only counts when the
/// file exists.
pub fn resolve_config_source(
  override_path: Option<&Path>,
  env_value: Option<OsString>,
  config_dir: Option<PathBuf>
) -> ConfigSource {
  if let Some(path) = override_path {
    return ConfigSource::Flag(
      expand_tilde(path)
    );
  }

  if let Some(raw) = env_value {
    if raw.is_empty() || raw == "/dev/null"
    {
      return ConfigSource::Builtin;
    }
    return ConfigSource::Env(
      expand_tilde(Path::new(&raw))
    );
  }

  if let Some(dir) = config_dir {
    let candidate =
      dir.join(USER_CONFIG_FILE);
    if candidate.exists() {
      return ConfigSource::UserDir(
        candidate
      );
    }
  }

  ConfigSource::Builtin
}

#[tracing::instrument]
fn load_file(
  path: &Path
) -> anyhow::Result<TitleConfig> {
  let text = fs::read_to_string(path)
    .with_context(|| {
      format!(
        "failed to read {}",
        path.display()
      )
    })?;

  TitleConfig::from_toml_str(&text)
    .map_err(|e| {
      anyhow!("{}: {e}", path.display())
    })
}

fn expand_tilde(
  path: &Path
) -> PathBuf {
  let text = path.to_string_lossy();
  if text == "~"
    && let Some(home) = dirs::home_dir()
  {
    return home;
  }
  if let Some(rest) =
    text.strip_prefix("~/")
    && let Some(home) = dirs::home_dir()
  {
    return home.join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn flag_beats_env_and_user_dir() {
    let source = resolve_config_source(
      Some(Path::new("/tmp/a.toml")),
      Some(OsString::from("/tmp/b.toml")),
      Some(PathBuf::from("/tmp"))
    );
    assert_eq!(
      source,
      ConfigSource::Flag(PathBuf::from(
        "/tmp/a.toml"
      ))
    );
  }

  #[test]
  fn tilde_expands_to_home() {
    let Some(home) = dirs::home_dir() else {
      return;
    };
    assert_eq!(
      expand_tilde(Path::new("~")),
      home
    );
    assert_eq!(
      expand_tilde(Path::new("~/sivec.toml")),
      home.join("sivec.toml")
    );
    assert_eq!(
      expand_tilde(Path::new("~other/x")),
      PathBuf::from("~other/x")
    );

    let source = resolve_config_source(
      None,
      Some(OsString::from("~")),
      None
    );
    assert_eq!(source, ConfigSource::Env(home));
  }

  #[test]
  fn env_dev_null_selects_builtin() {
    for raw in ["/dev/null", ""] {
      let source = resolve_config_source(
        None,
        Some(OsString::from(raw)),
        None
      );
      assert_eq!(
        source,
        ConfigSource::Builtin
      );
    }
  }

  #[test]
  fn missing_user_file_selects_builtin() {
    let dir =
      tempfile::tempdir().expect("tempdir");
    let source = resolve_config_source(
      None,
      None,
      Some(dir.path().to_path_buf())
    );
    assert_eq!(source, ConfigSource::Builtin);
  }

  #[test]
  fn existing_user_file_is_used() {
    let dir =
      tempfile::tempdir().expect("tempdir");
    let file = dir.path().join(USER_CONFIG_FILE);
    fs::create_dir_all(
      file.parent().expect("parent")
    )
    .expect("mkdir");
    fs::write(&file, "").expect("write");

    let source = resolve_config_source(
      None,
      None,
      Some(dir.path().to_path_buf())
    );
    assert_eq!(
      source,
      ConfigSource::UserDir(file)
    );
  }

  #[test]
  fn missing_explicit_file_is_an_error() {
    let dir =
      tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("nope.toml");
    let err = load_from(ConfigSource::Flag(
      missing.clone()
    ))
    .expect_err("missing file");
    assert!(
      format!("{err:#}")
        .contains("failed to read")
    );
  }

  #[test]
  fn builtin_source_loads_embedded_table() {
    let loaded =
      load_from(ConfigSource::Builtin)
        .expect("builtin");
    assert_eq!(loaded.titles.app_name, "SIVEC");
    assert_eq!(loaded.source.to_string(), "builtin");
  }
}
