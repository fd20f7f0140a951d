use std::collections::BTreeMap;

use serde::{
  Deserialize,
  Serialize
};

/// Title table shipped with the front end.
pub const BUILTIN_TITLES_TOML: &str =
  include_str!("../assets/titles.toml");

const FALLBACK_APP_NAME: &str = "SIVEC";
const FALLBACK_DETAIL_SEGMENT: &str =
  "viaje";
const FALLBACK_DETAIL_ENTITY: &str = "Viaje";

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct TitleConfig {
  pub app_name: String,
  pub detail:   DetailConfig,
  #[serde(default)]
  pub routes:   BTreeMap<String, String>
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct DetailConfig {
  pub segment: String,
  pub entity:  String
}

impl TitleConfig {
  pub fn from_toml_str(
    raw: &str
  ) -> Result<Self, String> {
    let config =
      toml::from_str::<Self>(raw).map_err(
        |e| {
          format!(
            "failed to parse title \
             config: {e}"
          )
        }
      )?;
    config.validate()?;
    Ok(config)
  }

  pub fn validate(
    &self
  ) -> Result<(), String> {
    if self.app_name.trim().is_empty() {
      return Err(
        "app_name must not be empty"
          .to_string()
      );
    }

    let segment = &self.detail.segment;
    if segment.is_empty()
      || segment.contains('/')
    {
      return Err(format!(
        "detail.segment must be a single \
         path segment, got {segment:?}"
      ));
    }

    if let Some(path) = self
      .routes
      .keys()
      .find(|path| !path.starts_with('/'))
    {
      return Err(format!(
        "route {path:?} must start with '/'"
      ));
    }

    Ok(())
  }

  pub fn to_toml_string(
    &self
  ) -> Result<String, String> {
    toml::to_string_pretty(self).map_err(
      |e| {
        format!(
          "failed to encode title \
           config: {e}"
        )
      }
    )
  }

  /// The embedded title table. Never fails: a broken asset degrades to
  /// the bare app name with no mapped routes.
  pub fn builtin() -> Self {
    match Self::from_toml_str(
      BUILTIN_TITLES_TOML
    ) {
      | Ok(config) => {
        tracing::debug!(
          app_name = %config.app_name,
          route_count = config.routes.len(),
          "loaded builtin title config"
        );
        config
      }
      | Err(error) => {
        tracing::error!(%error, "failed to parse builtin title config; using fallback");
        Self::fallback()
      }
    }
  }

  fn fallback() -> Self {
    Self {
      app_name: FALLBACK_APP_NAME
        .to_string(),
      detail:   DetailConfig {
        segment: FALLBACK_DETAIL_SEGMENT
          .to_string(),
        entity:  FALLBACK_DETAIL_ENTITY
          .to_string()
      },
      routes:   BTreeMap::new()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn builtin_asset_parses() {
    let config = TitleConfig::from_toml_str(
      BUILTIN_TITLES_TOML
    )
    .expect("builtin titles parse");
    assert_eq!(config.app_name, "SIVEC");
    assert_eq!(config.detail.segment, "viaje");
    assert_eq!(config.detail.entity, "Viaje");
    assert_eq!(
      config
        .routes
        .get("/dashboard")
        .map(String::as_str),
      Some("Dashboard Analytics")
    );
    assert_eq!(
      config
        .routes
        .get("/perfil")
        .map(String::as_str),
      Some("Mi Perfil")
    );
    assert_eq!(TitleConfig::builtin(), config);
  }

  #[test]
  fn routes_table_is_optional() {
    let config = TitleConfig::from_toml_str(
      r#"
app_name = "Flota"

[detail]
segment = "orden"
entity = "Orden"
"#
    )
    .expect("parse");
    assert!(config.routes.is_empty());
  }

  #[test]
  fn rejects_bad_detail_segment() {
    let err = TitleConfig::from_toml_str(
      r#"
app_name = "SIVEC"

[detail]
segment = "viaje/detalle"
entity = "Viaje"
"#
    )
    .expect_err("segment with slash");
    assert!(err.contains("detail.segment"));
  }

  #[test]
  fn rejects_relative_route_and_blank_name() {
    let relative = TitleConfig::from_toml_str(
      r#"
app_name = "SIVEC"

[detail]
segment = "viaje"
entity = "Viaje"

[routes]
"dashboard" = "Dashboard"
"#
    )
    .expect_err("relative route");
    assert!(relative.contains("\"dashboard\""));

    let blank = TitleConfig::from_toml_str(
      r#"
app_name = "  "

[detail]
segment = "viaje"
entity = "Viaje"
"#
    )
    .expect_err("blank app name");
    assert!(blank.contains("app_name"));
  }

  #[test]
  fn duplicate_route_keys_are_a_parse_error() {
    let err = TitleConfig::from_toml_str(
      r#"
app_name = "SIVEC"

[detail]
segment = "viaje"
entity = "Viaje"

[routes]
"/perfil" = "Perfil"
"/perfil" = "Mi Perfil"
"#
    )
    .expect_err("duplicate key");
    assert!(err.starts_with("failed to parse"));
  }

  #[test]
  fn toml_round_trip_preserves_config() {
    let config = TitleConfig::builtin();
    let encoded = config
      .to_toml_string()
      .expect("encode");
    assert_eq!(
      TitleConfig::from_toml_str(&encoded)
        .expect("decode"),
      config
    );
  }

  #[test]
  fn serializes_to_json_for_the_frontend() {
    let config = TitleConfig::builtin();
    let value = serde_json::to_value(&config)
      .expect("json");
    assert_eq!(value["app_name"], "SIVEC");
    assert_eq!(
      value["routes"]["/viajes"],
      "Viajes"
    );
  }
}
