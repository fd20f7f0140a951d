use std::collections::BTreeMap;

use crate::config::TitleConfig;

const TITLE_SEPARATOR: &str = " - ";

/// Exact path to title fragment lookup.
///
/// Built once and never mutated afterwards. Collecting from an iterator
/// that repeats a path keeps the last title seen for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTitleMap {
  entries: BTreeMap<String, String>
}

impl RouteTitleMap {
  pub fn get(
    &self,
    path: &str
  ) -> Option<&str> {
    self
      .entries
      .get(path)
      .map(String::as_str)
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Entries ordered by path.
  pub fn iter(
    &self
  ) -> impl Iterator<Item = (&str, &str)>
  {
    self.entries.iter().map(
      |(path, title)| {
        (path.as_str(), title.as_str())
      }
    )
  }
}

impl<K, V> FromIterator<(K, V)>
  for RouteTitleMap
where
  K: Into<String>,
  V: Into<String>
{
  fn from_iter<I>(iter: I) -> Self
  where
    I: IntoIterator<Item = (K, V)>
  {
    let mut entries = BTreeMap::new();
    for (path, title) in iter {
      entries
        .insert(path.into(), title.into());
    }
    Self {
      entries
    }
  }
}

/// The one route whose last segment is an identifier, e.g.
/// `/viaje/:id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRoute {
  prefix: String,
  entity: String
}

impl DetailRoute {
  pub fn new(
    segment: impl AsRef<str>,
    entity: impl Into<String>
  ) -> Self {
    Self {
      prefix: format!(
        "/{}/",
        segment
          .as_ref()
          .trim_matches('/')
      ),
      entity: entity.into()
    }
  }

  pub fn segment(&self) -> &str {
    self.prefix.trim_matches('/')
  }

  pub fn entity(&self) -> &str {
    &self.entity
  }

  /// Everything after `/<segment>/`, verbatim. No decoding and no
  /// validation: an empty remainder is still an identifier.
  pub fn identifier<'a>(
    &self,
    path: &'a str
  ) -> Option<&'a str> {
    path.strip_prefix(self.prefix.as_str())
  }

  pub fn pattern(&self) -> String {
    format!("{}:id", self.prefix)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleResolver {
  app_name: String,
  detail:   DetailRoute,
  routes:   RouteTitleMap
}

impl TitleResolver {
  pub fn new(
    app_name: impl Into<String>,
    detail: DetailRoute,
    routes: RouteTitleMap
  ) -> Self {
    Self {
      app_name: app_name.into(),
      detail,
      routes
    }
  }

  pub fn from_config(
    config: &TitleConfig
  ) -> Self {
    Self::new(
      config.app_name.clone(),
      DetailRoute::new(
        &config.detail.segment,
        config.detail.entity.clone()
      ),
      config.routes.iter().collect()
    )
  }

  /// Resolver for the embedded SIVEC title table.
  pub fn builtin() -> Self {
    Self::from_config(
      &TitleConfig::builtin()
    )
  }

  pub fn app_name(&self) -> &str {
    &self.app_name
  }

  pub fn detail(&self) -> &DetailRoute {
    &self.detail
  }

  pub fn routes(&self) -> &RouteTitleMap {
    &self.routes
  }

  /// Title for `path`. Total: unknown paths get the bare app name.
  pub fn resolve(
    &self,
    path: &str
  ) -> String {
    if let Some(id) =
      self.detail.identifier(path)
    {
      return format!(
        "{}{TITLE_SEPARATOR}{} #{id}",
        self.app_name,
        self.detail.entity()
      );
    }

    match self.routes.get(path) {
      | Some(title) => {
        format!(
          "{}{TITLE_SEPARATOR}{title}",
          self.app_name
        )
      }
      | None => self.app_name.clone()
    }
  }
}
