use crate::resolver::TitleResolver;
use crate::sink::TitleSink;

/// Route-change handler: resolves each committed path and writes the
/// title to its sink.
///
/// Each call is independent. There is no debouncing or batching, so
/// after a burst of changes the sink holds the title of the last path.
#[derive(Debug)]
pub struct TitleObserver<S> {
  resolver: TitleResolver,
  sink:     S
}

impl<S> TitleObserver<S>
where
  S: TitleSink
{
  pub fn new(
    resolver: TitleResolver,
    sink: S
  ) -> Self {
    Self {
      resolver,
      sink
    }
  }

  pub fn resolver(&self) -> &TitleResolver {
    &self.resolver
  }

  pub fn sink(&self) -> &S {
    &self.sink
  }

  pub fn into_sink(self) -> S {
    self.sink
  }

  /// Applies the title for `path` and returns it.
  pub fn observe(
    &self,
    path: &str
  ) -> String {
    let title = self.resolver.resolve(path);
    tracing::debug!(
      path,
      title = %title,
      "applying document title"
    );
    self.sink.set_title(&title);
    title
  }
}
