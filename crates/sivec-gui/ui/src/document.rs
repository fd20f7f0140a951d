use sivec_gui_shared::TitleSink;

/// The browser's `document.title`.
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq,
)]
pub struct DocumentTitle;

impl TitleSink for DocumentTitle {
  fn set_title(&self, title: &str) {
    match web_sys::window()
      .and_then(|window| window.document())
    {
      | Some(document) => {
        document.set_title(title)
      }
      | None => {
        tracing::warn!(
          title,
          "no document available; title \
           not applied"
        );
      }
    }
  }
}
