use std::rc::Rc;

use sivec_gui_shared::{
  TitleObserver,
  TitleResolver
};
use yew::{
  hook,
  use_effect_with,
  use_memo
};
use yew_router::hooks::use_location;

use crate::document::DocumentTitle;

/// The embedded title table, built once per component.
#[hook]
pub fn use_title_resolver()
-> Rc<TitleResolver> {
  use_memo((), |_| {
    TitleResolver::builtin()
  })
}

/// Keeps `document.title` in sync with the current route.
///
/// Must be called below a router. The effect runs after the router has
/// committed a new location, once per distinct path.
#[hook]
pub fn use_document_title() {
  let resolver = use_title_resolver();
  let observer = use_memo((), move |_| {
    TitleObserver::new(
      (*resolver).clone(),
      DocumentTitle
    )
  });

  let path = use_location()
    .map(|location| {
      location.path().to_string()
    })
    .unwrap_or_default();

  use_effect_with(path, move |path| {
    observer.observe(path);
    || ()
  });
}
