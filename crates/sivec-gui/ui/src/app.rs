use sivec_gui_shared::TitleResolver;
use yew::{
  Html,
  Properties,
  function_component,
  html
};
use yew_router::prelude::{
  BrowserRouter,
  Routable,
  Switch
};

use crate::components::{
  AppHeader,
  SivecIcon
};
use crate::hooks::{
  use_document_title,
  use_title_resolver
};

const NOT_FOUND_HEADING: &str =
  "Página no encontrada";

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
  #[at("/")]
  Home,
  #[at("/login")]
  Login,
  #[at("/dashboard")]
  Dashboard,
  #[at("/perfil")]
  Perfil,
  #[at("/viajes")]
  Viajes,
  #[at("/viaje/:id")]
  Viaje { id: String },
  #[at("/vehiculos")]
  Vehiculos,
  #[at("/conductores")]
  Conductores,
  #[at("/reportes")]
  Reportes,
  #[at("/configuracion")]
  Configuracion,
  #[not_found]
  #[at("/404")]
  NotFound
}

#[function_component(App)]
pub fn app() -> Html {
  html! {
      <BrowserRouter>
          <Shell />
      </BrowserRouter>
  }
}

#[function_component(Shell)]
fn shell() -> Html {
  use_document_title();
  let resolver = use_title_resolver();

  html! {
      <div class="app-shell">
          <AppHeader title={resolver.app_name().to_string()} />
          <main class="app-main">
              <Switch<Route> render={switch} />
          </main>
      </div>
  }
}

fn switch(route: Route) -> Html {
  tracing::debug!(?route, "rendering route");

  html! {
      <Page {route} />
  }
}

/// Page heading taken from the title table, so headings and document
/// titles cannot drift apart.
fn route_heading(
  resolver: &TitleResolver,
  route: &Route
) -> String {
  match route {
    | Route::Viaje {
      id
    } => {
      format!(
        "{} #{id}",
        resolver.detail().entity()
      )
    }
    | Route::NotFound => {
      NOT_FOUND_HEADING.to_string()
    }
    | route => resolver
      .routes()
      .get(&route.to_path())
      .unwrap_or(resolver.app_name())
      .to_string()
  }
}

#[derive(Properties, PartialEq)]
struct PageProps {
  route: Route
}

#[function_component(Page)]
fn page(props: &PageProps) -> Html {
  let resolver = use_title_resolver();
  let heading =
    route_heading(&resolver, &props.route);

  if props.route == Route::Home {
    return html! {
        <section class="page page-home">
            <SivecIcon size={96} class="page-hero-icon" />
            <h1>{ heading }</h1>
        </section>
    };
  }

  html! {
      <section class="page">
          <h1>{ heading }</h1>
      </section>
  }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
  use std::time::Duration;

  use sivec_gui_shared::TitleSink;
  use wasm_bindgen::JsValue;
  use wasm_bindgen_test::wasm_bindgen_test;

  use super::*;
  use crate::document::DocumentTitle;

  wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

  fn document() -> web_sys::Document {
    web_sys::window()
      .and_then(|window| window.document())
      .expect("document")
  }

  fn navigate(path: &str) {
    web_sys::window()
      .expect("window")
      .history()
      .expect("history")
      .push_state_with_url(
        &JsValue::NULL,
        "",
        Some(path)
      )
      .expect("push state");
  }

  #[wasm_bindgen_test]
  fn document_sink_sets_tab_title() {
    DocumentTitle.set_title("SIVEC - Viajes");
    assert_eq!(
      document().title(),
      "SIVEC - Viajes"
    );
  }

  #[wasm_bindgen_test]
  async fn app_applies_title_for_current_route()
  {
    navigate("/dashboard");
    let document = document();
    let root = document
      .create_element("div")
      .expect("root element");
    document
      .body()
      .expect("body")
      .append_child(&root)
      .expect("mount root");

    let handle =
      yew::Renderer::<App>::with_root(root)
        .render();
    yew::platform::time::sleep(
      Duration::from_millis(50)
    )
    .await;

    assert_eq!(
      document.title(),
      "SIVEC - Dashboard Analytics"
    );
    handle.destroy();
  }
}
