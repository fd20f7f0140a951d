use yew::{
  Html,
  Properties,
  function_component,
  html
};
use yew_router::prelude::Link;

use super::SivecIcon;
use crate::app::Route;

#[derive(Properties, PartialEq)]
pub struct AppHeaderProps {
  pub title: String
}

const NAV_ITEMS: [(Route, &str); 7] = [
  (Route::Dashboard, "Dashboard"),
  (Route::Viajes, "Viajes"),
  (Route::Vehiculos, "Vehículos"),
  (Route::Conductores, "Conductores"),
  (Route::Reportes, "Reportes"),
  (Route::Perfil, "Mi Perfil"),
  (Route::Configuracion, "Configuración")
];

#[function_component(AppHeader)]
pub fn app_header(
  props: &AppHeaderProps
) -> Html {
  html! {
      <header class="app-header">
          <div class="app-brand">
              <SivecIcon class="app-brand-icon" />
              <span>{ props.title.clone() }</span>
          </div>
          <nav class="app-nav">
              {
                  for NAV_ITEMS.iter().map(|(route, label)| html! {
                      <Link<Route> to={route.clone()} classes="app-nav-link">{ *label }</Link<Route>>
                  })
              }
          </nav>
      </header>
  }
}
