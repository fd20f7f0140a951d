use yew::{
  Html,
  Properties,
  function_component,
  html
};

pub const DEFAULT_ICON_SIZE: i32 = 40;

#[derive(Properties, PartialEq)]
pub struct SivecIconProps {
  /// Width and height in pixels. Passed through as-is.
  #[prop_or(DEFAULT_ICON_SIZE)]
  pub size:  i32,
  #[prop_or_default]
  pub class: String
}

/// SIVEC brand mark: a cargo truck on a route line.
#[function_component(SivecIcon)]
pub fn sivec_icon(
  props: &SivecIconProps
) -> Html {
  let size = props.size.to_string();

  html! {
      <svg
          class={props.class.clone()}
          width={size.clone()}
          height={size}
          viewBox="0 0 48 48"
          fill="none"
          xmlns="http://www.w3.org/2000/svg"
          aria-hidden="true"
      >
          <path d="M4 42h40" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-dasharray="4 4" />
          <rect x="4" y="12" width="24" height="20" rx="2" fill="currentColor" />
          <path d="M28 18h8.5l7.5 7.5V32H28z" fill="currentColor" opacity="0.8" />
          <path d="M31 21h4.5l4 4H31z" fill="white" />
          <circle cx="13" cy="33" r="4" fill="white" stroke="currentColor" stroke-width="2.5" />
          <circle cx="36" cy="33" r="4" fill="white" stroke="currentColor" stroke-width="2.5" />
      </svg>
  }
}
