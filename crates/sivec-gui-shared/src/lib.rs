//! Route-to-title resolution shared by the SIVEC front end and the
//! native tooling.

pub mod config;
pub mod observer;
pub mod resolver;
pub mod sink;

pub use config::{
  DetailConfig,
  TitleConfig
};
pub use observer::TitleObserver;
pub use resolver::{
  DetailRoute,
  RouteTitleMap,
  TitleResolver
};
pub use sink::{
  TitleSink,
  TitleSlot
};
