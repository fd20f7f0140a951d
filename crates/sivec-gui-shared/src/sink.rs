use std::cell::{
  Cell,
  RefCell
};
use std::rc::Rc;

/// A single, globally visible title slot. Every call overwrites the
/// previous title.
pub trait TitleSink {
  fn set_title(&self, title: &str);
}

impl<T> TitleSink for &T
where
  T: TitleSink + ?Sized
{
  fn set_title(&self, title: &str) {
    (**self).set_title(title);
  }
}

impl<T> TitleSink for Rc<T>
where
  T: TitleSink + ?Sized
{
  fn set_title(&self, title: &str) {
    (**self).set_title(title);
  }
}

/// In-memory title slot. Holds whatever was written last.
#[derive(Debug, Default)]
pub struct TitleSlot {
  title:  RefCell<Option<String>>,
  writes: Cell<usize>
}

impl TitleSlot {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn current(
    &self
  ) -> Option<String> {
    self.title.borrow().clone()
  }

  pub fn writes(&self) -> usize {
    self.writes.get()
  }
}

impl TitleSink for TitleSlot {
  fn set_title(&self, title: &str) {
    *self.title.borrow_mut() =
      Some(title.to_string());
    self.writes.set(self.writes.get() + 1);
  }
}
