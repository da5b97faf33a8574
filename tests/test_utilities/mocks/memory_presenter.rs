use productctl::prelude::*;
use std::cell::RefCell;

/// Mock OutputPresenter that keeps everything presented
#[derive(Default)]
pub struct MemoryPresenter {
    pub presented: RefCell<Vec<String>>,
}

impl MemoryPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<String> {
        self.presented.borrow().last().cloned()
    }
}

impl OutputPresenter for MemoryPresenter {
    fn present(&self, content: &str) -> Result<()> {
        self.presented.borrow_mut().push(content.to_string());
        Ok(())
    }
}
