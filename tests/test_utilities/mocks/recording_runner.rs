use productctl::application::use_cases::INVENTORY_FILE_NAME;
use productctl::prelude::*;
use std::cell::RefCell;
use std::fs;

/// Mock CertToolRunner that captures the staged inventory instead of
/// starting a container
#[derive(Default)]
pub struct RecordingRunner {
    pub configs: RefCell<Vec<RunnerConfig>>,
    pub inventories: RefCell<Vec<String>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CertToolRunner for RecordingRunner {
    fn run(&self, config: &RunnerConfig) -> Result<()> {
        let inventory = fs::read_to_string(config.inventory_dir.join(INVENTORY_FILE_NAME))?;
        self.inventories.borrow_mut().push(inventory);
        self.configs.borrow_mut().push(config.clone());
        Ok(())
    }
}
