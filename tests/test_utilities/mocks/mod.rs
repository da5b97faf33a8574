/// Mock implementations for testing
mod in_memory_catalog;
mod memory_presenter;
mod recording_runner;

pub use in_memory_catalog::InMemoryCatalog;
pub use memory_presenter::MemoryPresenter;
pub use recording_runner::RecordingRunner;
