/// Filesystem adapters for reading declarations and writing results
mod file_reader;
mod file_writer;

pub use file_reader::FileSystemReader;
pub use file_writer::{
    timestamped_backup_path, BackupNamer, LazyOverwriter, NewFileWriter, StdoutPresenter,
};
