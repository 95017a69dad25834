/// Filesystem adapters for file I/O operations
mod file_writer;
mod graph_file_reader;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use graph_file_reader::FileSystemGraphReader;
