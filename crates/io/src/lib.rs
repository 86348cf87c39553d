//! Where exported posters go once the editor has produced the bytes.

pub mod sink;

pub use sink::{DEFAULT_FILE_NAME, ExportError, ExportResult, ExportSink, FileSink};
