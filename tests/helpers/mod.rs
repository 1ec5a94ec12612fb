
pub use fakes::{FakeDownloader, FakeEngine, FakeTranscriber};
