pub mod config;
pub mod error;
pub mod filter;
pub mod provider;
pub mod recording;

pub use config::Config;
pub use error::{HistoryError, Result};
pub use filter::filter_recordings;
pub use provider::{scan_recordings, ProviderHandle, RecordingsProvider, Snapshot};
pub use recording::{Recording, RecordingMeta};
