pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};
pub use config::{Settings, TomlConfig};

pub use adapters::{JsonRenderer, LocalStorage, OutputFormat, PlayerDatabase, TextRenderer};
pub use self::core::engine::ConnectionEngine;
pub use self::core::matcher::{find_connections, format_connection_result, overlap_years};
pub use self::core::progress::SearchProgress;
pub use domain::model::{ConnectionReport, OverlapRecord, TenureRecord};
pub use domain::ports::{HistoryStore, Renderer, Storage};
pub use utils::error::{Result, Tm8sError};
