pub mod engine;
pub mod matcher;
pub mod progress;

pub use crate::domain::model::{ConnectionReport, OverlapRecord, TenureRecord};
pub use crate::domain::ports::{HistoryStore, Renderer, Storage};
pub use crate::utils::error::Result;
