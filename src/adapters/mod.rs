// Adapters layer: concrete implementations for external systems (CSV data, file storage, rendering).

pub mod csv_store;
pub mod render;
pub mod storage;

pub use csv_store::PlayerDatabase;
pub use render::{JsonRenderer, OutputFormat, TextRenderer};
pub use storage::LocalStorage;
