//! Photo storage using Apache OpenDAL.
//!
//! Two stores are involved in every upload: a local staging directory and the
//! remote bucket. Both are [`StorageService`] instances over different
//! providers and are used through the [`ObjectStore`] trait.
//!
//! ```text
//! ┌──────────────┐   write    ┌──────────────────┐   write    ┌──────────────┐
//! │  multipart   │ ─────────▶ │  staging (fs)    │ ─────────▶ │  bucket (s3) │
//! │  upload      │            │  uploads/<key>   │            │  <key>       │
//! └──────────────┘            └──────────────────┘            └──────────────┘
//! ```

mod config;
mod error;
mod service;

pub use config::{StorageConfig, StorageProvider};
pub use error::StorageError;
pub use service::{ObjectStore, StorageService};
