//! 시작 시 샘플 데이터 적재
//!
//! ```rust,ignore
//! if BootstrapConfig::enabled() {
//!     BootstrapService::instance().run().await?;
//! }
//! ```

pub mod data_initializer;

pub use data_initializer::*;
