pub mod catalog_service;
pub mod flash;

pub use catalog_service::CatalogService;
pub use flash::{FlashCleanupTask, FlashStore};
