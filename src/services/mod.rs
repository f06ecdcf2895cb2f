pub mod providers;
pub mod scoring;
pub mod trailer;

pub use providers::{CatalogProvider, TmdbProvider};
pub use trailer::TrailerResolver;
