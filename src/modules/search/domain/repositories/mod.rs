pub mod part_catalog_repo;

#[cfg(test)]
pub use part_catalog_repo::MockPartCatalog;
pub use part_catalog_repo::PartCatalog;
