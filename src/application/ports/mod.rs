pub mod record_store;
pub mod tag_association_repository;
pub mod title_collation;
