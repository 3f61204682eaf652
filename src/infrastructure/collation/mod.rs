pub mod icu_collation;

pub use icu_collation::IcuTitleCollation;
