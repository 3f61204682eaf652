pub mod collation;
