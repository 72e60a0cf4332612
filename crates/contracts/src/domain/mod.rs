pub mod a001_category;
pub mod common;
