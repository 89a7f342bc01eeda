pub mod memory_store;
pub mod s3_store;
