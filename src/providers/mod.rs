pub mod inference;
pub mod storage;
