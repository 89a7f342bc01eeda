pub mod implementations;
pub mod trait_storage;

pub use trait_storage::ObjectStore;
