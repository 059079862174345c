pub mod storage_item;

pub use storage_item::StorageItem;
