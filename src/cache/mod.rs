// 缓存模块
// 包含缓存槽位、派生计算和缓存操作

pub mod aggregate;
pub mod keys;
pub mod models;
pub mod operations;

pub use keys::CacheSlot;
pub use models::{CacheEntry, CacheSlots, EmployeeSnapshot};
pub use operations::EmployeeCache;
