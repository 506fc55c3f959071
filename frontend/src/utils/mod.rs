pub mod lifecycle;
pub mod navigation;
pub mod storage;
