pub mod storage;
pub mod webhooks;
