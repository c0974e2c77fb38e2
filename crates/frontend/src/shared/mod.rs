pub mod icons;
pub mod model_store;
pub mod query;
pub mod storage;
pub mod viewport;
