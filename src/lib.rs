pub mod app;
pub mod components;
pub mod models;
pub mod storage;
