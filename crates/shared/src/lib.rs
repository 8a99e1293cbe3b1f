pub mod abstract_trait;
pub mod config;
pub mod di;
pub mod domain;
pub mod errors;
pub mod gateway;
pub mod model;
pub mod service;
pub mod state;
pub mod utils;
