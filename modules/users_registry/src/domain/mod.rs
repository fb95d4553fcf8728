pub mod error;
pub mod merge;
pub mod ports;
pub mod query;
pub mod repo;
pub mod service;
pub mod validation;
