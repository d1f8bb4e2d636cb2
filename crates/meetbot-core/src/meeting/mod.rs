//! Meeting persistence: the store port and the commit/list service.

pub mod service;
pub mod store;
