//! External service adapters

pub mod catalog;
