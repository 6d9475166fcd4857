//! Data models for Wabot API entities.

pub mod template;

pub use template::Template;
