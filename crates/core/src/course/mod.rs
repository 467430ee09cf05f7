//! Course structure: the eight pages and the exercises on each.
//!
//! Exercise definitions are fixed. Building them validates every answer
//! key, so a broken definition surfaces as a [`CourseError`] rather than a
//! quiz nobody can pass.

pub mod catalog;
pub mod content;
pub mod error;
pub mod page;

pub use catalog::{Exercise, FreeTextPrompt, PageContent, course, page_content};
pub use error::CourseError;
pub use page::Page;
