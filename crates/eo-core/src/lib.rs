//! My English Online Site Core
//!
//! This crate provides the logic behind the site's interactive widgets:
//! review validation, scroll affordance, and visitor counting. It is kept
//! free of browser types so every policy here is testable on any target.

pub mod reviews;
pub mod scroll;
pub mod visitors;

pub use reviews::{clean_reviews, placeholder_reviews, ReviewRecord};
pub use scroll::{ScrollAffordance, SCROLL_STEP};
pub use visitors::{local_fallback_count, KeyValueStore, StoreError};
