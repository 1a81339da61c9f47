//! Behavior engine for a multilingual (en/nl/ar) video portfolio site.
//!
//! The crate keeps three concerns consistent with each other: a static
//! translation catalog, dynamic collections (videos, testimonials) fetched
//! from JSON resources, and the page model both render into. The testimonial
//! text must reflect the active language on initial load and after every
//! switch, even though content arrives asynchronously and possibly out of
//! order.

pub mod animate;
pub mod app;
pub mod carousel;
pub mod config;
pub mod content;
pub mod dom;
pub mod i18n;
pub mod render;
pub mod state;
