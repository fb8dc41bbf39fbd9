//! Pages
//!
//! Top-level page components for each route.

pub mod demo;
pub mod landing;

pub use demo::Demo;
pub use landing::Landing;
