//! Generated auxiliary files.

pub mod sitemap;
