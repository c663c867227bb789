// ABOUTME: Shared types and configuration for colgrid.
// ABOUTME: Defines sizes, rectangles, and grid config file handling.

pub mod config;
pub mod geometry;

pub use config::{ConfigError, GridConfig, ValidatedConfig};
pub use geometry::{ParseSizeError, Point, Rect, Size};
