//! different utility modules used throughout the project
/// tiny module to save history and sampled plot points into files
pub mod logger;
/// tiny module to render plotted functions into PNG charts
pub mod plots;
