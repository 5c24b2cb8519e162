pub mod config;
pub mod logging;

// Operation pipeline: parse → fetch → extract → synthesize → download.
pub mod clipboard;
pub mod controller;
pub mod download;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod gallery;
pub mod marketplace;
pub mod resolver;
