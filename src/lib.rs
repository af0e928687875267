//! tldr-dataset - parallel translation corpora from tldr pages
//!
//! tldr-pages ships the same command pages in many languages. This crate
//! parses every language variant of a page, aligns their descriptions and
//! examples, and writes the aligned strings as CSV, JSON, XML or TMX files,
//! one file per language pair.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Page parsing, alignment and the dataset pipeline
//! - `issues`: Pages skipped during generation
//! - `writers`: Output formats

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod writers;
