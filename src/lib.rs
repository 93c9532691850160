//! Citylist - CSV city records to a JavaScript module
//!
//! Citylist reads a CSV file of city records, collects the distinct values of
//! the city column, and writes them as `export const cities = [...];` for use
//! by front-end autocomplete widgets.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, exit status, output)
//! - `config`: Configuration file loading and settings resolution
//! - `pipeline`: Ingest, extract-dedup and emit stages

pub mod cli;
pub mod config;
pub mod pipeline;
