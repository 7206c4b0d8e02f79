//! Result output: console text, JSON report and CSV service trace

pub mod csv;
pub mod json;
pub mod text;
