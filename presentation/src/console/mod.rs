//! Terminal I/O adapters

pub mod line_console;
