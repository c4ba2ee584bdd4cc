//! Progress reporting for the console

pub mod reporter;
