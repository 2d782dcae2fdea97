// Internal shared infrastructure for the ntvalue library

pub mod error;
