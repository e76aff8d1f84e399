#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod emoji;
pub mod error;
pub mod lifecycle;
pub mod manifest;
pub mod project;
pub mod registry;
pub mod report;
pub mod template;
pub mod validate;

#[cfg(test)]
mod test_support;
