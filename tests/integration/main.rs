mod cli;
mod common;
mod config;
mod screens;
#[cfg(unix)]
mod signal;
