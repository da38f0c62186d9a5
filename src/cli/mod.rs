mod args;
mod commands;
mod config_cmd;
mod generate;
mod render;
mod util;

pub use args::Cli;
