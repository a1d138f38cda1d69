mod commands;
mod prompt;
mod render;
mod session;
mod setup;

pub use commands::run;
