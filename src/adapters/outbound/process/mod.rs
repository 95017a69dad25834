/// Process adapters driving external package managers
mod npm_cli;

pub use npm_cli::NpmCli;
