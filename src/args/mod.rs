use clap::Parser;

pub mod types;
pub mod validation;

pub use types::Args;

#[must_use]
pub fn args_checks() -> Args {
    Args::parse()
}
