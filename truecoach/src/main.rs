//! Command-line client for the TrueCoach coaching API.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::io::Write;
use std::io::{stderr, stdout};
use truecoach_lib::{Host, run};

/// Host that writes to the process's standard streams.
#[derive(Debug, Clone, Default)]
pub struct RealHost;

#[cfg_attr(coverage_nightly, coverage(off))]
impl Host for RealHost {
    fn output(&mut self) -> impl Write {
        stdout()
    }

    fn error(&mut self) -> impl Write {
        stderr()
    }
}

#[tokio::main]
#[cfg_attr(coverage_nightly, coverage(off))]
async fn main() -> Result<(), ohno::AppError> {
    run(&mut RealHost, std::env::args()).await
}
