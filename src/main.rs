use ansi_term::Colour;
use clap::Parser;
use george::{interpret, RunOptions, StopReason};
use std::time::Duration;

/// Run a GEORGE program.
///
/// Example: george -c '2, 3 + (P)'
#[derive(Parser)]
#[clap(name = "george", version, about)]
struct Args {
    /// Program passed in as a string
    #[clap(short = 'c', long)]
    cmd: String,

    /// Buffer the output and print it once at the end instead of
    /// streaming each line as it is produced
    #[clap(long)]
    capture: bool,

    /// Maximum output size in bytes
    #[clap(long, default_value_t = 16384)]
    output_limit: usize,

    /// Maximum execution time in milliseconds
    #[clap(long, default_value_t = 2000)]
    time_limit: u64,
}

fn main() {
    let args = Args::parse();
    let options = RunOptions {
        emit_stdout: !args.capture,
        capture: args.capture,
        output_limit: args.output_limit,
        time_limit: Duration::from_millis(args.time_limit),
    };
    match interpret(&args.cmd, options) {
        Ok(execution) => {
            if args.capture {
                print!("{}", execution.output);
            }
            match execution.reason {
                StopReason::Completed => {}
                StopReason::OutputLimitReached => {
                    eprintln!("{}", Colour::Yellow.paint("STOPPED; OUTPUT LIMIT REACHED"));
                }
                StopReason::TimeLimitReached => {
                    eprintln!("{}", Colour::Yellow.paint("STOPPED; TIME LIMIT REACHED"));
                }
            }
        }
        Err(error) => {
            eprintln!("{}", Colour::Red.bold().paint(error.to_string()));
            std::process::exit(1);
        }
    }
}
