use clap::Parser;
use race_pace::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Race Pace - Equivalent-Effort Race Pace Calculator");
    println!("==================================================");
    println!();
    println!("Project race results onto standard running distances with the Riegel");
    println!("formula and compare how consistent your results are with each other.");
    println!();
    println!("USAGE:");
    println!("    race-pace <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    project     Equivalent times and paces for a single race result");
    println!("    compare     Projection table and consistency summary for 2-5 races");
    println!("    distances   List the supported race distances");
    println!("    export      Write chart data to CSV or Parquet");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Equivalent efforts for a 20:00 5k, paces per kilometer:");
    println!("    race-pace project --distance 5k --time 20:00 --unit km");
    println!();
    println!("    # Compare a 6:00 mile with a 45:00 10k:");
    println!("    race-pace compare --race Mile=6:00 --race 10k=45:00");
    println!();
    println!("    # Compare at the half marathon instead of the last selected distance:");
    println!("    race-pace compare -r 5k=20:00 -r HM=1:35:00 --reference HM");
    println!();
    println!("    # Export chart data:");
    println!("    race-pace export -r 5k=20:00 -r 10k=42:00 --output paces.parquet");
    println!();
    println!("For detailed help on any command, use:");
    println!("    race-pace <COMMAND> --help");
}
