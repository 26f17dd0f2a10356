use clap::Parser;
use std::process;
use weather_station::cli::{args::Args, commands};

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
    println!("Weather Station - Observation Log and Trend Analysis");
    println!("====================================================");
    println!();
    println!("Record weather observations in a line-oriented data file and");
    println!("report averages, extremes and the recent temperature trend.");
    println!();
    println!("USAGE:");
    println!("    weather-station <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    add         Add a new measurement");
    println!("    list        List all stored measurements");
    println!("    remove      Remove a measurement by its number in the listing");
    println!("    analyze     Show statistics and the temperature trend");
    println!("    clear       Delete every stored measurement");
    println!("    import      Append the records of another file");
    println!("    export      Write the stored measurements to another file");
    println!();
    println!("OPTIONS:");
    println!("    -f, --data-file <FILE>   Data file to read and write");
    println!("        --format <FORMAT>    Record format: pipe (default) or json-lines");
    println!("    -h, --help               Show help information");
    println!("    -V, --version            Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Record a reading taken now:");
    println!("    weather-station add -t 12.5 -u 65 -w 14 -d SW");
    println!();
    println!("    # Show statistics as JSON:");
    println!("    weather-station analyze --output-format json");
    println!();
    println!("    # Convert the data file to JSON lines:");
    println!("    weather-station export measurements.jsonl --file-format json-lines");
    println!();
    println!("For detailed help on any command, use:");
    println!("    weather-station <COMMAND> --help");
}
