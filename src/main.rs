use clap::Parser;
use fifa_normalizer::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("FIFA 21 Normalizer - Player Export Field Cleaner");
    println!("================================================");
    println!();
    println!("Normalize the value, wage, release clause, height, weight and hits");
    println!("columns of the FIFA 21 player export into canonical numeric units.");
    println!();
    println!("USAGE:");
    println!("    fifa-normalizer <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    parse       Run one column's parser over values given on the command line");
    println!("    rules       Print the active bounds and column mappings");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    fifa-normalizer parse --column wage '€560K' '€K' '<null>'");
    println!("    fifa-normalizer parse --column height \"5'10\" 180cm");
    println!("    fifa-normalizer rules --format json");
    println!();
    println!("For more information on a specific command, use:");
    println!("    fifa-normalizer <COMMAND> --help");
}
