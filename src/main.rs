use clap::Parser;
use std::process;
use trail_decoder::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Trail Decoder - Encrypted Location Trail Viewer");
    println!("===============================================");
    println!();
    println!("Decrypt AES-encrypted location trail exports and reconstruct them");
    println!("into ordered timelines with summary statistics.");
    println!();
    println!("USAGE:");
    println!("    trail-decoder <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    decode      Decrypt a trail export and print the timeline (main command)");
    println!("    encode      Encrypt plaintext records into a shareable export");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Decode a pasted export:");
    println!("    trail-decoder decode \"HcBHmqq6lfVkLyxTGC9tw...\"");
    println!();
    println!("    # Decode from a file as JSON, including the raw plaintext:");
    println!("    trail-decoder decode --input export.txt --format json --show-plaintext");
    println!();
    println!("    # Produce a shareable export from plaintext records:");
    println!("    trail-decoder encode \"Office|2024-01-02|09:00:00|1 & Home|2024-01-02|18:30:00|2\"");
    println!();
    println!("For detailed help on any command, use:");
    println!("    trail-decoder <COMMAND> --help");
}
