use clap::Parser;
use nextgen_content::cli::{Args, commands};
use std::process;
use tokio_util::sync::CancellationToken;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        let cancellation_token = CancellationToken::new();

        let shutdown_signal = async {
            if tokio::signal::ctrl_c().await.is_err() {
                // No signal handler available; never resolve
                std::future::pending::<()>().await;
            }
            cancellation_token.cancel();
        };

        tokio::select! {
            result = commands::run(args, cancellation_token.clone()) => {
                result
            }
            _ = shutdown_signal => {
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err(nextgen_content::SiteError::interrupted("Interrupted by user").into())
            }
        }
    });

    match result {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("NextGen Content - Showcase Sheet Loader");
    println!("=======================================");
    println!();
    println!("Load, parse and filter the NextGen showcase content published");
    println!("as spreadsheet CSV exports.");
    println!();
    println!("USAGE:");
    println!("    nextgen [OPTIONS] <COMMAND>");
    println!();
    println!("COMMANDS:");
    println!("    parse           Parse any CSV source and print its rows");
    println!("    community       List community profiles (filters: --municipality, --sector)");
    println!("    news            List news items (filter: --municipality)");
    println!("    applications    Count submitted applications");
    println!("    summary         Load every sheet and report counts and filter options");
    println!("    municipalities  List benefiting municipalities with coordinates");
    println!("    routes          List the scheduled tour routes");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <PATH>  Configuration file (JSON)");
    println!("    -v, --verbose        Enable verbose logging");
    println!("    -q, --quiet          Only log errors");
    println!("    -h, --help           Show help information");
    println!("    -V, --version        Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    nextgen community --municipality Ocaña --sector Agro");
    println!("    nextgen news --preview --format json");
    println!("    nextgen parse ./export.csv --skip-header");
    println!();
    println!("For detailed help on any command, use:");
    println!("    nextgen <COMMAND> --help");
}
