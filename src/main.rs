use clap::{Parser, Subcommand};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use invoice_editor::config::{config_dir, config_file, init_config, load_config};
use invoice_editor::error::Result;
use invoice_editor::preview::{print_document, render_items_table, render_text};
use invoice_editor::session::{Command, Session, HELP};
use invoice_editor::InvoiceData;

#[derive(Parser)]
#[command(name = "invoice-editor")]
#[command(version, about = "Interactive invoice editor with live preview", long_about = None)]
struct Cli {
    /// Path to config directory (default: XDG config dir)
    #[arg(short = 'C', long, global = true)]
    config_dir: Option<PathBuf>,

    /// Log edits and print hand-offs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize config directory with a template config.toml
    Init,

    /// Show the configuration new invoices are seeded from
    Status,

    /// Start an editing session, reading commands from stdin
    Edit {
        /// Only render the invoice on 'show', not after every change
        #[arg(short, long)]
        quiet: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let cfg_dir = match cli.config_dir {
        Some(p) => p,
        None => config_dir()?,
    };

    match cli.command {
        Commands::Init => cmd_init(&cfg_dir),
        Commands::Status => cmd_status(&cfg_dir),
        Commands::Edit { quiet } => cmd_edit(&cfg_dir, quiet),
    }
}

/// Initialize config directory with the template file
fn cmd_init(cfg_dir: &Path) -> Result<()> {
    let path = init_config(cfg_dir)?;

    println!("Initialized invoice-editor config at: {}", cfg_dir.display());
    println!();
    println!("Next steps:");
    println!("  1. Edit your company details:  $EDITOR {}", path.display());
    println!("  2. Start an invoice:           invoice-editor edit");

    Ok(())
}

/// Show the resolved seed configuration
fn cmd_status(cfg_dir: &Path) -> Result<()> {
    let config = load_config(cfg_dir)?;
    let path = config_file(cfg_dir);
    let sample = InvoiceData::seed(&config, chrono::Local::now());

    println!("Invoice Editor Status");
    println!("{}", "-".repeat(50));
    if path.exists() {
        println!("Config file:      {}", path.display());
    } else {
        println!("Config file:      {} (not found, using defaults)", path.display());
    }
    println!("Company:          {}", config.company.name);
    println!("Currency:         {}", config.invoice.currency_symbol);
    println!("Due after:        {} days", config.invoice.due_days);
    println!("Discount:         {}%", sample.discount_percent);
    println!("Tax rate:         {}%", sample.tax_rate);
    println!("Next invoice:     {}", sample.invoice_number);

    Ok(())
}

/// Run one editing session over stdin. The document lives only as long as
/// the session.
fn cmd_edit(cfg_dir: &Path, quiet: bool) -> Result<()> {
    let config = load_config(cfg_dir)?;
    let symbol = config.invoice.currency_symbol.clone();
    let mut session = Session::start(&config);

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    tracing::info!(
        invoice = %session.document().invoice_number,
        interactive,
        "editing session started"
    );

    if interactive {
        println!(
            "Editing {}. Type 'help' for commands.",
            session.document().invoice_number
        );
        println!("{}", render_text(session.document(), &symbol));
    }

    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("> ");
            io::stdout().flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("Error: {e}");
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => println!("{HELP}"),
            Command::Show => println!("{}", render_text(session.document(), &symbol)),
            Command::Items => println!("{}", render_items_table(session.document(), &symbol)),
            Command::Json => println!("{}", serde_json::to_string_pretty(session.document())?),
            Command::Print => {
                let doc = session.document();
                print_document(&render_text(doc, &symbol), &doc.invoice_number);
                println!("Sent {} to the printer", doc.invoice_number);
            }
            other => match session.edit_for(&other) {
                Ok(Some(edit)) => {
                    session.apply(edit);
                    if !quiet {
                        println!("{}", render_text(session.document(), &symbol));
                    }
                }
                Ok(None) => {}
                Err(e) => eprintln!("Error: {e}"),
            },
        }
    }

    tracing::info!("editing session ended");
    Ok(())
}
