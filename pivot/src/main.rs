//! Roster Pivot CLI - split a roster CSV into per-period teacher sheets
//!
//! ```bash
//! rosterpivot periods                                  # Show the period schema
//! rosterpivot teachers roster.csv                      # List teachers found in the roster
//! rosterpivot generate roster.csv -t "Smith, Jane"     # Write "Smith, Jane.xls"
//! rosterpivot generate roster.csv -t "Smith, Jane" --dry-run   # Print sheets as JSON
//! ```

use clap::{Parser, Subcommand};
use roster_pivot::error::{AppError, AppResult};
use roster_pivot::{ExportOptions, InputFile, Session, PERIOD_COLUMNS};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rosterpivot")]
#[command(about = "Split a roster export into one worksheet per teacher period", long_about = None)]
struct Cli {
    /// Show debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the period columns read from the roster
    Periods,

    /// List every teacher named in a period column
    Teachers {
        /// Input CSV file
        input: PathBuf,

        /// Print a JSON array instead of one name per line
        #[arg(long)]
        json: bool,
    },

    /// Build the period sheets for one teacher
    Generate {
        /// Input CSV file
        input: PathBuf,

        /// Teacher, exactly as written in the roster
        #[arg(short, long)]
        teacher: String,

        /// Free-text label written in the first row of every sheet
        #[arg(short, long, default_value = "")]
        label: String,

        /// Directory for the workbook
        #[arg(short, long, env = "ROSTER_PIVOT_OUTPUT_DIR", default_value = ".")]
        output_dir: PathBuf,

        /// Workbook file extension
        #[arg(
            long,
            env = "ROSTER_PIVOT_EXTENSION",
            default_value = roster_pivot::export::DEFAULT_EXTENSION
        )]
        extension: String,

        /// Print the sheets as JSON instead of writing the workbook
        #[arg(long)]
        dry_run: bool,
    },
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Periods => cmd_periods(),

        Commands::Teachers { input, json } => cmd_teachers(&input, json),

        Commands::Generate {
            input,
            teacher,
            label,
            output_dir,
            extension,
            dry_run,
        } => cmd_generate(
            &input,
            &teacher,
            &label,
            ExportOptions {
                output_dir,
                extension,
            },
            dry_run,
        ),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_periods() -> AppResult<()> {
    for period in PERIOD_COLUMNS {
        println!("{}\t{}", period.period, period.column_label);
    }
    Ok(())
}

/// Load `input` into a fresh session, turning the error state into a failure.
fn load_session(input: &Path) -> AppResult<Session> {
    eprintln!("📄 Loading roster: {}", input.display());

    let file = InputFile::from_path(input)?;
    let mut session = Session::new();
    if !session.load(&file) {
        let message = session.error().unwrap_or("Failed to load roster").to_string();
        return Err(AppError::Session(message));
    }

    eprintln!(
        "   {} rows, {} columns, {} teachers",
        session.store().len(),
        session.fields().len(),
        session.teachers().len()
    );
    Ok(session)
}

fn cmd_teachers(input: &Path, json: bool) -> AppResult<()> {
    let session = load_session(input)?;

    if json {
        println!("{}", serde_json::to_string_pretty(session.teachers())?);
    } else {
        for teacher in session.teachers() {
            println!("{}", teacher);
        }
    }
    Ok(())
}

fn cmd_generate(
    input: &Path,
    teacher: &str,
    label: &str,
    options: ExportOptions,
    dry_run: bool,
) -> AppResult<()> {
    if teacher.is_empty() {
        return Err(AppError::Usage("select a teacher with --teacher".into()));
    }

    let mut session = load_session(input)?;
    session.select_teacher(teacher);
    if !session.is_known_teacher(teacher) {
        eprintln!("   ⚠️  '{}' is not assigned to any period", teacher);
    }

    session.set_label(label);

    if dry_run {
        let run = session.generate();
        report_run_errors(&session);
        println!("{}", serde_json::to_string_pretty(&run)?);
        return Ok(());
    }

    match session.export(&options) {
        Some(path) => {
            report_run_errors(&session);
            eprintln!("💾 Workbook written to: {}", path.display());
            Ok(())
        }
        None => Err(AppError::Session(
            session.error().unwrap_or("Failed to write workbook").to_string(),
        )),
    }
}

fn report_run_errors(session: &Session) {
    if let Some(message) = session.error() {
        eprintln!("   ⚠️  {}", message);
    }
}
