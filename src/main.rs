use clap::{Parser, Subcommand};
use shiftcal::cli;
use shiftcal::error::ShiftResult;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shiftcal")]
#[command(about = "Convert employee shift schedules (.xlsx/.csv) to iCalendar (.ics)")]
#[command(long_about = "shiftcal - Shift schedule to calendar converter

Reads a tabular shift schedule, finds the employee columns, pairs
adjacent start/end time cells per day and writes one calendar event per
shift. The resulting .ics imports into any personal calendar app.

COMMANDS:
  convert    - Convert a schedule to an .ics calendar
  sheets     - List the sheets of a workbook
  employees  - Preview column classification and roster coverage

EXAMPLES:
  shiftcal sheets schedule.xlsx
  shiftcal employees schedule.xlsx --sheet January
  shiftcal convert schedule.xlsx --sheet January --roster team.yaml
  shiftcal convert schedule.csv --abbr \"Alice Smith FT=ALI\"

The roster file is a YAML map of employee name to label:
  Alice Smith FT: ALI
  Bob Jones: BOB")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Convert a schedule to an .ics calendar.

Loads the file, classifies the header columns, reads one (start, end)
time pair per employee per day and writes the calendar next to the
input (or to --output). Employees only produce events once they have a
display label: seed labels from --roster and --abbr, or answer the
--interactive prompts.

The header row holds the employee names. It defaults to row 1, the
second row of the sheet; pass --header-row if your schedule differs.
Rows whose first cell is not a date (section titles, totals) are
skipped. A run that produces no events exits with status 2 and leaves
no output file.")]
    /// Convert a schedule to an .ics calendar
    Convert {
        /// Path to the schedule (.xlsx, .xlsm or .csv)
        input: PathBuf,

        /// Output .ics path (default: next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Sheet name (required when the workbook has several sheets)
        #[arg(short, long)]
        sheet: Option<String>,

        /// Zero-based index of the row holding the employee names
        #[arg(long, default_value_t = 1)]
        header_row: usize,

        /// YAML roster file mapping employee names to labels
        #[arg(short, long)]
        roster: Option<PathBuf>,

        /// Extra mapping, repeatable: --abbr "NAME=LABEL"
        #[arg(short = 'a', long = "abbr", value_name = "NAME=LABEL")]
        abbr: Vec<String>,

        /// YAML file overriding the column classifier defaults
        #[arg(long)]
        config: Option<PathBuf>,

        /// Prompt for a label for every unmapped employee
        #[arg(short, long)]
        interactive: bool,

        /// Drop shifts whose end is not after the start
        #[arg(long)]
        strict_times: bool,

        /// Show verbose conversion steps
        #[arg(short, long)]
        verbose: bool,
    },

    /// List the sheets of a workbook
    Sheets {
        /// Path to the schedule (.xlsx, .xlsm or .csv)
        input: PathBuf,
    },

    #[command(long_about = "Preview column classification and roster coverage.

Shows every column of the chosen header row with its classification
(date, employee, ignored) and, for employees, the label it would
resolve to. Run this before convert to catch a wrong header row or
missing abbreviations.")]
    /// Preview column classification and roster coverage
    Employees {
        /// Path to the schedule (.xlsx, .xlsm or .csv)
        input: PathBuf,

        /// Sheet name (required when the workbook has several sheets)
        #[arg(short, long)]
        sheet: Option<String>,

        /// Zero-based index of the row holding the employee names
        #[arg(long, default_value_t = 1)]
        header_row: usize,

        /// YAML roster file mapping employee names to labels
        #[arg(short, long)]
        roster: Option<PathBuf>,

        /// Extra mapping, repeatable: --abbr "NAME=LABEL"
        #[arg(short = 'a', long = "abbr", value_name = "NAME=LABEL")]
        abbr: Vec<String>,

        /// YAML file overriding the column classifier defaults
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> ShiftResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shiftcal=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            sheet,
            header_row,
            roster,
            abbr,
            config,
            interactive,
            strict_times,
            verbose,
        } => {
            let count = cli::convert(
                input,
                output,
                sheet,
                header_row,
                roster,
                abbr,
                config,
                interactive,
                strict_times,
                verbose,
            )?;
            if count == 0 {
                // Valid but empty: distinct from success and from failure
                std::process::exit(2);
            }
            Ok(())
        }

        Commands::Sheets { input } => cli::sheets(input),

        Commands::Employees {
            input,
            sheet,
            header_row,
            roster,
            abbr,
            config,
        } => cli::employees(input, sheet, header_row, roster, abbr, config),
    }
}
