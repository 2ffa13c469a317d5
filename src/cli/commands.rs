use crate::classify::{ClassifierConfig, ColumnClassifier};
use crate::error::{ShiftError, ShiftResult};
use crate::extract::{extract_shifts, ExtractOptions};
use crate::ics::render_calendar;
use crate::roster::{parse_abbr, Roster};
use crate::sheet::{load_table, sheet_names, TableFormat};
use crate::types::{ColumnRole, ScheduleTable};
use colored::Colorize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Everything the convert/employees commands share: loaded table,
/// classified columns, seeded roster.
struct Session {
    table: ScheduleTable,
    roles: Vec<ColumnRole>,
    roster: Roster,
}

fn open_session(
    input: &Path,
    sheet: Option<&str>,
    header_row: usize,
    roster_path: Option<&Path>,
    abbr: &[String],
    config_path: Option<&Path>,
) -> ShiftResult<Session> {
    let format = TableFormat::detect(input)?;
    let bytes = fs::read(input)?;
    let table = load_table(&bytes, format, sheet, header_row)?;

    let config = match config_path {
        Some(path) => serde_yaml::from_str::<ClassifierConfig>(&fs::read_to_string(path)?)?,
        None => ClassifierConfig::default(),
    };
    let classifier = ColumnClassifier::new(config)?;
    let roles = classifier.classify(&table.labels);

    let mut roster = match roster_path {
        Some(path) => Roster::load(path)?,
        None => Roster::new(),
    };
    for raw in abbr {
        let (name, label) = parse_abbr(raw)
            .ok_or_else(|| ShiftError::Invalid(format!("expected NAME=LABEL, got '{raw}'")))?;
        roster.insert(&name, &label);
    }

    Ok(Session {
        table,
        roles,
        roster,
    })
}

/// Execute the convert command. Returns the number of events written;
/// zero means a valid-but-empty run the caller should surface as a
/// warning, not a success.
#[allow(clippy::too_many_arguments)]
pub fn convert(
    input: PathBuf,
    output: Option<PathBuf>,
    sheet: Option<String>,
    header_row: usize,
    roster_path: Option<PathBuf>,
    abbr: Vec<String>,
    config_path: Option<PathBuf>,
    interactive: bool,
    strict_times: bool,
    verbose: bool,
) -> ShiftResult<usize> {
    println!("{}", "📅 shiftcal - Converting schedule".bold().green());
    println!("   File: {}", input.display());
    if let Some(ref s) = sheet {
        println!("   Sheet: {}", s.bright_yellow().bold());
    }
    println!();

    let mut session = open_session(
        &input,
        sheet.as_deref(),
        header_row,
        roster_path.as_deref(),
        &abbr,
        config_path.as_deref(),
    )?;

    if verbose {
        let employees = session.roles.iter().filter(|r| r.is_employee()).count();
        println!(
            "   Found {} columns ({} employees), {} data rows",
            session.table.column_count(),
            employees,
            session.table.row_count()
        );
        println!();
    }

    if interactive {
        fill_roster_interactively(&session.roles, &mut session.roster)?;
    }

    let options = ExtractOptions {
        require_ordered: strict_times,
    };
    let extraction = extract_shifts(
        &session.table,
        &session.roles,
        session.roster.resolver(),
        options,
    );

    if !extraction.unmapped.is_empty() {
        println!("{}", "⚠️  Employees without an abbreviation:".yellow());
        for name in &extraction.unmapped {
            println!("   ❓ {name}");
        }
        println!(
            "   {}",
            "Map them with --abbr \"NAME=LABEL\", a roster file, or --interactive".yellow()
        );
        println!();
    }
    if extraction.unordered_dropped > 0 {
        println!(
            "{}",
            format!(
                "⚠️  Dropped {} shift(s) whose end is not after the start",
                extraction.unordered_dropped
            )
            .yellow()
        );
        println!();
    }

    if extraction.is_empty() {
        println!("{}", "⚠️  No shifts found.".bold().yellow());
        println!(
            "   {}",
            format!(
                "Is the header row really row {header_row} (zero-based)? Are the employees mapped?"
            )
            .yellow()
        );
        return Ok(0);
    }

    let document = render_calendar(&extraction.events);
    let output = output.unwrap_or_else(|| default_output(&input, sheet.as_deref()));
    fs::write(&output, &document)?;

    println!(
        "{}",
        format!("✅ Processed {} shift(s)", extraction.event_count())
            .bold()
            .green()
    );
    if extraction.rows_skipped > 0 && verbose {
        println!(
            "   Skipped {} row(s) without a readable date",
            extraction.rows_skipped
        );
    }
    println!("📥 Wrote {}", output.display());

    Ok(extraction.event_count())
}

/// Execute the sheets command: enumerate sheet names of a workbook.
pub fn sheets(input: PathBuf) -> ShiftResult<()> {
    println!("{}", "📄 shiftcal - Sheets".bold().green());
    println!("   File: {}\n", input.display());

    let format = TableFormat::detect(&input)?;
    let names = sheet_names(&fs::read(&input)?, format)?;

    if names.is_empty() {
        println!("   flat table (no sheets)");
    } else {
        for name in names {
            println!("   {}", name.bright_blue());
        }
    }
    Ok(())
}

/// Execute the employees command: show column classification and
/// roster coverage so wrong header rows and missing abbreviations are
/// visible before converting.
pub fn employees(
    input: PathBuf,
    sheet: Option<String>,
    header_row: usize,
    roster_path: Option<PathBuf>,
    abbr: Vec<String>,
    config_path: Option<PathBuf>,
) -> ShiftResult<()> {
    println!("{}", "👤 shiftcal - Employee columns".bold().green());
    println!("   File: {}\n", input.display());

    let session = open_session(
        &input,
        sheet.as_deref(),
        header_row,
        roster_path.as_deref(),
        &abbr,
        config_path.as_deref(),
    )?;

    if session.table.column_count() == 0 {
        println!(
            "{}",
            format!("⚠️  Header row {header_row} is past the end of the table").yellow()
        );
        return Ok(());
    }

    for (index, (label, role)) in session.table.labels.iter().zip(&session.roles).enumerate() {
        match role {
            ColumnRole::Date => {
                println!("   {index:>3}  {label:<30} [date]");
            }
            ColumnRole::Ignored => {
                println!("   {index:>3}  {:<30} (ignored)", label.dimmed());
            }
            ColumnRole::Employee { canonical } => match session.roster.resolve(canonical) {
                Some(mapped) => println!(
                    "   {index:>3}  {:<30} ✅ {}",
                    label.bright_blue(),
                    mapped.bold()
                ),
                None => println!("   {index:>3}  {:<30} ❓ not mapped", label.bright_blue()),
            },
        }
    }
    Ok(())
}

/// Prompt for a label for every employee column still missing one.
/// An empty answer leaves the employee unmapped.
fn fill_roster_interactively(roles: &[ColumnRole], roster: &mut Roster) -> ShiftResult<()> {
    for role in roles {
        let ColumnRole::Employee { canonical } = role else {
            continue;
        };
        if roster.contains(canonical) {
            continue;
        }
        print!("   Abbreviation for {}: ", canonical.bright_blue());
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        roster.insert(canonical, &line.trim().to_uppercase());
    }
    Ok(())
}

/// `schedule.xlsx` -> `schedule.ics`, or `schedule_January.ics` when a
/// sheet was selected, next to the input.
fn default_output(input: &Path, sheet: Option<&str>) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("schedule");
    let name = match sheet {
        Some(sheet) => format!("{stem}_{sheet}.ics"),
        None => format!("{stem}.ics"),
    };
    input.with_file_name(name)
}
