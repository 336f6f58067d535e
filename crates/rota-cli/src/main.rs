use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;
use tracing_subscriber::EnvFilter;

/// Exam schedule toolkit: list courses and export schedule selections as a
/// PDF table.
#[derive(Parser)]
#[command(name = "rota", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the selectable courses in a schedule sheet.
    Courses {
        /// Path to the schedule sheet (CSV).
        file: PathBuf,
    },
    /// Export a course selection as a PDF table.
    Export {
        /// Path to the schedule sheet (CSV).
        file: PathBuf,
        /// Course code to include; repeat for several. Omitting the flag
        /// exports the whole schedule.
        #[arg(long = "course", value_name = "CODE")]
        courses: Vec<String>,
        /// Document title.
        #[arg(long, default_value = "Halic Üniversitesi - Sınav Programı")]
        title: String,
        /// Output file, overwritten on every export.
        #[arg(long, default_value = "sinav_programi.pdf")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Courses { file } => {
            let schedule = rota_sheet::load::load_schedule(&file)?;
            for course in schedule.courses() {
                println!("{}", course.label());
            }
        }
        Command::Export {
            file,
            courses,
            title,
            out,
        } => {
            let schedule = rota_sheet::load::load_schedule(&file)?;
            let rows = if courses.is_empty() {
                schedule.rows
            } else {
                schedule.filter_by_codes(&courses)
            };
            rota_export::pdf::write_schedule(&out, &rows, &title)?;
            println!("{}", out.display());
        }
    }
    Ok(())
}
