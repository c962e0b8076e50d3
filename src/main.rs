// ABOUTME: Entry point for the gradebook binary.
// ABOUTME: Parses CLI arguments, initializes tracing, opens the record store, and runs one command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gradebook_core::{RecordUpdate, StudentRecord, assess, export::join_grades, parse_grades};
use gradebook_store::{
    ExportError, GradebookConfig, JsonFileGateway, RecordStore, write_table_report,
    write_text_report,
};

#[derive(Parser, Debug)]
#[command(name = "gradebook", about = "Manage student records and grades")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Register a new student.
    Enroll {
        name: String,
        enrollment_id: String,
        course: String,
    },
    /// Change a student's name and/or course.
    Update {
        enrollment_id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        course: Option<String>,
    },
    /// Remove a student (no error if absent).
    Delete { enrollment_id: String },
    /// Append comma-separated grades, e.g. "7, 8.5".
    AddGrades {
        enrollment_id: String,
        grades: String,
    },
    /// Replace all grades with a comma-separated list.
    SetGrades {
        enrollment_id: String,
        grades: String,
    },
    /// Show a student's average and situation.
    Situation { enrollment_id: String },
    /// Find a student by enrollment id or name.
    Find { identifier: String },
    /// List all students.
    List,
    /// Print every student with average and situation.
    Report,
    /// Export the plain-text report.
    ExportText {
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Export the semicolon-delimited table report.
    ExportTable {
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gradebook=info,gradebook_store=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GradebookConfig::from_env()?;

    let mut store = RecordStore::open(JsonFileGateway::new(&config.data_file))
        .with_context(|| format!("failed to open {}", config.data_file.display()))?;
    tracing::debug!(
        "using data file {} ({} records)",
        store.gateway().path().display(),
        store.len()
    );

    run(cli.command, &mut store, &config)
}

fn run(command: Command, store: &mut RecordStore, config: &GradebookConfig) -> Result<()> {
    match command {
        Command::Enroll {
            name,
            enrollment_id,
            course,
        } => {
            store.enroll(&name, &enrollment_id, &course)?;
            println!("Student {} enrolled.", name);
        }
        Command::Update {
            enrollment_id,
            name,
            course,
        } => {
            let update = RecordUpdate {
                name: name.filter(|n| !n.is_empty()),
                course: course.filter(|c| !c.is_empty()),
            };
            if update.is_empty() {
                tracing::warn!("no --name or --course given; {} left unchanged", enrollment_id);
            }
            store.update_fields(&enrollment_id, &update)?;
            println!("Student {} updated.", enrollment_id);
        }
        Command::Delete { enrollment_id } => {
            if store.delete(&enrollment_id)? {
                println!("Student {} deleted.", enrollment_id);
            } else {
                println!("No student {}; nothing deleted.", enrollment_id);
            }
        }
        Command::AddGrades {
            enrollment_id,
            grades,
        } => {
            let grades = parse_grades(&grades)?;
            let record = store.append_grades(&enrollment_id, &grades)?;
            println!("Grades recorded for {}.", record.name);
        }
        Command::SetGrades {
            enrollment_id,
            grades,
        } => {
            let grades = parse_grades(&grades)?;
            let record = store.replace_grades(&enrollment_id, grades)?;
            println!("Grades replaced for {}.", record.name);
        }
        Command::Situation { enrollment_id } => {
            let assessment = store.assess(&enrollment_id)?;
            match assessment.average {
                Some(_) => println!(
                    "Average: {} | Situation: {}",
                    assessment.average_display(),
                    assessment.situation
                ),
                None => println!("This student has no grades yet."),
            }
        }
        Command::Find { identifier } => match store.lookup(&identifier) {
            Some(record) => print_record(record),
            None => println!("Student not found."),
        },
        Command::List => {
            if store.is_empty() {
                println!("No students enrolled.");
            }
            for record in store.list() {
                println!(
                    "- {} (Matrícula: {}, Curso: {})",
                    record.name, record.enrollment_id, record.course
                );
            }
        }
        Command::Report => {
            if store.is_empty() {
                println!("No students enrolled.");
            }
            for record in store.list() {
                let assessment = assess(&record.grades);
                println!();
                print_record(record);
                println!("Média: {}", assessment.average_display());
                println!("Situação: {}", assessment.situation);
            }
        }
        Command::ExportText { output } => {
            let path = output.unwrap_or_else(|| config.text_report_path());
            report_export(write_text_report(&path, store.list()), &path)?;
        }
        Command::ExportTable { output } => {
            let path = output.unwrap_or_else(|| config.table_report_path());
            report_export(write_table_report(&path, store.list()), &path)?;
        }
    }

    Ok(())
}

fn print_record(record: &StudentRecord) {
    println!("Nome: {}", record.name);
    println!("Matrícula: {}", record.enrollment_id);
    println!("Curso: {}", record.course);
    println!("Notas: [{}]", join_grades(&record.grades));
}

fn report_export(result: Result<(), ExportError>, path: &std::path::Path) -> Result<()> {
    match result {
        Ok(()) => {
            println!("Report exported to {}", path.display());
            Ok(())
        }
        Err(ExportError::Empty) => {
            println!("No students to export.");
            Ok(())
        }
        Err(e) => Err(e).with_context(|| format!("failed to write {}", path.display())),
    }
}
