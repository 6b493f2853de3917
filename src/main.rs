use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing::{Level, debug};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use progress_letter::{
    LetterState, LetterStore,
    config::Config,
    draft::{draft_json, load_or_seeded},
    export::{copy_to_clipboard, export_file_name, file_context, today, write_letter},
    render::NAME_PLACEHOLDER,
    section_letter,
};

#[derive(Parser)]
#[command(name = "progress-letter")]
#[command(about = "Compose progress-report letters for tutoring students")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a JSON draft to start editing from
    Template {
        /// Leave every field empty instead of using the pre-filled wording
        #[arg(long)]
        blank: bool,
    },
    /// Print the rendered letter
    Render {
        /// JSON draft (pre-filled letter if omitted)
        #[arg(value_name = "DRAFT")]
        draft: Option<PathBuf>,
    },
    /// Write the rendered letter to a .txt file
    Export {
        #[arg(value_name = "DRAFT")]
        draft: Option<PathBuf>,

        /// Directory to write into (defaults to LETTER_EXPORT_DIR or ".")
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,

        /// Context part of the file name (defaults to the recipient)
        #[arg(long, value_name = "NAME")]
        context: Option<String>,
    },
    /// Copy the rendered letter to the clipboard
    Copy {
        #[arg(value_name = "DRAFT")]
        draft: Option<PathBuf>,
    },
    /// List the student sections of a draft
    Students {
        #[arg(value_name = "DRAFT")]
        draft: Option<PathBuf>,
    },
    /// Open the letter form
    #[cfg(feature = "gui")]
    Gui {
        #[arg(value_name = "DRAFT")]
        draft: Option<PathBuf>,
    },
}

fn init_logging(level: Level) {
    tracing_subscriber::registry()
        .with(EnvFilter::new(level.to_string()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let config = Config::from_env()?;
    init_logging(if args.verbose { Level::DEBUG } else { config.log_level });
    debug!(?config, "configuration loaded");

    let stdout = std::io::stdout();
    execute(args.command, config, &mut stdout.lock())
}

fn execute(command: Command, config: Config, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        Command::Template { blank } => {
            let state = if blank {
                LetterState::default()
            } else {
                LetterState::seeded()
            };
            writeln!(out, "{}", draft_json(&state)?)?;
        }
        Command::Render { draft } => {
            // Exactly the letter bytes, no trailing newline, same as `export` writes.
            let store = LetterStore::new(load_or_seeded(draft)?);
            write!(out, "{}", store.rendered_letter())?;
        }
        Command::Export {
            draft,
            out_dir,
            context,
        } => {
            let store = LetterStore::new(load_or_seeded(draft)?);
            let context = context
                .or(config.file_context)
                .unwrap_or_else(|| file_context(&store.state().recipient));
            let file_name = export_file_name(&context, today())?;
            let dir = out_dir.unwrap_or(config.export_dir);
            let path = write_letter(&dir, &file_name, &store.rendered_letter())?;
            writeln!(out, "{}", path.display())?;
        }
        Command::Copy { draft } => {
            let store = LetterStore::new(load_or_seeded(draft)?);
            #[cfg(target_os = "linux")]
            eprintln!("Letter is on the clipboard; paste it before this command exits.");
            copy_to_clipboard(&store.rendered_letter())?;
        }
        Command::Students { draft } => {
            let state = load_or_seeded(draft)?;
            for (index, student) in state.students.iter().enumerate() {
                let name = if student.name.is_empty() {
                    NAME_PLACEHOLDER
                } else {
                    &student.name
                };
                writeln!(out, "{}  {}  {}", section_letter(index), student.id, name)?;
            }
        }
        #[cfg(feature = "gui")]
        Command::Gui { draft } => {
            progress_letter::gui::run(load_or_seeded(draft)?, config.file_context)?;
        }
    }

    out.flush()?;
    Ok(())
}
