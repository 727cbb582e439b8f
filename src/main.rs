//! ucplan - marketing use case planner.
//!
//! Walks a use case through nine phases, keeps the answers in a local form
//! state and exports them as markdown.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ucplan::catalog::{self, PhaseDefinition};
use ucplan::core::{
    Config, FileStorage, FormError, StakeholderAttribute, StakeholderRole, StateStore,
};
use ucplan::export::{
    self, copy_to_clipboard, download_markdown, export_filename, SystemClipboard, NO_PHASE_SELECTED,
};
use ucplan::markdown::MarkdownGenerator;
use ucplan::{markdown_to_html, view};

/// Marketing use case planner
#[derive(Parser)]
#[command(name = "ucplan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Subcommand to run (defaults to the timeline)
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use this config file instead of the default lookup
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the stored form state
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every phase with its data status
    Timeline {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Include each phase's deliverables
        #[arg(short, long)]
        deliverables: bool,
    },

    /// Show one phase with its questions and current answers
    Show {
        /// Phase number (1-9)
        phase: u8,
    },

    /// Set a form field, score or checklist key
    Set {
        /// Form key, e.g. useCaseName or score_customerValue
        key: String,

        /// Value to store
        value: String,
    },

    /// Score an axis from 1 to 5
    Score {
        /// Axis id, e.g. strategicAlignment
        axis: String,

        /// Score (1-5)
        value: i64,
    },

    /// Tick (or untick) a checklist question
    Check {
        /// Phase number (1-9)
        phase: u8,

        /// Question index, starting at 0
        index: usize,

        /// Untick instead of tick
        #[arg(long)]
        off: bool,
    },

    /// Update the owner or support stakeholder
    Stakeholder {
        /// Which stakeholder record
        #[arg(value_name = "WHO")]
        record: RoleArg,

        #[arg(long)]
        name: Option<String>,

        /// Job title
        #[arg(long)]
        role: Option<String>,

        #[arg(long)]
        company: Option<String>,

        #[arg(long)]
        team: Option<String>,

        #[arg(long)]
        email: Option<String>,

        /// Involvement & responsibilities
        #[arg(long)]
        remarks: Option<String>,
    },

    /// Write a phase (or all phases) to a markdown file
    Export {
        /// Phase number (1-9)
        phase: Option<u8>,

        /// Export every phase into one document
        #[arg(short, long, conflicts_with = "phase")]
        all: bool,

        /// Output directory (defaults to the configured one)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the markdown instead of writing a file
        #[arg(long)]
        stdout: bool,
    },

    /// Print the HTML preview of a phase (or all phases)
    Preview {
        /// Phase number (1-9)
        phase: Option<u8>,

        /// Preview every phase
        #[arg(short, long, conflicts_with = "phase")]
        all: bool,

        /// Print the raw markdown instead of HTML
        #[arg(long)]
        raw: bool,
    },

    /// Copy a phase (or all phases) to the clipboard
    Copy {
        /// Phase number (1-9)
        phase: Option<u8>,

        /// Copy every phase
        #[arg(short, long, conflicts_with = "phase")]
        all: bool,
    },

    /// Show configuration
    Config {
        /// Show the config file path
        #[arg(long)]
        path: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum RoleArg {
    Owner,
    Support,
}

impl From<RoleArg> for StakeholderRole {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Owner => Self::Owner,
            RoleArg::Support => Self::Support,
        }
    }
}

/// Which document a command works on.
#[derive(Clone, Copy)]
enum Selection {
    Phase(&'static PhaseDefinition),
    All,
    Nothing,
}

impl Selection {
    fn resolve(phase: Option<u8>, all: bool) -> Result<Self> {
        if all {
            return Ok(Self::All);
        }
        match phase {
            Some(id) => Ok(Self::Phase(catalog::phase(id).ok_or(FormError::UnknownPhase(id))?)),
            None => Ok(Self::Nothing),
        }
    }

    fn document(self, store: &StateStore<FileStorage>) -> String {
        let generator = MarkdownGenerator::new();
        match self {
            Self::Phase(phase) => export::phase_document(&generator, Some(phase), store.state()),
            Self::All => export::all_phases_document(&generator, catalog::phases(), store.state()),
            Self::Nothing => NO_PHASE_SELECTED.to_string(),
        }
    }

    fn filename(self, config: &Config) -> String {
        match self {
            Self::Phase(phase) => export_filename(Some(phase)),
            Self::All => config.export.all_filename.clone(),
            Self::Nothing => export_filename(None),
        }
    }

    fn describe(self) -> String {
        match self {
            Self::Phase(phase) => phase.title.clone(),
            Self::All => "all phases".to_string(),
            Self::Nothing => "no phase".to_string(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();

    // Completions need neither config nor state
    if let Some(Commands::Completions { shell }) = cli.command {
        cmd_completions(shell);
        return Ok(());
    }

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        None => {
            cmd_timeline(&config, cli.data_dir.as_deref(), "text", false)?;
        }
        Some(Commands::Timeline { format, deliverables }) => {
            cmd_timeline(&config, cli.data_dir.as_deref(), &format, deliverables)?;
        }
        Some(Commands::Show { phase }) => {
            cmd_show(&config, cli.data_dir.as_deref(), phase)?;
        }
        Some(Commands::Set { key, value }) => {
            cmd_set(&config, cli.data_dir.as_deref(), &key, &value)?;
        }
        Some(Commands::Score { axis, value }) => {
            cmd_score(&config, cli.data_dir.as_deref(), &axis, value)?;
        }
        Some(Commands::Check { phase, index, off }) => {
            cmd_check(&config, cli.data_dir.as_deref(), phase, index, !off)?;
        }
        Some(Commands::Stakeholder { record, name, role, company, team, email, remarks }) => {
            let updates = [
                (StakeholderAttribute::Name, name),
                (StakeholderAttribute::Role, role),
                (StakeholderAttribute::Company, company),
                (StakeholderAttribute::Team, team),
                (StakeholderAttribute::Email, email),
                (StakeholderAttribute::Remarks, remarks),
            ];
            cmd_stakeholder(&config, cli.data_dir.as_deref(), record.into(), &updates)?;
        }
        Some(Commands::Export { phase, all, output, stdout }) => {
            let selection = Selection::resolve(phase, all)?;
            cmd_export(&config, cli.data_dir.as_deref(), selection, output.as_deref(), stdout)?;
        }
        Some(Commands::Preview { phase, all, raw }) => {
            let selection = Selection::resolve(phase, all)?;
            cmd_preview(&config, cli.data_dir.as_deref(), selection, raw)?;
        }
        Some(Commands::Copy { phase, all }) => {
            let selection = Selection::resolve(phase, all)?;
            cmd_copy(&config, cli.data_dir.as_deref(), selection)?;
        }
        Some(Commands::Config { path }) => {
            cmd_config(&config, cli.config.as_deref(), path)?;
        }
        Some(Commands::Completions { .. }) => {}
    }

    Ok(())
}

/// Load configuration from an explicit file or the default lookup.
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Config::load(),
    }
}

/// Open the form state store.
///
/// The data directory comes from `--data-dir`, then the config, then the
/// platform default.
fn open_store(config: &Config, data_dir: Option<&Path>) -> Result<StateStore<FileStorage>> {
    let dir = match data_dir.map(Path::to_path_buf).or_else(|| config.storage.data_dir.clone()) {
        Some(dir) => dir,
        None => FileStorage::default_dir()?,
    };
    Ok(StateStore::open(FileStorage::new(dir), config.storage.key.clone()))
}

/// Show the process timeline.
fn cmd_timeline(
    config: &Config,
    data_dir: Option<&Path>,
    format: &str,
    deliverables: bool,
) -> Result<()> {
    let store = open_store(config, data_dir)?;
    let entries = view::timeline(&MarkdownGenerator::new(), store.state(), deliverables);

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&entries)?;
            println!("{json}");
        }
        _ => {
            println!("{}", view::timeline::render_text(&entries));
        }
    }

    Ok(())
}

/// Show one phase in detail.
fn cmd_show(config: &Config, data_dir: Option<&Path>, phase_id: u8) -> Result<()> {
    let phase = catalog::phase(phase_id).ok_or(FormError::UnknownPhase(phase_id))?;
    let store = open_store(config, data_dir)?;

    println!("{}", view::detail::render_text(phase, store.state()));
    Ok(())
}

/// Set a single key.
fn cmd_set(config: &Config, data_dir: Option<&Path>, key: &str, value: &str) -> Result<()> {
    let mut store = open_store(config, data_dir)?;
    store.update(key, value)?;

    println!("Set {key}");
    Ok(())
}

/// Score an axis.
fn cmd_score(config: &Config, data_dir: Option<&Path>, axis: &str, value: i64) -> Result<()> {
    let mut store = open_store(config, data_dir)?;
    store.set_score(axis, value)?;

    println!("Scored {axis}: {value}/5");
    Ok(())
}

/// Tick or untick a checklist question.
fn cmd_check(
    config: &Config,
    data_dir: Option<&Path>,
    phase: u8,
    index: usize,
    checked: bool,
) -> Result<()> {
    let mut store = open_store(config, data_dir)?;
    store.set_checklist(phase, index, checked)?;

    let mark = if checked { "✅" } else { "❌" };
    println!("{mark} Phase {phase} question {index}");
    Ok(())
}

/// Update stakeholder attributes.
fn cmd_stakeholder(
    config: &Config,
    data_dir: Option<&Path>,
    role: StakeholderRole,
    updates: &[(StakeholderAttribute, Option<String>)],
) -> Result<()> {
    let updates: Vec<_> =
        updates.iter().filter_map(|(attr, value)| value.as_deref().map(|v| (*attr, v))).collect();
    if updates.is_empty() {
        anyhow::bail!(
            "Nothing to update. Pass at least one of --name, --role, --company, --team, --email, --remarks"
        );
    }

    let mut store = open_store(config, data_dir)?;
    for (attribute, value) in &updates {
        store.set_stakeholder(role, *attribute, value)?;
    }

    println!("Updated {} ({} field(s))", role.display_name(), updates.len());
    Ok(())
}

/// Export markdown to a file or stdout.
fn cmd_export(
    config: &Config,
    data_dir: Option<&Path>,
    selection: Selection,
    output: Option<&Path>,
    stdout: bool,
) -> Result<()> {
    let store = open_store(config, data_dir)?;
    let markdown = selection.document(&store);

    if stdout {
        print!("{markdown}");
        return Ok(());
    }

    let dir = output.unwrap_or(config.export.output_dir.as_path());
    let path = download_markdown(dir, &selection.filename(config), &markdown)?;

    println!("Exported {} to {}", selection.describe(), path.display());
    Ok(())
}

/// Print the preview.
fn cmd_preview(
    config: &Config,
    data_dir: Option<&Path>,
    selection: Selection,
    raw: bool,
) -> Result<()> {
    let store = open_store(config, data_dir)?;
    let markdown = selection.document(&store);

    if raw {
        print!("{markdown}");
    } else {
        println!("{}", markdown_to_html(&markdown));
    }

    Ok(())
}

/// Copy markdown to the clipboard.
fn cmd_copy(config: &Config, data_dir: Option<&Path>, selection: Selection) -> Result<()> {
    let store = open_store(config, data_dir)?;
    let markdown = selection.document(&store);
    let clipboard = SystemClipboard::from_config(&config.clipboard);

    let rt = tokio::runtime::Runtime::new()?;
    let copied = rt.block_on(copy_to_clipboard(&clipboard, &markdown));

    if !copied {
        anyhow::bail!("Failed to copy {} to the clipboard", selection.describe());
    }

    println!("✅ Copied {} to the clipboard", selection.describe());
    Ok(())
}

/// Show configuration.
fn cmd_config(config: &Config, explicit: Option<&Path>, show_path: bool) -> Result<()> {
    if show_path {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(Config::find_file)
            .or_else(Config::global_file);
        if let Some(path) = path {
            println!("{}", path.display());
        }
        return Ok(());
    }

    let toml = toml::to_string_pretty(config)?;
    println!("{toml}");

    Ok(())
}

/// Generate shell completions.
fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "ucplan", &mut io::stdout());
}
