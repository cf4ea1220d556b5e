use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use dossier_cli::{CliContext, browse, commands, logging};
use dossier_types::{EntityKind, PageKind};

#[derive(Parser)]
#[command(version, about = "Render Dossier pages and manage stored preferences")]
struct Cli {
    /// Catalog JSON with `characters` and `villains` arrays
    #[arg(short, long, default_value = "data.json", global = true)]
    data: PathBuf,

    /// Preference file (defaults to the configured location)
    #[arg(long, global = true)]
    prefs: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    Character,
    Villain,
}

impl From<Kind> for EntityKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Character => EntityKind::Character,
            Kind::Villain => EntityKind::Villain,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render the main region of a page (home, characters, villains, timeline)
    Page { page: String },
    /// Render a card grid
    Grid {
        #[arg(short, long, value_enum)]
        kind: Kind,
        #[arg(short, long)]
        search: Option<String>,
        /// Season filter; repeat to select several
        #[arg(long = "season")]
        seasons: Vec<String>,
        /// Turn the persisted spoiler toggle off
        #[arg(long, conflicts_with = "hide_spoilers")]
        show_spoilers: bool,
        /// Turn the persisted spoiler toggle on
        #[arg(long)]
        hide_spoilers: bool,
    },
    /// Render the season timeline
    Timeline {
        #[arg(long, conflicts_with = "hide_spoilers")]
        show_spoilers: bool,
        #[arg(long)]
        hide_spoilers: bool,
    },
    /// Render the home page featured cards
    Featured,
    /// Print the detail dialog for an entity
    Modal {
        #[arg(long)]
        id: String,
        #[arg(short, long, value_enum)]
        kind: Option<Kind>,
    },
    /// Inspect or edit stored preferences
    Prefs {
        #[command(subcommand)]
        action: PrefsAction,
    },
    /// Interactive grid session
    Browse {
        #[arg(short, long, value_enum, default_value = "character")]
        kind: Kind,
    },
}

#[derive(Subcommand)]
enum PrefsAction {
    Get { key: String },
    Set { key: String, value: String },
    List,
}

fn main() -> Result<(), String> {
    logging::init();
    let cli = Cli::parse();
    let mut ctx = if matches!(cli.command, Commands::Prefs { .. }) {
        CliContext::preferences(cli.prefs)
    } else {
        CliContext::new(&cli.data, cli.prefs)?
    };
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Page { page } => commands::render_page(&ctx, PageKind::from_attr(&page), &mut out),
        Commands::Grid {
            kind,
            search,
            seasons,
            show_spoilers,
            hide_spoilers,
        } => commands::grid(
            &mut ctx,
            kind.into(),
            search.as_deref(),
            &seasons,
            show_spoilers,
            hide_spoilers,
            &mut out,
        ),
        Commands::Timeline {
            show_spoilers,
            hide_spoilers,
        } => commands::timeline(&mut ctx, show_spoilers, hide_spoilers, &mut out),
        Commands::Featured => commands::featured(&ctx, &mut out),
        Commands::Modal { id, kind } => {
            commands::modal(&ctx, &id, kind.map(Into::into), out).map(|_| ())
        }
        Commands::Prefs { action } => match action {
            PrefsAction::Get { key } => commands::prefs_get(&ctx, &key, &mut out),
            PrefsAction::Set { key, value } => commands::prefs_set(&mut ctx, &key, &value),
            PrefsAction::List => commands::prefs_list(&ctx, &mut out),
        },
        Commands::Browse { kind } => {
            drop(out);
            browse::run(&mut ctx, kind.into())
        }
    }
}
