//! Interactive grid session.
//!
//! Drives one grid engine and the detail dialog from typed commands, the
//! way a visitor drives the page with the search box, season checkboxes and
//! detail buttons.

use std::io::{Stdout, Write};

use clap::{Parser, Subcommand};
use dossier_core::grid::GridEngine;
use dossier_core::modal::{Key, KeyOutcome, KeyPress, ModalController, PointerTarget};
use dossier_core::page::init_grid;
use dossier_types::EntityKind;

use crate::context::CliContext;
use crate::dialog::TerminalDialog;

#[derive(Parser)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct BrowseLine {
    #[command(subcommand)]
    command: BrowseCommand,
}

#[derive(Subcommand)]
enum BrowseCommand {
    /// Set the name search (no text clears it)
    Search { text: Vec<String> },
    /// Select or clear a season filter
    Season {
        value: String,
        #[arg(long)]
        off: bool,
    },
    /// Show or hide high-spoiler summaries (persisted)
    Spoilers {
        #[arg(value_parser = ["show", "hide"])]
        mode: String,
    },
    /// Names currently in the grid
    List,
    /// Current grid markup
    Show,
    /// Open the detail dialog for an entity id
    Open { id: String },
    /// Send a key to the open dialog (Escape, Tab)
    Key {
        name: String,
        #[arg(long)]
        shift: bool,
    },
    /// Click the dialog's close control
    Close,
    Exit,
}

pub struct BrowseSession {
    engine: GridEngine,
    modal: ModalController<TerminalDialog<Stdout>>,
}

impl BrowseSession {
    pub fn new(ctx: &CliContext, kind: EntityKind) -> Self {
        Self {
            engine: init_grid(kind, &ctx.catalog, &ctx.config, &ctx.store),
            modal: ModalController::new(Some(TerminalDialog::new(std::io::stdout()))),
        }
    }

    /// Handle one input line. Returns `Ok(true)` when the session should end.
    pub fn respond(&mut self, line: &str, ctx: &mut CliContext) -> Result<bool, String> {
        let args = shlex::split(line).ok_or("error: Invalid quoting")?;
        let parsed = BrowseLine::try_parse_from(args).map_err(|e| e.to_string())?;
        let mut out = std::io::stdout();

        match parsed.command {
            BrowseCommand::Search { text } => {
                self.engine.set_search(&text.join(" "));
                self.print_count(&mut out)?;
            }
            BrowseCommand::Season { value, off } => {
                self.engine.toggle_season_value(&value, !off);
                self.print_count(&mut out)?;
            }
            BrowseCommand::Spoilers { mode } => {
                if !self.engine.has_spoiler_toggle() {
                    return Err("this grid has no spoiler toggle".to_string());
                }
                self.engine.set_hide_spoilers(mode == "hide", &mut ctx.store);
            }
            BrowseCommand::List => {
                for entity in self.engine.filtered() {
                    writeln!(out, "{}  {}", entity.id, entity.name).map_err(|e| e.to_string())?;
                }
            }
            BrowseCommand::Show => {
                writeln!(out, "{}", self.engine.current().markup).map_err(|e| e.to_string())?;
            }
            BrowseCommand::Open { id } => {
                let request = self
                    .engine
                    .resolve_trigger(&id)
                    .ok_or_else(|| format!("no {} with id '{id}'", self.engine.kind()))?;
                self.modal.open(&request.entity, request.type_label);
            }
            BrowseCommand::Key { name, shift } => {
                let outcome = self.modal.handle_key(KeyPress {
                    key: Key::from_name(&name),
                    shift,
                });
                let focus = self
                    .modal
                    .host()
                    .and_then(TerminalDialog::active)
                    .unwrap_or("none");
                let label = match outcome {
                    KeyOutcome::Closed => "closed",
                    KeyOutcome::Trapped => "trapped",
                    KeyOutcome::PassThrough => "pass-through",
                };
                writeln!(out, "{label} (focus: {focus})").map_err(|e| e.to_string())?;
            }
            BrowseCommand::Close => {
                if !self.modal.handle_pointer(PointerTarget::CloseControl) {
                    writeln!(out, "no dialog open").map_err(|e| e.to_string())?;
                }
            }
            BrowseCommand::Exit => return Ok(true),
        }
        Ok(false)
    }

    fn print_count(&self, out: &mut impl Write) -> Result<(), String> {
        writeln!(
            out,
            "{} {} shown",
            self.engine.current().triggers.len(),
            self.engine.kind().plural()
        )
        .map_err(|e| e.to_string())
    }
}

/// Prompt and read one line from stdin
pub fn readline() -> Result<String, String> {
    write!(std::io::stdout(), "dossier> ").map_err(|e| e.to_string())?;
    std::io::stdout().flush().map_err(|e| e.to_string())?;
    let mut buffer = String::new();
    let read = std::io::stdin()
        .read_line(&mut buffer)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        // EOF ends the session like `exit`
        return Ok("exit".to_string());
    }
    Ok(buffer)
}

pub fn run(ctx: &mut CliContext, kind: EntityKind) -> Result<(), String> {
    let mut session = BrowseSession::new(ctx, kind);
    loop {
        let line = readline()?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match session.respond(line, ctx) {
            Ok(true) => break,
            Ok(false) => {}
            Err(err) => {
                writeln!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
            }
        }
    }
    Ok(())
}
