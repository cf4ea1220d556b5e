use std::io::Write;

use dossier_core::featured::render_featured;
use dossier_core::grid::{DetailRequest, GridEngine, GridOptions};
use dossier_core::modal::ModalController;
use dossier_core::page::{PageView, init_grid, init_page, init_timeline};
use dossier_types::{EntityKind, PageKind};
use serde_json::Value;

use crate::context::CliContext;
use crate::dialog::TerminalDialog;

fn emit(out: &mut impl Write, text: &str) -> Result<(), String> {
    writeln!(out, "{text}").map_err(|e| e.to_string())
}

/// Flip a persisted spoiler toggle only when the caller asked for it
fn spoiler_flag(show: bool, hide: bool) -> Option<bool> {
    match (show, hide) {
        (true, _) => Some(false),
        (false, true) => Some(true),
        (false, false) => None,
    }
}

pub fn render_page(ctx: &CliContext, page: PageKind, out: &mut impl Write) -> Result<(), String> {
    let view = init_page(page, &ctx.catalog, &ctx.config, &ctx.store);
    match view {
        PageView::Static => emit(out, "page has no enhanced view"),
        view => emit(out, view.markup().unwrap_or_default()),
    }
}

pub fn grid(
    ctx: &mut CliContext,
    kind: EntityKind,
    search: Option<&str>,
    seasons: &[String],
    show_spoilers: bool,
    hide_spoilers: bool,
    out: &mut impl Write,
) -> Result<(), String> {
    let mut engine = init_grid(kind, &ctx.catalog, &ctx.config, &ctx.store);
    if let Some(hide) = spoiler_flag(show_spoilers, hide_spoilers) {
        engine.set_hide_spoilers(hide, &mut ctx.store);
    }
    if let Some(text) = search {
        engine.set_search(text);
    }
    for value in seasons {
        engine.toggle_season_value(value, true);
    }

    tracing::debug!(
        results = engine.current().triggers.len(),
        total = ctx.catalog.set(kind).len(),
        "grid rendered"
    );
    emit(out, &engine.current().markup)
}

pub fn timeline(
    ctx: &mut CliContext,
    show_spoilers: bool,
    hide_spoilers: bool,
    out: &mut impl Write,
) -> Result<(), String> {
    let mut view = init_timeline(&ctx.catalog, &ctx.config, &ctx.store);
    if let Some(hide) = spoiler_flag(show_spoilers, hide_spoilers) {
        view.set_hide_spoilers(hide, &mut ctx.store);
    }
    emit(out, view.markup())
}

pub fn featured(ctx: &CliContext, out: &mut impl Write) -> Result<(), String> {
    let markup = render_featured(
        &ctx.catalog,
        &ctx.config.featured,
        ctx.config.summary_limits.featured,
    );
    emit(out, &markup)
}

/// Resolve a detail trigger the way a grid would. Without a kind, characters
/// are searched before villains.
pub fn resolve(ctx: &CliContext, id: &str, kind: Option<EntityKind>) -> Option<DetailRequest> {
    let kinds: &[EntityKind] = match &kind {
        Some(kind) => std::slice::from_ref(kind),
        None => EntityKind::all(),
    };
    kinds.iter().find_map(|&kind| {
        GridEngine::new(
            ctx.catalog.set(kind).clone(),
            GridOptions::for_kind(kind, &ctx.config),
            &ctx.store,
        )
        .resolve_trigger(id)
    })
}

/// Print the dialog a detail trigger for `id` would open.
pub fn modal<W: Write>(
    ctx: &CliContext,
    id: &str,
    kind: Option<EntityKind>,
    out: W,
) -> Result<W, String> {
    let request = resolve(ctx, id, kind).ok_or_else(|| format!("error: no entity with id '{id}'"))?;
    let mut controller = ModalController::new(Some(TerminalDialog::new(out)));
    controller.open(&request.entity, request.type_label);
    controller.close();
    controller
        .into_host()
        .map(TerminalDialog::into_inner)
        .ok_or_else(|| "error: dialog host lost".to_string())
}

// ─────────────────────────────────────────────────────────────────────────────
// Preferences
// ─────────────────────────────────────────────────────────────────────────────

pub fn prefs_get(ctx: &CliContext, key: &str, out: &mut impl Write) -> Result<(), String> {
    match ctx.store.raw(key) {
        Some(raw) => emit(out, &raw),
        None => Err(format!("error: no stored value for '{key}'")),
    }
}

/// Store `value` as JSON. Text that is not valid JSON is stored as a string.
pub fn prefs_set(ctx: &mut CliContext, key: &str, value: &str) -> Result<(), String> {
    let parsed = serde_json::from_str::<Value>(value)
        .unwrap_or_else(|_| Value::String(value.to_string()));
    ctx.store.set(key, &parsed);
    if ctx.store.raw(key).is_none() {
        return Err(format!(
            "error: failed to write preference file {}",
            ctx.prefs_path.display()
        ));
    }
    Ok(())
}

pub fn prefs_list(ctx: &CliContext, out: &mut impl Write) -> Result<(), String> {
    let keys = ctx.store.keys();
    if keys.is_empty() {
        return emit(out, &format!("no preferences stored in {}", ctx.prefs_path.display()));
    }
    for key in keys {
        let raw = ctx.store.raw(&key).unwrap_or_default();
        emit(out, &format!("{key} = {raw}"))?;
    }
    Ok(())
}
