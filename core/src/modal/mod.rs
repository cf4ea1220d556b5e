//! Detail dialog state machine
//!
//! The controller owns the open/close lifecycle, focus containment and
//! keyboard handling. All DOM access goes through a [`DialogHost`]; a
//! controller without a host (the page has no dialog markup) accepts every
//! call and does nothing.
//!
//! States: `Closed` (no session) and `Open` (a [`ModalSession`] exists). The
//! session is created on open and dropped on close.

mod content;

pub use content::{ModalContent, ModalList, NO_ALIASES, NO_EPISODES};

use std::fmt;

use dossier_types::Entity;

// ─────────────────────────────────────────────────────────────────────────────
// Host
// ─────────────────────────────────────────────────────────────────────────────

/// Selector for elements that can take focus inside the dialog.
pub const FOCUSABLE_SELECTOR: &str =
    r#"button, [href], input, select, textarea, [tabindex]:not([tabindex="-1"])"#;

/// A focusable element found inside the dialog container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusCandidate<E> {
    pub element: E,
    pub disabled: bool,
}

/// The dialog's DOM as seen by the controller.
pub trait DialogHost {
    /// Handle to one element. Compared by identity.
    type Element: Clone + PartialEq + fmt::Debug;

    /// Element that currently has focus
    fn active_element(&self) -> Option<Self::Element>;

    /// The dialog container, focused when it holds no focusable controls
    fn container(&self) -> Self::Element;

    /// Elements matching [`FOCUSABLE_SELECTOR`] in document order
    fn focus_candidates(&self) -> Vec<FocusCandidate<Self::Element>>;

    /// Move focus. Returns false if the element refused it.
    fn focus(&mut self, element: &Self::Element) -> bool;

    /// Whether `element` can still take focus (e.g. is still in the document)
    fn can_focus(&self, element: &Self::Element) -> bool;

    fn populate(&mut self, content: &ModalContent);

    /// Show or hide the dialog (`is-open`, `aria-hidden`)
    fn set_open(&mut self, open: bool);

    /// Start or stop routing document key presses to the controller
    fn set_key_capture(&mut self, capture: bool);
}

// ─────────────────────────────────────────────────────────────────────────────
// Input
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Tab,
    Other,
}

impl Key {
    /// Map a `KeyboardEvent.key` value
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Key::Escape,
            "Tab" => Key::Tab,
            _ => Key::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub shift: bool,
}

impl KeyPress {
    pub fn new(key: Key) -> Self {
        Self { key, shift: false }
    }

    pub fn shifted(key: Key) -> Self {
        Self { key, shift: true }
    }
}

/// What the controller did with a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The dialog was closed
    Closed,
    /// Focus wrapped inside the dialog; the caller must suppress the default action
    Trapped,
    /// Not handled; the browser's default applies
    PassThrough,
}

/// Where a pointer activation landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The overlay itself, outside the dialog content
    Backdrop,
    CloseControl,
    Content,
}

// ─────────────────────────────────────────────────────────────────────────────
// Session & Controller
// ─────────────────────────────────────────────────────────────────────────────

/// State that exists only while the dialog is open.
#[derive(Debug, Clone)]
pub struct ModalSession<E> {
    entity: Entity,
    content: ModalContent,
    focusables: Vec<E>,
    prior_focus: Option<E>,
}

impl<E> ModalSession<E> {
    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn content(&self) -> &ModalContent {
        &self.content
    }

    pub fn focusables(&self) -> &[E] {
        &self.focusables
    }

    /// Element to refocus on close
    pub fn prior_focus(&self) -> Option<&E> {
        self.prior_focus.as_ref()
    }
}

pub struct ModalController<H: DialogHost> {
    host: Option<H>,
    session: Option<ModalSession<H::Element>>,
}

impl<H: DialogHost> Default for ModalController<H> {
    fn default() -> Self {
        Self::detached()
    }
}

impl<H: DialogHost> ModalController<H> {
    pub fn new(host: Option<H>) -> Self {
        Self {
            host,
            session: None,
        }
    }

    /// Controller for a page without dialog markup
    pub fn detached() -> Self {
        Self::new(None)
    }

    pub fn attach(&mut self, host: H) {
        self.host = Some(host);
    }

    pub fn has_host(&self) -> bool {
        self.host.is_some()
    }

    pub fn host(&self) -> Option<&H> {
        self.host.as_ref()
    }

    pub fn host_mut(&mut self) -> Option<&mut H> {
        self.host.as_mut()
    }

    /// Give the host back, dropping any open session without closing it
    pub fn into_host(self) -> Option<H> {
        self.host
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&ModalSession<H::Element>> {
        self.session.as_ref()
    }

    /// Show `entity` in the dialog and move focus inside it.
    ///
    /// Opening while already open replaces the content but keeps the original
    /// focus restoration target. Returns false when there is no dialog.
    pub fn open(&mut self, entity: &Entity, type_label: &str) -> bool {
        let Some(host) = self.host.as_mut() else {
            tracing::debug!(id = %entity.id, "no dialog on this page, ignoring open");
            return false;
        };

        let prior_focus = match self.session.take() {
            Some(previous) => previous.prior_focus,
            None => host.active_element(),
        };

        let content = ModalContent::from_entity(entity, type_label);
        host.populate(&content);
        host.set_open(true);

        let focusables: Vec<H::Element> = host
            .focus_candidates()
            .into_iter()
            .filter(|candidate| !candidate.disabled)
            .map(|candidate| candidate.element)
            .collect();

        let target = focusables
            .first()
            .cloned()
            .unwrap_or_else(|| host.container());
        if !host.focus(&target) {
            tracing::debug!(element = ?target, "initial dialog focus refused");
        }
        host.set_key_capture(true);

        tracing::debug!(id = %entity.id, focusables = focusables.len(), "dialog opened");
        self.session = Some(ModalSession {
            entity: entity.clone(),
            content,
            focusables,
            prior_focus,
        });
        true
    }

    /// Hide the dialog, stop key capture and restore focus.
    ///
    /// Returns false if nothing was open.
    pub fn close(&mut self) -> bool {
        let Some(host) = self.host.as_mut() else {
            return false;
        };
        let Some(session) = self.session.take() else {
            return false;
        };

        host.set_open(false);
        host.set_key_capture(false);
        if let Some(prior) = session.prior_focus
            && host.can_focus(&prior)
        {
            host.focus(&prior);
        }

        tracing::debug!(id = %session.entity.id, "dialog closed");
        true
    }

    /// Route a document key press while the dialog is open.
    pub fn handle_key(&mut self, press: KeyPress) -> KeyOutcome {
        if self.session.is_none() {
            return KeyOutcome::PassThrough;
        }

        match press.key {
            Key::Escape => {
                self.close();
                KeyOutcome::Closed
            }
            Key::Tab => self.cycle_focus(press.shift),
            Key::Other => KeyOutcome::PassThrough,
        }
    }

    /// Route a pointer activation on the dialog overlay.
    pub fn handle_pointer(&mut self, target: PointerTarget) -> bool {
        match target {
            PointerTarget::Backdrop | PointerTarget::CloseControl => self.close(),
            PointerTarget::Content => false,
        }
    }

    fn cycle_focus(&mut self, backwards: bool) -> KeyOutcome {
        let (Some(host), Some(session)) = (self.host.as_mut(), self.session.as_ref()) else {
            return KeyOutcome::PassThrough;
        };
        let (Some(first), Some(last)) = (session.focusables.first(), session.focusables.last())
        else {
            return KeyOutcome::PassThrough;
        };

        let active = host.active_element();
        let wrap_to = match (backwards, active.as_ref()) {
            (true, Some(current)) if current == first => last,
            (false, Some(current)) if current == last => first,
            _ => return KeyOutcome::PassThrough,
        };

        host.focus(wrap_to);
        KeyOutcome::Trapped
    }
}

impl<H: DialogHost> fmt::Debug for ModalController<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalController")
            .field("has_host", &self.host.is_some())
            .field("open", &self.is_open())
            .finish()
    }
}
