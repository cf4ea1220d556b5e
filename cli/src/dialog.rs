//! Detail dialog rendered to a terminal.

use std::io::Write;

use dossier_core::modal::{DialogHost, FocusCandidate, ModalContent};

/// Dialog host that prints the dialog instead of drawing it.
///
/// Focus is tracked by control name so the focus trap behaves exactly as it
/// does in the browser.
pub struct TerminalDialog<W: Write> {
    out: W,
    controls: Vec<&'static str>,
    active: Option<&'static str>,
    open: bool,
}

impl<W: Write> TerminalDialog<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            controls: vec!["close", "profile-link"],
            active: Some("prompt"),
            open: false,
        }
    }

    pub fn active(&self) -> Option<&'static str> {
        self.active
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DialogHost for TerminalDialog<W> {
    type Element = &'static str;

    fn active_element(&self) -> Option<&'static str> {
        self.active
    }

    fn container(&self) -> &'static str {
        "dialog"
    }

    fn focus_candidates(&self) -> Vec<FocusCandidate<&'static str>> {
        self.controls
            .iter()
            .map(|&element| FocusCandidate {
                element,
                disabled: false,
            })
            .collect()
    }

    fn focus(&mut self, element: &&'static str) -> bool {
        self.active = Some(*element);
        true
    }

    fn can_focus(&self, _element: &&'static str) -> bool {
        true
    }

    fn populate(&mut self, content: &ModalContent) {
        let _ = write!(self.out, "{}", content.to_text());
    }

    fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    fn set_key_capture(&mut self, _capture: bool) {}
}
