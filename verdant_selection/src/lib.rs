// Copyright 2026 the Verdant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Verdant Selection: county selection and focus state for the atlas
//! surfaces.
//!
//! Both the map and the chart consult one [`SelectionController`] to decide
//! what to highlight and which counties to query. The controller is a small
//! state machine with two modes:
//!
//! - **Browsing**: up to [`MAX_COMPARE`] counties selected for comparison,
//!   in selection order. Order matters downstream: the first selected
//!   county receives the first categorical comparison color, and the
//!   cross-surface handoff preserves it.
//! - **Focused**: exactly one county is pinned; the pre-focus selection is
//!   saved and restored verbatim on exit, including its order.
//!
//! Attempts to grow the selection past the limit are rejected, not
//! truncated: [`SelectionController::toggle`] reports
//! [`ToggleOutcome::LimitReached`] so the presentation layer can flash its
//! transient notice. While focused, toggles are ignored entirely; the
//! focused view replaces the multi-select interaction surface.
//!
//! A monotonically increasing revision counter bumps whenever the semantic
//! state changes, giving observers a cheap "did anything change?" marker.
//!
//! ## Minimal example
//!
//! ```rust
//! use verdant_selection::{SelectionController, ToggleOutcome};
//!
//! let counties = ["Alameda", "Fresno", "Kern", "Marin"];
//! let mut sel = SelectionController::new(counties.iter().map(|c| (*c).into()));
//!
//! assert_eq!(sel.toggle("Alameda"), ToggleOutcome::Added);
//! assert_eq!(sel.toggle("Fresno"), ToggleOutcome::Added);
//! assert_eq!(sel.toggle("Kern"), ToggleOutcome::Added);
//! assert_eq!(sel.toggle("Marin"), ToggleOutcome::LimitReached);
//!
//! sel.focus("Fresno");
//! assert_eq!(sel.selected(), ["Fresno"]);
//! sel.exit_focus();
//! assert_eq!(sel.selected(), ["Alameda", "Fresno", "Kern"]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use smallvec::SmallVec;

/// Maximum number of counties that can be selected for comparison.
pub const MAX_COMPARE: usize = 3;

type Selected = SmallVec<[String; MAX_COMPARE]>;

/// Result of a [`SelectionController::toggle`] call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[must_use]
pub enum ToggleOutcome {
    /// The county was appended to the selection.
    Added,
    /// The county was already selected and has been removed.
    Removed,
    /// The selection is full; nothing changed. Presentation layers show a
    /// transient "limit reached" notice for this outcome.
    LimitReached,
    /// The controller is focused; toggles are ignored in that mode.
    Ignored,
}

#[derive(Clone, Debug)]
enum CompareState {
    Browsing { selected: Selected },
    Focused { county: String, saved: Selected },
}

/// The selection/focus state machine shared by the atlas surfaces.
///
/// The controller is constructed over the boundary dataset's county list
/// (normalized names); focus requests for counties outside that list are
/// no-ops, matching how the map ignores activations on features it cannot
/// resolve.
#[derive(Clone, Debug)]
pub struct SelectionController {
    known: Vec<String>,
    state: CompareState,
    revision: u64,
}

impl SelectionController {
    /// Creates a controller over the known county names.
    ///
    /// Names must already be in the shared normalized form (no `" County"`
    /// suffix, trimmed); the controller compares them verbatim.
    pub fn new<I>(known: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            known: known.into_iter().collect(),
            state: CompareState::Browsing {
                selected: Selected::new(),
            },
            revision: 0,
        }
    }

    /// The county names this controller was constructed over.
    #[must_use]
    pub fn counties(&self) -> &[String] {
        &self.known
    }

    /// The currently selected counties, in selection order.
    ///
    /// While focused this is exactly the focused county.
    #[must_use]
    pub fn selected(&self) -> &[String] {
        match &self.state {
            CompareState::Browsing { selected } => selected,
            CompareState::Focused { county, .. } => core::slice::from_ref(county),
        }
    }

    /// The focused county, if any.
    #[must_use]
    pub fn focused(&self) -> Option<&str> {
        match &self.state {
            CompareState::Browsing { .. } => None,
            CompareState::Focused { county, .. } => Some(county),
        }
    }

    /// Returns `true` while a county is focused.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused().is_some()
    }

    /// The current revision counter.
    ///
    /// Bumped only when the semantic state changes; rejected toggles and
    /// out-of-mode requests leave it untouched.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The ordered county list handed off between surfaces.
    ///
    /// Order is preserved from selection order because it determines
    /// categorical color assignment on the receiving surface.
    #[must_use]
    pub fn handoff(&self) -> Vec<String> {
        self.selected().to_vec()
    }

    /// Toggles a county's membership in the comparison selection.
    ///
    /// Removing an already-selected county always succeeds; adding one is
    /// rejected once [`MAX_COMPARE`] counties are selected. Focused mode
    /// ignores toggles.
    pub fn toggle(&mut self, county: &str) -> ToggleOutcome {
        let CompareState::Browsing { selected } = &mut self.state else {
            return ToggleOutcome::Ignored;
        };

        if let Some(idx) = selected.iter().position(|c| c == county) {
            selected.remove(idx);
            self.bump_revision();
            return ToggleOutcome::Removed;
        }
        if selected.len() >= MAX_COMPARE {
            return ToggleOutcome::LimitReached;
        }
        selected.push(county.into());
        self.bump_revision();
        ToggleOutcome::Added
    }

    /// Pins a single county, saving the current selection for restore.
    ///
    /// No-op while already focused, and for counties the boundary dataset
    /// does not know.
    pub fn focus(&mut self, county: &str) {
        let CompareState::Browsing { selected } = &mut self.state else {
            return;
        };
        if !self.known.iter().any(|c| c == county) {
            return;
        }

        let saved = core::mem::take(selected);
        self.state = CompareState::Focused {
            county: county.into(),
            saved,
        };
        self.bump_revision();
    }

    /// Leaves focus mode, restoring the saved selection verbatim.
    ///
    /// No-op while browsing.
    pub fn exit_focus(&mut self) {
        let CompareState::Focused { saved, .. } = &mut self.state else {
            return;
        };

        let selected = core::mem::take(saved);
        self.state = CompareState::Browsing { selected };
        self.bump_revision();
    }

    /// Empties the comparison selection.
    ///
    /// No-op while focused, and when the selection is already empty.
    pub fn clear(&mut self) {
        let CompareState::Browsing { selected } = &mut self.state else {
            return;
        };
        if selected.is_empty() {
            return;
        }
        selected.clear();
        self.bump_revision();
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
