//! Navigation strip model: previous / page-number window / next.
//!
//! The strip is a plain value rebuilt after every page change. Hosts decide
//! where (and whether) it is shown, see [`crate::host`].

use serde::Serialize;
use std::ops::RangeInclusive;

/// Maximum number of page-number controls shown at once.
pub const WINDOW_WIDTH: usize = 5;

/// Window of page numbers to show around `current_page`.
///
/// Centered on the current page where possible and shifted near either end
/// so it never leaves `1..=total_pages`.
pub fn page_window(current_page: usize, total_pages: usize) -> RangeInclusive<usize> {
    let total_pages = total_pages.max(1);
    let current_page = current_page.clamp(1, total_pages);
    let span = WINDOW_WIDTH - 1;

    let mut start = current_page.saturating_sub(2).max(1);
    let end = (start + span).min(total_pages);
    if end - start < span && start > 1 {
        start = end.saturating_sub(span).max(1);
    }
    start..=end
}

/// What activating a control asks the paginator to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "page", rename_all = "snake_case")]
pub enum NavAction {
    Previous,
    Next,
    Page(usize),
}

/// A single control in the strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavControl {
    Previous { enabled: bool },
    Page { number: usize, active: bool, enabled: bool },
    Next { enabled: bool },
}

impl NavControl {
    /// The action this control triggers, or `None` when it is disabled.
    pub fn action(&self) -> Option<NavAction> {
        match *self {
            NavControl::Previous { enabled: true } => Some(NavAction::Previous),
            NavControl::Next { enabled: true } => Some(NavAction::Next),
            NavControl::Page {
                number,
                enabled: true,
                ..
            } => Some(NavAction::Page(number)),
            _ => None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        match *self {
            NavControl::Previous { enabled }
            | NavControl::Next { enabled }
            | NavControl::Page { enabled, .. } => enabled,
        }
    }
}

/// Page navigation strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavStrip {
    pub current_page: usize,
    pub total_pages: usize,
    pub controls: Vec<NavControl>,
}

impl NavStrip {
    pub fn new(current_page: usize, total_pages: usize, item_count: usize) -> Self {
        let total_pages = total_pages.max(1);
        let current_page = current_page.clamp(1, total_pages);
        // Nothing to navigate to when the list is empty, so even "1" is inert.
        let has_items = item_count > 0;

        let mut controls = Vec::with_capacity(WINDOW_WIDTH + 2);
        controls.push(NavControl::Previous {
            enabled: current_page > 1,
        });
        for number in page_window(current_page, total_pages) {
            controls.push(NavControl::Page {
                number,
                active: number == current_page,
                enabled: has_items,
            });
        }
        controls.push(NavControl::Next {
            enabled: current_page < total_pages,
        });

        Self {
            current_page,
            total_pages,
            controls,
        }
    }

    pub fn previous_enabled(&self) -> bool {
        self.controls
            .first()
            .map(NavControl::is_enabled)
            .unwrap_or(false)
    }

    pub fn next_enabled(&self) -> bool {
        self.controls
            .last()
            .map(NavControl::is_enabled)
            .unwrap_or(false)
    }

    /// Page numbers in the visible window, in order.
    pub fn page_numbers(&self) -> Vec<usize> {
        self.controls
            .iter()
            .filter_map(|control| match control {
                NavControl::Page { number, .. } => Some(*number),
                _ => None,
            })
            .collect()
    }
}
