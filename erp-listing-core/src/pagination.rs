//! Client-side pagination for record lists.
//!
//! A [`Paginator`] owns the full, already-filtered record set of one list
//! screen, slices it into pages of [`PAGE_SIZE`] and repaints through a
//! caller-supplied render callback whenever the visible page changes. After
//! every repaint the navigation strip is rebuilt and handed to the
//! paginator's [`StripHost`].

use crate::host::StripHost;
use crate::loading::{LoadSequence, LoadTicket};
use crate::navigation::{NavAction, NavStrip};
use std::fmt;
use tracing::{debug, info};

/// Records shown per page.
pub const PAGE_SIZE: usize = 25;

/// Container the console mounts its strip in unless told otherwise.
pub const DEFAULT_CONTROLS_TARGET: &str = "pagination";

/// Callback that repaints the list region with one page of records.
pub type RenderFn<T> = Box<dyn FnMut(&[T])>;

/// Number of pages for `item_count` records. An empty list still has one page.
pub fn total_pages(item_count: usize, page_size: usize) -> usize {
    item_count.div_ceil(page_size.max(1)).max(1)
}

/// Start/end indices of the one-based `page`, clipped to the list.
pub fn page_range(item_count: usize, page_size: usize, page: usize) -> (usize, usize) {
    let page_size = page_size.max(1);
    let start = page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(item_count);
    let end = start.saturating_add(page_size).min(item_count);
    (start, end)
}

pub struct Paginator<T, H> {
    items: Vec<T>,
    page_size: usize,
    current_page: usize,
    render: Option<RenderFn<T>>,
    controls_target: String,
    host: H,
    strip: NavStrip,
    loads: LoadSequence,
}

impl<T, H: StripHost> Paginator<T, H> {
    /// Empty paginator showing page 1 of 1. Nothing is rendered until the
    /// first [`initialize`](Self::initialize).
    pub fn new(host: H) -> Self {
        Self {
            items: Vec::new(),
            page_size: PAGE_SIZE,
            current_page: 1,
            render: None,
            controls_target: DEFAULT_CONTROLS_TARGET.to_string(),
            host,
            strip: NavStrip::new(1, 1, 0),
            loads: LoadSequence::new(),
        }
    }

    /// Replace the whole list state and show page 1.
    ///
    /// The callback replaces any previously installed one. It must cope with
    /// an empty slice, which is what it receives for an empty list.
    pub fn initialize<F>(&mut self, items: Vec<T>, render: F, controls_target: &str)
    where
        F: FnMut(&[T]) + 'static,
    {
        // A direct load supersedes any fetch still in flight.
        self.loads.begin();
        self.install(items, Some(Box::new(render)), controls_target.to_string());
    }

    /// Replace the records but keep the current callback and controls target.
    pub fn reload(&mut self, items: Vec<T>) {
        self.loads.begin();
        let render = self.render.take();
        let target = std::mem::take(&mut self.controls_target);
        self.install(items, render, target);
    }

    /// Take a ticket before starting an asynchronous fetch.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.loads.begin()
    }

    /// Install the result of the fetch that took `ticket`.
    ///
    /// Results of a fetch that has been overtaken by a newer one are dropped
    /// and `false` is returned.
    pub fn complete_load<F>(
        &mut self,
        ticket: LoadTicket,
        items: Vec<T>,
        render: F,
        controls_target: &str,
    ) -> bool
    where
        F: FnMut(&[T]) + 'static,
    {
        if !self.loads.is_current(ticket) {
            debug!(
                ticket = ticket.id(),
                latest = self.loads.latest(),
                discarded = items.len(),
                "Discarding stale list load"
            );
            return false;
        }
        self.install(items, Some(Box::new(render)), controls_target.to_string());
        true
    }

    fn install(&mut self, items: Vec<T>, render: Option<RenderFn<T>>, controls_target: String) {
        self.items = items;
        self.render = render;
        self.controls_target = controls_target;
        self.current_page = 1;
        info!(
            items = self.items.len(),
            total_pages = self.total_pages(),
            container = %self.controls_target,
            "Pagination initialized"
        );
        self.refresh();
    }

    /// Show `page`. Out-of-range requests are ignored and return `false`.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page < 1 || page > self.total_pages() {
            debug!(
                page,
                total_pages = self.total_pages(),
                "Ignoring out-of-range page request"
            );
            return false;
        }
        self.current_page = page;
        debug!(page, "Navigated to page");
        self.refresh();
        true
    }

    pub fn next(&mut self) -> bool {
        self.go_to_page(self.current_page + 1)
    }

    pub fn previous(&mut self) -> bool {
        self.go_to_page(self.current_page - 1)
    }

    /// Dispatch the activation of a strip control.
    pub fn activate(&mut self, action: NavAction) -> bool {
        match action {
            NavAction::Previous => self.previous(),
            NavAction::Next => self.next(),
            NavAction::Page(page) => self.go_to_page(page),
        }
    }

    // Data first: a missing controls container must never hide the list.
    fn refresh(&mut self) {
        let (start, end) = page_range(self.items.len(), self.page_size, self.current_page);
        if let Some(render) = self.render.as_mut() {
            render(&self.items[start..end]);
        }

        self.strip = NavStrip::new(self.current_page, self.total_pages(), self.items.len());
        if !self.host.mount(&self.controls_target, &self.strip) {
            debug!(container = %self.controls_target, "Navigation strip not mounted");
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.items.len(), self.page_size)
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn current_items(&self) -> &[T] {
        let (start, end) = page_range(self.items.len(), self.page_size, self.current_page);
        &self.items[start..end]
    }

    /// Records of `page`, or `None` when it is out of range.
    pub fn page_items(&self, page: usize) -> Option<&[T]> {
        if page < 1 || page > self.total_pages() {
            return None;
        }
        let (start, end) = page_range(self.items.len(), self.page_size, page);
        Some(&self.items[start..end])
    }

    pub fn strip(&self) -> &NavStrip {
        &self.strip
    }

    pub fn controls_target(&self) -> &str {
        &self.controls_target
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

impl<T, H: fmt::Debug> fmt::Debug for Paginator<T, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paginator")
            .field("items", &self.items.len())
            .field("page_size", &self.page_size)
            .field("current_page", &self.current_page)
            .field("controls_target", &self.controls_target)
            .field("has_render", &self.render.is_some())
            .field("host", &self.host)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, PAGE_SIZE), 1);
        assert_eq!(total_pages(1, PAGE_SIZE), 1);
        assert_eq!(total_pages(25, PAGE_SIZE), 1);
        assert_eq!(total_pages(26, PAGE_SIZE), 2);
        assert_eq!(total_pages(58, PAGE_SIZE), 3);
    }

    #[test]
    fn page_range_clips_last_page() {
        assert_eq!(page_range(58, 25, 1), (0, 25));
        assert_eq!(page_range(58, 25, 2), (25, 50));
        assert_eq!(page_range(58, 25, 3), (50, 58));
        assert_eq!(page_range(58, 25, 4), (58, 58));
        assert_eq!(page_range(0, 25, 1), (0, 0));
    }
}
