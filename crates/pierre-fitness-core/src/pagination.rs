// ABOUTME: Page-based pagination over a fully fetched in-memory collection
// ABOUTME: Derives the current page slice and clamps page selection to valid bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::ops::{Range, RangeInclusive};

use serde::{Deserialize, Serialize};

/// Pages through a collection that was fetched once
///
/// Changing the page never touches the network; it only moves the window
/// over `items`. Pages are 1-based.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginator<T> {
    items: Vec<T>,
    page_size: usize,
    current_page: usize,
}

impl<T> Paginator<T> {
    /// Create a paginator positioned on the first page
    ///
    /// A `page_size` of zero is treated as one.
    #[must_use]
    pub fn new(items: Vec<T>, page_size: usize) -> Self {
        Self {
            items,
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    /// Replace the collection and return to the first page
    pub fn replace_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.current_page = 1;
    }

    /// Number of pages, never less than one
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.page_size).max(1)
    }

    /// Total number of items across all pages
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    /// Items per page
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Currently selected page (1-based)
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Select a page, clamped to `[1, total_pages]`; returns the page selected
    pub fn set_page(&mut self, page: usize) -> usize {
        self.current_page = page.clamp(1, self.total_pages());
        self.current_page
    }

    /// Advance one page, staying on the last page
    pub fn next_page(&mut self) -> usize {
        self.set_page(self.current_page.saturating_add(1))
    }

    /// Go back one page, staying on the first page
    pub fn previous_page(&mut self) -> usize {
        self.set_page(self.current_page.saturating_sub(1))
    }

    /// Index range of the current page within the full collection
    #[must_use]
    pub fn current_range(&self) -> Range<usize> {
        let start = (self.current_page - 1) * self.page_size;
        let end = (self.current_page * self.page_size).min(self.items.len());
        start.min(end)..end
    }

    /// Items on the current page
    #[must_use]
    pub fn current_items(&self) -> &[T] {
        &self.items[self.current_range()]
    }

    /// Every selectable page number
    #[must_use]
    pub fn page_numbers(&self) -> RangeInclusive<usize> {
        1..=self.total_pages()
    }

    /// Whether page controls are worth showing
    #[must_use]
    pub fn needs_controls(&self) -> bool {
        self.items.len() > self.page_size
    }

    /// Whether the first page is selected
    #[must_use]
    pub const fn is_first(&self) -> bool {
        self.current_page == 1
    }

    /// Whether the last page is selected
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current_page == self.total_pages()
    }

    /// Full collection
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }
}

impl<T> Default for Paginator<T> {
    fn default() -> Self {
        Self::new(Vec::new(), 1)
    }
}
