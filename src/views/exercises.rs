// ABOUTME: Exercise catalog view: one fetch on mount, paging entirely in memory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use super::render::Panel;
use super::ViewContext;
use crate::api;
use crate::constants::{limits, messages};
use crate::lifecycle::{FetchLifecycle, FetchState};
use crate::models::Exercise;
use crate::pagination::Paginator;

/// Paged exercise catalog
#[derive(Debug)]
pub struct ExerciseCatalogView {
    lifecycle: FetchLifecycle<Vec<Exercise>>,
    paginator: Paginator<Exercise>,
}

impl Default for ExerciseCatalogView {
    fn default() -> Self {
        Self::new()
    }
}

impl ExerciseCatalogView {
    /// Unmounted view, eight exercises per page
    #[must_use]
    pub fn new() -> Self {
        Self {
            lifecycle: FetchLifecycle::new("exercises"),
            paginator: Paginator::new(Vec::new(), limits::EXERCISES_PER_PAGE),
        }
    }

    /// Fetch the whole catalog
    pub async fn load(&mut self, ctx: &ViewContext) -> FetchState<Vec<Exercise>> {
        let state = self.lifecycle.run(api::exercises::list(&ctx.client)).await;
        if let FetchState::Success(items) = &state {
            self.paginator.replace_items(items.clone());
        }
        state
    }

    /// Current fetch state
    #[must_use]
    pub fn state(&self) -> FetchState<Vec<Exercise>> {
        self.lifecycle.state()
    }

    /// Paging position over the loaded catalog
    #[must_use]
    pub const fn paginator(&self) -> &Paginator<Exercise> {
        &self.paginator
    }

    /// Select a page, clamped to the available range
    pub fn go_to_page(&mut self, page: usize) -> usize {
        self.paginator.set_page(page)
    }

    /// Next page, staying on the last
    pub fn next_page(&mut self) -> usize {
        self.paginator.next_page()
    }

    /// Previous page, staying on the first
    pub fn previous_page(&mut self) -> usize {
        self.paginator.previous_page()
    }

    /// Render the current page
    #[must_use]
    pub fn render(&self) -> Panel {
        Panel::from_state(&self.state(), "", "Loading exercises...", |_| {
            CatalogPage(&self.paginator).to_string()
        })
        .without_retry()
    }
}

struct CatalogPage<'a>(&'a Paginator<Exercise>);

impl fmt::Display for CatalogPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pages = self.0;
        if pages.total_items() == 0 {
            return writeln!(f, "{}", messages::EXERCISES_EMPTY);
        }
        for exercise in pages.current_items() {
            writeln!(f, "[{}] {}", exercise.id, exercise.title)?;
            writeln!(
                f,
                "    {} ★  level: {}  image: {}",
                exercise.rating_label(),
                exercise.level_label(),
                exercise.cover_image()
            )?;
            if !exercise.description.is_empty() {
                writeln!(f, "    {}", exercise.description)?;
            }
        }
        if pages.needs_controls() {
            let numbers: Vec<String> = pages
                .page_numbers()
                .map(|n| {
                    if n == pages.current_page() {
                        format!("[{n}]")
                    } else {
                        n.to_string()
                    }
                })
                .collect();
            writeln!(
                f,
                "{} {} {}",
                if pages.is_first() { " " } else { "<" },
                numbers.join(" "),
                if pages.is_last() { " " } else { ">" }
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(count: i64) -> Vec<Exercise> {
        (1..=count)
            .map(|id| Exercise {
                id: id.into(),
                title: format!("Exercise {id}"),
                ..Exercise::default()
            })
            .collect()
    }

    #[test]
    fn test_paging_never_leaves_range() {
        let mut view = ExerciseCatalogView::new();
        view.paginator.replace_items(catalog(17));
        assert_eq!(view.paginator().total_pages(), 3);
        assert_eq!(view.go_to_page(3), 3);
        assert_eq!(view.paginator().current_items().len(), 1);
        assert_eq!(view.next_page(), 3);
        assert_eq!(view.go_to_page(0), 1);
        assert_eq!(view.previous_page(), 1);
    }

    #[test]
    fn test_page_bar_marks_current_page() {
        let mut paginator = Paginator::new(catalog(17), limits::EXERCISES_PER_PAGE);
        paginator.set_page(2);
        let text = CatalogPage(&paginator).to_string();
        assert!(text.contains("< 1 [2] 3 >"));
        assert!(text.contains("[9] Exercise 9"));
        assert!(!text.contains("[8] Exercise 8"));
    }

    #[test]
    fn test_empty_catalog_message() {
        let paginator = Paginator::new(Vec::new(), limits::EXERCISES_PER_PAGE);
        assert_eq!(CatalogPage(&paginator).to_string(), "No products available\n");
    }
}
