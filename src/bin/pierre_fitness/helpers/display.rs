// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for pierre-fitness
// ABOUTME: Prints view panels, session details and redirects consistently

use pierre_fitness_client::{routes::Route, session::Session, views::Panel};

/// Print a view panel under a title bar
pub fn display_panel(title: &str, panel: &Panel) {
    println!("\n{title}");
    println!("{}", "=".repeat(60));
    print!("{panel}");
    if !matches!(panel, Panel::Content(text) if text.ends_with('\n')) {
        println!();
    }
}

/// Print the stored session
pub fn display_session(session: &Session) {
    if !session.is_authenticated() {
        println!("Not logged in.");
        return;
    }
    println!("Logged in");
    println!("   User ID: {}", session.user_id.as_deref().unwrap_or("unknown"));
    let token = session.token.as_deref().unwrap_or_default();
    let shown: String = token.chars().take(8).collect();
    println!("   Token: {shown}... ({} chars)", token.chars().count());
}

/// Print the route a view navigated to
pub fn display_redirect(route: &Route) {
    println!("-> {route}");
}

/// Print a one-line status message
pub fn display_status(message: &str) {
    println!("{message}");
}
