// ABOUTME: Router table mapping paths to views and back
// ABOUTME: Matching is case-insensitive; parameterized paths carry their id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use crate::errors::{AppError, AppResult};

/// A navigable view
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/` and `/Dashboard`
    Dashboard,
    /// `/Contact`
    Contact,
    /// `/Nutrition`
    Nutrition,
    /// `/Workouts`
    Workouts,
    /// `/Progress`
    Progress,
    /// `/Profile` or `/Profile/:id`
    Profile(Option<String>),
    /// `/AllExercise`
    AllExercise,
    /// `/Indetails/:id`
    ExerciseDetail(String),
    /// `/Login`
    Login,
    /// `/Register`
    Register,
}

impl Route {
    /// Resolve a path
    pub fn parse(path: &str) -> AppResult<Self> {
        let trimmed = path.trim().trim_end_matches('/');
        let mut segments = trimmed.trim_start_matches('/').split('/');
        let head = segments.next().unwrap_or_default().to_ascii_lowercase();
        let id = segments.next().filter(|s| !s.is_empty()).map(str::to_owned);
        if segments.next().is_some() {
            return Err(AppError::invalid_input(format!("No route for {path}")));
        }

        let route = match (head.as_str(), id) {
            ("" | "dashboard", None) => Self::Dashboard,
            ("contact", None) => Self::Contact,
            ("nutrition", None) => Self::Nutrition,
            ("workouts", None) => Self::Workouts,
            ("progress", None) => Self::Progress,
            ("profile", id) => Self::Profile(id),
            ("allexercise", None) => Self::AllExercise,
            ("indetails", Some(id)) => Self::ExerciseDetail(id),
            ("login", None) => Self::Login,
            ("register", None) => Self::Register,
            _ => return Err(AppError::invalid_input(format!("No route for {path}"))),
        };
        Ok(route)
    }

    /// Canonical path
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Dashboard => "/Dashboard".to_owned(),
            Self::Contact => "/Contact".to_owned(),
            Self::Nutrition => "/Nutrition".to_owned(),
            Self::Workouts => "/Workouts".to_owned(),
            Self::Progress => "/Progress".to_owned(),
            Self::Profile(None) => "/Profile".to_owned(),
            Self::Profile(Some(id)) => format!("/Profile/{id}"),
            Self::AllExercise => "/AllExercise".to_owned(),
            Self::ExerciseDetail(id) => format!("/Indetails/{id}"),
            Self::Login => "/Login".to_owned(),
            Self::Register => "/Register".to_owned(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_table() {
        assert_eq!(Route::parse("/").unwrap(), Route::Dashboard);
        assert_eq!(Route::parse("/dashboard").unwrap(), Route::Dashboard);
        assert_eq!(
            Route::parse("/Indetails/12").unwrap(),
            Route::ExerciseDetail("12".into())
        );
        assert_eq!(
            Route::parse("/profile/abc/").unwrap(),
            Route::Profile(Some("abc".into()))
        );
        assert_eq!(Route::parse("/Profile").unwrap(), Route::Profile(None));
        assert!(Route::parse("/Indetails").is_err());
        assert!(Route::parse("/unknown").is_err());
        assert!(Route::parse("/Login/extra").is_err());
    }

    #[test]
    fn test_path_resolves_back() {
        for route in [
            Route::Dashboard,
            Route::Contact,
            Route::Profile(Some("u1".into())),
            Route::ExerciseDetail("7".into()),
            Route::Register,
        ] {
            assert_eq!(Route::parse(&route.path()).unwrap(), route);
        }
    }
}
