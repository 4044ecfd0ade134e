// ABOUTME: Pierre Fitness CLI - terminal front end for the fitness tracking backend
// ABOUTME: Mounts one view per sub-command, prints its panel, and follows redirects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Log in against the PHP backend and keep the session on disk
//! pierre-fitness --backend php login --email ana@example.com --password secret
//!
//! # Show today's dashboard
//! pierre-fitness dashboard
//!
//! # Browse the exercise catalog against the mock backend
//! pierre-fitness --backend mock exercises --page 2
//!
//! # Edit the profile with a new picture
//! pierre-fitness profile update --first-name Ana --image ./me.png
//!
//! # Mount whatever view a path selects
//! pierre-fitness route /Indetails/3
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use pierre_fitness_client::{
    config::{BackendFlavor, ClientConfig},
    errors::AppResult,
    http::ApiClient,
    logging::LoggingConfig,
    session::{FileSessionStore, SessionContext},
    views::ViewContext,
};
use tracing::{debug, info};

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "pierre-fitness",
    about = "Pierre Fitness terminal client",
    long_about = "Terminal client for the fitness tracking backend: dashboard, progress, profile, exercises and contact."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Backend flavor: php, mock or local
    #[arg(long, global = true)]
    backend: Option<String>,

    /// Base URL override for the selected backend
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Log in and store the session
    Login {
        /// Account email
        #[arg(long)]
        email: String,

        /// Account password
        #[arg(long)]
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// Show the stored session
    Whoami,

    /// Create an account
    Register {
        /// Given name
        #[arg(long)]
        first_name: String,

        /// Family name
        #[arg(long)]
        last_name: String,

        /// Account email
        #[arg(long)]
        email: String,

        /// Account password
        #[arg(long)]
        password: String,

        /// Age in years
        #[arg(long)]
        age: Option<String>,

        /// Weight in kilograms
        #[arg(long)]
        weight: Option<String>,

        /// Height in centimeters
        #[arg(long)]
        height: Option<String>,

        /// Profile picture to attach
        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// Show the dashboard
    Dashboard,

    /// Show progress metrics and history
    Progress,

    /// Profile commands
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// List the exercise catalog
    Exercises {
        /// Page to show (1-based, clamped)
        #[arg(long, default_value = "1")]
        page: usize,
    },

    /// Show one exercise
    Exercise {
        /// Exercise id
        id: String,
    },

    /// Send a message through the contact form
    Contact {
        /// First name
        #[arg(long)]
        fname: String,

        /// Last name
        #[arg(long)]
        lname: String,

        /// Reply address
        #[arg(long)]
        email: String,

        /// Message body
        #[arg(long)]
        message: String,
    },

    /// Mount the view a router path selects
    Route {
        /// Path such as `/Dashboard` or `/Indetails/3`
        path: String,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ProfileCommand {
    /// Show a profile
    Show {
        /// User id (defaults to the logged-in user)
        #[arg(long)]
        id: Option<String>,
    },

    /// Update the logged-in user's profile
    Update {
        /// User id (defaults to the logged-in user)
        #[arg(long)]
        id: Option<String>,

        /// Given name
        #[arg(long)]
        first_name: Option<String>,

        /// Family name
        #[arg(long)]
        last_name: Option<String>,

        /// Account email
        #[arg(long)]
        email: Option<String>,

        /// New password
        #[arg(long)]
        password: Option<String>,

        /// Age in years
        #[arg(long)]
        age: Option<String>,

        /// Weight in kilograms
        #[arg(long)]
        weight: Option<String>,

        /// Height in centimeters
        #[arg(long)]
        height: Option<String>,

        /// New profile picture
        #[arg(long)]
        image: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::from_env().verbose(cli.verbose).init()?;

    let backend = cli.backend.as_deref().map(BackendFlavor::from_str_or_default);
    let config = ClientConfig::from_env_with(backend, cli.api_url.as_deref())?;
    info!(backend = %config.backend, base_url = %config.base_url, "Pierre Fitness CLI");
    debug!("Session file: {}", config.session_path.display());

    let store = Arc::new(FileSessionStore::new(config.session_path.clone()));
    let session = SessionContext::new(store);
    session.restore().await?;
    let ctx = ViewContext::new(ApiClient::new(config)?, session);

    match cli.command {
        Command::Login { email, password } => commands::auth::login(&ctx, email, password).await?,
        Command::Logout => commands::auth::logout(&ctx).await?,
        Command::Whoami => commands::auth::whoami(&ctx).await,
        Command::Register {
            first_name,
            last_name,
            email,
            password,
            age,
            weight,
            height,
            image,
        } => {
            let fields = commands::auth::RegisterFields {
                first_name,
                last_name,
                email,
                password,
                age,
                weight,
                height,
            };
            commands::auth::register(&ctx, fields, image).await?;
        }
        Command::Dashboard => commands::pages::dashboard(&ctx).await,
        Command::Progress => commands::pages::progress(&ctx).await,
        Command::Profile { action } => match action {
            ProfileCommand::Show { id } => commands::profile::show(&ctx, id).await,
            ProfileCommand::Update {
                id,
                first_name,
                last_name,
                email,
                password,
                age,
                weight,
                height,
                image,
            } => {
                let changes = commands::profile::ProfileChanges {
                    first_name,
                    last_name,
                    email,
                    password,
                    age,
                    weight,
                    height,
                };
                commands::profile::update(&ctx, id, changes, image).await?;
            }
        },
        Command::Exercises { page } => commands::pages::exercises(&ctx, page).await,
        Command::Exercise { id } => commands::pages::exercise(&ctx, &id).await,
        Command::Contact {
            fname,
            lname,
            email,
            message,
        } => commands::pages::contact(&ctx, [fname, lname, email, message]).await?,
        Command::Route { path } => commands::pages::route(&ctx, &path).await?,
    }

    Ok(())
}
