//! Brightwater CLI - migrations, admin provisioning, and seeding.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! bw-cli migrate
//!
//! # Bootstrap the first super admin (prints a generated password)
//! bw-cli admin grant -e admin@example.org -r super_admin
//!
//! # Create an invite and print the signup link
//! bw-cli admin invite -e staff@example.org -r content_admin
//!
//! # List admins
//! bw-cli admin list
//!
//! # Seed demo posts and engagement snapshots
//! bw-cli seed
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "bw-cli")]
#[command(author, version, about = "Brightwater CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Manage admin accounts
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Seed demo posts and engagement snapshots
    Seed,
}

#[derive(Subcommand)]
enum AdminAction {
    /// Create an active admin directly (bootstrap path)
    Grant {
        /// Admin email address
        #[arg(short, long)]
        email: String,

        /// Admin role (`super_admin`, `content_admin`, `analytics_admin`, `social_admin`)
        #[arg(short, long, default_value = "super_admin")]
        role: String,

        /// Password (generated and printed if omitted)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Create an invite and print the signup link
    Invite {
        /// Email address to invite
        #[arg(short, long)]
        email: String,

        /// Admin role for the invitee
        #[arg(short, long, default_value = "content_admin")]
        role: String,

        /// Days until the invite expires
        #[arg(long, default_value_t = 7)]
        expires_in_days: i32,
    },
    /// List admins with their role and active flag
    List,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Admin { action } => match action {
            AdminAction::Grant {
                email,
                role,
                password,
            } => {
                commands::admin::grant(&email, &role, password.as_deref()).await?;
            }
            AdminAction::Invite {
                email,
                role,
                expires_in_days,
            } => {
                commands::admin::invite(&email, &role, expires_in_days).await?;
            }
            AdminAction::List => commands::admin::list().await?,
        },
        Commands::Seed => commands::seed::run().await?,
    }
    Ok(())
}
