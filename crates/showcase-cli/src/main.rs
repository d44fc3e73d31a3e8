//! Showcase CLI - Browse and publish projects
//!
//! Thin terminal front-end over the Showcase API client.

mod config;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use dialoguer::Password;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use config::Config;
use showcase::{ProjectForm, ProjectListing, ProjectWriteOutcome, UploadOutcome};
use showcase_client::ShowcaseApi;

#[derive(Parser)]
#[command(name = "showcase")]
#[command(about = "Showcase CLI - Browse and publish projects", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store a bearer token for project writes
    Login {
        /// Bearer token (will prompt if not provided)
        #[arg(short, long)]
        token: Option<String>,
        /// Take the token from the app server's session endpoint
        #[arg(long, conflicts_with = "token")]
        from_session: bool,
        /// Default creator ID for new projects
        #[arg(long)]
        user_id: Option<String>,
    },

    /// Forget the stored bearer token
    Logout,

    /// Print the session token payload
    Token,

    /// Project operations
    Projects {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// User operations
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Upload an image reference and print where it lives
    Upload {
        /// Data URL or remote URL
        reference: String,
    },

    /// Show current configuration
    Config,
}

#[derive(Args, Debug, Clone)]
struct ProjectFields {
    #[arg(long)]
    title: String,
    #[arg(long)]
    description: String,
    /// Data URL or remote URL of the cover image
    #[arg(long)]
    image: String,
    #[arg(long)]
    live_site_url: String,
    #[arg(long)]
    github_url: String,
    #[arg(long)]
    category: String,
}

impl From<ProjectFields> for ProjectForm {
    fn from(fields: ProjectFields) -> Self {
        Self {
            title: fields.title,
            description: fields.description,
            image: fields.image,
            live_site_url: fields.live_site_url,
            github_url: fields.github_url,
            category: fields.category,
        }
    }
}

#[derive(Subcommand)]
enum ProjectAction {
    /// List one page of projects
    List {
        /// Only this category (enables cursor paging)
        #[arg(short, long)]
        category: Option<String>,
        /// endCursor of the previous page
        #[arg(long, requires = "category")]
        cursor: Option<String>,
        /// Page size of the unfiltered listing
        #[arg(long, conflicts_with = "category")]
        first: Option<u32>,
    },
    /// Show a project
    Show { id: String },
    /// Create a project
    Create {
        #[command(flatten)]
        fields: ProjectFields,
        /// Creator user ID (defaults to the stored one)
        #[arg(long)]
        creator_id: Option<String>,
        /// Bearer token (defaults to the stored one)
        #[arg(long)]
        token: Option<String>,
    },
    /// Replace a project's fields
    Edit {
        id: String,
        #[command(flatten)]
        fields: ProjectFields,
        #[arg(long)]
        token: Option<String>,
    },
    /// Delete a project
    Delete {
        id: String,
        #[arg(long)]
        token: Option<String>,
    },
    /// List a user's projects
    ByUser {
        user_id: String,
        /// Number of most recent projects
        #[arg(long)]
        last: Option<u32>,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Look up a user by email
    Get { email: String },
    /// Register a user
    Create {
        name: String,
        email: String,
        avatar_url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Login {
            token,
            from_session,
            user_id,
        } => cmd_login(token, from_session, user_id).await,
        Commands::Logout => cmd_logout(),
        Commands::Token => cmd_token().await,
        Commands::Projects { action } => cmd_projects(action).await,
        Commands::User { action } => cmd_user(action).await,
        Commands::Upload { reference } => cmd_upload(reference).await,
        Commands::Config => cmd_config(),
    }
}

fn build_api(config: &Config) -> Result<ShowcaseApi> {
    let client_config = config.apply(
        showcase_client::ClientConfig::from_env().context("Invalid environment configuration")?,
    );
    tracing::debug!(
        environment = ?client_config.environment,
        graphql_url = %client_config.graphql_url,
        "Using Showcase endpoints"
    );
    ShowcaseApi::new(&client_config).context("Failed to create API client")
}

fn require_token(config: &Config, flag: Option<String>) -> Result<String> {
    config
        .resolve_token(flag)
        .context("No token. Pass --token or run 'showcase login' first.")
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_login(token: Option<String>, from_session: bool, user_id: Option<String>) -> Result<()> {
    let mut config = Config::load()?;

    let token = match token {
        Some(t) => t,
        None if from_session => {
            let api = build_api(&config)?;
            let payload = api
                .fetch_token()
                .await
                .context("Failed to fetch session token")?;
            payload
                .get("token")
                .and_then(|t| t.as_str())
                .map(str::to_string)
                .context("Session payload has no token")?
        }
        None => Password::new()
            .with_prompt("Bearer token")
            .interact()
            .context("Failed to read token")?,
    };

    if token.trim().is_empty() {
        bail!("Token cannot be empty");
    }

    config.set_token(token);
    if user_id.is_some() {
        config.user_id = user_id;
    }
    config.save()?;

    println!("{} Token saved to {:?}", "✓".green(), Config::config_path()?);

    if config.user_id.is_none() {
        println!("\n{}", "Tip: store your user ID to create projects without --creator-id:".yellow());
        println!("  showcase login --user-id <USER_ID>");
    }

    Ok(())
}

fn cmd_logout() -> Result<()> {
    let mut config = Config::load()?;

    if config.clear_token() {
        config.save()?;
        println!("{} Token removed", "✓".green());
    } else {
        println!("No token stored.");
    }

    Ok(())
}

async fn cmd_token() -> Result<()> {
    let api = build_api(&Config::load()?)?;
    let payload = api.fetch_token().await?;
    print_json(&payload)
}

async fn cmd_projects(action: ProjectAction) -> Result<()> {
    let config = Config::load()?;
    let api = build_api(&config)?;

    match action {
        ProjectAction::List {
            category,
            cursor,
            first,
        } => {
            let listing = match (category, first) {
                (Some(category), _) => ProjectListing::filtered(category, cursor),
                (None, Some(page_size)) => ProjectListing::Unfiltered { page_size },
                (None, None) => ProjectListing::default(),
            };

            let page = api.list_projects(listing).await?;
            print_json(&page)?;

            if let Some(cursor) = page
                .pointer("/projectSearch/pageInfo/endCursor")
                .and_then(|c| c.as_str())
            {
                eprintln!("{} {}", "Next page cursor:".dimmed(), cursor.cyan());
            }
        }

        ProjectAction::Show { id } => {
            print_json(&api.get_project_details(&id).await?)?;
        }

        ProjectAction::Create {
            fields,
            creator_id,
            token,
        } => {
            let token = require_token(&config, token)?;
            let creator_id = config
                .resolve_user_id(creator_id)
                .context("No creator. Pass --creator-id or run 'showcase login --user-id <ID>'.")?;

            let form = ProjectForm::from(fields);
            let outcome = api.create_new_project(&form, &creator_id, &token).await?;
            report_write("Project created", &outcome)?;
        }

        ProjectAction::Edit { id, fields, token } => {
            let token = require_token(&config, token)?;
            let form = ProjectForm::from(fields);
            let outcome = api.edit_project(&form, &id, &token).await?;
            report_write("Project updated", &outcome)?;
        }

        ProjectAction::Delete { id, token } => {
            let token = require_token(&config, token)?;
            let response = api.delete_project(&id, &token).await?;
            println!("{} Project '{}' deleted", "✓".green(), id);
            print_json(&response)?;
        }

        ProjectAction::ByUser { user_id, last } => {
            print_json(&api.get_user_projects(&user_id, last).await?)?;
        }
    }

    Ok(())
}

async fn cmd_user(action: UserAction) -> Result<()> {
    let api = build_api(&Config::load()?)?;

    match action {
        UserAction::Get { email } => {
            print_json(&api.get_user(&email).await?)?;
        }
        UserAction::Create {
            name,
            email,
            avatar_url,
        } => {
            let response = api.create_user(&name, &email, &avatar_url).await?;
            println!("{} User '{}' created", "✓".green(), email);
            print_json(&response)?;
        }
    }

    Ok(())
}

async fn cmd_upload(reference: String) -> Result<()> {
    let api = build_api(&Config::load()?)?;

    match api.upload_image(&reference).await? {
        UploadOutcome::Uploaded { url } => println!("{}", url),
        UploadOutcome::Skipped => println!("{}", "Nothing to upload".dimmed()),
        UploadOutcome::Failed { reason } => bail!("Upload failed: {}", reason),
    }

    Ok(())
}

fn cmd_config() -> Result<()> {
    let config = Config::load()?;
    let effective = config.apply(
        showcase_client::ClientConfig::from_env().context("Invalid environment configuration")?,
    );

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Environment: {:?}", effective.environment);
    println!("  GraphQL URL: {}", effective.graphql_url);
    println!("  Server URL: {}", effective.server_url);
    println!(
        "  Token: {}",
        if config.token.is_some() { "Set".green() } else { "Not set".red() }
    );
    println!(
        "  User ID: {}",
        config.user_id.as_deref().unwrap_or("None").cyan()
    );

    Ok(())
}

// ============================================
// Output
// ============================================

fn print_json(value: &Value) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to render response")?;
    println!("{}", rendered);
    Ok(())
}

fn report_write(label: &str, outcome: &ProjectWriteOutcome) -> Result<()> {
    match &outcome.upload {
        UploadOutcome::Uploaded { url } => {
            eprintln!("{} {}", "Image uploaded:".dimmed(), url.cyan());
        }
        UploadOutcome::Skipped => {}
        UploadOutcome::Failed { reason } => {
            eprintln!("{} {}", "Image upload failed:".yellow(), reason);
        }
    }

    match &outcome.response {
        Some(response) => {
            println!("{} {}", "✓".green(), label);
            print_json(response)
        }
        None => bail!("Nothing was submitted: the image could not be uploaded"),
    }
}
