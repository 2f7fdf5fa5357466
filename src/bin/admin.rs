//! CLI administration tool for tenant-admin.
//!
//! Provisions employees, permission groups and rules, and performs database
//! checks without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create an employee (prompts for missing fields)
//! cargo run --bin admin -- employee create --name "Dara" --username dara
//!
//! # Issue a fresh app token for an employee
//! cargo run --bin admin -- employee token dara
//!
//! # Create a rule and a group granting it
//! cargo run --bin admin -- rule create --name "List plans" --route /tenants/plan/index
//! cargo run --bin admin -- group create --name staff --rules 1
//!
//! # Create a group with access to every route and assign it
//! cargo run --bin admin -- group create --name admins --rules '*'
//! cargo run --bin admin -- group assign dara 2
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_*` components, as for the server

use tenant_admin::config::Config;
use tenant_admin::domain::entities::{GroupRules, NewEmployee};
use tenant_admin::domain::repositories::{EmployeeRepository, PermissionRepository};
use tenant_admin::infrastructure::persistence::{PgEmployeeRepository, PgPermissionRepository};
use tenant_admin::utils::password::hash_password;
use tenant_admin::utils::token::generate_token;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing tenant-admin.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage employees and their app tokens
    Employee {
        #[command(subcommand)]
        action: EmployeeAction,
    },

    /// Manage permission groups
    Group {
        #[command(subcommand)]
        action: GroupAction,
    },

    /// Manage permission rules
    Rule {
        #[command(subcommand)]
        action: RuleAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum EmployeeAction {
    /// Create a new employee
    Create {
        /// Display name
        #[arg(short, long)]
        name: Option<String>,

        /// Login name
        #[arg(short, long)]
        username: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Issue a new app token, replacing the current one
    Token {
        /// Login name of the employee
        username: String,
    },
}

#[derive(Subcommand)]
enum GroupAction {
    /// Create a permission group
    Create {
        /// Group name
        #[arg(short, long)]
        name: String,

        /// `*` for every route, or comma separated rule ids
        #[arg(short, long)]
        rules: String,
    },

    /// Add an employee to a group
    Assign {
        /// Login name of the employee
        username: String,

        /// Group id
        group_id: i64,
    },
}

#[derive(Subcommand)]
enum RuleAction {
    /// Create a rule granting one route path
    Create {
        /// Rule name
        #[arg(short, long)]
        name: String,

        /// Exact request path, e.g. `/tenants/plan/index`
        #[arg(short, long)]
        route: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;

    let pool = PgPool::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    let pool = Arc::new(pool);

    match cli.command {
        Commands::Employee { action } => handle_employee_action(action, pool).await?,
        Commands::Group { action } => handle_group_action(action, pool).await?,
        Commands::Rule { action } => handle_rule_action(action, pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn handle_employee_action(action: EmployeeAction, pool: Arc<PgPool>) -> Result<()> {
    let repo = PgEmployeeRepository::new(pool);

    match action {
        EmployeeAction::Create {
            name,
            username,
            yes,
        } => create_employee(&repo, name, username, yes).await,
        EmployeeAction::Token { username } => issue_token(&repo, &username).await,
    }
}

/// Creates an employee with interactive prompts.
///
/// The password is read without echo and stored as a bcrypt hash.
async fn create_employee(
    repo: &PgEmployeeRepository,
    name: Option<String>,
    username: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "👤 Create Employee".bright_blue().bold());
    println!();

    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Name").interact_text()?,
    };

    let username = match username {
        Some(u) => u,
        None => Input::new().with_prompt("Username").interact_text()?,
    };

    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Repeat password", "Passwords do not match")
        .interact()?;

    println!();
    println!("  Name:     {}", name.cyan());
    println!("  Username: {}", username.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this employee?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let password_hash =
        hash_password(&password).map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?;

    let employee = repo
        .create(NewEmployee {
            name,
            username,
            password_hash,
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create employee: {}", e))?;

    println!(
        "{} (id {})",
        "✅ Employee created".green().bold(),
        employee.id.to_string().bright_white()
    );
    println!();
    println!(
        "  Issue a token with: {} admin -- employee token {}",
        "cargo run --bin".bright_cyan(),
        employee.username
    );

    Ok(())
}

/// Issues a new app token for an employee and prints it once.
async fn issue_token(repo: &PgEmployeeRepository, username: &str) -> Result<()> {
    let employee = repo
        .find_by_username(username)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("Employee not found")?;

    let token = generate_token();
    repo.set_app_token(employee.id, &token)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to store token: {}", e))?;

    println!("{}", "🔑 Token issued".green().bold());
    println!();
    println!("  Employee: {}", employee.name.cyan());
    println!("  Token:    {}", token.bright_yellow().bold());
    println!();
    println!(
        "{}",
        "⚠️  The previous token for this employee no longer works."
            .yellow()
    );
    println!();
    println!("{}", "Example:".bright_white());
    println!(
        "  curl \"http://localhost:3000/tenants/plan/index?token={}\"",
        token.bright_yellow()
    );
    println!();

    Ok(())
}

/// Parses `--rules`, rejecting fragments the server would silently skip.
fn parse_rules_arg(raw: &str) -> Result<GroupRules> {
    let invalid = GroupRules::invalid_fragments(raw);
    if !invalid.is_empty() {
        anyhow::bail!(
            "Invalid rule ids: {} (expected comma separated numeric ids or '*')",
            invalid.join(", ")
        );
    }
    Ok(GroupRules::parse(raw))
}

async fn handle_group_action(action: GroupAction, pool: Arc<PgPool>) -> Result<()> {
    let permissions = PgPermissionRepository::new(pool.clone());

    match action {
        GroupAction::Create { name, rules } => {
            let rules = parse_rules_arg(&rules)?;

            let group = permissions
                .create_group(&name, &rules)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create group: {}", e))?;

            let scope = if group.rules.is_unrestricted() {
                "all routes".bright_red().bold()
            } else {
                format!("rules [{}]", group.rules.to_db()).cyan()
            };

            println!(
                "{} {} (id {}) with {}",
                "✅ Group created:".green().bold(),
                group.name.cyan(),
                group.id.to_string().bright_white(),
                scope
            );
        }
        GroupAction::Assign { username, group_id } => {
            let employees = PgEmployeeRepository::new(pool);
            let employee = employees
                .find_by_username(&username)
                .await
                .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
                .context("Employee not found")?;

            permissions
                .assign_group(employee.id, group_id)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to assign group: {}", e))?;

            println!(
                "{} {} → group {}",
                "✅ Assigned".green().bold(),
                employee.username.cyan(),
                group_id.to_string().bright_white()
            );
        }
    }

    Ok(())
}

async fn handle_rule_action(action: RuleAction, pool: Arc<PgPool>) -> Result<()> {
    let permissions = PgPermissionRepository::new(pool);

    match action {
        RuleAction::Create { name, route } => {
            if !route.starts_with('/') {
                anyhow::bail!("Route must start with '/', got '{}'", route);
            }

            let rule = permissions
                .create_rule(&name, &route)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create rule: {}", e))?;

            println!(
                "{} {} (id {}) for {}",
                "✅ Rule created:".green().bold(),
                rule.name.cyan(),
                rule.id.to_string().bright_white(),
                rule.route.bright_yellow()
            );
        }
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let employees: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM hr_employee")
                .fetch_one(pool)
                .await?;
            let groups: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM permission_group")
                .fetch_one(pool)
                .await?;
            let rules: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM permission_rule")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Employees:  {}", employees.to_string().bright_green().bold());
            println!("  Groups:     {}", groups.to_string().bright_green().bold());
            println!("  Rules:      {}", rules.to_string().bright_green().bold());
            println!();
        }
    }

    Ok(())
}
