//! User and role management screen.

use clap::{Args, Subcommand};
use uuid::Uuid;

use lunas_client::ApiClient;
use lunas_client::resources::auth::UserRole;
use lunas_client::resources::users::CreateUserRequest;

use crate::render::{Align, Column, header, row};

/// Arguments for `lunas users`.
#[derive(Debug, Args)]
pub struct UsersArgs {
    #[command(subcommand)]
    command: UsersCommand,
}

#[derive(Debug, Subcommand)]
enum UsersCommand {
    /// List users.
    List,
    /// Create a user.
    Create(CreateArgs),
    /// Change a user's role.
    SetRole(SetRoleArgs),
}

#[derive(Debug, Args)]
struct CreateArgs {
    /// Display name.
    name: String,
    /// Login email.
    email: String,
    /// Initial password.
    #[arg(long)]
    password: String,
    /// Initial role: admin, staff, or viewer.
    #[arg(long, default_value = "staff")]
    role: UserRole,
}

#[derive(Debug, Args)]
struct SetRoleArgs {
    /// User ID.
    id: Uuid,
    /// New role: admin, staff, or viewer.
    role: UserRole,
}

const COLUMNS: &[Column] = &[
    ("NAME", 22, Align::Left),
    ("EMAIL", 30, Align::Left),
    ("ROLE", 8, Align::Left),
    ("ACTIVE", 6, Align::Left),
];

/// Runs the users screen.
pub async fn run(api: &ApiClient, args: UsersArgs) -> anyhow::Result<()> {
    match args.command {
        UsersCommand::List => {
            let users = api.users().list().await?;
            header(COLUMNS);
            for user in &users {
                row(
                    COLUMNS,
                    &[
                        user.name.clone(),
                        user.email.clone(),
                        user.role.to_string(),
                        if user.is_active { "yes".to_string() } else { "no".to_string() },
                    ],
                );
            }
            Ok(())
        }
        UsersCommand::Create(args) => {
            let user = api
                .users()
                .create(&CreateUserRequest {
                    name: args.name,
                    email: args.email,
                    password: args.password,
                    role: args.role,
                })
                .await?;
            println!("Created {} <{}> role={}", user.name, user.email, user.role);
            Ok(())
        }
        UsersCommand::SetRole(args) => {
            let user = api.users().set_role(args.id, args.role).await?;
            println!("{} is now {}", user.name, user.role);
            Ok(())
        }
    }
}
