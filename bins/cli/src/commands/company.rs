//! Company profile screen.

use clap::{Args, Subcommand};

use lunas_client::ApiClient;
use lunas_client::resources::company::UpdateCompanyRequest;

/// Arguments for `lunas company`.
#[derive(Debug, Args)]
pub struct CompanyArgs {
    #[command(subcommand)]
    command: CompanyCommand,
}

#[derive(Debug, Subcommand)]
enum CompanyCommand {
    /// Show the company profile.
    Show,
    /// Update profile fields.
    Update(UpdateArgs),
}

#[derive(Debug, Args)]
struct UpdateArgs {
    /// Legal company name.
    #[arg(long)]
    name: Option<String>,
    /// Tax identification number (NPWP).
    #[arg(long)]
    tax_id: Option<String>,
    /// Street address.
    #[arg(long)]
    address: Option<String>,
    /// Contact phone.
    #[arg(long)]
    phone: Option<String>,
    /// Contact email.
    #[arg(long)]
    email: Option<String>,
}

/// Runs the company screen.
pub async fn run(api: &ApiClient, args: CompanyArgs) -> anyhow::Result<()> {
    match args.command {
        CompanyCommand::Show => {
            let company = api.company().get().await?;
            println!("{}", company.name);
            println!("NPWP: {}", company.tax_id);
            println!("{}", company.address);
            println!("{} | {}", company.phone, company.email);
            Ok(())
        }
        CompanyCommand::Update(args) => {
            let request = UpdateCompanyRequest {
                name: args.name,
                tax_id: args.tax_id,
                address: args.address,
                phone: args.phone,
                email: args.email,
            };
            let company = api.company().update(&request).await?;
            println!("Updated profile for {}", company.name);
            Ok(())
        }
    }
}
