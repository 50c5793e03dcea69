use clap::{Args, Subcommand};
use companies_app::domain::companies::records::CompanyRecord;

mod create;
mod delete;
mod list;
mod update;

#[derive(Debug, Args)]
pub(crate) struct CompanyCommand {
    #[command(subcommand)]
    command: CompanySubcommand,
}

#[derive(Debug, Subcommand)]
enum CompanySubcommand {
    /// Create a company
    Create(create::CreateCompanyArgs),
    /// Delete a company
    Delete(delete::DeleteCompanyArgs),
    /// List companies, newest first
    List(list::ListCompaniesArgs),
    /// Change some fields of a company, keeping the rest
    Update(update::UpdateCompanyArgs),
}

pub(crate) async fn run(command: CompanyCommand) -> Result<(), String> {
    match command.command {
        CompanySubcommand::Create(args) => create::run(args).await,
        CompanySubcommand::Delete(args) => delete::run(args).await,
        CompanySubcommand::List(args) => list::run(args).await,
        CompanySubcommand::Update(args) => update::run(args).await,
    }
}

fn print_company(company: &CompanyRecord) {
    let or_dash = |value: Option<String>| value.unwrap_or_else(|| "-".to_string());

    println!("id: {}", company.id);
    println!("jurisdiction: {}", company.jurisdiction);
    println!("company_name: {}", company.company_name);
    println!("company_address: {}", company.company_address);
    println!(
        "nature_of_business: {}",
        or_dash(company.nature_of_business.clone())
    );
    println!(
        "number_of_directors: {}",
        or_dash(company.number_of_directors.map(|n| n.to_string()))
    );
    println!(
        "number_of_shareholders: {}",
        or_dash(company.number_of_shareholders.map(|n| n.to_string()))
    );
    println!("sec_code: {}", or_dash(company.sec_code.clone()));
    println!("created_at: {}", company.created_at);
    println!("updated_at: {}", company.updated_at);
}
