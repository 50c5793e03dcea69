use clap::Args;
use companies_app::{
    database::Db,
    domain::companies::{CompaniesService, PgCompaniesService, data::CompanyDraft},
};

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct CreateCompanyArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Jurisdiction (UK, Singapore or Caymens)
    #[arg(long)]
    jurisdiction: String,

    /// Registered company name
    #[arg(long)]
    name: String,

    /// Registered address
    #[arg(long)]
    address: String,

    /// Nature of business
    #[arg(long)]
    nature_of_business: Option<String>,

    /// Number of directors (1-100)
    #[arg(long)]
    directors: Option<i64>,

    /// Number of shareholders (1-1000)
    #[arg(long)]
    shareholders: Option<i64>,

    /// Standard industry classification code
    #[arg(long)]
    sec_code: Option<String>,
}

pub(crate) async fn run(args: CreateCompanyArgs) -> Result<(), String> {
    let service = PgCompaniesService::new(Db::new(args.database.connect().await?));

    let company = service
        .create_company(CompanyDraft {
            jurisdiction: args.jurisdiction,
            company_name: args.name,
            company_address: args.address,
            nature_of_business: args.nature_of_business,
            number_of_directors: args.directors,
            number_of_shareholders: args.shareholders,
            sec_code: args.sec_code,
        })
        .await
        .map_err(|error| format!("failed to create company: {error}"))?;

    super::print_company(&company);

    Ok(())
}
