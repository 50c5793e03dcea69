use clap::Args;
use companies_app::{
    database::Db,
    domain::companies::{CompaniesService, PgCompaniesService, data::ListCompaniesParams},
};

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct ListCompaniesArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Page size (1-100, default 20)
    #[arg(long, allow_negative_numbers = true)]
    limit: Option<i64>,

    /// Rows to skip (default 0)
    #[arg(long, allow_negative_numbers = true)]
    offset: Option<i64>,

    /// Only list companies in this jurisdiction
    #[arg(long)]
    jurisdiction: Option<String>,
}

pub(crate) async fn run(args: ListCompaniesArgs) -> Result<(), String> {
    let service = PgCompaniesService::new(Db::new(args.database.connect().await?));

    let page = service
        .list_companies(ListCompaniesParams {
            limit: args.limit,
            offset: args.offset,
            jurisdiction: args.jurisdiction,
        })
        .await
        .map_err(|error| format!("failed to list companies: {error}"))?;

    println!(
        "showing {} of {} companies (limit {}, offset {})",
        page.companies.len(),
        page.total,
        page.limit,
        page.offset
    );

    for company in &page.companies {
        println!();
        super::print_company(company);
    }

    Ok(())
}
