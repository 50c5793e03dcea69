use clap::Args;
use companies_app::{
    database::Db,
    domain::companies::{CompaniesService, PgCompaniesService},
};
use uuid::Uuid;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct DeleteCompanyArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Company UUID
    #[arg(long)]
    id: Uuid,
}

pub(crate) async fn run(args: DeleteCompanyArgs) -> Result<(), String> {
    let service = PgCompaniesService::new(Db::new(args.database.connect().await?));

    service
        .delete_company(args.id.into())
        .await
        .map_err(|error| format!("failed to delete company {}: {error}", args.id))?;

    println!("deleted company {}", args.id);

    Ok(())
}
