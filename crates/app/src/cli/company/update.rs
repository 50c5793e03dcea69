use clap::Args;
use companies_app::{
    database::Db,
    domain::companies::{CompaniesService, PgCompaniesService, data::CompanyDraft},
};
use uuid::Uuid;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct UpdateCompanyArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Company UUID
    #[arg(long)]
    id: Uuid,

    #[command(flatten)]
    changes: CompanyChanges,
}

/// Fields to change. Anything left out keeps its stored value.
#[derive(Debug, Default, Args)]
pub(crate) struct CompanyChanges {
    /// Jurisdiction (UK, Singapore or Caymens)
    #[arg(long)]
    jurisdiction: Option<String>,

    /// Registered company name
    #[arg(long)]
    name: Option<String>,

    /// Registered address
    #[arg(long)]
    address: Option<String>,

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

impl CompanyChanges {
    fn apply(self, current: CompanyDraft) -> CompanyDraft {
        CompanyDraft {
            jurisdiction: self.jurisdiction.unwrap_or(current.jurisdiction),
            company_name: self.name.unwrap_or(current.company_name),
            company_address: self.address.unwrap_or(current.company_address),
            nature_of_business: self.nature_of_business.or(current.nature_of_business),
            number_of_directors: self.directors.or(current.number_of_directors),
            number_of_shareholders: self.shareholders.or(current.number_of_shareholders),
            sec_code: self.sec_code.or(current.sec_code),
        }
    }
}

pub(crate) async fn run(args: UpdateCompanyArgs) -> Result<(), String> {
    let service = PgCompaniesService::new(Db::new(args.database.connect().await?));

    let current = service
        .get_company(args.id.into())
        .await
        .map_err(|error| format!("failed to load company {}: {error}", args.id))?;

    let company = service
        .update_company(args.id.into(), args.changes.apply(current.into()))
        .await
        .map_err(|error| format!("failed to update company {}: {error}", args.id))?;

    super::print_company(&company);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current() -> CompanyDraft {
        CompanyDraft {
            jurisdiction: "UK".to_string(),
            company_name: "Acme Ltd".to_string(),
            company_address: "1 Main St".to_string(),
            nature_of_business: Some("Widgets".to_string()),
            number_of_directors: Some(2),
            number_of_shareholders: None,
            sec_code: None,
        }
    }

    #[test]
    fn no_changes_keep_the_stored_fields() {
        assert_eq!(CompanyChanges::default().apply(current()), current());
    }

    #[test]
    fn given_fields_replace_the_stored_ones() {
        let changes = CompanyChanges {
            address: Some("2 High St".to_string()),
            shareholders: Some(40),
            ..CompanyChanges::default()
        };

        let draft = changes.apply(current());

        assert_eq!(draft.company_address, "2 High St");
        assert_eq!(draft.number_of_shareholders, Some(40));
        assert_eq!(draft.company_name, "Acme Ltd");
        assert_eq!(draft.number_of_directors, Some(2));
    }
}
