//! Companies Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{FromRow, Postgres, Row, postgres::PgRow, query, query_as, query_scalar};

use crate::{
    database::Db,
    domain::companies::{
        data::{CompanyListQuery, CompanyListing, NewCompany},
        errors::CompaniesRepositoryError,
        records::{CompanyRecord, CompanyUuid, Jurisdiction},
    },
};

const LISTING_SNAPSHOT_SQL: &str = include_str!("sql/listing_snapshot.sql");
const COUNT_COMPANIES_SQL: &str = include_str!("sql/count_companies.sql");
const LIST_COMPANIES_SQL: &str = include_str!("sql/list_companies.sql");
const GET_COMPANY_SQL: &str = include_str!("sql/get_company.sql");
const CREATE_COMPANY_SQL: &str = include_str!("sql/create_company.sql");
const UPDATE_COMPANY_SQL: &str = include_str!("sql/update_company.sql");
const DELETE_COMPANY_SQL: &str = include_str!("sql/delete_company.sql");

/// Storage access for company rows. Holds no business rules: callers are
/// expected to pass validated data.
#[automock]
#[async_trait]
pub trait CompaniesRepository: Send + Sync {
    /// One page of companies, newest first, plus the count of all rows
    /// matching the jurisdiction filter.
    async fn list_companies(
        &self,
        query: CompanyListQuery,
    ) -> Result<CompanyListing, CompaniesRepositoryError>;

    /// `None` when no row has this identifier.
    async fn get_company(
        &self,
        company: CompanyUuid,
    ) -> Result<Option<CompanyRecord>, CompaniesRepositoryError>;

    /// Insert a company under a freshly generated identifier.
    async fn create_company(
        &self,
        company: NewCompany,
    ) -> Result<CompanyRecord, CompaniesRepositoryError>;

    /// Replace every mutable field and refresh `updated_at`.
    async fn update_company(
        &self,
        company: CompanyUuid,
        update: NewCompany,
    ) -> Result<Option<CompanyRecord>, CompaniesRepositoryError>;

    /// Returns the number of rows removed.
    async fn delete_company(&self, company: CompanyUuid) -> Result<u64, CompaniesRepositoryError>;
}

#[derive(Debug, Clone)]
pub struct PgCompaniesRepository {
    db: Db,
}

impl PgCompaniesRepository {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CompaniesRepository for PgCompaniesRepository {
    async fn list_companies(
        &self,
        query: CompanyListQuery,
    ) -> Result<CompanyListing, CompaniesRepositoryError> {
        let offset = i64::try_from(query.offset)?;

        // Count and page must read the same snapshot.
        let mut tx = self.db.begin().await?;

        sqlx::query(LISTING_SNAPSHOT_SQL).execute(&mut *tx).await?;

        let total: i64 = query_scalar(COUNT_COMPANIES_SQL)
            .bind(query.jurisdiction.as_deref())
            .fetch_one(&mut *tx)
            .await?;

        let companies = query_as::<Postgres, CompanyRecord>(LIST_COMPANIES_SQL)
            .bind(query.jurisdiction.as_deref())
            .bind(i64::from(query.limit))
            .bind(offset)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(CompanyListing {
            companies,
            total: u64::try_from(total)?,
        })
    }

    async fn get_company(
        &self,
        company: CompanyUuid,
    ) -> Result<Option<CompanyRecord>, CompaniesRepositoryError> {
        query_as::<Postgres, CompanyRecord>(GET_COMPANY_SQL)
            .bind(company.into_uuid())
            .fetch_optional(self.db.pool())
            .await
            .map_err(Into::into)
    }

    async fn create_company(
        &self,
        company: NewCompany,
    ) -> Result<CompanyRecord, CompaniesRepositoryError> {
        query_as::<Postgres, CompanyRecord>(CREATE_COMPANY_SQL)
            .bind(CompanyUuid::new().into_uuid())
            .bind(company.jurisdiction.as_str())
            .bind(company.company_name)
            .bind(company.company_address)
            .bind(company.nature_of_business)
            .bind(company.number_of_directors)
            .bind(company.number_of_shareholders)
            .bind(company.sec_code)
            .fetch_one(self.db.pool())
            .await
            .map_err(Into::into)
    }

    async fn update_company(
        &self,
        company: CompanyUuid,
        update: NewCompany,
    ) -> Result<Option<CompanyRecord>, CompaniesRepositoryError> {
        query_as::<Postgres, CompanyRecord>(UPDATE_COMPANY_SQL)
            .bind(company.into_uuid())
            .bind(update.jurisdiction.as_str())
            .bind(update.company_name)
            .bind(update.company_address)
            .bind(update.nature_of_business)
            .bind(update.number_of_directors)
            .bind(update.number_of_shareholders)
            .bind(update.sec_code)
            .fetch_optional(self.db.pool())
            .await
            .map_err(Into::into)
    }

    async fn delete_company(&self, company: CompanyUuid) -> Result<u64, CompaniesRepositoryError> {
        let rows_affected = query(DELETE_COMPANY_SQL)
            .bind(company.into_uuid())
            .execute(self.db.pool())
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for CompanyRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let jurisdiction = row
            .try_get::<&str, _>("jurisdiction")?
            .parse::<Jurisdiction>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "jurisdiction".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            id: CompanyUuid::from_uuid(row.try_get("id")?),
            jurisdiction,
            company_name: row.try_get("company_name")?,
            company_address: row.try_get("company_address")?,
            nature_of_business: row.try_get("nature_of_business")?,
            number_of_directors: row.try_get("number_of_directors")?,
            number_of_shareholders: row.try_get("number_of_shareholders")?,
            sec_code: row.try_get("sec_code")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
