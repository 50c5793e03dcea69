//! Companies service.

use async_trait::async_trait;
use mockall::automock;
use tracing::warn;

use crate::{
    database::Db,
    domain::companies::{
        data::{CompaniesPage, CompanyDraft, ListCompaniesParams},
        errors::CompaniesServiceError,
        records::{CompanyRecord, CompanyUuid},
        repository::{CompaniesRepository, PgCompaniesRepository},
    },
};

#[derive(Debug, Clone)]
pub struct PgCompaniesService<R = PgCompaniesRepository> {
    repository: R,
}

impl PgCompaniesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self::with_repository(PgCompaniesRepository::new(db))
    }
}

impl<R: CompaniesRepository> PgCompaniesService<R> {
    #[must_use]
    pub fn with_repository(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: CompaniesRepository> CompaniesService for PgCompaniesService<R> {
    async fn list_companies(
        &self,
        params: ListCompaniesParams,
    ) -> Result<CompaniesPage, CompaniesServiceError> {
        let query = params.validate()?;
        let (limit, offset) = (query.limit, query.offset);

        let listing = self.repository.list_companies(query).await?;

        Ok(CompaniesPage {
            companies: listing.companies,
            limit,
            offset,
            total: listing.total,
        })
    }

    async fn get_company(
        &self,
        company: CompanyUuid,
    ) -> Result<CompanyRecord, CompaniesServiceError> {
        self.repository
            .get_company(company)
            .await?
            .ok_or(CompaniesServiceError::NotFound)
    }

    async fn create_company(
        &self,
        draft: CompanyDraft,
    ) -> Result<CompanyRecord, CompaniesServiceError> {
        let company = draft.validate()?;

        Ok(self.repository.create_company(company).await?)
    }

    async fn update_company(
        &self,
        company: CompanyUuid,
        draft: CompanyDraft,
    ) -> Result<CompanyRecord, CompaniesServiceError> {
        let update = draft.validate()?;

        self.repository
            .update_company(company, update)
            .await?
            .ok_or(CompaniesServiceError::NotFound)
    }

    async fn delete_company(&self, company: CompanyUuid) -> Result<(), CompaniesServiceError> {
        match self.repository.delete_company(company).await? {
            0 => Err(CompaniesServiceError::NotFound),
            1 => Ok(()),
            rows => {
                warn!(%company, rows, "delete removed more than one company");

                Err(CompaniesServiceError::UnexpectedRowCount(rows))
            }
        }
    }
}

#[automock]
#[async_trait]
pub trait CompaniesService: Send + Sync {
    /// Retrieves a page of companies, newest first.
    async fn list_companies(
        &self,
        params: ListCompaniesParams,
    ) -> Result<CompaniesPage, CompaniesServiceError>;

    /// Retrieve a single company.
    async fn get_company(
        &self,
        company: CompanyUuid,
    ) -> Result<CompanyRecord, CompaniesServiceError>;

    /// Validates and stores a new company.
    async fn create_company(
        &self,
        draft: CompanyDraft,
    ) -> Result<CompanyRecord, CompaniesServiceError>;

    /// Validates the draft and replaces the stored company's fields.
    async fn update_company(
        &self,
        company: CompanyUuid,
        draft: CompanyDraft,
    ) -> Result<CompanyRecord, CompaniesServiceError>;

    /// Deletes the company with the given UUID.
    async fn delete_company(&self, company: CompanyUuid) -> Result<(), CompaniesServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use testresult::TestResult;

    use crate::domain::companies::{
        data::{CompanyListQuery, CompanyListing, NewCompany},
        errors::{CompaniesRepositoryError, ValidationError},
        records::Jurisdiction,
        repository::MockCompaniesRepository,
    };

    use super::*;

    fn draft() -> CompanyDraft {
        CompanyDraft {
            jurisdiction: "UK".to_string(),
            company_name: "Acme Ltd".to_string(),
            company_address: "1 Main St".to_string(),
            ..CompanyDraft::default()
        }
    }

    fn record(id: CompanyUuid) -> CompanyRecord {
        CompanyRecord {
            id,
            jurisdiction: Jurisdiction::Uk,
            company_name: "Acme Ltd".to_string(),
            company_address: "1 Main St".to_string(),
            nature_of_business: None,
            number_of_directors: None,
            number_of_shareholders: None,
            sec_code: None,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    fn service(repository: MockCompaniesRepository) -> PgCompaniesService<MockCompaniesRepository> {
        PgCompaniesService::with_repository(repository)
    }

    #[tokio::test]
    async fn list_applies_default_pagination() -> TestResult {
        let mut repository = MockCompaniesRepository::new();

        repository
            .expect_list_companies()
            .once()
            .withf(|query| {
                *query
                    == CompanyListQuery {
                        limit: 20,
                        offset: 0,
                        jurisdiction: None,
                    }
            })
            .return_once(|_| {
                Ok(CompanyListing {
                    companies: vec![],
                    total: 0,
                })
            });

        let page = service(repository)
            .list_companies(ListCompaniesParams::default())
            .await?;

        assert!(page.companies.is_empty());
        assert_eq!((page.limit, page.offset, page.total), (20, 0, 0));

        Ok(())
    }

    #[tokio::test]
    async fn list_reports_effective_pagination_and_total() -> TestResult {
        let id = CompanyUuid::new();
        let mut repository = MockCompaniesRepository::new();

        repository
            .expect_list_companies()
            .once()
            .withf(|query| {
                query.limit == 1
                    && query.offset == 3
                    && query.jurisdiction.as_deref() == Some("Singapore")
            })
            .return_once(move |_| {
                Ok(CompanyListing {
                    companies: vec![record(id)],
                    total: 9,
                })
            });

        let page = service(repository)
            .list_companies(ListCompaniesParams {
                limit: Some(1),
                offset: Some(3),
                jurisdiction: Some("Singapore".to_string()),
            })
            .await?;

        assert_eq!(page.companies.len(), 1);
        assert_eq!((page.limit, page.offset, page.total), (1, 3, 9));

        Ok(())
    }

    #[tokio::test]
    async fn list_out_of_range_limit_never_reaches_storage() {
        let mut repository = MockCompaniesRepository::new();

        repository.expect_list_companies().never();

        let result = service(repository)
            .list_companies(ListCompaniesParams {
                limit: Some(200),
                ..ListCompaniesParams::default()
            })
            .await;

        assert!(
            matches!(
                result,
                Err(CompaniesServiceError::Validation(
                    ValidationError::LimitOutOfRange
                ))
            ),
            "expected LimitOutOfRange, got {result:?}"
        );
    }

    #[tokio::test]
    async fn list_negative_offset_never_reaches_storage() {
        let mut repository = MockCompaniesRepository::new();

        repository.expect_list_companies().never();

        let result = service(repository)
            .list_companies(ListCompaniesParams {
                offset: Some(-10),
                ..ListCompaniesParams::default()
            })
            .await;

        assert!(
            matches!(
                result,
                Err(CompaniesServiceError::Validation(
                    ValidationError::NegativeOffset
                ))
            ),
            "expected NegativeOffset, got {result:?}"
        );
    }

    #[tokio::test]
    async fn get_maps_absence_to_not_found() {
        let id = CompanyUuid::new();
        let mut repository = MockCompaniesRepository::new();

        repository
            .expect_get_company()
            .once()
            .withf(move |company| *company == id)
            .return_once(|_| Ok(None));

        let result = service(repository).get_company(id).await;

        assert!(
            matches!(result, Err(CompaniesServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn get_storage_failure_is_not_not_found() {
        let mut repository = MockCompaniesRepository::new();

        repository
            .expect_get_company()
            .once()
            .return_once(|_| Err(CompaniesRepositoryError::Sql(sqlx::Error::PoolTimedOut)));

        let result = service(repository).get_company(CompanyUuid::new()).await;

        assert!(
            matches!(result, Err(CompaniesServiceError::Repository(_))),
            "expected Repository, got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_passes_validated_company_to_storage() -> TestResult {
        let id = CompanyUuid::new();
        let mut repository = MockCompaniesRepository::new();

        repository
            .expect_create_company()
            .once()
            .withf(|company| {
                *company
                    == NewCompany {
                        jurisdiction: Jurisdiction::Uk,
                        company_name: "Acme Ltd".to_string(),
                        company_address: "1 Main St".to_string(),
                        nature_of_business: None,
                        number_of_directors: Some(2),
                        number_of_shareholders: None,
                        sec_code: None,
                    }
            })
            .return_once(move |_| Ok(record(id)));

        let created = service(repository)
            .create_company(CompanyDraft {
                company_name: "  Acme Ltd  ".to_string(),
                number_of_directors: Some(2),
                ..draft()
            })
            .await?;

        assert_eq!(created.id, id);

        Ok(())
    }

    #[tokio::test]
    async fn create_invalid_jurisdiction_never_reaches_storage() {
        let mut repository = MockCompaniesRepository::new();

        repository.expect_create_company().never();

        let result = service(repository)
            .create_company(CompanyDraft {
                jurisdiction: "France".to_string(),
                ..draft()
            })
            .await;

        assert!(
            matches!(
                result,
                Err(CompaniesServiceError::Validation(
                    ValidationError::InvalidJurisdiction
                ))
            ),
            "expected InvalidJurisdiction, got {result:?}"
        );
    }

    #[tokio::test]
    async fn update_invalid_draft_never_reaches_storage() {
        let mut repository = MockCompaniesRepository::new();

        repository.expect_update_company().never();

        let result = service(repository)
            .update_company(
                CompanyUuid::new(),
                CompanyDraft {
                    number_of_shareholders: Some(1001),
                    ..draft()
                },
            )
            .await;

        assert!(
            matches!(
                result,
                Err(CompaniesServiceError::Validation(
                    ValidationError::ShareholdersOutOfRange
                ))
            ),
            "expected ShareholdersOutOfRange, got {result:?}"
        );
    }

    #[tokio::test]
    async fn update_maps_absence_to_not_found() {
        let mut repository = MockCompaniesRepository::new();

        repository
            .expect_update_company()
            .once()
            .return_once(|_, _| Ok(None));

        let result = service(repository)
            .update_company(CompanyUuid::new(), draft())
            .await;

        assert!(
            matches!(result, Err(CompaniesServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn delete_maps_zero_rows_to_not_found() {
        let mut repository = MockCompaniesRepository::new();

        repository
            .expect_delete_company()
            .once()
            .return_once(|_| Ok(0));

        let result = service(repository).delete_company(CompanyUuid::new()).await;

        assert!(
            matches!(result, Err(CompaniesServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn delete_flags_multiple_rows_as_invariant_violation() {
        let mut repository = MockCompaniesRepository::new();

        repository
            .expect_delete_company()
            .once()
            .return_once(|_| Ok(2));

        let result = service(repository).delete_company(CompanyUuid::new()).await;

        assert!(
            matches!(result, Err(CompaniesServiceError::UnexpectedRowCount(2))),
            "expected UnexpectedRowCount, got {result:?}"
        );
    }

    mod integration {
        use std::collections::HashSet;

        use testresult::TestResult;

        use crate::{domain::companies::data::ListCompaniesParams, test::TestContext};

        use super::{super::*, draft};

        #[tokio::test]
        async fn created_company_can_be_fetched() -> TestResult {
            let ctx = TestContext::new().await;

            let created = ctx.companies.create_company(draft()).await?;
            let fetched = ctx.companies.get_company(created.id).await?;

            assert_eq!(fetched, created);
            assert_eq!(fetched.number_of_directors, None);

            Ok(())
        }

        #[tokio::test]
        async fn created_identifiers_are_unique() -> TestResult {
            let ctx = TestContext::new().await;
            let mut ids = HashSet::new();

            for _ in 0..5 {
                let company = ctx.companies.create_company(draft()).await?;

                assert!(ids.insert(company.id), "identifier reused: {}", company.id);
            }

            Ok(())
        }

        #[tokio::test]
        async fn invalid_company_is_not_persisted() -> TestResult {
            let ctx = TestContext::new().await;

            let result = ctx
                .companies
                .create_company(CompanyDraft {
                    jurisdiction: "France".to_string(),
                    ..draft()
                })
                .await;

            let page = ctx
                .companies
                .list_companies(ListCompaniesParams::default())
                .await?;

            assert!(result.is_err(), "France should be rejected");
            assert_eq!(page.total, 0);

            Ok(())
        }

        #[tokio::test]
        async fn empty_store_lists_nothing() -> TestResult {
            let ctx = TestContext::new().await;

            let page = ctx
                .companies
                .list_companies(ListCompaniesParams::default())
                .await?;

            assert!(page.companies.is_empty());
            assert_eq!(page.total, 0);

            Ok(())
        }

        #[tokio::test]
        async fn deleted_company_is_not_found() -> TestResult {
            let ctx = TestContext::new().await;

            let company = ctx.companies.create_company(draft()).await?;

            ctx.companies.delete_company(company.id).await?;

            let fetched = ctx.companies.get_company(company.id).await;
            let deleted_again = ctx.companies.delete_company(company.id).await;

            assert!(
                matches!(fetched, Err(CompaniesServiceError::NotFound)),
                "expected NotFound, got {fetched:?}"
            );
            assert!(
                matches!(deleted_again, Err(CompaniesServiceError::NotFound)),
                "expected NotFound, got {deleted_again:?}"
            );

            Ok(())
        }

        #[tokio::test]
        async fn update_replaces_fields_and_keeps_created_at() -> TestResult {
            let ctx = TestContext::new().await;

            let created = ctx.companies.create_company(draft()).await?;

            let updated = ctx
                .companies
                .update_company(
                    created.id,
                    CompanyDraft {
                        company_address: "2 High St".to_string(),
                        sec_code: Some("7011".to_string()),
                        ..CompanyDraft::from(created.clone())
                    },
                )
                .await?;

            assert_eq!(updated.company_address, "2 High St");
            assert_eq!(updated.sec_code.as_deref(), Some("7011"));
            assert_eq!(updated.created_at, created.created_at);
            assert!(
                updated.updated_at >= created.updated_at,
                "updated_at should not move backwards"
            );

            Ok(())
        }

        #[tokio::test]
        async fn sequential_pages_cover_every_company_once() -> TestResult {
            let ctx = TestContext::new().await;
            let mut created = HashSet::new();

            for n in 0..7 {
                let company = ctx
                    .companies
                    .create_company(CompanyDraft {
                        company_name: format!("Company {n}"),
                        ..draft()
                    })
                    .await?;

                created.insert(company.id);
            }

            let first = ctx
                .companies
                .list_companies(ListCompaniesParams {
                    limit: Some(4),
                    offset: Some(0),
                    jurisdiction: None,
                })
                .await?;

            let second = ctx
                .companies
                .list_companies(ListCompaniesParams {
                    limit: Some(4),
                    offset: Some(4),
                    jurisdiction: None,
                })
                .await?;

            let pages: Vec<_> = first.companies.iter().chain(&second.companies).collect();
            let seen: HashSet<_> = pages.iter().map(|company| company.id).collect();

            assert_eq!(first.total, 7);
            assert_eq!(second.total, 7);
            assert_eq!(pages.len(), 7, "no duplicates across pages");
            assert_eq!(seen, created, "every company appears once");
            assert!(
                pages
                    .windows(2)
                    .all(|pair| pair[0].created_at >= pair[1].created_at),
                "companies should be ordered newest first"
            );

            Ok(())
        }
    }
}
