//! Companies Data

use std::ops::RangeInclusive;

use crate::domain::companies::{
    errors::ValidationError,
    records::{CompanyRecord, Jurisdiction},
};

const MAX_COMPANY_NAME_CHARS: usize = 255;
const DIRECTORS_RANGE: RangeInclusive<i32> = 1..=100;
const SHAREHOLDERS_RANGE: RangeInclusive<i32> = 1..=1000;

const DEFAULT_LIMIT: u32 = 20;
const LIMIT_RANGE: RangeInclusive<u32> = 1..=100;

/// Unvalidated company fields, as supplied by a client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyDraft {
    pub jurisdiction: String,
    pub company_name: String,
    pub company_address: String,
    pub nature_of_business: Option<String>,
    pub number_of_directors: Option<i64>,
    pub number_of_shareholders: Option<i64>,
    pub sec_code: Option<String>,
}

/// Company fields that passed validation. Only [`CompanyDraft::validate`]
/// produces one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCompany {
    pub jurisdiction: Jurisdiction,
    pub company_name: String,
    pub company_address: String,
    pub nature_of_business: Option<String>,
    pub number_of_directors: Option<i32>,
    pub number_of_shareholders: Option<i32>,
    pub sec_code: Option<String>,
}

impl CompanyDraft {
    /// Check the draft against the company rules, stopping at the first
    /// violation.
    ///
    /// Name and address are trimmed. Optional text that is blank after
    /// trimming is dropped.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] in rule order: name, address,
    /// jurisdiction, directors, shareholders.
    pub fn validate(self) -> Result<NewCompany, ValidationError> {
        let company_name = self.company_name.trim();

        if company_name.is_empty() {
            return Err(ValidationError::NameRequired);
        }

        if company_name.chars().count() > MAX_COMPANY_NAME_CHARS {
            return Err(ValidationError::NameTooLong);
        }

        let company_address = self.company_address.trim();

        if company_address.is_empty() {
            return Err(ValidationError::AddressRequired);
        }

        let jurisdiction = self
            .jurisdiction
            .parse::<Jurisdiction>()
            .map_err(|_ignored| ValidationError::InvalidJurisdiction)?;

        let number_of_directors = bounded(
            self.number_of_directors,
            &DIRECTORS_RANGE,
            ValidationError::DirectorsOutOfRange,
        )?;

        let number_of_shareholders = bounded(
            self.number_of_shareholders,
            &SHAREHOLDERS_RANGE,
            ValidationError::ShareholdersOutOfRange,
        )?;

        Ok(NewCompany {
            jurisdiction,
            company_name: company_name.to_string(),
            company_address: company_address.to_string(),
            nature_of_business: non_blank(self.nature_of_business),
            number_of_directors,
            number_of_shareholders,
            sec_code: non_blank(self.sec_code),
        })
    }
}

impl From<CompanyRecord> for CompanyDraft {
    fn from(record: CompanyRecord) -> Self {
        Self {
            jurisdiction: record.jurisdiction.to_string(),
            company_name: record.company_name,
            company_address: record.company_address,
            nature_of_business: record.nature_of_business,
            number_of_directors: record.number_of_directors.map(i64::from),
            number_of_shareholders: record.number_of_shareholders.map(i64::from),
            sec_code: record.sec_code,
        }
    }
}

fn bounded(
    value: Option<i64>,
    range: &RangeInclusive<i32>,
    error: ValidationError,
) -> Result<Option<i32>, ValidationError> {
    value
        .map(|value| {
            i32::try_from(value)
                .ok()
                .filter(|value| range.contains(value))
                .ok_or(error)
        })
        .transpose()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Raw list parameters; absent values fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListCompaniesParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub jurisdiction: Option<String>,
}

/// Validated list parameters handed to the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyListQuery {
    pub limit: u32,
    pub offset: u64,

    /// Matched verbatim, unknown values simply match nothing.
    pub jurisdiction: Option<String>,
}

impl ListCompaniesParams {
    /// Apply pagination defaults and bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::LimitOutOfRange`] or
    /// [`ValidationError::NegativeOffset`].
    pub fn validate(self) -> Result<CompanyListQuery, ValidationError> {
        let limit = match self.limit {
            None => DEFAULT_LIMIT,
            Some(limit) => u32::try_from(limit)
                .ok()
                .filter(|limit| LIMIT_RANGE.contains(limit))
                .ok_or(ValidationError::LimitOutOfRange)?,
        };

        let offset = match self.offset {
            None => 0,
            Some(offset) => {
                u64::try_from(offset).map_err(|_ignored| ValidationError::NegativeOffset)?
            }
        };

        Ok(CompanyListQuery {
            limit,
            offset,
            jurisdiction: self.jurisdiction,
        })
    }
}

/// Rows of a single page plus the unpaginated match count.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyListing {
    pub companies: Vec<CompanyRecord>,
    pub total: u64,
}

/// A page of companies with the effective pagination applied.
#[derive(Debug, Clone, PartialEq)]
pub struct CompaniesPage {
    pub companies: Vec<CompanyRecord>,
    pub limit: u32,
    pub offset: u64,
    pub total: u64,
}
