//! Company Records

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::Timestamp;
use thiserror::Error;

use crate::uuids::TypedUuid;

/// Company UUID
pub type CompanyUuid = TypedUuid<CompanyRecord>;

/// Legal jurisdiction a company is registered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Jurisdiction {
    Uk,
    Singapore,
    Caymens,
}

impl Jurisdiction {
    /// Every accepted jurisdiction, in display order.
    pub const ALL: [Self; 3] = [Self::Uk, Self::Singapore, Self::Caymens];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Uk => "UK",
            Self::Singapore => "Singapore",
            Self::Caymens => "Caymens",
        }
    }
}

impl Display for Jurisdiction {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown jurisdiction {0:?}")]
pub struct UnknownJurisdiction(pub String);

impl FromStr for Jurisdiction {
    type Err = UnknownJurisdiction;

    /// Matching is exact: no trimming and no case folding.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|jurisdiction| jurisdiction.as_str() == value)
            .ok_or_else(|| UnknownJurisdiction(value.to_string()))
    }
}

/// Company Record
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyRecord {
    pub id: CompanyUuid,
    pub jurisdiction: Jurisdiction,
    pub company_name: String,
    pub company_address: String,
    pub nature_of_business: Option<String>,
    pub number_of_directors: Option<i32>,
    pub number_of_shareholders: Option<i32>,
    pub sec_code: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
