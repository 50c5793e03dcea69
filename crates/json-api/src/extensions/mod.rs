//! Extension traits

mod depot;
mod query;
mod result;

pub(crate) use depot::DepotExt as _;
pub(crate) use query::IntegerQueryExt as _;
pub(crate) use result::ResultExt as _;
