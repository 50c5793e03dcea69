//! Company Records Domain

pub mod companies;
