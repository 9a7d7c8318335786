//! Integration flows

pub mod flows;
pub mod persistence;
