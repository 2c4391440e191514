//! Business logic: lead registration and access tokens.

pub mod leads;
pub mod tokens;

pub use leads::{register, LeadCandidate, Registration};
pub use tokens::{issue, verify, TokenClaims};
