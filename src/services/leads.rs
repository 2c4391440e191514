// SPDX-License-Identifier: MIT

//! Lead registration: validation, dedupe and persistence.

use chrono::Utc;

use crate::error::AppError;
use crate::models::LeadRecord;
use crate::store::{InsertOutcome, LeadStore};

/// A validated submission, ready to be registered.
#[derive(Debug, Clone)]
pub struct LeadCandidate {
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub consent: bool,
    pub build: Option<String>,
}

/// Outcome of registering a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// First contact: a record was created.
    New,
    /// The email was already registered; nothing was stored or changed.
    WelcomeBack,
}

impl LeadCandidate {
    /// Validate a signup-variant submission: email only, optional build tag.
    pub fn from_signup(email: Option<String>, build: Option<String>) -> Result<Self, AppError> {
        let email = required(email, "email")?;
        if !has_address_shape(&email, 1) {
            return Err(AppError::InvalidEmail);
        }

        Ok(Self {
            email,
            first_name: None,
            last_name: None,
            consent: false,
            build,
        })
    }

    /// Validate a full-capture submission: name, email and explicit consent.
    /// This variant applies the stricter TLD rule (at least two characters).
    pub fn from_submit(
        first_name: Option<String>,
        last_name: Option<String>,
        email: Option<String>,
        consent: bool,
    ) -> Result<Self, AppError> {
        let first_name = required(first_name, "firstName")?;
        let last_name = required(last_name, "lastName")?;
        let email = required(email, "email")?;
        if !consent {
            return Err(AppError::MissingConsent);
        }
        if !has_address_shape(&email, 2) {
            return Err(AppError::InvalidEmail);
        }

        Ok(Self {
            email,
            first_name: Some(first_name),
            last_name: Some(last_name),
            consent: true,
            build: None,
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::MissingField(field)),
    }
}

/// Basic address-shape check: `local@domain.tld`, no whitespace or extra `@`,
/// every part non-empty, TLD at least `min_tld_len` characters.
pub fn has_address_shape(email: &str, min_tld_len: usize) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }

    let Some((label, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !label.is_empty() && tld.len() >= min_tld_len
}

/// Register a validated candidate against the store.
///
/// Resubmission of a known email is a success, not an error: the stored
/// record is left untouched and the caller gets `WelcomeBack`. A
/// duplicate-key conflict surfaced by the store (two first-time signups
/// racing) is folded into the same branch.
pub async fn register(
    store: &dyn LeadStore,
    candidate: LeadCandidate,
) -> Result<Registration, AppError> {
    if store.find(&candidate.email).await?.is_some() {
        tracing::info!(email = %candidate.email, "Lead already registered");
        return Ok(Registration::WelcomeBack);
    }

    let record = LeadRecord {
        email: candidate.email.clone(),
        first_name: candidate.first_name,
        last_name: candidate.last_name,
        consent: candidate.consent,
        registered_at: Utc::now().to_rfc3339(),
        build: candidate.build.unwrap_or_else(|| "unknown".to_string()),
    };

    match store.insert(record).await? {
        InsertOutcome::Inserted => {
            tracing::info!(email = %candidate.email, "New lead registered");
            Ok(Registration::New)
        }
        InsertOutcome::AlreadyRegistered => {
            tracing::info!(email = %candidate.email, "Lost insert race, lead already registered");
            Ok(Registration::WelcomeBack)
        }
    }
}
