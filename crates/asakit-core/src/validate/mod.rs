//! Token configuration validation.
//!
//! Every rule is evaluated on its own so one pass reports all problems, in a
//! fixed order: total, decimals, defaultFrozen, unitName, assetName, then the
//! four role addresses. Validation never fails or panics; a rejected draft
//! simply carries a non-empty issue list.

mod issue;

use serde::Serialize;
use serde_json::Value;
use std::fmt;

use crate::token_config::{TokenConfig, TokenConfigDraft};

pub use issue::{
    AddressField, ConfigIssue, ASSET_NAME_MAX_CHARS, DECIMALS_MAX, UNIT_NAME_MAX_CHARS,
};

/// Outcome of validating a draft. Valid exactly when no issue was recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    issues: Vec<ConfigIssue>,
}

impl ValidationResult {
    pub fn from_issues(issues: Vec<ConfigIssue>) -> Self {
        Self { issues }
    }

    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issues(&self) -> &[ConfigIssue] {
        &self.issues
    }

    /// Error strings in rule order.
    pub fn errors(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.issues.is_empty() {
            return f.write_str("valid");
        }
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", issue)?;
        }
        Ok(())
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Wire {
            is_valid: bool,
            errors: Vec<String>,
        }
        Wire {
            is_valid: self.is_valid(),
            errors: self.errors(),
        }
        .serialize(serializer)
    }
}

/// Validates a (possibly partial) draft.
pub fn validate_token_config(draft: &TokenConfigDraft) -> ValidationResult {
    match resolve_token_config(draft) {
        Ok(_) => ValidationResult::default(),
        Err(result) => result,
    }
}

/// Validates a draft and, when every rule passes, returns the typed config.
pub fn resolve_token_config(draft: &TokenConfigDraft) -> Result<TokenConfig, ValidationResult> {
    let mut issues = Vec::new();

    let total = positive_total(draft.total.as_ref());
    if total.is_none() {
        issues.push(ConfigIssue::Total);
    }

    let decimals = decimals_in_range(draft.decimals.as_ref());
    if decimals.is_none() {
        issues.push(ConfigIssue::Decimals);
    }

    let default_frozen = match draft.default_frozen.as_ref() {
        Some(Value::Bool(b)) => Some(*b),
        _ => None,
    };
    if default_frozen.is_none() {
        issues.push(ConfigIssue::DefaultFrozen);
    }

    let unit_name = bounded_name(draft.unit_name.as_ref(), UNIT_NAME_MAX_CHARS);
    if unit_name.is_none() {
        issues.push(ConfigIssue::UnitName);
    }

    let asset_name = bounded_name(draft.asset_name.as_ref(), ASSET_NAME_MAX_CHARS);
    if asset_name.is_none() {
        issues.push(ConfigIssue::AssetName);
    }

    let mut addresses: [Option<String>; 4] = Default::default();
    for (slot, field) in addresses.iter_mut().zip(AddressField::ALL) {
        match draft.address(field) {
            None => {}
            Some(Value::String(s)) => *slot = Some(s.clone()),
            Some(_) => issues.push(ConfigIssue::Address(field)),
        }
    }

    match (total, decimals, default_frozen, unit_name, asset_name) {
        (Some(total), Some(decimals), Some(default_frozen), Some(unit_name), Some(asset_name))
            if issues.is_empty() =>
        {
            let [manager, reserve, freeze, clawback] = addresses;
            Ok(TokenConfig {
                total,
                decimals,
                default_frozen,
                unit_name,
                asset_name,
                asset_url: draft.asset_url.clone(),
                manager,
                reserve,
                freeze,
                clawback,
                metadata: draft.metadata.clone().unwrap_or_default(),
            })
        }
        _ => Err(ValidationResult::from_issues(issues)),
    }
}

/// A whole, finite, strictly positive supply that fits in a u64.
///
/// The on-chain total is a uint64, so fractional values and values of 2^64 or
/// more are rejected with the same message as non-positive ones.
fn positive_total(value: Option<&Value>) -> Option<u64> {
    let Some(Value::Number(n)) = value else {
        return None;
    };
    if let Some(u) = n.as_u64() {
        return (u > 0).then_some(u);
    }
    let f = n.as_f64()?;
    (f.is_finite() && f > 0.0 && f.fract() == 0.0 && f < u64::MAX as f64).then_some(f as u64)
}

fn decimals_in_range(value: Option<&Value>) -> Option<u32> {
    let Some(Value::Number(n)) = value else {
        return None;
    };
    if let Some(u) = n.as_u64() {
        return u32::try_from(u).ok().filter(|d| *d <= DECIMALS_MAX);
    }
    let f = n.as_f64()?;
    (f >= 0.0 && f <= f64::from(DECIMALS_MAX) && f.fract() == 0.0).then_some(f as u32)
}

/// Text of a name field, if non-empty and within `max_chars` characters.
///
/// Numbers and `true` are taken by their textual form. Zero, `false`, null,
/// arrays and objects never count as a name.
fn bounded_name(value: Option<&Value>, max_chars: usize) -> Option<String> {
    let text = match value? {
        Value::String(s) => s.clone(),
        Value::Number(n) if n.as_f64() == Some(0.0) => return None,
        Value::Number(n) => n.to_string(),
        Value::Bool(true) => "true".to_string(),
        Value::Bool(false) | Value::Null | Value::Array(_) | Value::Object(_) => return None,
    };
    let len = text.chars().count();
    (len > 0 && len <= max_chars).then_some(text)
}
