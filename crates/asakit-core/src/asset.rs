//! Asset creation boundary.
//!
//! Building, signing and confirming the on-chain creation transaction is the
//! job of an external client. This module produces the parameters handed to
//! it, refuses drafts that fail validation, and shapes the result.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::token_config::{TokenConfig, TokenConfigDraft};
use crate::validate::{resolve_token_config, AddressField, ValidationResult};

/// Parameters of an asset-creation transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetCreateParams {
    pub sender: String,
    pub total: u64,
    pub decimals: u32,
    pub default_frozen: bool,
    pub unit_name: String,
    pub asset_name: String,
    pub url: String,
    pub manager: String,
    pub reserve: String,
    pub freeze: String,
    pub clawback: String,
}

impl AssetCreateParams {
    /// Role addresses left unset or empty in `config` default to `sender`.
    pub fn new(config: &TokenConfig, sender: &str) -> Self {
        let role = |field: AddressField| {
            config
                .address(field)
                .filter(|a| !a.is_empty())
                .unwrap_or(sender)
                .to_string()
        };
        Self {
            sender: sender.to_string(),
            total: config.total,
            decimals: config.decimals,
            default_frozen: config.default_frozen,
            unit_name: config.unit_name.clone(),
            asset_name: config.asset_name.clone(),
            url: config.asset_url.clone().unwrap_or_default(),
            manager: role(AddressField::Manager),
            reserve: role(AddressField::Reserve),
            freeze: role(AddressField::Freeze),
            clawback: role(AddressField::Clawback),
        }
    }
}

/// What the chain client reports back after submitting a creation transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedAsset {
    pub asset_id: u64,
    pub tx_id: String,
    /// Round the transaction was confirmed in, if the client waited for it.
    pub confirmed_round: Option<u64>,
}

/// External collaborator that submits asset-creation transactions.
pub trait AssetSubmitter {
    fn submit(&self, params: &AssetCreateParams) -> anyhow::Result<SubmittedAsset>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTokenResult {
    pub asa_id: u64,
    pub tx_id: String,
    pub confirmed_round: u64,
    pub token_config: TokenConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateTokenError {
    #[error("invalid token configuration: {0}")]
    Invalid(ValidationResult),
    #[error("asset creation failed: {0:#}")]
    Submit(anyhow::Error),
}

/// The default token, without touching the chain: ids and round are zero.
pub fn default_token() -> CreateTokenResult {
    CreateTokenResult {
        asa_id: 0,
        tx_id: String::new(),
        confirmed_round: 0,
        token_config: TokenConfig::default(),
    }
}

/// Overlays `draft` onto the built-in defaults, validates it, and submits it
/// as `sender`. Use [`create_token_over`] to start from configured defaults.
pub fn create_token<S: AssetSubmitter + ?Sized>(
    submitter: &S,
    sender: &str,
    draft: &TokenConfigDraft,
) -> Result<CreateTokenResult, CreateTokenError> {
    create_token_over(submitter, sender, draft, &TokenConfig::default().into())
}

/// Overlays `draft` onto `base`, validates it, and submits it as `sender`.
///
/// `base` is typically [`crate::config::AsakitConfig::token_defaults`]. Fields
/// missing from both are judged as missing.
pub fn create_token_over<S: AssetSubmitter + ?Sized>(
    submitter: &S,
    sender: &str,
    draft: &TokenConfigDraft,
    base: &TokenConfigDraft,
) -> Result<CreateTokenResult, CreateTokenError> {
    let config = resolve_token_config(&draft.overlay(base)).map_err(|result| {
        tracing::warn!(errors = %result, "refusing to submit invalid token configuration");
        CreateTokenError::Invalid(result)
    })?;

    let params = AssetCreateParams::new(&config, sender);
    tracing::info!(
        unit_name = %params.unit_name,
        total = params.total,
        sender = %params.sender,
        "submitting asset creation"
    );
    let submitted = submitter.submit(&params).map_err(|e| {
        tracing::error!("asset creation failed: {:#}", e);
        CreateTokenError::Submit(e)
    })?;
    tracing::info!(asset_id = submitted.asset_id, tx_id = %submitted.tx_id, "asset created");

    Ok(CreateTokenResult {
        asa_id: submitted.asset_id,
        tx_id: submitted.tx_id,
        confirmed_round: submitted.confirmed_round.unwrap_or(0),
        token_config: config,
    })
}

/// Like [`create_token`], with `metadata` replacing any metadata in the draft.
/// A missing asset URL becomes an empty one.
pub fn create_token_with_metadata<S: AssetSubmitter + ?Sized>(
    submitter: &S,
    sender: &str,
    metadata: Map<String, Value>,
    draft: &TokenConfigDraft,
) -> Result<CreateTokenResult, CreateTokenError> {
    let draft = TokenConfigDraft {
        metadata: Some(metadata),
        asset_url: Some(draft.asset_url.clone().unwrap_or_default()),
        ..draft.clone()
    };
    create_token(submitter, sender, &draft)
}
