//! Per-kind normalization rules.
//!
//! Each rule receives the batch's resolved assets and one raw record and
//! produces the normalized form, joining every amount with its descriptor.
//! Amounts here are always smallest-unit integers; the pre-scaled input
//! format only ever applies to exchange order figures.

use crate::models::{Asset, AssetId};
use crate::money::Money;
use crate::transactions::parsed::{
    ParsedBurn, ParsedCancelLease, ParsedCreateAlias, ParsedIssue, ParsedLease,
    ParsedMassTransfer, ParsedReissue, ParsedTransfer, ParsedTransferEntry,
};
use crate::transactions::parser::attachment::decode_attachment;
use crate::transactions::parser::error::ParseError;
use crate::transactions::parser::normalize::normalize_recipient;
use crate::transactions::parser::resolver::ResolvedAssets;
use crate::transactions::raw::{
    RawBurn, RawCancelLease, RawCreateAlias, RawIssue, RawLease, RawLegacyTransfer,
    RawMassTransfer, RawReissue, RawTransfer,
};

const LEASE_STATUS_ACTIVE: &str = "active";

/// Looks up a descriptor that discovery guaranteed the resolver was asked
/// for. A miss means the resolver returned an incomplete set.
pub(super) fn lookup_asset<'a>(
    assets: &'a ResolvedAssets,
    id: &AssetId,
) -> Result<&'a Asset, ParseError> {
    assets
        .get(id)
        .ok_or_else(|| ParseError::UnresolvedAsset(id.clone()))
}

/// Legacy transfers normalize into the modern transfer shape: native
/// amount and fee, empty attachment.
pub(super) fn parse_legacy_transfer(
    assets: &ResolvedAssets,
    tx: &RawLegacyTransfer,
    is_utx: bool,
) -> Result<ParsedTransfer, ParseError> {
    let native = lookup_asset(assets, &AssetId::Native)?;
    Ok(ParsedTransfer {
        id: tx.id.clone(),
        sender: tx.sender.clone(),
        timestamp: tx.timestamp,
        height: tx.height,
        fee: Money::from_raw_units(&tx.fee, native)?,
        recipient: normalize_recipient(&tx.recipient),
        amount: Money::from_raw_units(&tx.amount, native)?,
        attachment: decode_attachment(""),
        is_utx,
    })
}

pub(super) fn parse_transfer(
    assets: &ResolvedAssets,
    tx: &RawTransfer,
    is_utx: bool,
) -> Result<ParsedTransfer, ParseError> {
    let asset = lookup_asset(assets, &tx.asset_id)?;
    let fee_asset = lookup_asset(assets, &tx.fee_asset)?;
    Ok(ParsedTransfer {
        id: tx.id.clone(),
        sender: tx.sender.clone(),
        timestamp: tx.timestamp,
        height: tx.height,
        fee: Money::from_raw_units(&tx.fee, fee_asset)?,
        recipient: normalize_recipient(&tx.recipient),
        amount: Money::from_raw_units(&tx.amount, asset)?,
        attachment: decode_attachment(&tx.attachment),
        is_utx,
    })
}

/// The issued asset is keyed by the transaction's own id.
pub(super) fn parse_issue(
    assets: &ResolvedAssets,
    tx: &RawIssue,
    is_utx: bool,
) -> Result<ParsedIssue, ParseError> {
    let asset = lookup_asset(assets, &AssetId::Issued(tx.id.clone()))?;
    let native = lookup_asset(assets, &AssetId::Native)?;
    Ok(ParsedIssue {
        id: tx.id.clone(),
        sender: tx.sender.clone(),
        timestamp: tx.timestamp,
        height: tx.height,
        fee: Money::from_raw_units(&tx.fee, native)?,
        name: tx.name.clone(),
        description: tx.description.clone(),
        quantity: Money::from_raw_units(&tx.quantity, asset)?,
        reissuable: tx.reissuable,
        is_utx,
    })
}

pub(super) fn parse_reissue(
    assets: &ResolvedAssets,
    tx: &RawReissue,
    is_utx: bool,
) -> Result<ParsedReissue, ParseError> {
    let asset = lookup_asset(assets, &tx.asset_id)?;
    let native = lookup_asset(assets, &AssetId::Native)?;
    Ok(ParsedReissue {
        id: tx.id.clone(),
        sender: tx.sender.clone(),
        timestamp: tx.timestamp,
        height: tx.height,
        fee: Money::from_raw_units(&tx.fee, native)?,
        quantity: Money::from_raw_units(&tx.quantity, asset)?,
        reissuable: tx.reissuable,
        is_utx,
    })
}

pub(super) fn parse_burn(
    assets: &ResolvedAssets,
    tx: &RawBurn,
    is_utx: bool,
) -> Result<ParsedBurn, ParseError> {
    let asset = lookup_asset(assets, &tx.asset_id)?;
    let native = lookup_asset(assets, &AssetId::Native)?;
    Ok(ParsedBurn {
        id: tx.id.clone(),
        sender: tx.sender.clone(),
        timestamp: tx.timestamp,
        height: tx.height,
        fee: Money::from_raw_units(&tx.fee, native)?,
        amount: Money::from_raw_units(&tx.amount, asset)?,
        is_utx,
    })
}

pub(super) fn parse_lease(
    assets: &ResolvedAssets,
    tx: &RawLease,
    is_utx: bool,
) -> Result<ParsedLease, ParseError> {
    let native = lookup_asset(assets, &AssetId::Native)?;
    Ok(ParsedLease {
        id: tx.id.clone(),
        sender: tx.sender.clone(),
        timestamp: tx.timestamp,
        height: tx.height,
        fee: Money::from_raw_units(&tx.fee, native)?,
        recipient: normalize_recipient(&tx.recipient),
        amount: Money::from_raw_units(&tx.amount, native)?,
        is_active: tx.status.as_deref() == Some(LEASE_STATUS_ACTIVE),
        status: tx.status.clone(),
        is_utx,
    })
}

/// The embedded lease is always normalized as a confirmed record, whatever
/// the batch flag says: the lease being cancelled was already on chain.
pub(super) fn parse_cancel_lease(
    assets: &ResolvedAssets,
    tx: &RawCancelLease,
    is_utx: bool,
) -> Result<ParsedCancelLease, ParseError> {
    let native = lookup_asset(assets, &AssetId::Native)?;
    Ok(ParsedCancelLease {
        id: tx.id.clone(),
        sender: tx.sender.clone(),
        timestamp: tx.timestamp,
        height: tx.height,
        fee: Money::from_raw_units(&tx.fee, native)?,
        lease_id: tx.lease_id.clone(),
        lease: parse_lease(assets, &tx.lease, false)?,
        is_utx,
    })
}

pub(super) fn parse_create_alias(
    assets: &ResolvedAssets,
    tx: &RawCreateAlias,
    is_utx: bool,
) -> Result<ParsedCreateAlias, ParseError> {
    let native = lookup_asset(assets, &AssetId::Native)?;
    Ok(ParsedCreateAlias {
        id: tx.id.clone(),
        sender: tx.sender.clone(),
        timestamp: tx.timestamp,
        height: tx.height,
        fee: Money::from_raw_units(&tx.fee, native)?,
        alias: tx.alias.clone(),
        is_utx,
    })
}

/// Every entry shares the transaction-level asset; the attachment is
/// decoded once for the whole record.
pub(super) fn parse_mass_transfer(
    assets: &ResolvedAssets,
    tx: &RawMassTransfer,
    is_utx: bool,
) -> Result<ParsedMassTransfer, ParseError> {
    let asset = lookup_asset(assets, &tx.asset_id)?;
    let native = lookup_asset(assets, &AssetId::Native)?;

    let transfers = tx
        .transfers
        .iter()
        .map(|entry| {
            Ok(ParsedTransferEntry {
                recipient: normalize_recipient(&entry.recipient),
                amount: Money::from_raw_units(&entry.amount, asset)?,
            })
        })
        .collect::<Result<Vec<_>, ParseError>>()?;

    Ok(ParsedMassTransfer {
        id: tx.id.clone(),
        sender: tx.sender.clone(),
        timestamp: tx.timestamp,
        height: tx.height,
        fee: Money::from_raw_units(&tx.fee, native)?,
        total_amount: Money::from_raw_units(&tx.total_amount, asset)?,
        transfers,
        attachment: decode_attachment(&tx.attachment),
        is_utx,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Asset, Recipient};
    use rust_decimal_macros::dec;
    use serde_json::json;

    // ============================================================
    // Test fixtures
    // ============================================================

    fn create_test_assets() -> ResolvedAssets {
        ResolvedAssets::from_assets([
            Asset {
                id: AssetId::Native,
                name: "Native".to_string(),
                ticker: Some("NAT".to_string()),
                decimals: 8,
            },
            Asset {
                id: AssetId::Issued("asset-a".to_string()),
                name: "Alpha".to_string(),
                ticker: None,
                decimals: 2,
            },
            Asset {
                id: AssetId::Issued("fee-token".to_string()),
                name: "FeeToken".to_string(),
                ticker: Some("FEE".to_string()),
                decimals: 4,
            },
        ])
    }

    fn raw<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> T {
        serde_json::from_value(value).unwrap()
    }

    // ============================================================
    // Transfers
    // ============================================================

    #[test]
    fn test_legacy_transfer_normalizes_to_native_transfer() {
        let assets = create_test_assets();
        let tx: RawLegacyTransfer = raw(json!({
            "id": "old1",
            "sender": "s",
            "timestamp": 1_548_124_800_000u64,
            "fee": 100_000,
            "recipient": "3Paddr",
            "amount": 500
        }));

        let parsed = parse_legacy_transfer(&assets, &tx, false).unwrap();

        assert!(parsed.amount.asset().id.is_native());
        assert!(parsed.fee.asset().id.is_native());
        assert_eq!(parsed.amount.units(), dec!(500));
        assert_eq!(parsed.attachment.decoded, Some(String::new()));
        assert_eq!(parsed.recipient, Recipient::Address("3Paddr".to_string()));
    }

    #[test]
    fn test_legacy_transfer_matches_equivalent_modern_transfer() {
        let assets = create_test_assets();
        let legacy: RawLegacyTransfer = raw(json!({
            "id": "old1",
            "sender": "s",
            "timestamp": 1_548_124_800_000u64,
            "fee": 100_000,
            "recipient": "3Paddr",
            "amount": 500
        }));
        let modern: RawTransfer = raw(json!({
            "id": "old1",
            "sender": "s",
            "timestamp": 1_548_124_800_000u64,
            "fee": 100_000,
            "recipient": "3Paddr",
            "amount": 500,
            "attachment": ""
        }));

        assert_eq!(
            parse_legacy_transfer(&assets, &legacy, false).unwrap(),
            parse_transfer(&assets, &modern, false).unwrap()
        );
    }

    #[test]
    fn test_transfer_joins_amount_and_fee_assets_independently() {
        let assets = create_test_assets();
        let tx: RawTransfer = raw(json!({
            "id": "t1",
            "sender": "s",
            "timestamp": 1_548_124_800_000u64,
            "fee": 40_000,
            "recipient": "alias:W:merry",
            "amount": 1234,
            "assetId": "asset-a",
            "feeAsset": "fee-token",
            "attachment": "Cn8eVZg"
        }));

        let parsed = parse_transfer(&assets, &tx, true).unwrap();

        assert_eq!(parsed.amount.asset().id, AssetId::Issued("asset-a".to_string()));
        assert_eq!(parsed.amount.to_tokens(), dec!(12.34));
        assert_eq!(parsed.fee.asset().id, AssetId::Issued("fee-token".to_string()));
        assert_eq!(parsed.fee.to_tokens(), dec!(4));
        assert_eq!(parsed.attachment.decoded, Some("hello".to_string()));
        assert_eq!(parsed.attachment.raw, "Cn8eVZg");
        assert_eq!(parsed.recipient, Recipient::Alias("merry".to_string()));
        assert!(parsed.is_utx);
    }

    #[test]
    fn test_transfer_with_undecodable_attachment_keeps_raw_form() {
        let assets = create_test_assets();
        let tx: RawTransfer = raw(json!({
            "id": "t1",
            "sender": "s",
            "timestamp": 0,
            "fee": 1,
            "recipient": "r",
            "amount": 1,
            "attachment": "0OIl"
        }));

        let parsed = parse_transfer(&assets, &tx, false).unwrap();
        assert_eq!(parsed.attachment.decoded, None);
        assert_eq!(parsed.attachment.raw, "0OIl");
    }

    #[test]
    fn test_transfer_with_unknown_asset_fails() {
        let assets = create_test_assets();
        let tx: RawTransfer = raw(json!({
            "id": "t1",
            "sender": "s",
            "timestamp": 0,
            "fee": 1,
            "recipient": "r",
            "amount": 1,
            "assetId": "never-resolved"
        }));

        let err = parse_transfer(&assets, &tx, false).unwrap_err();
        assert!(matches!(err, ParseError::UnresolvedAsset(_)));
    }

    // ============================================================
    // Issue / reissue / burn
    // ============================================================

    #[test]
    fn test_issue_quantity_is_denominated_in_the_new_asset() {
        let mut assets = create_test_assets();
        assets.insert(Asset {
            id: AssetId::Issued("issue-1".to_string()),
            name: "Fresh".to_string(),
            ticker: None,
            decimals: 3,
        });
        let tx: RawIssue = raw(json!({
            "id": "issue-1",
            "sender": "s",
            "timestamp": 0,
            "fee": 100_000_000,
            "name": "Fresh",
            "description": "a fresh token",
            "quantity": 1_000_000,
            "decimals": 3,
            "reissuable": true
        }));

        let parsed = parse_issue(&assets, &tx, false).unwrap();

        assert_eq!(parsed.quantity.asset().id, AssetId::Issued("issue-1".to_string()));
        assert_eq!(parsed.quantity.to_tokens(), dec!(1000));
        assert!(parsed.fee.asset().id.is_native());
        assert!(parsed.reissuable);
    }

    #[test]
    fn test_burn_amount_uses_the_burned_asset() {
        let assets = create_test_assets();
        let tx: RawBurn = raw(json!({
            "id": "b1",
            "sender": "s",
            "timestamp": 0,
            "fee": 100_000,
            "assetId": "asset-a",
            "amount": 250
        }));

        let parsed = parse_burn(&assets, &tx, false).unwrap();
        assert_eq!(parsed.amount.to_tokens(), dec!(2.5));
        assert!(parsed.fee.asset().id.is_native());
    }

    // ============================================================
    // Leases
    // ============================================================

    #[test]
    fn test_lease_is_active_only_for_active_status() {
        let assets = create_test_assets();
        let active: RawLease = raw(json!({
            "id": "l1",
            "sender": "s",
            "timestamp": 0,
            "fee": 1,
            "recipient": "r",
            "amount": 1,
            "status": "active"
        }));
        let canceled: RawLease = raw(json!({
            "id": "l2",
            "sender": "s",
            "timestamp": 0,
            "fee": 1,
            "recipient": "r",
            "amount": 1,
            "status": "canceled"
        }));
        let missing: RawLease = raw(json!({
            "id": "l3",
            "sender": "s",
            "timestamp": 0,
            "fee": 1,
            "recipient": "r",
            "amount": 1
        }));

        assert!(parse_lease(&assets, &active, false).unwrap().is_active);
        assert!(!parse_lease(&assets, &canceled, false).unwrap().is_active);
        assert!(!parse_lease(&assets, &missing, false).unwrap().is_active);
    }

    #[test]
    fn test_cancel_lease_embeds_a_confirmed_lease() {
        let assets = create_test_assets();
        let tx: RawCancelLease = raw(json!({
            "id": "c1",
            "sender": "s",
            "timestamp": 0,
            "fee": 1,
            "leaseId": "l1",
            "lease": {
                "id": "l1",
                "sender": "s",
                "timestamp": 0,
                "fee": 1,
                "recipient": "r",
                "amount": 777,
                "status": "canceled"
            }
        }));

        let parsed = parse_cancel_lease(&assets, &tx, true).unwrap();

        assert!(parsed.is_utx);
        assert!(!parsed.lease.is_utx);
        assert_eq!(parsed.lease.amount.units(), dec!(777));
        assert_eq!(parsed.lease_id.as_deref(), Some("l1"));
    }

    // ============================================================
    // Mass transfers
    // ============================================================

    #[test]
    fn test_mass_transfer_entries_share_the_transaction_asset() {
        let assets = create_test_assets();
        let tx: RawMassTransfer = raw(json!({
            "id": "m1",
            "sender": "s",
            "timestamp": 0,
            "fee": 200_000,
            "totalAmount": 500_000_000,
            "transfers": [
                {"recipient": "addr1", "amount": 300_000_000},
                {"recipient": "alias:W:merry", "amount": 200_000_000}
            ],
            "attachment": "Cn8eVZg"
        }));

        let parsed = parse_mass_transfer(&assets, &tx, false).unwrap();

        // 500000000 smallest units at 8 decimals is 5 tokens.
        assert_eq!(parsed.total_amount.to_tokens(), dec!(5));
        assert!(parsed.total_amount.asset().id.is_native());
        assert_eq!(parsed.transfers.len(), 2);
        assert_eq!(parsed.transfers[0].amount.to_tokens(), dec!(3));
        assert_eq!(
            parsed.transfers[1].recipient,
            Recipient::Alias("merry".to_string())
        );
        assert_eq!(parsed.attachment.decoded, Some("hello".to_string()));
    }

    #[test]
    fn test_mass_transfer_in_issued_asset() {
        let assets = create_test_assets();
        let tx: RawMassTransfer = raw(json!({
            "id": "m2",
            "sender": "s",
            "timestamp": 0,
            "fee": 200_000,
            "assetId": "asset-a",
            "totalAmount": 600,
            "transfers": [{"recipient": "addr1", "amount": 600}]
        }));

        let parsed = parse_mass_transfer(&assets, &tx, false).unwrap();
        assert_eq!(parsed.transfers[0].amount.asset().id, AssetId::Issued("asset-a".to_string()));
        assert_eq!(parsed.total_amount.to_tokens(), dec!(6));
    }
}
