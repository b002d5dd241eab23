//! Asset discovery over raw transactions.
//!
//! Normalization joins every amount with a resolved asset descriptor, so the
//! first parsing step walks the batch once and collects the full set of
//! asset identifiers it references. The set feeds a single resolver call.

use std::collections::HashSet;

use crate::models::AssetId;
use crate::transactions::raw::RawTransaction;

/// Collects every asset identifier referenced by one transaction.
///
/// The native asset is always included: fees and legacy amounts are
/// denominated in it even when the record does not name it explicitly.
/// Issue transactions reference the asset they create, which is keyed by
/// the transaction id. Unrecognized transactions contribute nothing
/// beyond the native asset.
pub fn transaction_asset_ids(tx: &RawTransaction) -> HashSet<AssetId> {
    let mut ids = HashSet::new();
    ids.insert(AssetId::Native);
    collect_asset_ids(tx, &mut ids);
    ids
}

/// Union of [`transaction_asset_ids`] over a whole batch.
pub fn discover_asset_ids(txs: &[RawTransaction]) -> HashSet<AssetId> {
    let mut ids = HashSet::new();
    ids.insert(AssetId::Native);
    for tx in txs {
        collect_asset_ids(tx, &mut ids);
    }
    ids
}

fn collect_asset_ids(tx: &RawTransaction, ids: &mut HashSet<AssetId>) {
    match tx {
        RawTransaction::Issue(issue) => {
            ids.insert(AssetId::Issued(issue.id.clone()));
        }
        RawTransaction::Transfer(transfer) => {
            ids.insert(transfer.asset_id.clone());
            ids.insert(transfer.fee_asset.clone());
        }
        RawTransaction::Reissue(reissue) => {
            ids.insert(reissue.asset_id.clone());
        }
        RawTransaction::Burn(burn) => {
            ids.insert(burn.asset_id.clone());
        }
        RawTransaction::Exchange(exchange) => {
            let pair = &exchange.order1.asset_pair;
            ids.insert(pair.amount_asset.clone());
            ids.insert(pair.price_asset.clone());
        }
        RawTransaction::MassTransfer(mass_transfer) => {
            ids.insert(mass_transfer.asset_id.clone());
        }
        RawTransaction::LegacyTransfer(_)
        | RawTransaction::Lease(_)
        | RawTransaction::CancelLease(_)
        | RawTransaction::CreateAlias(_)
        | RawTransaction::Unrecognized(_) => {}
    }
}
