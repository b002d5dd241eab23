use log::debug;

use crate::money::AmountFormat;
use crate::transactions::parsed::ParsedTransaction;
use crate::transactions::raw::RawTransaction;

use super::discovery::discover_asset_ids;
use super::error::ParseError;
use super::exchange::parse_exchange;
use super::resolver::{AssetResolver, ResolvedAssets};
use super::rules;

/// Normalizes raw transaction batches against resolved asset descriptors.
pub struct TransactionParser<R> {
    resolver: R,
    format: AmountFormat,
}

impl<R: AssetResolver> TransactionParser<R> {
    /// Creates a parser reading raw amounts as smallest-unit integers.
    pub fn new(resolver: R) -> Self {
        Self::with_format(resolver, AmountFormat::default())
    }

    /// Creates a parser with an explicit amount format for exchange figures.
    pub fn with_format(resolver: R, format: AmountFormat) -> Self {
        Self { resolver, format }
    }

    /// Normalizes a batch of raw transactions.
    ///
    /// The batch is walked once to discover every referenced asset, the
    /// descriptors are resolved in a single call, and each record is then
    /// normalized against them. `is_utx` marks every produced record as
    /// unconfirmed. Output order matches input order, and unrecognized kinds
    /// pass through at their position.
    ///
    /// # Errors
    ///
    /// The batch fails as a whole: a resolution failure, a descriptor the
    /// resolver did not return, an invalid amount or a malformed exchange
    /// aborts every transaction in it.
    pub async fn parse(
        &self,
        txs: &[RawTransaction],
        is_utx: bool,
    ) -> Result<Vec<ParsedTransaction>, ParseError> {
        let mut ids: Vec<_> = discover_asset_ids(txs).into_iter().collect();
        ids.sort();

        debug!(transactions = txs.len(), assets = ids.len(); "Resolving assets for batch");
        let assets = self.resolver.resolve(&ids).await?;
        for id in &ids {
            if !assets.contains(id) {
                return Err(ParseError::UnresolvedAsset(id.clone()));
            }
        }

        txs.iter()
            .map(|tx| self.parse_one(&assets, tx, is_utx))
            .collect()
    }

    fn parse_one(
        &self,
        assets: &ResolvedAssets,
        tx: &RawTransaction,
        is_utx: bool,
    ) -> Result<ParsedTransaction, ParseError> {
        let parsed = match tx {
            RawTransaction::LegacyTransfer(tx) => {
                ParsedTransaction::Transfer(rules::parse_legacy_transfer(assets, tx, is_utx)?)
            }
            RawTransaction::Issue(tx) => {
                ParsedTransaction::Issue(rules::parse_issue(assets, tx, is_utx)?)
            }
            RawTransaction::Transfer(tx) => {
                ParsedTransaction::Transfer(rules::parse_transfer(assets, tx, is_utx)?)
            }
            RawTransaction::Reissue(tx) => {
                ParsedTransaction::Reissue(rules::parse_reissue(assets, tx, is_utx)?)
            }
            RawTransaction::Burn(tx) => {
                ParsedTransaction::Burn(rules::parse_burn(assets, tx, is_utx)?)
            }
            RawTransaction::Exchange(tx) => {
                ParsedTransaction::Exchange(parse_exchange(assets, self.format, tx, is_utx)?)
            }
            RawTransaction::Lease(tx) => {
                ParsedTransaction::Lease(rules::parse_lease(assets, tx, is_utx)?)
            }
            RawTransaction::CancelLease(tx) => {
                ParsedTransaction::CancelLease(rules::parse_cancel_lease(assets, tx, is_utx)?)
            }
            RawTransaction::CreateAlias(tx) => {
                ParsedTransaction::CreateAlias(rules::parse_create_alias(assets, tx, is_utx)?)
            }
            RawTransaction::MassTransfer(tx) => {
                ParsedTransaction::MassTransfer(rules::parse_mass_transfer(assets, tx, is_utx)?)
            }
            RawTransaction::Unrecognized(value) => ParsedTransaction::Unrecognized(value.clone()),
        };
        Ok(parsed)
    }
}
