//! Exchange order reconciliation.
//!
//! An exchange transaction carries the two orders the matcher paired. The
//! orders arrive in wire position (`order1`, `order2`), not by side, so
//! normalization reconciles them: identify the buy and sell side, derive the
//! initiating side from the order timestamps, and reduce the two order
//! figures to the executed price, amount and total.
//!
//! This is the only path where the batch's [`AmountFormat`] applies: order
//! price and amount, the derived totals, and the matcher and transaction
//! fees all follow it.

use crate::models::{Asset, AssetId};
use crate::money::{AmountFormat, Money, MoneyError};
use crate::transactions::parsed::{ParsedExchange, ParsedExchangeOrder};
use crate::transactions::parser::error::ParseError;
use crate::transactions::parser::resolver::ResolvedAssets;
use crate::transactions::parser::rules::lookup_asset;
use crate::transactions::raw::{OrderSide, RawExchange, RawExchangeOrder};

pub(super) fn parse_exchange(
    assets: &ResolvedAssets,
    format: AmountFormat,
    tx: &RawExchange,
    is_utx: bool,
) -> Result<ParsedExchange, ParseError> {
    let order1 = parse_order(assets, format, &tx.id, &tx.order1)?;
    let order2 = parse_order(assets, format, &tx.id, &tx.order2)?;

    let (buy, sell) = match (order1.order_type, order2.order_type) {
        (OrderSide::Buy, OrderSide::Sell) => (&order1, &order2),
        (OrderSide::Sell, OrderSide::Buy) => (&order2, &order1),
        (side, _) => {
            return Err(malformed(
                &tx.id,
                format!(
                    "expected one buy and one sell order, got two {} orders",
                    side.as_label().to_lowercase()
                ),
            ));
        }
    };

    // The later-signed order initiated the match. On equal timestamps the
    // sell side wins.
    let exchange_type = if buy.timestamp > sell.timestamp {
        OrderSide::Buy
    } else {
        OrderSide::Sell
    };

    // Execution figures: price follows the first order by wire position,
    // amount and total are the smaller of the two orders.
    let price = order1.price.clone();
    let amount = order1
        .amount
        .clone()
        .min(order2.amount.clone())
        .map_err(|e| malformed(&tx.id, e.to_string()))?;
    let total = order1
        .total
        .clone()
        .min(order2.total.clone())
        .map_err(|e| malformed(&tx.id, e.to_string()))?;

    let native = lookup_asset(assets, &AssetId::Native)?;
    Ok(ParsedExchange {
        id: tx.id.clone(),
        sender: tx.sender.clone(),
        timestamp: tx.timestamp,
        height: tx.height,
        fee: format.money(&tx.fee, native)?,
        order1,
        order2,
        exchange_type,
        price,
        amount,
        total,
        buy_matcher_fee: format.money(&tx.buy_matcher_fee, native)?,
        sell_matcher_fee: format.money(&tx.sell_matcher_fee, native)?,
        is_utx,
    })
}

/// Normalizes one order: price in the price asset, amount in the amount
/// asset, total derived as amount times price in the price asset.
fn parse_order(
    assets: &ResolvedAssets,
    format: AmountFormat,
    tx_id: &str,
    order: &RawExchangeOrder,
) -> Result<ParsedExchangeOrder, ParseError> {
    let amount_asset = pair_asset(assets, tx_id, &order.asset_pair.amount_asset)?;
    let price_asset = pair_asset(assets, tx_id, &order.asset_pair.price_asset)?;
    let native = lookup_asset(assets, &AssetId::Native)?;

    let price = format.money(&order.price, price_asset)?;
    let amount = format.money(&order.amount, amount_asset)?;
    let total_tokens = amount
        .to_tokens()
        .checked_mul(price.to_tokens())
        .ok_or_else(|| {
            MoneyError::Overflow(format!("{} * {}", amount.to_tokens(), price.to_tokens()))
        })?;
    let total = Money::from_tokens(total_tokens, price_asset.clone())?;

    Ok(ParsedExchangeOrder {
        id: order.id.clone(),
        sender: order.sender.clone(),
        order_type: order.order_type,
        asset_pair: order.asset_pair.clone(),
        price,
        amount,
        total,
        matcher_fee: format.money(&order.matcher_fee, native)?,
        timestamp: order.timestamp,
    })
}

// A missing pair descriptor is an inconsistency in the exchange record,
// reported against the transaction rather than as a plain missing asset.
fn pair_asset<'a>(
    assets: &'a ResolvedAssets,
    tx_id: &str,
    id: &AssetId,
) -> Result<&'a Asset, ParseError> {
    assets
        .get(id)
        .ok_or_else(|| malformed(tx_id, format!("no descriptor resolved for pair asset {id:?}")))
}

fn malformed(id: &str, reason: impl Into<String>) -> ParseError {
    ParseError::MalformedExchange {
        id: id.to_string(),
        reason: reason.into(),
    }
}
