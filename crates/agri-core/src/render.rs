//! Plain-text views for the command-line shell
//!
//! Each function returns the full text of one view. Empty result sets render
//! an explicit empty state instead of an empty table. Formatter errors are
//! propagated rather than dropped.

use crate::chain::{AgriChain, ProductDetail};
use agri_dashboard::{popular_crops, quality_rows, LedgerSummary, NavItem, StatPanel};
use agri_model::{Product, Role, Transaction};
use std::fmt::{self, Write};

/// Hint shown under every empty state
pub const EMPTY_HINT: &str = "Try adjusting your search or filter criteria";

/// Message for a code that matches no product
pub const NOT_FOUND: &str = "Product not found. Please check the QR code.";

/// Product list under a heading
///
/// # Errors
/// Only fails if the underlying formatter does
pub fn product_list(
    chain: &AgriChain,
    title: &str,
    products: &[&Product],
) -> Result<String, fmt::Error> {
    let mut out = format!("{title}\n");
    if products.is_empty() {
        writeln!(out, "No products found\n{EMPTY_HINT}")?;
        return Ok(out);
    }
    for product in products {
        writeln!(
            out,
            "{id}  {name} ({category})  by {farmer}  {status}  grade {quality}  {price}/unit  qty {qty}  harvested {date}  {code}",
            id = product.id,
            name = product.name,
            category = product.category,
            farmer = product.farmer_name,
            status = product.status.label(),
            quality = product.quality,
            price = chain.numbers().currency(product.price),
            qty = chain.numbers().group(product.quantity),
            date = chain.dates().date(product.harvest_date),
            code = product.qr_code,
        )?;
    }
    Ok(out)
}

/// Ledger summary cards followed by the matching entries
///
/// # Errors
/// Only fails if the underlying formatter does
pub fn ledger(
    chain: &AgriChain,
    summary: &LedgerSummary,
    transactions: &[&Transaction],
) -> Result<String, fmt::Error> {
    let numbers = chain.numbers();
    let mut out = String::from("Blockchain Ledger\n");
    writeln!(
        out,
        "Total Transactions: {}  Verified: {}  Pending: {}  Total Value: {}",
        summary.total,
        summary.verified,
        summary.pending,
        numbers.currency(summary.total_value),
    )?;
    if transactions.is_empty() {
        writeln!(out, "No transactions found\n{EMPTY_HINT}")?;
        return Ok(out);
    }
    for tx in transactions {
        writeln!(out, "{}", transaction_line(chain, tx))?;
    }
    Ok(out)
}

fn transaction_line(chain: &AgriChain, tx: &Transaction) -> String {
    let amount = tx
        .amount
        .map_or_else(|| "-".to_string(), |a| chain.numbers().currency(a));
    format!(
        "{id}  {hash}  {product}  {from} -> {to}  {kind}  {at}  {state}  {amount}",
        id = tx.id,
        hash = tx.hash.short(),
        product = tx.product_id,
        from = tx.from,
        to = tx.to,
        kind = tx.kind.label(),
        at = chain.dates().timestamp(tx.timestamp),
        state = tx.verification(),
    )
}

/// Full product view with certifications and journey
///
/// # Errors
/// Only fails if the underlying formatter does
pub fn product_detail(
    chain: &AgriChain,
    detail: &ProductDetail<'_>,
) -> Result<String, fmt::Error> {
    let product = detail.product;
    let numbers = chain.numbers();
    let mut out = String::new();
    writeln!(out, "{} [{}]", product.name, product.id)?;
    writeln!(out, "Farmer: {}", product.farmer_name)?;
    writeln!(out, "Location: {}", product.location)?;
    writeln!(out, "Harvest Date: {}", chain.dates().date(product.harvest_date))?;
    writeln!(out, "Quality: {}", product.quality)?;
    writeln!(out, "Quantity: {}", numbers.group(product.quantity))?;
    writeln!(out, "Price: {}", numbers.currency(product.price))?;
    writeln!(out, "Status: {}", product.status.label())?;
    writeln!(out, "QR Code: {}", product.qr_code)?;
    writeln!(out, "Blockchain Hash: {}", product.blockchain_hash)?;
    if !product.certifications.is_empty() {
        writeln!(out, "Certifications: {}", product.certifications.join(", "))?;
    }
    writeln!(out, "Supply Chain Journey:")?;
    if detail.journey.is_empty() {
        writeln!(out, "  No ledger entries yet")?;
    }
    for tx in &detail.journey {
        writeln!(out, "  {}", transaction_line(chain, tx))?;
    }
    Ok(out)
}

/// Role dashboard: greeting, stat panels and, for retailers, analytics
///
/// # Errors
/// Only fails if the underlying formatter does
pub fn dashboard(
    chain: &AgriChain,
    role: Role,
    panels: &[StatPanel],
) -> Result<String, fmt::Error> {
    let numbers = chain.numbers();
    let profile = chain.profile(role);
    let mut out = String::new();
    match chain.user_for_role(role) {
        Some(user) => {
            writeln!(out, "Welcome back, {} ({})", user.name, profile.display_name)?;
            writeln!(out, "Unread notifications: {}", chain.unread_count(&user.id))?;
        }
        None => {
            writeln!(out, "{} Dashboard", profile.display_name)?;
        }
    }
    for panel in panels {
        writeln!(out, "{}: {}", panel.label, panel.value.render(numbers))?;
    }

    if role == Role::Retailer {
        let analytics = chain.catalog().analytics();
        writeln!(out, "Quality Distribution:")?;
        for (grade, pct) in quality_rows(analytics) {
            writeln!(out, "  {grade}: {}", numbers.percent(pct))?;
        }
        writeln!(out, "Popular Crops:")?;
        for crop in popular_crops(analytics) {
            writeln!(out, "  {}: {}", crop.name, numbers.group(crop.count))?;
        }
    }
    Ok(out)
}

/// Navigation entries, one per line
///
/// # Errors
/// Only fails if the underlying formatter does
pub fn navigation(items: &[NavItem]) -> Result<String, fmt::Error> {
    items.iter().try_fold(String::new(), |mut out, item| {
        writeln!(out, "{}  ({})", item.label, item.section)?;
        Ok::<_, fmt::Error>(out)
    })
}

/// Scan result
#[must_use]
pub fn scanned(chain: &AgriChain, product: &Product) -> String {
    format!(
        "Scanned {code}: {name} from {farmer}, {location} ({status})\n",
        code = product.qr_code,
        name = product.name,
        farmer = product.farmer_name,
        location = product.location,
        status = product.status.label(),
    ) + &format!("Harvested {}\n", chain.dates().date(product.harvest_date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use agri_query::{ProductCriteria, TransactionCriteria};

    #[test]
    fn empty_product_state() {
        let chain = AgriChain::demo().unwrap();
        let text = product_list(&chain, "My Products", &[]).unwrap();
        assert!(text.contains("No products found"));
        assert!(text.contains(EMPTY_HINT));
    }

    #[test]
    fn product_line_uses_formatters() {
        let chain = AgriChain::demo().unwrap();
        let products = chain.products(&ProductCriteria::new().search("rice"));
        let text = product_list(&chain, "Inventory", &products).unwrap();
        assert!(text.starts_with("Inventory\n"));
        assert!(text.contains("₹85/unit"));
        assert!(text.contains("harvested 1/15/2024"));
        assert!(text.contains("Delivered"));
    }

    #[test]
    fn ledger_view() {
        let chain = AgriChain::demo().unwrap();
        let criteria = TransactionCriteria::new();
        let text = ledger(&chain, &chain.ledger_summary(), &chain.transactions(&criteria)).unwrap();
        assert!(text.contains("Total Transactions: 3  Verified: 3  Pending: 0  Total Value: ₹47,500"));
        assert!(text.contains("0x1a2b3c..."));
        assert!(text.contains("1/16/2024, 10:30:00 AM"));
    }

    #[test]
    fn empty_ledger_state() {
        let chain = AgriChain::demo().unwrap();
        let text = ledger(&chain, &LedgerSummary::default(), &[]).unwrap();
        assert!(text.contains("No transactions found"));
    }
}
