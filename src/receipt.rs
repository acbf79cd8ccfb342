//! Cart receipt rendering

use std::io;

use tabled::{
    builder::Builder,
    settings::{
        Alignment, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{cart::CartStore, pricing::format_usd};

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Writing to the output failed.
    #[error("failed to write receipt")]
    Io(#[from] io::Error),
}

/// Write the cart as a table followed by subtotal, savings and total lines.
///
/// # Errors
///
/// Returns [`ReceiptError::Io`] if writing to `out` fails.
pub fn write_cart_receipt(out: &mut impl io::Write, cart: &CartStore) -> Result<(), ReceiptError> {
    let mut builder = Builder::default();

    builder.push_record(["#", "Product", "Price", "Discounted", "Qty", "Total"]);

    for (idx, line) in cart.items().iter().enumerate() {
        builder.push_record([
            format!("#{:<3}", idx + 1),
            line.title().to_string(),
            format_usd(line.unit_price()),
            format_usd(line.discounted_unit_price()),
            line.quantity().to_string(),
            format_usd(line.total_price()),
        ]);
    }

    let mut table = builder.build();
    let mut theme = Theme::from(Style::modern_rounded());

    theme.remove_horizontal_lines();

    table.with(theme);
    table.modify(Columns::new(2..6), Alignment::right());
    table.modify(Rows::first(), Alignment::center());

    writeln!(out, "\n{table}")?;
    writeln!(out, " Subtotal: {}", format_usd(cart.subtotal()))?;
    writeln!(out, " Savings:  {}", format_usd(cart.savings()))?;
    writeln!(out, " Total:    {}", format_usd(cart.total()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use super::*;
    use crate::{cart::CartItem, products::ProductId};

    #[test]
    fn receipt_lists_lines_and_totals() -> TestResult {
        let mut cart = CartStore::new();

        cart.add_item(
            CartItem {
                id: ProductId(1),
                title: "Desk Lamp".to_string(),
                price: Decimal::from(100),
                discount_percentage: Some(Decimal::from(20)),
                stock: 3,
                thumbnail: String::new(),
            },
            2,
        )?;

        let mut out = Vec::new();
        write_cart_receipt(&mut out, &cart)?;
        let text = String::from_utf8(out)?;

        assert!(text.contains("Desk Lamp"), "missing title in:\n{text}");
        assert!(text.contains("$160.00"), "missing line total in:\n{text}");
        assert!(text.contains("Subtotal: $200.00"), "missing subtotal in:\n{text}");
        assert!(text.contains("Savings:  $40.00"), "missing savings in:\n{text}");
        assert!(text.contains("Total:    $160.00"), "missing total in:\n{text}");

        Ok(())
    }

    #[test]
    fn empty_cart_has_zero_total() -> TestResult {
        let cart = CartStore::new();

        let mut out = Vec::new();
        write_cart_receipt(&mut out, &cart)?;
        let text = String::from_utf8(out)?;

        assert!(text.contains("Total:    $0.00"), "missing total in:\n{text}");

        Ok(())
    }
}
