//! A counter session: pick items from the catalog, apply a discount, check
//! out, and save the printable invoice.
//!
//! Run with: `cargo run --example billing_counter [output-dir]`

use billdesk::core::*;
use billdesk::pdf;
use chrono::Local;
use rust_decimal_macros::dec;

fn main() -> Result<(), BillingError> {
    tracing_subscriber::fmt()
        .with_env_filter("info,billdesk=debug")
        .init();

    let config = match std::env::var("BILLDESK_CONFIG") {
        Ok(path) => BillingConfig::load(path)?,
        Err(_) => BillingConfig::default(),
    };

    let catalog = Catalog::demo();
    let mut numbers = config.number_sequence();
    let mut bill = Bill::open(&mut numbers, Local::now().date_naive(), &config)?;

    bill.set_customer(
        Customer::new("Acme Corporation")
            .phone("+91 98765 43210")
            .email("contact@acme.com"),
    );
    for item in catalog.search("development") {
        bill.add(item);
    }
    if let Some(hosting) = catalog.by_code("prd005") {
        bill.add(hosting);
        bill.update_quantity(hosting.id, 11);
    }
    bill.set_discount(Discount::percentage(dec!(10)));

    let symbol = &config.currency_symbol;
    let grouping = config.digit_grouping;
    println!("Invoice {} ({})", bill.identity().number, format_issue_date(bill.identity().issue_date));
    for line in bill.items() {
        println!(
            "  {:<8} {:<28} {:>4} x {:>10} = {:>12}",
            line.code,
            line.name,
            line.quantity,
            format_currency(symbol, line.unit_price, 2, grouping),
            format_currency(symbol, line.amount(), 2, grouping),
        );
    }

    let totals = bill.totals().rounded();
    println!("  Subtotal:      {}", format_currency(symbol, totals.subtotal, 2, grouping));
    println!("  Discount:      {}", format_currency(symbol, totals.discount_amount, 2, grouping));
    println!("  Taxable Value: {}", format_currency(symbol, totals.taxable_value, 2, grouping));
    println!(
        "  {} ({}%):     {}",
        config.tax_label,
        format_rate(bill.tax_rate().percent()),
        format_currency(symbol, totals.tax_amount, 2, grouping)
    );
    println!("  Total:         {}", format_currency(symbol, totals.grand_total, 2, grouping));
    println!(
        "  {}",
        amount_to_words(bill.totals().grand_total, &config.scale, &config.currency)
    );

    let dir = std::env::args().nth(1).unwrap_or_else(|| ".".to_string());
    let path = pdf::save_bill_pdf(&bill, &config, &dir)?;
    println!("Saved {}", path.display());
    Ok(())
}
