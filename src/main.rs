use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use coffee_ledger::{Metrics, Shop};

fn main() -> anyhow::Result<()> {
    // Default to INFO, with debug output for this crate.
    // Override with RUST_LOG, e.g. RUST_LOG=coffee_ledger=trace
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,coffee_ledger=debug")),
        )
        .init();

    tracing::info!("☕ Starting coffee ledger demo");

    let metrics = Arc::new(Metrics::new()?);
    let mut shop = Shop::new().with_metrics(metrics.clone());

    // === 1. Register customers and coffees ===
    let jane = shop.add_customer("Jane")?;
    let elli = shop.add_customer("Elli")?;
    let latte = shop.add_coffee("Latte")?;
    let espresso = shop.add_coffee("Espresso")?;

    // === 2. Customers place orders ===
    {
        let mut entry = shop.customer_mut(jane).context("Jane is registered")?;
        entry.create_order(latte, 4.5)?;
        entry.create_order(espresso, 3.0)?;
    }
    {
        let mut entry = shop.customer_mut(elli).context("Elli is registered")?;
        entry.create_order(latte, 5.0)?;
        entry.create_order(latte, 5.5)?;
    }

    // === 3. Query the ledger ===
    let jane_view = shop.customer(jane).context("Jane is registered")?;
    let coffees: Vec<_> = jane_view.coffees().iter().map(|c| c.name().to_string()).collect();
    tracing::info!(customer = %jane_view.name(), ?coffees, "Coffees ordered");

    let latte_view = shop.coffee(latte).context("Latte is registered")?;
    let customers: Vec<_> = latte_view.customers().iter().map(|c| c.name().to_string()).collect();
    tracing::info!(
        coffee = %latte_view.name(),
        ?customers,
        num_orders = latte_view.num_orders(),
        average_price = ?latte_view.average_price(),
        "Coffee statistics"
    );

    match shop.most_aficionado(latte) {
        Some(customer) => tracing::info!(customer = %customer.name(), "Most aficionado for Latte"),
        None => tracing::info!("No aficionado found"),
    }

    // === 4. Direct orders and rejected input ===
    shop.place_order(jane, espresso, 2.0)?;
    shop.place_order(elli, latte, 2.0)?;

    if let Err(e) = shop.place_order(jane, latte, 12.0) {
        tracing::info!(error = %e, kind = %e.kind(), "Order rejected as expected");
    }

    let latte_view = shop.coffee(latte).context("Latte is registered")?;
    tracing::info!(
        num_orders = latte_view.num_orders(),
        average_price = ?latte_view.average_price(),
        total_orders = shop.orders().len(),
        "Ledger after direct orders"
    );

    // === 5. Dump state ===
    println!("{}", shop.snapshot().to_json()?);
    println!("{}", metrics.render()?);

    tracing::info!("🎉 Demo complete!");

    Ok(())
}
