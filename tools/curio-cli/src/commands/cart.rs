//! Cart commands: add, remove, update, show, clear, checkout, purchases.

use anyhow::Result;
use clap::Args;
use curio_commerce::cart::CartEffect;
use curio_commerce::ids::{LineId, ProductId};
use curio_engine::CartEngine;

use crate::output::Output;

/// Arguments for `curio add`.
#[derive(Args)]
pub struct AddArgs {
    /// Listing id to add
    pub product_id: String,

    /// How many units to add
    #[arg(short, long, default_value_t = 1)]
    pub quantity: u32,
}

/// Arguments for `curio remove`.
#[derive(Args)]
pub struct RemoveArgs {
    /// Cart line id to remove
    pub line_id: String,
}

/// Arguments for `curio update`.
#[derive(Args)]
pub struct UpdateArgs {
    /// Cart line id to update
    pub line_id: String,

    /// New quantity (0 removes the line)
    pub quantity: u32,
}

pub fn run_add(args: AddArgs, engine: &mut CartEngine, output: &Output) -> Result<()> {
    let product_id = ProductId::new(args.product_id);
    match engine.add_item(&product_id, args.quantity) {
        CartEffect::Applied { line_id } => {
            output.success(&format!("Added to cart (line {})", line_id.as_str()));
        }
        CartEffect::Clamped {
            line_id,
            requested,
            applied,
        } => {
            output.warn(&format!(
                "Only {} available; cart now holds {} (requested {}, line {})",
                applied, applied, requested, line_id.as_str()
            ));
        }
        CartEffect::Removed { .. } | CartEffect::NoOp => {
            output.warn("Nothing was added; check the listing id and quantity");
        }
    }
    Ok(())
}

pub fn run_remove(args: RemoveArgs, engine: &mut CartEngine, output: &Output) -> Result<()> {
    let line_id = LineId::new(args.line_id);
    match engine.remove_item(&line_id) {
        CartEffect::Removed { .. } => output.success("Removed from cart"),
        _ => output.warn("No such line in the cart"),
    }
    Ok(())
}

pub fn run_update(args: UpdateArgs, engine: &mut CartEngine, output: &Output) -> Result<()> {
    let line_id = LineId::new(args.line_id);
    match engine.update_quantity(&line_id, args.quantity) {
        CartEffect::Applied { .. } => {
            output.success(&format!("Quantity set to {}", args.quantity));
        }
        CartEffect::Clamped { applied, requested, .. } => {
            output.warn(&format!(
                "Only {} available; quantity set to {} (requested {})",
                applied, applied, requested
            ));
        }
        CartEffect::Removed { .. } => output.success("Line removed"),
        CartEffect::NoOp => output.warn("No such line in the cart"),
    }
    Ok(())
}

pub fn run_show(engine: &CartEngine, output: &Output) -> Result<()> {
    if engine.cart().is_empty() {
        output.info("Your cart is empty");
        return Ok(());
    }

    output.header("Cart");
    for line in engine.lines() {
        match engine.catalog().find_product(&line.product_id) {
            Some(product) => output.info(&format!(
                "{:<10} {:<36} x{:<3} {:>10}",
                line.id.as_str(),
                product.title,
                line.quantity,
                product.price.multiply(line.quantity).display(),
            )),
            None => output.warn(&format!(
                "{:<10} (listing {} no longer available)",
                line.id.as_str(),
                line.product_id.as_str()
            )),
        }
    }

    let breakdown = engine.price_breakdown();
    output.header("Totals");
    output.money_row("Subtotal", breakdown.subtotal);
    output.money_row("Shipping", breakdown.shipping);
    if breakdown.free_shipping() {
        output.detail("Free shipping applied");
    }
    output.money_row("Tax", breakdown.tax);
    output.money_row("Total", breakdown.total);
    Ok(())
}

pub fn run_clear(engine: &mut CartEngine, output: &Output) -> Result<()> {
    engine.clear();
    output.success("Cart cleared");
    Ok(())
}

pub fn run_checkout(engine: &mut CartEngine, output: &Output) -> Result<()> {
    let breakdown = engine.price_breakdown();
    let purchases = engine.checkout();
    if purchases.is_empty() {
        output.warn("Your cart is empty; nothing to check out");
        return Ok(());
    }
    output.success(&format!(
        "Order placed: {} item(s), {} total",
        purchases.len(),
        breakdown.total.display()
    ));
    Ok(())
}

pub fn run_purchases(engine: &CartEngine, output: &Output) -> Result<()> {
    let purchases = engine.purchases();
    if purchases.is_empty() {
        output.info("No purchases yet");
        return Ok(());
    }
    output.header("Purchases");
    for purchase in purchases {
        output.info(&format!(
            "{:<12} {:<36} x{:<3} {:>10}  {}",
            purchase.id.as_str(),
            purchase.title,
            purchase.quantity,
            purchase.total_price.display(),
            purchase.status.display_name(),
        ));
    }
    Ok(())
}
