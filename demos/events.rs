//! Demonstrates the named-event notifier.
//!
//! This example shows how to:
//! - Respond to an event without arguments
//! - Pass positional arguments along with an event
//! - Listen once, unsubscribe, and publish to nobody
//!
//! Run with: cargo run --example events

use pathcast::prelude::*;
use serde_json::json;

fn main() -> Result<()> {
    let settings = SettingsLoader::new()
        .with_script_path(concat!(env!("CARGO_MANIFEST_DIR"), "/demos/events.rs"))
        .load()?;
    pathcast::logging::init(&settings.log_filter);

    println!("=== Notifier Example ===\n");

    let notifier = settings.notifier();

    // Respond to an event
    notifier.subscribe("order-pizza", |_| {
        println!("Order received!");
    });
    notifier.publish("order-pizza", &[]);

    // Pass arguments along with the event
    notifier.subscribe("order-soap", |args| {
        let soap_type = args.first().and_then(|v| v.as_str()).unwrap_or("unknown");
        let total = args.get(1).and_then(|v| v.as_i64()).unwrap_or_default();
        println!("ordered {} of total: {}", soap_type, total);
    });
    notifier.publish("order-soap", &[json!("mysoorsandle"), json!(10)]);

    println!("\n--- Once and unsubscribe ---");
    notifier.subscribe_once("order-pizza", |_| {
        println!("First pizza of the day!");
    });
    let tracker = notifier.subscribe("order-pizza", |_| {
        println!("Tracking pizza order");
    });
    notifier.publish("order-pizza", &[]);

    notifier.unsubscribe("order-pizza", tracker);
    notifier.publish("order-pizza", &[]);

    let delivered = notifier.publish("order-salad", &[]);
    println!("\nanyone listening for order-salad? {}", delivered);
    println!("events with listeners: {:?}", notifier.event_names());

    Ok(())
}
