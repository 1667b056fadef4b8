use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ecommerce_events::domain::customer::{
    Address, Customer, CustomerAddressChanged, CustomerCommand, CustomerCommandHandler, CustomerCreated,
    SendConsoleLog1Handler, SendConsoleLog2Handler, SendConsoleLogAddressHandler,
};
use ecommerce_events::domain::order::{Order, OrderCommand, OrderCommandHandler, OrderItem};
use ecommerce_events::domain::product::{
    Product, ProductCommand, ProductCommandHandler, ProductCreated, SendEmailWhenProductIsCreatedHandler,
};
use ecommerce_events::domain::repository::Repository;
use ecommerce_events::event_dispatch::{DispatcherConfig, EventDispatcher};
use ecommerce_events::infrastructure::InMemoryRepository;
use ecommerce_events::metrics::Metrics;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,ecommerce_events=debug"))
        )
        .init();

    tracing::info!("🚀 Starting e-commerce domain events demo");

    // === 1. Metrics ===
    let metrics = Arc::new(Metrics::new()?);

    // === 2. Dispatcher with handlers for each bounded context ===
    let mut dispatcher = EventDispatcher::with_config(
        DispatcherConfig::isolated().with_warn_on_unhandled(true),
    )
    .with_metrics(metrics.clone());

    dispatcher.register_for::<CustomerCreated>(Arc::new(SendConsoleLog1Handler));
    dispatcher.register_for::<CustomerCreated>(Arc::new(SendConsoleLog2Handler));
    dispatcher.register_for::<CustomerAddressChanged>(Arc::new(SendConsoleLogAddressHandler));
    dispatcher.register_for::<ProductCreated>(Arc::new(SendEmailWhenProductIsCreatedHandler));

    tracing::info!(event_names = ?dispatcher.event_names(), "Event handlers registered");
    let dispatcher = Arc::new(dispatcher);

    // === 3. Repositories and command handlers ===
    let customers = Arc::new(InMemoryRepository::<Customer>::new());
    let products = Arc::new(InMemoryRepository::<Product>::new());
    let orders = Arc::new(InMemoryRepository::<Order>::new());

    let customer_handler = CustomerCommandHandler::new(customers.clone(), dispatcher.clone());
    let product_handler = ProductCommandHandler::new(products.clone(), dispatcher.clone());
    let order_handler = OrderCommandHandler::new(orders.clone(), customers.clone());

    // === 4. Customer lifecycle ===
    let customer = customer_handler
        .handle(CustomerCommand::CreateCustomer {
            customer_id: "c1".to_string(),
            name: "Customer 1".to_string(),
        })
        .await?;

    customer_handler
        .handle(CustomerCommand::ChangeAddress {
            customer_id: customer.id().to_string(),
            address: Address::new("Rua do Wesley", 999, "12345-678", "Sao Paulo - SP")?,
        })
        .await?;

    customer_handler
        .handle(CustomerCommand::ActivateCustomer {
            customer_id: customer.id().to_string(),
        })
        .await?;

    // === 5. Product catalogue ===
    let product = product_handler
        .handle(ProductCommand::CreateProduct {
            product_id: "p1".to_string(),
            name: "Product 1".to_string(),
            price: 100.0,
        })
        .await?;

    // Nobody listens to price changes; logged as unhandled
    let product = product_handler
        .handle(ProductCommand::ChangePrice {
            product_id: product.id().to_string(),
            price: 120.0,
        })
        .await?;

    // === 6. Place an order ===
    let order = order_handler
        .handle(OrderCommand::PlaceOrder {
            order_id: "o1".to_string(),
            customer_id: customer.id().to_string(),
            items: vec![OrderItem::new("i1", product.name(), product.price(), product.id(), 2)?],
        })
        .await?;

    let customer = customers.find(customer.id()).await?;
    tracing::info!(
        order_id = %order.id(),
        total = order.total(),
        reward_points = customer.reward_points(),
        "✅ Order placed"
    );

    tracing::info!("📊 Dispatch metrics:\n{}", metrics.render()?);
    tracing::info!("🎉 Demo complete!");

    Ok(())
}
