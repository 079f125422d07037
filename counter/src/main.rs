use counter::{Config, print_banner, receipt, setup_environment};
use shared::console::{ConsoleSink, MessageSink};
use shared::error::AppResult;
use shared::menu::{AddOn, AddOnKind, BeverageFactory};
use shared::order::{
    CustomerNotifier, KitchenMetrics, Order, OrderSequence, OrderStatus, StatusBoard,
};
use shared::payment::PaymentMethod;
use std::rc::Rc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (dotenv, logging)
    setup_environment();

    print_banner();

    tracing::info!("Beverage counter demo starting...");

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Run the demo order flow
    if let Err(e) = run_demo(&config) {
        tracing::error!("Demo failed: {e}");
        return Err(e.into());
    }

    Ok(())
}

/// One full order: compose drinks, pay, advance through the lifecycle
fn run_demo(config: &Config) -> AppResult<()> {
    let sink: Rc<dyn MessageSink> = Rc::new(ConsoleSink::new());
    let mut sequence = OrderSequence::new();

    let mut order = Order::new(&mut sequence, config.customer_name.as_str())?;

    // Observers: customer SMS, shop panel, kitchen metrics
    order.attach_observer(CustomerNotifier::new(
        config.customer_name.as_str(),
        sink.clone(),
    )?);
    order.attach_observer(StatusBoard::new(sink.clone()));
    order.attach_observer(KitchenMetrics::new(sink.clone()));

    // Compose drinks: factory bases, stacked add-ons
    let espresso = BeverageFactory::create("espresso")?;
    let latte = AddOn::new(
        AddOnKind::Chocolate,
        AddOn::new(AddOnKind::Milk, BeverageFactory::create("latte")?),
    );
    let cappuccino = AddOn::new(AddOnKind::WhippedCream, BeverageFactory::create("cappuccino")?);

    order.add_item(espresso);
    order.add_item(latte);
    order.add_item(cappuccino);

    println!("{}\n", receipt::render(&order.snapshot()));

    // Pay by instant transfer
    order.set_payment(PaymentMethod::transfer(
        config.transfer_key.as_str(),
        sink.clone(),
    )?);

    if order.process_payment()? {
        sink.emit("✅ Payment confirmed!");

        // Each status write fans out to the observers above
        order.set_status(OrderStatus::Preparing)?;
        order.set_status(OrderStatus::Ready)?;
        order.set_status(OrderStatus::Delivered)?;
    }

    println!("\n{}", receipt::render(&order.snapshot()));
    Ok(())
}
