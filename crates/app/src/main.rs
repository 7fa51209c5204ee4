//! Canteen ordering CLI

use std::process;

use canteen::{
    cart::Cart,
    menu::{Category, MenuItem},
    orders::OrderStatus,
    payment::PaymentMethod,
};
use canteen_app::{
    CURRENCY,
    auth::Credentials,
    backend::BackendConfig,
    context::AppContext,
    domain::orders::OrderUuid,
};
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(name = "canteen-app", about = "Canteen ordering CLI", long_about = None)]
struct Cli {
    /// Hosted backend base URL
    #[arg(long, env = "BACKEND_URL")]
    backend_url: String,

    /// Publishable backend API key
    #[arg(long, env = "BACKEND_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Log filter (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Browse the menu
    Menu(MenuCommand),
    /// Place and track orders
    Order(OrderCommand),
}

#[derive(Debug, Args)]
struct MenuCommand {
    #[command(subcommand)]
    command: MenuSubcommand,
}

#[derive(Debug, Subcommand)]
enum MenuSubcommand {
    /// List the items currently available, grouped by category
    List,
}

#[derive(Debug, Args)]
struct OrderCommand {
    #[command(subcommand)]
    command: OrderSubcommand,
}

#[derive(Debug, Subcommand)]
enum OrderSubcommand {
    /// Sign in, build a cart and submit it as an order
    Place(PlaceOrderArgs),
    /// Show the fulfilment progress of an order
    Track(TrackOrderArgs),
}

#[derive(Debug, Args)]
struct PlaceOrderArgs {
    /// Menu item to order, as `<item-id>=<quantity>`; repeatable
    #[arg(long = "item", value_parser = parse_item_arg)]
    items: Vec<(String, u32)>,

    /// Payment method (gpay, phonepe, paytm, card, netbanking)
    #[arg(long, default_value = "gpay")]
    payment: PaymentMethod,

    /// Account email
    #[arg(long, env = "CANTEEN_EMAIL")]
    email: String,

    /// Account password
    #[arg(long, env = "CANTEEN_PASSWORD", hide_env_values = true)]
    password: String,
}

#[derive(Debug, Args)]
struct TrackOrderArgs {
    /// Order identifier
    order_id: Uuid,
}

#[tokio::main]
pub async fn main() {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    if let Err(error) = run(cli).await {
        eprintln!("{error}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    let context = AppContext::from_config(BackendConfig {
        base_url: cli.backend_url,
        api_key: cli.api_key,
    });

    match cli.command {
        Commands::Menu(MenuCommand {
            command: MenuSubcommand::List,
        }) => list_menu(&context).await,
        Commands::Order(OrderCommand {
            command: OrderSubcommand::Place(args),
        }) => place_order(&context, args).await,
        Commands::Order(OrderCommand {
            command: OrderSubcommand::Track(args),
        }) => track_order(&context, args).await,
    }
}

async fn list_menu(context: &AppContext) -> Result<(), String> {
    let items = context
        .menu
        .list_available()
        .await
        .map_err(|error| format!("failed to load menu: {error}"))?;

    if items.is_empty() {
        println!("no items available right now");
        return Ok(());
    }

    for category in Category::ALL {
        let in_category: Vec<&MenuItem> = items
            .iter()
            .filter(|item| item.category == category)
            .collect();

        if in_category.is_empty() {
            continue;
        }

        println!("{}", category.label());

        for item in in_category {
            println!("  {}  {}  [{}]", item.price, item.name, item.id);

            if let Some(description) = &item.description {
                println!("      {description}");
            }
        }
    }

    Ok(())
}

async fn place_order(context: &AppContext, args: PlaceOrderArgs) -> Result<(), String> {
    if args.items.is_empty() {
        return Err(empty_cart_hint());
    }

    let session = context
        .auth
        .sign_in(Credentials {
            email: args.email,
            password: args.password,
        })
        .await
        .map_err(|error| format!("sign in failed: {error}"))?;

    let menu = context
        .menu
        .list_available()
        .await
        .map_err(|error| format!("failed to load menu: {error}"))?;

    let mut cart = Cart::new(CURRENCY);

    for (item_id, quantity) in &args.items {
        let Some(item) = menu.iter().find(|item| item.id == *item_id) else {
            return Err(format!("menu item {item_id} is not available"));
        };

        cart.add(item, *quantity)
            .map_err(|error| error.to_string())?;
    }

    if cart.is_empty() {
        return Err(empty_cart_hint());
    }

    let order = context
        .orders
        .submit_order(Some(&session), &cart, args.payment)
        .await
        .map_err(|error| format!("checkout failed: {error}"))?;

    // The submitted snapshot is now owned by the store.
    cart.clear();

    println!("order placed: {}", order.uuid);
    println!("subtotal: {}", order.subtotal);
    println!("tax (5%): {}", order.tax);
    println!("total: {}", order.total);
    println!("track it with `canteen-app order track {}`", order.uuid);

    Ok(())
}

async fn track_order(context: &AppContext, args: TrackOrderArgs) -> Result<(), String> {
    let order = context
        .orders
        .get_order(OrderUuid::from_uuid(args.order_id))
        .await
        .map_err(|error| format!("could not load order: {error}"))?;

    println!("order {}", order.uuid);

    match order.projection() {
        Ok(projection) => {
            for (index, stage) in OrderStatus::STAGES.iter().enumerate() {
                let marker = if index <= projection.stage_index {
                    "[x]"
                } else {
                    "[ ]"
                };

                println!("  {marker} {}", stage.label());
            }

            let percent = (projection.progress * Decimal::from(100)).round_dp(0);
            println!("progress: {percent}%");
        }
        Err(error) => {
            println!("status unavailable ({error})");
        }
    }

    match order.eta {
        Some(eta) => println!("estimated delivery: {eta}"),
        None => println!("estimated delivery: calculating..."),
    }

    println!("items:");

    for line in &order.items {
        println!("  {} x {}  {}", line.name(), line.quantity(), line.line_total());
    }

    println!("total: {}", order.total);

    Ok(())
}

fn empty_cart_hint() -> String {
    "your cart is empty; browse the menu with `canteen-app menu list`".to_string()
}

fn parse_item_arg(arg: &str) -> Result<(String, u32), String> {
    let Some((item_id, quantity)) = arg.split_once('=') else {
        return Err("expected <item-id>=<quantity>".to_string());
    };

    let quantity: u32 = quantity
        .parse()
        .map_err(|_| format!("invalid quantity in `{arg}`"))?;

    Ok((item_id.to_string(), quantity))
}
