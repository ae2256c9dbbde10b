//! `shoplist`: command-line host for the shopping list.

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use shoplist_core::{Item, ItemId, ItemList};
use shoplist_form::{FormError, ItemForm};
use shoplist_store::{ItemRepository, Notice, Notifier, ShopClient, StoreConfig};

mod render;

#[derive(Parser)]
#[command(name = "shoplist")]
#[command(about = "Shopping list backed by a remote JSON store", long_about = None)]
struct Cli {
    /// Store base URL (defaults to $SHOPLIST_FIREBASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every item, sorted by name, and the total
    List,

    /// Show only the total
    Total,

    /// Add an item
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        price: String,

        #[arg(long, default_value = "1")]
        quantity: String,
    },

    /// Replace an item's fields (unset options keep their stored value)
    Update {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        price: Option<String>,

        #[arg(long)]
        quantity: Option<String>,

        #[arg(long)]
        checked: Option<bool>,
    },

    /// Mark an item as acquired
    Check { id: String },

    /// Mark an item as still needed
    Uncheck { id: String },

    /// Delete an item
    Remove { id: String },
}

/// Prints notices on stdout, where the user is looking.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        println!("{}", render::notice(notice));
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    shoplist_observability::init();

    let cli = Cli::parse();

    let config = match cli.base_url {
        Some(url) => StoreConfig::new(url),
        None => StoreConfig::from_env().context("no store configured; pass --base-url")?,
    };
    tracing::debug!(base_url = config.base_url(), "using store");

    let client = ShopClient::new(config)
        .context("failed to build HTTP client")?
        .with_notifier(Arc::new(ConsoleNotifier));

    match cli.command {
        Commands::List => {
            let list = client.fetch_all().await.context("failed to fetch the list")?;
            print!("{}", render::table(&list));
        }
        Commands::Total => {
            let list = client.fetch_all().await.context("failed to fetch the list")?;
            println!("{}", render::money(list.total()));
        }
        Commands::Add { name, price, quantity } => {
            let mut form = ItemForm::new();
            form.set_name(name);
            form.set_price_text(&price);
            form.set_quantity_text(&quantity);
            submitted(form.submit(&client).await)?;
        }
        Commands::Update { id, name, price, quantity, checked } => {
            let item = find(&client, &id).await?;
            let mut form = ItemForm::edit(&item);
            if let Some(name) = name {
                form.set_name(name);
            }
            if let Some(price) = price {
                form.set_price_text(&price);
            }
            if let Some(quantity) = quantity {
                form.set_quantity_text(&quantity);
            }
            if let Some(checked) = checked {
                form.set_checked(checked);
            }
            let item = submitted(form.validate())?;
            client.update(&item).await.context("update failed")?;
        }
        Commands::Check { id } => {
            let item = find(&client, &id).await?;
            client.set_checked(&item, true).await.context("update failed")?;
        }
        Commands::Uncheck { id } => {
            let item = find(&client, &id).await?;
            client.set_checked(&item, false).await.context("update failed")?;
        }
        Commands::Remove { id } => {
            let id: ItemId = id.parse()?;
            client.delete(&id).await.context("delete failed")?;
        }
    }

    Ok(())
}

/// Report field errors one per line; pass everything else up.
fn submitted<T>(result: Result<T, FormError>) -> Result<T> {
    match result {
        Ok(value) => Ok(value),
        Err(FormError::Invalid(errors)) => {
            for error in &errors {
                eprintln!("{error}");
            }
            bail!("item not saved: {} invalid field(s)", errors.len())
        }
        Err(err) => Err(err).context("item not saved"),
    }
}

async fn find(client: &ShopClient, id: &str) -> Result<Item> {
    let id: ItemId = id.parse()?;
    let list: ItemList = client.fetch_all().await.context("failed to fetch the list")?;
    match list.get(&id) {
        Some(item) => Ok(item.clone()),
        None => bail!("no item with id {id}"),
    }
}
