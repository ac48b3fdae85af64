//! Command dispatch.

use anyhow::{Context, Result};

use craftledger_calculator::{all_extras, all_yarn_types, calculate_costs, format_currency};
use craftledger_infra::{CatalogService, JsonFileProductStore, StoreConfig};
use craftledger_products::{SaveOutcome, StockAction};

use crate::args::{Commands, GroupArgs, ListArgs};
use crate::output;

pub fn run(command: Commands, config: &StoreConfig) -> Result<()> {
    match command {
        Commands::Calc(pricing) => {
            let costs = calculate_costs(&pricing.to_input()?);
            print!("{}", output::breakdown(&costs));
            Ok(())
        }
        Commands::Add(args) => {
            let mut service = open(config)?;
            let outcome = service
                .save_product(args.to_draft()?)
                .context("could not save product")?;
            match outcome {
                SaveOutcome::Inserted { id } => println!("added {id}"),
                SaveOutcome::Merged { id, stock } => {
                    println!("already listed as {id}; stock is now {stock}")
                }
            }
            Ok(())
        }
        Commands::List(args) => list(config, &args),
        Commands::Stock { id, action } => {
            let mut service = open(config)?;
            match service
                .adjust_variant_stock(id, action.into())
                .context("could not update stock")?
            {
                Some(change) => println!("{id}: stock {} -> {}", change.before, change.after),
                None => println!("no product with id {id}"),
            }
            Ok(())
        }
        Commands::GroupStock { group, action } => group_stock(config, &group, action.into()),
        Commands::Delete { id } => {
            let mut service = open(config)?;
            if service.delete_product(id).context("could not delete product")? {
                println!("deleted {id}");
            } else {
                println!("no product with id {id}");
            }
            Ok(())
        }
        Commands::DeleteGroup(group) => {
            let mut service = open(config)?;
            let removed = service
                .delete_group(&group.key())
                .context("could not delete group")?;
            println!("deleted {removed} variant(s)");
            Ok(())
        }
        Commands::Yarns => {
            for yarn in all_yarn_types() {
                println!(
                    "{:<16} {:<20} normal {}/g  promo {}/g",
                    yarn.key, yarn.name, yarn.normal_price, yarn.promo_price
                );
            }
            Ok(())
        }
        Commands::Extras => {
            for extra in all_extras() {
                println!("{:<12} {}", extra.name, format_currency(extra.price));
            }
            Ok(())
        }
    }
}

/// Open the catalog for a command that writes. A file that cannot be read
/// stops the command before anything is saved over it.
fn open(config: &StoreConfig) -> Result<CatalogService<JsonFileProductStore>> {
    let store = JsonFileProductStore::from_config(config);
    let path = store.path().to_path_buf();
    let service = CatalogService::try_load(store)
        .with_context(|| format!("could not read products from {}", path.display()))?;
    tracing::debug!(path = %service.store().path().display(), "catalog opened for writing");
    Ok(service)
}

fn list(config: &StoreConfig, args: &ListArgs) -> Result<()> {
    let service = CatalogService::load(JsonFileProductStore::from_config(config));
    if service.is_read_only() {
        eprintln!(
            "warning: could not read {}; showing no products",
            service.store().path().display()
        );
    }
    let groups = service.filtered_groups(&args.to_filter());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
    } else if groups.is_empty() {
        println!("no products");
    } else {
        for group in &groups {
            print!("{}", output::group(group));
        }
    }
    Ok(())
}

fn group_stock(config: &StoreConfig, group: &GroupArgs, action: StockAction) -> Result<()> {
    let mut service = open(config)?;
    let changes = service
        .adjust_group_stock(&group.key(), action)
        .context("could not update group stock")?;

    if changes.is_empty() {
        println!("no matching group");
    }
    for change in changes {
        println!("{}: stock {} -> {}", change.id, change.before, change.after);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    use crate::args::Cli;

    fn command(args: &[&str]) -> Commands {
        let argv = std::iter::once("craftledger").chain(args.iter().copied());
        Cli::try_parse_from(argv).unwrap().command
    }

    #[test]
    fn add_then_stock_round_trips_through_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::default().with_data_dir(dir.path());

        let add = ["add", "--name", "Bunny", "--color", "pink", "--sale-price", "20"];
        run(command(&add), &config).unwrap();
        run(command(&add), &config).unwrap();

        let service = CatalogService::try_load(JsonFileProductStore::from_config(&config)).unwrap();
        assert_eq!(service.catalog().len(), 1);
        assert_eq!(service.catalog().products()[0].stock, 2);
    }

    #[test]
    fn writes_refuse_an_unreadable_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::default().with_data_dir(dir.path());
        let path = config.products_path();
        std::fs::write(&path, "[{\"id\": 17, \"name\": \"Bunny\"").unwrap();

        let add = ["add", "--name", "Bear", "--color", "brown", "--sale-price", "15"];
        assert!(run(command(&add), &config).is_err());
        assert!(run(command(&["delete-group", "--name", "Bunny", "--sale-price", "20"]), &config).is_err());

        // Listing still works, it just shows nothing.
        assert!(run(command(&["list"]), &config).is_ok());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "[{\"id\": 17, \"name\": \"Bunny\""
        );
    }
}
