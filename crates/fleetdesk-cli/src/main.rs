// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod runtime;

use anyhow::{Context, Result};
use config::Config;
use fleetdesk_api::CatalogClient;
use fleetdesk_app::{
    CatalogRecord, EquipmentRecord, PageStripEntry, ProviderRecord, SortKey,
};
use fleetdesk_console::CollectionController;
use runtime::HttpCatalog;
use serde::de::DeserializeOwned;
use std::env;
use std::path::PathBuf;

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1), Config::default_path()?)?;
    if options.show_help {
        print_help();
        return Ok(());
    }

    if options.print_config_path {
        println!("{}", options.config_path.display());
        return Ok(());
    }

    if options.print_example {
        print!("{}", Config::example_config(&options.config_path));
        return Ok(());
    }

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `fleetdesk --print-example-config` to generate a template",
            options.config_path.display()
        )
    })?;

    let _logger = flexi_logger::Logger::try_with_env_or_str("warn")
        .context("configure logger")?
        .start()
        .context("start logger")?;

    let client = CatalogClient::new(config.base_url(), config.asset_base_url(), config.timeout()?)
        .with_context(|| {
            format!(
                "invalid [service] config in {}; fix base_url/asset_base_url/timeout values",
                options.config_path.display()
            )
        })?;
    if options.check_only {
        return Ok(());
    }

    let providers = if options.equipment {
        false
    } else {
        options.providers || config.default_view() == "providers"
    };
    log::debug!(
        "listing {} page {} against {}",
        if providers { "providers" } else { "equipment" },
        options.page,
        config.base_url()
    );
    if providers {
        list_collection::<ProviderRecord>(&client, &options, config.page_size(), provider_row)
    } else {
        list_collection::<EquipmentRecord>(&client, &options, config.page_size(), equipment_row)
    }
}

fn list_collection<R>(
    client: &CatalogClient,
    options: &CliOptions,
    page_size: u32,
    row: fn(&R) -> String,
) -> Result<()>
where
    R: CatalogRecord + DeserializeOwned,
{
    let mut catalog = HttpCatalog::new(client);
    let mut controller: CollectionController<R> = CollectionController::new(page_size);
    controller.refresh(&mut catalog)?;

    if options.page > 1 && !controller.go_to(&mut catalog, options.page)? {
        anyhow::bail!(
            "page {} is out of range; the {} collection has {} page(s)",
            options.page,
            R::KIND,
            controller.total_pages()
        );
    }

    if let Some(search) = &options.search {
        controller.set_search_text(search.clone());
    }
    if let Some(sort) = options.sort {
        controller.set_sort_key(sort);
    }

    let rows = controller.displayed();
    if controller.page_is_empty() {
        println!("({} collection is empty)", R::KIND);
    } else if controller.no_matches() {
        println!("(no records on this page match the filter)");
    } else {
        for record in &rows {
            println!("{}", row(record));
        }
    }

    println!(
        "page {}/{}  [{}]",
        controller.page_index(),
        controller.total_pages(),
        render_strip(&controller.page_strip())
    );
    Ok(())
}

fn equipment_row(record: &EquipmentRecord) -> String {
    let rate = match record.daily_rate {
        Some(rate) => format!("{rate:.0}/day"),
        None => "no rate".to_owned(),
    };
    let availability = if record.availability {
        "active"
    } else {
        "inactive"
    };
    format!(
        "{}  {}  {}  {}  {}",
        record.id, record.title, record.category, rate, availability
    )
}

fn provider_row(record: &ProviderRecord) -> String {
    format!(
        "{}  {}  {}  {}",
        record.id,
        record.name,
        record.company_name,
        record.status.as_str()
    )
}

fn render_strip(entries: &[PageStripEntry]) -> String {
    entries
        .iter()
        .map(|entry| match entry {
            PageStripEntry::Page(page) => page.to_string(),
            PageStripEntry::Ellipsis => "..".to_owned(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    print_config_path: bool,
    print_example: bool,
    check_only: bool,
    show_help: bool,
    equipment: bool,
    providers: bool,
    page: u32,
    search: Option<String>,
    sort: Option<SortKey>,
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        print_config_path: false,
        print_example: false,
        check_only: false,
        show_help: false,
        equipment: false,
        providers: false,
        page: 1,
        search: None,
        sort: None,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--config requires a file path"))?;
                options.config_path = PathBuf::from(value.as_ref());
            }
            "--print-config-path" => {
                options.print_config_path = true;
            }
            "--print-example-config" => {
                options.print_example = true;
            }
            "--check" => {
                options.check_only = true;
            }
            "--equipment" => {
                options.equipment = true;
            }
            "--providers" => {
                options.providers = true;
            }
            "--page" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--page requires a page number"))?;
                options.page = value
                    .as_ref()
                    .parse()
                    .map_err(|_| anyhow::anyhow!("--page expects a number, got {:?}", value.as_ref()))?;
            }
            "--search" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--search requires text"))?;
                options.search = Some(value.as_ref().to_owned());
            }
            "--sort" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--sort requires a key"))?;
                let key = SortKey::parse(value.as_ref()).ok_or_else(|| {
                    anyhow::anyhow!(
                        "unknown sort key {:?}; use newest, price_asc, price_desc, or rating",
                        value.as_ref()
                    )
                })?;
                options.sort = Some(key);
            }
            "--help" | "-h" => {
                options.show_help = true;
            }
            unknown => {
                return Err(anyhow::anyhow!(
                    "unknown argument {unknown:?}; run with --help to see supported options"
                ));
            }
        }
    }

    Ok(options)
}

fn print_help() {
    println!("fleetdesk");
    println!("  --config <path>          Use a specific config path");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-example-config   Print a config template");
    println!("  --check                  Validate config and client setup");
    println!("  --equipment              List rentable equipment (overrides ui.default_view)");
    println!("  --providers              List affiliated providers instead of equipment");
    println!("  --page <n>               Fetch a specific server page");
    println!("  --search <text>          Filter the fetched page by search text");
    println!("  --sort <key>             Sort rows: newest, price_asc, price_desc, rating");
    println!("  --help                   Show this help");
}
