//! Command implementations for the NextGen CLI
//!
//! Sets up logging and configuration, dispatches subcommands to the
//! content loader and prints results as coloured text or JSON.

use crate::cli::{
    Args, Command, CommunityArgs, FormatArgs, NewsArgs, OutputFormat, ParseArgs, SourceArgs,
};
use crate::config::SiteConfig;
use crate::constants::REGION_NAME;
use crate::content::reference::{municipalities, routes};
use crate::content::views::{CommunityView, Filter, NewsView};
use crate::content::{ContentLoader, SiteContent};
use crate::error::SiteError;
use crate::models::{NewsItem, Profile};
use crate::parser::data_rows;

use anyhow::{Context, Result};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Main command runner
pub async fn run(args: Args, cancellation_token: CancellationToken) -> Result<()> {
    setup_logging(&args);
    debug!("Command line arguments: {:?}", args);

    let config = SiteConfig::resolve(args.config.as_deref()).with_context(|| match &args.config {
        Some(path) => format!("Failed to load config file {}", path.display()),
        None => "Failed to load default config file".to_string(),
    })?;

    let Some(command) = args.command else {
        return Ok(());
    };

    match command {
        Command::Parse(parse) => run_parse(config, parse).await,
        Command::Community(community) => run_community(config, community).await,
        Command::News(news) => run_news(config, news).await,
        Command::Applications(source) => run_applications(config, source).await,
        Command::Summary => run_summary(config, cancellation_token).await,
        Command::Municipalities(output) => print_municipalities(&output),
        Command::Routes(output) => print_routes(&output),
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.log_level();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("nextgen_content={}", log_level)));

    // try_init: tests and embedders may already own the global subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();

    debug!("Logging initialized at level: {}", log_level);
}

async fn run_parse(config: SiteConfig, args: ParseArgs) -> Result<()> {
    let loader = ContentLoader::new(config)?;
    let table = loader.parse_source(&args.source).await?;
    let rows = if args.skip_header {
        data_rows(&table)
    } else {
        &table[..]
    };

    match args.output.format {
        OutputFormat::Json => print_json(&rows),
        OutputFormat::Text => {
            let separator = " | ".bright_black().to_string();
            for (index, row) in rows.iter().enumerate() {
                println!(
                    "{} {}",
                    format!("{:>4}", index + 1).bright_black(),
                    row.join(separator.as_str())
                );
            }
            println!(
                "\n{} {}",
                rows.len().to_string().bright_white().bold(),
                "rows".bright_green()
            );
            Ok(())
        }
    }
}

fn with_source_override(
    config: SiteConfig,
    source: &SourceArgs,
    apply: fn(SiteConfig, String) -> SiteConfig,
) -> SiteConfig {
    match &source.source {
        Some(source) => apply(config, source.clone()),
        None => config,
    }
}

async fn run_community(config: SiteConfig, args: CommunityArgs) -> Result<()> {
    let config = with_source_override(config, &args.source, |c, s| c.with_community_source(s));
    let preview_limit = config.preview_limit;
    let loader = ContentLoader::new(config)?;
    let (profiles, stats) = loader.load_profiles().await?;
    info!(
        "{} profiles accepted, {} rows skipped",
        stats.rows_accepted, stats.rows_skipped
    );

    let mut view = CommunityView::new(profiles);
    let selected: Vec<&Profile> = if args.preview {
        view.preview(preview_limit).iter().collect()
    } else {
        if let Some(municipality) = &args.municipality {
            view.set_municipality_filter(Filter::parse(municipality));
        }
        if let Some(sector) = &args.sector {
            view.set_sector_filter(Filter::parse(sector));
        }
        let mut filtered = view.filtered();
        if let Some(limit) = args.limit {
            filtered.truncate(limit);
        }
        filtered
    };

    match args.output.format {
        OutputFormat::Json => print_json(&selected),
        OutputFormat::Text => {
            if selected.is_empty() {
                println!("{}", "No hay emprendimientos disponibles.".bright_yellow());
            }
            for profile in &selected {
                print_profile(profile);
            }
            println!(
                "{} of {} profiles",
                selected.len().to_string().bright_white().bold(),
                view.profiles().len()
            );
            Ok(())
        }
    }
}

fn print_profile(profile: &Profile) {
    println!(
        "{} {}",
        profile.business_name.bright_cyan().bold(),
        format!("[{}]", profile.sector).bright_black()
    );
    println!(
        "  {} {}",
        "Emprendedor:".bright_green(),
        profile.entrepreneur_name
    );
    println!(
        "  {} {}, {}",
        "Ubicación:".bright_green(),
        profile.municipality,
        REGION_NAME
    );
    if !profile.address.is_empty() {
        println!("  {} {}", "Dirección:".bright_green(), profile.address);
    }
    for link in profile.social_links() {
        println!("  {} {}", format!("{:?}:", link.network).bright_green(), link.url);
    }
    println!();
}

async fn run_news(config: SiteConfig, args: NewsArgs) -> Result<()> {
    let config = with_source_override(config, &args.source, |c, s| c.with_news_source(s));
    let preview_limit = config.preview_limit;
    let loader = ContentLoader::new(config)?;
    let (items, stats) = loader.load_news().await?;
    info!(
        "{} news items accepted, {} rows skipped",
        stats.rows_accepted, stats.rows_skipped
    );

    let mut view = NewsView::new(items);
    let selected: Vec<&NewsItem> = if args.preview {
        view.preview(preview_limit).iter().collect()
    } else {
        if let Some(municipality) = &args.municipality {
            view.set_municipality_filter(Filter::parse(municipality));
        }
        let mut filtered = view.filtered();
        if let Some(limit) = args.limit {
            filtered.truncate(limit);
        }
        filtered
    };

    match args.output.format {
        OutputFormat::Json => print_json(&selected),
        OutputFormat::Text => {
            if selected.is_empty() {
                println!(
                    "{}",
                    "No hay noticias que coincidan con el filtro.".bright_yellow()
                );
            }
            for item in &selected {
                println!(
                    "{} {} {}",
                    item.date.bright_black(),
                    item.title.bright_cyan().bold(),
                    format!("({})", item.municipality).bright_green()
                );
                if !item.description.is_empty() {
                    println!("  {}", item.description);
                }
            }
            Ok(())
        }
    }
}

async fn run_applications(config: SiteConfig, args: SourceArgs) -> Result<()> {
    let config = with_source_override(config, &args, |c, s| c.with_applications_source(s));
    let loader = ContentLoader::new(config)?;
    let count = loader.count_applications().await?;
    println!(
        "{} {}",
        "Postulaciones:".bright_green(),
        count.to_string().bright_white().bold()
    );
    Ok(())
}

async fn run_summary(config: SiteConfig, cancellation_token: CancellationToken) -> Result<()> {
    let loader = ContentLoader::new(config)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Loading sheets...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = tokio::select! {
        result = loader.load_all() => result,
        _ = cancellation_token.cancelled() => Err(SiteError::interrupted("summary cancelled")),
    };
    spinner.finish_and_clear();

    print_summary(&result?);
    Ok(())
}

fn print_summary(content: &SiteContent) {
    println!("{}", "NextGen content summary".bright_green().bold());
    println!(
        "  {} {} ({} rows skipped)",
        "Profiles:".bright_cyan(),
        content.community.profiles().len().to_string().bright_white().bold(),
        content.community_stats.rows_skipped
    );
    println!(
        "  {} {} ({} rows skipped)",
        "News items:".bright_cyan(),
        content.news.items().len().to_string().bright_white().bold(),
        content.news_stats.rows_skipped
    );
    println!(
        "  {} {}",
        "Applications:".bright_cyan(),
        content.applications.to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        "Municipalities:".bright_cyan(),
        content.community.municipality_options().join(", ")
    );
    println!(
        "  {} {}",
        "Sectors:".bright_cyan(),
        content.community.sector_options().join(", ")
    );
}

fn print_municipalities(output: &FormatArgs) -> Result<()> {
    let municipalities = municipalities();
    match output.format {
        OutputFormat::Json => print_json(&municipalities),
        OutputFormat::Text => {
            for m in &municipalities {
                println!(
                    "{:<24} {:>8.4} {:>9.4}",
                    m.name.bright_cyan(),
                    m.lat,
                    m.lng
                );
            }
            Ok(())
        }
    }
}

fn print_routes(output: &FormatArgs) -> Result<()> {
    let routes = routes();
    match output.format {
        OutputFormat::Json => print_json(&routes),
        OutputFormat::Text => {
            for route in &routes {
                println!("{}", route.name.bright_green().bold());
                if route.stops.is_empty() {
                    println!("  {}", "Próximamente disponible".bright_black());
                }
                for stop in &route.stops {
                    println!("  {:<26} {}", stop.date.bright_black(), stop.municipality);
                }
            }
            Ok(())
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("Failed to serialise output")?
    );
    Ok(())
}
