//! Software Engineer Wrap CLI
//!
//! Thin wrapper around devwrap-core for command-line usage. A session lives
//! in a directory of JSON files so it spans invocations.
//!
//! ## Usage
//!
//! ```bash
//! # Pick the period
//! devwrap period monthly --year 2024 --month 3
//!
//! # Fill in stats
//! devwrap create --personality hacker --loc 25000 --language Rust --language Go
//!
//! # Print the card
//! devwrap show
//!
//! # Export the PNG
//! devwrap render --out wrap.png
//!
//! # Print share links
//! devwrap share-links --url https://example.com/wrap
//! ```

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use devwrap_core::logging::{self, LogFormat};
use devwrap_core::share::ShareKind;
use devwrap_core::theme::{lookup, templates_for, template_by_id};
use devwrap_core::{
    export, export_filename, render, upload, CardBounds, ExportOptions, FieldUpdate,
    FileSessionStore, FormStore, HttpFetcher, OfflineFetcher, PeriodSelection, Personality,
    ResourceFetcher, SessionStore, SharePayload, ShareTarget, StatField, ToggleOutcome, WrapProfile,
};

/// Software Engineer Wrap - your year in code, as a card
#[derive(Parser)]
#[command(name = "devwrap")]
#[command(version)]
#[command(about = "Software Engineer Wrap - your year in code, as a card")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    /// Session directory (default: <cache>/devwrap/session)
    #[arg(short, long, global = true)]
    session_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Choose the period the wrap covers
    Period {
        #[arg(value_enum)]
        kind: PeriodArg,
        /// Year (default: current year)
        #[arg(short, long)]
        year: Option<i32>,
        /// Month 1-12 (monthly only)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=12))]
        month: Option<u8>,
    },

    /// Fill in or edit the wrap; unset flags keep their current value
    Create(CreateArgs),

    /// Print the card as text
    Show {
        /// Print the stored profile JSON instead
        #[arg(long)]
        json: bool,
    },

    /// Export the card as a PNG
    Render {
        /// Output path (default: ./software-engineer-wrap-<period>-<theme>.png)
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Card width in CSS pixels
        #[arg(long, default_value = "540")]
        width: f64,
        /// Card height in CSS pixels (default: 9:16 aspect of width)
        #[arg(long)]
        height: Option<f64>,
        /// Do not fetch remote images
        #[arg(long)]
        offline: bool,
        /// Per-image fetch timeout in seconds
        #[arg(long, default_value = "10")]
        timeout: u64,
    },

    /// Print the share caption and per-network links
    ShareLinks {
        /// Page URL to attach to the caption
        #[arg(long)]
        url: Option<String>,
    },

    /// List personalities, or show one theme
    Themes {
        /// Personality key (e.g. hacker)
        key: Option<Personality>,
    },

    /// Forget the session
    Clear,
}

#[derive(Clone, Copy, ValueEnum)]
enum PeriodArg {
    Yearly,
    Monthly,
}

#[derive(clap::Args)]
struct CreateArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    role: Option<String>,
    #[arg(long)]
    company: Option<String>,
    #[arg(long)]
    buddy: Option<String>,
    #[arg(long)]
    ide: Option<String>,
    #[arg(long)]
    personality: Option<Personality>,

    /// Lines of code
    #[arg(long)]
    loc: Option<String>,
    #[arg(long)]
    commits: Option<String>,
    #[arg(long)]
    coffees: Option<String>,
    /// Hours coded
    #[arg(long)]
    hours: Option<String>,
    #[arg(long)]
    bugs: Option<String>,
    #[arg(long)]
    projects: Option<String>,
    /// Hours in meetings
    #[arg(long)]
    meetings: Option<String>,

    /// Toggle a language (repeatable, max 4 selected)
    #[arg(long = "language")]
    languages: Vec<String>,
    /// Toggle an app (repeatable, max 4 selected)
    #[arg(long = "app")]
    apps: Vec<String>,

    /// Background template id
    #[arg(long)]
    template: Option<String>,
    /// Custom background image file
    #[arg(long)]
    background: Option<PathBuf>,
    /// Drop any template or custom background
    #[arg(long)]
    clear_background: bool,
}

fn setup_logging(verbosity: u8, json: bool) {
    let format = if json { LogFormat::Json } else { LogFormat::Pretty };
    logging::init(verbosity, format);
}

/// Get the default session directory (<cache>/devwrap/session)
fn default_session_dir() -> PathBuf {
    devwrap_core::config::default_data_dir().join("session")
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.log_json);

    let session_dir = cli.session_dir.unwrap_or_else(default_session_dir);
    let store = FileSessionStore::new(&session_dir)
        .with_context(|| format!("Cannot open session at {}", session_dir.display()))?;

    match cli.command {
        Commands::Period { kind, year, month } => {
            let year = year.unwrap_or_else(|| PeriodSelection::default().year);
            let period = match (kind, month) {
                (PeriodArg::Yearly, _) => PeriodSelection::yearly(year),
                (PeriodArg::Monthly, Some(month)) => PeriodSelection::monthly(year, month),
                (PeriodArg::Monthly, None) => anyhow::bail!("--month is required for monthly wraps"),
            };
            store.save_period(&period)?;

            let mut form = FormStore::load(&store);
            form.set_period(period);
            if store.load_profile().is_some() {
                form.submit(&store)?;
            }
            println!("Period: {}", form.profile().period_label());
        }

        Commands::Create(args) => {
            let mut form = FormStore::load(&store);
            apply_create(&mut form, args)?;
            form.submit(&store)?;

            let profile = form.profile();
            println!("Wrap saved.");
            println!("  Period: {}", profile.period_label());
            println!("  Personality: {}", lookup(profile.personality).name);
            println!(
                "  Languages: {}",
                profile.most_used_languages.as_slice().join(", ")
            );
            println!("  Apps: {}", profile.most_used_apps.as_slice().join(", "));
        }

        Commands::Show { json } => {
            let profile = current_profile(&store);
            if json {
                println!("{}", serde_json::to_string_pretty(&profile)?);
            } else {
                print_card(&profile);
            }
        }

        Commands::Render {
            out,
            width,
            height,
            offline,
            timeout,
        } => {
            let profile = current_profile(&store);
            let card = render(&profile);
            let bounds = match height {
                Some(height) => CardBounds::new(width, height),
                None => CardBounds::from_width(width),
            };
            let options = ExportOptions {
                fetch_timeout: Duration::from_secs(timeout),
                offline,
                ..Default::default()
            };

            tracing::debug!(?bounds, offline, "Rendering card");
            let fetcher: Box<dyn ResourceFetcher> = if offline {
                Box::new(OfflineFetcher)
            } else {
                Box::new(HttpFetcher::new(options.fetch_timeout)?)
            };

            let image = export(&card, bounds, fetcher.as_ref(), &options)
                .await
                .context("Download failed: there was an error generating your image")?;

            for warning in image.warnings() {
                eprintln!("warning: {}", warning);
            }

            let path = out.unwrap_or_else(|| PathBuf::from(export_filename(&profile)));
            std::fs::write(&path, image.png())
                .with_context(|| format!("Cannot write {}", path.display()))?;
            tracing::info!(path = %path.display(), "Card written");
            println!(
                "Saved {} ({}x{})",
                path.display(),
                image.width(),
                image.height()
            );
        }

        Commands::ShareLinks { url } => {
            let profile = current_profile(&store);
            let payload = SharePayload::for_profile(&profile, url.as_deref());

            println!("{}", payload.title);
            println!("{}", payload.full_text());
            println!();
            for target in ShareTarget::ALL {
                match target.kind() {
                    ShareKind::Link => {
                        if let Some(link) = target.intent_url(&payload) {
                            println!("{:<12} {}", target.key(), link);
                        }
                    }
                    ShareKind::Image => {
                        println!(
                            "{:<12} {} (upload {})",
                            target.key(),
                            target.site_url(),
                            export_filename(&profile)
                        );
                    }
                }
            }
        }

        Commands::Themes { key } => match key {
            None => {
                for personality in Personality::ALL {
                    println!(
                        "{:<11} {:<11} {}",
                        personality.key(),
                        lookup(personality).name,
                        personality.description()
                    );
                }
            }
            Some(personality) => {
                let theme = lookup(personality);
                println!("{}", theme.name);
                println!("  Primary: {}", theme.primary_color);
                println!("  Secondary: {}", theme.secondary_color);
                println!("  Gradient: {}", theme.gradient());
                println!("  Default background: {}", theme.default_bg_image);
                println!("  Templates:");
                for template in templates_for(personality) {
                    println!("    {:<18} {}", template.id, template.name);
                }
            }
        },

        Commands::Clear => {
            store.clear()?;
            println!("Session cleared.");
        }
    }

    Ok(())
}

/// Submitted profile, else whatever the form would start from
fn current_profile(store: &FileSessionStore) -> WrapProfile {
    store
        .load_profile()
        .unwrap_or_else(|| FormStore::load(store).into_profile())
}

fn apply_create(form: &mut FormStore, args: CreateArgs) -> Result<()> {
    let text_updates: [(Option<String>, fn(String) -> FieldUpdate); 5] = [
        (args.name, FieldUpdate::DeveloperName),
        (args.role, FieldUpdate::Role),
        (args.company, FieldUpdate::Company),
        (args.buddy, FieldUpdate::Buddy),
        (args.ide, FieldUpdate::Ide),
    ];
    for (value, update) in text_updates {
        if let Some(value) = value {
            form.apply(update(value));
        }
    }

    if let Some(personality) = args.personality {
        form.apply(FieldUpdate::Personality(personality));
    }

    let stats = [
        (StatField::LinesOfCode, args.loc),
        (StatField::Commits, args.commits),
        (StatField::CoffeesConsumed, args.coffees),
        (StatField::HoursCoded, args.hours),
        (StatField::BugsFixed, args.bugs),
        (StatField::ProjectsShipped, args.projects),
        (StatField::HoursInMeetings, args.meetings),
    ];
    for (field, value) in stats {
        if let Some(text) = value {
            form.set_stat(field, &text);
        }
    }

    for language in &args.languages {
        if form.toggle_language(language) == ToggleOutcome::Full {
            eprintln!("warning: {} not added, 4 languages already selected", language);
        }
    }
    for app in &args.apps {
        if form.toggle_app(app) == ToggleOutcome::Full {
            eprintln!("warning: {} not added, 4 apps already selected", app);
        }
    }

    if args.clear_background {
        form.apply(FieldUpdate::ClearBackground);
    }
    if let Some(id) = args.template {
        let template = template_by_id(&id)
            .ok_or_else(|| anyhow::anyhow!("Unknown background template '{}'", id))?;
        form.apply(FieldUpdate::Template(Some(template.url.to_string())));
    }
    if let Some(path) = args.background {
        let uri = upload::load_image_file(&path)
            .with_context(|| format!("Cannot read {}", path.display()))?;
        form.apply(FieldUpdate::CustomImage(Some(uri)));
    }

    Ok(())
}

fn print_card(profile: &WrapProfile) {
    let card = render(profile);
    let header = &card.header;

    println!("{}", header.title);
    println!("{} {}", header.wordmark, header.year);
    println!("{}", header.period.text());
    println!();
    for cell in &card.stats {
        println!("  {:<20} {}", cell.label, cell.value.final_text());
    }
    println!();
    for strip in [&card.apps, &card.languages] {
        let names: Vec<&str> = strip.items.iter().map(|i| i.name.as_str()).collect();
        println!("{}: {}", strip.caption, names.join(", "));
    }
    println!();
    if !card.footer.developer_name.is_empty() {
        println!("{}", card.footer.developer_name);
    }
    println!("{} at {}", card.footer.role, card.footer.company);
    println!("Theme: {}", card.footer.theme_name);
}
