use anyhow::{Context, Result, anyhow};
use blend::{BlendAccumulator, DEFAULT_TOP_BENEFITS};
use catalog::{Catalog, Drink, DrinkCategory};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use pipeline::Candidate;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;
use session::BrowseSession;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Brew Guide - browse teas, coffees and infused waters by health benefit
#[derive(Parser)]
#[command(name = "brew-guide")]
#[command(about = "Find drinks by ingredient, benefit and health focus, and build custom blends", long_about = None)]
struct Cli {
    /// Catalog JSON file (uses the built-in catalog when omitted)
    #[arg(short, long, env = "BREW_CATALOG")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List categories with their drink counts
    Categories,

    /// List health focus presets
    Focuses,

    /// List drinks matching the given filters
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one drink in detail
    Show {
        /// Drink ID
        id: String,

        /// Highlight the ingredients providing this benefit
        #[arg(long)]
        highlight: Option<String>,
    },

    /// Show the ingredient and benefit filters offered for a category
    Options {
        #[arg(long, default_value = "tea")]
        category: DrinkCategory,
    },

    /// Build a blend from one or more drinks
    Blend {
        /// Drink IDs to add, in order
        #[arg(required = true)]
        ids: Vec<String>,

        /// Ingredient to drop from the finished blend
        #[arg(long)]
        remove: Vec<String>,

        /// Number of benefits in the health profile
        #[arg(long, default_value_t = DEFAULT_TOP_BENEFITS)]
        top: usize,

        /// Print the blend as JSON
        #[arg(long)]
        json: bool,
    },

    /// Pick a random drink among the filtered results
    Surprise {
        #[command(flatten)]
        filters: FilterArgs,

        /// Seed for a reproducible pick
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Args)]
struct FilterArgs {
    #[arg(long, default_value = "tea")]
    category: DrinkCategory,

    /// Case-insensitive text matched against name, description and flavor notes
    #[arg(long)]
    search: Option<String>,

    /// Required ingredient (repeatable, all must match)
    #[arg(long)]
    ingredient: Vec<String>,

    /// Required benefit (repeatable, all must match)
    #[arg(long)]
    benefit: Vec<String>,

    /// Health focus ID
    #[arg(long)]
    focus: Option<String>,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let catalog = Arc::new(load_catalog(cli.catalog.as_ref())?);
    let (drinks, focuses) = catalog.counts();
    debug!(
        "Catalog ready with {} drinks and {} focuses in {:?}",
        drinks,
        focuses,
        start.elapsed()
    );

    match cli.command {
        Commands::Categories => handle_categories(&catalog),
        Commands::Focuses => handle_focuses(&catalog),
        Commands::List { filters, json } => handle_list(catalog, &filters, json)?,
        Commands::Show { id, highlight } => handle_show(&catalog, &id, highlight.as_deref())?,
        Commands::Options { category } => handle_options(catalog, category),
        Commands::Blend {
            ids,
            remove,
            top,
            json,
        } => handle_blend(catalog, &ids, &remove, top, json)?,
        Commands::Surprise { filters, seed } => handle_surprise(catalog, &filters, seed)?,
    }

    Ok(())
}

fn load_catalog(path: Option<&PathBuf>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::load_from_file(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display())),
        None => Catalog::embedded().context("Built-in catalog is invalid"),
    }
}

/// Build a session with the filters from the command line applied
fn session_from_filters(catalog: Arc<Catalog>, filters: &FilterArgs) -> Result<BrowseSession> {
    let mut session = BrowseSession::new(catalog);
    session.set_category(filters.category);
    if let Some(search) = &filters.search {
        session.set_search(search.as_str());
    }
    for name in &filters.ingredient {
        session.select_ingredient(name);
    }
    for benefit in &filters.benefit {
        session.select_benefit(benefit);
    }
    session
        .select_focus(filters.focus.as_deref())
        .context("Unknown --focus (see `brew-guide focuses`)")?;
    Ok(session)
}

/// Handle the 'categories' command
fn handle_categories(catalog: &Catalog) {
    println!("{}", "Categories:".bold().blue());
    for category in DrinkCategory::ALL {
        println!(
            "{}{:<8} {} drinks",
            "• ".green(),
            category.to_string(),
            catalog.category_count(category)
        );
    }
}

/// Handle the 'focuses' command
fn handle_focuses(catalog: &Catalog) {
    println!("{}", "Health focuses:".bold().blue());
    for focus in catalog.focuses() {
        println!("{}{} ({})", "• ".green(), focus.label.bold(), focus.id);
        println!("    {}", focus.tagline.italic());
        println!("    Counts: {}", focus.benefits.join(", "));
    }
}

/// Handle the 'list' command
fn handle_list(catalog: Arc<Catalog>, filters: &FilterArgs, json: bool) -> Result<()> {
    let session = session_from_filters(catalog, filters)?;
    let ranked = session.ranked();
    info!("{} drinks match", ranked.len());

    if json {
        let rows: Vec<_> = ranked
            .iter()
            .map(|c| {
                json!({
                    "id": c.drink.id,
                    "name": c.drink.name,
                    "category": c.drink.category,
                    "focus_score": c.focus_score,
                    "health_benefits": c.drink.health_benefits,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    print_results(&ranked, session.focus().is_some());
    Ok(())
}

/// Handle the 'show' command
fn handle_show(catalog: &Catalog, id: &str, highlight: Option<&str>) -> Result<()> {
    let drink = catalog
        .get_drink(id)
        .ok_or_else(|| anyhow!("Drink {} not found", id))?;

    println!("{}", drink.name.bold().blue());
    println!("{} · {}", drink.category, drink.caffeine_level());
    println!("{}", drink.description);
    if !drink.flavor_notes.is_empty() {
        println!("Flavor: {}", drink.flavor_notes.join(", ").italic());
    }

    println!("\n{}", "Ingredients:".bold());
    for ingredient in &drink.ingredients {
        let lit = highlight.is_some_and(|b| ingredient.has_benefit(b));
        let name = if lit {
            ingredient.name.yellow().bold()
        } else {
            ingredient.name.normal()
        };
        println!("{}{} - {}", "• ".green(), name, ingredient.description);
        if !ingredient.benefits.is_empty() {
            println!("    {}", ingredient.benefits.join(", ").dimmed());
        }
    }

    if let Some(benefit) = highlight {
        let sources: Vec<&str> = drink
            .ingredients_with_benefit(benefit)
            .map(|i| i.name.as_str())
            .collect();
        if sources.is_empty() {
            println!("\nNo ingredient lists {}", benefit);
        } else {
            println!("\n{} comes from: {}", benefit.yellow(), sources.join(", "));
        }
    }

    if !drink.preparation.is_empty() {
        println!("\n{}", "Preparation:".bold());
        for (step, text) in drink.preparation.iter().enumerate() {
            println!("{}. {}", (step + 1).to_string().green(), text);
        }
    }

    println!("\n{}", "Health benefits:".bold());
    for benefit in &drink.health_benefits {
        println!("{}{}", "• ".cyan(), benefit);
    }
    Ok(())
}

/// Handle the 'options' command
fn handle_options(catalog: Arc<Catalog>, category: DrinkCategory) {
    let mut session = BrowseSession::new(catalog);
    session.set_category(category);

    println!("{}", format!("Ingredients in {}:", category).bold().blue());
    for name in session.available_ingredients() {
        println!("{}{}", "• ".green(), name);
    }
    println!("{}", format!("Benefits in {}:", category).bold().blue());
    for benefit in session.available_benefits() {
        println!("{}{}", "• ".cyan(), benefit);
    }
}

/// Handle the 'blend' command
fn handle_blend(
    catalog: Arc<Catalog>,
    ids: &[String],
    remove: &[String],
    top: usize,
    json: bool,
) -> Result<()> {
    let mut session = BrowseSession::new(catalog);
    for id in ids {
        session.add_to_blend(id)?;
    }
    for name in remove {
        if !session.remove_from_blend(name) {
            println!("{} {} is not in the blend", "!".yellow(), name);
        }
    }

    let blend = session.blend();
    if json {
        let doc = json!({
            "entries": blend.entries().collect::<Vec<_>>(),
            "total_servings": blend.total_servings(),
            "top_benefits": blend.top_benefits(top),
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    print_blend(blend, top);
    Ok(())
}

/// Handle the 'surprise' command
fn handle_surprise(catalog: Arc<Catalog>, filters: &FilterArgs, seed: Option<u64>) -> Result<()> {
    let session = session_from_filters(catalog, filters)?;
    let picked = match seed {
        Some(seed) => session.pick_random(&mut StdRng::seed_from_u64(seed)),
        None => session.pick_random(&mut rand::rng()),
    };

    match picked {
        Some(drink) => print_drink_line(drink, None),
        None => println!("{}", "Nothing matches these filters".yellow()),
    }
    Ok(())
}

fn print_results(ranked: &[Candidate<'_>], with_scores: bool) {
    if ranked.is_empty() {
        println!("{}", "No drinks match these filters".yellow());
        return;
    }
    println!("{}", format!("{} drinks:", ranked.len()).bold().blue());
    for (rank, candidate) in ranked.iter().enumerate() {
        print!("{}. ", (rank + 1).to_string().green());
        print_drink_line(candidate.drink, with_scores.then_some(candidate.focus_score));
    }
}

fn print_drink_line(drink: &Drink, focus_score: Option<usize>) {
    let score = focus_score
        .map(|s| format!(" - Focus match: {}", s))
        .unwrap_or_default();
    println!("{} ({}){}", drink.name.bold(), drink.id, score);
    println!("   {}", drink.health_benefits.join(", ").dimmed());
}

fn print_blend(blend: &BlendAccumulator, top: usize) {
    if blend.is_empty() {
        println!("{}", "The blend is empty".yellow());
        return;
    }

    println!("{}", "Your blend:".bold().blue());
    for entry in blend.entries() {
        println!(
            "{}{} x{} (from {})",
            "• ".green(),
            entry.name.bold(),
            entry.count,
            entry.sources.join(", ")
        );
    }

    println!(
        "\n{} {} health touchpoints",
        "Health profile:".bold().blue(),
        blend.distinct_benefit_count()
    );
    for total in blend.top_benefits(top) {
        println!("{}{} ({})", "• ".cyan(), total.benefit, total.total);
    }
}
