// Essen-Check CLI Tool
// Command-line interface for allergen risk classification

use clap::Parser;
use essen_check::{FoodChecker, RiskLevel};

/// Allergen Checker - Classify German ingredient text into risk levels
#[derive(Parser, Debug)]
#[command(name = "essen-check")]
#[command(about = "Classify German food/ingredient text into allergen risk levels", long_about = None)]
#[command(version)]
struct Args {
    /// Ingredient text; commas, semicolons, newlines and "und" separate
    /// multiple items (e.g. "Mehl, Zucker und Eier")
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Show matched allergen category ids for each result
    #[arg(short, long)]
    allergens: bool,

    /// List known dishes, optionally filtered by this substring
    #[arg(short, long, value_name = "QUERY", num_args = 0..=1)]
    dishes: Option<Option<String>>,

    /// Show detailed information
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), essen_check::ConfigError> {
    let args = Args::parse();

    if args.verbose {
        println!("🔍 Loading allergen databases...");
    }

    let checker = FoodChecker::new()?;

    if args.verbose {
        let (categories, dishes) = checker.stats();
        println!(
            "✅ Database loaded: {} allergen categories, {} known dishes\n",
            categories, dishes
        );
    }

    if let Some(query) = &args.dishes {
        list_dishes(&checker, query.as_deref().unwrap_or(""));
        return Ok(());
    }

    let Some(text) = &args.text else {
        println!("❌ Nothing to do: pass ingredient text or --dishes.");
        return Ok(());
    };

    let results = checker.classify_all(text);

    if results.is_empty() {
        println!("❌ No items found in input.");
        return Ok(());
    }

    println!("✅ Checked {} item(s):\n", results.len());

    for (idx, result) in results.iter().enumerate() {
        print!("{}. ", idx + 1);
        print!("{} {:<20}", level_icon(result.level), result.text);
        println!("→ {}", result.label());

        if args.allergens && !result.matched.is_empty() {
            print!("      Allergens: {}", result.matched.join(", "));
            if !result.via_dishes.is_empty() {
                print!(" (via known dishes)");
            }
            println!();
        }

        if args.allergens && result.is_safe_exception() {
            println!("      Tolerated: {}", result.suppressed.join(", "));
        }

        println!();
    }

    if args.verbose {
        println!("─────────────────────────────────────────────────");
        println!("✨ Classification completed!");
    }

    Ok(())
}

fn list_dishes(checker: &FoodChecker, query: &str) {
    let dishes = checker.search_dishes(query);

    if dishes.is_empty() {
        println!("❌ No dishes matching '{}'.", query);
        return;
    }

    println!("🍽️  {} dish(es):\n", dishes.len());
    for dish in dishes {
        let result = checker
            .classify_single(&dish.name)
            .map(|r| r.label())
            .unwrap_or("Nicht erkannt");
        println!(
            "  {:<32} [{}] — {}",
            dish.name,
            dish.allergens.join(", "),
            result
        );
    }
}

/// Icon matching the severity of a result
fn level_icon(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Deadly => "⛔",
        RiskLevel::Dangerous => "🟠",
        RiskLevel::Caution => "🟡",
        RiskLevel::Safe => "✅",
    }
}
