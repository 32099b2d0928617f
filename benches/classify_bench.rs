// Performance benchmarks for essen-check classification

use essen_check::FoodChecker;
use std::time::Instant;

fn main() {
    println!("🏃 Essen-Check Performance Benchmarks\n");

    let checker = FoodChecker::new().expect("Failed to load databases");

    // Warmup
    let _ = checker.classify_all("Ei");

    bench_single_items(&checker);
    bench_multi_item_text(&checker);
    bench_dish_fallback(&checker);

    println!("\n✅ Benchmarks completed!");
}

fn bench_single_items(checker: &FoodChecker) {
    println!("📍 SINGLE ITEMS (keyword pass)");
    println!("─────────────────────────────");

    let items = vec!["Ei", "Spiegelei", "Rindfleisch", "Erdnussbutter", "Käse"];

    for item in items {
        let start = Instant::now();
        for _ in 0..1000 {
            let _ = checker.classify_single(item);
        }
        let duration = start.elapsed();

        println!(
            "  {:<15} → 1000 runs in {:.3}ms",
            item,
            duration.as_secs_f64() * 1000.0
        );
    }
    println!();
}

fn bench_multi_item_text(checker: &FoodChecker) {
    println!("📦 MULTI-ITEM TEXT (normalizer + keyword pass)");
    println!("──────────────────────────────────────────────");

    let texts = vec![
        "Mehl, Zucker, Eier, Vanille",
        "1. Mehl\n2. Eier\n3. Butter und Milch",
        "Mehl; Zucker; Salz; Mehl; MEHL",
    ];

    for text in texts {
        let start = Instant::now();
        for _ in 0..1000 {
            let _ = checker.classify_all(text);
        }
        let duration = start.elapsed();

        let items = checker.classify_all(text).len();
        println!(
            "  {} item(s) → 1000 runs in {:.3}ms",
            items,
            duration.as_secs_f64() * 1000.0
        );
    }
    println!();
}

fn bench_dish_fallback(checker: &FoodChecker) {
    println!("🍽️  DISH FALLBACK (unrecognized text)");
    println!("─────────────────────────────────────");

    let items = vec!["Vanille", "Fleisch", "Zucker"];

    for item in items {
        let start = Instant::now();
        for _ in 0..1000 {
            let _ = checker.classify_single(item);
        }
        let duration = start.elapsed();

        println!(
            "  {:<10} → 1000 runs in {:.3}ms",
            item,
            duration.as_secs_f64() * 1000.0
        );
    }

    let (categories, dishes) = checker.stats();
    println!("\n📊 Database Statistics");
    println!("─────────────────────────");
    println!("  Allergen categories: {}", categories);
    println!("  Known dishes: {}", dishes);
}
