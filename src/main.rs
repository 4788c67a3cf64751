// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::{Context, Result};
use std::env;

// Use library instead of local modules
use turnberry_place::{filter, Config, FilterCriteria, FloorPlanRegistry, TypeFilter};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let config = Config::from_env().context("Failed to load configuration")?;

    match args.get(1).map(String::as_str) {
        Some("plans") => run_plans(args.get(2).map(String::as_str))?,
        Some("help") | Some("--help") | Some("-h") => print_usage(),
        Some(other) => {
            eprintln!("❌ Unknown command: {}", other);
            print_usage();
            std::process::exit(2);
        }
        None => run_ui_mode(&config)?,
    }

    Ok(())
}

fn print_usage() {
    println!("Usage:");
    println!("  turnberry              Open the terminal browser");
    println!("  turnberry plans [TYPE] Print floor plans (TYPE: all, 1-Bedroom, 2-Bedroom, 3-Bedroom, Penthouse, Estate)");
}

fn run_plans(plan_type: Option<&str>) -> Result<()> {
    let plan_type: TypeFilter = plan_type
        .unwrap_or("all")
        .parse()
        .context("Invalid plan type")?;

    let registry = FloorPlanRegistry::with_defaults();
    let criteria = FilterCriteria::default().with_type(plan_type);
    let plans = filter(registry.all(), &criteria);

    println!("🏢 Turnberry Place - Floor Plans ({})", plan_type);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    if plans.is_empty() {
        println!("No floor plans match.");
        return Ok(());
    }

    for plan in &plans {
        println!(
            "{:<8} {:<14} {:<11} {:>5}-{:<5} sq ft  ${}-${}",
            plan.id,
            plan.name,
            plan.plan_type.as_str(),
            plan.sqft_min,
            plan.sqft_max,
            plan.price_min,
            plan.price_max,
        );
    }
    println!("\n✓ {} of {} plans", plans.len(), registry.count());

    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode(config: &Config) -> Result<()> {
    println!("🖥️  Loading Turnberry Place browser...\n");
    println!("Starting UI... (Press 'q' to quit)\n");

    let mut app = ui::App::new(config, turnberry_place::default_testimonials());
    ui::run_ui(&mut app)?;

    println!("\n✅ UI closed successfully");

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_config: &Config) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use the web server: cargo run --bin turnberry-server --features server");
    std::process::exit(1);
}
