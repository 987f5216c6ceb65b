//! Report rendering: spinner, section headings, colorized totals.

use brawl_common::progress_indicator::ProgressIndicator;
use brawl_common::{LevelCost, UpgradeRequest};
use owo_colors::OwoColorize;
use std::time::Duration;

/// How long each "calculating" spinner lingers on an interactive
/// terminal. Pure theater; skipped entirely when output is piped.
const REVEAL_DELAY: Duration = Duration::from_millis(600);

pub fn print_leveling(request: &UpgradeRequest, leveling: LevelCost) {
    println!();
    pause("Calculating level-up resources...");

    heading("Level-Up Resources");
    println!(
        "Level {} to {}:",
        request.initial_level.bold(),
        request.target_level.bold()
    );
    println!();
    println!("{}: {}", "Gold".bright_yellow(), leveling.gold);
    println!("{}: {}", "Power Points".purple(), leveling.power_points);
}

pub fn print_gears(request: &UpgradeRequest, gear_gold: u64) {
    println!();
    pause("Calculating gear resources...");

    heading("Gear Resources");
    println!(
        "{}: {}",
        "Gadgets".bright_green(),
        request.gadget_amount
    );
    println!("{}: {}", "Normal gears".white(), request.normal_gear_amount);
    println!("{}: {}", "Epic gears".purple(), request.epic_gear_amount);
    println!("{}: {}", "Mythic gears".red(), request.mythic_gear_amount);
    println!(
        "{}: {}",
        "Star powers".bright_yellow(),
        request.starpower_amount
    );
    println!(
        "{}: {}",
        "Hypercharge".purple(),
        if request.hypercharge { "yes" } else { "no" }
    );
    println!();
    println!("{}: {}", "Gold".bright_yellow(), gear_gold);
}

pub fn print_total(leveling: LevelCost, gear_gold: u64) {
    println!();
    heading("Total");
    println!("{}: {}", "Gold".bright_yellow(), leveling.gold + gear_gold);
    println!("{}: {}", "Power Points".purple(), leveling.power_points);
    println!();
}

fn heading(title: &str) {
    println!("{}", title.bold().underline());
    println!();
}

fn pause(message: &str) {
    let spinner = ProgressIndicator::new(message);
    if spinner.enabled() {
        std::thread::sleep(REVEAL_DELAY);
    }
    spinner.finish();
}
