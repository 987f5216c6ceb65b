//! Interactive question flow.
//!
//! Collects the upgrade request one answer at a time, re-prompting until
//! each answer parses and sits inside its allowed range. Gear questions
//! are gated by the target level; anything still locked keeps its default
//! quantity of zero, which is the precondition `gear_cost` relies on.

use brawl_common::cost_table::{MAX_LEVEL, MIN_LEVEL};
use brawl_common::request::{
    UpgradeRequest, GADGET_UNLOCK_LEVEL, GEAR_UNLOCK_LEVEL, HYPERCHARGE_LEVEL, MAX_EPIC_GEARS,
    MAX_GADGETS, MAX_MYTHIC_GEARS, MAX_NORMAL_GEARS, MAX_STARPOWERS, STARPOWER_UNLOCK_LEVEL,
};
use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};

/// Run the whole question flow and return the frozen request.
pub fn run_flow() -> io::Result<UpgradeRequest> {
    let mut request = UpgradeRequest::default();

    rule("Brawler Level");

    request.initial_level = ask_level(
        &format!("What is the brawler's current level? ({MIN_LEVEL}-{MAX_LEVEL}) "),
        MIN_LEVEL,
        MAX_LEVEL,
    )?;
    request.target_level = ask_target_level(request.initial_level)?;

    if request.target_level < GADGET_UNLOCK_LEVEL {
        return Ok(request);
    }

    rule("Gear");

    request.gadget_amount = ask_amount(
        &format!("How many {}? (0-{MAX_GADGETS}) ", "gadgets".bright_green()),
        MAX_GADGETS,
    )?;

    if request.target_level >= GEAR_UNLOCK_LEVEL {
        request.normal_gear_amount = ask_amount(
            &format!("How many {}? (0-{MAX_NORMAL_GEARS}) ", "normal gears".white()),
            MAX_NORMAL_GEARS,
        )?;
        request.epic_gear_amount = ask_amount(
            &format!("How many {}? (0-{MAX_EPIC_GEARS}) ", "epic gears".purple()),
            MAX_EPIC_GEARS,
        )?;
        request.mythic_gear_amount = ask_amount(
            &format!("How many {}? (0-{MAX_MYTHIC_GEARS}) ", "mythic gears".red()),
            MAX_MYTHIC_GEARS,
        )?;
    }

    if request.target_level >= STARPOWER_UNLOCK_LEVEL {
        request.starpower_amount = ask_amount(
            &format!(
                "How many {}? (0-{MAX_STARPOWERS}) ",
                "star powers".bright_yellow()
            ),
            MAX_STARPOWERS,
        )?;
    }

    if request.target_level == HYPERCHARGE_LEVEL {
        request.hypercharge = ask_hypercharge()?;
    }

    Ok(request)
}

/// A max-level brawler has nowhere left to go; skip the question.
fn ask_target_level(initial_level: u8) -> io::Result<u8> {
    if initial_level == MAX_LEVEL {
        return Ok(MAX_LEVEL);
    }
    ask_level(
        &format!("What is the target level? ({initial_level}-{MAX_LEVEL}) "),
        initial_level,
        MAX_LEVEL,
    )
}

fn ask_level(question: &str, min: u8, max: u8) -> io::Result<u8> {
    loop {
        let input = read_answer(question)?;
        match parse_level(&input, min, max) {
            Ok(level) => return Ok(level),
            Err(msg) => complain(&msg),
        }
    }
}

fn ask_amount(question: &str, max: u8) -> io::Result<u8> {
    loop {
        let input = read_answer(question)?;
        match parse_amount(&input, max) {
            Ok(amount) => return Ok(amount),
            Err(msg) => complain(&msg),
        }
    }
}

fn ask_hypercharge() -> io::Result<bool> {
    loop {
        let input = read_answer(&format!("{}? (y/N) ", "Hypercharge".purple()))?;
        match parse_yes_no(&input) {
            Ok(answer) => return Ok(answer),
            Err(msg) => complain(&msg),
        }
    }
}

/// Integer in `min..=max`.
fn parse_level(input: &str, min: u8, max: u8) -> Result<u8, String> {
    let level: u8 = input
        .trim()
        .parse()
        .map_err(|_| "Invalid value.".to_string())?;
    if level < min || level > max {
        return Err(format!("Choose a level between {min} and {max}."));
    }
    Ok(level)
}

/// Integer in `0..=max`.
fn parse_amount(input: &str, max: u8) -> Result<u8, String> {
    let amount: u8 = input
        .trim()
        .parse()
        .map_err(|_| "Invalid value.".to_string())?;
    if amount > max {
        return Err(format!("Choose between 0 and {max}."));
    }
    Ok(amount)
}

/// Empty input defaults to no.
fn parse_yes_no(input: &str) -> Result<bool, String> {
    match input.trim().to_lowercase().as_str() {
        "" | "n" | "no" => Ok(false),
        "y" | "yes" => Ok(true),
        _ => Err("Choose 'y' or 'n'.".to_string()),
    }
}

fn read_answer(question: &str) -> io::Result<String> {
    print!("{question}");
    io::stdout().flush()?;

    let mut input = String::new();
    let bytes = io::stdin().lock().read_line(&mut input)?;
    if bytes == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "stdin closed mid-flow",
        ));
    }
    Ok(input)
}

fn complain(message: &str) {
    println!("\n{}", message.yellow());
    divider();
}

fn rule(title: &str) {
    let width = terminal_width();
    let title = format!(" {title} ");
    let fill = width.saturating_sub(title.chars().count());
    let left = fill / 2;
    let right = fill - left;
    println!(
        "{}{}{}",
        "─".repeat(left).dimmed(),
        title.bold(),
        "─".repeat(right).dimmed()
    );
}

fn divider() {
    println!("{}", "─".repeat(terminal_width()).red().dimmed());
}

fn terminal_width() -> usize {
    let (_, cols) = console::Term::stdout().size();
    (cols as usize).clamp(20, 80)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_accept_boundaries() {
        assert_eq!(parse_level("1", 1, 11), Ok(1));
        assert_eq!(parse_level(" 11\n", 1, 11), Ok(11));
        assert_eq!(parse_level("7", 7, 11), Ok(7));
    }

    #[test]
    fn levels_reject_out_of_range_and_junk() {
        assert!(parse_level("0", 1, 11).is_err());
        assert!(parse_level("12", 1, 11).is_err());
        assert!(parse_level("6", 7, 11).is_err());
        assert!(parse_level("eleven", 1, 11).is_err());
        assert!(parse_level("", 1, 11).is_err());
        assert!(parse_level("-3", 1, 11).is_err());
    }

    #[test]
    fn amounts_use_inclusive_bounds() {
        assert_eq!(parse_amount("0", MAX_GADGETS), Ok(0));
        assert_eq!(parse_amount("2", MAX_GADGETS), Ok(2));
        assert!(parse_amount("3", MAX_GADGETS).is_err());

        assert_eq!(parse_amount("1", MAX_MYTHIC_GEARS), Ok(1));
        assert!(parse_amount("2", MAX_MYTHIC_GEARS).is_err());

        assert_eq!(parse_amount("6", MAX_NORMAL_GEARS), Ok(6));
        assert!(parse_amount("7", MAX_NORMAL_GEARS).is_err());
    }

    #[test]
    fn amounts_reject_junk() {
        assert!(parse_amount("two", MAX_STARPOWERS).is_err());
        assert!(parse_amount("-1", MAX_STARPOWERS).is_err());
        assert!(parse_amount("", MAX_EPIC_GEARS).is_err());
    }

    #[test]
    fn hypercharge_defaults_to_no() {
        assert_eq!(parse_yes_no("\n"), Ok(false));
        assert_eq!(parse_yes_no("n"), Ok(false));
        assert_eq!(parse_yes_no("NO"), Ok(false));
        assert_eq!(parse_yes_no("y"), Ok(true));
        assert_eq!(parse_yes_no("Yes"), Ok(true));
        assert!(parse_yes_no("maybe").is_err());
    }
}
