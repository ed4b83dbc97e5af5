//! Plain-text rendering of the summary projection and the turn log.

use sleuth_core::engine::DeductionEngine;
use sleuth_core::engine::summary::StatusSummary;
use sleuth_core::model::category::Category;

pub fn print_log(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

pub fn print_summary(engine: &DeductionEngine) {
    let summary = engine.summary();

    println!("Solution:");
    for category in Category::ALL {
        match summary.solution.get(&category) {
            Some(card) => println!("  {category}: {card}"),
            None => println!("  {category}: ?"),
        }
    }

    println!();
    print_table(&summary);

    println!();
    println!("Still possible:");
    for category in Category::ALL {
        println!(
            "  {category}: {}",
            summary.possibilities[&category].join(", ")
        );
    }

    let history = engine.shown_history();
    if history.values().any(|cards| !cards.is_empty()) {
        println!();
        println!("Cards you have shown:");
        for (opponent, cards) in history {
            if !cards.is_empty() {
                println!("  {opponent}: {}", cards.join(", "));
            }
        }
    }
}

fn print_table(summary: &StatusSummary) {
    let mut widths: Vec<usize> = summary
        .header
        .iter()
        .map(|title| title.chars().count())
        .collect();
    for row in &summary.rows {
        widths[0] = widths[0].max(row.card.chars().count());
        for (column, mark) in row.marks.iter().enumerate() {
            widths[column + 1] = widths[column + 1].max(mark.chars().count());
        }
    }

    print_row(summary.header.iter().map(String::as_str), &widths);
    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    println!("{}", rule.join("  "));
    for row in &summary.rows {
        let cells = std::iter::once(row.card.as_str()).chain(row.marks.iter().copied());
        print_row(cells, &widths);
    }
}

fn print_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    println!("{}", padded.join("  ").trim_end());
}
