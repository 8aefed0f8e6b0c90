//! Pure formatting functions for UI output.
//!
//! This module contains all display logic separated from user interaction.

use console::style;

use crate::boundary::BoundaryWarning;

const RULE: &str = "=================================";

/// Values reported once the tag has been created and pushed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSummary {
    pub version: String,
    pub ticket: String,
    pub qa_version: usize,
    pub tag: String,
}

/// Print the tool header.
pub fn display_banner() {
    println!("{}", style("Automated QA Git Tag").blue().bold());
    println!("{}", RULE);
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Print a labelled value, e.g. `Package Version: 1.2.0`.
pub fn display_field(label: &str, value: &str) {
    println!("  {} {}", style(format!("{}:", label)).bold(), style(value).green());
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// List the tags that already share the new tag's prefix.
pub fn display_existing_tags(tags: &[String]) {
    if tags.is_empty() {
        return;
    }

    println!("\n{}", style("Existing related tags:").blue());
    for tag in tags {
        println!("  - {}", tag);
    }
}

/// Show the tag about to be created.
pub fn display_proposed_tag(tag: &str) {
    println!("\n{}", style("Tag to create:").bold());
    println!("  {}", style(tag).green());
}

/// Show the operator-cancelled message.
pub fn display_cancelled(message: &str) {
    println!("{} {}", style("✗").yellow(), message);
}

/// Print the final summary block.
pub fn display_summary(summary: &TagSummary) {
    println!("\n{}", style(RULE).blue());
    println!("{}", style("Summary:").blue().bold());
    println!("  Package Version: {}", summary.version);
    println!("  Ticket Number:   {}", summary.ticket);
    println!("  QA Version:      {}", summary.qa_version);
    println!("  Created Tag:     {}", summary.tag);
    println!("{}", RULE);
}
