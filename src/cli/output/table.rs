//! Table output formatting for CLI commands
//!
//! Candidate cards and the static menu table, rendered with comfy-table.

use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};
use std::env;

use crate::domain::models::{rank_label, Candidate, CandidateSet, Context, MenuEntry};

/// Table formatter for CLI output
pub struct TableFormatter {
    use_colors: bool,
    max_width: Option<u16>,
}

impl TableFormatter {
    pub fn new() -> Self {
        Self {
            use_colors: supports_color(),
            max_width: None,
        }
    }

    pub const fn with_config(use_colors: bool, max_width: Option<u16>) -> Self {
        Self {
            use_colors,
            max_width,
        }
    }

    /// One row per shortlisted candidate, in rank order
    pub fn format_candidates(&self, candidates: &CandidateSet) -> String {
        let mut table = self.create_base_table();

        table.set_header(vec![
            Cell::new("Rank").add_attribute(Attribute::Bold),
            Cell::new("Menu").add_attribute(Attribute::Bold),
            Cell::new("Why").add_attribute(Attribute::Bold),
        ]);

        for (index, candidate) in candidates.iter().enumerate() {
            let name_cell = if self.use_colors {
                Cell::new(&candidate.name)
                    .fg(rank_color(index))
                    .add_attribute(Attribute::Bold)
            } else {
                Cell::new(&candidate.name)
            };

            table.add_row(vec![
                Cell::new(rank_label(index)),
                name_cell,
                Cell::new(&candidate.reason),
            ]);
        }

        table.to_string()
    }

    /// Highlighted card for the roulette winner
    ///
    /// Titled with the meal time; ends with a nearby-search hint when a
    /// location was given.
    pub fn format_winner(&self, winner: &Candidate, context: &Context) -> String {
        let mut table = self.create_base_table();

        let title = Cell::new(format!("🎉 오늘의 {} 메뉴는 바로!", context.meal_time.label()))
            .add_attribute(Attribute::Bold);
        table.set_header(vec![title]);

        let name = Cell::new(&winner.name).add_attribute(Attribute::Bold);
        table.add_row(vec![if self.use_colors {
            name.fg(Color::Green)
        } else {
            name
        }]);
        table.add_row(vec![Cell::new(&winner.reason)]);

        if !context.location.is_empty() {
            table.add_row(vec![Cell::new(format!(
                "📍 {} 근처에서 맛집을 찾아보세요!",
                context.location
            ))]);
        }

        table.to_string()
    }

    /// The built-in menu table
    pub fn format_menu(&self, entries: &[&MenuEntry]) -> String {
        let mut table = self.create_base_table();

        table.set_header(vec![
            Cell::new("Menu").add_attribute(Attribute::Bold),
            Cell::new("Tier").add_attribute(Attribute::Bold),
            Cell::new("Tags").add_attribute(Attribute::Bold),
        ]);

        for entry in entries {
            let tier_cell = if self.use_colors {
                Cell::new(tier_label(entry.price_tier)).fg(tier_color(entry.price_tier))
            } else {
                Cell::new(tier_label(entry.price_tier))
            };

            table.add_row(vec![
                Cell::new(entry.name),
                tier_cell,
                Cell::new(entry.tags.join(", ")),
            ]);
        }

        table.to_string()
    }

    fn create_base_table(&self) -> Table {
        let mut table = Table::new();

        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        if let Some(width) = self.max_width {
            table.set_width(width);
        }

        table
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn supports_color() -> bool {
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    console::colors_enabled()
}

const fn rank_color(index: usize) -> Color {
    match index {
        0 => Color::Yellow,
        1 => Color::White,
        2 => Color::DarkYellow,
        _ => Color::Grey,
    }
}

const fn tier_color(tier: u8) -> Color {
    match tier {
        1 => Color::Green,
        2 => Color::Cyan,
        _ => Color::Magenta,
    }
}

/// Price tier as won signs
pub fn tier_label(tier: u8) -> String {
    "₩".repeat(usize::from(tier))
}
