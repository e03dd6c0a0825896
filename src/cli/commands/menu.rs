//! Implementation of the `menu-roulette menu` command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::domain::models::{entries_for_tier, MenuEntry, MENU_TABLE};

#[derive(Args, Debug)]
pub struct MenuArgs {
    /// Only show one price tier (1 cheap, 2 moderate, 3 pricey)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=3))]
    pub tier: Option<u8>,
}

#[derive(Debug, Serialize)]
pub struct MenuOutput {
    pub tier: Option<u8>,
    pub entries: Vec<&'static MenuEntry>,
}

impl MenuOutput {
    pub fn for_tier(tier: Option<u8>) -> Self {
        let entries = match tier {
            Some(tier) => entries_for_tier(MENU_TABLE, tier).collect(),
            None => MENU_TABLE.iter().collect(),
        };
        Self { tier, entries }
    }
}

impl CommandOutput for MenuOutput {
    fn to_human(&self) -> String {
        TableFormatter::new().format_menu(&self.entries)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(args: &MenuArgs, json_mode: bool) -> Result<()> {
    output(&MenuOutput::for_tier(args.tier), json_mode);
    Ok(())
}
