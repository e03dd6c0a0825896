//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};

use super::commands::init::InitArgs;
use super::commands::interactive::InteractiveArgs;
use super::commands::menu::MenuArgs;
use super::commands::recommend::RecommendArgs;

#[derive(Parser, Debug)]
#[command(name = "menu-roulette")]
#[command(about = "Situational meal recommender with a roulette pick", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default .menu-roulette/config.yaml
    Init(InitArgs),

    /// Recommend three dishes and spin the roulette once
    Recommend(RecommendArgs),

    /// Step through candidates, regenerate, and spin at your own pace
    Interactive(InteractiveArgs),

    /// Show the built-in menu table
    Menu(MenuArgs),
}
