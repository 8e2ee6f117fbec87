// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::colors;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "partline")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Assemble standardized product-listing lines for car parts and oils")]
#[command(
    long_about = "Assemble standardized product-listing lines for car parts and oils.\n\n\
    Build a listing from structured fields, copy it to the clipboard, and keep\n\
    a bounded history of everything you copied."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Assemble a parts listing line
    #[command(after_help = colors::examples("\
Examples:
  partline parts --name \"подшипник ступицы\" --brand M-TEX \\
      --entry \"VW:passat B5:1974:1997\"       Name, brand, one car entry
  partline parts -e VW:Golf -e VW:Passat      Two models under one car brand
  partline parts -e \"BMW:X5:2005:\"            Open-ended production range
  partline parts -e \"VW:eGOLF:::keep\"         Keep the model's casing
  partline parts --name подшипник --copy      Copy result, record in history

Entry syntax: car-brand:model:year-from:year-to[:keep]
  Trailing segments may be omitted; years are 2 or 4 digits or empty."))]
    Parts {
        /// Product name (first word is capitalized, space runs collapse)
        #[arg(long, value_parser = non_empty_string)]
        name: Option<String>,

        /// Manufacturer brand (rendered in quotes)
        #[arg(long, value_parser = non_empty_string)]
        brand: Option<String>,

        /// Car entry as car-brand:model:year-from:year-to[:keep] (repeatable)
        #[arg(long = "entry", short = 'e', value_name = "SPEC", value_parser = non_empty_string)]
        entries: Vec<String>,

        /// Copy the result to the clipboard and record it in history
        #[arg(long)]
        copy: bool,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Assemble an oil listing line
    #[command(after_help = colors::examples("\
Examples:
  partline oil --type Моторное --brand HYUNDAI/XTeer \\
      --viscosity 15w40 --spec \"HD 7000 CI-4\" --volume 1л
  partline oil --type Трансмиссионное --viscosity 75w90 --volume 4л
  partline oil --type Моторное --copy         Copy result, record in history"))]
    Oil {
        /// Oil kind, rendered lowercased (e.g. Моторное)
        #[arg(long = "type", value_name = "TYPE", value_parser = non_empty_string)]
        oil_type: Option<String>,

        /// Oil brand (rendered in quotes)
        #[arg(long, value_parser = non_empty_string)]
        brand: Option<String>,

        /// Viscosity grade (e.g. 15w40)
        #[arg(long, value_parser = non_empty_string)]
        viscosity: Option<String>,

        /// Manufacturer specification (e.g. "HD 7000 CI-4")
        #[arg(long = "spec", value_name = "SPEC", value_parser = non_empty_string)]
        specification: Option<String>,

        /// Package volume (e.g. 1л)
        #[arg(long, value_parser = non_empty_string)]
        volume: Option<String>,

        /// Copy the result to the clipboard and record it in history
        #[arg(long)]
        copy: bool,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show previously copied results, newest first
    History {
        /// Show at most this many items
        #[arg(long, short = 'n', value_name = "N")]
        limit: Option<usize>,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Rebuild the listing from a history item and print its result
    #[command(arg_required_else_help = true)]
    Restore {
        /// History item ID (as shown by 'partline history')
        id: String,

        /// Copy the restored result and record it as a new history item
        #[arg(long)]
        copy: bool,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Delete all history, including the persisted file
    Clear,

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
