use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use pagetree_tree::{build_tree, ElementType, IdGenerator, Page, Tree, TreeResult};
use std::fs;
use std::path::PathBuf;

use crate::config::Config;

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Recognition result (page JSON) to normalize
    pub input: PathBuf,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

pub fn build(args: BuildArgs, _config: &Config) -> Result<()> {
    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let page: Page = serde_json::from_str(&source)
        .with_context(|| format!("Invalid page JSON in {}", args.input.display()))?;

    let tree = build_tree(&page, &mut IdGenerator::new())?;
    tree.check_integrity()?;

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&tree)?),
        "text" => {
            print_item(&tree, &tree.root_id, 0)?;
            println!();
            println!("   {} {} items", "✓".green(), tree.len());
        }
        other => {
            return Err(anyhow::anyhow!(
                "Invalid format: {}. Use: text or json",
                other
            ))
        }
    }

    Ok(())
}

fn print_item(tree: &Tree, id: &str, depth: usize) -> TreeResult<()> {
    let item = tree.get(id)?;
    let kind = format!("{:?}", item.item_type).to_lowercase();
    let kind = match item.item_type {
        ElementType::Page => kind.bold(),
        ElementType::Graphic => kind.magenta(),
        ElementType::Word | ElementType::Symbol => kind.normal(),
        _ => kind.cyan(),
    };

    let offset = item.parent_relative_offset;
    let text = match item.item_type {
        ElementType::Word => item
            .data
            .text
            .as_deref()
            .map(|text| format!(" {:?}", text))
            .unwrap_or_default(),
        _ => String::new(),
    };

    println!(
        "{}{} #{}{} {}",
        "  ".repeat(depth),
        kind,
        item.id,
        text,
        format!("@ ({}, {})", offset.x, offset.y).dimmed()
    );

    for child in &item.children {
        print_item(tree, child, depth + 1)?;
    }
    Ok(())
}
