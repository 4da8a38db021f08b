use std::{
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Parser;
use cwmark::{
    convert_file,
    io::{read_message, strip_final_newline},
    parse_text, parse_tree, rewrite,
};
use log::info;
use rayon::prelude::*;

#[derive(Parser)]
#[command(version, about = "Convert Chatwork markup to Markdown")]
struct Cli {
    /// Rewrite files in place
    #[arg(long = "in-place", requires = "files", conflicts_with = "tree")]
    in_place: bool,
    /// Print the parsed node tree instead of Markdown
    #[arg(long = "tree")]
    tree: bool,
    /// Chatwork message files to convert
    files: Vec<PathBuf>,
}

fn render(text: &str, tree: bool) -> anyhow::Result<String> {
    if tree {
        let dump = parse_tree(text)?.map(|t| t.dump()).unwrap_or_default();
        Ok(dump.trim_end_matches('\n').to_string())
    } else {
        Ok(parse_text(text)?)
    }
}

fn process_file(path: &Path, cli: &Cli) -> anyhow::Result<Option<String>> {
    info!("converting {}", path.display());
    if cli.in_place {
        rewrite(path)?;
        return Ok(None);
    }
    if !cli.tree {
        return convert_file(path).map(Some);
    }
    render(&read_message(path)?, true)
        .with_context(|| format!("failed to convert {}", path.display()))
        .map(Some)
}

/// Entry point for the command-line converter.
///
/// Reads standard input when no files are given, otherwise converts every
/// file in parallel and prints the results in argument order. With
/// `--in-place` each file is overwritten with its Markdown instead.
///
/// # Examples
///
/// ```sh
/// # Convert a saved message and print Markdown
/// cwmark message.txt
///
/// # Convert in place
/// cwmark --in-place message.txt
///
/// # Inspect the parsed tree
/// echo '[info][title]Hi[/title][/info]' | cwmark --tree
/// ```
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if cli.files.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        println!("{}", render(strip_final_newline(&input), cli.tree)?);
        return Ok(());
    }

    let results: Vec<_> = cli
        .files
        .par_iter()
        .map(|path| process_file(path, &cli))
        .collect();
    for result in results {
        if let Some(out) = result? {
            println!("{out}");
        }
    }

    Ok(())
}
