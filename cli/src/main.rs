//! petiform CLI - legal-filing formatting tool

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use petiform::{
    classify_text, detect_format_from_path, extract_text_from_path, DocxOptions, FormatOptions,
    JsonFormat, Role,
};

#[derive(Parser)]
#[command(name = "petiform")]
#[command(version)]
#[command(about = "Classify and format legal filings into styled DOCX", long_about = None)]
struct Cli {
    /// Input file (.txt, .pdf, or .docx)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output DOCX file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a filing and write a styled DOCX
    Docx {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (input name with .docx extension if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Document heading (defaults to "Petição")
        #[arg(long)]
        title: Option<String>,

        /// Emit no document heading
        #[arg(long, conflicts_with = "title")]
        no_title: bool,

        /// Override a paragraph role, e.g. --set 3=titulo (1-based, repeatable)
        #[arg(long = "set", value_name = "N=ROLE")]
        overrides: Vec<String>,

        /// Disable parallel classification
        #[arg(long)]
        sequential: bool,
    },

    /// Print a review preview with the suggested role per paragraph
    Preview {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Override a paragraph role, e.g. --set 3=titulo (1-based, repeatable)
        #[arg(long = "set", value_name = "N=ROLE")]
        overrides: Vec<String>,
    },

    /// Output the styled-paragraph list as JSON
    Json {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Override a paragraph role, e.g. --set 3=titulo (1-based, repeatable)
        #[arg(long = "set", value_name = "N=ROLE")]
        overrides: Vec<String>,
    },

    /// Show input format and per-role paragraph counts
    Info {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Docx {
            input,
            output,
            title,
            no_title,
            overrides,
            sequential,
        }) => cmd_docx(
            &input,
            output.as_deref(),
            title,
            no_title,
            &overrides,
            sequential,
        ),
        Some(Commands::Preview { input, overrides }) => cmd_preview(&input, &overrides),
        Some(Commands::Json {
            input,
            output,
            compact,
            overrides,
        }) => cmd_json(&input, output.as_deref(), compact, &overrides),
        Some(Commands::Info { input }) => cmd_info(&input),
        None => {
            if let Some(input) = cli.input {
                cmd_docx(&input, cli.output.as_deref(), None, false, &[], false)
            } else {
                println!("{}", "Usage: petiform <FILE> [OUTPUT]".yellow());
                println!("       petiform --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Parse repeated `N=ROLE` override arguments; paragraph numbers are
/// 1-based on the command line.
fn parse_overrides(args: &[String]) -> Result<HashMap<usize, Role>, String> {
    let mut overrides = HashMap::new();
    for arg in args {
        let (number, role) = arg
            .split_once('=')
            .ok_or_else(|| format!("invalid override '{arg}', expected N=ROLE"))?;
        let number: usize = number
            .trim()
            .parse()
            .map_err(|_| format!("invalid paragraph number in '{arg}'"))?;
        if number == 0 {
            return Err(format!("paragraph numbers start at 1 in '{arg}'"));
        }
        let role: Role = role.parse()?;
        overrides.insert(number - 1, role);
    }
    Ok(overrides)
}

fn build_options(
    overrides: &[String],
    sequential: bool,
) -> Result<FormatOptions, Box<dyn std::error::Error>> {
    let overrides = parse_overrides(overrides)?;
    let mut options = FormatOptions::new().with_overrides(overrides);
    if sequential {
        options = options.sequential();
    }
    Ok(options)
}

fn cmd_docx(
    input: &Path,
    output: Option<&Path>,
    title: Option<String>,
    no_title: bool,
    overrides: &[String],
    sequential: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| input.with_extension("docx"));

    let options = build_options(overrides, sequential)?;
    log::debug!(
        "formatting {} with {} override(s)",
        input.display(),
        options.overrides.len()
    );
    let paragraphs = petiform::format_file(input, &options)?;

    let mut docx_options = DocxOptions::default();
    if no_title {
        docx_options = docx_options.without_title();
    } else if let Some(title) = title {
        docx_options = docx_options.with_title(title);
    }

    petiform::render::to_docx_file(&paragraphs, &docx_options, &output)?;

    println!(
        "{} {} paragraph(s) written to {}",
        "OK".green().bold(),
        paragraphs.len(),
        output.display()
    );
    Ok(())
}

fn cmd_preview(input: &Path, overrides: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let options = build_options(overrides, false)?;
    let text = extract_text_from_path(input)?;

    for (paragraph, assignment) in classify_text(&text, &options) {
        let role = assignment.final_role();
        let label = if assignment.is_overridden() {
            format!("{} (manual)", role.label_pt())
        } else {
            role.label_pt().to_string()
        };
        println!(
            "{} {}",
            format!("Parágrafo {}:", paragraph.index + 1).bold(),
            label.cyan()
        );
        println!("{}", paragraph.text);
        println!("{}", "---".dimmed());
    }
    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    overrides: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let options = build_options(overrides, false)?;
    let paragraphs = petiform::format_file(input, &options)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = petiform::render::to_json(&paragraphs, format)?;

    match output {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let format = detect_format_from_path(input)?;
    let text = extract_text_from_path(input)?;
    let classified = classify_text(&text, &FormatOptions::default());

    let mut counts: HashMap<Role, usize> = HashMap::new();
    for (_, assignment) in &classified {
        *counts.entry(assignment.final_role()).or_default() += 1;
    }

    println!("{} {}", "Input:".bold(), input.display());
    println!("{} {}", "Format:".bold(), format);
    println!("{} {}", "Paragraphs:".bold(), classified.len());
    for role in Role::ALL {
        let count = counts.get(&role).copied().unwrap_or(0);
        println!("  {:<16} {}", role.label_pt(), count);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_overrides() {
        let overrides =
            parse_overrides(&["1=titulo".to_string(), "3=Citação".to_string()]).unwrap();
        assert_eq!(overrides.get(&0), Some(&Role::Title));
        assert_eq!(overrides.get(&2), Some(&Role::Quotation));
    }

    #[test]
    fn test_parse_overrides_rejects_bad_input() {
        assert!(parse_overrides(&["titulo".to_string()]).is_err());
        assert!(parse_overrides(&["0=titulo".to_string()]).is_err());
        assert!(parse_overrides(&["2=heading".to_string()]).is_err());
        assert!(parse_overrides(&["x=corpo".to_string()]).is_err());
    }
}
