//! licgen CLI
//!
//! Usage:
//!   licgen [OPTIONS] [ID]
//!
//! Options:
//!   -n, --name <NAME>        Copyright holder substituted for {{name}}
//!   -y, --year <YEAR>        Year substituted for {{year}} (defaults to the current year)
//!   -t, --templates <DIR>    Directory of *.template files
//!   -l, --list               List available licenses
//!   -d, --details            Show permissions, conditions and limitations
//!   -h, --help               Print help

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use licgen::catalog::template_files;
use licgen::{
    command_preview, current_year, lint, render, render_details, Config, DetailsConfig,
    LicenseCatalog, LicenseRecord, RenderInput,
};

#[derive(Parser)]
#[command(name = "licgen")]
#[command(about = "Generate license text from templates")]
struct Cli {
    /// License id to generate (see --list)
    id: Option<String>,

    /// Copyright holder substituted for {{name}}
    #[arg(short, long)]
    name: Option<String>,

    /// Year substituted for {{year}} (defaults to the current year)
    #[arg(short, long)]
    year: Option<String>,

    /// Directory of *.template files
    #[arg(short, long)]
    templates: Option<PathBuf>,

    /// Configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the license to a file instead of stdout
    #[arg(short, long, conflicts_with_all = ["details", "command", "list", "lint"])]
    output: Option<PathBuf>,

    /// List available licenses
    #[arg(short, long)]
    list: bool,

    /// Show the license's permissions, conditions and limitations
    #[arg(short, long)]
    details: bool,

    /// Print the equivalent licgen command instead of the license text
    #[arg(long)]
    command: bool,

    /// Prompt for the name and year the license uses
    #[arg(short, long)]
    interactive: bool,

    /// Report ignored or suspicious lines in every template
    #[arg(long)]
    lint: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load config
    let config = match &cli.config {
        Some(path) => match Config::from_file(path) {
            Ok(c) => c,
            Err(e) => fail(&format!("Error loading config '{}': {}", path.display(), e)),
        },
        None => Config::default(),
    };
    let config = match &cli.templates {
        Some(dir) => config.with_templates_dir(dir),
        None => config,
    };

    let color = config.color && !cli.no_color && std::env::var_os("NO_COLOR").is_none();
    if !color {
        colored::control::set_override(false);
    }

    if cli.lint {
        run_lint(&config);
        return;
    }

    if cli.id.is_none() && !cli.list {
        print_intro();
        return;
    }

    let catalog = match LicenseCatalog::from_dir(&config.templates_dir) {
        Ok((catalog, report)) => {
            tracing::info!(
                "loaded {} template(s), skipped {}",
                report.loaded.len(),
                report.skipped.len()
            );
            catalog
        }
        Err(e) => fail(&format!("Error: {}", e)),
    };
    if catalog.is_empty() {
        fail(&format!(
            "Error: no templates found in '{}'",
            config.templates_dir.display()
        ));
    }

    if cli.list {
        print_list(&catalog);
        return;
    }

    let Some(id) = cli.id.as_deref() else {
        return;
    };
    let record = match catalog.lookup(id) {
        Ok(record) => record,
        Err(e) => fail(&format!("Error: {}", e)),
    };

    if cli.details {
        println!("{}", record.name.bold());
        print!("{}", render_details(record, &DetailsConfig::new().with_color(color)));
        return;
    }

    let year_now = current_year();
    let mut input = RenderInput {
        name: cli.name.clone().or_else(|| config.default_name.clone()),
        year: cli.year.clone().or_else(|| config.default_year.clone()),
    };
    if cli.interactive {
        input = prompt_input(record, input, year_now);
    }

    if cli.command {
        println!("{}", command_preview(&record.id, &input));
        return;
    }

    let result = render(record, &input, year_now);
    if cli.name.is_some() && !result.show_name_field {
        tracing::warn!("license '{}' has no {{{{name}}}} placeholder; --name is ignored", record.id);
    }
    if cli.year.is_some() && !result.show_year_field {
        tracing::warn!("license '{}' has no {{{{year}}}} placeholder; --year is ignored", record.id);
    }

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, format!("{}\n", result.rendered_text)) {
                fail(&format!("Error writing '{}': {}", path.display(), e));
            }
            eprintln!("{} Wrote {} to {}", "✓".green().bold(), record.name, path.display());
        }
        None => println!("{}", result.rendered_text),
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    std::process::exit(1);
}

/// Ask for the values the license actually uses
fn prompt_input(record: &LicenseRecord, mut input: RenderInput, year_now: i32) -> RenderInput {
    let probe = render(record, &RenderInput::new(), year_now);

    if probe.show_name_field {
        let mut prompt = dialoguer::Input::<String>::new()
            .with_prompt("Full name")
            .allow_empty(true);
        if let Some(name) = input.name() {
            prompt = prompt.default(name.to_string());
        }
        match prompt.interact_text() {
            Ok(name) => input.name = Some(name),
            Err(e) => fail(&format!("Error reading name: {}", e)),
        }
    }

    if probe.show_year_field {
        let default_year = input
            .year()
            .map(str::to_string)
            .unwrap_or_else(|| year_now.to_string());
        let prompt = dialoguer::Input::<String>::new()
            .with_prompt("Year")
            .default(default_year)
            .validate_with(|year: &String| -> Result<(), &'static str> {
                if year.chars().all(|c| c.is_ascii_digit()) {
                    Ok(())
                } else {
                    Err("year must contain digits only")
                }
            });
        match prompt.interact_text() {
            Ok(year) => input.year = Some(year),
            Err(e) => fail(&format!("Error reading year: {}", e)),
        }
    }

    input
}

fn print_list(catalog: &LicenseCatalog) {
    let width = catalog.ids().iter().map(|id| id.len()).max().unwrap_or(0);
    for record in catalog.iter() {
        println!(
            "{}  {}",
            format!("{:<width$}", record.id, width = width).bold(),
            record.name
        );
    }
}

fn run_lint(config: &Config) {
    let files = match template_files(&config.templates_dir) {
        Ok(files) => files,
        Err(e) => fail(&format!("Error: {}", e)),
    };

    let mut total = 0;
    for path in &files {
        let filename = path.display().to_string();
        let source = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", filename, e);
                continue;
            }
        };
        for warning in lint::check(&source) {
            eprint!("{}", warning.format(&source, &filename));
            total += 1;
        }
    }

    if total == 0 {
        eprintln!("{} {} template(s) clean", "✓".green().bold(), files.len());
    } else {
        eprintln!(
            "{} {} warning(s) in {} template(s)",
            "✗".red().bold(),
            total,
            files.len()
        );
    }
}

fn print_intro() {
    println!(
        r#"licgen - Generate license text from templates

USAGE:
    licgen [OPTIONS] <ID>
    licgen --list

OPTIONS:
    -n, --name <NAME>      Copyright holder for {{{{name}}}}
    -y, --year <YEAR>      Year for {{{{year}}}} (defaults to the current year)
    -t, --templates <DIR>  Directory of *.template files
    -c, --config <FILE>    Configuration file (TOML)
    -o, --output <FILE>    Write to a file instead of stdout
    -l, --list             List available licenses
    -d, --details          Show permissions, conditions and limitations
    -i, --interactive      Prompt for name and year
        --command          Print the equivalent command line
        --lint             Check templates for ignored lines
    -h, --help             Print help

QUICK START:
    licgen mit --name "Jane Doe" > LICENSE"#
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_output_with_render_flags() {
        let cli = Cli::try_parse_from(["licgen", "mit", "-o", "LICENSE", "-n", "Ada"]).unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("LICENSE")));
        assert_eq!(cli.name.as_deref(), Some("Ada"));
    }

    #[test]
    fn test_output_rejected_with_stdout_only_modes() {
        for flag in ["--details", "--command", "--list", "--lint"] {
            let result = Cli::try_parse_from(["licgen", "mit", "-o", "LICENSE", flag]);
            let err = match result {
                Ok(_) => panic!("{} should conflict with --output", flag),
                Err(e) => e,
            };
            assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict, "{}", flag);
        }
    }
}
