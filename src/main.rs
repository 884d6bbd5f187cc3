use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

use spec_guard::cli::{Cli, ColorChoice, Commands, ConfigAction, InitArgs, RulesArgs, ValidateArgs};
use spec_guard::config::{
    CONFIG_FILE_NAME, ConfigLoader, FileConfigLoader, ResolvedRules, ValidationConfig,
};
use spec_guard::output::{
    ColorMode, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter,
};
use spec_guard::validator::{SpecValidator, ValidationResult};
use spec_guard::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_VALIDATION_FAILED, Result, SpecGuardError};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Validate(args) => run_validate(args, &cli),
        Commands::Rules(args) => run_rules(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => match &args.action {
            ConfigAction::Validate { config } => run_config_validate(config),
        },
    };

    std::process::exit(exit_code);
}

fn run_validate(args: &ValidateArgs, cli: &Cli) -> i32 {
    match run_validate_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_validate_impl(args: &ValidateArgs, cli: &Cli) -> Result<i32> {
    // 1. Load and resolve configuration (frozen before any evaluation)
    let config = load_config(args.config.as_deref(), args.root.as_deref(), cli)?;
    let rules = ResolvedRules::resolve(&config)?;

    let root = args.root.clone().unwrap_or_else(|| PathBuf::from("."));
    let validator = SpecValidator::new(rules, root);

    // 2. Validate the requested scope
    let results = collect_results(&validator, args)?;

    // 3. Format and write output
    let output = format_output(args, cli, &results)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    // 4. Exit code: 1 when any error-severity issue exists in scope
    let has_errors = results.iter().any(|r| r.error_count > 0);
    Ok(if has_errors {
        EXIT_VALIDATION_FAILED
    } else {
        EXIT_SUCCESS
    })
}

/// Batch vs single-file dispatch. Single results are wrapped in a
/// one-element list internally; the formatter distinguishes the two.
enum Scope {
    Single,
    Batch,
}

fn scope_of(args: &ValidateArgs) -> Scope {
    if args.all {
        return Scope::Batch;
    }
    match &args.target {
        Some(target) if target.is_file() => Scope::Single,
        _ => Scope::Batch,
    }
}

fn collect_results(
    validator: &SpecValidator,
    args: &ValidateArgs,
) -> Result<Vec<ValidationResult>> {
    if args.all {
        return validator.validate_all();
    }
    match &args.target {
        Some(target) if target.is_file() || !target.exists() => {
            Ok(vec![validator.validate_file(target)?])
        }
        Some(target) => validator.validate_directory(target),
        None => validator.validate_directory(Path::new(".")),
    }
}

fn format_output(args: &ValidateArgs, cli: &Cli, results: &[ValidationResult]) -> Result<String> {
    let color_mode = color_choice_to_mode(cli.color);
    let formatter: Box<dyn OutputFormatter> = match args.format {
        OutputFormat::Text => Box::new(
            TextFormatter::new(color_mode)
                .with_verbose(cli.verbose)
                .with_quiet(cli.quiet)
                .with_severity(args.severity),
        ),
        OutputFormat::Json => Box::new(JsonFormatter::new(args.severity)),
    };

    match scope_of(args) {
        Scope::Single => formatter.format_single(&results[0]),
        Scope::Batch => {
            let summary = SpecValidator::summarize(results);
            formatter.format_batch(results, &summary)
        }
    }
}

fn write_output(path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content)?;
            if !quiet {
                println!("Report written to {}", path.display());
            }
        }
        None => print!("{content}"),
    }
    Ok(())
}

/// Load the validation config. A missing config file falls back to
/// defaults; in verbose mode the fallback is reported once.
fn load_config(
    config_path: Option<&Path>,
    root: Option<&Path>,
    cli: &Cli,
) -> Result<ValidationConfig> {
    if cli.no_config {
        return Ok(ValidationConfig::default());
    }

    let loader = FileConfigLoader::with_root(root.map(Path::to_path_buf));
    if let Some(path) = config_path {
        return loader.load_from_path(path);
    }

    let config_file = root.map_or_else(|| PathBuf::from(CONFIG_FILE_NAME), |r| r.join(CONFIG_FILE_NAME));
    if cli.verbose > 0 && !config_file.exists() {
        eprintln!("Note: no {CONFIG_FILE_NAME} found, using builtin rules");
    }
    loader.load()
}

fn run_rules(args: &RulesArgs, cli: &Cli) -> i32 {
    match run_rules_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_rules_impl(args: &RulesArgs, cli: &Cli) -> Result<()> {
    let config = load_config(args.config.as_deref(), None, cli)?;
    let rules = ResolvedRules::resolve(&config)?;

    match args.format {
        OutputFormat::Json => {
            let listing: Vec<_> = rules.rules().iter().map(|r| &r.rule).collect();
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }
        OutputFormat::Text => {
            for resolved in rules.rules() {
                let rule = &resolved.rule;
                let state = if rule.enabled { "" } else { " (disabled)" };
                println!(
                    "{:<30} {:<8} {:<14} {}{state}",
                    rule.id,
                    rule.severity,
                    rule.category,
                    rule.check.name(),
                );
            }
        }
    }
    Ok(())
}

fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_init_impl(args: &InitArgs) -> Result<()> {
    if args.output.exists() && !args.force {
        return Err(SpecGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            args.output.display()
        )));
    }

    fs::write(&args.output, config_template())?;
    println!("Created configuration file: {}", args.output.display());
    Ok(())
}

fn config_template() -> &'static str {
    r#"# spec-guard configuration file

version = "1"

# Global on/off switch for validation
enabled = true

# Rule ids to suppress (run `spec-guard rules` for the full list)
disabled_rules = []

# Per-rule severity overrides
# [[overrides]]
# rule = "todo-marker"
# severity = "warning"

# Project-defined rules, evaluated after the builtins
# [[custom_rules]]
# name = "no-lorem-ipsum"
# description = "Placeholder prose must not ship"
# pattern = "(?i)lorem ipsum"
# severity = "warning"
# category = "clarity"
# check = "pattern-absent"
"#
}

fn run_config_validate(config_path: &Path) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    let loader = FileConfigLoader::new();
    let config = loader.load_from_path(config_path)?;
    let rules = ResolvedRules::resolve(&config)?;

    let custom = config.custom_rules.len();
    println!(
        "Configuration is valid: {} rules resolved ({custom} custom)",
        rules.rules().len()
    );
    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
