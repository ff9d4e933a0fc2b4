//! cms-seed - populate a headless CMS with fixture data
//!
//! Logs into the CMS admin API once, then creates fixture records one
//! request at a time: genres, tags, engines, platforms, a developer, and a
//! sample game linked to that developer.
//!
//! ## Usage
//!
//! ```bash
//! # Seed a local instance with the default admin account
//! cms-seed run
//!
//! # Seed a remote instance, failing the run if any record fails
//! cms-seed run --url https://cms.example.com --email ops@example.com --strict
//!
//! # Show what would be created
//! cms-seed list --detailed
//!
//! # Write a config file
//! cms-seed config init
//! ```
//!
//! Exit codes: 0 when the run completes, 1 when authentication or
//! configuration fails, 2 for a `--strict` run with failed records.

use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;
use tracing::error;

mod cli;
mod config;
mod fixtures;
mod http;
mod models;
mod output;
mod seeder;
mod utils;

use cli::Args;
use config::{AppConfig, ConfigFile, EnvConfig};
use output::{OutputFormat, SummaryFormatter};
use seeder::FixturePlan;
use utils::logger::{init_logger, LogLevel};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let env = EnvConfig::load();
    init_logger(LogLevel::from_verbose(
        args.verbose || env.verbose.unwrap_or(false),
    ));

    let result = match args.command {
        cli::Command::Run(run_args) => run_seed(run_args, &env).await,
        cli::Command::List(list_args) => {
            println!("{}", output::format_plan(&FixturePlan::default(), list_args.detailed));
            Ok(seeder::EXIT_OK)
        }
        cli::Command::Config(config_args) => manage_config(config_args, &env).map(|_| seeder::EXIT_OK),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            error!("{:#}", e);
            ExitCode::from(seeder::EXIT_FATAL)
        }
    }
}

/// Resolve configuration: defaults, then file, then environment, then flags
fn resolve_config(args: &cli::RunArgs, env: &EnvConfig) -> Result<AppConfig> {
    let file = ConfigFile::load_selected(args.config.as_deref(), env)?;

    let mut config = file.app.with_env(env);
    if let Some(url) = &args.url {
        config.base_url = url.clone();
    }
    if let Some(email) = &args.email {
        config.email = email.clone();
    }
    if let Some(password) = &args.password {
        config.password = password.clone();
    }
    if let Some(timeout) = args.timeout {
        config.timeout_secs = Some(timeout);
    }
    config.strict |= args.strict;

    config.validate()?;
    Ok(config)
}

async fn run_seed(args: cli::RunArgs, env: &EnvConfig) -> Result<u8> {
    let config = resolve_config(&args, env)?;
    let format = OutputFormat::from_str(&args.format)
        .ok_or_else(|| anyhow::anyhow!("Unknown output format: {}", args.format))?;
    output::progress_to_stderr(format.is_json());

    let result = seeder::run(&config, &FixturePlan::default()).await;
    let code = seeder::exit_code(&result, config.strict);

    match &result {
        Ok(summary) => {
            let mut formatter = SummaryFormatter::new(format);
            if !std::io::stdout().is_terminal() {
                formatter = formatter.no_color();
            }
            println!("{}", formatter.format_summary(summary));
            if code != seeder::EXIT_OK {
                output::progress(format_args!(
                    "✗ {} record(s) failed (strict mode)",
                    summary.failed
                ));
            }
        }
        Err(e) => output::progress(format_args!("❌ {e}")),
    }

    Ok(code)
}

fn manage_config(args: cli::ConfigArgs, env: &EnvConfig) -> Result<()> {
    match args.action {
        cli::ConfigAction::Init { output, force } => {
            let path = Path::new(&output);
            if path.exists() && !force {
                anyhow::bail!(
                    "Configuration file already exists: {output}. Use --force to overwrite."
                );
            }

            ConfigFile::default().save(path)?;
            println!("✓ Configuration file created: {output}");
            println!("\nEdit the file to customize your settings.");
        }

        cli::ConfigAction::Show { env: show_env, format } => {
            if show_env {
                env.print_summary();
            } else {
                println!("{}", render_config(env, &format)?);
            }
        }

        cli::ConfigAction::Validate { file } => {
            let path = validation_target(file.as_deref(), env);
            match ConfigFile::load(&path) {
                Ok(_) => {
                    println!("✓ Configuration file is valid: {path}");
                }
                Err(e) => {
                    println!("✗ Configuration file is invalid: {path}");
                    println!("  Error: {e:#}");
                    return Err(e);
                }
            }
        }
    }

    Ok(())
}

/// Render the configuration `run` would use, with the password masked
fn render_config(env: &EnvConfig, format: &str) -> Result<String> {
    let mut config = ConfigFile::load_selected(None, env)?;
    config.app = config.app.with_env(env);
    config.app.password = "********".to_string();

    let rendered = if format == "json" {
        serde_json::to_string_pretty(&config)?
    } else {
        serde_yaml::to_string(&config)?
    };
    Ok(rendered)
}

/// File checked by `config validate`: the selected file, or the path
/// `config init` writes to
fn validation_target(file: Option<&str>, env: &EnvConfig) -> String {
    ConfigFile::select(file, env)
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| config::DEFAULT_CONFIG_PATH.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_config_precedence() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("seed.yaml");
        std::fs::write(
            &path,
            "version: \"1.0\"\napp:\n  base_url: http://from-file:1337\n  email: file@example.com\n  timeout_secs: 10\n",
        )
        .unwrap();

        let env = EnvConfig {
            email: Some("env@example.com".to_string()),
            timeout: Some(20),
            ..Default::default()
        };
        let args = cli::RunArgs {
            config: Some(path.to_string_lossy().to_string()),
            timeout: Some(40),
            strict: true,
            ..Default::default()
        };

        let config = resolve_config(&args, &env).unwrap();
        assert_eq!(config.base_url, "http://from-file:1337");
        assert_eq!(config.email, "env@example.com");
        assert_eq!(config.timeout_secs, Some(40));
        assert_eq!(config.password, "Admin123!");
        assert!(config.strict);
    }

    #[test]
    fn test_resolve_config_rejects_bad_flag() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("seed.json");
        std::fs::write(&path, r#"{"version": "1.0"}"#).unwrap();

        let args = cli::RunArgs {
            config: Some(path.to_string_lossy().to_string()),
            url: Some("cms.example.com".to_string()),
            ..Default::default()
        };

        assert!(resolve_config(&args, &EnvConfig::default()).is_err());
    }

    fn env_file(dir: &Path, base_url: &str) -> EnvConfig {
        let path = dir.join("other.yaml");
        std::fs::write(
            &path,
            format!("version: \"1.0\"\napp:\n  base_url: {base_url}\n  password: secret\n"),
        )
        .unwrap();

        EnvConfig {
            config_file: Some(path.to_string_lossy().to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_show_uses_env_config_file() {
        let dir = tempdir().unwrap();
        let env = env_file(dir.path(), "http://from-env-file:1337");

        let resolved = resolve_config(&cli::RunArgs::default(), &env).unwrap();
        let shown = render_config(&env, "yaml").unwrap();

        assert_eq!(resolved.base_url, "http://from-env-file:1337");
        assert!(shown.contains("http://from-env-file:1337"));
        assert!(shown.contains("********"));
        assert!(!shown.contains("secret"));

        let json: serde_json::Value =
            serde_json::from_str(&render_config(&env, "json").unwrap()).unwrap();
        assert_eq!(json["app"]["base_url"], "http://from-env-file:1337");
    }

    #[test]
    fn test_validate_uses_env_config_file() {
        let dir = tempdir().unwrap();
        let env = env_file(dir.path(), "ftp://from-env-file");
        let expected = dir.path().join("other.yaml").to_string_lossy().to_string();

        assert_eq!(validation_target(None, &env), expected);
        assert_eq!(validation_target(Some("./flag.yaml"), &env), "./flag.yaml");
        assert!(ConfigFile::load(validation_target(None, &env)).is_err());

        let args = cli::ConfigArgs {
            action: cli::ConfigAction::Validate { file: None },
        };
        assert!(manage_config(args, &env).is_err());
    }
}
