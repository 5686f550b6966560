// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::process::ExitCode;

use anyhow::Context;
use descriptor_query::config::{load_and_validate_config, EvaluatorConfig};
use descriptor_query::{evaluate_with_config, DocumentRef};
use tracing_subscriber::EnvFilter;

const USAGE: &str =
    "Usage: descriptor-query [--config <evaluator.yaml>] <descriptor> <invocation> <query> [query ...]";

/// Split `--config <file>` off the front of the argument list.
fn parse_args(args: &[String]) -> Option<(Option<&str>, &[String])> {
    match args {
        [flag, path, rest @ ..] if flag == "--config" => Some((Some(path.as_str()), rest)),
        [flag, ..] if flag == "--config" => None,
        rest => Some((None, rest)),
    }
}

fn run(args: &[String]) -> anyhow::Result<()> {
    let (config_path, positional) = parse_args(args).context(USAGE)?;
    if positional.len() < 3 {
        anyhow::bail!(USAGE);
    }

    let config = match config_path {
        Some(path) => load_and_validate_config(path)
            .with_context(|| format!("Failed to load configuration from {}", path))?,
        None => EvaluatorConfig::default(),
    };

    let descriptor = DocumentRef::detect(&positional[0], Some(config.registry.get_prefix()));
    let invocation = DocumentRef::detect(&positional[1], None);
    let queries: Vec<&str> = positional[2..].iter().map(String::as_str).collect();

    let evaluation = evaluate_with_config(&descriptor, &invocation, &queries, &config)?;
    println!("{}", serde_json::to_string_pretty(&evaluation)?);
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn parse_args_with_config() {
        let args = strings(&["--config", "c.yaml", "d.json", "i.json", "inputs/"]);
        let (config, rest) = parse_args(&args).unwrap();
        assert_eq!(config, Some("c.yaml"));
        assert_eq!(rest.len(), 3);
    }

    #[test]
    fn parse_args_without_config() {
        let args = strings(&["d.json", "i.json", "inputs/"]);
        let (config, rest) = parse_args(&args).unwrap();
        assert_eq!(config, None);
        assert_eq!(rest, &args[..]);
    }

    #[test]
    fn dangling_config_flag_is_rejected() {
        let args = strings(&["--config"]);
        assert!(parse_args(&args).is_none());
    }

    #[test]
    fn too_few_arguments_is_usage_error() {
        let err = run(&strings(&["d.json", "i.json"])).unwrap_err();
        assert!(err.to_string().starts_with("Usage:"));
    }
}
