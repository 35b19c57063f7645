use anyhow::{Context, Result, bail};
use chatmark_config::{Config, DelimiterConfig, RuleConfig};
use chatmark_engine::{DelimiterSpec, Dialect};
use chatmark_syntax::{LexRule, Token, TokenKind};
use clap::Parser;
use std::{
    io::{self, Read},
    path::PathBuf,
};

#[derive(Parser)]
#[command(name = "chatmark")]
#[command(about = "Parse chat markdown and print its tokens or tree as JSON")]
struct Args {
    /// Message file to parse; reads stdin when omitted
    file: Option<PathBuf>,

    /// Config file with custom rules and delimiters
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the token stream instead of the tree
    #[arg(long)]
    tokens: bool,

    /// Print JSON on a single line
    #[arg(long)]
    compact: bool,

    /// Write a starter config file (to --config or the default path) and exit
    #[arg(long)]
    init_config: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if args.init_config {
        let path = match &args.config {
            Some(path) => Config::expand_path(path),
            None => Config::config_path(),
        };
        init_config(&path)?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    let config = load_config(args.config.as_deref())?;
    let dialect = build_dialect(&config)?;
    let input = read_input(args.file.as_deref())?;

    if args.tokens {
        for token in dialect.tokenize(&input) {
            println!("{}", format_token(&token));
        }
        return Ok(());
    }

    let maps = dialect.parse_to_maps(&input);
    let json = if args.compact {
        serde_json::to_string(&maps)?
    } else {
        serde_json::to_string_pretty(&maps)?
    };
    println!("{json}");
    Ok(())
}

/// Loads the config named on the command line, or the default one if it
/// exists.
fn load_config(path: Option<&std::path::Path>) -> Result<Config> {
    match path {
        Some(path) => {
            let path = Config::expand_path(path);
            log::info!("Config path: {}", path.display());
            match Config::load_from_path(&path)? {
                Some(config) => Ok(config),
                None => bail!("config file not found: {}", path.display()),
            }
        }
        None => {
            log::info!("Config path: {}", Config::config_path().display());
            Ok(Config::load()?.unwrap_or_default())
        }
    }
}

/// A config showing one custom rule feeding one custom delimiter.
fn starter_config() -> Config {
    Config {
        max_depth: Some(chatmark_engine::DEFAULT_MAX_DEPTH),
        rules: vec![RuleConfig {
            name: "CARET".to_string(),
            pattern: r"\^".to_string(),
        }],
        delimiters: vec![DelimiterConfig {
            name: "superscript".to_string(),
            open: vec!["CARET".to_string()],
            close: vec!["CARET".to_string()],
        }],
    }
}

/// Writes the starter config to `path`, refusing to replace an existing file.
fn init_config(path: &std::path::Path) -> Result<()> {
    if path.exists() {
        bail!("config file already exists: {}", path.display());
    }
    starter_config().save_to_path(path)
}

fn build_dialect(config: &Config) -> Result<Dialect> {
    let mut dialect = Dialect::new();

    for rule in &config.rules {
        let lex_rule = LexRule::custom(&rule.name, &rule.pattern)
            .with_context(|| format!("invalid rule {:?}", rule.name))?;
        dialect = dialect.with_rule(lex_rule);
    }

    for delimiter in &config.delimiters {
        let opener = resolve_kinds(config, &delimiter.name, &delimiter.open);
        let closer = resolve_kinds(config, &delimiter.name, &delimiter.close);
        let spec = DelimiterSpec::new(delimiter.name.as_str(), opener, closer)
            .with_context(|| format!("invalid delimiter {:?}", delimiter.name))?;
        dialect = dialect.with_delimiter(spec);
    }

    if let Some(max_depth) = config.max_depth {
        dialect = dialect.with_max_depth(max_depth);
    }

    Ok(dialect)
}

fn resolve_kinds(config: &Config, delimiter: &str, names: &[String]) -> Vec<TokenKind> {
    names
        .iter()
        .map(|name| {
            let kind = TokenKind::from_name(name);
            if kind.is_custom() && !config.rules.iter().any(|rule| &rule.name == name) {
                log::warn!("delimiter {delimiter:?} refers to unknown token kind {name:?}");
            }
            kind
        })
        .collect()
}

fn read_input(file: Option<&std::path::Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            Ok(input)
        }
    }
}

/// One token per line: kind tag, quoted text, then each capture quoted or
/// `-` when its group did not participate.
fn format_token(token: &Token<'_>) -> String {
    let mut line = format!("{} {:?}", token.kind, token.text);
    for capture in &token.captures {
        match capture {
            Some(text) => line.push_str(&format!(" {text:?}")),
            None => line.push_str(" -"),
        }
    }
    line
}
