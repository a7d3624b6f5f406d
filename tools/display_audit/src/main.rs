use stonecut_core::catalog::workflow::execute_display_audit;
use stonecut_core::DisplayConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const USAGE: &str =
    "usage: display_audit <catalog.json|catalog.ndjson> [--config <config.json>] [--csv <out.csv>] [--strict]";

struct Args {
    input: PathBuf,
    config: Option<PathBuf>,
    csv_out: Option<PathBuf>,
    strict: bool,
}

fn parse_args(mut argv: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut input = None;
    let mut config = None;
    let mut csv_out = None;
    let mut strict = false;
    while let Some(a) = argv.next() {
        match a.as_str() {
            "--config" => {
                config = Some(PathBuf::from(argv.next().ok_or("--config needs a path")?));
            }
            "--csv" => {
                csv_out = Some(PathBuf::from(argv.next().ok_or("--csv needs a path")?));
            }
            "--strict" => strict = true,
            other if other.starts_with("--") => return Err(format!("unknown flag: {}", other)),
            other if input.is_none() => input = Some(PathBuf::from(other)),
            other => return Err(format!("unexpected argument: {}", other)),
        }
    }
    Ok(Args {
        input: input.ok_or("missing input path")?,
        config,
        csv_out,
        strict,
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(a) => a,
        Err(msg) => {
            eprintln!("{}", msg);
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };

    match run(&args) {
        Ok(fallbacks) => {
            if args.strict && fallbacks > 0 {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("display_audit error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> stonecut_core::CoreResult<usize> {
    let config = match &args.config {
        Some(path) => DisplayConfig::load(path)?,
        None => DisplayConfig::default(),
    };
    tracing::debug!(
        fallback = %config.fallback,
        name_fields = ?config.name_fields,
        overrides = config.kind_fields.len(),
        "display config loaded"
    );

    let content = std::fs::read_to_string(&args.input)?;
    let mut audit = execute_display_audit(&content, &config)?;

    for r in audit.rows.iter().filter(|r| r.label.is_fallback()) {
        tracing::warn!(kind = %r.kind, id = %r.id, "no displayable name, using fallback");
    }
    tracing::info!(
        rows = audit.row_count,
        fallbacks = audit.fallback_count,
        sha256 = %audit.input_sha256,
        "catalog audited"
    );

    let csv = std::mem::take(&mut audit.display_csv);
    if let Some(out) = &args.csv_out {
        std::fs::write(out, csv)?;
        tracing::info!(path = %out.display(), "display csv written");
    }

    println!("{}", serde_json::to_string_pretty(&audit)?);
    Ok(audit.fallback_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(items: &[&str]) -> impl Iterator<Item = String> {
        items
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn parses_flags_in_any_order() {
        let a = parse_args(argv(&["--strict", "rows.ndjson", "--csv", "out.csv"])).unwrap();
        assert_eq!(a.input, PathBuf::from("rows.ndjson"));
        assert_eq!(a.csv_out, Some(PathBuf::from("out.csv")));
        assert!(a.config.is_none());
        assert!(a.strict);
    }

    #[test]
    fn rejects_bad_usage() {
        assert!(parse_args(argv(&[])).is_err());
        assert!(parse_args(argv(&["a.json", "--config"])).is_err());
        assert!(parse_args(argv(&["a.json", "b.json"])).is_err());
        assert!(parse_args(argv(&["a.json", "--verbose"])).is_err());
    }
}
