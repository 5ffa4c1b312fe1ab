use clap::Parser;
use serde_json::Value;

use scoped_options::ScopedOptions;

/// Apply scoped assignments and inspect the resulting option store.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Assignments of the form `scope/name=value`. Values are parsed as JSON;
    /// anything that is not valid JSON is stored as a plain string.
    assignments: Vec<String>,
    /// Print a single option (form `scope/name`) instead of the whole store.
    #[arg(long)]
    get: Option<String>,
}

/// Split `scope/name`; a bare `name` addresses the root scope.
fn split_qualified(target: &str) -> (&str, &str) {
    match target.rsplit_once('/') {
        Some((scope, name)) => (scope, name),
        None => ("", target),
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    // Parse CLI arguments.
    let args = Args::parse();

    let mut store = ScopedOptions::new();
    for assignment in &args.assignments {
        let Some((target, raw)) = assignment.split_once('=') else {
            eprintln!("Invalid assignment (expected scope/name=value): {assignment}");
            std::process::exit(1);
        };
        let (scope, name) = split_qualified(target);
        if name.is_empty() {
            eprintln!("Invalid assignment (empty option name): {assignment}");
            std::process::exit(1);
        }
        let value = serde_json::from_str::<Value>(raw)
            .unwrap_or_else(|_| Value::String(raw.to_string()));
        if let Err(e) = store.with_scope(scope, |opt| opt.set(name, value)) {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }

    // Answer a single lookup, or dump the whole store.
    match args.get.as_deref() {
        Some(target) => {
            let (scope, name) = split_qualified(target);
            if name.is_empty() {
                eprintln!("Invalid lookup (empty option name): {target}");
                std::process::exit(1);
            }
            match store.with_scope(scope, |opt| opt.get(name).map(|v| v.clone())) {
                Ok(value) => println!("{}", serde_json::to_string_pretty(&value).unwrap()),
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }
        None => println!("{store}"),
    }
}
