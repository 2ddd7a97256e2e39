use citystar::citystar2d::{RenderConfig, Session, SessionError, SvgCanvas};

use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
commands:
  add <name> <x> <y>   add a city
  path                 draw the cities in the order they were added
  optimal <start>      draw the shortest tour starting at <start>
  distances            list the distance between every pair of cities
  svg <file>           write the current drawing to an SVG file
  log                  show the output log
  help                 show this message
  quit                 exit

Words are split on whitespace, so city names cannot contain spaces here.";

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "citystar=info".into()),
        )
        .init();

    let config = parse_config_arg().unwrap_or_default();
    let mut canvas = SvgCanvas::new(config.width, config.height);
    let mut session = Session::new(config);

    println!("{HELP}");
    prompt();
    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::error!("Failed to read input: {e}");
                break;
            }
        };

        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => {}
            ["add", name, x, y] => match session.add_point(name, x, y) {
                Ok(_) => print_last(&session),
                Err(e) => alert(e),
            },
            ["add", ..] => alert(SessionError::InvalidInput),
            ["path"] => match session.calculate_path(&mut canvas) {
                Ok(_) => print_log(&session),
                Err(e) => alert(e),
            },
            ["optimal", start] => match session.calculate_optimal_path(start, &mut canvas) {
                Ok(_) => print_log(&session),
                Err(e) => alert(e),
            },
            ["distances"] => {
                for (a, b, d) in session.store().distances().iter() {
                    println!("{a} <-> {b}: {d}");
                }
            }
            ["svg", path] => match canvas.save(path) {
                Ok(()) => tracing::info!("Wrote {path}"),
                Err(e) => alert(format!("failed to write {path}: {e}")),
            },
            ["log"] => print_log(&session),
            ["help"] => println!("{HELP}"),
            ["quit"] | ["exit"] => break,
            _ => alert(format!("unknown command '{line}', try 'help'")),
        }
        prompt();
    }
}

fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}

fn alert<M: std::fmt::Display>(message: M) {
    eprintln!("alert: {message}");
}

fn print_last(session: &Session) {
    if let Some(line) = session.log().last() {
        println!("{line}");
    }
}

fn print_log(session: &Session) {
    for line in session.log() {
        println!("{line}");
    }
}

fn parse_config_arg() -> Option<RenderConfig> {
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        if args[i] == "--config" && i + 1 < args.len() {
            let path = &args[i + 1];
            match RenderConfig::load(path) {
                Ok(config) => {
                    tracing::info!("Loaded render config from {path}");
                    return Some(config);
                }
                Err(e) => {
                    tracing::error!("{e}");
                }
            }
            break;
        }
        i += 1;
    }
    None
}
