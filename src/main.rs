use std::{
    env,
    io::{self, BufRead},
    process,
    time::Instant,
};

use log::{debug, warn};
use polyfunc::{
    errors::errors::Error,
    lexer::{lexer::Lexer, tokens::TokenCategory},
    render_error,
    trace::xml::XmlTrace,
    Function,
};

const USAGE: &str = "Usage: polyfunc \"z = <expression>\" [x,y ...] [--tokens] [--trace]";

fn main() {
    pretty_env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("{}", USAGE);
        process::exit(2);
    }

    let source = &args[1];
    let show_tokens = args[2..].iter().any(|arg| arg == "--tokens");
    let show_trace = args[2..].iter().any(|arg| arg == "--trace");
    let points: Vec<&String> = args[2..]
        .iter()
        .filter(|arg| !arg.starts_with("--"))
        .collect();

    if show_tokens {
        let tokens = Lexer::new(source)
            .take_while(|token| token.category != TokenCategory::EndOfInput);

        for token in tokens {
            println!("{}", token);
        }
    }

    let start = Instant::now();
    let function = if show_trace {
        let (function, trace) = Function::with_observer(source, XmlTrace::new())
            .unwrap_or_else(|error| fail(&error, source));
        println!("{}", trace.finish());
        function
    } else {
        Function::new(source).unwrap_or_else(|error| fail(&error, source))
    };
    debug!("Parsed in {:?}", start.elapsed());

    if !points.is_empty() {
        for point in points {
            match parse_point(point) {
                Ok((x, y)) => print_value(&function, x, y),
                Err(message) => {
                    eprintln!("{}", message);
                    process::exit(2);
                }
            }
        }
    } else if !show_tokens && !show_trace {
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(error) => {
                    eprintln!("Failed to read input: {}", error);
                    process::exit(1);
                }
            };

            if line.trim().is_empty() {
                continue;
            }

            match parse_point(&line) {
                Ok((x, y)) => print_value(&function, x, y),
                Err(message) => warn!("{}", message),
            }
        }
    }
}

fn fail(error: &Error, source: &str) -> ! {
    eprintln!("{}", render_error(error, source));
    process::exit(1);
}

fn print_value(function: &Function, x: f64, y: f64) {
    println!("f({}, {}) = {}", x, y, function.evaluate(x, y));
}

fn parse_point(point: &str) -> Result<(f64, f64), String> {
    let (x, y) = point
        .split_once(',')
        .ok_or_else(|| format!("Expected a point as `x,y`, got `{}`", point))?;

    let x = x
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("Invalid x value `{}`", x.trim()))?;
    let y = y
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("Invalid y value `{}`", y.trim()))?;

    Ok((x, y))
}
