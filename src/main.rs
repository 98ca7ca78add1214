use std::{env, process::ExitCode, time::Instant};

use log::info;
use pratt::{display_error, lexer::lexer::tokenize, parser::parser::parse};

const SAMPLE_INPUT: &str = "1 + 2 + 3 + 4 * 5 - 6";

fn main() -> ExitCode {
    env_logger::init();

    let mut args: Vec<String> = env::args().skip(1).collect();

    let show_tokens = if let Some(index) = args.iter().position(|arg| arg == "--tokens") {
        args.remove(index);
        true
    } else {
        false
    };

    let input = if args.is_empty() {
        String::from(SAMPLE_INPUT)
    } else {
        args.join(" ")
    };

    if show_tokens {
        for token in tokenize(&input) {
            println!("{}", token);
        }
    }

    let start = Instant::now();
    let parsed = parse(&input);

    info!("Parsed in {:?}", start.elapsed());

    match parsed {
        Ok(expr) => {
            println!("{}", expr);
            ExitCode::SUCCESS
        }
        Err(error) => {
            display_error(&error, &input);
            ExitCode::FAILURE
        }
    }
}
