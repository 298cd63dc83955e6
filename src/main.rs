use std::{
    env,
    fs::read_to_string,
    io::{self, BufRead, Write},
    process::ExitCode,
    time::Instant,
};

use lox_scanner::{display_error, init_tracing, tokenize, Token};
use tracing::debug;

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    let result = match args.len() {
        1 => run_prompt(),
        2 => run_file(&args[1]),
        _ => {
            println!("Usage: lox_scanner [script]");
            return ExitCode::from(64);
        }
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(65),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(74)
        }
    }
}

/// Scans a whole file and prints its tokens. Returns `false` if any lexical error was found.
fn run_file(file_path: &str) -> io::Result<bool> {
    let source = read_to_string(file_path)?;
    let file_name = file_path.rsplit('/').next().unwrap_or(file_path);

    Ok(run(&source, file_name))
}

fn run_prompt() -> io::Result<bool> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        print!("> ");
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            break;
        }

        // errors on one line don't end the session
        run(&line, "shell");
    }

    Ok(true)
}

fn run(source: &str, file_name: &str) -> bool {
    let start = Instant::now();
    let (tokens, errors) = tokenize(source);
    debug!(elapsed = ?start.elapsed(), file = file_name, "tokenized");

    print_tokens(&tokens);

    for error in &errors {
        display_error(error, source, file_name);
    }

    errors.is_empty()
}

fn print_tokens(tokens: &[Token]) {
    for token in tokens {
        println!("{}", token);
    }
}
