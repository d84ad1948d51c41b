use std::env;
use std::io::{self, BufRead};
use std::process::ExitCode;

use stemrs::SnowballStemmer;

const VERSION: &str = "stemrs 0.1.0";

fn print_usage() {
    eprintln!("usage: stem [options] [word ...]");
    eprintln!("Available options are:");
    eprintln!("  -l lang   stem for language code 'lang' (default 'de')");
    eprintln!("  -v        show version information");
    eprintln!("  --        stop handling options");
    eprintln!("  -         stop handling options and read words from stdin");
}

#[derive(Default)]
struct Options {
    language: Option<String>,
    words: Vec<String>,
    show_version: bool,
    read_stdin: bool,
}

fn parse_args() -> Result<Options, String> {
    let args: Vec<String> = env::args().collect();
    let mut opts = Options::default();
    let mut stop_options = false;
    let mut i = 1;

    while i < args.len() {
        let arg = &args[i];
        if !stop_options && arg.starts_with('-') && arg.len() > 1 {
            match arg.as_str() {
                "-l" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("'-l' needs argument".to_string());
                    }
                    opts.language = Some(args[i].clone());
                }
                "-v" => {
                    opts.show_version = true;
                }
                "--" => {
                    stop_options = true;
                }
                _ => {
                    return Err(format!("unrecognized option '{}'", arg));
                }
            }
        } else if arg == "-" {
            opts.read_stdin = true;
            stop_options = true;
        } else {
            opts.words.push(arg.clone());
        }
        i += 1;
    }

    Ok(opts)
}

/// Stem whitespace-separated words line by line. The memoized path
/// pays off here: realistic streams repeat words constantly.
fn stem_stdin(stemmer: &mut SnowballStemmer) -> Result<(), String> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.map_err(|e| format!("error reading stdin: {}", e))?;
        let stems: Vec<String> = line
            .split_whitespace()
            .map(|w| stemmer.stem_cached(w).to_string())
            .collect();
        println!("{}", stems.join(" "));
    }
    Ok(())
}

fn run(opts: &Options) -> Result<(), String> {
    let code = opts.language.as_deref().unwrap_or("de");
    let mut stemmer = SnowballStemmer::from_code(code);

    if opts.words.is_empty() || opts.read_stdin {
        stem_stdin(&mut stemmer)?;
    }
    for word in &opts.words {
        println!("{}", stemmer.stem(word));
    }
    Ok(())
}

fn main() -> ExitCode {
    let opts = match parse_args() {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("stem: {}", e);
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    if opts.show_version {
        println!("{}", VERSION);
        return ExitCode::SUCCESS;
    }

    if let Err(e) = run(&opts) {
        eprintln!("stem: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
