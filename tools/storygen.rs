/// Story Generator — generates "Der Körper" texts from a sentence corpus.
///
/// Usage: storygen --sentences <corpus.csv> [--count <n>] [--output <file.txt>] [--trash-dir <dir>] [--seed <n>]
use std::env;
use std::io::Write;
use std::process;

use koerper_engine::core::story::Story;
use koerper_engine::schema::sentence::load_corpus;

const USAGE: &str = "Usage: storygen --sentences <corpus.csv> [--count <n>] [--output <file.txt>] [--trash-dir <dir>] [--seed <n>]";

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut sentences_path = None;
    let mut output = None;
    let mut trash_dir: Option<String> = None;
    let mut seed: Option<u64> = None;
    let mut count = 1usize;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--sentences" => {
                i += 1;
                sentences_path = Some(args[i].clone());
            }
            "--count" => {
                i += 1;
                count = args[i].parse().unwrap_or_else(|_| {
                    eprintln!("Error: --count must be a positive integer");
                    process::exit(1);
                });
            }
            "--output" => {
                i += 1;
                output = Some(args[i].clone());
            }
            "--trash-dir" => {
                i += 1;
                trash_dir = Some(args[i].clone());
            }
            "--seed" => {
                i += 1;
                seed = Some(args[i].parse().unwrap_or_else(|_| {
                    eprintln!("Error: --seed must be an integer");
                    process::exit(1);
                }));
            }
            "--help" | "-h" => {
                println!("{}", USAGE);
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("{}", USAGE);
                process::exit(1);
            }
        }
        i += 1;
    }

    let sentences_path = sentences_path.unwrap_or_else(|| {
        eprintln!("Error: --sentences is required");
        eprintln!("{}", USAGE);
        process::exit(1);
    });

    let sentences = load_corpus(std::path::Path::new(&sentences_path)).unwrap_or_else(|e| {
        eprintln!("Error loading corpus from {}: {}", sentences_path, e);
        process::exit(1);
    });
    eprintln!("Loaded {} sentences from {}", sentences.len(), sentences_path);

    let mut builder = Story::builder().sentences(sentences);
    if let Some(dir) = &trash_dir {
        builder = builder.trash_dir(dir.clone());
    }
    if let Some(seed) = seed {
        builder = builder.seed(seed);
    }

    let mut story = builder.build().unwrap_or_else(|e| {
        eprintln!("Error loading trash bins: {}", e);
        process::exit(1);
    });

    let texts = story.generate(count);
    if texts.len() < count {
        eprintln!(
            "Corpus exhausted: generated {}/{} texts",
            texts.len(),
            count
        );
    }

    match &output {
        Some(path) => {
            let mut file = std::fs::File::create(path).unwrap_or_else(|e| {
                eprintln!("Error creating {}: {}", path, e);
                process::exit(1);
            });
            for text in &texts {
                if let Err(e) = writeln!(file, "{}", text) {
                    eprintln!("Error writing {}: {}", path, e);
                    process::exit(1);
                }
            }
            eprintln!("Wrote {} texts to {}", texts.len(), path);
        }
        None => {
            for text in &texts {
                println!("{}", text);
            }
        }
    }

    if let Some(dir) = &trash_dir {
        if let Err(e) = story.save_trash(std::path::Path::new(dir)) {
            eprintln!("Error saving trash bins to {}: {}", dir, e);
            process::exit(1);
        }
    }
}
