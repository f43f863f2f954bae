// ABOUTME: Thin interactive driver demonstrating the embeddable evaluator

use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::{Config, Editor};
use tiny_eval::{config, Evaluator};

/// Demonstration REPL for the tiny-eval embeddable evaluator.
#[derive(Parser, Debug)]
#[command(name = "tiny-eval-repl")]
#[command(version = config::VERSION)]
#[command(about = "Interactive driver for the tiny-eval embeddable evaluator")]
struct CliArgs {}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _args = CliArgs::parse();

    let evaluator = Evaluator::new();

    let rl_config = Config::builder().auto_add_history(true).build();
    let mut rl: Editor<(), _> =
        Editor::with_config(rl_config).map_err(|e| format!("Failed to initialize REPL: {}", e))?;

    let history_file = ".tiny_eval_history";
    let _ = rl.load_history(history_file);

    println!("{}", config::WELCOME_MESSAGE);
    println!("{}", config::WELCOME_SUBTITLE);

    loop {
        let readline = rl.readline("tiny-eval> ");
        match readline {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                match line.trim() {
                    "(quit)" | "(exit)" => {
                        println!("Goodbye!");
                        break;
                    }
                    "(clear)" => {
                        print!("\x1B[2J\x1B[H");
                        continue;
                    }
                    "(help)" => {
                        println!("{}", config::HELP_TEXT);
                        continue;
                    }
                    _ => {}
                }

                match evaluator.eval(&line) {
                    Ok(result) => println!("=> {}", result),
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("\nGoodbye!");
                break;
            }
            Err(err) => {
                eprintln!("Error: {}", err);
                break;
            }
        }
    }

    let _ = rl.save_history(history_file);
    Ok(())
}
