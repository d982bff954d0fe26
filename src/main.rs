use clap::Parser;
use env_logger::Env;
use scriptcheck::checker::{check_project, CheckOptions};
use scriptcheck::lexar::LexOptions;
use std::path::PathBuf;
use std::process::exit;

/// Dev tool: dumps every significant token, then checks the file with
/// debug logging enabled.
#[derive(Parser)]
struct Args {
    /// Path to a script file or a directory containing main.script
    #[clap(default_value = ".")]
    input_path: String,
    /// Keep scanning after an unterminated block comment
    #[clap(long)]
    resume_comments: bool,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("debug")).init();
    let args = Args::parse();

    let input_path = PathBuf::from(&args.input_path);
    log::debug!("input_path = {:?}", input_path);

    let opts = CheckOptions {
        input_path,
        lex: LexOptions {
            resume_after_unterminated_comment: args.resume_comments,
        },
        print_tokens: true,
        ..Default::default()
    };

    match check_project(opts) {
        Ok(result) => {
            println!(
                "\n{} tokens, {} warning(s)",
                result.token_count, result.warning_count
            );
            if result.success {
                println!("✓ Program parsed successfully");
            } else {
                eprintln!("✗ Check failed with {} error(s)", result.error_count);
                exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}
