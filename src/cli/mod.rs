use crate::lexar::lexer::{tokenize_with, LexOptions};
use crate::lexar::token::TokenKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI definition for the scriptcheck tool.
#[derive(Parser)]
#[command(name = "scriptcheck")]
#[command(about = "Grammar checker for the script language")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Supported subcommands for the scriptcheck CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Check a script against the grammar and report the first violation
    Check {
        /// Path to a script file or a directory containing main.script
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Keep scanning after an unterminated block comment
        #[arg(long)]
        resume_comments: bool,

        /// Maximum statement/expression nesting depth
        #[arg(long, default_value_t = crate::parser::DEFAULT_MAX_DEPTH)]
        max_depth: usize,

        /// Do not print lexical warnings
        #[arg(long)]
        no_warnings: bool,
    },

    /// List the tokens of a script
    Tokens {
        /// Path to a script file or a directory containing main.script
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Include whitespace tokens
        #[arg(long)]
        all: bool,

        /// Emit a JSON array instead of one token per line
        #[arg(long)]
        json: bool,

        /// Keep scanning after an unterminated block comment
        #[arg(long)]
        resume_comments: bool,
    },
}

/// Entrypoint for CLI logic.
/// Returns exit code (0 for success, nonzero for error).
pub fn run_cli(cli: Cli) -> i32 {
    use crate::checker::{check_project, read_input, CheckOptions};

    match cli.command {
        None => {
            println!("scriptcheck - grammar checker for the script language");
            println!("Type `scriptcheck --help` for usage");
            0
        }
        Some(Commands::Check {
            path,
            resume_comments,
            max_depth,
            no_warnings,
        }) => {
            let opts = CheckOptions {
                input_path: path,
                lex: LexOptions {
                    resume_after_unterminated_comment: resume_comments,
                },
                max_depth,
                warnings: !no_warnings,
                ..Default::default()
            };

            match check_project(opts) {
                Ok(result) => {
                    if result.success {
                        println!("✓ No errors found");
                        0
                    } else {
                        println!("Found {} error(s)", result.error_count);
                        1
                    }
                }
                Err(e) => {
                    eprintln!("Failed to check: {}", e);
                    1
                }
            }
        }
        Some(Commands::Tokens {
            path,
            all,
            json,
            resume_comments,
        }) => {
            let (_, source) = match read_input(&path) {
                Ok(input) => input,
                Err(e) => {
                    eprintln!("{}", e);
                    return 1;
                }
            };

            let opts = LexOptions {
                resume_after_unterminated_comment: resume_comments,
            };
            match render_tokens(&source, &opts, all, json) {
                Ok(out) => {
                    println!("{}", out);
                    0
                }
                Err(e) => {
                    eprintln!("Failed to serialize tokens: {}", e);
                    1
                }
            }
        }
    }
}

/// Lists the tokens of `source`, one per line or as a JSON array.
/// Whitespace tokens are left out unless `all` is set.
pub fn render_tokens(
    source: &str,
    opts: &LexOptions,
    all: bool,
    json: bool,
) -> Result<String, serde_json::Error> {
    let tokens: Vec<_> = tokenize_with(source, opts)
        .into_iter()
        .filter(|t| all || t.kind != TokenKind::Whitespace)
        .collect();

    if json {
        serde_json::to_string_pretty(&tokens)
    } else {
        Ok(tokens
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join("\n"))
    }
}
