//! @dose
//! purpose: This module implements the tokens command, a debugging aid that runs the
//!     tokenizer over an argument string and prints the resulting raw tokens without
//!     consulting any manifest or binding any parameters.
//!
//! when-editing:
//!     - !No manifest is involved; value candidates are shown unresolved (the binder decides their fate)
//!     - The line words are re-joined with single spaces, same as dispatch
//!
//! gotchas:
//!     - A trailing "?" in the plain output marks a value candidate, not an assigned value

use crate::cli::TokensArgs;
use crate::tokenizer::tokenize;
use anyhow::Result;

pub fn run_tokens(args: &TokensArgs, verbose: bool) -> Result<()> {
    let input = args.line.join(" ");
    if verbose {
        println!("Tokenizing {:?}", input);
    }

    let tokens = tokenize(&input);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tokens)?);
    } else if tokens.is_empty() {
        println!("(no tokens)");
    } else {
        for token in &tokens {
            println!("{}", token);
        }
    }

    Ok(())
}
