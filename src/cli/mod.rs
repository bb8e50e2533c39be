mod context;
mod flags;
mod parse;
pub mod prompts;

pub use context::{Context, Done};
pub use flags::CliFlags;
pub use parse::{ParseError, parse};

pub fn run(args: Vec<String>) {
    match Context::new(args) {
        Ok(mut ctx) => {
            let _ = ctx.run();
        }
        Err(msg) => {
            prompts::error(&msg);
            eprintln!("Try 'passforge --help' for usage.");
            std::process::exit(2);
        }
    }
}
