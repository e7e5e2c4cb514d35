use std::ffi::OsString;

pub use clap::Parser;

use crate::config::DEFAULT_PROFILE_NAME;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Profile name
    /// Section of the profile file to read settings from. Default is 'default'.
    /// A missing profile falls back to built-in settings.
    #[clap(short = 'p', long, default_value = DEFAULT_PROFILE_NAME, help = "profile name")]
    profile: String,

    #[clap(
        short = 'e',
        long = "eval",
        value_name = "EXPR",
        allow_hyphen_values = true,
        conflicts_with = "factorial",
        help = "evaluate an expression and print the result"
    )]
    eval: Option<String>,

    #[clap(
        long,
        value_name = "N",
        allow_hyphen_values = true,
        help = "print the factorial of N"
    )]
    factorial: Option<i64>,
}

/// What the binary should do after argument parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    Interactive,
    Evaluate(String),
    Factorial(i64),
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    profile: String,
    mode: RunMode,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        Self::from_clap(ClapArgs::parse())
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::from_clap(ClapArgs::parse_from(itr))
    }

    fn from_clap(args: ClapArgs) -> Self {
        let mode = match (args.eval, args.factorial) {
            (Some(expression), _) => RunMode::Evaluate(expression),
            (None, Some(n)) => RunMode::Factorial(n),
            (None, None) => RunMode::Interactive,
        };
        Self {
            profile: args.profile,
            mode,
        }
    }

    pub fn profile(&self) -> &String {
        &self.profile
    }

    pub fn mode(&self) -> &RunMode {
        &self.mode
    }
}
