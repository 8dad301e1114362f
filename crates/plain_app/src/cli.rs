use std::ffi::OsString;
use std::path::Path;

use clap::Parser;

pub const DEFAULT_URL: &str = "https://en.wikipedia.org/wiki/%22Hello,_World!%22_program";

/// Retrieves the page at `--url` and prints a plaintext rendering of its
/// paragraphs and headers. With `--file` the text is written there instead.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "plain", version)]
pub struct Cli {
    /// URL of the page you'd like to read
    #[arg(short, long, default_value = DEFAULT_URL)]
    pub url: String,

    /// Optional file path to output the page text
    #[arg(short, long)]
    pub file: Option<String>,
}

impl Cli {
    /// Output file, if one was given. An empty path means stdout.
    pub fn destination(&self) -> Option<&Path> {
        self.file
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(Path::new)
    }
}

const LONG_FLAGS: [&str; 2] = ["url", "file"];

/// Rewrites `-url` and `-file` (with or without `=value`) to their `--` form.
///
/// Arguments after a `--` terminator are left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut terminated = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if terminated {
                return arg;
            }
            match arg.to_str() {
                Some("--") => {
                    terminated = true;
                    arg
                }
                Some(text) if is_single_dash_long(text) => OsString::from(format!("-{text}")),
                _ => arg,
            }
        })
        .collect()
}

fn is_single_dash_long(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    LONG_FLAGS.contains(&name)
}
