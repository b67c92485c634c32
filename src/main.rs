use std::{
    io::{self, BufWriter},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use deprecation_check::{
    checker::{checker::run, config::Config},
    display_error,
    errors::errors::ErrorKind,
    lexer::sanitize::{SanitizeOptions, DEFAULT_SEPARATORS},
    matcher::matcher::MatchMode,
};
use log::debug;

#[derive(Parser)]
#[command(name = "deprecation-check")]
#[command(about = "Flags deprecated and discouraged C/C++ identifiers outside comments and literals", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory (or single file) to check
    #[arg(value_name = "ROOT")]
    root: PathBuf,

    /// File extensions to check, without the dot (repeatable or comma-separated)
    #[arg(short, long = "ext", value_name = "EXT", value_delimiter = ',')]
    extensions: Vec<String>,

    /// Only check files directly inside ROOT
    #[arg(long)]
    no_recursive: bool,

    /// Match identifiers anywhere inside a token instead of whole tokens
    #[arg(long)]
    substring: bool,

    /// Skip the cautionary mapping and report deprecations only
    #[arg(long)]
    no_cautionary: bool,

    /// Report files with malformed comments and continue with the rest
    #[arg(short, long)]
    keep_going: bool,

    /// Print each file's token stream instead of checking it
    #[arg(long)]
    dump_tokens: bool,

    /// Characters that split glued identifiers apart
    #[arg(long, value_name = "CHARS", default_value = DEFAULT_SEPARATORS)]
    separators: String,

    /// Keep `<...>` template argument spans inside tokens
    #[arg(long)]
    keep_templates: bool,
}

impl Cli {
    fn into_config(self) -> Config {
        let mut config = Config::new(self.root);

        if !self.extensions.is_empty() {
            config.extensions = self.extensions;
        }
        config.recursive = !self.no_recursive;
        config.match_mode = if self.substring {
            MatchMode::Substring
        } else {
            MatchMode::Exact
        };
        config.cautionary = !self.no_cautionary;
        config.keep_going = self.keep_going;
        config.dump_tokens = self.dump_tokens;
        config.sanitize = SanitizeOptions {
            separators: self.separators,
            strip_templates: !self.keep_templates,
        };

        config
    }
}

fn main() -> ExitCode {
    pretty_env_logger::init();
    let config = Cli::parse().into_config();
    debug!("{:?}", config);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match run(&config, &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            // Parse errors were already shown alongside their source line.
            if e.kind() != ErrorKind::Parse {
                display_error(&e, None);
            }
            ExitCode::FAILURE
        }
    }
}
