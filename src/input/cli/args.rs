use clap::{ArgAction, CommandFactory, FromArgMatches, Parser};
use log::debug;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::mandelbrot_config::default_region;
use crate::input::cli::errors::CliError;
use crate::input::range::file::read_range_file;
use crate::input::range::parse::parse_range;

/// Live Mandelbrot set visualisation in the terminal, drawn with braille dots.
///
/// Ctrl-Z pauses and resumes iteration, Ctrl-C quits.
#[derive(Debug, Parser)]
#[command(name = "braillebrot", disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Visualised part of the Mandelbrot set. Format:
    /// x:<real>..<real>/y:<real>..<real> or c:<real>+<real>i/w:<real>
    #[arg(short, long, value_name = "RANGE", action = ArgAction::Append)]
    pub range: Vec<String>,

    /// Read the range from the first line of a file
    #[arg(short, long, value_name = "PATH", action = ArgAction::Append)]
    pub file: Vec<PathBuf>,

    /// Print help
    #[arg(short, long, action = ArgAction::Count)]
    pub help: u8,
}

/// What the command line asks for.
#[derive(Debug, Clone, PartialEq)]
pub enum Invocation {
    Run(Viewport),
    Help(String),
}

enum RangeSource {
    Text(String),
    File(PathBuf),
}

impl RangeSource {
    fn load(&self) -> Result<Viewport, CliError> {
        match self {
            Self::Text(text) => {
                parse_range(text).map_err(|err| CliError::InvalidRange(err.input().to_string()))
            }
            Self::File(path) => read_range_file(path)
                .map_err(|err| CliError::from_range_file(&path.display().to_string(), err)),
        }
    }
}

enum Directive {
    Range(RangeSource),
    Help,
}

/// Parses `args` (program name first). Ranges, range files and `-h` are
/// handled in command-line order: the first failure aborts, `-h` stops at
/// its position, and the last successful range wins.
pub fn parse_args<I, T>(args: I) -> Result<Invocation, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    let matches = Cli::command()
        .try_get_matches_from(args.clone())
        .map_err(|err| name_flag_as_typed(&args, CliError::from_clap(&err)))?;
    let cli = Cli::from_arg_matches(&matches).map_err(|err| CliError::from_clap(&err))?;

    let mut directives: Vec<(usize, Directive)> = Vec::new();
    if let Some(indices) = matches.indices_of("range") {
        let sources = cli.range.into_iter().map(RangeSource::Text);
        directives.extend(indices.zip(sources.map(Directive::Range)));
    }
    if let Some(indices) = matches.indices_of("file") {
        let sources = cli.file.into_iter().map(RangeSource::File);
        directives.extend(indices.zip(sources.map(Directive::Range)));
    }
    if let Some(index) = matches.index_of("help").filter(|_| cli.help > 0) {
        directives.push((index, Directive::Help));
    }
    directives.sort_by_key(|(index, _)| *index);

    let mut region = None;
    for (_, directive) in &directives {
        match directive {
            Directive::Range(source) => region = Some(source.load()?),
            Directive::Help => {
                return Ok(Invocation::Help(Cli::command().render_help().to_string()));
            }
        }
    }

    let region = match region {
        Some(region) => region,
        None => default_region().map_err(|err| CliError::InvalidRange(err.to_string()))?,
    };
    debug!("selected region {:?}", region);

    Ok(Invocation::Run(region))
}

/// Replaces the long name clap reports for a value-less option with the
/// spelling the user actually typed (`-r` rather than `--range`).
fn name_flag_as_typed(args: &[OsString], err: CliError) -> CliError {
    let CliError::MissingParameter(long) = &err else {
        return err;
    };
    let Some(name) = long.strip_prefix("--") else {
        return err;
    };
    let command = Cli::command();
    let Some(short) = command
        .get_arguments()
        .find(|arg| arg.get_long() == Some(name))
        .and_then(|arg| arg.get_short())
    else {
        return err;
    };
    let short = format!("-{short}");

    let tokens: Vec<&str> = args
        .iter()
        .skip(1)
        .map(|arg| arg.to_str().unwrap_or_default())
        .collect();
    let typed = tokens.iter().enumerate().find(|(index, token)| {
        (**token == long.as_str() || **token == short)
            && tokens
                .get(index + 1)
                .is_none_or(|next| next.starts_with('-'))
    });

    match typed {
        Some((_, token)) => CliError::MissingParameter((*token).to_string()),
        None => err,
    }
}
