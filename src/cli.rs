use crate::render::RendererKind;
use lexopt::prelude::*;
use std::path::PathBuf;

pub(crate) static USAGE: &str = "\
Usage: slither [options]

Options:
  -c, --config <PATH>    Read configuration from <PATH>
  -g, --grid-size <N>    Cells along each edge of the board [default: 20]
  -i, --interval <MS>    Milliseconds between snake movements [default: 150]
  -r, --renderer <KIND>  Draw with the \"buffer\" or \"widget\" renderer
  -h, --help             Print this message and exit
  -V, --version          Print version and exit
";

/// Parsed command-line options.  Everything is optional; unset values fall
/// back to the configuration file and then to the built-in defaults.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Args {
    pub(crate) config: Option<PathBuf>,
    pub(crate) grid_size: Option<u16>,
    pub(crate) interval_ms: Option<u64>,
    pub(crate) renderer: Option<RendererKind>,
    pub(crate) help: bool,
    pub(crate) version: bool,
}

impl Args {
    pub(crate) fn from_env() -> Result<Args, lexopt::Error> {
        Args::parse(lexopt::Parser::from_env())
    }

    fn parse(mut parser: lexopt::Parser) -> Result<Args, lexopt::Error> {
        let mut args = Args::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Short('c') | Long("config") => args.config = Some(PathBuf::from(parser.value()?)),
                Short('g') | Long("grid-size") => args.grid_size = Some(parser.value()?.parse()?),
                Short('i') | Long("interval") => args.interval_ms = Some(parser.value()?.parse()?),
                Short('r') | Long("renderer") => args.renderer = Some(parser.value()?.parse()?),
                Short('h') | Long("help") => args.help = true,
                Short('V') | Long("version") => args.version = true,
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<Args, lexopt::Error> {
        Args::parse(lexopt::Parser::from_args(argv))
    }

    #[test]
    fn no_arguments() {
        let args = parse(&[]).expect("parsing no arguments should succeed");
        assert_eq!(args, Args::default());
    }

    #[test]
    fn all_options() {
        let args = parse(&[
            "--config",
            "custom.toml",
            "--grid-size",
            "12",
            "--interval",
            "100",
            "--renderer",
            "widget",
        ])
        .expect("parsing should succeed");
        assert_eq!(
            args,
            Args {
                config: Some(PathBuf::from("custom.toml")),
                grid_size: Some(12),
                interval_ms: Some(100),
                renderer: Some(RendererKind::Widget),
                help: false,
                version: false,
            }
        );
    }

    #[test]
    fn short_options() {
        let args = parse(&["-g", "8", "-r", "buffer"]).expect("parsing should succeed");
        assert_eq!(args.grid_size, Some(8));
        assert_eq!(args.renderer, Some(RendererKind::Buffer));
    }

    #[test]
    fn help_and_version() {
        let args = parse(&["-h", "-V"]).expect("parsing should succeed");
        assert!(args.help);
        assert!(args.version);
    }

    #[test]
    fn unknown_option() {
        assert!(parse(&["--wrap"]).is_err());
    }

    #[test]
    fn bad_grid_size() {
        assert!(parse(&["--grid-size", "many"]).is_err());
    }

    #[test]
    fn bad_renderer() {
        assert!(parse(&["--renderer", "canvas"]).is_err());
    }
}
