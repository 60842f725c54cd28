use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use semver32::{
    json, parse_with, text, yaml, Component, Error, Grammar, VersionNumber, VersionNumbers,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(about = "semver32 - Parse, bump and normalize version numbers packed into 32 bits")]
struct Cli {
    /// Reject empty segments and anything after the patch segment
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a version number and print it normalized
    Parse {
        version: String,

        /// Always print major.minor.patch
        #[arg(long)]
        full: bool,

        /// Also print the packed 32-bit value
        #[arg(long)]
        bits: bool,
    },
    /// Increment one component, resetting the less significant ones
    Bump {
        #[arg(value_enum)]
        component: Part,

        version: String,

        #[arg(long)]
        full: bool,
    },
    /// Replace individual components
    Set {
        version: String,

        #[arg(long)]
        major: Option<u16>,

        #[arg(long)]
        minor: Option<u8>,

        #[arg(long)]
        patch: Option<u8>,

        #[arg(long)]
        full: bool,
    },
    /// Sort version numbers ascending
    Sort {
        #[arg(required = true)]
        versions: Vec<String>,

        #[arg(long)]
        reverse: bool,

        #[arg(long)]
        full: bool,
    },
    /// Render a version number in another encoding
    Convert {
        version: String,

        #[arg(long, value_enum, default_value_t = Encoding::Text)]
        to: Encoding,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Part {
    Major,
    Minor,
    Patch,
}

impl From<Part> for Component {
    fn from(part: Part) -> Self {
        match part {
            Part::Major => Component::Major,
            Part::Minor => Component::Minor,
            Part::Patch => Component::Patch,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Encoding {
    Text,
    Full,
    Json,
    Yaml,
    Bits,
}

fn render(version: VersionNumber, full: bool) -> String {
    if full {
        version.to_full_string()
    } else {
        text::to_string(version)
    }
}

fn run<W: Write>(cli: Cli, out: &mut W) -> Result<(), Box<dyn std::error::Error>> {
    let grammar = if cli.strict {
        Grammar::Strict
    } else {
        Grammar::Lenient
    };
    let parse = |s: &str| parse_with(s, grammar).map_err(Error::from);

    match cli.command {
        Commands::Parse {
            version,
            full,
            bits,
        } => {
            let v = parse(version.as_str())?;
            if bits {
                writeln!(out, "{} 0x{:08x}", render(v, full), v.to_bits())?;
            } else {
                writeln!(out, "{}", render(v, full))?;
            }
        }
        Commands::Bump {
            component,
            version,
            full,
        } => {
            let v = parse(version.as_str())?;
            let bumped = v.bump(component.into()).map_err(Error::from)?;
            log::debug!("bumped {v:?} to {bumped:?}");
            writeln!(out, "{}", render(bumped, full))?;
        }
        Commands::Set {
            version,
            major,
            minor,
            patch,
            full,
        } => {
            let mut v = parse(version.as_str())?;
            if let Some(major) = major {
                v = v.with_major(major);
            }
            if let Some(minor) = minor {
                v = v.with_minor(minor);
            }
            if let Some(patch) = patch {
                v = v.with_patch(patch);
            }
            writeln!(out, "{}", render(v, full))?;
        }
        Commands::Sort {
            versions,
            reverse,
            full,
        } => {
            let mut sorted = versions
                .iter()
                .map(|s| parse(s.as_str()))
                .collect::<Result<VersionNumbers, _>>()?;
            sorted.sort();
            if reverse {
                sorted.reverse();
            }
            for v in sorted {
                writeln!(out, "{}", render(v, full))?;
            }
        }
        Commands::Convert { version, to } => {
            let v = parse(version.as_str())?;
            match to {
                Encoding::Text => writeln!(out, "{}", text::to_string(v))?,
                Encoding::Full => writeln!(out, "{}", v.full())?,
                Encoding::Json => writeln!(out, "{}", json::to_string(v))?,
                Encoding::Yaml => write!(out, "{}", yaml::to_string(v)?)?,
                Encoding::Bits => writeln!(out, "{}", v.to_bits())?,
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let stdout = io::stdout();
    match run(Cli::parse(), &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use semver32::ErrorKind;

    fn exec(args: &[&str]) -> Result<String, Box<dyn std::error::Error>> {
        let cli = Cli::try_parse_from(std::iter::once("semver32").chain(args.iter().copied()))?;
        let mut out = Vec::new();
        run(cli, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    fn error_kind(err: &(dyn std::error::Error + 'static)) -> Option<ErrorKind> {
        err.downcast_ref::<Error>().map(Error::kind)
    }

    #[test]
    fn test_parse() {
        assert_eq!(exec(&["parse", "1.2.0"]).unwrap(), "1.2\n");
        assert_eq!(exec(&["parse", "1.2", "--full"]).unwrap(), "1.2.0\n");
        assert_eq!(exec(&["parse", "0.3", "--bits"]).unwrap(), "0.3 0x00000300\n");
        assert_eq!(exec(&["parse", "1.2.3.4"]).unwrap(), "1.2.3\n");
    }

    #[test]
    fn test_strict_rejects_fourth_segment() {
        let err = exec(&["--strict", "parse", "1.2.3.4"]).unwrap_err();
        assert_eq!(error_kind(err.as_ref()), Some(ErrorKind::InvalidCharacter));
        assert_eq!(err.to_string(), "semver: invalid character '.' in: \"1.2.3.4\"");

        // The flag is global, so it also works after the subcommand
        let err = exec(&["parse", "1.", "--strict"]).unwrap_err();
        assert_eq!(error_kind(err.as_ref()), Some(ErrorKind::EmptySegment));
    }

    #[test]
    fn test_bump() {
        assert_eq!(exec(&["bump", "minor", "1.2.3"]).unwrap(), "1.3\n");
        assert_eq!(exec(&["bump", "patch", "1.2.3", "--full"]).unwrap(), "1.2.4\n");

        let err = exec(&["bump", "major", "65535"]).unwrap_err();
        assert_eq!(error_kind(err.as_ref()), Some(ErrorKind::MajorTooBig));
        assert_eq!(err.to_string(), "semver: major component is too big: \"65536\"");
    }

    #[test]
    fn test_set() {
        assert_eq!(exec(&["set", "1.2.3", "--minor", "0"]).unwrap(), "1.0.3\n");
        assert_eq!(
            exec(&["set", "1.2.3", "--major", "4", "--patch", "0", "--full"]).unwrap(),
            "4.2.0\n"
        );
        // Values outside the component range are rejected by the argument parser
        assert!(exec(&["set", "1.2.3", "--minor", "256"]).is_err());
    }

    #[test]
    fn test_sort() {
        assert_eq!(exec(&["sort", "1.10", "1.9", "0.0.1"]).unwrap(), "0.0.1\n1.9\n1.10\n");
        assert_eq!(
            exec(&["sort", "1.10", "1.9", "0.0.1", "--reverse"]).unwrap(),
            "1.10\n1.9\n0.0.1\n"
        );

        let err = exec(&["sort", "1", "0.256"]).unwrap_err();
        assert_eq!(error_kind(err.as_ref()), Some(ErrorKind::MinorTooBig));
    }

    #[test]
    fn test_convert() {
        assert_eq!(exec(&["convert", "0.1.0"]).unwrap(), "0.1\n");
        assert_eq!(exec(&["convert", "0.1", "--to", "full"]).unwrap(), "0.1.0\n");
        assert_eq!(exec(&["convert", "0.1", "--to", "json"]).unwrap(), "\"0.1\"\n");
        assert_eq!(exec(&["convert", "1.2.3", "--to", "bits"]).unwrap(), "66051\n");

        let doc = exec(&["convert", "1.2.3", "--to", "yaml"]).unwrap();
        assert_eq!(yaml::from_str(&doc).unwrap(), VersionNumber::new(1, 2, 3));
    }
}
