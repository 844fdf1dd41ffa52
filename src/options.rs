use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser, Default, Clone)]
#[clap(author, about, long_about = None, disable_version_flag = true)]
pub struct Options {
    /// Package configuration file
    #[clap(short, long, value_parser, default_value = "./debian.yml")]
    pub config: PathBuf,

    /// Directory the package tree is generated into
    #[clap(short, long, value_parser, default_value = ".")]
    pub output: PathBuf,

    /// Overrides the configured package version
    #[clap(short = 'v', long = "version", value_parser)]
    pub version: Option<String>,

    #[clap(short, long, value_parser)]
    pub quiet: bool,

    #[clap(long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_defaults_without_flags() {
        let opts = Options::parse_from(["debgen"]);

        assert_eq!(opts.config, PathBuf::from("./debian.yml"));
        assert_eq!(opts.output, PathBuf::from("."));
        assert_eq!(opts.version, None);
        assert_eq!(opts.verbosity, 0);
    }

    #[test]
    fn should_parse_short_flags() {
        let opts = Options::parse_from(["debgen", "-c", "pkg.yml", "-o", "out", "-v", "2.0"]);

        assert_eq!(opts.config, PathBuf::from("pkg.yml"));
        assert_eq!(opts.output, PathBuf::from("out"));
        assert_eq!(opts.version.as_deref(), Some("2.0"));
    }

    #[test]
    fn should_count_verbose_flags() {
        let opts = Options::parse_from(["debgen", "--verbose", "--verbose"]);

        assert_eq!(opts.verbosity, 2);
    }
}
