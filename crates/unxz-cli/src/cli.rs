use std::path::PathBuf;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use unxz::ExtractOptions;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Extract a .tar.xz archive into a directory.
#[derive(Debug, Parser)]
#[command(name = "unxz", about, version(VERSION))]
pub struct Config {
    #[arg(value_name("ARCHIVE"), help("Path to the .tar.xz archive"))]
    pub archive: PathBuf,
    #[arg(value_name("DESTINATION"), help("Directory to extract into"))]
    pub destination: PathBuf,
    #[arg(
        short,
        long,
        help("Drop the archive's top-level folder from every entry path")
    )]
    pub strip_components: bool,
    #[arg(long, help("Do not apply file modes stored in the archive"))]
    pub no_permissions: bool,
    #[arg(
        long,
        value_name("LevelFilter"),
        help("Log level written to stderr"),
        default_value("warn")
    )]
    pub log_level: LevelFilter,
}

impl Config {
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions::default()
            .strip_leading_component(self.strip_components)
            .preserve_permissions(!self.no_permissions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_positional_paths() {
        let config = Config::parse_from(["unxz", "pkg.tar.xz", "out"]);
        assert_eq!(config.archive, PathBuf::from("pkg.tar.xz"));
        assert_eq!(config.destination, PathBuf::from("out"));
        assert!(!config.strip_components);
        assert_eq!(config.log_level, LevelFilter::WARN);
    }

    #[test]
    fn flags_map_onto_options() {
        let config = Config::parse_from([
            "unxz",
            "pkg.tar.xz",
            "out",
            "--strip-components",
            "--no-permissions",
            "--log-level",
            "debug",
        ]);
        let options = config.extract_options();
        assert!(options.strip_leading_component);
        assert!(!options.preserve_permissions);
        assert_eq!(config.log_level, LevelFilter::DEBUG);
    }

    #[test]
    fn destination_is_required() {
        assert!(Config::try_parse_from(["unxz", "pkg.tar.xz"]).is_err());
    }
}
