//! Command-line arguments.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "fleet-console")]
#[command(about = "Terminal client for the fleet inventory")]
pub struct Cli {
    /// Initial location href, e.g. /vehicles?page=2
    pub href: Option<String>,
}

impl Cli {
    /// Where the console opens; the dashboard when no href is given.
    pub fn start_href(&self) -> String {
        self.href.clone().unwrap_or_else(|| "/".into())
    }
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    #[test]
    fn test_defaults_to_dashboard() {
        let cli = Cli::try_parse_from(["fleet-console"]).unwrap();
        assert_eq!(cli.start_href(), "/");
    }

    #[test]
    fn test_reads_start_href() {
        let cli = Cli::try_parse_from(["fleet-console", "/vehicles?page=2"]).unwrap();
        assert_eq!(cli.start_href(), "/vehicles?page=2");
    }

    #[test]
    fn test_help_is_not_an_href() {
        let error = Cli::try_parse_from(["fleet-console", "--help"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_rejects_unknown_flags_and_extra_arguments() {
        assert!(Cli::try_parse_from(["fleet-console", "--verbose"]).is_err());
        assert!(Cli::try_parse_from(["fleet-console", "/", "/add"]).is_err());
    }
}
