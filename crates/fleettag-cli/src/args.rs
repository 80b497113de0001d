use std::path::PathBuf;

use clap::Parser;

use fleettag_model::{CollisionPolicy, Digits};
use fleettag_observe::{LoggerFormat, LoggerTimeZone};

#[derive(Debug, Parser)]
#[command(
    name = "fleettag",
    about = "Adds a stable numeric suffix to the Name of a fleet member (web -> web-03)",
    long_about = "Adds a stable numeric suffix to the Name of a fleet member. \
                  Run it once on every member, typically at boot: each run only \
                  renames its own member, and all runs agree on who gets which number.",
    version
)]
pub struct Cli {
    /// Identity of the member to tag. Defaults to $FLEETTAG_INSTANCE_ID.
    #[arg(long)]
    pub instance_id: Option<String>,

    /// Scaling group whose members share the numbering. When omitted, the group
    /// containing the instance is looked up.
    #[arg(long, conflicts_with = "basename")]
    pub asg_name: Option<String>,

    /// Name prefix shared by the fleet, used when the instance is not in a scaling group.
    #[arg(long)]
    pub basename: Option<String>,

    /// Minimum width of the numeric suffix, e.g. 3 gives <name>-007.
    #[arg(long, default_value_t = Digits::default())]
    pub digits: Digits,

    /// Provider region. Defaults to $AWS_REGION, then $AWS_DEFAULT_REGION.
    #[arg(long)]
    pub region: Option<String>,

    /// JSON inventory of scaling groups and instances.
    #[arg(long)]
    pub inventory: PathBuf,

    /// What to do when two members already share a suffix: last-wins, first-wins or reject.
    #[arg(long, default_value_t = CollisionPolicy::default())]
    pub collision: CollisionPolicy,

    /// Fresh membership queries allowed after a stale-snapshot failure.
    #[arg(long, default_value_t = 1)]
    pub refetch_attempts: u32,

    /// Compute and log the name without writing it.
    #[arg(long)]
    pub dry_run: bool,

    /// Turn on debug logging.
    #[arg(long)]
    pub debug: bool,

    /// Log output format: text, json or journald.
    #[arg(long, default_value_t = LoggerFormat::default())]
    pub log_format: LoggerFormat,

    /// Timezone for log timestamps: utc or local.
    #[arg(long, default_value_t = LoggerTimeZone::default())]
    pub log_tz: LoggerTimeZone,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_apply() {
        let cli = Cli::try_parse_from(["fleettag", "--inventory", "inv.json"]).unwrap();
        assert_eq!(cli.digits, Digits::default());
        assert_eq!(cli.collision, CollisionPolicy::LastWins);
        assert_eq!(cli.refetch_attempts, 1);
        assert_eq!(cli.log_format, LoggerFormat::Text);
        assert!(!cli.dry_run);
        assert!(cli.instance_id.is_none());
    }

    #[test]
    fn parses_all_options() {
        let cli = Cli::try_parse_from([
            "fleettag",
            "--instance-id",
            "i-1",
            "--basename",
            "web",
            "--digits",
            "3",
            "--region",
            "eu-west-1",
            "--inventory",
            "inv.json",
            "--collision",
            "reject",
            "--dry-run",
            "--debug",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.instance_id.as_deref(), Some("i-1"));
        assert_eq!(cli.basename.as_deref(), Some("web"));
        assert_eq!(cli.digits.get(), 3);
        assert_eq!(cli.collision, CollisionPolicy::Reject);
        assert_eq!(cli.log_format, LoggerFormat::Json);
        assert!(cli.dry_run && cli.debug);
    }

    #[test]
    fn asg_name_and_basename_conflict() {
        let res = Cli::try_parse_from([
            "fleettag",
            "--inventory",
            "inv.json",
            "--asg-name",
            "web-asg",
            "--basename",
            "web",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn zero_digits_is_rejected() {
        let res = Cli::try_parse_from(["fleettag", "--inventory", "inv.json", "--digits", "0"]);
        assert!(res.is_err());
    }
}
