use anyhow::{anyhow, Result};

pub const USAGE: &str = "\
usage: tui-bowling [--json] [--log PATH] [ROLL...]

With no rolls, starts an interactive scoreboard in the terminal.
With rolls, bowls them in order and prints the scoreboard.

ROLL is a pin count (0-10) or a frame written in scoresheet marks:
  X strike, / spare, - miss (e.g. X 7/ 9- X81)
A token of digits alone is always one ball: write 8 1, not 81.

options:
  --json        print the game snapshot as JSON instead of the scoreboard
  --log PATH    append a JSON line per roll to PATH (overrides BOWLING_LOG_PATH)
  -h, --help    show this message";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    pub json: bool,
    pub log_path: Option<String>,
    pub help: bool,
    pub rolls: Vec<String>,
}

impl CliConfig {
    pub fn is_interactive(&self) -> bool {
        self.rolls.is_empty()
    }
}

pub fn parse_cli_args(args: &[String]) -> Result<CliConfig> {
    let mut config = CliConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--json" => config.json = true,
            "--log" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --log"))?;
                config.log_path = Some(v.clone());
            }
            "-h" | "--help" => config.help = true,
            other if other.starts_with("--") => {
                return Err(anyhow!("unknown argument: {}", other));
            }
            roll => config.rolls.push(roll.to_string()),
        }
        i += 1;
    }

    if config.json && config.rolls.is_empty() && !config.help {
        return Err(anyhow!("--json needs rolls to bowl"));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_args_is_interactive() {
        let config = parse_cli_args(&[]).unwrap();
        assert!(config.is_interactive());
        assert!(!config.json);
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn test_rolls_and_flags() {
        let config = parse_cli_args(&args(&["--json", "X", "7/", "--log", "rolls.jsonl", "-"])).unwrap();
        assert!(config.json);
        assert_eq!(config.log_path.as_deref(), Some("rolls.jsonl"));
        assert_eq!(config.rolls, args(&["X", "7/", "-"]));
        assert!(!config.is_interactive());
    }

    #[test]
    fn test_help() {
        assert!(parse_cli_args(&args(&["--help"])).unwrap().help);
        assert!(parse_cli_args(&args(&["-h"])).unwrap().help);
    }

    #[test]
    fn test_errors() {
        let err = parse_cli_args(&args(&["--log"])).unwrap_err();
        assert_eq!(err.to_string(), "missing value for --log");

        let err = parse_cli_args(&args(&["--frames", "3"])).unwrap_err();
        assert_eq!(err.to_string(), "unknown argument: --frames");

        let err = parse_cli_args(&args(&["--json"])).unwrap_err();
        assert_eq!(err.to_string(), "--json needs rolls to bowl");
    }
}
