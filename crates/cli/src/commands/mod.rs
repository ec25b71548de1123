use clap::Subcommand;
use serde_json::Value;
use std::path::PathBuf;
use tasksmith_core::TaskContext;

pub mod update_json;

#[derive(Subcommand)]
pub enum Commands {
    /// Update properties of a JSON file
    #[command(visible_alias = "json")]
    UpdateJson {
        /// JSON file to update
        file: PathBuf,

        /// Property assignment; VALUE is read as JSON when it parses, else as a string
        #[arg(short = 's', long = "set", value_name = "PATH=VALUE", value_parser = parse_assignment)]
        updates: Vec<(String, Value)>,

        /// Write the result here instead of overwriting FILE
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Skip properties that do not exist instead of failing (exit code 3)
        #[arg(long)]
        allow_missing: bool,

        /// Fail when a value's type differs from the existing one (exit code 4)
        #[arg(long)]
        fail_on_type_mismatch: bool,
    },

    /// Run `dotnet test`
    DotnetTest {
        /// Project or solution file
        #[arg(long)]
        project: Option<String>,

        /// Target framework moniker
        #[arg(short, long)]
        framework: Option<String>,

        /// Build configuration
        #[arg(short, long)]
        configuration: Option<String>,

        /// Directory containing the test binaries
        #[arg(short, long)]
        output: Option<String>,

        /// Test filter expression
        #[arg(long)]
        filter: Option<String>,

        /// Run settings file
        #[arg(long)]
        settings: Option<String>,

        /// Do not build before testing
        #[arg(long)]
        no_build: bool,

        /// Path to the dotnet executable
        #[arg(long, value_name = "PATH")]
        dotnet_path: Option<String>,
    },
}

impl Commands {
    /// Run the selected task and return its status code
    pub fn execute(self, ctx: &mut TaskContext) -> i32 {
        match self {
            Commands::UpdateJson {
                file,
                updates,
                output,
                allow_missing,
                fail_on_type_mismatch,
            } => update_json::execute(
                ctx,
                update_json::Options {
                    file,
                    updates,
                    output,
                    allow_missing,
                    fail_on_type_mismatch,
                },
            ),
            Commands::DotnetTest {
                project,
                framework,
                configuration,
                output,
                filter,
                settings,
                no_build,
                dotnet_path,
            } => dotnet_test::execute(
                ctx,
                dotnet_test::Options {
                    project,
                    framework,
                    configuration,
                    output,
                    filter,
                    settings,
                    no_build,
                    dotnet_path,
                },
            ),
        }
    }
}

/// Parse `PATH=VALUE` into a property path and a JSON value
fn parse_assignment(raw: &str) -> Result<(String, Value), String> {
    let (path, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected PATH=VALUE, got '{raw}'"))?;
    if path.is_empty() {
        return Err(format!("missing property path in '{raw}'"));
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((path.to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_assignment_reads_json_literals() {
        assert_eq!(parse_assignment("version=2").unwrap(), ("version".into(), json!(2)));
        assert_eq!(parse_assignment("flag=true").unwrap(), ("flag".into(), json!(true)));
        assert_eq!(
            parse_assignment("deps={\"a\":1}").unwrap(),
            ("deps".into(), json!({"a": 1}))
        );
    }

    #[test]
    fn test_parse_assignment_falls_back_to_strings() {
        assert_eq!(
            parse_assignment("version=1.0.0.0").unwrap(),
            ("version".into(), json!("1.0.0.0"))
        );
        assert_eq!(
            parse_assignment("url=http://a?b=c").unwrap(),
            ("url".into(), json!("http://a?b=c"))
        );
        assert_eq!(parse_assignment("empty=").unwrap(), ("empty".into(), json!("")));
    }

    #[test]
    fn test_parse_assignment_rejects_bad_input() {
        assert!(parse_assignment("version").is_err());
        assert!(parse_assignment("=2").is_err());
    }
}
