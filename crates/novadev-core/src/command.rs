//! Command results and the external tool runner.

use std::process::Command;

use crate::error::{Error, Result};

/// Captured failure of an external tool run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandError {
    /// Human-readable failure message.
    pub message: String,
    /// Raw output (stdout then stderr) captured from the tool.
    pub output: String,
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Outcome of one external tool invocation.
///
/// Exit codes are summable, so a run over several tools reports a single
/// aggregate status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    /// Process exit code.
    pub exit_code: i32,
    /// Failure details, if the tool reported any.
    pub error: Option<CommandError>,
    /// Accumulated stdout text.
    pub result: Option<String>,
}

impl CommandResult {
    /// Merges two optional group results into one.
    ///
    /// Exit codes add; error messages, error output, and result text
    /// concatenate in (first, second) order. A `None` group contributes
    /// nothing.
    #[must_use]
    pub fn combine(first: Option<Self>, second: Option<Self>) -> Self {
        let mut combined = Self::default();
        for item in [first, second].into_iter().flatten() {
            combined.exit_code += item.exit_code;
            if let Some(error) = item.error {
                match combined.error.as_mut() {
                    Some(existing) => {
                        existing.message.push_str(&error.message);
                        existing.output.push_str(&error.output);
                    }
                    None => combined.error = Some(error),
                }
            }
            if let Some(text) = item.result {
                match combined.result.as_mut() {
                    Some(existing) => existing.push_str(&text),
                    None => combined.result = Some(text),
                }
            }
        }
        combined
    }
}

/// Runs an external tool, capturing its output.
///
/// Failing to launch the program is a hard error. A non-zero exit, or
/// anything written to stderr, is folded into the returned result's
/// `error` field instead.
///
/// # Errors
///
/// Returns [`Error::Spawn`] if the program could not be started.
pub fn run_command(program: &str, args: &[String]) -> Result<CommandResult> {
    let rendered = render_command(program, args);
    tracing::debug!("running: {rendered}");

    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| Error::Spawn {
            command: rendered.clone(),
            source: e,
        })?;

    let exit_code = output.status.code().unwrap_or(1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    let error = if exit_code != 0 || !stderr.trim().is_empty() {
        let mut captured = stdout.clone();
        captured.push_str(&stderr);
        Some(CommandError {
            message: format!("`{rendered}` exited with code {exit_code}"),
            output: captured,
        })
    } else {
        None
    };

    Ok(CommandResult {
        exit_code,
        error,
        result: Some(stdout),
    })
}

fn render_command(program: &str, args: &[String]) -> String {
    let mut rendered = program.to_string();
    for arg in args {
        rendered.push(' ');
        rendered.push_str(arg);
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passing() -> CommandResult {
        CommandResult {
            exit_code: 0,
            error: None,
            result: None,
        }
    }

    fn failing(code: i32, message: &str) -> CommandResult {
        CommandResult {
            exit_code: code,
            error: Some(CommandError {
                message: message.to_string(),
                output: String::new(),
            }),
            result: None,
        }
    }

    #[test]
    fn combine_sums_exit_codes() {
        let combined = CommandResult::combine(Some(passing()), Some(failing(1, "boom")));
        assert_eq!(combined.exit_code, 1);
    }

    #[test]
    fn combine_concatenates_error_messages_in_order() {
        let combined =
            CommandResult::combine(Some(failing(2, "first")), Some(failing(3, "second")));
        assert_eq!(combined.exit_code, 5);
        assert_eq!(combined.error.unwrap().message, "firstsecond");
    }

    #[test]
    fn combine_keeps_single_error_intact() {
        let combined = CommandResult::combine(Some(failing(1, "only")), Some(passing()));
        assert_eq!(combined.error.unwrap().message, "only");
    }

    #[test]
    fn combine_concatenates_result_text() {
        let first = CommandResult {
            result: Some("aaa".to_string()),
            ..CommandResult::default()
        };
        let second = CommandResult {
            result: Some("bbb".to_string()),
            ..CommandResult::default()
        };
        let combined = CommandResult::combine(Some(first), Some(second));
        assert_eq!(combined.result.as_deref(), Some("aaabbb"));
    }

    #[test]
    fn combine_with_no_groups_is_default() {
        let combined = CommandResult::combine(None, None);
        assert_eq!(combined, CommandResult::default());
    }

    #[test]
    fn run_command_captures_stdout_on_success() {
        let args = vec!["-c".to_string(), "printf ok".to_string()];
        let result = run_command("sh", &args).unwrap();
        assert_eq!(result.exit_code, 0);
        assert!(result.error.is_none());
        assert_eq!(result.result.as_deref(), Some("ok"));
    }

    #[test]
    fn run_command_folds_nonzero_exit_into_result() {
        let args = vec!["-c".to_string(), "printf bad >&2; exit 3".to_string()];
        let result = run_command("sh", &args).unwrap();
        assert_eq!(result.exit_code, 3);
        let error = result.error.unwrap();
        assert!(error.message.contains("exited with code 3"));
        assert!(error.output.contains("bad"));
    }

    #[test]
    fn run_command_treats_stderr_as_failure_even_on_zero_exit() {
        let args = vec!["-c".to_string(), "printf warn >&2".to_string()];
        let result = run_command("sh", &args).unwrap();
        assert_eq!(result.exit_code, 0);
        assert!(result.error.is_some());
    }

    #[test]
    fn run_command_errors_when_program_is_missing() {
        let result = run_command("novadev-no-such-binary", &[]);
        assert!(matches!(result, Err(Error::Spawn { .. })));
    }
}
