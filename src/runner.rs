//! # External Command Execution
//!
//! The reconciler's only side effect beyond plain filesystem calls is
//! invoking the `git` and `svn` binaries. That surface is kept behind the
//! narrow [`CommandRunner`] trait so reconciliation decision logic can be
//! exercised against a scripted fake instead of real VCS binaries — the
//! same seam the repository manager uses for git operations in tests.
//!
//! A non-zero exit is *data* ([`CommandOutput::success`] is false), not an
//! `Err`: the caller decides whether a failed step matters. `Err` is
//! reserved for not being able to run the command at all (binary missing,
//! spawn failure).

use std::process::Command;

use log::debug;

use crate::error::{Error, Result};

/// Captured result of one external command invocation.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Whether the command exited with status zero.
    pub success: bool,
    /// Raw exit code; `None` when the process was killed by a signal.
    pub code: Option<i32>,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
}

/// Narrow interface for invoking external version-control commands.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput>;
}

/// [`CommandRunner`] backed by real process execution.
///
/// Uses the system binaries, which automatically pick up SSH keys,
/// credential helpers and any other authentication the user has
/// configured for git or svn.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        debug!("running: {} {}", program, args.join(" "));

        let output = Command::new(program).args(args).output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::BinaryNotFound {
                    binary: program.to_string(),
                }
            } else {
                Error::Io(e)
            }
        })?;

        Ok(CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

#[cfg(test)]
pub(crate) mod fake {
    //! Scripted [`CommandRunner`] for reconciler tests.

    use super::{CommandOutput, CommandRunner};
    use crate::error::{Error, Result};
    use std::cell::RefCell;

    /// Canned outcome for a matched command.
    pub enum Scripted {
        /// Exit zero with the given stdout.
        Ok { stdout: &'static str },
        /// Exit non-zero with the given code and stderr.
        Fail { code: i32, stderr: &'static str },
        /// Spawn failure: the binary is not on PATH.
        NotFound,
    }

    type Effect = Box<dyn Fn()>;

    /// Replays canned outcomes by substring match against the full command
    /// line, records every invocation, and can run a side effect when a
    /// rule matches (e.g. creating the directory a real `git clone` would
    /// create). Unmatched commands succeed with empty output.
    #[derive(Default)]
    pub struct ScriptedRunner {
        rules: Vec<(String, Scripted, Option<Effect>)>,
        calls: RefCell<Vec<String>>,
    }

    impl ScriptedRunner {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn on(mut self, pattern: &str, outcome: Scripted) -> Self {
            self.rules.push((pattern.to_string(), outcome, None));
            self
        }

        pub fn on_with(
            mut self,
            pattern: &str,
            outcome: Scripted,
            effect: impl Fn() + 'static,
        ) -> Self {
            self.rules
                .push((pattern.to_string(), outcome, Some(Box::new(effect))));
            self
        }

        /// Every command line seen so far, in invocation order.
        pub fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        pub fn call_count(&self, pattern: &str) -> usize {
            self.calls
                .borrow()
                .iter()
                .filter(|line| line.contains(pattern))
                .count()
        }
    }

    impl CommandRunner for ScriptedRunner {
        fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
            let line = format!("{} {}", program, args.join(" "));
            self.calls.borrow_mut().push(line.clone());

            for (pattern, outcome, effect) in &self.rules {
                if !line.contains(pattern.as_str()) {
                    continue;
                }
                if let Some(effect) = effect {
                    effect();
                }
                return match outcome {
                    Scripted::Ok { stdout } => Ok(CommandOutput {
                        success: true,
                        code: Some(0),
                        stdout: stdout.to_string(),
                        stderr: String::new(),
                    }),
                    Scripted::Fail { code, stderr } => Ok(CommandOutput {
                        success: false,
                        code: Some(*code),
                        stdout: String::new(),
                        stderr: stderr.to_string(),
                    }),
                    Scripted::NotFound => Err(Error::BinaryNotFound {
                        binary: program.to_string(),
                    }),
                };
            }

            Ok(CommandOutput {
                success: true,
                code: Some(0),
                stdout: String::new(),
                stderr: String::new(),
            })
        }
    }
}
