//! What selecting a result does
//!
//! Results never decrypt anything themselves. Each one carries a [`Script`]:
//! the `pass` invocation that does the work, optionally followed by a desktop
//! notification. Invocations are argument vectors, so entry names are never
//! interpreted by a shell when the script is run from here.

use std::process::{Command, Stdio};

use serde::Serialize;

use crate::consts::{GENERATE_ICON, NOTIFY_BINARY, PASS_BINARY, SEARCH_ICON};
use crate::error::{LauncherError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new<S>(program: S) -> Self
    where
        S: Into<String>,
    {
        Invocation {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg<S>(mut self, arg: S) -> Self
    where
        S: Into<String>,
    {
        self.args.push(arg.into());
        self
    }

    /// Renders the invocation as one POSIX shell command line.
    pub fn to_shell(&self) -> String {
        std::iter::once(&self.program)
            .chain(&self.args)
            .map(|word| shell_quote(word))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn run(&self) -> Result<()> {
        log::info!("running {}", self.to_shell());

        let status = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|err| LauncherError::SpawnFailed(self.program.clone(), err))?;

        if status.success() {
            Ok(())
        } else {
            Err(LauncherError::CommandFailed(
                self.program.clone(),
                status.to_string(),
            ))
        }
    }
}

/// Invocations run one after another, stopping at the first failure (`&&`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Script {
    pub steps: Vec<Invocation>,
}

impl Script {
    pub fn to_shell(&self) -> String {
        self.steps
            .iter()
            .map(Invocation::to_shell)
            .collect::<Vec<_>>()
            .join(" && ")
    }

    pub fn run(&self) -> Result<()> {
        self.steps.iter().try_for_each(Invocation::run)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultItem {
    pub icon: String,
    pub name: String,
    pub description: String,
    pub on_enter: Script,
}

/// `pass -c <entry>`, then a notification if `notify`.
pub fn copy_script(entry: &str, notify: bool) -> Script {
    let mut steps = vec![Invocation::new(PASS_BINARY).arg("-c").arg(entry)];
    if notify {
        steps.push(
            Invocation::new(NOTIFY_BINARY)
                .arg("Password copied")
                .arg(format!("Password for {} copied to clipboard", entry)),
        );
    }

    Script { steps }
}

/// `pass generate -c <name>`, then a notification if `notify`.
pub fn generate_script(name: &str, notify: bool) -> Script {
    let mut steps = vec![Invocation::new(PASS_BINARY)
        .arg("generate")
        .arg("-c")
        .arg(name)];
    if notify {
        steps.push(
            Invocation::new(NOTIFY_BINARY)
                .arg("Password generated")
                .arg(format!(
                    "Password for {} generated and copied to clipboard",
                    name
                )),
        );
    }

    Script { steps }
}

pub fn search_result(entry: &str, notify: bool) -> ResultItem {
    ResultItem {
        icon: SEARCH_ICON.to_owned(),
        name: entry.to_owned(),
        description: entry.to_owned(),
        on_enter: copy_script(entry, notify),
    }
}

pub fn generate_result(name: &str, notify: bool) -> ResultItem {
    ResultItem {
        icon: GENERATE_ICON.to_owned(),
        name: format!("Generate password: {}", name),
        description: format!("Generate a password for {}", name),
        on_enter: generate_script(name, notify),
    }
}

fn shell_quote(word: &str) -> String {
    let plain = |c: char| c.is_ascii_alphanumeric() || "@%+=:,./_-".contains(c);

    if !word.is_empty() && word.chars().all(plain) {
        word.to_owned()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}
