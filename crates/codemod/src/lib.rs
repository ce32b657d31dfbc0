//! Interactive launcher for the selector codemod
//!
//! The transformation itself lives in a compiled jscodeshift transform. This
//! crate only collects the options, turns them into one `npx jscodeshift`
//! invocation and runs it with inherited standard I/O.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use wsgraph_core::types::{WsGraphError, WsGraphResult};

pub const DEFAULT_PATHS: &[&str] = &["./src"];
pub const DEFAULT_TSX: bool = true;
pub const DEFAULT_DRY_RUN: bool = false;
pub const DEFAULT_KEY_SEPARATOR: &str = ".";
pub const DEFAULT_NS_SEPARATOR: &str = ":";

/// Directory, next to the binary's parent, holding the built transform
pub const TRANSFORM_PACKAGE_DIR: &str = "codemod";

/// Everything the codemod run depends on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodemodOptions {
    pub paths: Vec<String>,
    /// `tsx` parser when true, `ts` otherwise
    pub tsx: bool,
    pub dry_run: bool,
    pub key_separator: String,
    pub ns_separator: String,
}

impl Default for CodemodOptions {
    fn default() -> Self {
        Self {
            paths: DEFAULT_PATHS.iter().map(|s| s.to_string()).collect(),
            tsx: DEFAULT_TSX,
            dry_run: DEFAULT_DRY_RUN,
            key_separator: DEFAULT_KEY_SEPARATOR.to_string(),
            ns_separator: DEFAULT_NS_SEPARATOR.to_string(),
        }
    }
}

impl CodemodOptions {
    pub fn parser(&self) -> &'static str {
        if self.tsx {
            "tsx"
        } else {
            "ts"
        }
    }
}

/// Line-based prompts over any reader/writer pair
///
/// An empty answer, or end of input, selects the default.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// `None` on an empty line or end of input
    fn ask(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}: ")?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        let answer = answer.trim();
        Ok((!answer.is_empty()).then(|| answer.to_string()))
    }

    pub fn list(&mut self, message: &str, default: &[&str]) -> io::Result<Vec<String>> {
        let answer = self.ask(message)?;
        let values: Vec<String> = answer
            .as_deref()
            .unwrap_or_default()
            .split_whitespace()
            .map(str::to_string)
            .collect();

        if values.is_empty() {
            return Ok(default.iter().map(|s| s.to_string()).collect());
        }
        Ok(values)
    }

    pub fn text(&mut self, message: &str, default: &str) -> io::Result<String> {
        Ok(self.ask(message)?.unwrap_or_else(|| default.to_string()))
    }

    /// Accepts `true`/`false`, `yes`/`no` and their first letters; asks again otherwise
    pub fn confirm(&mut self, message: &str, default: bool) -> io::Result<bool> {
        loop {
            let Some(answer) = self.ask(message)? else {
                return Ok(default);
            };
            match answer.to_ascii_lowercase().as_str() {
                "true" | "t" | "yes" | "y" => return Ok(true),
                "false" | "f" | "no" | "n" => return Ok(false),
                _ => writeln!(self.output, "Please answer true or false")?,
            }
        }
    }

    pub fn collect_options(&mut self) -> io::Result<CodemodOptions> {
        let paths = self.list(
            &format!(
                "Directories to modify (default: '{}')",
                DEFAULT_PATHS.join(" ")
            ),
            DEFAULT_PATHS,
        )?;
        let tsx = self.confirm(
            &format!("Include tsx files? (default: {DEFAULT_TSX})"),
            DEFAULT_TSX,
        )?;
        let key_separator = self.text(
            &format!("i18next key separator? (default: '{DEFAULT_KEY_SEPARATOR}')"),
            DEFAULT_KEY_SEPARATOR,
        )?;
        let ns_separator = self.text(
            &format!("Namespace separator? (default: '{DEFAULT_NS_SEPARATOR}')"),
            DEFAULT_NS_SEPARATOR,
        )?;
        let dry_run = self.confirm(
            &format!("Dry run? (default: {DEFAULT_DRY_RUN})"),
            DEFAULT_DRY_RUN,
        )?;

        Ok(CodemodOptions {
            paths,
            tsx,
            dry_run,
            key_separator,
            ns_separator,
        })
    }
}

/// `<exe dir>/../codemod/dist/cjs/transform.js`
pub fn default_transform_path(executable: &Path) -> PathBuf {
    let bin_dir = executable.parent().unwrap_or_else(|| Path::new("."));
    bin_dir
        .join("..")
        .join(TRANSFORM_PACKAGE_DIR)
        .join("dist")
        .join("cjs")
        .join("transform.js")
}

/// A fully derived external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn jscodeshift(options: &CodemodOptions, transform: &Path) -> Self {
        let mut args = vec![
            "jscodeshift".to_string(),
            format!("-t={}", transform.display()),
            format!("--parser={}", options.parser()),
        ];
        if options.dry_run {
            args.push("--dry=true".to_string());
        }
        args.push(format!("--keySeparator={}", options.key_separator));
        args.push(format!("--nsSeparator={}", options.ns_separator));

        let paths: Vec<String> = if options.paths.is_empty() {
            DEFAULT_PATHS.iter().map(|s| s.to_string()).collect()
        } else {
            options.paths.clone()
        };
        args.extend(paths);

        Self {
            program: "npx".to_string(),
            args,
        }
    }

    /// The invocation as one shell-style line, for display
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run with inherited stdio and wait; a non-zero exit is an error
    pub fn run(&self) -> WsGraphResult<()> {
        let mut command = Command::new(&self.program);
        command.args(&self.args);

        tracing::debug!(command = %self.command_line(), "spawning codemod");
        let status = command.status()?;

        if !status.success() {
            return Err(WsGraphError::ExternalProcess {
                command: self.command_line(),
                code: status.code(),
            });
        }
        Ok(())
    }
}
