//! Bridge to an out-of-process HwpEqn converter.
//!
//! The equation converter may run as a separate short-lived process reading
//! LaTeX on stdin and writing HwpEqn on stdout (the `latex2hwpeqn` binary of
//! this crate is one). A failed conversion must never block document
//! editing, so [`latex_to_hwpeqn_external`] logs the failure and hands the
//! original LaTeX back.

use std::io::{self, Read, Write};
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::utils::error::{ConversionError, ConversionResult};

const DEFAULT_PROGRAM: &str = "latex2hwpeqn";
const DEFAULT_TIMEOUT_SECS: f64 = 15.0;
const POLL_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, PartialEq)]
pub struct ExternalConverterConfig {
    pub program: String,
    pub args: Vec<String>,
    pub timeout: Duration,
}

impl Default for ExternalConverterConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            args: Vec::new(),
            timeout: Duration::from_secs_f64(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ExternalConverterConfig {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ..Self::default()
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read `HWPMATH_EQN_CMD` and `HWPMATH_EQN_TIMEOUT_SECS`.
    ///
    /// The command is split on whitespace; unset or unparsable values fall
    /// back to the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(cmd) = std::env::var("HWPMATH_EQN_CMD") {
            let mut parts = cmd.split_whitespace().map(str::to_string);
            if let Some(program) = parts.next() {
                config.program = program;
                config.args = parts.collect();
            }
        }

        if let Ok(raw) = std::env::var("HWPMATH_EQN_TIMEOUT_SECS") {
            match raw.trim().parse::<f64>() {
                Ok(secs) if secs.is_finite() && secs > 0.0 => {
                    config.timeout = Duration::from_secs_f64(secs);
                }
                _ => tracing::warn!(value = %raw, "ignoring invalid HWPMATH_EQN_TIMEOUT_SECS"),
            }
        }

        config
    }
}

/// Run the configured converter on `latex` and return its trimmed stdout.
pub fn run_external_converter(
    config: &ExternalConverterConfig,
    latex: &str,
) -> ConversionResult<String> {
    let mut child = Command::new(&config.program)
        .args(&config.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ConversionError::ExternalNotFound {
                program: config.program.clone(),
            },
            _ => ConversionError::Io(e),
        })?;

    let stdin = spawn_writer(child.stdin.take(), latex.to_string());
    let stdout = spawn_reader(child.stdout.take());
    let stderr = spawn_reader(child.stderr.take());

    let status = wait_with_deadline(&mut child, config.timeout)?;
    let stdout = join_reader(stdout);
    let stderr = join_reader(stderr);

    // A converter that exits without reading its input is judged by its
    // exit status, not by the broken pipe.
    if let Some(Err(e)) = stdin.and_then(|h| h.join().ok()) {
        if e.kind() != io::ErrorKind::BrokenPipe {
            return Err(e.into());
        }
    }

    if !status.success() {
        return Err(ConversionError::ExternalFailed {
            status: status.code(),
            stderr: stderr.trim().to_string(),
        });
    }

    let output = stdout.trim();
    if output.is_empty() {
        return Err(ConversionError::EmptyOutput);
    }
    Ok(output.to_string())
}

fn wait_with_deadline(
    child: &mut Child,
    timeout: Duration,
) -> ConversionResult<std::process::ExitStatus> {
    let deadline = Instant::now() + timeout;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(status);
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            let _ = child.wait();
            return Err(ConversionError::Timeout {
                seconds: timeout.as_secs_f64(),
            });
        }
        thread::sleep(POLL_INTERVAL);
    }
}

/// Feed `input` from its own thread so a child that never reads cannot
/// hold up the deadline. Dropping the pipe at the end signals EOF.
fn spawn_writer<W>(pipe: Option<W>, input: String) -> Option<thread::JoinHandle<io::Result<()>>>
where
    W: Write + Send + 'static,
{
    pipe.map(|mut pipe| thread::spawn(move || pipe.write_all(input.as_bytes())))
}

fn spawn_reader<R>(pipe: Option<R>) -> Option<thread::JoinHandle<String>>
where
    R: Read + Send + 'static,
{
    pipe.map(|mut pipe| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = pipe.read_to_end(&mut buf);
            String::from_utf8_lossy(&buf).into_owned()
        })
    })
}

fn join_reader(handle: Option<thread::JoinHandle<String>>) -> String {
    handle
        .and_then(|h| h.join().ok())
        .unwrap_or_default()
}

/// Convert LaTeX to HwpEqn through the external converter.
///
/// Whitespace-only input yields `""` without spawning anything. Any
/// failure is logged and the original `latex` is returned unchanged.
pub fn latex_to_hwpeqn_external(latex: &str, config: &ExternalConverterConfig) -> String {
    let text = latex.trim();
    if text.is_empty() {
        return String::new();
    }

    match run_external_converter(config, text) {
        Ok(output) => output,
        Err(ConversionError::EmptyOutput) => {
            tracing::warn!(program = %config.program, "equation converter returned empty output");
            latex.to_string()
        }
        Err(err) => {
            tracing::error!(program = %config.program, error = %err, "equation conversion failed");
            latex.to_string()
        }
    }
}
