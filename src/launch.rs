//! Launching the system browser.

use crate::error::Result;
use crate::exec::CommandRunner;

/// Open `url` with the platform's default browser application.
///
/// Launch failure is fatal like any other external command failure.
pub fn open_in_browser(runner: &impl CommandRunner, url: &str) -> Result<()> {
    let (program, args) = opener_command(url);
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    runner.run(program, &args)?;
    Ok(())
}

#[cfg(target_os = "macos")]
pub(crate) fn opener_command(url: &str) -> (&'static str, Vec<String>) {
    ("open", vec![url.to_string()])
}

#[cfg(target_os = "windows")]
pub(crate) fn opener_command(url: &str) -> (&'static str, Vec<String>) {
    ("cmd", vec!["/C".to_string(), "start".to_string(), url.to_string()])
}

#[cfg(all(unix, not(target_os = "macos")))]
pub(crate) fn opener_command(url: &str) -> (&'static str, Vec<String>) {
    ("xdg-open", vec![url.to_string()])
}
