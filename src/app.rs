//! The gitweb pipeline: list remotes, resolve and derive their URLs, let the
//! user pick one, open it in the browser.

use std::io::{BufRead, Write};

use colored::Colorize;

use crate::error::{Error, Result};
use crate::exec::CommandRunner;
use crate::{git, launch, select, web_url};

/// Run the whole pipeline once.
///
/// Strictly sequential: remotes are resolved one at a time in listing order,
/// and a single bad address aborts the run with no skip-and-continue.
pub fn run<C, R, W>(runner: &C, input: R, mut output: W) -> Result<()>
where
    C: CommandRunner,
    R: BufRead,
    W: Write,
{
    let remotes = git::list_remotes(runner)?;

    let mut urls = Vec::with_capacity(remotes.len());
    for name in &remotes {
        let address = git::remote_address(runner, name)?;
        urls.push(web_url::derive(&address)?);
    }

    let index = select::choose(&urls, input, &mut output)?;
    let chosen = &urls[index];

    writeln!(output, "Opening {} in browser...", chosen.cyan()).map_err(Error::Terminal)?;
    launch::open_in_browser(runner, chosen)
}
