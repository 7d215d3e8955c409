use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::PathBuf;

use crate::error::MapError;
use crate::grid::Grid;
use crate::loader::Loader;
use crate::render::render;
use crate::solve::solve;

/// The one line a failed session is allowed to say.
pub const DIAGNOSTIC: &str = "map error";

/// Drains a source through a fresh loader.
pub fn load<R: Read>(input: R) -> Result<Grid, MapError> {
    let mut loader = Loader::new();
    for byte in BufReader::new(input).bytes() {
        loader.feed(byte?);
    }
    loader.finish()
}

/// Runs one full parse-validate-solve-render session over a source.
///
/// The stream is consumed to its end before anything is decided; on any
/// violation nothing is written and the error comes back to the caller.
/// All session state lives and dies inside this call.
pub fn run<R: Read, W: Write>(input: R, output: &mut W) -> Result<(), MapError> {
    let grid = load(input)?;
    let best = solve(&grid)?;
    log::debug!(
        "{}x{} map, best square {} ending at ({}, {})",
        grid.height(),
        grid.width(),
        best.size,
        best.row,
        best.col
    );
    render(&grid, best, output)?;
    Ok(())
}

/// Processes every named source in order, or stdin when none are named.
///
/// Each source gets its own session; a failed one writes the fixed
/// diagnostic to `diag` and nothing to `output`. Outputs of successive
/// sources are separated by one blank line, failed or not, with none after
/// the last. A source that cannot even be opened is skipped with a log
/// entry and no diagnostic.
pub fn run_sources<W, D>(paths: &[PathBuf], output: &mut W, diag: &mut D) -> io::Result<()>
where
    W: Write,
    D: Write,
{
    if paths.is_empty() {
        let stdin = io::stdin();
        if let Err(err) = run(stdin.lock(), output) {
            log::debug!("stdin: session failed: {err}");
            writeln!(diag, "{DIAGNOSTIC}")?;
        }
        return Ok(());
    }
    for (index, path) in paths.iter().enumerate() {
        match File::open(path) {
            Ok(file) => {
                if let Err(err) = run(file, output) {
                    log::debug!("{}: session failed: {err}", path.display());
                    writeln!(diag, "{DIAGNOSTIC}")?;
                }
            }
            Err(err) => log::warn!("{}: {err}", path.display()),
        }
        if index + 1 != paths.len() {
            output.write_all(b"\n")?;
        }
    }
    Ok(())
}
