use std::io::Write;
use std::path::Path;

use anyhow::Context;
use plain_engine::{write_text_file, EventSink};

/// Sends the text to `destination` when given, otherwise to `out`.
///
/// Status lines for the file case go to `out` as well; the underlying error
/// goes through the sink.
pub fn route(
    text: &str,
    destination: Option<&Path>,
    out: &mut dyn Write,
    sink: &dyn EventSink,
) -> anyhow::Result<()> {
    let Some(path) = destination else {
        writeln!(out, "{text}").context("failed to write to stdout")?;
        return Ok(());
    };

    match write_text_file(path, text, sink) {
        Ok(_) => {
            writeln!(out, "Text successfully written to '{}'", path.display())?;
            Ok(())
        }
        Err(err) => {
            writeln!(out, "Failed to write text to '{}'", path.display())?;
            Err(err).with_context(|| format!("writing {}", path.display()))
        }
    }
}
