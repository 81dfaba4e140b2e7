use crate::rename::BatchResult;
use std::io::{self, Write};

/// Display the end-of-batch summary followed by the completion message
pub fn display_execution_result(result: &BatchResult, writer: &mut impl Write) -> io::Result<()> {
    if result.is_empty() {
        writeln!(writer, "No entries matched ({} checked).", result.skipped)?;
    } else {
        write!(
            writer,
            "{} matched: {} succeeded, {} failed",
            result.len(),
            result.succeeded_count(),
            result.failed_count()
        )?;

        let suppressed = result.suppressed_count();
        if suppressed > 0 {
            write!(writer, ", {} undecodable skipped", suppressed)?;
        }

        writeln!(writer, ".")?;
    }

    writeln!(writer, "{}", result.mode.completion_message())?;

    Ok(())
}
