use crate::config::Config;
use crate::name::EntryKind;
use crate::walker::WalkSummary;
use std::io::{self, Write};

/// Display the outcome of a completed walk
pub fn display_summary(summary: &WalkSummary, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer)?;

    if summary.is_empty() {
        writeln!(writer, "No entries needed renaming.")?;
    } else {
        writeln!(writer, "Renamed:")?;
        for op in &summary.operations {
            writeln!(
                writer,
                "  {} -> {}",
                op.source_path.display(),
                op.destination_name
            )?;
        }
        writeln!(writer)?;
    }

    writeln!(writer, "----------------------------------------")?;
    writeln!(writer, "Summary:")?;
    writeln!(
        writer,
        "  {} files renamed",
        summary.count(EntryKind::File)
    )?;
    writeln!(
        writer,
        "  {} folders renamed",
        summary.count(EntryKind::Folder)
    )?;
    if summary.unchanged > 0 {
        writeln!(writer, "  {} already normalized", summary.unchanged)?;
    }
    if summary.skipped > 0 {
        writeln!(writer, "  {} files skipped (extension)", summary.skipped)?;
    }
    if summary.non_utf8 > 0 {
        writeln!(writer, "  {} entries left as is (non UTF-8 name)", summary.non_utf8)?;
    }

    Ok(())
}

/// Print the effective configuration as pretty JSON
pub fn display_config(config: &Config, writer: &mut impl Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, config)?;
    writeln!(writer)
}
