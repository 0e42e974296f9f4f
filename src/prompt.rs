//! Interactive operator prompts: the root path at startup and the exit
//! acknowledgment once the run is over.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Directory containing the running executable
pub fn program_dir() -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "executable has no parent directory",
        )
    })
}

/// Ask for the directory to process.
///
/// An empty line selects `default`; relative input is taken relative to it.
/// Closed input is an error, never a silent default.
pub fn prompt_target(
    input: &mut impl BufRead,
    output: &mut impl Write,
    default: &Path,
) -> io::Result<PathBuf> {
    writeln!(output, "Current path:\n    {}\n", default.display())?;
    writeln!(output, "Path to rename files (Default: current path):")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before a path was entered",
        ));
    }

    let answer = line.trim_end_matches(['\r', '\n']);
    if answer.is_empty() {
        Ok(default.to_path_buf())
    } else {
        Ok(default.join(answer))
    }
}

/// Block until the operator presses enter (or stdin closes)
pub fn wait_for_ack(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<()> {
    writeln!(output, "Finish! Press enter to exit.")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_empty_answer_uses_default() {
        let mut input = Cursor::new("\n");
        let mut output = Vec::new();

        let path = prompt_target(&mut input, &mut output, Path::new("/tools")).unwrap();

        assert_eq!(path, PathBuf::from("/tools"));
        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("Current path:\n    /tools"));
        assert!(shown.contains("Path to rename files"));
    }

    #[test]
    fn test_closed_input_is_error() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let err = prompt_target(&mut input, &mut output, Path::new("/tools")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_surrounding_spaces_kept() {
        let mut input = Cursor::new("  spaced dir \n");
        let mut output = Vec::new();

        let path = prompt_target(&mut input, &mut output, Path::new("/tools")).unwrap();
        assert_eq!(path, PathBuf::from("/tools/  spaced dir "));
    }

    #[test]
    fn test_relative_answer() {
        let mut input = Cursor::new("textures/wood\r\n");
        let mut output = Vec::new();

        let path = prompt_target(&mut input, &mut output, Path::new("/tools")).unwrap();
        assert_eq!(path, PathBuf::from("/tools/textures/wood"));
    }

    #[test]
    fn test_absolute_answer() {
        let mut input = Cursor::new("/library/pbr\n");
        let mut output = Vec::new();

        let path = prompt_target(&mut input, &mut output, Path::new("/tools")).unwrap();
        assert_eq!(path, PathBuf::from("/library/pbr"));
    }

    #[test]
    fn test_wait_for_ack() {
        let mut input = Cursor::new("\n");
        let mut output = Vec::new();

        wait_for_ack(&mut input, &mut output).unwrap();
        assert!(String::from_utf8(output).unwrap().contains("Press enter to exit"));
    }
}
