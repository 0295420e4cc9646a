//! The read-eval-print loop.

use std::io::{self, BufRead, Write};

use shell::{execute, Output, Session};

/// Runs `line` and writes what it produced to `out`.
///
/// Errors are reported as `command: message` and do not stop the shell.
/// Returns `false` once the user asked to leave.
pub fn run_line<W: Write>(session: &mut Session, line: &str, out: &mut W) -> io::Result<bool> {
    match execute(session, line) {
        Ok(Output::Text(text)) => writeln!(out, "{text}")?,
        Ok(Output::Empty) => {}
        Ok(Output::Exit) => return Ok(false),
        Err(err) => {
            let command = line.split_whitespace().next().unwrap_or_default();
            log::debug!("{command} failed: {err:?}");
            writeln!(out, "{command}: {err}")?;
        }
    }
    Ok(true)
}

/// Reads commands from `input` until `exit` or end of input.
///
/// With `prompt` set, the session prompt is written before every line.
/// Bytes that are not valid UTF-8 are replaced rather than ending the loop.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    out: &mut W,
    prompt: bool,
) -> io::Result<()> {
    let mut buf = Vec::new();
    loop {
        if prompt {
            write!(out, "{}", session.prompt())?;
            out.flush()?;
        }
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(|c| c == '\n' || c == '\r');
        if !run_line(session, line, out)? {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn transcript(input: &str, prompt: bool) -> String {
        transcript_bytes(input.as_bytes(), prompt)
    }

    fn transcript_bytes(input: &[u8], prompt: bool) -> String {
        let mut session = Session::default();
        let mut out = Vec::new();
        run(&mut session, input, &mut out, prompt).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn prompt_shows_the_current_directory() {
        assert_eq!(
            transcript("createdir docs\ncd docs\npwd\n", true),
            "/ $ Directory created successfully.\n/ $ /docs $ /docs\n/docs $ "
        );
    }

    #[test]
    fn exit_stops_reading() {
        assert_eq!(transcript("echo one\nquit\necho two\n", false), "one\n");
    }

    #[test]
    fn errors_name_the_command() {
        assert_eq!(
            transcript("deletefile ghost\n\nfrobnicate\n", false),
            "deletefile: File not found: /ghost\n\
            frobnicate: unknown command, type 'help' to see available commands\n"
        );
    }

    #[test]
    fn invalid_utf8_does_not_end_the_session() {
        assert_eq!(
            transcript_bytes(b"echo one\necho \xff\xfe\necho two\n", false),
            "one\n\u{fffd}\u{fffd}\ntwo\n"
        );
    }

    #[test]
    fn windows_line_endings_and_missing_final_newline() {
        assert_eq!(transcript("echo one\r\necho two", false), "one\ntwo\n");
    }
}
