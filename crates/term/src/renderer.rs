//! TerminalRenderer: flushes rendered lines to a real terminal.
//!
//! Draws start with a full redraw and then only rewrite lines that changed.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<Vec<String>>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    pub fn draw(&mut self, lines: &[String]) -> Result<()> {
        self.buf.clear();
        match &self.last {
            Some(prev) => encode_diff_into(prev, lines, &mut self.buf)?,
            None => encode_full_into(lines, &mut self.buf)?,
        }
        self.flush_buf()?;

        copy_lines(self.last.get_or_insert_with(Vec::new), lines);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Copy `lines` into `dst`, reusing its string buffers.
fn copy_lines(dst: &mut Vec<String>, lines: &[String]) {
    dst.truncate(lines.len());
    for (d, src) in dst.iter_mut().zip(lines) {
        d.clone_from(src);
    }
    let have = dst.len();
    dst.extend(lines[have..].iter().cloned());
}

/// Encode a full redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(lines: &[String], out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    for (y, line) in lines.iter().enumerate() {
        out.queue(Print(line))?;
        if y + 1 < lines.len() {
            out.queue(Print("\r\n"))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode a redraw of the changed lines into `out`.
///
/// Lines beyond the end of `next` are cleared.
pub fn encode_diff_into(prev: &[String], next: &[String], out: &mut Vec<u8>) -> Result<()> {
    for_each_changed_line(prev, next, |y| {
        out.queue(cursor::MoveTo(0, y))?;
        out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
        if let Some(line) = next.get(usize::from(y)) {
            out.queue(Print(line))?;
        }
        Ok(())
    })?;

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn for_each_changed_line(
    prev: &[String],
    next: &[String],
    mut f: impl FnMut(u16) -> Result<()>,
) -> Result<()> {
    let rows = prev.len().max(next.len());
    for y in 0..rows {
        if prev.get(y) != next.get(y) {
            f(u16::try_from(y).unwrap_or(u16::MAX))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn full_redraw_contains_every_line() {
        let mut out = Vec::new();
        encode_full_into(&lines(&["|X|", "| 30|"]), &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("|X|"));
        assert!(text.contains("| 30|"));
    }

    #[test]
    fn changed_lines_only() {
        let prev = lines(&["a", "b", "c"]);
        let next = lines(&["a", "B", "c", "d"]);

        let mut rows = Vec::new();
        for_each_changed_line(&prev, &next, |y| {
            rows.push(y);
            Ok(())
        })
        .unwrap();
        assert_eq!(rows, vec![1, 3]);
    }

    #[test]
    fn removed_lines_are_redrawn() {
        let prev = lines(&["a", "b", "c"]);
        let next = lines(&["a"]);

        let mut rows = Vec::new();
        for_each_changed_line(&prev, &next, |y| {
            rows.push(y);
            Ok(())
        })
        .unwrap();
        assert_eq!(rows, vec![1, 2]);

        let mut out = Vec::new();
        encode_diff_into(&prev, &next, &mut out).unwrap();
        assert!(!String::from_utf8_lossy(&out).contains('b'));
    }

    #[test]
    fn line_store_reuses_buffers() {
        let mut store = lines(&["x", "y", "z"]);
        copy_lines(&mut store, &lines(&["p", "q"]));
        assert_eq!(store, lines(&["p", "q"]));
        copy_lines(&mut store, &lines(&["1", "2", "3", "4"]));
        assert_eq!(store, lines(&["1", "2", "3", "4"]));
    }
}
