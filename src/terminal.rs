use crate::framebuffer::FrameBuffer;
use crossterm::{cursor, style, terminal};
use std::io::{self, Write};

pub const CAPTION: &str = "Here, have a doughnut:";

/// Startup/teardown side effects: one full-screen clear and a hidden cursor
/// on construction, cursor restored on drop. Frames themselves only
/// reposition the cursor and overwrite in place, so no alternate screen.
pub struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        let mut out = io::stdout();
        crossterm::execute!(
            out,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All)
        )?;
        Ok(Self { active: true })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if !self.active {
            return;
        }
        let _ = crossterm::execute!(io::stdout(), cursor::Show);
        self.active = false;
    }
}

/// Writes one frame: cursor home, the caption line, then every row of the
/// glyph grid verbatim (blanks included), one flush at the end.
pub struct TerminalPresenter {
    caption: String,
    line: String,
}

impl TerminalPresenter {
    pub fn new() -> Self {
        Self {
            caption: CAPTION.to_string(),
            line: String::new(),
        }
    }

    pub fn with_caption(mut self, caption: &str) -> Self {
        self.caption = caption.to_string();
        self
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn present<W: Write>(&mut self, out: &mut W, frame: &FrameBuffer) -> io::Result<()> {
        crossterm::queue!(
            out,
            cursor::MoveTo(0, 0),
            style::Print(&self.caption),
            style::Print("\n")
        )?;
        for row in frame.rows() {
            self.line.clear();
            self.line.extend(row.iter().copied());
            self.line.push('\n');
            crossterm::queue!(out, style::Print(&self.line))?;
        }
        out.flush()
    }
}

impl Default for TerminalPresenter {
    fn default() -> Self {
        Self::new()
    }
}
