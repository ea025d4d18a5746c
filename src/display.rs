//! Output surface for the display buffer.

/// Surface that shows the calculator's current text.
///
/// The calculator calls [`set_text`](DisplaySurface::set_text) after every
/// accepted input and after every evaluation.
pub trait DisplaySurface {
    fn set_text(&mut self, text: &str);
}

/// Display that keeps the last text written to it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextDisplay {
    text: String,
    writes: usize,
}

impl TextDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of times the text was set.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl DisplaySurface for TextDisplay {
    fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.writes += 1;
    }
}

impl<F> DisplaySurface for F
where
    F: FnMut(&str),
{
    fn set_text(&mut self, text: &str) {
        self(text)
    }
}
