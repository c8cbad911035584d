//! Input method selector and the OCR text panel

use std::fs;
use std::path::PathBuf;

/// How the user fills the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMethod {
    #[default]
    Manual,
    Ocr,
}

impl InputMethod {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Manual => Self::Ocr,
            Self::Ocr => Self::Manual,
        };
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Manual => "Insertion Manuelle",
            Self::Ocr => "Insertion OCR",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "manual" | "manuel" => Some(Self::Manual),
            "ocr" => Some(Self::Ocr),
            _ => None,
        }
    }
}

/// Focus inside the OCR panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OcrFocus {
    #[default]
    Path,
    Text,
}

/// Raw text produced by an external OCR scan, waiting for extraction
#[derive(Debug, Clone, Default)]
pub struct OcrPanel {
    pub source_path: String,
    pub raw_text: String,
    pub focus: OcrFocus,
    /// An extraction for this panel is in flight
    pub pending: bool,
}

impl OcrPanel {
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            OcrFocus::Path => OcrFocus::Text,
            OcrFocus::Text => OcrFocus::Path,
        };
    }

    pub fn push_char(&mut self, c: char) {
        match self.focus {
            OcrFocus::Path => self.source_path.push(c),
            OcrFocus::Text => self.raw_text.push(c),
        }
    }

    pub fn pop_char(&mut self) {
        match self.focus {
            OcrFocus::Path => self.source_path.pop(),
            OcrFocus::Text => self.raw_text.pop(),
        };
    }

    pub fn newline(&mut self) {
        if self.focus == OcrFocus::Text {
            self.raw_text.push('\n');
        }
    }

    /// Replace the raw text with the content of the file at `source_path`
    pub fn load_source(&mut self) -> anyhow::Result<PathBuf> {
        let path = PathBuf::from(self.source_path.trim());
        self.raw_text = fs::read_to_string(&path)?;
        self.focus = OcrFocus::Text;
        Ok(path)
    }

    /// Text to hand to the extractor, if any
    pub fn text(&self) -> Option<&str> {
        let text = self.raw_text.trim();
        (!text.is_empty()).then_some(text)
    }
}
