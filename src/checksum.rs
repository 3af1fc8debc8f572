//! Read-only checksum display.

pub const TITLE: &str = "Verify file checksum";
pub const LEAD: &str = "The SHA256 checksum of this file is:";

/// What the checksum modal shows. The checksum is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecksumView<'a> {
    pub title: &'static str,
    pub lead: &'static str,
    pub checksum: &'a str,
}

pub fn render(checksum: &str) -> ChecksumView<'_> {
    ChecksumView { title: TITLE, lead: LEAD, checksum }
}

impl std::fmt::Display for ChecksumView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f)?;
        writeln!(f, "{}", self.lead)?;
        write!(f, "    {}", self.checksum)
    }
}

/// Checksum modal together with its visibility.
///
/// Visibility belongs to the caller; the modal only reports dismissal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChecksumModal {
    checksum: Option<String>,
}

impl ChecksumModal {
    pub fn show(&mut self, checksum: impl Into<String>) {
        self.checksum = Some(checksum.into());
    }

    pub fn dismiss(&mut self) {
        self.checksum = None;
    }

    pub fn is_visible(&self) -> bool {
        self.checksum.is_some()
    }

    /// `None` while hidden.
    pub fn view(&self) -> Option<ChecksumView<'_>> {
        self.checksum.as_deref().map(render)
    }
}
