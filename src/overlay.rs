use crate::content::Certificate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub url: String,
    pub title: String,
}

impl From<&Certificate> for Document {
    fn from(cert: &Certificate) -> Self {
        Self {
            url: cert.file.to_string(),
            title: cert.title.to_string(),
        }
    }
}

/// Certificate viewer state. Content only exists while open, so there is no
/// "open but empty" state to guard against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Overlay {
    #[default]
    Closed,
    Open(Document),
}

impl Overlay {
    /// Replaces whatever was shown before; no close in between.
    pub fn open(&mut self, url: impl Into<String>, title: impl Into<String>) {
        self.show(Document {
            url: url.into(),
            title: title.into(),
        });
    }

    pub fn open_certificate(&mut self, cert: &Certificate) {
        self.show(Document::from(cert));
    }

    fn show(&mut self, doc: Document) {
        log::debug!("overlay open: {} ({})", doc.title, doc.url);
        *self = Overlay::Open(doc);
    }

    pub fn close(&mut self) {
        if self.is_open() {
            log::debug!("overlay closed");
        }
        *self = Overlay::Closed;
    }

    /// Closes on Escape. Returns whether the key dismissed an open overlay.
    pub fn dismiss_on_key(&mut self, key: &str) -> bool {
        if key != "Escape" || !self.is_open() {
            return false;
        }
        self.close();
        true
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Overlay::Open(_))
    }

    pub fn document(&self) -> Option<&Document> {
        match self {
            Overlay::Open(doc) => Some(doc),
            Overlay::Closed => None,
        }
    }
}
