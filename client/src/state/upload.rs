//! Upload/generation state machine for the studio page.
//!
//! One explicit state object owns everything the page mutates: the selected
//! file, the in-flight flag, and the result URL. Event handlers go through
//! these transitions instead of poking at DOM state directly.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

/// Client-side record of the chosen file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedImage {
    pub name: String,
    pub mime: String,
    pub size: u64,
    /// Local data-URL preview, present once the async file read completes.
    pub preview: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadState {
    pub selected: Option<SelectedImage>,
    pub generating: bool,
    /// Result URL exactly as returned by the API. The relayed display form
    /// is derived at render time; this original is kept for download.
    pub result_url: Option<String>,
}

impl UploadState {
    /// A validated file was chosen. Clears any previous result; the preview
    /// arrives later via [`Self::set_preview`].
    pub fn select(&mut self, name: String, mime: String, size: u64) {
        self.selected = Some(SelectedImage { name, mime, size, preview: None });
        self.result_url = None;
    }

    /// The async local read finished. Ignored if the selection was cleared
    /// while the read was in flight.
    pub fn set_preview(&mut self, data_url: String) {
        if let Some(selected) = &mut self.selected {
            selected.preview = Some(data_url);
        }
    }

    /// Remove the chosen file and its preview.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Start generation if a file is selected and none is in flight.
    /// Returns whether the transition happened.
    pub fn begin_generate(&mut self) -> bool {
        if self.generating || self.selected.is_none() {
            return false;
        }
        self.generating = true;
        true
    }

    /// Generation finished; `result` is `Some` on success.
    pub fn finish_generate(&mut self, result: Option<String>) {
        self.generating = false;
        if result.is_some() {
            self.result_url = result;
        }
    }

    /// Back to a blank page: no selection, no result.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn can_generate(&self) -> bool {
        self.selected.is_some() && !self.generating
    }

    #[must_use]
    pub fn preview(&self) -> Option<&str> {
        self.selected.as_ref()?.preview.as_deref()
    }
}
