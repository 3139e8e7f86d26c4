/// An uploaded file as received from the multipart boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Upload {
    pub filename: String,
    pub size_bytes: u64,
}

impl Upload {
    pub fn new(filename: String, size_bytes: u64) -> Self {
        Self {
            filename,
            size_bytes,
        }
    }

    /// Case-sensitive suffix check. Uppercase extensions are rejected.
    pub fn is_pdf(&self) -> bool {
        self.filename.ends_with(".pdf")
    }
}
