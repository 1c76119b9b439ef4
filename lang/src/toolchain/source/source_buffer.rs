use bstr::BStr;
use std::fs::File;

enum SourceBufferKind<'a> {
    File { buffer: mmap_rs::Mmap },
    Memory { bytes: &'a [u8] },
}

// Keeps source and a file name in the same object, so they provide the same lifetimes.
pub struct SourceBuffer<'a> {
    kind: SourceBufferKind<'a>,
    file_name: String,
}

impl<'a> SourceBuffer<'a> {
    /// Maps the whole file read-only. Does nothing to check if the input is valid utf-8, the lexer
    /// works on raw bytes.
    pub fn new_from_file(file_path: &std::path::Path) -> Result<SourceBuffer<'static>, mmap_rs::Error> {
        let file = File::open(file_path)?;
        let len = File::metadata(&file)?.len();
        let file_name = file_path.display().to_string();

        // Zero-length mappings are rejected by the OS.
        if len == 0 {
            return Ok(SourceBuffer { kind: SourceBufferKind::Memory { bytes: &[] }, file_name });
        }

        let size = usize::try_from(len).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
        })?;
        let buffer = unsafe { mmap_rs::MmapOptions::new(size)?.with_file(&file, 0).map()? };
        Ok(SourceBuffer { kind: SourceBufferKind::File { buffer }, file_name })
    }

    pub fn new_from_string(string: &'a str, name: &str) -> SourceBuffer<'a> {
        SourceBuffer::new_from_bytes(string.as_bytes(), name)
    }

    pub fn new_from_bytes(bytes: &'a [u8], name: &str) -> SourceBuffer<'a> {
        SourceBuffer { kind: SourceBufferKind::Memory { bytes }, file_name: String::from(name) }
    }

    pub fn code(&self) -> &'_ BStr {
        match &self.kind {
            SourceBufferKind::File { buffer } => BStr::new(buffer.as_slice()),
            SourceBufferKind::Memory { bytes } => BStr::new(bytes),
        }
    }

    pub fn file_name(&self) -> &str {
        self.file_name.as_str()
    }

    pub fn is_mapped(&self) -> bool {
        matches!(self.kind, SourceBufferKind::File { .. })
    }
}
