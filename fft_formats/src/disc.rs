use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use memmap2::{Mmap, MmapOptions};

use crate::cursor::ByteCursor;
use crate::error::{FormatError, Result};

/// Physical layout of a sector in the disc image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectorLayout {
    /// Bytes preceding the payload (sync, header and subheader).
    pub header_bytes: u64,
    pub payload_bytes: usize,
    /// Distance between the starts of consecutive sectors.
    pub stride_bytes: u64,
}

impl SectorLayout {
    /// Raw 2352-byte CD-ROM XA sectors carrying 2048 bytes of user data.
    pub const MODE2_FORM1: SectorLayout = SectorLayout {
        header_bytes: 24,
        payload_bytes: 2048,
        stride_bytes: 2352,
    };

    pub fn payload_offset(&self, sector: u32) -> u64 {
        u64::from(sector) * self.stride_bytes + self.header_bytes
    }

    pub fn sectors_for(&self, len: usize) -> usize {
        len.div_ceil(self.payload_bytes)
    }
}

impl Default for SectorLayout {
    fn default() -> Self {
        SectorLayout::MODE2_FORM1
    }
}

/// Sector-addressed view over a raw disc image.
///
/// The image is the single source of bytes for every decoder; each read
/// seeks explicitly so no position is carried between requests.
#[derive(Debug)]
pub struct DiscImage<R> {
    path: Option<PathBuf>,
    layout: SectorLayout,
    reader: R,
}

impl DiscImage<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let file = File::open(&path_buf)?;
        log::debug!("opened disc image {}", path_buf.display());
        Ok(DiscImage {
            path: Some(path_buf),
            layout: SectorLayout::MODE2_FORM1,
            reader: BufReader::new(file),
        })
    }
}

impl DiscImage<Cursor<Mmap>> {
    pub fn open_mapped<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let file = File::open(&path_buf)?;
        let mmap = unsafe { MmapOptions::new().map(&file) }?;
        log::debug!(
            "memory-mapped disc image {} ({} bytes)",
            path_buf.display(),
            mmap.len()
        );
        Ok(DiscImage {
            path: Some(path_buf),
            layout: SectorLayout::MODE2_FORM1,
            reader: Cursor::new(mmap),
        })
    }
}

impl<R: Read + Seek> DiscImage<R> {
    pub fn new(reader: R) -> Self {
        Self::with_layout(reader, SectorLayout::MODE2_FORM1)
    }

    pub fn with_layout(reader: R, layout: SectorLayout) -> Self {
        DiscImage {
            path: None,
            layout,
            reader,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn layout(&self) -> SectorLayout {
        self.layout
    }

    /// Read `len` logical bytes starting at the payload of `sector`.
    pub fn read_file(&mut self, sector: u32, len: usize) -> Result<Vec<u8>> {
        let payload_bytes = self.layout.payload_bytes;
        let mut out = Vec::with_capacity(len);
        let mut sector_buf = vec![0u8; payload_bytes];

        for index in 0..self.layout.sectors_for(len) {
            let current = sector + index as u32;
            self.read_sector(current, &mut sector_buf)?;
            let copy_len = (len - out.len()).min(payload_bytes);
            out.extend_from_slice(&sector_buf[..copy_len]);
        }

        Ok(out)
    }

    pub fn read_cursor(&mut self, sector: u32, len: usize) -> Result<ByteCursor> {
        self.read_file(sector, len).map(ByteCursor::new)
    }

    fn read_sector(&mut self, sector: u32, out: &mut [u8]) -> Result<()> {
        let offset = self.layout.payload_offset(sector);
        self.reader
            .seek(SeekFrom::Start(offset))
            .and_then(|_| self.reader.read_exact(out))
            .map_err(|source| FormatError::Io { sector, source })
    }
}
