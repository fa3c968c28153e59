use bzip2::read::BzDecoder;
use flate2::read::GzDecoder;
use srcfind_common::errors::*;
use std::io::Read;
use xz2::read::XzDecoder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    Gzip,
    Bzip2,
    Xz,
    Zstd,
    Plain,
}

impl Compression {
    /// Guess from the metadata href, repomd names files after their encoding.
    pub fn from_href(href: &str) -> Option<Compression> {
        let (_, ext) = href.rsplit_once('.')?;
        match ext {
            "gz" => Some(Compression::Gzip),
            "bz2" => Some(Compression::Bzip2),
            "xz" => Some(Compression::Xz),
            "zst" | "zstd" => Some(Compression::Zstd),
            "xml" => Some(Compression::Plain),
            _ => None,
        }
    }

    pub fn sniff(bytes: &[u8]) -> Compression {
        let mime = tree_magic_mini::from_u8(bytes);
        debug!("Detected mimetype for possibly compressed data: {:?}", mime);

        match mime {
            "application/gzip" => Compression::Gzip,
            "application/x-bzip" | "application/x-bzip2" => Compression::Bzip2,
            "application/x-xz" => Compression::Xz,
            "application/zstd" => Compression::Zstd,
            _ => Compression::Plain,
        }
    }

    pub fn detect(href: &str, bytes: &[u8]) -> Compression {
        Compression::from_href(href).unwrap_or_else(|| Compression::sniff(bytes))
    }

    pub fn reader<'a>(self, bytes: &'a [u8]) -> Result<Box<dyn Read + 'a>> {
        match self {
            Compression::Gzip => Ok(Box::new(GzDecoder::new(bytes))),
            Compression::Bzip2 => Ok(Box::new(BzDecoder::new(bytes))),
            Compression::Xz => Ok(Box::new(XzDecoder::new(bytes))),
            Compression::Zstd => Ok(Box::new(zstd::Decoder::new(bytes)?)),
            Compression::Plain => Ok(Box::new(bytes)),
        }
    }
}
