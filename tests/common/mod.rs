//! Builders for synthetic BTW files.

#![allow(dead_code)]

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;

pub const SIGNATURE: &[u8] = b"\r\nBar Tender Format File\r\n";
pub const END_OF_META: [u8; 4] = [0xFF, 0xFE, 0xFF, 0x00];
pub const PNG_START: [u8; 16] = [
    0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, b'I', b'H', b'D', b'R',
];
pub const PNG_END: [u8; 12] = [
    0x00, 0x00, 0x00, 0x00, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82,
];

/// A minimal PNG-looking blob: start marker, `body`, end marker.
pub fn png(body: &[u8]) -> Vec<u8> {
    let mut v = PNG_START.to_vec();
    v.extend_from_slice(body);
    v.extend_from_slice(&PNG_END);
    v
}

pub fn zlib(data: &[u8]) -> Vec<u8> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).expect("compress");
    encoder.finish().expect("finish")
}

/// Offsets recorded while building a fixture.
#[derive(Debug, Clone, Copy)]
pub struct Expected {
    pub prefix_end: u64,
    pub preview: (u64, u64),
    pub mask: (u64, u64),
    pub container_start: u64,
    pub len: u64,
}

/// Assembles a BTW file; `container` is written as-is after the optional
/// `00 01` marker.
pub struct BtwBuilder {
    pub metadata: Vec<u8>,
    pub prefix_padding: usize,
    pub preview: Vec<u8>,
    pub mask: Vec<u8>,
    pub image_padding: usize,
    pub container: Vec<u8>,
    pub compressed: bool,
}

impl Default for BtwBuilder {
    fn default() -> Self {
        Self {
            metadata: b"Format=Label;Printer=Zebra".to_vec(),
            prefix_padding: 8,
            preview: png(b"preview-pixels"),
            mask: png(b"mask"),
            image_padding: 4,
            container: b"XCONTAINER-DATA".to_vec(),
            compressed: false,
        }
    }
}

impl BtwBuilder {
    pub fn build(&self) -> (Vec<u8>, Expected) {
        assert_eq!(self.prefix_padding % 4, 0);
        assert_eq!(self.image_padding % 4, 0);

        let mut v = SIGNATURE.to_vec();
        v.extend_from_slice(&self.metadata);
        v.extend_from_slice(&END_OF_META);
        v.extend(std::iter::repeat(0u8).take(self.prefix_padding));
        let prefix_end = v.len() as u64;

        let preview = push_image(&mut v, &self.preview);
        v.extend(std::iter::repeat(0u8).take(self.image_padding));
        let mask = push_image(&mut v, &self.mask);
        v.extend(std::iter::repeat(0u8).take(self.image_padding));

        if self.compressed {
            v.extend_from_slice(&[0x00, 0x01]);
        }
        let container_start = v.len() as u64;
        v.extend_from_slice(&self.container);

        let len = v.len() as u64;
        (
            v,
            Expected {
                prefix_end,
                preview,
                mask,
                container_start,
                len,
            },
        )
    }
}

fn push_image(v: &mut Vec<u8>, image: &[u8]) -> (u64, u64) {
    v.extend_from_slice(&(image.len() as u32).to_le_bytes());
    let start = v.len() as u64;
    v.extend_from_slice(image);
    (start, v.len() as u64)
}
