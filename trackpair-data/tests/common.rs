use image::{GrayImage, Luma, Rgb, RgbImage};
use std::path::Path;
use trackpair_data::Sequence;

// Shared by several integration test crates; not every helper is used by each.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Writes `num_sequences` sequences of `len` PNG frames under `root`.
///
/// Even sequences are grayscale, odd ones RGB. Every pixel of frame `f` has
/// intensity `f`, and its box is `[seq + 0.5, f + 0.25, 16.0, 8.0]`.
#[allow(dead_code)]
pub fn write_sequences(root: &Path, num_sequences: usize, len: usize) -> Vec<Sequence> {
    (0..num_sequences)
        .map(|s| {
            let dir = root.join(format!("seq{:03}", s));
            std::fs::create_dir_all(&dir).expect("create sequence dir");
            let mut frames = Vec::with_capacity(len);
            let mut boxes = Vec::with_capacity(len);
            for f in 0..len {
                let path = dir.join(format!("{:08}.png", f + 1));
                let value = f as u8;
                if s % 2 == 0 {
                    GrayImage::from_pixel(4, 4, Luma([value])).save(&path).expect("write frame");
                } else {
                    RgbImage::from_pixel(4, 4, Rgb([value, value, value])).save(&path).expect("write frame");
                }
                frames.push(path);
                boxes.push([s as f32 + 0.5, f as f32 + 0.25, 16.0, 8.0]);
            }
            Sequence::new(frames, boxes).expect("aligned frames and boxes")
        })
        .collect()
}
