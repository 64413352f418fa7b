//! Sample Feed
//!
//! Deterministic stand-in pins served when no gateway is configured.

use crate::models::{Pin, PinId};

const KINDS: [&str; 4] = ["Art", "Photo", "Design", "Creative"];

/// splitmix64 finalizer; spreads sequential indices into unrelated values
fn mix(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn slug(category: &str) -> String {
    category
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect()
}

pub fn sample_pin(category: &str, index: u32) -> Pin {
    let r = mix(index as u64);
    // [0.8, 1.6)
    let aspect_ratio = 0.8 + (r % 800) as f64 / 1000.0;
    let width = 300 + (r >> 12) % 300;
    let height = (width as f64 * aspect_ratio).round() as u64;
    let kind = KINDS[((r >> 24) % KINDS.len() as u64) as usize];

    Pin {
        id: PinId(format!("{}-{}", slug(category), index)),
        title: Some(format!("Amazing {} #{}", kind, index)),
        user: Some(format!("creator{}", index)),
        image: Some(format!("https://picsum.photos/seed/{}/{}/{}", index, width, height)),
        likes: ((r >> 32) % 1000) as u32,
        saves: ((r >> 44) % 500) as u32,
        aspect_ratio: Some(aspect_ratio),
    }
}

/// Zero-based `page` of `limit` pins for `category`
pub fn sample_page(category: &str, page: u32, limit: u32) -> Vec<Pin> {
    let start = page * limit;
    (start..start + limit).map(|i| sample_pin(category, i)).collect()
}
