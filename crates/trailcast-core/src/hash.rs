//! Content hashing for deterministic rendering verification.
//!
//! Produces a SHA-256 hash of canvas data, enabling bit-exact output
//! verification across platforms and runs.

use sha2::{Digest, Sha256};

use crate::canvas::Canvas;

/// A content hash digest (SHA-256, 32 bytes).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash {
    bytes: [u8; 32],
}

impl ContentHash {
    /// Create from raw bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Get the hash as a hex string.
    pub fn to_hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

fn finalize(hasher: Sha256) -> ContentHash {
    let result = hasher.finalize();
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&result);
    ContentHash::from_bytes(bytes)
}

/// Compute the content hash of a single canvas.
pub fn hash_canvas(canvas: &Canvas) -> ContentHash {
    let mut hasher = Sha256::new();
    // Dimensions are part of the hash so differently sized buffers with the
    // same pixel bytes produce different digests.
    hasher.update(canvas.width.to_le_bytes());
    hasher.update(canvas.height.to_le_bytes());
    hasher.update(&canvas.data);
    finalize(hasher)
}

/// Compute the content hash of an ordered frame sequence.
pub fn hash_canvases(canvases: &[Canvas]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update((canvases.len() as u64).to_le_bytes());
    for canvas in canvases {
        hasher.update(canvas.width.to_le_bytes());
        hasher.update(canvas.height.to_le_bytes());
        hasher.update(&canvas.data);
    }
    finalize(hasher)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    #[test]
    fn test_hash_deterministic() {
        let a = Canvas::solid(10, 10, &Color::RED);
        let b = Canvas::solid(10, 10, &Color::RED);
        assert_eq!(hash_canvas(&a), hash_canvas(&b));
    }

    #[test]
    fn test_hash_different_content() {
        let a = Canvas::solid(10, 10, &Color::RED);
        let b = Canvas::solid(10, 10, &Color::BLUE);
        assert_ne!(hash_canvas(&a), hash_canvas(&b));
    }

    #[test]
    fn test_hash_different_size() {
        let a = Canvas::solid(10, 10, &Color::RED);
        let b = Canvas::solid(20, 5, &Color::RED);
        assert_ne!(hash_canvas(&a), hash_canvas(&b));
    }

    #[test]
    fn test_hash_sequence_deterministic() {
        let frames = vec![
            Canvas::solid(4, 4, &Color::RED),
            Canvas::solid(4, 4, &Color::GREEN),
        ];
        assert_eq!(hash_canvases(&frames), hash_canvases(&frames));
    }

    #[test]
    fn test_hash_sequence_order_matters() {
        let a = vec![
            Canvas::solid(4, 4, &Color::RED),
            Canvas::solid(4, 4, &Color::GREEN),
        ];
        let b = vec![
            Canvas::solid(4, 4, &Color::GREEN),
            Canvas::solid(4, 4, &Color::RED),
        ];
        assert_ne!(hash_canvases(&a), hash_canvases(&b));
    }

    #[test]
    fn test_hash_hex_format() {
        let hash = hash_canvas(&Canvas::solid(2, 2, &Color::BLACK));
        let hex = hash.to_hex();
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
