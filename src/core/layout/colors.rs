use crate::models::color::Color;
use std::collections::{BTreeSet, HashMap};

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// 64-bit FNV-1a over the UTF-8 bytes of `s`.
///
/// Stable across runs and platforms, unlike `std`'s randomly keyed hasher.
pub fn fnv1a(s: &str) -> u64 {
    s.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Canonical color key for a group of attendees: sorted, deduplicated,
/// comma-joined. The same people in any order share one key.
pub fn group_key(names: &[String]) -> String {
    let set: BTreeSet<&str> = names.iter().map(String::as_str).collect();
    set.into_iter().collect::<Vec<_>>().join(", ")
}

/// Session-scoped color cache.
///
/// Each view owns its own assigner; two assigners never share state.
#[derive(Debug, Clone)]
pub struct ColorAssigner {
    saturation: u8,
    lightness: u8,
    cache: HashMap<String, Color>,
}

impl Default for ColorAssigner {
    fn default() -> Self {
        Self::new(140, 200)
    }
}

impl ColorAssigner {
    pub fn new(saturation: u8, lightness: u8) -> Self {
        Self {
            saturation,
            lightness,
            cache: HashMap::new(),
        }
    }

    pub fn color_for(&mut self, key: &str) -> Color {
        if let Some(c) = self.cache.get(key) {
            return *c;
        }

        let hue = (fnv1a(key) % 360) as u16;
        let color = Color::from_hsl(hue, self.saturation, self.lightness);
        self.cache.insert(key.to_string(), color);
        color
    }

    pub fn color_for_group(&mut self, names: &[String]) -> Color {
        self.color_for(&group_key(names))
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Forget every color; called when the owning view is discarded.
    pub fn clear(&mut self) {
        self.cache.clear();
    }
}
