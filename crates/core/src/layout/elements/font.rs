//! Opaque font identity.
//!
//! Fonts are owned by the extraction stage; this crate only needs to know
//! whether two glyphs share the very same font object.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use rustc_hash::FxHashMap;

#[derive(Debug)]
struct FontInfo {
    name: String,
}

/// Shared handle to an upstream font, compared by identity.
///
/// Two handles created separately for the same font name are different fonts;
/// clones of one handle are the same font.
#[derive(Clone)]
pub struct FontHandle(Arc<FontInfo>);

impl FontHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self(Arc::new(FontInfo { name: name.into() }))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }
}

impl PartialEq for FontHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for FontHandle {}

impl Hash for FontHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(Arc::as_ptr(&self.0), state);
    }
}

impl fmt::Debug for FontHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FontHandle").field(&self.0.name).finish()
    }
}

/// Interns font names so each distinct name maps to exactly one handle.
#[derive(Debug, Default)]
pub struct FontRegistry {
    fonts: FxHashMap<String, FontHandle>,
}

impl FontRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the handle for `name`, creating it on first use.
    pub fn intern(&mut self, name: &str) -> FontHandle {
        if let Some(handle) = self.fonts.get(name) {
            return handle.clone();
        }
        let handle = FontHandle::new(name);
        self.fonts.insert(name.to_string(), handle.clone());
        handle
    }

    pub fn get(&self, name: &str) -> Option<&FontHandle> {
        self.fonts.get(name)
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}
