//! Style-keyed formatter caching.

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use crate::error::RenderError;
use crate::handle::FormatterHandle;
use crate::render::{BuiltinRenderer, Renderer};
use crate::style::NumberStyle;
use crate::value::Number;

/// Process-wide shared cache, created on first use.
static SHARED: OnceLock<FormatterCache> = OnceLock::new();

/// A cache of configured formatter handles, keyed by style.
///
/// One handle is created per distinct style configuration and reused for the
/// cache's lifetime; the key space is bounded by practical style × locale
/// combinations, so entries are never evicted. Custom styles bypass the cache
/// entirely.
///
/// Construct isolated instances with [`FormatterCache::new`] (tests,
/// multi-tenant hosts) or use the process-wide [`FormatterCache::shared`]
/// instance.
pub struct FormatterCache {
    entries: Mutex<HashMap<String, FormatterHandle>>,
    renderer: Box<dyn Renderer + Send + Sync>,
}

impl FormatterCache {
    /// An empty cache backed by the built-in renderer.
    pub fn new() -> Self {
        Self::with_renderer(Box::new(BuiltinRenderer))
    }

    /// An empty cache backed by a caller-supplied renderer.
    pub fn with_renderer(renderer: Box<dyn Renderer + Send + Sync>) -> Self {
        FormatterCache {
            entries: Mutex::new(HashMap::new()),
            renderer,
        }
    }

    /// The process-wide shared instance.
    pub fn shared() -> &'static FormatterCache {
        SHARED.get_or_init(FormatterCache::new)
    }

    /// Formats a value with the given style.
    ///
    /// Returns `None` exactly when the renderer cannot produce a string for
    /// this value/configuration (non-finite value, locale without data for
    /// the style). Never panics for well-formed inputs.
    pub fn format(&self, value: impl Into<Number>, style: &NumberStyle) -> Option<String> {
        self.try_format(value, style).ok()
    }

    /// Formats a value, reporting the specific render failure on error.
    pub fn try_format(
        &self,
        value: impl Into<Number>,
        style: &NumberStyle,
    ) -> Result<String, RenderError> {
        let handle = self.resolve(style);
        self.renderer.render(value.into(), &handle)
    }

    /// Returns the handle for a style, creating and caching it on first use.
    ///
    /// The lock is held across the lookup-and-insert, so concurrent callers
    /// of the same key configure a handle once.
    fn resolve(&self, style: &NumberStyle) -> FormatterHandle {
        if let NumberStyle::Custom(handle) = style {
            return handle.clone();
        }

        let Some(key) = style.cache_key() else {
            unreachable!("every style except Custom derives a cache key");
        };

        let mut entries = self.entries.lock().unwrap();
        entries
            .entry(key)
            .or_insert_with(|| {
                let mut handle = FormatterHandle::new();
                style.configure(&mut handle);
                handle
            })
            .clone()
    }

    /// Number of cached handles.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for FormatterCache {
    fn default() -> Self {
        Self::new()
    }
}
