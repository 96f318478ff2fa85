//! Per-compilation translation context.

use std::collections::HashMap;
use std::sync::Arc;

use crate::ast::ColumnRef;
use crate::transpiler::capability::{Capabilities, Feature, Version};
use crate::transpiler::format::{FormatObserver, TracingObserver};
use crate::transpiler::fragment::Fragment;

/// Maps a logical column to its rendered identifier in the target query.
pub trait ColumnResolver: Send + Sync {
    /// `None` when the column is not visible to the remote query.
    fn resolve(&self, column: &ColumnRef) -> Option<Fragment>;
}

/// Renders columns by name, quoting qualifier and name separately.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuotedColumns;

impl ColumnResolver for QuotedColumns {
    fn resolve(&self, column: &ColumnRef) -> Option<Fragment> {
        let name = Fragment::ident(column.name.clone());
        Some(match &column.qualifier {
            Some(q) => Fragment::concat(Fragment::ident(q.clone()), name, "."),
            None => name,
        })
    }
}

/// Renders columns through an explicit mapping, keyed by column id first
/// and by `qualifier.name` second. Unmapped columns are untranslatable.
#[derive(Debug, Clone, Default)]
pub struct MappedColumns {
    by_id: HashMap<u64, String>,
    by_name: HashMap<String, String>,
}

impl MappedColumns {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: u64, rendered: impl Into<String>) -> Self {
        self.by_id.insert(id, rendered.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>, rendered: impl Into<String>) -> Self {
        self.by_name.insert(name.into(), rendered.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty() && self.by_name.is_empty()
    }
}

impl ColumnResolver for MappedColumns {
    fn resolve(&self, column: &ColumnRef) -> Option<Fragment> {
        self.by_id
            .get(&column.id)
            .or_else(|| self.by_name.get(&column.display_name()))
            .map(|rendered| Fragment::ident(rendered.clone()))
    }
}

/// Immutable context for one or many concurrent translations.
#[derive(Clone)]
pub struct TranslationContext {
    capabilities: Capabilities,
    resolver: Arc<dyn ColumnResolver>,
    observer: Arc<dyn FormatObserver>,
}

impl TranslationContext {
    pub fn new(version: Version) -> Self {
        Self {
            capabilities: Capabilities::new(version),
            resolver: Arc::new(QuotedColumns),
            observer: Arc::new(TracingObserver),
        }
    }

    pub fn with_resolver(mut self, resolver: impl ColumnResolver + 'static) -> Self {
        self.resolver = Arc::new(resolver);
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn FormatObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    pub fn version(&self) -> Version {
        self.capabilities.version()
    }

    pub fn supports(&self, feature: Feature) -> bool {
        self.capabilities.has(feature)
    }

    pub fn resolve(&self, column: &ColumnRef) -> Option<Fragment> {
        self.resolver.resolve(column)
    }

    pub fn observer(&self) -> &dyn FormatObserver {
        self.observer.as_ref()
    }
}

impl Default for TranslationContext {
    fn default() -> Self {
        TranslationContext::new(Version::LATEST)
    }
}

impl std::fmt::Debug for TranslationContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationContext")
            .field("version", &self.capabilities.version())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::DataType;

    #[test]
    fn test_quoted_columns() {
        let col = ColumnRef::new(1, "total", DataType::Long).qualified("orders");
        let f = QuotedColumns.resolve(&col).unwrap();
        assert_eq!(f.to_string(), "`orders`.`total`");
    }

    #[test]
    fn test_mapped_columns_prefers_id() {
        let resolver = MappedColumns::new()
            .with_id(1, "a_1")
            .with_name("orders.total", "t0_total");
        let by_id = ColumnRef::new(1, "total", DataType::Long).qualified("orders");
        let by_name = ColumnRef::new(2, "total", DataType::Long).qualified("orders");
        let missing = ColumnRef::new(3, "other", DataType::Long);

        assert_eq!(resolver.resolve(&by_id).unwrap().to_string(), "`a_1`");
        assert_eq!(resolver.resolve(&by_name).unwrap().to_string(), "`t0_total`");
        assert!(resolver.resolve(&missing).is_none());
    }

    #[test]
    fn test_context_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TranslationContext>();
    }
}
