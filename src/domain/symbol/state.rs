//! Symbol catalog state — immutable snapshots swapped in whole.

use super::Symbol;
use crate::shared::SymbolId;
use async_lock::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// One complete catalog load. Never mutated after construction.
#[derive(Debug, Clone, Default)]
pub struct SymbolCatalog {
    pub version: u64,
    symbols: Vec<Symbol>,
    index: HashMap<SymbolId, usize>,
}

impl SymbolCatalog {
    pub fn new(version: u64, symbols: Vec<Symbol>) -> Self {
        let mut index = HashMap::with_capacity(symbols.len());
        for (i, symbol) in symbols.iter().enumerate() {
            // First occurrence wins on duplicate ids.
            index.entry(symbol.id.clone()).or_insert(i);
        }
        Self {
            version,
            symbols,
            index,
        }
    }

    pub fn exists(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn find(&self, id: &str) -> Option<&Symbol> {
        self.index.get(id).map(|&i| &self.symbols[i])
    }

    /// Symbols in load order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Outcome of a catalog reload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogReload {
    /// This load is now the visible catalog.
    Installed { version: u64, symbols: usize },
    /// A later-started load finished first; this result was discarded.
    Superseded { version: u64, installed: u64 },
}

/// Shared holder of the current catalog snapshot.
///
/// Each reload takes a ticket from [`begin`](Self::begin) before fetching. On
/// completion the result is installed only if no later-ticketed load has
/// already been installed, so readers never observe an older catalog after a
/// newer one.
#[derive(Debug, Default)]
pub struct CatalogHandle {
    current: RwLock<Arc<SymbolCatalog>>,
    next_ticket: AtomicU64,
}

impl CatalogHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve a version number for a load that is about to start.
    pub fn begin(&self) -> u64 {
        self.next_ticket.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// The catalog as of now. Cheap; shares the snapshot.
    pub async fn snapshot(&self) -> Arc<SymbolCatalog> {
        self.current.read().await.clone()
    }

    /// Install the result of the load holding `ticket`.
    pub async fn install(&self, ticket: u64, symbols: Vec<Symbol>) -> CatalogReload {
        let mut current = self.current.write().await;
        if current.version > ticket {
            return CatalogReload::Superseded {
                version: ticket,
                installed: current.version,
            };
        }
        let count = symbols.len();
        *current = Arc::new(SymbolCatalog::new(ticket, symbols));
        CatalogReload::Installed {
            version: ticket,
            symbols: count,
        }
    }
}
