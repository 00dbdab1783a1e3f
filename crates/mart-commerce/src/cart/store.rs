//! Cart persistence.
//!
//! The cart is stored as a JSON array of line items under a single
//! namespaced key. Persistence is write-through and strictly one-way:
//! a failed write is logged and the in-memory cart stays authoritative,
//! so a storage problem is never visible as a failed cart mutation.

use mart_store::{store_key, KvStore, StoreError};

use crate::cart::{Cart, CartTotals, LineItem, ProductSnapshot};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Currency;

/// Fixed-key adapter between a cart and a key-value store.
#[derive(Debug)]
pub struct CartStore<S: KvStore> {
    store: S,
    key: String,
}

impl<S: KvStore> CartStore<S> {
    /// Wrap a store, using the application cart key (`quickmart:cart`).
    pub fn new(store: S) -> Self {
        Self {
            store,
            key: store_key!("quickmart", "cart"),
        }
    }

    /// Load the stored line items.
    ///
    /// A missing key reads as an empty list. Corrupt data (anything that
    /// is not a line-item array) also degrades to an empty list, with a
    /// warning, rather than failing startup.
    pub fn load(&self) -> Vec<LineItem> {
        match self.store.get::<Vec<LineItem>>(&self.key) {
            Ok(Some(items)) => items,
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(error = %err, "stored cart is unreadable, starting empty");
                Vec::new()
            }
        }
    }

    /// Write the given line items, replacing the stored cart.
    pub fn save(&self, items: &[LineItem]) -> Result<(), StoreError> {
        self.store.set(&self.key, &items)
    }

    /// Remove the stored cart entirely.
    pub fn remove(&self) -> Result<(), StoreError> {
        self.store.delete(&self.key)
    }
}

/// A cart bound to a store.
///
/// Hydrates once at construction and persists after every mutation. The
/// store is constructor-injected; nothing here reaches for ambient state.
#[derive(Debug)]
pub struct PersistentCart<S: KvStore> {
    cart: Cart,
    store: CartStore<S>,
}

impl<S: KvStore> PersistentCart<S> {
    /// Open a cart backed by the given store, restoring any stored lines.
    pub fn open(store: S, currency: Currency) -> Self {
        let store = CartStore::new(store);
        let cart = Cart::hydrate(store.load(), currency);
        Self { cart, store }
    }

    /// Add a product; see [`Cart::add_item`]. Persists on success.
    pub fn add_item(
        &mut self,
        snapshot: ProductSnapshot,
        quantity: i64,
    ) -> Result<(), CommerceError> {
        self.cart.add_item(snapshot, quantity)?;
        self.persist();
        Ok(())
    }

    /// Replace a line's quantity; see [`Cart::update_quantity`].
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) -> bool {
        let changed = self.cart.update_quantity(product_id, quantity);
        if changed {
            self.persist();
        }
        changed
    }

    /// Remove a line; see [`Cart::remove_item`].
    pub fn remove_item(&mut self, product_id: &ProductId) -> bool {
        let removed = self.cart.remove_item(product_id);
        if removed {
            self.persist();
        }
        removed
    }

    /// Empty the cart and the stored copy.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.persist();
    }

    /// The underlying cart, for reads.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Derived totals; see [`Cart::totals`].
    pub fn totals(&self) -> CartTotals {
        self.cart.totals()
    }

    fn persist(&self) {
        if let Err(err) = self.store.save(self.cart.items()) {
            // In-memory state stays authoritative for the session.
            tracing::warn!(error = %err, "failed to persist cart");
        }
    }
}
