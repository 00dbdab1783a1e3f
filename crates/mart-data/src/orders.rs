//! Order repository.

use mart_commerce::cart::Cart;
use mart_commerce::order::{Order, OrderStatus};
use mart_commerce::{OrderId, UserId};

use crate::DataError;

/// Order placement and lookup.
///
/// Assigns sequential order ids and `QM`-prefixed tracking ids the way
/// the storefront's fulfillment mock does. Starts empty; the owning layer
/// decides whether placed orders are persisted anywhere.
#[derive(Debug, Default)]
pub struct OrderRepository {
    orders: Vec<Order>,
    next_seq: u64,
}

impl OrderRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a repository from previously placed orders. The id
    /// sequence continues after the highest restored order number.
    pub fn from_existing(orders: Vec<Order>) -> Self {
        let next_seq = orders
            .iter()
            .filter_map(|o| o.id.as_str().strip_prefix("ord-"))
            .filter_map(|n| n.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self { orders, next_seq }
    }

    /// Place an order from the cart's current lines.
    ///
    /// The cart itself is left untouched; clearing it after a successful
    /// placement is the caller's decision.
    pub fn place(
        &mut self,
        cart: &Cart,
        user_id: Option<UserId>,
        placed_at: i64,
    ) -> Result<Order, DataError> {
        self.next_seq += 1;
        let id = OrderId::new(format!("ord-{}", self.next_seq));
        let tracking_id = format!("QM{:08}", self.next_seq);

        let order = match Order::from_cart(id, tracking_id, cart, user_id, placed_at) {
            Ok(order) => order,
            Err(err) => {
                // Do not burn a sequence number on a rejected placement.
                self.next_seq -= 1;
                return Err(err.into());
            }
        };

        tracing::debug!(order = %order.id, tracking = %order.tracking_id, "order placed");
        self.orders.push(order.clone());
        Ok(order)
    }

    /// All orders, oldest first.
    pub fn all(&self) -> &[Order] {
        &self.orders
    }

    /// Look up an order by id.
    pub fn get(&self, id: &OrderId) -> Result<&Order, DataError> {
        self.orders
            .iter()
            .find(|o| &o.id == id)
            .ok_or_else(|| DataError::OrderNotFound(id.clone()))
    }

    /// Orders placed by a user.
    pub fn for_user(&self, user_id: &UserId) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|o| o.user_id.as_ref() == Some(user_id))
            .collect()
    }

    /// Move an order to a new status.
    pub fn update_status(
        &mut self,
        id: &OrderId,
        status: OrderStatus,
        at: i64,
    ) -> Result<&Order, DataError> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| &o.id == id)
            .ok_or_else(|| DataError::OrderNotFound(id.clone()))?;
        order.set_status(status, at)?;
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use mart_commerce::cart::ProductSnapshot;
    use mart_commerce::{Currency, Money, ProductId};

    use super::*;

    fn cart() -> Cart {
        let mut cart = Cart::new(Currency::INR);
        cart.add_item(
            ProductSnapshot {
                product_id: ProductId::new("p1"),
                name: "Product".to_string(),
                unit_price: Some(Money::new(1000, Currency::INR)),
                discounted_unit_price: None,
                available_stock: 10,
            },
            2,
        )
        .unwrap();
        cart
    }

    #[test]
    fn place_assigns_sequential_ids_and_tracking() {
        let mut repo = OrderRepository::new();
        let cart = cart();

        let first = repo.place(&cart, None, 1_000).unwrap();
        let second = repo.place(&cart, None, 2_000).unwrap();

        assert_eq!(first.id.as_str(), "ord-1");
        assert_eq!(second.id.as_str(), "ord-2");
        assert_eq!(second.tracking_id, "QM00000002");
    }

    #[test]
    fn placing_an_empty_cart_fails_without_burning_a_sequence() {
        let mut repo = OrderRepository::new();
        let empty = Cart::new(Currency::INR);

        assert!(repo.place(&empty, None, 1_000).is_err());

        let order = repo.place(&cart(), None, 2_000).unwrap();
        assert_eq!(order.id.as_str(), "ord-1");
    }

    #[test]
    fn get_and_for_user_lookups() {
        let mut repo = OrderRepository::new();
        let cart = cart();
        let user = UserId::new("u1");

        repo.place(&cart, Some(user.clone()), 1_000).unwrap();
        repo.place(&cart, None, 2_000).unwrap();

        assert!(repo.get(&OrderId::new("ord-2")).is_ok());
        assert!(matches!(
            repo.get(&OrderId::new("ord-99")),
            Err(DataError::OrderNotFound(_))
        ));
        assert_eq!(repo.for_user(&user).len(), 1);
    }

    #[test]
    fn update_status_follows_the_lifecycle() {
        let mut repo = OrderRepository::new();
        let id = repo.place(&cart(), None, 1_000).unwrap().id;

        repo.update_status(&id, OrderStatus::Shipped, 2_000).unwrap();
        let err = repo
            .update_status(&id, OrderStatus::Cancelled, 3_000)
            .unwrap_err();

        assert!(matches!(err, DataError::Commerce(_)));
        assert_eq!(repo.get(&id).unwrap().status, OrderStatus::Shipped);
    }

    #[test]
    fn from_existing_continues_the_sequence() {
        let mut seeded = OrderRepository::new();
        seeded.place(&cart(), None, 1_000).unwrap();
        seeded.place(&cart(), None, 2_000).unwrap();

        let mut restored = OrderRepository::from_existing(seeded.all().to_vec());
        let order = restored.place(&cart(), None, 3_000).unwrap();

        assert_eq!(order.id.as_str(), "ord-3");
    }
}
