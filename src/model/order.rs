use serde::{Deserialize, Serialize};

use super::User;
use crate::store::Record;

/// A stored order. It only references its owner by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    pub user_id: u64,
    pub product: String,
    pub quantity: i64,
    pub status: String,
}

impl Record for Order {
    const COLLECTION: &'static str = "orders";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

/// Body of `POST /orders`.
///
/// Quantity and status are not validated. A client-supplied `id`, or a
/// `user` snapshot, is accepted and discarded.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewOrder {
    pub id: Option<u64>,
    pub user_id: u64,
    pub product: String,
    pub quantity: i64,
    pub status: String,
    pub user: Option<serde_json::Value>,
}

impl From<NewOrder> for Order {
    fn from(input: NewOrder) -> Self {
        Order {
            id: 0,
            user_id: input.user_id,
            product: input.product,
            quantity: input.quantity,
            status: input.status,
        }
    }
}

/// Response shape of `GET /orders/{id}`.
///
/// Carries the owner's details only when the user service answered; the
/// `user` key is omitted otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderView {
    #[serde(flatten)]
    pub order: Order,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl OrderView {
    /// An order shown without its owner.
    pub fn bare(order: Order) -> Self {
        Self { order, user: None }
    }

    /// An order shown with its owner's current details.
    pub fn enriched(order: Order, user: User) -> Self {
        Self {
            order,
            user: Some(user),
        }
    }
}
