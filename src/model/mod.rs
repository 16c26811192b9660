//! Records served by the two registries and their wire shapes.

mod order;
mod user;

pub use order::{NewOrder, Order, OrderView};
pub use user::{NewUser, User};

/// Users seeded into a fresh user service.
pub fn user_fixtures() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "Alice Johnson".into(),
            email: "alice@example.com".into(),
        },
        User {
            id: 2,
            name: "Bob Smith".into(),
            email: "bob@example.com".into(),
        },
    ]
}

/// Orders seeded into a fresh order service. They reference the user fixtures.
pub fn order_fixtures() -> Vec<Order> {
    vec![
        Order {
            id: 1,
            user_id: 1,
            product: "Laptop".into(),
            quantity: 1,
            status: "pending".into(),
        },
        Order {
            id: 2,
            user_id: 2,
            product: "Mouse".into(),
            quantity: 2,
            status: "shipped".into(),
        },
    ]
}
