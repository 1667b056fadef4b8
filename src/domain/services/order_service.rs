use crate::domain::customer::Customer;
use crate::domain::order::{Order, OrderError, OrderItem};

pub struct OrderService;

impl OrderService {
    /// Create an order for `customer` and credit half its total as reward points
    pub fn place_order(
        customer: &mut Customer,
        order_id: impl Into<String>,
        items: Vec<OrderItem>,
    ) -> Result<Order, OrderError> {
        let order = Order::new(order_id, customer.id(), items)?;
        customer.add_reward_points(order.total() / 2.0)?;
        Ok(order)
    }

    pub fn total(orders: &[Order]) -> f64 {
        orders.iter().map(Order::total).sum()
    }
}
