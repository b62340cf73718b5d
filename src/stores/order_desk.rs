use crate::models::cart::Cart;
use crate::models::order::Order;
use crate::utils::sync::lock;
use std::sync::Mutex;

#[derive(Default)]
struct DeskState {
    tracked: Option<Order>,
    in_flight: bool,
}

/// What the order section currently shows
#[derive(Clone, Debug, PartialEq)]
pub struct OrderSnapshot {
    pub cart: Cart,
    pub tracked: Option<Order>,
    pub busy: bool,
}

/// Cart plus the single tracked order.
///
/// At most one order action runs at a time: `begin` hands out an
/// [`InFlight`] ticket and refuses while one is outstanding.
pub struct OrderDesk {
    cart: Cart,
    state: Mutex<DeskState>,
}

impl OrderDesk {
    pub fn new(cart: Cart) -> Self {
        Self {
            cart,
            state: Mutex::new(DeskState::default()),
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn tracked(&self) -> Option<Order> {
        lock(&self.state).tracked.clone()
    }

    pub fn is_busy(&self) -> bool {
        lock(&self.state).in_flight
    }

    /// Claim the desk for one order action. `None` while another is running.
    pub fn begin(&self) -> Option<InFlight<'_>> {
        let mut state = lock(&self.state);
        if state.in_flight {
            return None;
        }
        state.in_flight = true;
        Some(InFlight { desk: self })
    }

    pub fn snapshot(&self) -> OrderSnapshot {
        let state = lock(&self.state);
        OrderSnapshot {
            cart: self.cart.clone(),
            tracked: state.tracked.clone(),
            busy: state.in_flight,
        }
    }
}

/// Outstanding order action. Dropping it releases the desk, including when
/// the request future is cancelled mid-flight.
pub struct InFlight<'a> {
    desk: &'a OrderDesk,
}

impl InFlight<'_> {
    /// Replace the tracked order with what the backend returned
    pub fn track(self, order: Order) {
        lock(&self.desk.state).tracked = Some(order);
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        lock(&self.desk.state).in_flight = false;
    }
}
