// Application state (AppState)

use crate::api::client::BackendClient;
use crate::content::EASTER_EGGS;
use crate::core::config::Config;
use crate::models::cart::Cart;
use crate::stores::{eggs::EggBoard, feed::CommunityFeed, order_desk::OrderDesk, session::SessionContext};
use std::sync::Arc;

/// Shared application state
///
/// Holds the backend client and every piece of in-memory UI state. Nothing
/// here is persisted; a restart starts from an empty feed and no order.
#[derive(Clone)]
pub struct AppState {
    /// HTTP client for the chai backend
    pub backend: BackendClient,

    /// Demo identity resolved at startup
    pub session: Arc<SessionContext>,

    /// Community feed and post input
    pub feed: Arc<CommunityFeed>,

    /// Cart and tracked order
    pub orders: Arc<OrderDesk>,

    /// Easter-egg message
    pub eggs: Arc<EggBoard>,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, backend: BackendClient) -> Self {
        let config = Arc::new(config);

        Self {
            backend,
            session: Arc::new(SessionContext::new(config.demo.clone())),
            feed: Arc::new(CommunityFeed::new()),
            orders: Arc::new(OrderDesk::new(Cart::from(&config.cart))),
            eggs: Arc::new(EggBoard::new(EASTER_EGGS)),
            config,
        }
    }
}
