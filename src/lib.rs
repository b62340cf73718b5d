pub mod core {
    pub mod config;
    pub mod error;
    pub mod state;
    pub mod routes;
    pub mod startup;
    pub mod tracing_init;
}

pub mod api {
    pub mod client;
}

pub mod models {
    pub mod id;
    pub mod user;
    pub mod post;
    pub mod order;
    pub mod cart;
}

pub mod stores {
    pub mod session;
    pub mod feed;
    pub mod order_desk;
    pub mod eggs;
}

pub mod services {
    pub mod outcome;
    pub mod bootstrap;
    pub mod community;
    pub mod ordering;
}

pub mod views {
    pub mod page;
}

pub mod handlers {
    pub mod page;
    pub mod community;
    pub mod order;
    pub mod eggs;
    pub mod health;
    pub mod fallback;
}

pub mod utils {
    pub mod sync;
    pub mod time;
}

pub mod content;
