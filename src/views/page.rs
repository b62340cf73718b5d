//! The single page, rendered from a snapshot of UI state.

use crate::content::{EasterEgg, Hero, FOOTER_BRAND, HERO};
use crate::core::state::AppState;
use crate::models::order::{Order, PaymentStatus};
use crate::models::post::Post;
use crate::utils::time::{current_year, format_created_value};
use askama::Template;

/// Feed entry as displayed
pub struct PostView {
    pub id: String,
    pub created: String,
    pub text: String,
    /// `#campus #chai`, or `None` without tags
    pub tags: Option<String>,
}

impl From<&Post> for PostView {
    fn from(post: &Post) -> Self {
        let tags = if post.tags.is_empty() {
            None
        } else {
            Some(format!("#{}", post.tags.join(" #")))
        };

        Self {
            id: post.id.to_string(),
            created: post
                .created_at
                .as_ref()
                .map(format_created_value)
                .unwrap_or_default(),
            text: post.text.clone(),
            tags,
        }
    }
}

/// Payment panel contents for the tracked order
pub struct OrderView {
    pub id: String,
    pub status: String,
    pub status_class: &'static str,
    /// Items and total as the backend recorded them
    pub items: Vec<String>,
    pub total: String,
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        let status_class = match order.status() {
            PaymentStatus::Success => "status-success",
            PaymentStatus::Failed => "status-failed",
            PaymentStatus::Pending | PaymentStatus::Unknown => "status-pending",
        };

        Self {
            id: order.id.to_string(),
            status: order.payment_status.clone(),
            status_class,
            items: order.items.clone(),
            total: order.total_amount.to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate {
    pub hero: &'static Hero,
    pub scene_url: String,
    pub eggs: &'static [EasterEgg],
    pub egg_message: Option<&'static str>,
    pub posts: Vec<PostView>,
    pub draft: String,
    pub cart_items: Vec<String>,
    pub cart_total: u32,
    pub order: Option<OrderView>,
    pub order_busy: bool,
    pub year: i32,
    pub footer: &'static str,
}

impl PageTemplate {
    pub fn from_state(state: &AppState) -> Self {
        let feed = state.feed.snapshot();
        let orders = state.orders.snapshot();

        Self {
            hero: &HERO,
            scene_url: state.config.site.scene_url.clone(),
            eggs: state.eggs.eggs(),
            egg_message: state.eggs.message(),
            posts: feed.posts.iter().map(PostView::from).collect(),
            draft: feed.draft,
            cart_items: orders.cart.items,
            cart_total: orders.cart.total,
            order: orders.tracked.as_ref().map(OrderView::from),
            order_busy: orders.busy,
            year: current_year(),
            footer: FOOTER_BRAND,
        }
    }
}
