use crate::api::client::BackendClient;
use crate::core::error::WorkflowError;
use crate::models::order::{MockPayment, NewOrder, Order};
use crate::services::outcome::{Outcome, SkipReason};
use crate::stores::order_desk::OrderDesk;
use crate::stores::session::SessionContext;
use tracing::info;

/// Create an order for the current cart and start tracking it.
///
/// The demo user is looked up again by handle rather than taken from the
/// session; the session only gates whether ordering is possible yet.
pub async fn start_order(
    desk: &OrderDesk,
    session: &SessionContext,
    backend: &BackendClient,
) -> Result<Outcome<Order>, WorkflowError> {
    if !session.is_resolved() {
        return Ok(Outcome::Skipped(SkipReason::NoIdentity));
    }

    let Some(ticket) = desk.begin() else {
        return Ok(Outcome::Skipped(SkipReason::InFlight));
    };

    let handle = session.handle();
    let user = backend
        .find_user(handle)
        .await?
        .ok_or_else(|| WorkflowError::UserNotFound {
            handle: handle.to_string(),
        })?;

    let cart = desk.cart();
    let order = backend
        .create_order(&NewOrder {
            user_id: user.id,
            items: cart.items.clone(),
            total_amount: cart.total,
        })
        .await?;

    info!(
        order_id = %order.id,
        user_id = %order.user_id,
        status = %order.payment_status,
        "Order created"
    );
    ticket.track(order.clone());

    Ok(Outcome::Done(order))
}

/// Drive the tracked order through the mock payment endpoint.
///
/// Whatever order the backend returns replaces the tracked one; the
/// requested outcome is never assumed.
pub async fn mock_pay(
    desk: &OrderDesk,
    backend: &BackendClient,
    success: bool,
) -> Result<Outcome<Order>, WorkflowError> {
    let Some(current) = desk.tracked() else {
        return Ok(Outcome::Skipped(SkipReason::NoTrackedOrder));
    };

    let Some(ticket) = desk.begin() else {
        return Ok(Outcome::Skipped(SkipReason::InFlight));
    };

    let order = backend
        .complete_mock_payment(&MockPayment {
            order_id: current.id,
            success,
        })
        .await?;

    info!(
        order_id = %order.id,
        requested_success = success,
        status = %order.payment_status,
        "Mock payment completed"
    );
    ticket.track(order.clone());

    Ok(Outcome::Done(order))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DemoConfig;
    use crate::core::error::BackendError;
    use crate::models::cart::Cart;
    use crate::models::order::PaymentStatus;
    use crate::services::bootstrap::bootstrap;
    use crate::testing::fake_backend::FakeBackend;

    fn desk() -> OrderDesk {
        OrderDesk::new(Cart::new(
            vec!["Masala Chai".to_string(), "Cold Boba Pink".to_string()],
            180,
        ))
    }

    async fn resolved_session(client: &BackendClient) -> SessionContext {
        let session = SessionContext::new(DemoConfig::default());
        bootstrap(&session, client).await.unwrap();
        session
    }

    fn expect_done(outcome: Outcome<Order>) -> Order {
        match outcome {
            Outcome::Done(order) => order,
            Outcome::Skipped(reason) => panic!("unexpected skip: {}", reason),
        }
    }

    #[tokio::test]
    async fn test_start_order_sends_cart() {
        let (client, _backend) = FakeBackend::start().await;
        let session = resolved_session(&client).await;
        let desk = desk();

        let order = expect_done(start_order(&desk, &session, &client).await.unwrap());

        assert_eq!(order.items, vec!["Masala Chai", "Cold Boba Pink"]);
        assert_eq!(order.total_amount, 180.0);
        assert_eq!(order.user_id, session.user().unwrap().id);
        assert_eq!(order.status(), PaymentStatus::Pending);
        assert_eq!(desk.tracked(), Some(order));
    }

    #[tokio::test]
    async fn test_start_order_does_a_fresh_lookup() {
        let (client, backend) = FakeBackend::start().await;
        let session = resolved_session(&client).await;
        let lookups = backend.calls("GET /api/users");

        start_order(&desk(), &session, &client).await.unwrap();

        assert_eq!(backend.calls("GET /api/users"), lookups + 1);
    }

    #[tokio::test]
    async fn test_start_order_lookup_miss_keeps_tracked_order() {
        let (client, backend) = FakeBackend::start().await;
        let session = resolved_session(&client).await;
        let desk = desk();
        let first = expect_done(start_order(&desk, &session, &client).await.unwrap());

        backend.remove_user("@rvu_guest");
        let result = start_order(&desk, &session, &client).await;

        assert!(matches!(result, Err(WorkflowError::UserNotFound { .. })));
        assert_eq!(desk.tracked(), Some(first));
        assert_eq!(backend.calls("POST /api/orders"), 1);
        assert!(!desk.is_busy());
    }

    #[tokio::test]
    async fn test_start_order_without_session_is_noop() {
        let (client, backend) = FakeBackend::start().await;
        let session = SessionContext::new(DemoConfig::default());

        let outcome = start_order(&desk(), &session, &client).await.unwrap();

        assert_eq!(outcome, Outcome::Skipped(SkipReason::NoIdentity));
        assert_eq!(backend.total_calls(), 0);
    }

    #[tokio::test]
    async fn test_start_order_while_in_flight_is_noop() {
        let (client, backend) = FakeBackend::start().await;
        let session = resolved_session(&client).await;
        let desk = desk();
        let before = backend.total_calls();

        let _pending = desk.begin().unwrap();
        let outcome = start_order(&desk, &session, &client).await.unwrap();

        assert_eq!(outcome, Outcome::Skipped(SkipReason::InFlight));
        assert_eq!(backend.total_calls(), before);
    }

    #[tokio::test]
    async fn test_new_order_overwrites_tracked() {
        let (client, backend) = FakeBackend::start().await;
        let session = resolved_session(&client).await;
        let desk = desk();

        let first = expect_done(start_order(&desk, &session, &client).await.unwrap());
        let second = expect_done(start_order(&desk, &session, &client).await.unwrap());

        assert_ne!(first.id, second.id);
        assert_eq!(desk.tracked().unwrap().id, second.id);
        assert_eq!(backend.orders().len(), 2);
    }

    #[tokio::test]
    async fn test_mock_pay_without_order_is_noop() {
        let (client, backend) = FakeBackend::start().await;
        let desk = desk();

        let outcome = mock_pay(&desk, &client, true).await.unwrap();

        assert_eq!(outcome, Outcome::Skipped(SkipReason::NoTrackedOrder));
        assert_eq!(backend.total_calls(), 0);
        assert!(desk.tracked().is_none());
    }

    #[tokio::test]
    async fn test_last_payment_response_wins() {
        let (client, _backend) = FakeBackend::start().await;
        let session = resolved_session(&client).await;
        let desk = desk();
        let order = expect_done(start_order(&desk, &session, &client).await.unwrap());

        let paid = expect_done(mock_pay(&desk, &client, true).await.unwrap());
        assert_eq!(paid.status(), PaymentStatus::Success);

        let failed = expect_done(mock_pay(&desk, &client, false).await.unwrap());
        assert_eq!(failed.id, order.id);

        let tracked = desk.tracked().unwrap();
        assert_eq!(tracked.payment_status, "failed");
    }

    #[tokio::test]
    async fn test_status_comes_from_backend_not_request() {
        let (client, backend) = FakeBackend::start().await;
        let session = resolved_session(&client).await;
        let desk = desk();
        start_order(&desk, &session, &client).await.unwrap();

        backend.settle_as("under_review");
        mock_pay(&desk, &client, true).await.unwrap();

        let tracked = desk.tracked().unwrap();
        assert_eq!(tracked.payment_status, "under_review");
        assert_eq!(tracked.status(), PaymentStatus::Unknown);
    }

    #[tokio::test]
    async fn test_rejected_order_keeps_state() {
        let (client, backend) = FakeBackend::start().await;
        let session = resolved_session(&client).await;
        let desk = desk();
        backend.reject_orders(true);

        let result = start_order(&desk, &session, &client).await;

        assert!(matches!(
            result,
            Err(WorkflowError::Backend(BackendError::Status { .. }))
        ));
        assert!(desk.tracked().is_none());
        assert!(!desk.is_busy());
    }
}
