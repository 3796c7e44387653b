//! End-to-end session flows: browse, add to cart, check out, place order.

use std::time::Duration;

use kallpa_commerce::checkout::{CheckoutStep, OrderStatus};
use kallpa_commerce::CommerceError;
use kallpa_storefront::{
    Credentials, MockAuthenticator, ProductSelection, SimulatedGateway, Storefront,
    StorefrontConfig, StorefrontError,
};
use tokio_util::sync::CancellationToken;

fn storefront() -> Storefront {
    Storefront::from_config(&StorefrontConfig::default()).unwrap()
}

/// Fill in the forms and walk the wizard to Review.
fn ready_for_review(store: &mut Storefront) {
    let wizard = store.checkout_mut();
    wizard.shipping.first_name = "Ana".into();
    wizard.shipping.last_name = "Quispe".into();
    wizard.shipping.email = "ana@example.com".into();
    wizard.shipping.phone = "+51 999 888 777".into();
    wizard.shipping.address = "Av. El Sol 123".into();
    wizard.shipping.city = "Cusco".into();
    wizard.shipping.state = "Cusco".into();
    wizard.shipping.zip_code = "08000".into();
    wizard.shipping.country = "Perú".into();

    wizard.payment.card_number = "4111 1111 1111 1111".into();
    wizard.payment.expiry_date = "12/28".into();
    wizard.payment.cvv = "123".into();
    wizard.payment.card_name = "ANA QUISPE".into();

    assert_eq!(store.checkout_advance().unwrap(), CheckoutStep::Payment);
    assert_eq!(store.checkout_advance().unwrap(), CheckoutStep::Review);
}

fn add_shell(store: &mut Storefront) {
    let selection = ProductSelection::new().with_size("M").with_color("Olive");
    store.add_selection("1", &selection).unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_place_order_clears_cart_and_records_history() {
    let mut store = storefront();
    let auth = MockAuthenticator::default();
    store
        .login(&auth, &Credentials::new("ana@example.com", "pw"))
        .unwrap();

    add_shell(&mut store);
    ready_for_review(&mut store);

    let gateway = SimulatedGateway::new(Duration::from_millis(2000));
    let confirmation = store
        .place_order(&gateway, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(confirmation.total.display(), "$597.30");
    assert!(store.checkout().is_complete());
    assert_eq!(store.checkout().confirmation(), Some(&confirmation));
    assert!(store.cart().is_empty());

    let account = store.account().unwrap();
    assert_eq!(account.order_count(), 1);
    let order = account.recent_orders().next().unwrap();
    assert_eq!(order.id, confirmation.order_id);
    assert_eq!(order.status, OrderStatus::Confirmed);
    assert_eq!(order.item_count(), 1);
    assert_eq!(order.shipping.city, "Cusco");
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_placement_keeps_cart() {
    let mut store = storefront();
    add_shell(&mut store);
    ready_for_review(&mut store);

    let gateway = SimulatedGateway::new(Duration::from_secs(2));
    let cancel = CancellationToken::new();
    let canceller = {
        let cancel = cancel.clone();
        async move {
            tokio::time::sleep(Duration::from_millis(500)).await;
            cancel.cancel();
        }
    };

    let (result, ()) = tokio::join!(store.place_order(&gateway, &cancel), canceller);
    assert_eq!(
        result,
        Err(StorefrontError::Commerce(CommerceError::OrderCancelled))
    );

    assert_eq!(store.checkout().step(), CheckoutStep::Review);
    assert!(!store.checkout().is_processing());
    assert_eq!(store.cart().item_count(), 1);
    assert!(store.orders().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_dropped_placement_returns_to_review() {
    let mut store = storefront();
    add_shell(&mut store);
    ready_for_review(&mut store);

    let gateway = SimulatedGateway::new(Duration::from_secs(2));
    let cancel = CancellationToken::new();
    let timed_out = tokio::time::timeout(
        Duration::from_millis(100),
        store.place_order(&gateway, &cancel),
    )
    .await;
    assert!(timed_out.is_err());

    assert_eq!(store.checkout().step(), CheckoutStep::Review);
    assert!(!store.checkout().is_processing());
    assert_eq!(store.cart().item_count(), 1);

    assert_eq!(store.checkout_back().unwrap(), CheckoutStep::Payment);
    assert_eq!(store.checkout_advance().unwrap(), CheckoutStep::Review);
    let confirmation = store.place_order(&gateway, &cancel).await.unwrap();
    assert_eq!(store.orders()[0].id, confirmation.order_id);
    assert!(store.cart().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_configured_processing_delay() {
    let config = StorefrontConfig::from_toml("[checkout]\nprocessing_delay_ms = 50").unwrap();
    let mut store = Storefront::from_config(&config).unwrap();
    add_shell(&mut store);
    ready_for_review(&mut store);

    let gateway = store.simulated_gateway();
    let started = tokio::time::Instant::now();
    store
        .place_order(&gateway, &CancellationToken::new())
        .await
        .unwrap();
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_millis(50));
    assert!(elapsed < Duration::from_millis(60));
    assert!(store.checkout().is_complete());
}

#[tokio::test(start_paused = true)]
async fn test_failed_placement_can_retry() {
    let mut store = storefront();
    add_shell(&mut store);
    ready_for_review(&mut store);

    let failing = SimulatedGateway::failing(Duration::from_millis(100), "card declined");
    let result = store.place_order(&failing, &CancellationToken::new()).await;
    assert_eq!(
        result,
        Err(StorefrontError::Commerce(CommerceError::OrderFailed(
            "card declined".to_string()
        )))
    );
    assert_eq!(store.checkout().step(), CheckoutStep::Review);
    assert_eq!(store.cart().item_count(), 1);

    let gateway = SimulatedGateway::new(Duration::from_millis(100));
    assert!(store
        .place_order(&gateway, &CancellationToken::new())
        .await
        .is_ok());
    assert!(store.cart().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_empty_cart_cannot_be_placed() {
    let mut store = storefront();
    ready_for_review(&mut store);

    let gateway = SimulatedGateway::new(Duration::from_millis(100));
    let result = store.place_order(&gateway, &CancellationToken::new()).await;
    assert_eq!(result, Err(StorefrontError::Commerce(CommerceError::EmptyCart)));
    assert!(!store.checkout().is_processing());
}

#[tokio::test(start_paused = true)]
async fn test_placement_requires_review_step() {
    let mut store = storefront();
    add_shell(&mut store);

    let gateway = SimulatedGateway::new(Duration::from_millis(100));
    let result = store.place_order(&gateway, &CancellationToken::new()).await;
    assert!(matches!(
        result,
        Err(StorefrontError::Commerce(
            CommerceError::InvalidCheckoutTransition { .. }
        ))
    ));
}

#[tokio::test(start_paused = true)]
async fn test_second_order_after_restart() {
    let mut store = storefront();
    let gateway = SimulatedGateway::new(Duration::from_millis(10));

    add_shell(&mut store);
    ready_for_review(&mut store);
    store
        .place_order(&gateway, &CancellationToken::new())
        .await
        .unwrap();

    store.restart_checkout();
    assert_eq!(store.checkout().step(), CheckoutStep::Shipping);

    add_shell(&mut store);
    ready_for_review(&mut store);
    store
        .place_order(&gateway, &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(store.orders().len(), 2);
    assert_ne!(store.orders()[0].id, store.orders()[1].id);
}

#[test]
fn test_incomplete_shipping_blocks_advance() {
    let mut store = storefront();
    store.checkout_mut().shipping.first_name = "Ana".into();
    assert!(matches!(
        store.checkout_advance(),
        Err(StorefrontError::Commerce(CommerceError::CheckoutIncomplete(_)))
    ));
    assert_eq!(store.checkout().step(), CheckoutStep::Shipping);
}
