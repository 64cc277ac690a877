mod support;

use std::time::{Duration, Instant};

use storefront_client::pages::cart::PAYPAL_CLOSE_DELAY;
use storefront_client::pages::{CartPage, PaymentMethod};
use storefront_client::{ClientConfig, StatusKey};
use support::{cart_json, gateway};

#[tokio::test]
async fn test_load_statuses() {
    let gw = gateway();
    gw.http().respond(cart_json(&[]));
    gw.http().respond(cart_json(&[(1, 7, 2)]));
    gw.http().fail(401, None);

    let mut page = CartPage::default();
    assert!(page.status().unwrap().is_key(StatusKey::CartLoading));

    page.load(&gw).await;
    assert!(page.status().unwrap().is_key(StatusKey::CartEmpty));

    page.load(&gw).await;
    assert_eq!(page.status(), None);
    assert_eq!(page.cart().unwrap().item_count(), 2);

    page.load(&gw).await;
    assert!(page.status().unwrap().is_key(StatusKey::CartNeedSignIn));
    assert!(page.cart().is_none());
}

#[tokio::test]
async fn test_zero_quantity_removes_line() {
    let gw = gateway();
    gw.http().respond(cart_json(&[(1, 7, 2)]));
    gw.http().respond_empty();
    gw.http().respond(cart_json(&[]));

    let mut page = CartPage::default();
    page.load(&gw).await;
    page.update_quantity(&gw, 1, 0).await.unwrap();

    assert_eq!(
        gw.http().requests(),
        vec!["GET carts/me", "DELETE carts/me/items/1", "GET carts/me"]
    );
    assert!(page.status().unwrap().is_key(StatusKey::CartEmpty));
}

#[tokio::test]
async fn test_quantity_change_sends_product_and_reloads() {
    let gw = gateway();
    gw.http().respond(cart_json(&[(1, 7, 2)]));
    gw.http().respond(cart_json(&[(1, 7, 3)]));
    gw.http().respond(cart_json(&[(1, 7, 3)]));

    let mut page = CartPage::default();
    page.load(&gw).await;
    page.update_quantity(&gw, 1, 3).await.unwrap();

    let calls = gw.http().calls();
    assert_eq!(calls[1].path, "carts/me/items/1");
    assert_eq!(calls[1].body.as_ref().unwrap()["productId"], 7);
    assert_eq!(calls[1].body.as_ref().unwrap()["quantity"], 3);
    assert_eq!(page.cart().unwrap().item(1).unwrap().quantity, 3);
}

#[tokio::test]
async fn test_update_failure_is_reported() {
    let gw = gateway();
    gw.http().respond(cart_json(&[(1, 7, 2)]));
    gw.http().fail(500, None);

    let mut page = CartPage::default();
    page.load(&gw).await;
    assert!(page.update_quantity(&gw, 1, 5).await.is_err());
    assert!(page.error().unwrap().is_key(StatusKey::CartUpdateFailed));
    assert_eq!(page.cart().unwrap().item(1).unwrap().quantity, 2);
}

#[tokio::test]
async fn test_paypal_capture_closes_and_reloads() {
    let gw = gateway();
    gw.http().respond(cart_json(&[(1, 7, 2)]));
    gw.http().respond(serde_json::json!({ "orderId": "PP-77" }));
    gw.http().respond(serde_json::json!({ "status": "COMPLETED" }));
    gw.http().respond(cart_json(&[]));

    let config = ClientConfig::default().with_paypal("client-id", "MAD");
    let mut page = CartPage::from_config(&config);
    page.load(&gw).await;
    page.set_payment_method(PaymentMethod::PayPal);
    page.open_checkout();

    let order_id = page.create_paypal_order(&gw).await.unwrap();
    assert_eq!(order_id, "PP-77");
    assert_eq!(page.checkout().unwrap().order_id(), Some("PP-77"));
    let body = gw.http().last_body().unwrap();
    assert_eq!(body["cartId"], 42);
    assert_eq!(body["currency"], "MAD");

    let t0 = Instant::now();
    page.capture_paypal_order(&gw, &order_id, t0).await.unwrap();
    assert!(page.checkout().unwrap().status().unwrap().is_key(StatusKey::CheckoutPaid));

    page.tick(&gw, t0 + Duration::from_millis(500)).await;
    assert!(page.checkout().is_some());
    page.tick(&gw, t0 + PAYPAL_CLOSE_DELAY).await;
    assert!(page.checkout().is_none());
    assert!(page.status().unwrap().is_key(StatusKey::CartEmpty));
    assert_eq!(gw.http().requests().last().map(String::as_str), Some("GET carts/me"));
}

#[tokio::test]
async fn test_paypal_failure_marks_checkout() {
    let gw = gateway();
    gw.http().respond(cart_json(&[(1, 7, 2)]));
    gw.http().fail(502, None);

    let mut page = CartPage::default();
    page.load(&gw).await;
    page.open_checkout();

    assert!(page.create_paypal_order(&gw).await.is_err());
    assert!(page.checkout().unwrap().status().unwrap().is_key(StatusKey::CheckoutFailed));
}

#[tokio::test]
async fn test_capture_reloads_after_dialog_closed() {
    let gw = gateway();
    gw.http().respond(cart_json(&[(1, 7, 2)]));
    gw.http().respond(serde_json::json!({ "orderId": "PP-78" }));
    gw.http().respond(serde_json::json!({ "status": "COMPLETED" }));
    gw.http().respond(cart_json(&[]));

    let mut page = CartPage::default();
    page.load(&gw).await;
    page.set_payment_method(PaymentMethod::PayPal);
    page.open_checkout();
    let order_id = page.create_paypal_order(&gw).await.unwrap();
    page.close_checkout();

    let t0 = Instant::now();
    page.capture_paypal_order(&gw, &order_id, t0).await.unwrap();
    assert!(page.checkout().is_none());

    page.tick(&gw, t0 + Duration::from_millis(999)).await;
    assert_eq!(gw.http().requests().len(), 3);
    page.tick(&gw, t0 + PAYPAL_CLOSE_DELAY).await;
    assert_eq!(gw.http().requests().last().map(String::as_str), Some("GET carts/me"));
    assert!(page.status().unwrap().is_key(StatusKey::CartEmpty));

    page.tick(&gw, t0 + Duration::from_secs(5)).await;
    assert_eq!(gw.http().requests().len(), 4);
}

#[tokio::test]
async fn test_unknown_line_reports_update_failure() {
    let gw = gateway();
    gw.http().respond(cart_json(&[(1, 7, 2)]));

    let mut page = CartPage::default();
    page.load(&gw).await;

    assert!(page.update_quantity(&gw, 99, 2).await.is_err());
    assert!(page.error().unwrap().is_key(StatusKey::CartUpdateFailed));
    assert_eq!(gw.http().requests(), vec!["GET carts/me"]);
    assert_eq!(page.cart().unwrap().item(1).unwrap().quantity, 2);
}
