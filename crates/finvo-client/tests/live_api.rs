//! Live smoke test against a real Finvo deployment.
//!
//! Exercises the full create → get → update → delete cycle for an
//! invoice, including the multipart logo upload. Skips silently unless
//! `FINVO_API_KEY` is set (point `FINVO_API_URL` at staging to avoid
//! touching production data).
//!
//! Run:  cargo test --test live_api -- --nocapture

use bytes::Bytes;
use chrono::{Duration, Utc};
use finvo::models::{InvoiceParams, LineItem, ListParams, Party};
use finvo::Attachment;
use finvo_client::FinvoClient;

fn live_client() -> Option<FinvoClient> {
    dotenvy::dotenv().ok();
    if std::env::var("FINVO_API_KEY").is_err() {
        eprintln!("FINVO_API_KEY not set, skipping live test");
        return None;
    }
    Some(FinvoClient::from_env().expect("client construction from env"))
}

#[tokio::test]
async fn invoice_crud_cycle() {
    let Some(client) = live_client() else {
        return;
    };
    let invoices = client.invoices();

    let params = InvoiceParams {
        title: "SDK smoke test invoice".to_string(),
        currency: "AED".to_string(),
        due_date: Some(Utc::now() + Duration::days(30)),
        customer: Some(Party {
            name: "John Doe".to_string(),
            email: Some("j@x.com".to_string()),
            ..Party::default()
        }),
        items: vec![LineItem::new("Item 1", 1.0, 100.0)],
        logo: Some(Attachment::new(
            "logo.png",
            Bytes::from_static(b"\x89PNG\r\n\x1a\n"),
        )),
        ..InvoiceParams::default()
    };

    let created = invoices.create(&params).await.expect("create failed");
    assert_eq!(created.title, "SDK smoke test invoice");

    let fetched = invoices.get(&created.id).await.expect("get failed");
    assert_eq!(fetched.id, created.id);

    let mut updated_params = params.clone();
    updated_params.title = "SDK smoke test invoice (updated)".to_string();
    let updated = invoices
        .update(&created.id, &updated_params)
        .await
        .expect("update failed");
    assert_eq!(updated.title, "SDK smoke test invoice (updated)");

    let page = invoices
        .list(&ListParams::page(1))
        .await
        .expect("list failed");
    assert!(page.results.iter().any(|i| i.id == created.id));

    invoices.delete(&created.id).await.expect("delete failed");
}
