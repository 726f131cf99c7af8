//! Resource client tests against a mock backend.

use rust_decimal_macros::dec;
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use lunas_client::ApiClient;
use lunas_client::resources::ListQuery;
use lunas_client::resources::settlements::PaymentRequest;
use lunas_core::invoice::InvoiceKind;
use lunas_core::settlement::{SettlementSide, summarize};
use lunas_shared::types::PageRequest;

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new(&server.uri(), 5).expect("client builds")
}

fn invoice_json(code: &str, status: &str) -> serde_json::Value {
    json!({
        "id": Uuid::new_v4(),
        "code": code,
        "kind": "sales",
        "date": "2026-03-02",
        "due_date": "2026-04-01",
        "party": "CV Abadi Jaya",
        "subtotal": "1000",
        "tax": "110",
        "total": "1110",
        "status": status
    })
}

#[tokio::test]
async fn lists_invoices_with_query_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/invoices"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "50"))
        .and(query_param("status", "unpaid"))
        .and(query_param("from_date", "2026-01-01"))
        .and(query_param("kind", "sales"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "data": [invoice_json("INV-001", "unpaid"), invoice_json("INV-002", "unpaid")],
                "meta": { "page": 2, "limit": 50, "total": 102, "total_pages": 3 }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let query = ListQuery {
        page: Some(PageRequest { page: 2, limit: 50 }),
        status: Some("unpaid".to_string()),
        from_date: Some("2026-01-01".parse().unwrap()),
        to_date: None,
    };
    let page = client(&server)
        .invoices()
        .list(Some(InvoiceKind::Sales), &query)
        .await
        .unwrap();

    assert_eq!(page.data.len(), 2);
    assert_eq!(page.meta.total, 102);
    assert_eq!(page.data[0].total, dec!(1110));
}

#[tokio::test]
async fn payables_list_feeds_summary_cards() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/payables"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "data": [
                    {
                        "id": Uuid::new_v4(),
                        "invoice_code": "INV-010",
                        "party": "PT Sumber Rejeki",
                        "amount": "1000",
                        "paid_amount": "400",
                        "balance": "600",
                        "due_date": "2026-03-20",
                        "status": "partial"
                    },
                    {
                        "id": Uuid::new_v4(),
                        "invoice_code": "INV-011",
                        "party": "PT Sumber Rejeki",
                        "amount": "500",
                        "paid_amount": "500",
                        "balance": "0",
                        "due_date": null,
                        "status": "paid"
                    }
                ],
                "meta": { "page": 1, "limit": 20, "total": 2, "total_pages": 1 }
            }
        })))
        .mount(&server)
        .await;

    let page = client(&server)
        .settlements()
        .list(SettlementSide::Payable, &ListQuery::default())
        .await
        .unwrap();

    let summary = summarize(&page.data);
    assert_eq!(summary.total_amount, dec!(1500));
    assert_eq!(summary.total_paid, dec!(900));
    assert_eq!(summary.total_balance, dec!(600));
    assert_eq!(summary.open_count, 1);
    assert!(page.data[0].payable());
    assert!(!page.data[1].payable());
}

#[tokio::test]
async fn pay_posts_amount_and_returns_updated_record() {
    let server = MockServer::start().await;
    let id: Uuid = "c6a7e0a4-3f4c-4a2e-9a57-0b8f5d8e1c22".parse().unwrap();

    Mock::given(method("POST"))
        .and(path(format!("/api/payables/{id}/payments")))
        .and(body_json(json!({
            "amount": "600",
            "date": "2026-03-21"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "id": id,
                "invoice_code": "INV-010",
                "party": "PT Sumber Rejeki",
                "amount": "1000",
                "paid_amount": "1000",
                "balance": "0",
                "due_date": null,
                "status": "paid"
            },
            "message": "Payment recorded"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let record = client(&server)
        .settlements()
        .pay(
            SettlementSide::Payable,
            id,
            &PaymentRequest {
                amount: dec!(600),
                date: "2026-03-21".parse().unwrap(),
                method: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(record.balance, dec!(0));
    assert!(!record.payable());
}

#[tokio::test]
async fn login_returns_token_and_profile() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({
            "email": "siti@example.com",
            "password": "rahasia"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "token": "token-xyz",
                "user": {
                    "id": Uuid::new_v4(),
                    "name": "Siti",
                    "email": "siti@example.com",
                    "role": "admin"
                }
            }
        })))
        .mount(&server)
        .await;

    let login = client(&server)
        .auth()
        .login("siti@example.com", "rahasia")
        .await
        .unwrap();
    assert_eq!(login.token, "token-xyz");
    assert_eq!(login.user.name, "Siti");
}

#[tokio::test]
async fn balance_sheet_report_decodes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/reports/balance_sheet"))
        .and(query_param("as_of", "2026-06-30"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "as_of": "2026-06-30",
                "currency": "IDR",
                "assets": {
                    "title": "Assets",
                    "rows": [{ "label": "Kas", "amount": "10000" }],
                    "total": "10000"
                },
                "liabilities": {
                    "title": "Liabilities",
                    "rows": [{ "label": "Hutang Usaha", "amount": "4000" }],
                    "total": "4000"
                },
                "equity": {
                    "title": "Equity",
                    "rows": [{ "label": "Modal", "amount": "6000" }],
                    "total": "6000"
                },
                "total_assets": "10000",
                "total_liabilities": "4000",
                "total_equity": "6000"
            }
        })))
        .mount(&server)
        .await;

    let report = client(&server)
        .reports()
        .balance_sheet("2026-06-30".parse().unwrap())
        .await
        .unwrap();

    assert_eq!(report.total_assets, dec!(10000));
    assert_eq!(
        report.balance_check(),
        lunas_core::reports::BalanceCheck::Balanced
    );
}
