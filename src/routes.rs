//! Routers for both services.
//!
//! The binaries only load config, build state and serve one of these, so
//! tests exercise exactly the routes that run in production.

use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{health, transactions, users},
    state::{TransactionState, UserState},
};

/// Routes of the user service.
pub fn user_router(state: UserState) -> Router {
    Router::new()
        .route("/health", get(health::user_service_health))
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/{id}", get(users::get_user))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

/// Routes of the transaction service.
pub fn transaction_router(state: TransactionState) -> Router {
    Router::new()
        .route("/health", get(health::transaction_service_health))
        .route(
            "/transactions",
            get(transactions::list_transactions).post(transactions::create_transaction),
        )
        .route("/transactions/{id}", get(transactions::get_transaction))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{Value, json};

    use super::*;
    use crate::{
        clients::HttpUserDirectory,
        models::{
            transaction::{MissingDatePolicy, Transaction},
            user::User,
        },
        store::{JsonFileStore, MemoryStore, RecordStore},
    };

    fn user_server(users: Arc<dyn RecordStore<User>>) -> TestServer {
        TestServer::new(user_router(UserState::new(users)))
    }

    /// Serve the user service on an ephemeral local port and return its base URL.
    async fn spawn_user_service(users: Arc<dyn RecordStore<User>>) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Could not bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");
        let app = user_router(UserState::new(users));
        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });
        format!("http://{addr}")
    }

    /// A base URL where nothing is listening.
    async fn closed_port_url() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Could not bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");
        drop(listener);
        format!("http://{addr}")
    }

    fn transaction_server(user_service_url: &str) -> TestServer {
        let directory = HttpUserDirectory::new(user_service_url, Duration::from_millis(500))
            .expect("Could not build user directory");
        let state = TransactionState::new(
            Arc::new(MemoryStore::<Transaction>::new()),
            Arc::new(directory),
            MissingDatePolicy::Placeholder,
        );
        TestServer::new(transaction_router(state))
    }

    #[tokio::test]
    async fn user_health_is_constant() {
        let server = user_server(Arc::new(MemoryStore::<User>::new()));

        server
            .get("/health")
            .await
            .assert_json(&json!({ "status": "OK", "service": "user-service" }));
    }

    #[tokio::test]
    async fn health_ignores_corrupt_storage() {
        let path = std::env::temp_dir().join(format!("ledger_users_{}.json", uuid::Uuid::new_v4()));
        tokio::fs::write(&path, b"[{").await.expect("Could not write test file");
        let server = user_server(Arc::new(JsonFileStore::<User>::new(&path)));

        let response = server.get("/health").await;
        response.assert_status_ok();
        response.assert_json(&json!({ "status": "OK", "service": "user-service" }));

        server.get("/users").await.assert_json(&json!([]));

        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn create_then_get_user() {
        let server = user_server(Arc::new(MemoryStore::<User>::new()));

        let response = server
            .post("/users")
            .json(&json!({ "name": "Ana", "email": "ana@x.com" }))
            .await;
        response.assert_status_ok();
        response.assert_json(&json!({ "id": 1, "name": "Ana", "email": "ana@x.com" }));

        server
            .get("/users/1")
            .await
            .assert_json(&json!({ "id": 1, "name": "Ana", "email": "ana@x.com" }));
    }

    #[tokio::test]
    async fn list_users_in_creation_order() {
        let server = user_server(Arc::new(MemoryStore::<User>::new()));

        for name in ["Ana", "Bo", "Cy", "Di"] {
            server
                .post("/users")
                .json(&json!({ "name": name, "email": format!("{name}@x.com") }))
                .await
                .assert_status_ok();
        }

        let users = server.get("/users").await.json::<Vec<User>>();
        let ids: Vec<i64> = users.iter().map(|u| u.id).collect();
        let names: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(names, vec!["Ana", "Bo", "Cy", "Di"]);
    }

    #[tokio::test]
    async fn unknown_user_is_404_with_detail() {
        let server = user_server(Arc::new(MemoryStore::<User>::new()));

        let response = server.get("/users/1").await;
        response.assert_status_not_found();
        response.assert_json(&json!({ "detail": "User not found" }));

        server
            .post("/users")
            .json(&json!({ "name": "Ana", "email": "ana@x.com" }))
            .await;

        let response = server.get("/users/2").await;
        response.assert_status_not_found();
        response.assert_json(&json!({ "detail": "User not found" }));
    }

    #[tokio::test]
    async fn malformed_user_requests_are_422() {
        let store = Arc::new(MemoryStore::<User>::new());
        let server = user_server(store.clone());

        server
            .post("/users")
            .json(&json!({ "name": "Ana" }))
            .await
            .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        let response = server.get("/users/abc").await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert!(response.json::<Value>()["detail"].is_string());

        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn transaction_health_is_constant() {
        let server = transaction_server(&closed_port_url().await);

        server
            .get("/health")
            .await
            .assert_json(&json!({ "status": "OK", "service": "transaction-service" }));
    }

    #[tokio::test]
    async fn transaction_enriched_with_user_end_to_end() {
        let users: Arc<dyn RecordStore<User>> = Arc::new(MemoryStore::<User>::new());
        let users_api = user_server(users.clone());
        let user_service_url = spawn_user_service(users).await;
        let server = transaction_server(&user_service_url);

        users_api
            .post("/users")
            .json(&json!({ "name": "Ana", "email": "ana@x.com" }))
            .await
            .assert_json(&json!({ "id": 1, "name": "Ana", "email": "ana@x.com" }));

        let created = server
            .post("/transactions")
            .json(&json!({ "amount": 50, "category": "food", "type": "expense", "userId": 1 }))
            .await;
        created.assert_status_ok();
        created.assert_json(&json!({
            "id": 1,
            "amount": 50.0,
            "category": "food",
            "description": "",
            "type": "expense",
            "date": "2024-01-15",
            "userId": 1
        }));

        let fetched = server.get("/transactions/1").await;
        fetched.assert_status_ok();
        fetched.assert_json(&json!({
            "id": 1,
            "amount": 50.0,
            "category": "food",
            "description": "",
            "type": "expense",
            "date": "2024-01-15",
            "userId": 1,
            "user": { "id": 1, "name": "Ana", "email": "ana@x.com" }
        }));

        // Listing never enriches.
        let listed = server.get("/transactions").await.json::<Value>();
        assert!(listed[0].get("user").is_none());
    }

    #[tokio::test]
    async fn transaction_for_unknown_user_has_no_user() {
        let user_service_url = spawn_user_service(Arc::new(MemoryStore::<User>::new())).await;
        let server = transaction_server(&user_service_url);

        server
            .post("/transactions")
            .json(&json!({ "amount": 9.5, "category": "misc", "type": "other", "userId": 77 }))
            .await
            .assert_status_ok();

        let body = server.get("/transactions/1").await.json::<Value>();
        assert_eq!(body["userId"], 77);
        assert!(body.get("user").is_none());
    }

    #[tokio::test]
    async fn transaction_without_user_when_user_service_is_unreachable() {
        let server = transaction_server(&closed_port_url().await);

        server
            .post("/transactions")
            .json(&json!({
                "amount": 1200,
                "category": "salary",
                "description": "march",
                "type": "income",
                "date": "2024-03-31",
                "userId": 1
            }))
            .await
            .assert_status_ok();

        let response = server.get("/transactions/1").await;
        response.assert_status_ok();
        response.assert_json(&json!({
            "id": 1,
            "amount": 1200.0,
            "category": "salary",
            "description": "march",
            "type": "income",
            "date": "2024-03-31",
            "userId": 1
        }));
    }

    #[tokio::test]
    async fn unknown_transaction_is_404_with_detail() {
        let server = transaction_server(&closed_port_url().await);

        let response = server.get("/transactions/3").await;
        response.assert_status_not_found();
        response.assert_json(&json!({ "detail": "Transaction not found" }));
    }

    #[tokio::test]
    async fn list_transactions_in_creation_order() {
        let server = transaction_server(&closed_port_url().await);

        for category in ["food", "rent", "fun"] {
            server
                .post("/transactions")
                .json(&json!({ "amount": 1, "category": category, "type": "expense", "userId": 1 }))
                .await
                .assert_status_ok();
        }

        let transactions = server.get("/transactions").await.json::<Vec<Transaction>>();
        let pairs: Vec<(i64, &str)> = transactions
            .iter()
            .map(|t| (t.id, t.category.as_str()))
            .collect();
        assert_eq!(pairs, vec![(1, "food"), (2, "rent"), (3, "fun")]);
    }

    #[tokio::test]
    async fn malformed_transaction_is_422() {
        let server = transaction_server(&closed_port_url().await);

        server
            .post("/transactions")
            .json(&json!({ "amount": "lots", "category": "food", "type": "expense", "userId": 1 }))
            .await
            .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        server.get("/transactions").await.assert_json(&json!([]));
    }
}
