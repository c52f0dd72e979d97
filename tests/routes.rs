use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use clientdesk::models::auth::AuthenticatedUser;
use clientdesk::models::config::ServerConfig;
use clientdesk::repository::DieselRepository;
use clientdesk::routes::clients::{
    create_client, delete_client, get_client, list_clients, update_client, update_selection,
};
use clientdesk::routes::health::health;
use clientdesk::routes::metrics::{dashboard, growth};

mod common;

const TEST_SECRET: &str = "test-secret";

fn server_config() -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".to_string(),
        port: 0,
        database_url: String::new(),
        secret: TEST_SECRET.to_string(),
    }
}

fn bearer_token() -> String {
    let user = AuthenticatedUser {
        sub: "user-1".to_string(),
        email: "admin@example.com".to_string(),
        name: "Admin".to_string(),
        exp: (chrono::Utc::now().timestamp() + 3600) as usize,
    };
    user.to_token(TEST_SECRET).expect("token should sign")
}

macro_rules! api_app {
    ($repo:expr) => {
        test::init_service(
            App::new()
                .service(
                    web::scope("/api")
                        .service(health)
                        .service(
                            web::scope("/clients")
                                .service(update_selection)
                                .service(list_clients)
                                .service(create_client)
                                .service(get_client)
                                .service(update_client)
                                .service(delete_client),
                        )
                        .service(web::scope("/metrics").service(dashboard).service(growth)),
                )
                .app_data(web::Data::new($repo))
                .app_data(web::Data::new(server_config())),
        )
    };
}

#[actix_web::test]
async fn health_is_open_while_clients_require_a_token() {
    let test_db = common::TestDb::new("routes_auth.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    let app = api_app!(repo).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/health").to_request())
        .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/clients").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/clients")
            .insert_header(("Authorization", "Bearer garbage"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/metrics/dashboard")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/clients")
            .insert_header(("Authorization", format!("Bearer {}", bearer_token())))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn client_lifecycle_over_http() {
    let test_db = common::TestDb::new("routes_lifecycle.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    let app = api_app!(repo).await;
    let auth = ("Authorization", format!("Bearer {}", bearer_token()));

    // Create.
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/clients")
            .insert_header(auth.clone())
            .set_json(json!({
                "name": "Jane Doe",
                "salary": 1000.0,
                "companyValue": 2000.0
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["name"], "Jane Doe");
    assert_eq!(created["isSelected"], json!(false));
    let id = created["id"].as_str().expect("id is a string").to_string();

    // Listing carries data plus meta.
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/clients?page=1&limit=10")
            .insert_header(auth.clone())
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let listing: Value = test::read_body_json(resp).await;
    assert_eq!(listing["meta"]["total"], json!(1));
    assert_eq!(listing["meta"]["lastPage"], json!(1));
    assert_eq!(listing["data"].as_array().expect("data array").len(), 1);

    // Detail counts a view.
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/clients/{id}"))
            .insert_header(auth.clone())
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let detail: Value = test::read_body_json(resp).await;
    assert_eq!(detail["metric"]["views"], json!(1));

    // Partial update.
    let resp = test::call_service(
        &app,
        test::TestRequest::patch()
            .uri(&format!("/api/clients/{id}"))
            .insert_header(auth.clone())
            .set_json(json!({"salary": 1500.0}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["salary"], json!(1500.0));
    assert_eq!(updated["companyValue"], json!(2000.0));

    // Bulk selection.
    let resp = test::call_service(
        &app,
        test::TestRequest::patch()
            .uri("/api/clients/selection")
            .insert_header(auth.clone())
            .set_json(json!({"isSelected": true}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let result: Value = test::read_body_json(resp).await;
    assert_eq!(result["affected"], json!(1));

    // Dashboard sees the client.
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/metrics/dashboard")
            .insert_header(auth.clone())
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let dashboard_body: Value = test::read_body_json(resp).await;
    assert_eq!(dashboard_body["totalClients"], json!(1));

    // Delete, then the id is gone.
    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/clients/{id}"))
            .insert_header(auth.clone())
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/clients/{id}"))
            .insert_header(auth.clone())
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn malformed_input_is_rejected_at_the_boundary() {
    let test_db = common::TestDb::new("routes_validation.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    let app = api_app!(repo).await;
    let auth = ("Authorization", format!("Bearer {}", bearer_token()));

    // Negative salary.
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/clients")
            .insert_header(auth.clone())
            .set_json(json!({
                "name": "Jane",
                "salary": -1.0,
                "companyValue": 2000.0
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Empty name.
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/clients")
            .insert_header(auth.clone())
            .set_json(json!({
                "name": "",
                "salary": 1.0,
                "companyValue": 2.0
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Invalid uuid in the path.
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/clients/not-a-uuid")
            .insert_header(auth.clone())
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Unknown uuid resolves to 404.
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!(
                "/api/clients/{}",
                clientdesk::domain::types::ClientId::new()
            ))
            .insert_header(auth.clone())
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
