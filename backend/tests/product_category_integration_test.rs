//! Integration tests for product categories and products

mod common;

use axum::http::StatusCode;
use mydiet_backend::services::{ProductCategoryService, ProductService};
use mydiet_shared::types::{ProductCategoryDto, ProductDto};
use serde_json::json;

fn unique_description() -> String {
    format!("Category {}", uuid::Uuid::new_v4().simple())
}

#[tokio::test]
#[ignore = "requires database"]
async fn category_crud_round_trip() {
    let app = common::TestApp::new().await;
    let token = app.authenticate().await;

    let description = unique_description();
    let body = json!({ "description": description });

    let (status, response) = app
        .post_auth("/api/v1/product-categories", &token, &body.to_string())
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let created: serde_json::Value = serde_json::from_str(&response).unwrap();
    let id = created["id"].as_i64().unwrap();

    let (status, response) = app
        .get_auth(&format!("/api/v1/product-categories/{}", id), &token)
        .await;
    assert_eq!(status, StatusCode::OK);
    let fetched: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(fetched["description"], description.as_str());

    let (status, _) = app
        .delete_auth(&format!("/api/v1/product-categories/{}", id), &token)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app
        .get_auth(&format!("/api/v1/product-categories/{}", id), &token)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn short_description_is_rejected() {
    let app = common::TestApp::new().await;
    let token = app.authenticate().await;

    let body = json!({ "description": "abc" });
    let (status, _) = app
        .post_auth("/api/v1/product-categories", &token, &body.to_string())
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires database"]
async fn uniqueness_check_excludes_the_entity_itself() {
    let app = common::TestApp::new().await;
    let token = app.authenticate().await;

    let description = unique_description();
    let body = json!({ "description": description });
    let (_, response) = app
        .post_auth("/api/v1/product-categories", &token, &body.to_string())
        .await;
    let created: serde_json::Value = serde_json::from_str(&response).unwrap();
    let id = created["id"].as_i64().unwrap() as i32;

    // A new category (id 0) with the same description conflicts
    let new_dto = ProductCategoryDto {
        id: 0,
        description: description.clone(),
    };
    let unique = ProductCategoryService::check_if_unique(&app.pool, &new_dto)
        .await
        .unwrap();
    assert!(!unique);

    // The row itself keeping its own description does not conflict
    let own_dto = ProductCategoryDto {
        id,
        description: description.clone(),
    };
    let unique = ProductCategoryService::check_if_unique(&app.pool, &own_dto)
        .await
        .unwrap();
    assert!(unique);

    // A different existing row taking the description conflicts
    let other = json!({ "description": unique_description() });
    let (_, response) = app
        .post_auth("/api/v1/product-categories", &token, &other.to_string())
        .await;
    let other: serde_json::Value = serde_json::from_str(&response).unwrap();

    let other_dto = ProductCategoryDto {
        id: other["id"].as_i64().unwrap() as i32,
        description,
    };
    let unique = ProductCategoryService::check_if_unique(&app.pool, &other_dto)
        .await
        .unwrap();
    assert!(!unique);
}

#[tokio::test]
#[ignore = "requires database"]
async fn product_reads_carry_the_category_inline() {
    let app = common::TestApp::new().await;
    let token = app.authenticate().await;

    let category = json!({ "description": unique_description() });
    let (_, response) = app
        .post_auth("/api/v1/product-categories", &token, &category.to_string())
        .await;
    let category: serde_json::Value = serde_json::from_str(&response).unwrap();

    let tag = uuid::Uuid::new_v4().simple().to_string();
    let product = json!({
        "name": format!("Oats {}", &tag[..12]),
        "description": "Rolled oats",
        "productCategory": category
    });
    let (status, response) = app
        .post_auth("/api/v1/products", &token, &product.to_string())
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let created: serde_json::Value = serde_json::from_str(&response).unwrap();

    let (status, response) = app
        .get_auth(&format!("/api/v1/products/{}", created["id"]), &token)
        .await;
    assert_eq!(status, StatusCode::OK);

    let fetched: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(fetched["productCategory"]["id"], category["id"]);
    assert_eq!(
        fetched["productCategory"]["description"],
        category["description"]
    );
}

#[tokio::test]
#[ignore = "requires database"]
async fn product_name_uniqueness_check_sees_existing_products() {
    let app = common::TestApp::new().await;
    let token = app.authenticate().await;

    let category = json!({ "description": unique_description() });
    let (_, response) = app
        .post_auth("/api/v1/product-categories", &token, &category.to_string())
        .await;
    let category: serde_json::Value = serde_json::from_str(&response).unwrap();

    let tag = uuid::Uuid::new_v4().simple().to_string();
    let name = format!("Oats {}", &tag[..12]);
    let product = json!({
        "name": name,
        "description": "Rolled oats",
        "productCategory": category
    });
    let (status, _) = app
        .post_auth("/api/v1/products", &token, &product.to_string())
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let taken = ProductDto {
        id: 0,
        name,
        description: "Another product".to_string(),
        product_category: None,
    };
    assert!(!ProductService::check_if_unique(&app.pool, &taken).await.unwrap());

    let free = ProductDto {
        name: format!("Oats {}", uuid::Uuid::new_v4().simple()),
        ..taken
    };
    assert!(ProductService::check_if_unique(&app.pool, &free).await.unwrap());
}

#[tokio::test]
#[ignore = "requires database"]
async fn product_without_category_is_rejected() {
    let app = common::TestApp::new().await;
    let token = app.authenticate().await;

    let tag = uuid::Uuid::new_v4().simple().to_string();
    let product = json!({
        "name": format!("Orphan {}", &tag[..12]),
        "description": "No category"
    });
    let (status, _) = app
        .post_auth("/api/v1/products", &token, &product.to_string())
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
