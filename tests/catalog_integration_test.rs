use httpmock::prelude::*;
use menu_client::{CatalogService, MenuError, MenuItemPatch, NewMenuItem, RestCatalog};

fn sample_categories_json() -> serde_json::Value {
    serde_json::json!([
        {
            "id": "mains",
            "name": "Mains",
            "items": [
                {
                    "id": 1,
                    "title": "Mole poblano",
                    "description": "Chicken in mole sauce",
                    "price": 14.0,
                    "image": "data:image/png;base64,AAAA",
                    "rating": 5.0,
                    "reviews": 60
                },
                {
                    "id": 2,
                    "title": "Quesadilla",
                    "description": "With oaxaca cheese",
                    "price": 8.0,
                    "image": "http://x.jpg",
                    "rating": 4.0,
                    "reviews": 10
                }
            ]
        },
        {
            "id": "desserts",
            "name": "Desserts",
            "items": [
                {
                    "id": 3,
                    "title": "Flan",
                    "description": "",
                    "price": 5.0,
                    "image": "http://flan.jpg",
                    "rating": 5.0,
                    "reviews": 5
                }
            ]
        }
    ])
}

#[tokio::test]
async fn test_fetch_and_feature_end_to_end() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/categories");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(sample_categories_json());
    });

    let mut catalog = CatalogService::new(RestCatalog::new(server.base_url()));
    catalog.refresh().await.unwrap();

    api_mock.assert();
    assert_eq!(catalog.categories().len(), 2);

    // Item 3 has an empty description, so only the two mains qualify;
    // the mole scores 1.0 and the quesadilla 0.59.
    let featured = catalog.featured_dishes(2);
    assert_eq!(featured.len(), 2);
    assert_eq!(featured[0].id, 1);
    assert_eq!(featured[1].id, 2);
}

#[tokio::test]
async fn test_featured_by_category_scoped() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/categories");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(sample_categories_json());
    });

    let mut catalog = CatalogService::new(RestCatalog::new(server.base_url()));
    catalog.refresh().await.unwrap();

    // Desserts has only one item and it fails validity, so selection
    // degrades to the unranked fallback within that category.
    let desserts = catalog.featured_by_category("desserts", 3);
    assert_eq!(desserts.len(), 1);
    assert_eq!(desserts[0].id, 3);

    assert!(catalog.featured_by_category("drinks", 3).is_empty());
}

#[tokio::test]
async fn test_create_category_and_item() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/categories");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([]));
    });

    let create_category_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/categories")
            .json_body(serde_json::json!({ "name": "Drinks" }));
        then.status(201)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "id": "drinks", "name": "Drinks", "items": [] }));
    });

    let create_item_mock = server.mock(|when, then| {
        when.method(POST).path("/categories/drinks/items");
        then.status(201)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "id": 7,
                "title": "Horchata",
                "description": "Rice and cinnamon",
                "price": 3.5,
                "image": "http://horchata.jpg",
                "rating": 4.8,
                "reviews": 12
            }));
    });

    let mut catalog = CatalogService::new(RestCatalog::new(server.base_url()));
    catalog.refresh().await.unwrap();

    catalog.add_category("Drinks").await.unwrap();
    create_category_mock.assert();

    let new_item = NewMenuItem {
        title: "Horchata".to_string(),
        description: "Rice and cinnamon".to_string(),
        price: 3.5,
        image: "http://horchata.jpg".to_string(),
        rating: 4.8,
        reviews: 12,
    };
    let created = catalog.add_item("drinks", &new_item).await.unwrap();
    create_item_mock.assert();

    assert_eq!(created.id, 7);
    assert_eq!(catalog.category("drinks").unwrap().items.len(), 1);
}

#[tokio::test]
async fn test_update_item_patches_snapshot() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/categories");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(sample_categories_json());
    });

    let update_mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/categories/mains/items/2")
            .json_body(serde_json::json!({ "price": 9.0 }));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "id": 2,
                "title": "Quesadilla",
                "description": "With oaxaca cheese",
                "price": 9.0,
                "image": "http://x.jpg",
                "rating": 4.0,
                "reviews": 10
            }));
    });

    let mut catalog = CatalogService::new(RestCatalog::new(server.base_url()));
    catalog.refresh().await.unwrap();

    let patch = MenuItemPatch {
        price: Some(9.0),
        ..Default::default()
    };
    let updated = catalog.update_item("mains", 2, &patch).await.unwrap();
    update_mock.assert();

    assert_eq!(updated.price, 9.0);
    let snapshot_item = catalog
        .category("mains")
        .unwrap()
        .items
        .iter()
        .find(|i| i.id == 2)
        .unwrap();
    assert_eq!(snapshot_item.price, 9.0);
}

#[tokio::test]
async fn test_delete_category_removes_from_snapshot() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/categories");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(sample_categories_json());
    });

    let delete_mock = server.mock(|when, then| {
        when.method(DELETE).path("/categories/desserts");
        then.status(204);
    });

    let mut catalog = CatalogService::new(RestCatalog::new(server.base_url()));
    catalog.refresh().await.unwrap();

    catalog.remove_category("desserts").await.unwrap();
    delete_mock.assert();

    assert_eq!(catalog.categories().len(), 1);
    assert!(catalog.category("desserts").is_none());
}

#[tokio::test]
async fn test_http_error_surfaces_and_snapshot_untouched() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/categories");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(sample_categories_json());
    });

    let failing_mock = server.mock(|when, then| {
        when.method(DELETE).path("/categories/mains");
        then.status(500);
    });

    let mut catalog = CatalogService::new(RestCatalog::new(server.base_url()));
    catalog.refresh().await.unwrap();

    let result = catalog.remove_category("mains").await;
    failing_mock.assert();

    assert!(matches!(result, Err(MenuError::ApiError(_))));
    // The failed delete must not have touched the local snapshot.
    assert!(catalog.category("mains").is_some());
}

#[tokio::test]
async fn test_refresh_failure_propagates() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/categories");
        then.status(503);
    });

    let mut catalog = CatalogService::new(RestCatalog::new(server.base_url()));
    let result = catalog.refresh().await;

    api_mock.assert();
    assert!(matches!(result, Err(MenuError::ApiError(_))));
}
