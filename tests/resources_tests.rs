//! Integration tests for the resource façades.
//!
//! Each test mounts the remote action on a mock server and calls the façade
//! method through [`SellerCenter`].

use chrono::{FixedOffset, TimeZone};
use lazada_seller_center::{
    ApiKey, BaseUrl, Credential, OutputFormat, ParameterSet, RequestError, SellerCenter, UserId,
};
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn seller_center(server: &MockServer) -> SellerCenter {
    SellerCenter::new(server.uri(), "seller@example.com", "test-api-key").unwrap()
}

fn xml_seller_center(server: &MockServer) -> SellerCenter {
    let credential = Credential::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .user_id(UserId::new("seller@example.com").unwrap())
        .api_key(ApiKey::new("test-api-key").unwrap())
        .output_format(OutputFormat::Xml)
        .build()
        .unwrap();
    SellerCenter::from_credential(credential)
}

fn json_body(body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.to_string(), "application/json")
}

fn xml(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "text/xml")
}

async fn mount_action(server: &MockServer, action: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(query_param("Action", action))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

// === Order ===

#[tokio::test]
async fn test_get_orders_returns_order_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("Action", "GetOrders"))
        .and(query_param("UserID", "seller@example.com"))
        .and(query_param("Version", "1.0"))
        .and(query_param("Format", "JSON"))
        .and(query_param("Status", "pending"))
        .respond_with(json_body(json!({
            "SuccessResponse": {
                "Head": {"RequestAction": "GetOrders", "TotalCount": 2},
                "Body": {"Orders": [{"OrderId": 101}, {"OrderId": 102}]}
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let orders = seller_center(&server)
        .order()
        .get_orders(ParameterSet::new().with("Status", "pending"))
        .await
        .unwrap();

    assert_eq!(orders, Some(json!([{"OrderId": 101}, {"OrderId": 102}])));
}

#[tokio::test]
async fn test_get_orders_sends_date_filters_as_iso_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("Action", "GetOrders"))
        .and(query_param("CreatedAfter", "2024-03-01T09:30:00+08:00"))
        .respond_with(json_body(json!({
            "SuccessResponse": {"Body": {"Orders": [{"OrderId": 1}]}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created_after = FixedOffset::east_opt(8 * 3600)
        .unwrap()
        .with_ymd_and_hms(2024, 3, 1, 9, 30, 0)
        .unwrap();

    let orders = seller_center(&server)
        .order()
        .get_orders(ParameterSet::new().with("CreatedAfter", created_after))
        .await
        .unwrap();

    assert!(orders.is_some());
}

#[tokio::test]
async fn test_get_order_returns_first_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("Action", "GetOrder"))
        .and(query_param("OrderId", "101"))
        .respond_with(json_body(json!({
            "SuccessResponse": {"Body": {"Orders": [{"OrderId": 101, "Statuses": ["pending"]}]}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let order = seller_center(&server)
        .order()
        .get_order(ParameterSet::new().with("OrderId", 101u64))
        .await
        .unwrap();

    assert_eq!(order, Some(json!({"OrderId": 101, "Statuses": ["pending"]})));
}

#[tokio::test]
async fn test_get_order_with_no_orders_returns_none() {
    let server = MockServer::start().await;
    mount_action(
        &server,
        "GetOrder",
        json_body(json!({"SuccessResponse": {"Body": {"Orders": []}}})),
    )
    .await;

    let order = seller_center(&server)
        .order()
        .get_order(ParameterSet::new().with("OrderId", 999u64))
        .await
        .unwrap();

    assert_eq!(order, None);
}

#[tokio::test]
async fn test_get_order_with_xml_output_returns_single_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("Action", "GetOrder"))
        .and(query_param("Format", "XML"))
        .respond_with(xml(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <SuccessResponse><Head><RequestAction>GetOrder</RequestAction></Head>\
             <Body><Orders><Order><OrderId>101</OrderId><Price>99.00</Price></Order></Orders></Body>\
             </SuccessResponse>",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let order = xml_seller_center(&server)
        .order()
        .get_order(ParameterSet::new().with("OrderId", 101u64))
        .await
        .unwrap();

    assert_eq!(order, Some(json!({"OrderId": "101", "Price": "99.00"})));
}

#[tokio::test]
async fn test_get_order_with_xml_output_returns_first_of_several() {
    let server = MockServer::start().await;
    mount_action(
        &server,
        "GetOrder",
        xml("<SuccessResponse><Body><Orders>\
             <Order><OrderId>101</OrderId></Order>\
             <Order><OrderId>102</OrderId></Order>\
             </Orders></Body></SuccessResponse>"),
    )
    .await;

    let order = xml_seller_center(&server)
        .order()
        .get_order(ParameterSet::new().with("OrderId", 101u64))
        .await
        .unwrap();

    assert_eq!(order, Some(json!({"OrderId": "101"})));
}

#[tokio::test]
async fn test_get_order_items_missing_body_returns_none() {
    let server = MockServer::start().await;
    mount_action(
        &server,
        "GetOrderItems",
        json_body(json!({"SuccessResponse": {"Head": {"RequestAction": "GetOrderItems"}}})),
    )
    .await;

    let items = seller_center(&server)
        .order()
        .get_order_items(ParameterSet::new().with("OrderId", 1u64))
        .await
        .unwrap();

    assert!(items.is_none());
}

#[tokio::test]
async fn test_set_status_to_canceled_reports_acknowledgement() {
    let server = MockServer::start().await;
    mount_action(
        &server,
        "SetStatusToCanceled",
        json_body(json!({
            "SuccessResponse": {"Head": {"RequestAction": "SetStatusToCanceled", "Timestamp": "2024-03-01T09:30:00+0800"}, "Body": ""}
        })),
    )
    .await;

    let canceled = seller_center(&server)
        .order()
        .set_status_to_canceled(
            ParameterSet::new()
                .with("OrderItemId", 5u64)
                .with("ReasonId", 15u32),
        )
        .await
        .unwrap();

    assert!(canceled);
}

#[tokio::test]
async fn test_set_status_to_canceled_without_timestamp_is_false() {
    let server = MockServer::start().await;
    mount_action(
        &server,
        "SetStatusToCanceled",
        json_body(json!({"SuccessResponse": {"Head": {}}})),
    )
    .await;

    let canceled = seller_center(&server)
        .order()
        .set_status_to_canceled(ParameterSet::new().with("OrderItemId", 5u64))
        .await
        .unwrap();

    assert!(!canceled);
}

#[tokio::test]
async fn test_set_status_to_ready_to_ship_sends_item_list_as_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("Action", "SetStatusToReadyToShip"))
        .and(query_param("OrderItemIds", "[\"11\",\"12\"]"))
        .respond_with(json_body(json!({
            "SuccessResponse": {"Body": {"OrderItems": [{"OrderItemId": 11}, {"OrderItemId": 12}]}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let items = seller_center(&server)
        .order()
        .set_status_to_ready_to_ship(
            ParameterSet::new()
                .with("OrderItemIds", vec!["11", "12"])
                .with("DeliveryType", "dropship"),
        )
        .await
        .unwrap();

    assert_eq!(items.unwrap().as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_get_failure_reasons_reads_reasons() {
    let server = MockServer::start().await;
    mount_action(
        &server,
        "GetFailureReasons",
        json_body(json!({
            "SuccessResponse": {"Body": {"Reasons": [{"Type": "canceled", "Name": "Out of stock", "ReasonId": 15}]}}
        })),
    )
    .await;

    let reasons = seller_center(&server)
        .order()
        .get_failure_reasons(ParameterSet::new())
        .await
        .unwrap();

    assert_eq!(reasons.unwrap()[0]["ReasonId"], 15);
}

#[tokio::test]
async fn test_order_error_envelope_propagates() {
    let server = MockServer::start().await;
    mount_action(
        &server,
        "GetDocument",
        json_body(json!({
            "ErrorResponse": {"Head": {"ErrorCode": "20", "ErrorMessage": "E020: Invalid Order Item IDs"}}
        })),
    )
    .await;

    let error = seller_center(&server)
        .order()
        .get_document(ParameterSet::new().with("DocumentType", "invoice"))
        .await
        .unwrap_err();

    assert!(matches!(error, RequestError::ApiError { .. }));
    assert_eq!(error.to_string(), "E020: Invalid Order Item IDs");
}

// === Product ===

#[tokio::test]
async fn test_get_products_sends_sku_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("Action", "GetProducts"))
        .and(query_param("SkuSellerList", "[\"sku-1\",\"sku-2\"]"))
        .respond_with(json_body(json!({
            "SuccessResponse": {"Body": {"Products": [{"SellerSku": "sku-1"}, {"SellerSku": "sku-2"}]}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let products = seller_center(&server)
        .product()
        .get_products(ParameterSet::new().with("SkuSellerList", vec!["sku-1", "sku-2"]))
        .await
        .unwrap();

    assert_eq!(products.unwrap()[1]["SellerSku"], "sku-2");
}

#[tokio::test]
async fn test_get_category_tree_returns_body() {
    let server = MockServer::start().await;
    mount_action(
        &server,
        "GetCategoryTree",
        json_body(json!({
            "SuccessResponse": {"Body": [{"categoryId": 1, "name": "Home", "children": []}]}
        })),
    )
    .await;

    let tree = seller_center(&server)
        .product()
        .get_category_tree()
        .await
        .unwrap();

    assert_eq!(tree.unwrap()[0]["name"], "Home");
}

#[tokio::test]
async fn test_get_brands_empty_list_returns_none() {
    let server = MockServer::start().await;
    mount_action(
        &server,
        "GetBrands",
        json_body(json!({"SuccessResponse": {"Body": {"Brands": []}}})),
    )
    .await;

    let brands = seller_center(&server)
        .product()
        .get_brands(ParameterSet::new().with("Offset", 0u32).with("Limit", 100u32))
        .await
        .unwrap();

    assert!(brands.is_none());
}

#[tokio::test]
async fn test_create_product_posts_pretty_xml_and_returns_head() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(query_param("Action", "CreateProduct"))
        .and(query_param("Format", "XML"))
        .and(body_string_contains("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"))
        .and(body_string_contains("\n    <PrimaryCategory>6614</PrimaryCategory>"))
        .respond_with(xml(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <SuccessResponse><Head><RequestId>0bb606d9</RequestId><RequestAction>CreateProduct</RequestAction>\
             <ResponseType/><Timestamp>2024-03-01T09:30:00+0800</Timestamp></Head><Body/></SuccessResponse>",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let head = seller_center(&server)
        .product()
        .create_product("<Request><Product><PrimaryCategory>6614</PrimaryCategory></Product></Request>")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(head["RequestAction"], "CreateProduct");
    assert_eq!(head["RequestId"], "0bb606d9");
}

#[tokio::test]
async fn test_malformed_product_xml_is_rejected_before_sending() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(xml("<SuccessResponse/>"))
        .expect(0)
        .mount(&server)
        .await;

    let error = seller_center(&server)
        .product()
        .update_product("<Request><Product></Request>")
        .await
        .unwrap_err();

    assert!(matches!(error, RequestError::InvalidXmlBody(_)));
}

#[tokio::test]
async fn test_migrate_image_sends_url_template() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(query_param("Action", "MigrateImage"))
        .and(body_string_contains("<Url>http://via.placeholder.com/350x150?a=1&amp;b=2</Url>"))
        .respond_with(xml(
            "<SuccessResponse><Head/><Body><Image><Url>https://sg-live.slatic.net/p/1.jpg</Url>\
             <Code>8bc1e0c7</Code></Image></Body></SuccessResponse>",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let image = seller_center(&server)
        .product()
        .migrate_image("http://via.placeholder.com/350x150?a=1&b=2")
        .await
        .unwrap();

    assert_eq!(
        image,
        Some(json!({"Url": "https://sg-live.slatic.net/p/1.jpg", "Code": "8bc1e0c7"}))
    );
}

#[tokio::test]
async fn test_update_price_quantity_field_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(query_param("Action", "UpdatePriceQuantity"))
        .respond_with(xml(
            "<ErrorResponse><Head><ErrorCode>201</ErrorCode><ErrorMessage>E201: Invalid Request</ErrorMessage></Head>\
             <Body><Errors><ErrorDetail><SellerSku>sku-1</SellerSku><Message>Negative price</Message></ErrorDetail></Errors></Body>\
             </ErrorResponse>",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let error = seller_center(&server)
        .product()
        .update_price_quantity(
            "<Request><Product><Skus><Sku><SellerSku>sku-1</SellerSku><Price>-1</Price></Sku></Skus></Product></Request>",
        )
        .await
        .unwrap_err();

    assert_eq!(error.api_message(), Some("E201: Invalid Request"));
    assert_eq!(
        error.field_errors(),
        Some(&json!({"ErrorDetail": {"SellerSku": "sku-1", "Message": "Negative price"}}))
    );
}

#[tokio::test]
async fn test_remove_product_command_rejected_with_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(query_param("Action", "RemoveProduct"))
        .respond_with(ResponseTemplate::new(503).set_body_raw("maintenance", "text/plain"))
        .expect(1)
        .mount(&server)
        .await;

    let error = seller_center(&server)
        .product()
        .remove_product("<Request><Product><Skus><Sku><SellerSku>sku-1</SellerSku></Sku></Skus></Product></Request>")
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        RequestError::Undelivered(ref raw) if raw.status == Some(503) && raw.body == "maintenance"
    ));
}

// === Quality control and shipment providers ===

#[tokio::test]
async fn test_get_qc_status_forwards_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("Action", "GetQcStatus"))
        .and(query_param("SkuSellerList", "[\"sku-1\"]"))
        .respond_with(json_body(json!({
            "SuccessResponse": {"Body": {"Status": [{"SellerSKU": "sku-1", "Status": "approved"}]}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let status = seller_center(&server)
        .quality_control()
        .get_qc_status(ParameterSet::new().with("SkuSellerList", vec!["sku-1"]))
        .await
        .unwrap();

    assert_eq!(status.unwrap()[0]["Status"], "approved");
}

#[tokio::test]
async fn test_get_shipment_providers() {
    let server = MockServer::start().await;
    mount_action(
        &server,
        "GetShipmentProviders",
        json_body(json!({
            "SuccessResponse": {"Body": {"ShipmentProviders": [{"Name": "LGS-SG1", "Default": 1}]}}
        })),
    )
    .await;

    let providers = seller_center(&server)
        .shipment_provider()
        .get_shipment_providers()
        .await
        .unwrap();

    assert_eq!(providers.unwrap()[0]["Name"], "LGS-SG1");
}

#[tokio::test]
async fn test_facade_keeps_credential_after_setter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("Action", "GetBrands"))
        .and(query_param("UserID", "seller@example.com"))
        .respond_with(json_body(json!({"SuccessResponse": {"Body": {"Brands": [{"Name": "A"}]}}})))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = seller_center(&server);
    let product = client.product();
    client.set_user_id("someone-else@example.com").unwrap();

    let brands = product.get_brands(ParameterSet::new()).await.unwrap();
    assert!(brands.is_some());
}
