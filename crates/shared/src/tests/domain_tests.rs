use super::*;

#[test]
fn deserializes_remote_product_shape() {
    let raw = r#"{
        "id": 1,
        "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
        "price": 109.95,
        "description": "Your perfect pack for everyday use",
        "category": "men's clothing",
        "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
        "rating": { "rate": 3.9, "count": 120 }
    }"#;

    let product: Product = serde_json::from_str(raw).expect("product");
    assert_eq!(product.id, ProductId(1));
    assert_eq!(product.price, 109.95);
    assert_eq!(product.category, "men's clothing");
    assert_eq!(product.rating.count, 120);
}

#[test]
fn product_id_serializes_as_plain_integer() {
    assert_eq!(serde_json::to_string(&ProductId(42)).expect("json"), "42");
    assert_eq!(ProductId(42).to_string(), "42");
}

#[test]
fn known_categories_are_lowercase_labels() {
    for label in KNOWN_CATEGORIES {
        assert_eq!(label, label.to_lowercase());
    }
}
