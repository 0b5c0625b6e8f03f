use schemagen::{to_camel_case, to_pascal_case};

#[test]
fn pascal_case() {
    assert_eq!(to_pascal_case("order_items"), "OrderItems");
    assert_eq!(to_pascal_case("users"), "Users");
    assert_eq!(to_pascal_case("user__id_"), "UserId");
    assert_eq!(to_pascal_case("createdAt"), "CreatedAt");
    assert_eq!(to_pascal_case(""), "");
}

#[test]
fn camel_case() {
    assert_eq!(to_camel_case("order_items"), "orderItems");
    assert_eq!(to_camel_case("Users"), "users");
    assert_eq!(to_camel_case("user_id"), "userId");
    assert_eq!(to_camel_case("_"), "");
}
