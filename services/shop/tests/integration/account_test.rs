use tienda_domain::id::CustomerId;
use tienda_shop::error::ShopServiceError;
use tienda_shop::usecase::account::{
    AuthenticateCustomerUseCase, GetCustomerUseCase, ListCustomersUseCase,
    RegisterCustomerInput, RegisterCustomerUseCase, UpdateAddressUseCase, UpdatePasswordInput,
    UpdatePasswordUseCase,
};

use crate::helpers::{InMemoryShop, test_hasher};

fn registration(email: &str, password: &str) -> RegisterCustomerInput {
    RegisterCustomerInput {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: email.into(),
        phone_number: "555-0100".into(),
        address: "12 Analytical St".into(),
        password: password.into(),
    }
}

async fn register(shop: &InMemoryShop, email: &str, password: &str) -> i32 {
    RegisterCustomerUseCase {
        repo: shop.clone(),
        hasher: test_hasher(),
    }
    .execute(registration(email, password))
    .await
    .unwrap()
    .customer_id
}

fn id(n: i32) -> CustomerId {
    CustomerId::new(n).unwrap()
}

// ── RegisterCustomerUseCase ──────────────────────────────────────────────────

#[tokio::test]
async fn should_store_argon2_digest_and_authenticate_with_raw_password() {
    let shop = InMemoryShop::default();
    let customer_id = register(&shop, "a@x.com", "secret").await;

    let stored = shop.customer(customer_id).unwrap();
    assert_ne!(stored.password_hash, "secret");
    assert!(stored.password_hash.starts_with("$argon2id$"));

    let uc = AuthenticateCustomerUseCase {
        repo: shop.clone(),
        hasher: test_hasher(),
    };
    let customer = uc.execute("a@x.com", "secret").await.unwrap();
    assert_eq!(customer.customer_id, customer_id);
    assert_eq!(customer.first_name, "Ada");
}

#[tokio::test]
async fn should_reject_duplicate_email() {
    let shop = InMemoryShop::default();
    register(&shop, "a@x.com", "secret").await;

    let result = RegisterCustomerUseCase {
        repo: shop.clone(),
        hasher: test_hasher(),
    }
    .execute(registration("a@x.com", "other"))
    .await;
    assert!(
        matches!(result, Err(ShopServiceError::EmailAlreadyExists)),
        "expected EmailAlreadyExists, got {result:?}"
    );
}

#[tokio::test]
async fn should_default_optional_fields_to_empty() {
    let shop = InMemoryShop::default();
    let customer = RegisterCustomerUseCase {
        repo: shop.clone(),
        hasher: test_hasher(),
    }
    .execute(RegisterCustomerInput {
        phone_number: String::new(),
        address: String::new(),
        ..registration("b@x.com", "secret")
    })
    .await
    .unwrap();
    assert_eq!(customer.phone_number, "");
    assert_eq!(customer.address, "");
}

// ── AuthenticateCustomerUseCase ──────────────────────────────────────────────

#[tokio::test]
async fn should_fail_identically_for_unknown_email_and_wrong_password() {
    let shop = InMemoryShop::default();
    register(&shop, "a@x.com", "secret").await;
    let uc = AuthenticateCustomerUseCase {
        repo: shop.clone(),
        hasher: test_hasher(),
    };

    let unknown = uc.execute("nobody@x.com", "secret").await.unwrap_err();
    let wrong = uc.execute("a@x.com", "Secret").await.unwrap_err();
    assert_eq!(unknown.kind(), "INVALID_CREDENTIALS");
    assert_eq!(unknown.kind(), wrong.kind());
    assert_eq!(unknown.to_string(), wrong.to_string());
}

// ── List / Get ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_and_fetch_registered_customers() {
    let shop = InMemoryShop::default();
    let first = register(&shop, "a@x.com", "secret").await;
    register(&shop, "b@x.com", "secret").await;

    let all = ListCustomersUseCase { repo: shop.clone() }
        .execute()
        .await
        .unwrap();
    assert_eq!(all.len(), 2);

    let one = GetCustomerUseCase { repo: shop.clone() }
        .execute(id(first))
        .await
        .unwrap();
    assert_eq!(one.email, "a@x.com");

    let missing = GetCustomerUseCase { repo: shop.clone() }
        .execute(id(999))
        .await;
    assert!(matches!(missing, Err(ShopServiceError::CustomerNotFound)));
}

// ── UpdateAddressUseCase ─────────────────────────────────────────────────────

#[tokio::test]
async fn should_update_only_the_address() {
    let shop = InMemoryShop::default();
    let customer_id = register(&shop, "a@x.com", "secret").await;
    let before = shop.customer(customer_id).unwrap();

    UpdateAddressUseCase { repo: shop.clone() }
        .execute(id(customer_id), " 1 New Road ")
        .await
        .unwrap();

    let after = shop.customer(customer_id).unwrap();
    assert_eq!(after.address, "1 New Road");
    assert_eq!(after.email, before.email);
    assert_eq!(after.password_hash, before.password_hash);
    assert!(after.updated_at >= before.updated_at);
}

#[tokio::test]
async fn should_return_not_found_for_address_of_unknown_customer() {
    let shop = InMemoryShop::default();
    let result = UpdateAddressUseCase { repo: shop.clone() }
        .execute(id(42), "1 New Road")
        .await;
    assert!(matches!(result, Err(ShopServiceError::CustomerNotFound)));
}

// ── UpdatePasswordUseCase ────────────────────────────────────────────────────

#[tokio::test]
async fn should_replace_password_and_invalidate_old_one() {
    let shop = InMemoryShop::default();
    let customer_id = register(&shop, "a@x.com", "secret").await;

    UpdatePasswordUseCase {
        repo: shop.clone(),
        hasher: test_hasher(),
    }
    .execute(
        id(customer_id),
        UpdatePasswordInput {
            old_password: "secret".into(),
            new_password: "n3w-secret".into(),
        },
    )
    .await
    .unwrap();

    let auth = AuthenticateCustomerUseCase {
        repo: shop.clone(),
        hasher: test_hasher(),
    };
    assert!(auth.execute("a@x.com", "n3w-secret").await.is_ok());
    assert!(matches!(
        auth.execute("a@x.com", "secret").await,
        Err(ShopServiceError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn should_reject_password_change_with_wrong_old_password() {
    let shop = InMemoryShop::default();
    let customer_id = register(&shop, "a@x.com", "secret").await;
    let before = shop.customer(customer_id).unwrap().password_hash;

    let result = UpdatePasswordUseCase {
        repo: shop.clone(),
        hasher: test_hasher(),
    }
    .execute(
        id(customer_id),
        UpdatePasswordInput {
            old_password: "guess".into(),
            new_password: "n3w-secret".into(),
        },
    )
    .await;

    assert!(matches!(result, Err(ShopServiceError::InvalidCredentials)));
    assert_eq!(shop.customer(customer_id).unwrap().password_hash, before);
}

#[tokio::test]
async fn should_require_both_passwords() {
    let shop = InMemoryShop::default();
    let customer_id = register(&shop, "a@x.com", "secret").await;

    let result = UpdatePasswordUseCase {
        repo: shop.clone(),
        hasher: test_hasher(),
    }
    .execute(
        id(customer_id),
        UpdatePasswordInput {
            old_password: "secret".into(),
            new_password: "  ".into(),
        },
    )
    .await;
    assert!(matches!(result, Err(ShopServiceError::MissingData)));
}
