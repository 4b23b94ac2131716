use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use fintrack_core::auth::{AuthService, AuthServiceTrait, JwtTokenIssuer};
use fintrack_core::categories::{
    CategoryRepository, CategoryRepositoryTrait, CategoryService, CategoryServiceTrait,
};
use fintrack_core::transactions::{
    TransactionRepository, TransactionRepositoryTrait, TransactionService,
    TransactionServiceTrait, TransactionType,
};
use fintrack_core::users::{User, UserRepository};
use fintrack_core::Error;

mod common;

struct Services {
    auth: AuthService,
    categories: CategoryService,
    transactions: TransactionService,
    category_repo: Arc<CategoryRepository>,
    transaction_repo: Arc<TransactionRepository>,
}

fn build_services(db: &common::TestDb) -> Services {
    let user_repo = Arc::new(UserRepository::new(db.pool.clone()));
    let category_repo = Arc::new(CategoryRepository::new(db.pool.clone()));
    let transaction_repo = Arc::new(TransactionRepository::new(db.pool.clone()));
    let token_issuer = Arc::new(JwtTokenIssuer::new(
        b"0123456789abcdef0123456789abcdef",
        "fintrack-api".to_string(),
        Duration::from_secs(3600),
    ));

    Services {
        auth: AuthService::new(user_repo.clone(), token_issuer),
        categories: CategoryService::new(category_repo.clone(), user_repo.clone()),
        transactions: TransactionService::new(
            transaction_repo.clone(),
            category_repo.clone(),
            user_repo,
        ),
        category_repo,
        transaction_repo,
    }
}

async fn register(services: &Services, name: &str, email: &str) -> User {
    services
        .auth
        .register(name.to_string(), email.to_string(), "pass-word-1".to_string())
        .await
        .expect("registration failed")
}

#[tokio::test]
async fn deleting_a_category_detaches_its_transactions() {
    let db = common::setup_db();
    let services = build_services(&db);
    let user = register(&services, "Alice", "alice@example.com").await;

    let food = services
        .categories
        .create_category(&user.id, "Food".to_string(), None, None, Some(dec!(800)))
        .await
        .unwrap();

    let date = NaiveDate::from_ymd_opt(2025, 7, 10).unwrap();
    for amount in [dec!(30), dec!(45.50), dec!(12)] {
        services
            .transactions
            .create_transaction(
                &user.id,
                "groceries".to_string(),
                amount,
                date,
                TransactionType::Expense,
                Some(food.id.clone()),
            )
            .await
            .unwrap();
    }

    services
        .categories
        .delete_category(&food.id, &user.id)
        .await
        .unwrap();

    // The category is gone but every transaction survives, detached
    assert!(services.categories.get_category(&food.id, &user.id).is_err());
    let remaining = services
        .transactions
        .get_transactions_for_period(&user.id, 2025, 7)
        .unwrap();
    assert_eq!(remaining.len(), 3);
    assert!(remaining.iter().all(|tx| tx.category_id.is_none()));
}

#[tokio::test]
async fn deleting_a_missing_category_rolls_back_and_touches_nothing() {
    let db = common::setup_db();
    let services = build_services(&db);
    let user = register(&services, "Alice", "alice@example.com").await;

    let food = services
        .categories
        .create_category(&user.id, "Food".to_string(), None, None, None)
        .await
        .unwrap();
    services
        .transactions
        .create_transaction(
            &user.id,
            "groceries".to_string(),
            dec!(30),
            NaiveDate::from_ymd_opt(2025, 7, 10).unwrap(),
            TransactionType::Expense,
            Some(food.id.clone()),
        )
        .await
        .unwrap();

    assert!(services
        .categories
        .delete_category("no-such-category", &user.id)
        .await
        .is_err());

    let transactions = services.transaction_repo.find_by_category(&food.id).unwrap();
    assert_eq!(transactions.len(), 1);
}

#[tokio::test]
async fn categories_are_scoped_to_their_owner() {
    let db = common::setup_db();
    let services = build_services(&db);
    let alice = register(&services, "Alice", "alice@example.com").await;
    let bob = register(&services, "Bob", "bob@example.com").await;

    let category = services
        .categories
        .create_category(&alice.id, "Food".to_string(), None, None, None)
        .await
        .unwrap();
    services
        .transactions
        .create_transaction(
            &alice.id,
            "groceries".to_string(),
            dec!(30),
            NaiveDate::from_ymd_opt(2025, 7, 10).unwrap(),
            TransactionType::Expense,
            Some(category.id.clone()),
        )
        .await
        .unwrap();

    // Bob can neither read nor delete Alice's category
    assert!(services.categories.get_category(&category.id, &bob.id).is_err());
    assert!(services
        .categories
        .delete_category(&category.id, &bob.id)
        .await
        .is_err());
    assert!(services
        .category_repo
        .find_by_id_and_user(&category.id, &alice.id)
        .unwrap()
        .is_some());

    // The failed delete also rolled back its disassociation pass
    let attached = services.transaction_repo.find_by_category(&category.id).unwrap();
    assert_eq!(attached.len(), 1);
    assert_eq!(attached[0].category_id.as_deref(), Some(category.id.as_str()));
}

#[tokio::test]
async fn duplicate_registration_is_rejected() {
    let db = common::setup_db();
    let services = build_services(&db);
    register(&services, "Alice", "alice@example.com").await;

    let err = services
        .auth
        .register(
            "Impostor".to_string(),
            "alice@example.com".to_string(),
            "other-pass".to_string(),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::User(_)));
}

#[tokio::test]
async fn transaction_with_foreign_category_is_rejected() {
    let db = common::setup_db();
    let services = build_services(&db);
    let alice = register(&services, "Alice", "alice@example.com").await;
    let bob = register(&services, "Bob", "bob@example.com").await;

    let bobs_category = services
        .categories
        .create_category(&bob.id, "Food".to_string(), None, None, None)
        .await
        .unwrap();

    let result = services
        .transactions
        .create_transaction(
            &alice.id,
            "sneaky".to_string(),
            dec!(10),
            NaiveDate::from_ymd_opt(2025, 7, 10).unwrap(),
            TransactionType::Expense,
            Some(bobs_category.id),
        )
        .await;
    assert!(matches!(result, Err(Error::Category(_))));
}
