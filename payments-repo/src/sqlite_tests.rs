//! SQLite repository integration tests.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{DateTime, Utc};
    use payments_types::{NewPayment, PaymentStore, StoreError};
    use rust_decimal_macros::dec;

    use crate::{Backend, SqliteRepo, build_repo};

    async fn setup_repo() -> SqliteRepo {
        SqliteRepo::new("sqlite::memory:").await.unwrap()
    }

    fn sample_payment() -> NewPayment {
        let ts: DateTime<Utc> = "2024-06-01T09:15:30.250000Z".parse().unwrap();
        NewPayment::new("TXN12345", dec!(200.00), "USD").with_timestamp(ts)
    }

    #[tokio::test]
    async fn test_insert_assigns_id() {
        let repo = setup_repo().await;

        let stored = repo.insert(sample_payment()).await.unwrap();

        assert!(stored.id().as_i64() > 0);
        assert_eq!(stored.transaction_id(), "TXN12345");
    }

    #[tokio::test]
    async fn test_round_trip_preserves_fields() {
        let repo = setup_repo().await;
        let new = sample_payment();

        let stored = repo.insert(new.clone()).await.unwrap();
        let fetched = repo
            .find_by_transaction_id("TXN12345")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(fetched, stored);
        assert_eq!(fetched.to_new_payment(), new);
        assert_eq!(fetched.amount().to_string(), "200.00");
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let repo = setup_repo().await;

        let result = repo.find_by_transaction_id("TXN99999").await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_transaction_id_is_constraint_violation() {
        let repo = setup_repo().await;
        let first = repo.insert(sample_payment()).await.unwrap();

        let result = repo
            .insert(NewPayment::new("TXN12345", dec!(1.00), "EUR"))
            .await;

        assert!(matches!(result, Err(StoreError::ConstraintViolation(_))));

        let fetched = repo
            .find_by_transaction_id("TXN12345")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched, first);
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let repo = setup_repo().await;

        let a = repo
            .insert(NewPayment::new("TXN1", dec!(1), "USD"))
            .await
            .unwrap();
        let b = repo
            .insert(NewPayment::new("TXN2", dec!(2), "USD"))
            .await
            .unwrap();

        assert_ne!(a.id(), b.id());
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let repo = setup_repo().await;
        let stored = repo.insert(sample_payment()).await.unwrap();

        repo.delete(&stored).await.unwrap();

        let result = repo.find_by_transaction_id("TXN12345").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_twice_reports_not_found() {
        let repo = setup_repo().await;
        let stored = repo.insert(sample_payment()).await.unwrap();

        repo.delete(&stored).await.unwrap();
        let second = repo.delete(&stored).await;

        assert!(matches!(second, Err(StoreError::NotFound)));
    }

    #[tokio::test]
    async fn test_create_schema_is_idempotent() {
        let repo = setup_repo().await;
        repo.insert(sample_payment()).await.unwrap();

        repo.create_schema().await.unwrap();

        assert!(
            repo.find_by_transaction_id("TXN12345")
                .await
                .unwrap()
                .is_some()
        );
    }

    #[tokio::test]
    async fn test_build_repo_with_file_database() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("nested").join("payments.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());

        let repo = build_repo(&url).await.unwrap();
        assert_eq!(repo.backend(), Backend::Sqlite);

        let stored = repo.insert(sample_payment()).await.unwrap();
        let fetched = repo
            .find_by_transaction_id("TXN12345")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(fetched, stored);
        assert!(db_path.exists());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_duplicate_inserts_only_one_wins() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("race.db").display());
        let repo = Arc::new(SqliteRepo::new(&url).await.unwrap());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.insert(NewPayment::new(
                        "TXN-RACE",
                        rust_decimal::Decimal::from(i),
                        "USD",
                    ))
                    .await
                })
            })
            .collect();

        let mut successes = 0;
        let mut conflicts = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => successes += 1,
                Err(StoreError::ConstraintViolation(_)) => conflicts += 1,
                Err(e) => panic!("unexpected error: {e}"),
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(conflicts, 15);
        assert!(
            repo.find_by_transaction_id("TXN-RACE")
                .await
                .unwrap()
                .is_some()
        );
    }
}
