//! In-memory repository tests.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use payments_types::{NewPayment, PaymentStore, StoreError};
    use rust_decimal_macros::dec;

    use crate::MemoryRepo;

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let repo = MemoryRepo::new();

        let first = repo
            .insert(NewPayment::new("TXN1", dec!(10.00), "USD"))
            .await
            .unwrap();
        let second = repo
            .insert(NewPayment::new("TXN2", dec!(20.00), "EUR"))
            .await
            .unwrap();

        assert_eq!(first.id().as_i64(), 1);
        assert_eq!(second.id().as_i64(), 2);
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn test_find_returns_stored_record() {
        let repo = MemoryRepo::new();
        let new = NewPayment::new("TXN12345", dec!(200.00), "USD");

        let stored = repo.insert(new.clone()).await.unwrap();
        let found = repo.find_by_transaction_id("TXN12345").await.unwrap();

        assert_eq!(found, Some(stored.clone()));
        assert_eq!(stored.to_new_payment(), new);
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let repo = MemoryRepo::new();

        let found = repo.find_by_transaction_id("TXN99999").await.unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_transaction_id_rejected() {
        let repo = MemoryRepo::new();
        let original = repo
            .insert(NewPayment::new("TXN1", dec!(10.00), "USD"))
            .await
            .unwrap();

        let result = repo
            .insert(NewPayment::new("TXN1", dec!(99.99), "EUR"))
            .await;

        assert!(matches!(result, Err(StoreError::ConstraintViolation(_))));
        let found = repo.find_by_transaction_id("TXN1").await.unwrap();
        assert_eq!(found, Some(original));
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let repo = MemoryRepo::new();
        let stored = repo
            .insert(NewPayment::new("TXN1", dec!(10.00), "USD"))
            .await
            .unwrap();

        repo.delete(&stored).await.unwrap();

        assert!(repo.find_by_transaction_id("TXN1").await.unwrap().is_none());
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn test_delete_twice_reports_not_found() {
        let repo = MemoryRepo::new();
        let stored = repo
            .insert(NewPayment::new("TXN1", dec!(10.00), "USD"))
            .await
            .unwrap();

        repo.delete(&stored).await.unwrap();
        let second = repo.delete(&stored).await;

        assert!(matches!(second, Err(StoreError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_stale_record_keeps_replacement() {
        let repo = MemoryRepo::new();
        let stale = repo
            .insert(NewPayment::new("TXN1", dec!(10.00), "USD"))
            .await
            .unwrap();
        repo.delete(&stale).await.unwrap();
        let replacement = repo
            .insert(NewPayment::new("TXN1", dec!(15.00), "USD"))
            .await
            .unwrap();

        let result = repo.delete(&stale).await;

        assert!(matches!(result, Err(StoreError::NotFound)));
        let found = repo.find_by_transaction_id("TXN1").await.unwrap();
        assert_eq!(found, Some(replacement));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_duplicate_inserts_only_one_wins() {
        let repo = Arc::new(MemoryRepo::new());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.insert(NewPayment::new("TXN-RACE", rust_decimal::Decimal::from(i), "USD"))
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
        assert_eq!(repo.len(), 1);
    }
}
