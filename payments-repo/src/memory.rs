//! In-memory repository adapter.
//!
//! Backed by a `DashMap` keyed by transaction ID. The map's per-key entry
//! lock makes the uniqueness check and the insert a single atomic step.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use payments_types::{NewPayment, Payment, PaymentId, PaymentStore, StoreError};

/// In-memory payment store.
pub struct MemoryRepo {
    payments: DashMap<String, Payment>,
    next_id: AtomicI64,
}

impl MemoryRepo {
    /// Creates an empty store; ids start at 1.
    pub fn new() -> Self {
        Self {
            payments: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored payments.
    pub fn len(&self) -> usize {
        self.payments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payments.is_empty()
    }
}

impl Default for MemoryRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentStore for MemoryRepo {
    async fn insert(&self, payment: NewPayment) -> Result<Payment, StoreError> {
        match self.payments.entry(payment.transaction_id().to_string()) {
            Entry::Occupied(_) => Err(StoreError::ConstraintViolation(format!(
                "transaction ID {} already exists",
                payment.transaction_id()
            ))),
            Entry::Vacant(slot) => {
                let id = PaymentId::from_i64(self.next_id.fetch_add(1, Ordering::SeqCst));
                let stored = Payment::from_new(id, payment);
                slot.insert(stored.clone());
                Ok(stored)
            }
        }
    }

    async fn find_by_transaction_id(
        &self,
        transaction_id: &str,
    ) -> Result<Option<Payment>, StoreError> {
        Ok(self
            .payments
            .get(transaction_id)
            .map(|entry| entry.value().clone()))
    }

    async fn delete(&self, payment: &Payment) -> Result<(), StoreError> {
        self.payments
            .remove_if(payment.transaction_id(), |_, stored| {
                stored.id() == payment.id()
            })
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }
}
