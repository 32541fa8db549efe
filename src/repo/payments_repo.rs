use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use anyhow::{bail, Result};

use crate::domain::payment::PaymentRecord;

/// In-memory keyed store for payment records. Append-only per id: a record is
/// never overwritten or removed for the lifetime of the process.
#[derive(Clone, Default)]
pub struct PaymentsRepo {
    payments: Arc<RwLock<HashMap<String, PaymentRecord>>>,
}

impl PaymentsRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_payment(&self, id: &str) -> Option<PaymentRecord> {
        let payments = self.payments.read().unwrap_or_else(|e| e.into_inner());
        payments.get(id).cloned()
    }

    pub fn add_payment(&self, record: PaymentRecord) -> Result<()> {
        let mut payments = self.payments.write().unwrap_or_else(|e| e.into_inner());
        if payments.contains_key(&record.id) {
            bail!("payment record already exists for payment id {}", record.id);
        }

        payments.insert(record.id.clone(), record);
        Ok(())
    }
}
