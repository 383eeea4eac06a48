/// Customer service: check-or-create and search
use log::info;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::modules::customers::domain::entities::Customer;
use crate::modules::customers::domain::repository::CustomerStore;
use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerSubmission {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub email: String,
}

/// What check-or-create did with the submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckOrCreateOutcome {
    Created,
    Updated,
    Unchanged,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerQuery {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

pub struct CustomerService {
    store: Arc<dyn CustomerStore>,
}

impl CustomerService {
    pub fn new(store: Arc<dyn CustomerStore>) -> Self {
        Self { store }
    }

    /// Look up by email (case-insensitive); update differing fields in
    /// place, or create a fresh customer when no match exists.
    pub async fn check_or_create(
        &self,
        submission: &CustomerSubmission,
    ) -> AppResult<(Customer, CheckOrCreateOutcome)> {
        Validator::validate_email(&submission.email)?;

        let mut customers = self.store.get_customers().await?;

        if let Some(existing) = customers
            .iter_mut()
            .find(|c| c.email_matches(&submission.email))
        {
            let mut updated = false;
            if !submission.name.is_empty() && existing.name != submission.name {
                existing.name = submission.name.clone();
                updated = true;
            }
            if !submission.phone.is_empty() && existing.phone != submission.phone {
                existing.phone = submission.phone.clone();
                updated = true;
            }
            if !submission.address.is_empty() && existing.address != submission.address {
                existing.address = submission.address.clone();
                updated = true;
            }

            let customer = existing.clone();
            if updated {
                self.store.save_customers(customers).await?;
                info!("customer {} updated on resubmission", customer.id);
                return Ok((customer, CheckOrCreateOutcome::Updated));
            }
            return Ok((customer, CheckOrCreateOutcome::Unchanged));
        }

        let customer = Customer::new(
            submission.name.clone(),
            submission.phone.clone(),
            submission.address.clone(),
            submission.email.clone(),
        );
        customers.push(customer.clone());
        self.store.save_customers(customers).await?;

        info!("customer {} created", customer.id);
        Ok((customer, CheckOrCreateOutcome::Created))
    }

    /// Conjunctive filter: substring match on email/name/address
    /// (case-insensitive), exact match on phone. No params returns all.
    pub async fn search(&self, query: &CustomerQuery) -> AppResult<Vec<Customer>> {
        let mut results = self.store.get_customers().await?;

        if let Some(email) = normalized(&query.email) {
            results.retain(|c| c.email.to_lowercase().contains(&email));
        }
        if let Some(phone) = query.phone.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
            results.retain(|c| c.phone == phone);
        }
        if let Some(name) = normalized(&query.name) {
            results.retain(|c| c.name.to_lowercase().contains(&name));
        }
        if let Some(address) = normalized(&query.address) {
            results.retain(|c| c.address.to_lowercase().contains(&address));
        }

        Ok(results)
    }
}

fn normalized(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
}
