/// Record store trait for the customer collection
use crate::modules::customers::domain::entities::Customer;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerStore: Send + Sync {
    async fn get_customers(&self) -> AppResult<Vec<Customer>>;
    async fn save_customers(&self, customers: Vec<Customer>) -> AppResult<()>;
}
