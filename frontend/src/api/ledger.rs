//! Accounts, categories, tags and transactions.

use chrono::NaiveDate;
use finanzas_core::endpoints::{self, FlowKind, TransactionFilter};
use finanzas_core::models::{
    Account, Category, Id, NewAccount, NewCategory, NewTag, NewTransaction, Tag, Transaction,
};
use finanzas_core::ApiError;

use super::ApiClient;

impl ApiClient {
    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get(endpoints::CATEGORIES).await
    }

    pub async fn create_category(&self, body: &NewCategory) -> Result<Category, ApiError> {
        self.post(endpoints::CATEGORIES, body).await
    }

    pub async fn update_category(&self, id: Id, body: &NewCategory) -> Result<Category, ApiError> {
        self.put(&endpoints::category(id), body).await
    }

    pub async fn delete_category(&self, id: Id) -> Result<(), ApiError> {
        self.delete(&endpoints::category(id)).await
    }

    pub async fn accounts(&self, user_id: Option<Id>) -> Result<Vec<Account>, ApiError> {
        self.get_with_query(endpoints::ACCOUNTS, &endpoints::accounts_query(user_id))
            .await
    }

    pub async fn create_account(&self, body: &NewAccount) -> Result<Account, ApiError> {
        self.post(endpoints::ACCOUNTS, body).await
    }

    pub async fn update_account(&self, id: Id, body: &NewAccount) -> Result<Account, ApiError> {
        self.put(&endpoints::account(id), body).await
    }

    pub async fn remove_account(&self, id: Id) -> Result<(), ApiError> {
        self.delete(&endpoints::account(id)).await
    }

    pub async fn tags(&self) -> Result<Vec<Tag>, ApiError> {
        self.get(endpoints::TAGS).await
    }

    pub async fn tags_for_account(&self, account_id: Id) -> Result<Vec<Tag>, ApiError> {
        self.get(&endpoints::account_tags(account_id)).await
    }

    pub async fn create_tag(&self, body: &NewTag) -> Result<Tag, ApiError> {
        self.post(endpoints::TAGS, body).await
    }

    pub async fn update_tag(&self, id: Id, body: &NewTag) -> Result<Tag, ApiError> {
        self.put(&endpoints::tag(id), body).await
    }

    pub async fn delete_tag(&self, id: Id) -> Result<(), ApiError> {
        self.delete(&endpoints::tag(id)).await
    }

    pub async fn transactions(
        &self,
        filter: &TransactionFilter,
    ) -> Result<Vec<Transaction>, ApiError> {
        self.get_with_query(endpoints::TRANSACTIONS, &filter.query_pairs())
            .await
    }

    pub async fn transactions_on(&self, date: NaiveDate) -> Result<Vec<Transaction>, ApiError> {
        self.get(&endpoints::transactions_on(date)).await
    }

    pub async fn transactions_of_kind_on(
        &self,
        kind: FlowKind,
        date: NaiveDate,
    ) -> Result<Vec<Transaction>, ApiError> {
        self.get(&endpoints::transactions_of_kind_on(kind, date)).await
    }

    pub async fn create_transaction(&self, body: &NewTransaction) -> Result<Transaction, ApiError> {
        self.post(endpoints::TRANSACTIONS, body).await
    }

    pub async fn update_transaction(
        &self,
        id: Id,
        body: &NewTransaction,
    ) -> Result<Transaction, ApiError> {
        self.put(&endpoints::transaction(id), body).await
    }

    pub async fn delete_transaction(&self, id: Id) -> Result<(), ApiError> {
        self.delete(&endpoints::transaction(id)).await
    }
}
