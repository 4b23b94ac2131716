use log::debug;
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::HashMap;
use std::sync::Arc;

use crate::categories::categories_traits::CategoryRepositoryTrait;
use crate::constants::PERCENTAGE_DECIMAL_PRECISION;
use crate::dashboard::dashboard_model::{BudgetProgress, DashboardSummary};
use crate::dashboard::dashboard_traits::DashboardServiceTrait;
use crate::errors::Result;
use crate::transactions::transactions_model::Transaction;
use crate::transactions::transactions_traits::TransactionRepositoryTrait;

/// Service for computing per-month dashboard summaries
pub struct DashboardService {
    transaction_repo: Arc<dyn TransactionRepositoryTrait>,
    category_repo: Arc<dyn CategoryRepositoryTrait>,
}

impl DashboardService {
    pub fn new(
        transaction_repo: Arc<dyn TransactionRepositoryTrait>,
        category_repo: Arc<dyn CategoryRepositoryTrait>,
    ) -> Self {
        DashboardService {
            transaction_repo,
            category_repo,
        }
    }

    /// Sum expense amounts per referenced category. Uncategorized expenses
    /// count toward the expense total but never toward any budget line.
    fn spent_by_category(transactions: &[Transaction]) -> HashMap<String, Decimal> {
        let mut spent: HashMap<String, Decimal> = HashMap::new();
        for tx in transactions.iter().filter(|tx| tx.is_expense()) {
            if let Some(category_id) = &tx.category_id {
                *spent.entry(category_id.clone()).or_insert(Decimal::ZERO) +=
                    tx.amount_decimal();
            }
        }
        spent
    }

    fn percentage_spent(spent: Decimal, goal: Decimal) -> Decimal {
        (spent * Decimal::ONE_HUNDRED / goal).round_dp_with_strategy(
            PERCENTAGE_DECIMAL_PRECISION,
            RoundingStrategy::MidpointAwayFromZero,
        )
    }
}

impl DashboardServiceTrait for DashboardService {
    fn generate_monthly_summary(
        &self,
        user_id: &str,
        year: i32,
        month: u32,
    ) -> Result<DashboardSummary> {
        debug!(
            "Generating monthly summary for user {} ({}-{:02})",
            user_id, year, month
        );

        let transactions = self
            .transaction_repo
            .find_by_user_and_period(user_id, year, month)?;

        let mut total_income = Decimal::ZERO;
        let mut total_expense = Decimal::ZERO;
        for tx in &transactions {
            if tx.is_income() {
                total_income += tx.amount_decimal();
            } else if tx.is_expense() {
                total_expense += tx.amount_decimal();
            }
        }

        let spent = Self::spent_by_category(&transactions);

        // Store order drives the budget list order
        let budgets = self
            .category_repo
            .find_by_user(user_id)?
            .into_iter()
            .filter(|category| category.has_budget_goal())
            .map(|category| {
                let goal = category.monthly_goal_decimal().unwrap_or(Decimal::ZERO);
                let total_spent = spent.get(&category.id).copied().unwrap_or(Decimal::ZERO);
                BudgetProgress {
                    category_name: category.name,
                    category_color: category.color,
                    monthly_goal: goal,
                    total_spent,
                    percentage_spent: Self::percentage_spent(total_spent, goal),
                }
            })
            .collect();

        Ok(DashboardSummary {
            total_income,
            total_expense,
            final_balance: total_income - total_expense,
            budgets,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use rust_decimal_macros::dec;

    use crate::categories::categories_model::{Category, CategoryUpdate, NewCategory};
    use crate::transactions::transactions_model::{NewTransaction, TransactionUpdate};

    struct StubTransactionRepository {
        transactions: Vec<Transaction>,
    }

    #[async_trait]
    impl TransactionRepositoryTrait for StubTransactionRepository {
        fn find_by_user_and_period(
            &self,
            user_id: &str,
            _year: i32,
            _month: u32,
        ) -> Result<Vec<Transaction>> {
            Ok(self
                .transactions
                .iter()
                .filter(|tx| tx.user_id == user_id)
                .cloned()
                .collect())
        }

        fn find_by_category(&self, _category_id: &str) -> Result<Vec<Transaction>> {
            unimplemented!()
        }

        fn find_by_id_and_user(
            &self,
            _transaction_id: &str,
            _user_id: &str,
        ) -> Result<Option<Transaction>> {
            unimplemented!()
        }

        async fn create(&self, _new_transaction: NewTransaction) -> Result<Transaction> {
            unimplemented!()
        }

        async fn update(
            &self,
            _transaction_id: &str,
            _user_id: &str,
            _update: TransactionUpdate,
        ) -> Result<Transaction> {
            unimplemented!()
        }

        async fn delete(&self, _transaction_id: &str, _user_id: &str) -> Result<usize> {
            unimplemented!()
        }
    }

    struct StubCategoryRepository {
        categories: Vec<Category>,
    }

    #[async_trait]
    impl CategoryRepositoryTrait for StubCategoryRepository {
        fn find_by_user(&self, user_id: &str) -> Result<Vec<Category>> {
            Ok(self
                .categories
                .iter()
                .filter(|c| c.user_id == user_id)
                .cloned()
                .collect())
        }

        fn find_by_id_and_user(
            &self,
            _category_id: &str,
            _user_id: &str,
        ) -> Result<Option<Category>> {
            unimplemented!()
        }

        async fn create(&self, _new_category: NewCategory) -> Result<Category> {
            unimplemented!()
        }

        async fn update(
            &self,
            _category_id: &str,
            _user_id: &str,
            _update: CategoryUpdate,
        ) -> Result<Category> {
            unimplemented!()
        }

        async fn delete_with_disassociation(
            &self,
            _category_id: &str,
            _user_id: &str,
        ) -> Result<usize> {
            unimplemented!()
        }
    }

    fn transaction(
        user_id: &str,
        amount: &str,
        transaction_type: &str,
        category_id: Option<&str>,
    ) -> Transaction {
        Transaction {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            description: "test".to_string(),
            amount: amount.to_string(),
            transaction_date: "2025-07-15".to_string(),
            transaction_type: transaction_type.to_string(),
            category_id: category_id.map(String::from),
            created_at: "2025-07-15T00:00:00+00:00".to_string(),
            updated_at: "2025-07-15T00:00:00+00:00".to_string(),
        }
    }

    fn category(
        id: &str,
        user_id: &str,
        name: &str,
        monthly_goal: Option<&str>,
    ) -> Category {
        Category {
            id: id.to_string(),
            user_id: user_id.to_string(),
            name: name.to_string(),
            color: Some("#336699".to_string()),
            icon: None,
            monthly_goal: monthly_goal.map(String::from),
            is_active: true,
            created_at: "2025-07-01T00:00:00+00:00".to_string(),
            updated_at: "2025-07-01T00:00:00+00:00".to_string(),
        }
    }

    fn service(
        transactions: Vec<Transaction>,
        categories: Vec<Category>,
    ) -> DashboardService {
        DashboardService::new(
            Arc::new(StubTransactionRepository { transactions }),
            Arc::new(StubCategoryRepository { categories }),
        )
    }

    #[test]
    fn empty_month_yields_all_zero_summary() {
        let service = service(vec![], vec![]);

        let summary = service.generate_monthly_summary("user-1", 2025, 7).unwrap();

        assert_eq!(summary.total_income, Decimal::ZERO);
        assert_eq!(summary.total_expense, Decimal::ZERO);
        assert_eq!(summary.final_balance, Decimal::ZERO);
        assert!(summary.budgets.is_empty());
    }

    #[test]
    fn totals_and_budget_progress_for_a_mixed_month() {
        let transactions = vec![
            transaction("user-1", "5000", "INCOME", None),
            transaction("user-1", "600", "EXPENSE", Some("cat-food")),
            transaction("user-1", "100", "EXPENSE", Some("cat-leisure")),
        ];
        let categories = vec![
            category("cat-food", "user-1", "Food", Some("800")),
            category("cat-leisure", "user-1", "Leisure", None),
        ];
        let service = service(transactions, categories);

        let summary = service.generate_monthly_summary("user-1", 2025, 7).unwrap();

        assert_eq!(summary.total_income, dec!(5000));
        assert_eq!(summary.total_expense, dec!(700));
        assert_eq!(summary.final_balance, dec!(4300));
        assert_eq!(summary.budgets.len(), 1);

        let food = &summary.budgets[0];
        assert_eq!(food.category_name, "Food");
        assert_eq!(food.monthly_goal, dec!(800));
        assert_eq!(food.total_spent, dec!(600));
        assert_eq!(food.percentage_spent, dec!(75.00));
    }

    #[test]
    fn percentage_rounds_half_away_from_zero() {
        // 100.125 / 300 * 100 = 33.375 -> 33.38
        let transactions = vec![transaction("user-1", "100.125", "EXPENSE", Some("cat-1"))];
        let categories = vec![category("cat-1", "user-1", "Food", Some("300"))];
        let service = service(transactions, categories);

        let summary = service.generate_monthly_summary("user-1", 2025, 7).unwrap();

        assert_eq!(summary.budgets[0].percentage_spent, dec!(33.38));
    }

    #[test]
    fn categories_without_positive_goal_are_excluded() {
        let transactions = vec![
            transaction("user-1", "50", "EXPENSE", Some("cat-none")),
            transaction("user-1", "50", "EXPENSE", Some("cat-zero")),
            transaction("user-1", "50", "EXPENSE", Some("cat-negative")),
        ];
        let categories = vec![
            category("cat-none", "user-1", "No goal", None),
            category("cat-zero", "user-1", "Zero goal", Some("0")),
            category("cat-negative", "user-1", "Negative goal", Some("-10")),
        ];
        let service = service(transactions, categories);

        let summary = service.generate_monthly_summary("user-1", 2025, 7).unwrap();

        assert_eq!(summary.total_expense, dec!(150));
        assert!(summary.budgets.is_empty());
    }

    #[test]
    fn goal_without_spending_reports_zero_progress() {
        let categories = vec![category("cat-1", "user-1", "Savings", Some("250"))];
        let service = service(vec![], categories);

        let summary = service.generate_monthly_summary("user-1", 2025, 7).unwrap();

        assert_eq!(summary.budgets.len(), 1);
        assert_eq!(summary.budgets[0].total_spent, Decimal::ZERO);
        assert_eq!(summary.budgets[0].percentage_spent, dec!(0.00));
    }

    #[test]
    fn balance_goes_negative_when_expenses_exceed_income() {
        let transactions = vec![
            transaction("user-1", "100", "INCOME", None),
            transaction("user-1", "350", "EXPENSE", None),
        ];
        let service = service(transactions, vec![]);

        let summary = service.generate_monthly_summary("user-1", 2025, 7).unwrap();

        assert_eq!(summary.final_balance, dec!(-250));
    }

    #[test]
    fn uncategorized_expenses_count_only_toward_the_total() {
        let transactions = vec![
            transaction("user-1", "200", "EXPENSE", None),
            transaction("user-1", "100", "EXPENSE", Some("cat-1")),
        ];
        let categories = vec![category("cat-1", "user-1", "Food", Some("400"))];
        let service = service(transactions, categories);

        let summary = service.generate_monthly_summary("user-1", 2025, 7).unwrap();

        assert_eq!(summary.total_expense, dec!(300));
        assert_eq!(summary.budgets[0].total_spent, dec!(100));
        assert_eq!(summary.budgets[0].percentage_spent, dec!(25.00));
    }

    #[test]
    fn budgets_follow_category_store_order() {
        let categories = vec![
            category("cat-b", "user-1", "Bills", Some("100")),
            category("cat-a", "user-1", "Food", Some("200")),
            category("cat-c", "user-1", "Travel", Some("300")),
        ];
        let service = service(vec![], categories);

        let summary = service.generate_monthly_summary("user-1", 2025, 7).unwrap();

        let names: Vec<&str> = summary
            .budgets
            .iter()
            .map(|b| b.category_name.as_str())
            .collect();
        assert_eq!(names, vec!["Bills", "Food", "Travel"]);
    }

    #[test]
    fn overspending_exceeds_one_hundred_percent() {
        let transactions = vec![transaction("user-1", "500", "EXPENSE", Some("cat-1"))];
        let categories = vec![category("cat-1", "user-1", "Food", Some("200"))];
        let service = service(transactions, categories);

        let summary = service.generate_monthly_summary("user-1", 2025, 7).unwrap();

        assert_eq!(summary.budgets[0].percentage_spent, dec!(250.00));
    }

    #[test]
    fn summary_serializes_with_camel_case_keys() {
        let transactions = vec![transaction("user-1", "600", "EXPENSE", Some("cat-1"))];
        let categories = vec![category("cat-1", "user-1", "Food", Some("800"))];
        let service = service(transactions, categories);

        let summary = service.generate_monthly_summary("user-1", 2025, 7).unwrap();
        let json = serde_json::to_value(&summary).unwrap();

        assert!(json.get("totalIncome").is_some());
        assert!(json.get("finalBalance").is_some());
        assert!(json["budgets"][0].get("percentageSpent").is_some());
    }

    #[test]
    fn repeated_generation_yields_identical_summaries() {
        let transactions = vec![
            transaction("user-1", "1000", "INCOME", None),
            transaction("user-1", "600", "EXPENSE", Some("cat-1")),
        ];
        let categories = vec![category("cat-1", "user-1", "Food", Some("800"))];
        let service = service(transactions, categories);

        let first = service.generate_monthly_summary("user-1", 2025, 7).unwrap();
        let second = service.generate_monthly_summary("user-1", 2025, 7).unwrap();

        assert_eq!(first, second);
    }
}
