//! Payroll Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, map_unique_violation};
use crate::db::models::{Payroll, PayrollStatus, PayrollView, SalaryStructure, UserId};
use crate::utils::time::now_millis;

const DUPLICATE_PERIOD: &str = "Payroll already generated for this period";

#[derive(Clone)]
pub struct PayrollRepository {
    base: BaseRepository,
}

impl PayrollRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find the slip for a (user, month, year) period
    pub async fn find_by_period(
        &self,
        user: &UserId,
        month: &str,
        year: i32,
    ) -> RepoResult<Option<Payroll>> {
        let mut result = self
            .base
            .db()
            .query(
                "SELECT * FROM payroll WHERE user = $user AND month = $month AND year = $year LIMIT 1",
            )
            .bind(("user", user.clone()))
            .bind(("month", month.to_string()))
            .bind(("year", year))
            .await?;
        let slips: Vec<Payroll> = result.take(0)?;
        Ok(slips.into_iter().next())
    }

    /// Generate a slip for the period, snapshotting the salary structure
    ///
    /// The snapshot is computed here so later edits to the profile's salary
    /// never change an issued slip. A unique index on (user, month, year)
    /// backstops two simultaneous generations; the loser surfaces as
    /// `Duplicate`.
    pub async fn create(
        &self,
        user: &UserId,
        month: &str,
        year: i32,
        salary: &SalaryStructure,
    ) -> RepoResult<Payroll> {
        if self.find_by_period(user, month, year).await?.is_some() {
            return Err(RepoError::Duplicate(DUPLICATE_PERIOD.to_string()));
        }

        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE payroll SET
                    user = $user,
                    month = $month,
                    year = $year,
                    basicSalary = $basic,
                    allowances = $allowances,
                    deductions = $deductions,
                    netSalary = $net,
                    status = $status,
                    createdAt = $now
                RETURN AFTER"#,
            )
            .bind(("user", user.clone()))
            .bind(("month", month.to_string()))
            .bind(("year", year))
            .bind(("basic", salary.basic))
            .bind(("allowances", salary.total_allowances()))
            .bind(("deductions", salary.deductions))
            .bind(("net", salary.net_salary()))
            .bind(("status", PayrollStatus::Pending))
            .bind(("now", now_millis()))
            .await
            .map_err(|e| map_unique_violation(e, DUPLICATE_PERIOD))?;

        result
            .take::<Option<Payroll>>(0)
            .map_err(|e| map_unique_violation(e, DUPLICATE_PERIOD))?
            .ok_or_else(|| RepoError::Database("Failed to create payroll slip".to_string()))
    }

    /// A user's slips, most recent period first
    pub async fn find_by_user(&self, user: &UserId) -> RepoResult<Vec<Payroll>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM payroll WHERE user = $user ORDER BY year DESC, month DESC")
            .bind(("user", user.clone()))
            .await?;
        let slips: Vec<Payroll> = result.take(0)?;
        Ok(slips)
    }

    /// All slips joined with user email, newest created first
    pub async fn find_all_views(&self) -> RepoResult<Vec<PayrollView>> {
        let mut result = self
            .base
            .db()
            .query("SELECT *, user.email AS email FROM payroll ORDER BY createdAt DESC")
            .await?;
        let slips: Vec<PayrollView> = result.take(0)?;
        Ok(slips)
    }
}
