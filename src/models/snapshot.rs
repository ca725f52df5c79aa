//! Budget snapshot model
//!
//! A snapshot is one user's complete income and expense record. It is always
//! fully populated: every income category and every expense subcategory of the
//! schema has an amount, zero by default. Edits replace values for existing
//! keys and never add or remove keys.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::money::Money;
use super::schema::{ExpenseCategory, ExpenseSubcategory, IncomeCategory};
use crate::error::{BudgetError, BudgetResult};

/// A complete income + expenses record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "SnapshotRecord", try_from = "SnapshotRecord")]
pub struct BudgetSnapshot {
    income: BTreeMap<IncomeCategory, Money>,
    expenses: BTreeMap<ExpenseSubcategory, Money>,
}

impl BudgetSnapshot {
    /// A snapshot with every amount set to zero
    pub fn zeroed() -> Self {
        Self::from_fn(|_| Money::zero(), |_| Money::zero())
    }

    /// A snapshot seeded with typical household amounts
    pub fn seeded() -> Self {
        Self::from_fn(
            |c| Money::from_units(c.seed_amount()),
            |s| Money::from_units(s.seed_amount()),
        )
    }

    fn from_fn(
        income: impl Fn(IncomeCategory) -> Money,
        expense: impl Fn(ExpenseSubcategory) -> Money,
    ) -> Self {
        Self {
            income: IncomeCategory::all().iter().map(|&c| (c, income(c))).collect(),
            expenses: ExpenseSubcategory::all()
                .iter()
                .map(|&s| (s, expense(s)))
                .collect(),
        }
    }

    /// Amount for one income category
    pub fn income(&self, category: IncomeCategory) -> Money {
        self.income.get(&category).copied().unwrap_or_default()
    }

    /// Amount for one expense subcategory
    pub fn expense(&self, subcategory: ExpenseSubcategory) -> Money {
        self.expenses.get(&subcategory).copied().unwrap_or_default()
    }

    /// All income entries in schema order
    pub fn income_entries(&self) -> impl Iterator<Item = (IncomeCategory, Money)> + '_ {
        self.income.iter().map(|(c, m)| (*c, *m))
    }

    /// The subcategory amounts of one category in schema order
    pub fn category_entries(
        &self,
        category: ExpenseCategory,
    ) -> impl Iterator<Item = (ExpenseSubcategory, Money)> + '_ {
        category
            .subcategories()
            .iter()
            .map(move |&s| (s, self.expense(s)))
    }

    /// Sum of one category's subcategory amounts
    pub fn category_total(&self, category: ExpenseCategory) -> Money {
        self.category_entries(category).map(|(_, m)| m).sum()
    }

    /// Set one income amount
    pub fn set_income(&mut self, category: IncomeCategory, amount: Money) -> BudgetResult<()> {
        ensure_in_range(category.name(), amount)?;
        self.income.insert(category, amount);
        Ok(())
    }

    /// Replace a category's whole subcategory value set
    ///
    /// Subcategories of `category` not present in `values` become zero.
    pub fn replace_category<I>(&mut self, category: ExpenseCategory, values: I) -> BudgetResult<()>
    where
        I: IntoIterator<Item = (ExpenseSubcategory, Money)>,
    {
        let mut replacement: BTreeMap<ExpenseSubcategory, Money> = category
            .subcategories()
            .iter()
            .map(|&s| (s, Money::zero()))
            .collect();

        for (sub, amount) in values {
            if sub.category() != category {
                return Err(BudgetError::SchemaViolation(format!(
                    "'{}' is not a subcategory of '{}'",
                    sub, category
                )));
            }
            ensure_in_range(&format!("{}/{}", category, sub), amount)?;
            replacement.insert(sub, amount);
        }

        self.expenses.extend(replacement);
        Ok(())
    }

    /// Set one subcategory amount, keeping the rest of its category as is
    pub fn set_expense(&mut self, subcategory: ExpenseSubcategory, amount: Money) -> BudgetResult<()> {
        let category = subcategory.category();
        let values: Vec<_> = self
            .category_entries(category)
            .map(|(s, m)| if s == subcategory { (s, amount) } else { (s, m) })
            .collect();
        self.replace_category(category, values)
    }

    /// Amounts that differ between two snapshots, as (key, before, after)
    pub fn changes_from(&self, before: &BudgetSnapshot) -> Vec<(String, Money, Money)> {
        let income = self.income_entries().filter_map(|(c, after)| {
            let prior = before.income(c);
            (prior != after).then(|| (format!("Income/{}", c), prior, after))
        });

        let expenses = ExpenseSubcategory::all().iter().filter_map(|&s| {
            let (prior, after) = (before.expense(s), self.expense(s));
            (prior != after).then(|| (format!("{}/{}", s.category(), s), prior, after))
        });

        income.chain(expenses).collect()
    }
}

impl Default for BudgetSnapshot {
    fn default() -> Self {
        Self::zeroed()
    }
}

fn ensure_in_range(key: &str, amount: Money) -> BudgetResult<()> {
    if amount.is_negative() {
        return Err(BudgetError::SchemaViolation(format!(
            "Amount for '{}' cannot be negative: {}",
            key,
            amount.units()
        )));
    }
    if amount > Money::MAX_ENTRY {
        return Err(BudgetError::SchemaViolation(format!(
            "Amount for '{}' exceeds the maximum of {}: {}",
            key,
            Money::MAX_ENTRY,
            amount.units()
        )));
    }
    Ok(())
}

/// On-disk shape of a snapshot: two name-keyed maps and nothing else
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SnapshotRecord {
    pub income: BTreeMap<String, i64>,
    pub expenses: BTreeMap<String, BTreeMap<String, i64>>,
}

impl From<BudgetSnapshot> for SnapshotRecord {
    fn from(snapshot: BudgetSnapshot) -> Self {
        SnapshotRecord::from(&snapshot)
    }
}

impl From<&BudgetSnapshot> for SnapshotRecord {
    fn from(snapshot: &BudgetSnapshot) -> Self {
        let income = snapshot
            .income_entries()
            .map(|(c, m)| (c.name().to_string(), m.units()))
            .collect();

        let expenses = ExpenseCategory::all()
            .iter()
            .map(|&c| {
                let subs = snapshot
                    .category_entries(c)
                    .map(|(s, m)| (s.name().to_string(), m.units()))
                    .collect();
                (c.name().to_string(), subs)
            })
            .collect();

        Self { income, expenses }
    }
}

impl TryFrom<SnapshotRecord> for BudgetSnapshot {
    type Error = BudgetError;

    /// Unknown keys and out-of-range amounts are schema violations; missing keys
    /// mean the record itself is corrupt.
    fn try_from(record: SnapshotRecord) -> Result<Self, Self::Error> {
        if let Some(key) = record
            .income
            .keys()
            .find(|k| !IncomeCategory::all().iter().any(|c| c.name() == k.as_str()))
        {
            return Err(BudgetError::SchemaViolation(format!(
                "Unknown income category '{}'",
                key
            )));
        }

        for (cat_name, subs) in &record.expenses {
            let category = ExpenseCategory::all()
                .iter()
                .find(|c| c.name() == cat_name.as_str())
                .ok_or_else(|| {
                    BudgetError::SchemaViolation(format!("Unknown expense category '{}'", cat_name))
                })?;

            if let Some(key) = subs.keys().find(|k| {
                !category
                    .subcategories()
                    .iter()
                    .any(|s| s.name() == k.as_str())
            }) {
                return Err(BudgetError::SchemaViolation(format!(
                    "Unknown subcategory '{}' in '{}'",
                    key, cat_name
                )));
            }
        }

        let mut snapshot = BudgetSnapshot::zeroed();

        for &category in IncomeCategory::all() {
            let units = record.income.get(category.name()).ok_or_else(|| {
                BudgetError::DataCorruption(format!("Missing income category '{}'", category))
            })?;
            snapshot.set_income(category, Money::from_units(*units))?;
        }

        for &category in ExpenseCategory::all() {
            let subs = record.expenses.get(category.name()).ok_or_else(|| {
                BudgetError::DataCorruption(format!("Missing expense category '{}'", category))
            })?;

            let values = category
                .subcategories()
                .iter()
                .map(|&s| {
                    subs.get(s.name())
                        .map(|units| (s, Money::from_units(*units)))
                        .ok_or_else(|| {
                            BudgetError::DataCorruption(format!(
                                "Missing subcategory '{}' in '{}'",
                                s, category
                            ))
                        })
                })
                .collect::<BudgetResult<Vec<_>>>()?;

            snapshot.replace_category(category, values)?;
        }

        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed_is_fully_populated() {
        let snapshot = BudgetSnapshot::zeroed();
        let record = SnapshotRecord::from(&snapshot);

        assert_eq!(record.income.len(), IncomeCategory::all().len());
        assert_eq!(record.expenses.len(), ExpenseCategory::all().len());
        for category in ExpenseCategory::all() {
            assert_eq!(
                record.expenses[category.name()].len(),
                category.subcategories().len()
            );
        }
        assert!(record.income.values().all(|v| *v == 0));
    }

    #[test]
    fn test_seeded_defaults() {
        let snapshot = BudgetSnapshot::seeded();
        assert_eq!(snapshot.income(IncomeCategory::Salary).units(), 45000);
        assert_eq!(snapshot.expense(ExpenseSubcategory::RentMortgage).units(), 12000);
        assert_eq!(
            snapshot.category_total(ExpenseCategory::Housing).units(),
            12000 + 1200 + 550 + 500
        );
    }

    #[test]
    fn test_negative_amounts_rejected() {
        let mut snapshot = BudgetSnapshot::zeroed();
        let err = snapshot
            .set_income(IncomeCategory::Salary, Money::from_units(-1))
            .unwrap_err();
        assert!(err.is_schema_violation());

        let err = snapshot
            .set_expense(ExpenseSubcategory::Fuel, Money::from_units(-10))
            .unwrap_err();
        assert!(err.is_schema_violation());
        assert_eq!(snapshot, BudgetSnapshot::zeroed());
    }

    #[test]
    fn test_oversized_amounts_rejected() {
        let mut snapshot = BudgetSnapshot::zeroed();
        snapshot
            .set_income(IncomeCategory::Salary, Money::MAX_ENTRY)
            .unwrap();

        let err = snapshot
            .set_income(IncomeCategory::SideIncome, Money::from_units(i64::MAX))
            .unwrap_err();
        assert!(err.is_schema_violation());

        let err = snapshot
            .set_expense(
                ExpenseSubcategory::Groceries,
                Money::from_units(Money::MAX_ENTRY.units() + 1),
            )
            .unwrap_err();
        assert!(err.is_schema_violation());
        assert!(snapshot.expense(ExpenseSubcategory::Groceries).is_zero());
    }

    #[test]
    fn test_oversized_record_amount_is_schema_violation() {
        let mut record = SnapshotRecord::from(&BudgetSnapshot::zeroed());
        record.income.insert("Salary".into(), i64::MAX);
        record.income.insert("Side Income".into(), 1);

        let err = BudgetSnapshot::try_from(record).unwrap_err();
        assert!(err.is_schema_violation());
    }

    #[test]
    fn test_largest_entries_total_without_overflow() {
        let mut snapshot = BudgetSnapshot::zeroed();
        for &category in IncomeCategory::all() {
            snapshot.set_income(category, Money::MAX_ENTRY).unwrap();
        }
        for &sub in ExpenseSubcategory::all() {
            snapshot.set_expense(sub, Money::MAX_ENTRY).unwrap();
        }

        let expected = ExpenseCategory::Housing.subcategories().len() as i64
            * Money::MAX_ENTRY.units();
        assert_eq!(
            snapshot.category_total(ExpenseCategory::Housing).units(),
            expected
        );
    }

    #[test]
    fn test_replace_category_zeroes_unlisted() {
        let mut snapshot = BudgetSnapshot::seeded();
        snapshot
            .replace_category(
                ExpenseCategory::Food,
                [(ExpenseSubcategory::Groceries, Money::from_units(3000))],
            )
            .unwrap();

        assert_eq!(snapshot.expense(ExpenseSubcategory::Groceries).units(), 3000);
        assert!(snapshot.expense(ExpenseSubcategory::EatingOut).is_zero());
        assert!(snapshot.expense(ExpenseSubcategory::FoodDelivery).is_zero());
        // Other categories untouched
        assert_eq!(snapshot.expense(ExpenseSubcategory::RentMortgage).units(), 12000);
    }

    #[test]
    fn test_replace_category_rejects_foreign_subcategory() {
        let mut snapshot = BudgetSnapshot::zeroed();
        let err = snapshot
            .replace_category(
                ExpenseCategory::Food,
                [(ExpenseSubcategory::Fuel, Money::from_units(100))],
            )
            .unwrap_err();
        assert!(err.is_schema_violation());
    }

    #[test]
    fn test_set_expense_keeps_siblings() {
        let mut snapshot = BudgetSnapshot::seeded();
        snapshot
            .set_expense(ExpenseSubcategory::Utilities, Money::from_units(900))
            .unwrap();

        assert_eq!(snapshot.expense(ExpenseSubcategory::Utilities).units(), 900);
        assert_eq!(snapshot.expense(ExpenseSubcategory::RentMortgage).units(), 12000);
    }

    #[test]
    fn test_record_round_trip_through_json() {
        let snapshot = BudgetSnapshot::seeded();
        let json = serde_json::to_string(&snapshot).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["income"]["Salary"], 45000);
        assert_eq!(value["expenses"]["Housing"]["Rent/Mortgage"], 12000);

        let decoded: BudgetSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, snapshot);
    }

    #[test]
    fn test_unknown_key_is_schema_violation() {
        let mut record = SnapshotRecord::from(&BudgetSnapshot::zeroed());
        record.income.insert("Lottery".into(), 100);

        let err = BudgetSnapshot::try_from(record).unwrap_err();
        assert!(err.is_schema_violation());

        let mut record = SnapshotRecord::from(&BudgetSnapshot::zeroed());
        record
            .expenses
            .get_mut("Food")
            .unwrap()
            .insert("Caviar".into(), 100);
        assert!(BudgetSnapshot::try_from(record).unwrap_err().is_schema_violation());
    }

    #[test]
    fn test_missing_key_is_data_corruption() {
        let mut record = SnapshotRecord::from(&BudgetSnapshot::zeroed());
        record.expenses.get_mut("Housing").unwrap().remove("Internet");

        let err = BudgetSnapshot::try_from(record).unwrap_err();
        assert!(err.is_data_corruption());
    }

    #[test]
    fn test_negative_record_amount_is_schema_violation() {
        let mut record = SnapshotRecord::from(&BudgetSnapshot::zeroed());
        record.income.insert("Salary".into(), -5);

        let err = BudgetSnapshot::try_from(record).unwrap_err();
        assert!(err.is_schema_violation());
    }

    #[test]
    fn test_changes_from() {
        let before = BudgetSnapshot::zeroed();
        let mut after = before.clone();
        after
            .set_income(IncomeCategory::Salary, Money::from_units(100))
            .unwrap();
        after
            .set_expense(ExpenseSubcategory::RentMortgage, Money::from_units(50))
            .unwrap();

        let changes = after.changes_from(&before);
        assert_eq!(
            changes,
            vec![
                (
                    "Income/Salary".to_string(),
                    Money::zero(),
                    Money::from_units(100)
                ),
                (
                    "Housing/Rent/Mortgage".to_string(),
                    Money::zero(),
                    Money::from_units(50)
                ),
            ]
        );
        assert!(after.changes_from(&after).is_empty());
    }
}
