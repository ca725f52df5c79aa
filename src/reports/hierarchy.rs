//! Two-level expense hierarchy
//!
//! Turns the breakdown into category roots with subcategory children, the
//! shape expected by sunburst and treemap charts. A root's value equals the
//! sum of its children, so consumers can take percent-of-parent and
//! percent-of-root without re-aggregating.

use std::collections::{HashMap, HashSet};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetSnapshot, Money};

use super::breakdown::{breakdown, BreakdownLine};
use super::summary::percent_of;

/// One node of the hierarchy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyNode {
    /// Unique within one hierarchy
    pub id: String,
    /// Empty for roots
    pub parent_id: String,
    pub value: Money,
    pub display_name: String,
    pub is_root: bool,
}

/// Category roots, each followed by its children
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hierarchy {
    nodes: Vec<HierarchyNode>,
}

impl Hierarchy {
    /// Build the hierarchy for a snapshot
    pub fn build(snapshot: &BudgetSnapshot) -> Self {
        Self::from_breakdown(&breakdown(snapshot))
    }

    /// Build the hierarchy from breakdown lines
    pub fn from_breakdown(lines: &[BreakdownLine]) -> Self {
        let nodes = lines
            .iter()
            .map(|line| match &line.parent_label {
                Some(parent) => HierarchyNode {
                    id: line.label.clone(),
                    parent_id: parent.clone(),
                    value: line.amount,
                    display_name: line.display_name().to_string(),
                    is_root: false,
                },
                None => HierarchyNode {
                    id: line.label.clone(),
                    parent_id: String::new(),
                    value: line.amount,
                    display_name: line.display_name().to_string(),
                    is_root: true,
                },
            })
            .collect();

        Self { nodes }
    }

    pub fn nodes(&self) -> &[HierarchyNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.id.as_str()).collect()
    }

    pub fn display_names(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.display_name.as_str()).collect()
    }

    pub fn parent_ids(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.parent_id.as_str()).collect()
    }

    pub fn values(&self) -> Vec<Money> {
        self.nodes.iter().map(|n| n.value).collect()
    }

    pub fn roots(&self) -> impl Iterator<Item = &HierarchyNode> {
        self.nodes.iter().filter(|n| n.is_root)
    }

    pub fn children<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a HierarchyNode> + 'a {
        self.nodes.iter().filter(move |n| n.parent_id == id)
    }

    fn get(&self, id: &str) -> Option<&HierarchyNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Sum of all root values
    pub fn total(&self) -> Money {
        self.roots().map(|n| n.value).sum()
    }

    /// A node's share of its parent; roots are measured against the total
    pub fn percent_of_parent(&self, node: &HierarchyNode) -> f64 {
        let whole = if node.is_root {
            self.total()
        } else {
            self.get(&node.parent_id).map(|p| p.value).unwrap_or_default()
        };
        percent_of(node.value.as_f64(), whole.as_f64())
    }

    /// A node's share of its root; a non-empty root is 100% of itself
    pub fn percent_of_root(&self, node: &HierarchyNode) -> f64 {
        let root = if node.is_root {
            node.value
        } else {
            self.get(&node.parent_id).map(|p| p.value).unwrap_or_default()
        };
        percent_of(node.value.as_f64(), root.as_f64())
    }

    /// Check the structural invariants
    ///
    /// Ids are unique, display names are non-empty, every child points at an
    /// existing root, and every root with children equals their sum.
    pub fn verify(&self) -> BudgetResult<()> {
        let mut seen = HashSet::new();
        for node in &self.nodes {
            if !seen.insert(node.id.as_str()) {
                return Err(BudgetError::Validation(format!(
                    "Duplicate hierarchy id '{}'",
                    node.id
                )));
            }
            if node.display_name.trim().is_empty() {
                return Err(BudgetError::Validation(format!(
                    "Hierarchy node '{}' has an empty display name",
                    node.id
                )));
            }
            if node.is_root != node.parent_id.is_empty() {
                return Err(BudgetError::Validation(format!(
                    "Hierarchy node '{}' has an inconsistent parent",
                    node.id
                )));
            }
        }

        let mut child_sums: HashMap<&str, Money> = HashMap::new();
        for child in self.nodes.iter().filter(|n| !n.is_root) {
            match self.get(&child.parent_id) {
                Some(parent) if parent.is_root => {
                    *child_sums.entry(parent.id.as_str()).or_default() += child.value;
                }
                _ => {
                    return Err(BudgetError::Validation(format!(
                        "Hierarchy node '{}' has no root '{}'",
                        child.id, child.parent_id
                    )))
                }
            }
        }

        for root in self.roots() {
            if let Some(sum) = child_sums.get(root.id.as_str()) {
                if *sum != root.value {
                    return Err(BudgetError::Validation(format!(
                        "Root '{}' is {} but its children sum to {}",
                        root.id, root.value, sum
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, ExpenseSubcategory};

    #[test]
    fn test_seeded_hierarchy_is_consistent() {
        let hierarchy = Hierarchy::build(&BudgetSnapshot::seeded());

        hierarchy.verify().unwrap();
        assert_eq!(hierarchy.roots().count(), ExpenseCategory::all().len());
        assert_eq!(hierarchy.len(), ExpenseCategory::all().len() + 24);
    }

    #[test]
    fn test_parallel_sequences() {
        let mut snapshot = BudgetSnapshot::zeroed();
        snapshot
            .set_expense(ExpenseSubcategory::Groceries, Money::from_units(3000))
            .unwrap();
        let hierarchy = Hierarchy::build(&snapshot);

        let food = hierarchy.ids().iter().position(|id| *id == "Food").unwrap();
        assert_eq!(hierarchy.ids()[food + 1], "Food - Groceries");
        assert_eq!(hierarchy.display_names()[food + 1], "Groceries");
        assert_eq!(hierarchy.parent_ids()[food + 1], "Food");
        assert_eq!(hierarchy.parent_ids()[food], "");
        assert_eq!(hierarchy.values()[food], Money::from_units(3000));
    }

    #[test]
    fn test_conservation_per_root() {
        let hierarchy = Hierarchy::build(&BudgetSnapshot::seeded());

        for root in hierarchy.roots() {
            let children: Vec<_> = hierarchy.children(&root.id).collect();
            if !children.is_empty() {
                let sum: Money = children.iter().map(|c| c.value).sum();
                assert_eq!(sum, root.value, "root {}", root.id);
            }
        }
    }

    #[test]
    fn test_percentages() {
        let mut snapshot = BudgetSnapshot::zeroed();
        snapshot
            .set_expense(ExpenseSubcategory::RentMortgage, Money::from_units(750))
            .unwrap();
        snapshot
            .set_expense(ExpenseSubcategory::Utilities, Money::from_units(250))
            .unwrap();
        snapshot
            .set_expense(ExpenseSubcategory::Groceries, Money::from_units(1000))
            .unwrap();
        let hierarchy = Hierarchy::build(&snapshot);

        let rent = hierarchy
            .nodes()
            .iter()
            .find(|n| n.id == "Housing - Rent/Mortgage")
            .unwrap();
        let housing = hierarchy.nodes().iter().find(|n| n.id == "Housing").unwrap();
        let debt = hierarchy.nodes().iter().find(|n| n.id == "Debt").unwrap();

        assert_eq!(hierarchy.percent_of_parent(rent), 75.0);
        assert_eq!(hierarchy.percent_of_root(rent), 75.0);
        assert_eq!(hierarchy.percent_of_parent(housing), 50.0);
        assert_eq!(hierarchy.percent_of_root(housing), 100.0);
        assert_eq!(hierarchy.percent_of_root(debt), 0.0);
    }

    #[test]
    fn test_verify_detects_broken_conservation() {
        let mut lines = breakdown(&BudgetSnapshot::seeded());
        lines[0].amount = Money::from_units(1);

        let err = Hierarchy::from_breakdown(&lines).verify().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_verify_detects_duplicates_and_orphans() {
        let lines = breakdown(&BudgetSnapshot::seeded());

        let mut duplicated = lines.clone();
        duplicated.push(lines[0].clone());
        assert!(Hierarchy::from_breakdown(&duplicated).verify().is_err());

        // A child whose root was dropped
        let orphaned: Vec<_> = lines.iter().skip(1).cloned().collect();
        assert!(Hierarchy::from_breakdown(&orphaned).verify().is_err());
    }

    #[test]
    fn test_empty_snapshot_has_zero_roots_only() {
        let hierarchy = Hierarchy::build(&BudgetSnapshot::zeroed());
        hierarchy.verify().unwrap();
        assert!(hierarchy.roots().all(|r| r.value.is_zero()));
        assert_eq!(hierarchy.total(), Money::zero());
    }
}
