//! The fixed budget taxonomy
//!
//! Income sources and the expense category -> subcategory tree are closed
//! enumerations. Declaration order is the canonical display order, and the
//! derived `Ord` follows it, so ordered maps keyed by these types iterate in
//! schema order.

use std::fmt;
use std::str::FromStr;

use crate::error::BudgetError;

/// Generates a closed, display-named enumeration
macro_rules! define_names {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every member, in declaration order
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Get all members in declaration order
            pub fn all() -> &'static [Self] {
                Self::ALL
            }

            /// The display name used in records, exports and the CLI
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.name())
            }
        }
    };
}

define_names! {
    /// A source of monthly income
    IncomeCategory {
        Salary => "Salary",
        SideIncome => "Side Income",
        Investments => "Investments",
        OtherIncome => "Other Income",
    }
}

define_names! {
    /// A top-level expense group
    ExpenseCategory {
        Housing => "Housing",
        Transportation => "Transportation",
        Food => "Food",
        Entertainment => "Entertainment",
        Health => "Health",
        Personal => "Personal",
        Education => "Education",
        Savings => "Savings",
        Debt => "Debt",
        Other => "Other",
    }
}

define_names! {
    /// A line item owned by exactly one expense category
    ExpenseSubcategory {
        RentMortgage => "Rent/Mortgage",
        Utilities => "Utilities",
        Internet => "Internet",
        Maintenance => "Maintenance",
        PublicTransport => "Public Transport",
        CarExpenses => "Car Expenses",
        Fuel => "Fuel",
        CarInsurance => "Car Insurance",
        CarMaintenance => "Car Maintenance",
        Groceries => "Groceries",
        EatingOut => "Eating Out",
        FoodDelivery => "Food Delivery",
        StreamingServices => "Streaming Services",
        MoviesEvents => "Movies/Events",
        Hobbies => "Hobbies",
        Insurance => "Insurance",
        Medication => "Medication",
        GymFitness => "Gym/Fitness",
        Clothing => "Clothing",
        Haircuts => "Haircuts",
        PersonalCare => "Personal Care",
        Courses => "Courses",
        Books => "Books",
        SchoolFees => "School Fees",
        EmergencyFund => "Emergency Fund",
        InvestmentSavings => "Investment Savings",
        Retirement => "Retirement",
        StudentLoans => "Student Loans",
        CreditCard => "Credit Card",
        OtherLoans => "Other Loans",
        Gifts => "Gifts",
        Charity => "Charity",
        Miscellaneous => "Miscellaneous",
    }
}

fn matches_name(candidate: &str, name: &str) -> bool {
    candidate.trim().eq_ignore_ascii_case(name)
}

impl IncomeCategory {
    /// Look up an income category by display name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| matches_name(name, c.name()))
    }

    /// Typical monthly amount for a freshly seeded snapshot
    pub fn seed_amount(&self) -> i64 {
        match self {
            Self::Salary => 45000,
            Self::SideIncome | Self::Investments | Self::OtherIncome => 0,
        }
    }
}

impl FromStr for IncomeCategory {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| BudgetError::category_not_found(s))
    }
}

impl ExpenseCategory {
    /// Look up an expense category by display name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| matches_name(name, c.name()))
    }

    /// Subcategories of this category, in declaration order
    pub fn subcategories(&self) -> &'static [ExpenseSubcategory] {
        use ExpenseSubcategory::*;

        match self {
            Self::Housing => &[RentMortgage, Utilities, Internet, Maintenance],
            Self::Transportation => &[
                PublicTransport,
                CarExpenses,
                Fuel,
                CarInsurance,
                CarMaintenance,
            ],
            Self::Food => &[Groceries, EatingOut, FoodDelivery],
            Self::Entertainment => &[StreamingServices, MoviesEvents, Hobbies],
            Self::Health => &[Insurance, Medication, GymFitness],
            Self::Personal => &[Clothing, Haircuts, PersonalCare],
            Self::Education => &[Courses, Books, SchoolFees],
            Self::Savings => &[EmergencyFund, InvestmentSavings, Retirement],
            Self::Debt => &[StudentLoans, CreditCard, OtherLoans],
            Self::Other => &[Gifts, Charity, Miscellaneous],
        }
    }

    /// Look up one of this category's subcategories by display name
    pub fn subcategory(&self, name: &str) -> Option<ExpenseSubcategory> {
        self.subcategories()
            .iter()
            .copied()
            .find(|s| matches_name(name, s.name()))
    }
}

impl FromStr for ExpenseCategory {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| BudgetError::category_not_found(s))
    }
}

impl ExpenseSubcategory {
    /// The category that owns this subcategory
    pub fn category(&self) -> ExpenseCategory {
        ExpenseCategory::ALL
            .iter()
            .copied()
            .find(|c| c.subcategories().contains(self))
            .unwrap_or(ExpenseCategory::Other)
    }

    /// Scoped lookup: "Insurance" under Health, "Car Insurance" under Transportation
    pub fn parse_in(category: ExpenseCategory, name: &str) -> Result<Self, BudgetError> {
        category
            .subcategory(name)
            .ok_or_else(|| BudgetError::subcategory_not_found(format!("{}/{}", category, name)))
    }

    /// Typical monthly amount for a freshly seeded snapshot
    pub fn seed_amount(&self) -> i64 {
        match self {
            Self::RentMortgage => 12000,
            Self::Utilities => 1200,
            Self::Internet => 550,
            Self::Maintenance => 500,
            Self::PublicTransport => 800,
            Self::Groceries => 4000,
            Self::EatingOut => 1500,
            Self::FoodDelivery => 800,
            Self::StreamingServices => 400,
            Self::MoviesEvents => 600,
            Self::Hobbies => 800,
            Self::Insurance => 400,
            Self::Medication => 200,
            Self::GymFitness => 500,
            Self::Clothing => 1000,
            Self::Haircuts => 400,
            Self::PersonalCare => 500,
            Self::Books => 300,
            Self::EmergencyFund => 2000,
            Self::InvestmentSavings => 1500,
            Self::Retirement => 1000,
            Self::Gifts => 500,
            Self::Charity => 300,
            Self::Miscellaneous => 1000,
            Self::CarExpenses
            | Self::Fuel
            | Self::CarInsurance
            | Self::CarMaintenance
            | Self::Courses
            | Self::SchoolFees
            | Self::StudentLoans
            | Self::CreditCard
            | Self::OtherLoans => 0,
        }
    }
}
