use serde::{Deserialize, Serialize};

/// Strip every character outside ASCII 0-9. Entry is integer-only: no
/// decimals, no sign.
pub fn sanitize_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Flat record of monthly figures and balance-sheet items.
///
/// Every value is a digit-only string; an empty string means unset. Month 5
/// is the most recent month.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialRecord {
    pub revenue_month1: String,
    pub revenue_month2: String,
    pub revenue_month3: String,
    pub revenue_month4: String,
    pub revenue_month5: String,

    pub expense_month1: String,
    pub expense_month2: String,
    pub expense_month3: String,
    pub expense_month4: String,
    pub expense_month5: String,

    // Breakdown of the latest month; not checked against expense_month5
    pub raw_materials: String,
    pub salary: String,
    pub operational: String,
    pub utilities: String,
    pub transportation: String,
    pub other_expenses: String,

    pub cash_sales: String,
    pub credit_sales: String,
    pub accounts_receivable: String,
    pub inventory: String,
    pub cash_balance: String,

    pub accounts_payable: String,
    pub bank_loans: String,
    pub initial_capital: String,

    pub employees: String,
    pub business_age_months: String,
}

impl FinancialRecord {
    pub fn get(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::RevenueMonth1 => &self.revenue_month1,
            FieldKey::RevenueMonth2 => &self.revenue_month2,
            FieldKey::RevenueMonth3 => &self.revenue_month3,
            FieldKey::RevenueMonth4 => &self.revenue_month4,
            FieldKey::RevenueMonth5 => &self.revenue_month5,
            FieldKey::ExpenseMonth1 => &self.expense_month1,
            FieldKey::ExpenseMonth2 => &self.expense_month2,
            FieldKey::ExpenseMonth3 => &self.expense_month3,
            FieldKey::ExpenseMonth4 => &self.expense_month4,
            FieldKey::ExpenseMonth5 => &self.expense_month5,
            FieldKey::RawMaterials => &self.raw_materials,
            FieldKey::Salary => &self.salary,
            FieldKey::Operational => &self.operational,
            FieldKey::Utilities => &self.utilities,
            FieldKey::Transportation => &self.transportation,
            FieldKey::OtherExpenses => &self.other_expenses,
            FieldKey::CashSales => &self.cash_sales,
            FieldKey::CreditSales => &self.credit_sales,
            FieldKey::AccountsReceivable => &self.accounts_receivable,
            FieldKey::Inventory => &self.inventory,
            FieldKey::CashBalance => &self.cash_balance,
            FieldKey::AccountsPayable => &self.accounts_payable,
            FieldKey::BankLoans => &self.bank_loans,
            FieldKey::InitialCapital => &self.initial_capital,
            FieldKey::Employees => &self.employees,
            FieldKey::BusinessAgeMonths => &self.business_age_months,
        }
    }

    fn slot_mut(&mut self, key: FieldKey) -> &mut String {
        match key {
            FieldKey::RevenueMonth1 => &mut self.revenue_month1,
            FieldKey::RevenueMonth2 => &mut self.revenue_month2,
            FieldKey::RevenueMonth3 => &mut self.revenue_month3,
            FieldKey::RevenueMonth4 => &mut self.revenue_month4,
            FieldKey::RevenueMonth5 => &mut self.revenue_month5,
            FieldKey::ExpenseMonth1 => &mut self.expense_month1,
            FieldKey::ExpenseMonth2 => &mut self.expense_month2,
            FieldKey::ExpenseMonth3 => &mut self.expense_month3,
            FieldKey::ExpenseMonth4 => &mut self.expense_month4,
            FieldKey::ExpenseMonth5 => &mut self.expense_month5,
            FieldKey::RawMaterials => &mut self.raw_materials,
            FieldKey::Salary => &mut self.salary,
            FieldKey::Operational => &mut self.operational,
            FieldKey::Utilities => &mut self.utilities,
            FieldKey::Transportation => &mut self.transportation,
            FieldKey::OtherExpenses => &mut self.other_expenses,
            FieldKey::CashSales => &mut self.cash_sales,
            FieldKey::CreditSales => &mut self.credit_sales,
            FieldKey::AccountsReceivable => &mut self.accounts_receivable,
            FieldKey::Inventory => &mut self.inventory,
            FieldKey::CashBalance => &mut self.cash_balance,
            FieldKey::AccountsPayable => &mut self.accounts_payable,
            FieldKey::BankLoans => &mut self.bank_loans,
            FieldKey::InitialCapital => &mut self.initial_capital,
            FieldKey::Employees => &mut self.employees,
            FieldKey::BusinessAgeMonths => &mut self.business_age_months,
        }
    }

    /// Store a value as given. Callers sanitize first.
    pub fn set(&mut self, key: FieldKey, value: impl Into<String>) {
        *self.slot_mut(key) = value.into();
    }

    /// True once every required field holds a value.
    pub fn is_complete(&self) -> bool {
        FieldKey::REQUIRED.iter().all(|k| !self.get(*k).is_empty())
    }

    /// Copy with every field reduced to its digits.
    pub fn sanitized(&self) -> FinancialRecord {
        let mut out = FinancialRecord::default();
        for key in FieldKey::ALL {
            out.set(*key, sanitize_digits(self.get(*key)));
        }
        out
    }

    pub fn filled_count(&self) -> usize {
        FieldKey::ALL
            .iter()
            .filter(|k| !self.get(**k).is_empty())
            .count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    RevenueExpenses,
    ExpenseBreakdown,
    CashPosition,
    BusinessInfo,
}

impl Section {
    pub const ALL: &'static [Section] = &[
        Section::RevenueExpenses,
        Section::ExpenseBreakdown,
        Section::CashPosition,
        Section::BusinessInfo,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::RevenueExpenses => "Revenue & Expenses (last 5 months)",
            Self::ExpenseBreakdown => "Expense Breakdown (latest month)",
            Self::CashPosition => "Cash Flow & Position",
            Self::BusinessInfo => "Business Info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    RevenueMonth1,
    ExpenseMonth1,
    RevenueMonth2,
    ExpenseMonth2,
    RevenueMonth3,
    ExpenseMonth3,
    RevenueMonth4,
    ExpenseMonth4,
    RevenueMonth5,
    ExpenseMonth5,
    RawMaterials,
    Salary,
    Operational,
    Utilities,
    Transportation,
    OtherExpenses,
    CashBalance,
    AccountsReceivable,
    Inventory,
    AccountsPayable,
    BankLoans,
    InitialCapital,
    CashSales,
    CreditSales,
    Employees,
    BusinessAgeMonths,
}

impl FieldKey {
    /// Every field in form order: months side by side, then the sections.
    pub const ALL: &'static [FieldKey] = &[
        FieldKey::RevenueMonth1,
        FieldKey::ExpenseMonth1,
        FieldKey::RevenueMonth2,
        FieldKey::ExpenseMonth2,
        FieldKey::RevenueMonth3,
        FieldKey::ExpenseMonth3,
        FieldKey::RevenueMonth4,
        FieldKey::ExpenseMonth4,
        FieldKey::RevenueMonth5,
        FieldKey::ExpenseMonth5,
        FieldKey::RawMaterials,
        FieldKey::Salary,
        FieldKey::Operational,
        FieldKey::Utilities,
        FieldKey::Transportation,
        FieldKey::OtherExpenses,
        FieldKey::CashBalance,
        FieldKey::AccountsReceivable,
        FieldKey::Inventory,
        FieldKey::AccountsPayable,
        FieldKey::BankLoans,
        FieldKey::InitialCapital,
        FieldKey::CashSales,
        FieldKey::CreditSales,
        FieldKey::Employees,
        FieldKey::BusinessAgeMonths,
    ];

    pub const REQUIRED: &'static [FieldKey] = &[
        FieldKey::RevenueMonth5,
        FieldKey::ExpenseMonth5,
        FieldKey::CashBalance,
    ];

    /// JSON / snake_case name of the field.
    pub fn key(&self) -> &'static str {
        match self {
            Self::RevenueMonth1 => "revenue_month1",
            Self::RevenueMonth2 => "revenue_month2",
            Self::RevenueMonth3 => "revenue_month3",
            Self::RevenueMonth4 => "revenue_month4",
            Self::RevenueMonth5 => "revenue_month5",
            Self::ExpenseMonth1 => "expense_month1",
            Self::ExpenseMonth2 => "expense_month2",
            Self::ExpenseMonth3 => "expense_month3",
            Self::ExpenseMonth4 => "expense_month4",
            Self::ExpenseMonth5 => "expense_month5",
            Self::RawMaterials => "raw_materials",
            Self::Salary => "salary",
            Self::Operational => "operational",
            Self::Utilities => "utilities",
            Self::Transportation => "transportation",
            Self::OtherExpenses => "other_expenses",
            Self::CashSales => "cash_sales",
            Self::CreditSales => "credit_sales",
            Self::AccountsReceivable => "accounts_receivable",
            Self::Inventory => "inventory",
            Self::CashBalance => "cash_balance",
            Self::AccountsPayable => "accounts_payable",
            Self::BankLoans => "bank_loans",
            Self::InitialCapital => "initial_capital",
            Self::Employees => "employees",
            Self::BusinessAgeMonths => "business_age_months",
        }
    }

    pub fn from_key(key: &str) -> Option<FieldKey> {
        Self::ALL.iter().find(|f| f.key() == key).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::RevenueMonth1 => "Month 1 revenue",
            Self::RevenueMonth2 => "Month 2 revenue",
            Self::RevenueMonth3 => "Month 3 revenue",
            Self::RevenueMonth4 => "Month 4 revenue",
            Self::RevenueMonth5 => "Month 5 revenue",
            Self::ExpenseMonth1 => "Month 1 expenses",
            Self::ExpenseMonth2 => "Month 2 expenses",
            Self::ExpenseMonth3 => "Month 3 expenses",
            Self::ExpenseMonth4 => "Month 4 expenses",
            Self::ExpenseMonth5 => "Month 5 expenses",
            Self::RawMaterials => "Raw materials / stock",
            Self::Salary => "Staff salaries",
            Self::Operational => "Operating costs",
            Self::Utilities => "Electricity & water",
            Self::Transportation => "Transportation",
            Self::OtherExpenses => "Other",
            Self::CashSales => "Cash sales",
            Self::CreditSales => "Credit sales",
            Self::AccountsReceivable => "Accounts receivable",
            Self::Inventory => "Inventory value",
            Self::CashBalance => "Current cash balance",
            Self::AccountsPayable => "Accounts payable",
            Self::BankLoans => "Bank loans",
            Self::InitialCapital => "Initial capital",
            Self::Employees => "Employees",
            Self::BusinessAgeMonths => "Business age (months)",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::RevenueMonth1
            | Self::RevenueMonth2
            | Self::RevenueMonth3
            | Self::RevenueMonth4
            | Self::RevenueMonth5 => "15.000.000",
            Self::ExpenseMonth1
            | Self::ExpenseMonth2
            | Self::ExpenseMonth3
            | Self::ExpenseMonth4
            | Self::ExpenseMonth5 => "12.000.000",
            Self::RawMaterials => "8.000.000",
            Self::Salary => "3.500.000",
            Self::Operational => "2.800.000",
            Self::Utilities => "620.000",
            Self::Transportation => "1.100.000",
            Self::OtherExpenses => "750.000",
            Self::CashSales => "10.000.000",
            Self::CreditSales => "5.000.000",
            Self::AccountsReceivable => "3.500.000",
            Self::Inventory => "8.000.000",
            Self::CashBalance => "5.200.000",
            Self::AccountsPayable => "2.500.000",
            Self::BankLoans => "8.000.000",
            Self::InitialCapital => "20.000.000",
            Self::Employees => "5",
            Self::BusinessAgeMonths => "24",
        }
    }

    pub fn section(&self) -> Section {
        match self {
            Self::RevenueMonth1
            | Self::RevenueMonth2
            | Self::RevenueMonth3
            | Self::RevenueMonth4
            | Self::RevenueMonth5
            | Self::ExpenseMonth1
            | Self::ExpenseMonth2
            | Self::ExpenseMonth3
            | Self::ExpenseMonth4
            | Self::ExpenseMonth5 => Section::RevenueExpenses,
            Self::RawMaterials
            | Self::Salary
            | Self::Operational
            | Self::Utilities
            | Self::Transportation
            | Self::OtherExpenses => Section::ExpenseBreakdown,
            Self::CashSales
            | Self::CreditSales
            | Self::AccountsReceivable
            | Self::Inventory
            | Self::CashBalance
            | Self::AccountsPayable
            | Self::BankLoans
            | Self::InitialCapital => Section::CashPosition,
            Self::Employees | Self::BusinessAgeMonths => Section::BusinessInfo,
        }
    }

    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }

    /// Currency fields get the `Rp` prefix and thousands grouping.
    pub fn is_currency(&self) -> bool {
        !matches!(self, Self::Employees | Self::BusinessAgeMonths)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxnType {
    Income,
    Expense,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxnStatus {
    Categorized,
    Pending,
}

impl TxnStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Categorized => "Categorized",
            Self::Pending => "Needs review",
        }
    }
}

/// A bank-statement line. Positive amounts are income, negative expenses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: u32,
    pub date: String,
    pub description: String,
    pub amount: i64,
    #[serde(rename = "type")]
    pub txn_type: TxnType,
    pub category: String,
    pub status: TxnStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
}

impl InvoiceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Sent => "Sent",
            Self::Paid => "Paid",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    pub id: String,
    pub customer: String,
    pub amount: i64,
    pub date: String,
    pub due_date: String,
    pub status: InvoiceStatus,
}
