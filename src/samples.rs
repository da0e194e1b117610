use crate::models::{InvoiceRecord, InvoiceStatus, TransactionRecord, TxnStatus, TxnType};

struct SampleTxn {
    date: &'static str,
    description: &'static str,
    amount: i64,
    txn_type: TxnType,
    category: &'static str,
    status: TxnStatus,
}

/// Stand-in statement lines shown after any accepted file selection.
const SAMPLE_TRANSACTIONS: &[SampleTxn] = &[
    SampleTxn {
        date: "2024-11-01",
        description: "Product A sales",
        amount: 150_000,
        txn_type: TxnType::Income,
        category: "Revenue",
        status: TxnStatus::Categorized,
    },
    SampleTxn {
        date: "2024-11-02",
        description: "Raw material purchase",
        amount: -75_000,
        txn_type: TxnType::Expense,
        category: "Cost of Goods",
        status: TxnStatus::Categorized,
    },
    SampleTxn {
        date: "2024-11-03",
        description: "Transfer to supplier",
        amount: -200_000,
        txn_type: TxnType::Expense,
        category: "Uncategorized",
        status: TxnStatus::Pending,
    },
];

struct SampleInvoice {
    id: &'static str,
    customer: &'static str,
    amount: i64,
    date: &'static str,
    due_date: &'static str,
    status: InvoiceStatus,
}

const SAMPLE_INVOICES: &[SampleInvoice] = &[
    SampleInvoice {
        id: "INV-001",
        customer: "PT. ABC Indonesia",
        amount: 5_000_000,
        date: "2024-11-01",
        due_date: "2024-11-15",
        status: InvoiceStatus::Paid,
    },
    SampleInvoice {
        id: "INV-002",
        customer: "CV. XYZ Trading",
        amount: 3_500_000,
        date: "2024-11-03",
        due_date: "2024-11-17",
        status: InvoiceStatus::Sent,
    },
    SampleInvoice {
        id: "INV-003",
        customer: "Toko Serbaguna",
        amount: 1_250_000,
        date: "2024-11-05",
        due_date: "2024-11-20",
        status: InvoiceStatus::Draft,
    },
];

/// Invoice tallies shown above the invoice list.
///
/// These are fixed figures, not counts of [`sample_invoices`]: the list holds
/// one invoice per status while the tallies read 3/7/12. The mismatch is a
/// known product issue and is left visible until product decides which side
/// is right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvoiceCounters {
    pub draft: u32,
    pub sent: u32,
    pub paid: u32,
}

pub const INVOICE_COUNTERS: InvoiceCounters = InvoiceCounters {
    draft: 3,
    sent: 7,
    paid: 12,
};

pub fn sample_transactions() -> Vec<TransactionRecord> {
    SAMPLE_TRANSACTIONS
        .iter()
        .enumerate()
        .map(|(i, t)| TransactionRecord {
            id: i as u32 + 1,
            date: t.date.to_string(),
            description: t.description.to_string(),
            amount: t.amount,
            txn_type: t.txn_type,
            category: t.category.to_string(),
            status: t.status,
        })
        .collect()
}

pub fn sample_invoices() -> Vec<InvoiceRecord> {
    SAMPLE_INVOICES
        .iter()
        .map(|inv| InvoiceRecord {
            id: inv.id.to_string(),
            customer: inv.customer.to_string(),
            amount: inv.amount,
            date: inv.date.to_string(),
            due_date: inv.due_date.to_string(),
            status: inv.status,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_transactions_are_fixed() {
        let txns = sample_transactions();
        assert_eq!(txns.len(), 3);
        assert_eq!(txns.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(txns[0].amount, 150_000);
        assert_eq!(txns[2].category, "Uncategorized");
        assert_eq!(txns[2].status, TxnStatus::Pending);
    }

    #[test]
    fn test_amount_sign_matches_type() {
        for txn in sample_transactions() {
            match txn.txn_type {
                TxnType::Income => assert!(txn.amount > 0, "{}", txn.description),
                TxnType::Expense => assert!(txn.amount < 0, "{}", txn.description),
            }
        }
    }

    #[test]
    fn test_sample_invoices() {
        let invoices = sample_invoices();
        let ids: Vec<&str> = invoices.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["INV-001", "INV-002", "INV-003"]);
        assert_eq!(invoices[0].status, InvoiceStatus::Paid);
        assert_eq!(invoices[2].due_date, "2024-11-20");
    }

    #[test]
    fn test_counters_are_static_literals() {
        assert_eq!(INVOICE_COUNTERS, InvoiceCounters { draft: 3, sent: 7, paid: 12 });
        let drafts = sample_invoices()
            .iter()
            .filter(|i| i.status == InvoiceStatus::Draft)
            .count() as u32;
        assert_ne!(drafts, INVOICE_COUNTERS.draft);
    }
}
