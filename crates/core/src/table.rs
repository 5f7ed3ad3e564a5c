use crate::format::MarketFormat;
use crate::model::Transaction;

pub const TRANSACTION_HEADERS: [&str; 4] = ["Date", "Address", "Price", "Type"];

/// One rendered row of the transaction table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRow {
    pub date: String,
    pub address: String,
    pub price: String,
    pub transaction_type: String,
}

impl TransactionRow {
    pub fn cells(&self) -> [&str; 4] {
        [
            self.date.as_str(),
            self.address.as_str(),
            self.price.as_str(),
            self.transaction_type.as_str(),
        ]
    }
}

/// Rows in the order received, or `None` when the table should be hidden.
pub fn transaction_rows(
    transactions: &[Transaction],
    format: &MarketFormat,
) -> Option<Vec<TransactionRow>> {
    if transactions.is_empty() {
        return None;
    }

    Some(
        transactions
            .iter()
            .map(|transaction| TransactionRow {
                date: format.month_year(&transaction.date),
                address: transaction.address.clone(),
                price: format.currency(transaction.price),
                transaction_type: transaction.transaction_type.clone(),
            })
            .collect(),
    )
}
