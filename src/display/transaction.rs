//! Transaction display formatting

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::report::truncate;
use crate::models::{category_label, Currency, Transaction, DEFAULT_CATEGORIES};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

fn signed_amount(txn: &Transaction, currency: Currency) -> String {
    let sign = if txn.is_income() { "+" } else { "-" };
    format!("{}{}", sign, currency.format(txn.amount))
}

/// Format transactions as a table, in the order given
pub fn format_transaction_table(transactions: &[Transaction], currency: Currency) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows = transactions.iter().map(|txn| TransactionRow {
        id: txn.id.to_string(),
        date: txn.date.format("%Y-%m-%d").to_string(),
        kind: txn.kind.to_string(),
        category: category_label(&txn.category).to_string(),
        description: truncate(&txn.description, 32),
        amount: signed_amount(txn, currency),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::single(5)).with(Alignment::right()));

    format!("{}\n", table)
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, currency: Currency) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d")));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Amount:      {}\n", signed_amount(txn, currency)));
    output.push_str(&format!("Category:    {}\n", category_label(&txn.category)));
    output.push_str(&format!("Description: {}\n", txn.description));
    output.push_str(&format!(
        "Created:     {}\n",
        txn.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    output.push_str(&format!("Full ID:     {}\n", txn.id.as_uuid()));

    output
}

/// The built-in categories with their labels
pub fn format_category_list() -> String {
    let mut output = String::from("Built-in categories (any other name is accepted too):\n");
    for category in DEFAULT_CATEGORIES {
        output.push_str(&format!("  {:<15} {}\n", category.value, category.label));
    }
    output
}
