//! CSV listings of ledger state for the command line
//!
//! Unlike dumps, listings carry a header row and use the regular CSV
//! quoting rules, so they are safe to open in a spreadsheet.

use crate::types::{Account, Payment, WalletError};
use serde::Serialize;
use std::io::Write;

/// Write accounts as CSV with columns: id, phone, balance
pub fn write_accounts_csv(accounts: &[Account], output: &mut dyn Write) -> Result<(), WalletError> {
    write_csv(accounts, output)
}

/// Write payments as CSV with columns: id, account_id, amount, category, status
pub fn write_payments_csv(payments: &[Payment], output: &mut dyn Write) -> Result<(), WalletError> {
    write_csv(payments, output)
}

fn write_csv<T: Serialize>(rows: &[T], output: &mut dyn Write) -> Result<(), WalletError> {
    let mut writer = csv::Writer::from_writer(output);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PaymentStatus;
    use rstest::rstest;

    #[rstest]
    #[case::single(
        vec![Account { id: 1, phone: "+15551230000".to_string(), balance: 7500 }],
        "id,phone,balance\n1,+15551230000,7500\n"
    )]
    #[case::quoted_phone(
        vec![Account { id: 2, phone: "+1,555".to_string(), balance: 0 }],
        "id,phone,balance\n2,\"+1,555\",0\n"
    )]
    #[case::empty(vec![], "")]
    fn test_write_accounts_csv(#[case] accounts: Vec<Account>, #[case] expected: &str) {
        let mut output = Vec::new();
        write_accounts_csv(&accounts, &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), expected);
    }

    #[test]
    fn test_write_payments_csv() {
        let mut payment = Payment::new("p1".to_string(), 1, 2500, "groceries");
        payment.status = PaymentStatus::Fail;

        let mut output = Vec::new();
        write_payments_csv(&[payment], &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "id,account_id,amount,category,status\np1,1,2500,groceries,FAIL\n"
        );
    }
}
