//! Flat-file dump format for ledger records
//!
//! This module centralizes the text encoding of accounts, payments and
//! favorites, providing:
//! - Encoding of each record kind into delimited text
//! - Decoding back into domain types under a `DecodePolicy`
//!
//! All functions are pure (no I/O) for easy testing.
//!
//! # Layout
//!
//! Fields are written in a fixed order, joined by the field separator, and
//! every record is followed by the record separator:
//!
//! - account: `id`, `phone`, `balance`
//! - payment: `id`, `account_id`, `amount`, `category`, `status`
//! - favorite: `id`, `account_id`, `name`, `amount`, `category`
//!
//! Nothing is quoted or escaped. A field value containing either separator
//! corrupts the stream.
//!
//! # Record numbers
//!
//! Errors and warnings name the 1-based position of the record among the
//! non-blank records of the dump. A blank record (no text at all between two
//! record separators) is dropped without counting. A record made only of
//! field separators, such as `;;`, is not blank: it is decoded like any
//! other and its empty fields go through the policy.

use crate::types::{Account, Favorite, Money, Payment, PaymentStatus, WalletError};
use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use log::warn;

/// Field and record separators for a dump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Separators {
    pub field: u8,
    pub record: u8,
}

/// Separators of the per-kind dump files in a data directory
pub const DIRECTORY_SEPARATORS: Separators = Separators {
    field: b';',
    record: b'\n',
};

/// Separators of the legacy single-file account dump
pub const LEGACY_SEPARATORS: Separators = Separators {
    field: b';',
    record: b'|',
};

const ACCOUNT_FIELDS: usize = 3;
const PAYMENT_FIELDS: usize = 5;
const FAVORITE_FIELDS: usize = 5;

/// How to treat records that do not decode cleanly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodePolicy {
    /// Skip short records and unknown statuses, read bad numbers as zero
    ///
    /// Matches what older dumps relied on. Each tolerated problem is logged.
    #[default]
    Lenient,

    /// Fail on the first record that does not decode cleanly
    Strict,
}

impl DecodePolicy {
    /// Let a problem through (lenient) or turn it into an error (strict)
    fn tolerate(self, line: u64, message: String) -> Result<(), WalletError> {
        match self {
            DecodePolicy::Lenient => {
                warn!("Tolerating malformed dump record {}: {}", line, message);
                Ok(())
            }
            DecodePolicy::Strict => Err(WalletError::decode_error(Some(line), message)),
        }
    }

    fn parse_number(self, line: u64, name: &str, value: &str) -> Result<Money, WalletError> {
        match value.parse::<Money>() {
            Ok(number) => Ok(number),
            Err(_) => {
                self.tolerate(line, format!("invalid {} '{}', using 0", name, value))?;
                Ok(0)
            }
        }
    }
}

/// Encode accounts, one record each
pub fn encode_accounts(accounts: &[Account], seps: Separators) -> Result<String, WalletError> {
    encode(seps, accounts.iter().map(|account| {
        vec![
            account.id.to_string(),
            account.phone.clone(),
            account.balance.to_string(),
        ]
    }))
}

/// Encode payments, one record each
pub fn encode_payments(payments: &[Payment], seps: Separators) -> Result<String, WalletError> {
    encode(seps, payments.iter().map(|payment| {
        vec![
            payment.id.clone(),
            payment.account_id.to_string(),
            payment.amount.to_string(),
            payment.category.clone(),
            payment.status.to_string(),
        ]
    }))
}

/// Encode favorites, one record each
pub fn encode_favorites(favorites: &[Favorite], seps: Separators) -> Result<String, WalletError> {
    encode(seps, favorites.iter().map(|favorite| {
        vec![
            favorite.id.clone(),
            favorite.account_id.to_string(),
            favorite.name.clone(),
            favorite.amount.to_string(),
            favorite.category.clone(),
        ]
    }))
}

fn encode<I>(seps: Separators, records: I) -> Result<String, WalletError>
where
    I: Iterator<Item = Vec<String>>,
{
    let mut writer = WriterBuilder::new()
        .delimiter(seps.field)
        .terminator(Terminator::Any(seps.record))
        .quote_style(QuoteStyle::Never)
        .has_headers(false)
        .from_writer(Vec::new());

    for record in records {
        writer.write_record(&record)?;
    }

    let bytes = writer.into_inner().map_err(|e| WalletError::IoError {
        message: format!("Failed to flush dump buffer: {}", e),
    })?;
    String::from_utf8(bytes).map_err(|e| WalletError::decode_error(None, e.to_string()))
}

/// Decode accounts
///
/// Records need at least `id`, `phone` and `balance`; extra trailing fields
/// are ignored.
pub fn decode_accounts(
    content: &str,
    seps: Separators,
    policy: DecodePolicy,
) -> Result<Vec<Account>, WalletError> {
    decode(content, seps, policy, ACCOUNT_FIELDS, |line, fields| {
        Ok(Some(Account {
            id: policy.parse_number(line, "account id", &fields[0])?,
            phone: fields[1].to_string(),
            balance: policy.parse_number(line, "balance", &fields[2])?,
        }))
    })
}

/// Decode payments
///
/// A record with an unknown status is skipped under the lenient policy.
pub fn decode_payments(
    content: &str,
    seps: Separators,
    policy: DecodePolicy,
) -> Result<Vec<Payment>, WalletError> {
    decode(content, seps, policy, PAYMENT_FIELDS, |line, fields| {
        let status = match fields[4].parse::<PaymentStatus>() {
            Ok(status) => status,
            Err(message) => {
                policy.tolerate(line, message)?;
                return Ok(None);
            }
        };

        Ok(Some(Payment {
            id: fields[0].to_string(),
            account_id: policy.parse_number(line, "account id", &fields[1])?,
            amount: policy.parse_number(line, "amount", &fields[2])?,
            category: fields[3].to_string(),
            status,
        }))
    })
}

/// Decode favorites
pub fn decode_favorites(
    content: &str,
    seps: Separators,
    policy: DecodePolicy,
) -> Result<Vec<Favorite>, WalletError> {
    decode(content, seps, policy, FAVORITE_FIELDS, |line, fields| {
        Ok(Some(Favorite {
            id: fields[0].to_string(),
            account_id: policy.parse_number(line, "account id", &fields[1])?,
            name: fields[2].to_string(),
            amount: policy.parse_number(line, "amount", &fields[3])?,
            category: fields[4].to_string(),
        }))
    })
}

/// Split `content` into records and convert each with `convert`
///
/// Blank records are always ignored. Records with fewer than `min_fields`
/// fields go through the policy.
fn decode<T, F>(
    content: &str,
    seps: Separators,
    policy: DecodePolicy,
    min_fields: usize,
    mut convert: F,
) -> Result<Vec<T>, WalletError>
where
    F: FnMut(u64, &StringRecord) -> Result<Option<T>, WalletError>,
{
    let mut reader = ReaderBuilder::new()
        .delimiter(seps.field)
        .terminator(Terminator::Any(seps.record))
        .quoting(false)
        .flexible(true)
        .has_headers(false)
        .from_reader(content.as_bytes());

    let mut decoded = Vec::new();
    let mut line: u64 = 0;

    for result in reader.records() {
        let fields = result.map_err(|e| record_error(line + 1, e))?;
        if is_blank(&fields) {
            continue;
        }
        line += 1;

        if fields.len() < min_fields {
            policy.tolerate(
                line,
                format!(
                    "expected at least {} fields, found {}",
                    min_fields,
                    fields.len()
                ),
            )?;
            continue;
        }

        if let Some(item) = convert(line, &fields)? {
            decoded.push(item);
        }
    }

    Ok(decoded)
}

fn is_blank(fields: &StringRecord) -> bool {
    match fields.len() {
        0 => true,
        1 => fields[0].is_empty(),
        _ => false,
    }
}

/// Attach the decoder's record number to a reader error
fn record_error(line: u64, error: csv::Error) -> WalletError {
    match WalletError::from(error) {
        WalletError::DecodeError { message, .. } => WalletError::decode_error(Some(line), message),
        other => other,
    }
}
