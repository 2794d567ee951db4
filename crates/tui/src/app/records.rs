//! The record list view: draft form state plus the last list fetched from
//! the service.
//!
//! Two flows touch the network. [`RecordListView::load`] runs once when the
//! view is first shown and swallows failures. [`RecordListView::submit`]
//! creates a record, always re-fetches the list, and hands failures back to
//! the caller. Neither flow validates, deduplicates, or cancels anything,
//! and the draft survives a submit untouched.

use api_types::record::Record;
use chrono::{DateTime, Local};

use crate::client::{Client, ClientError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Date,
    Category,
    Amount,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::Category => "Category",
            Self::Amount => "Amount",
        }
    }

    fn next(self) -> Self {
        match self {
            Self::Date => Self::Category,
            Self::Category => Self::Amount,
            Self::Amount => Self::Date,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Date => Self::Amount,
            Self::Category => Self::Date,
            Self::Amount => Self::Category,
        }
    }
}

/// Parses `text` as a base-10 integer, reading the leading numeric prefix.
///
/// Leading whitespace and a single sign are accepted and anything after the
/// digits is ignored, so `"12abc"` is 12. Returns `None` when there are no
/// digits or the value does not fit in an `i64`.
pub fn parse_amount(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let digits = &rest[..digits_len];
    let value = if negative {
        // Parsing with the sign attached keeps i64::MIN representable.
        format!("-{digits}").parse::<i64>().ok()?
    } else {
        digits.parse::<i64>().ok()?
    };
    Some(value)
}

/// Uncommitted values for the next record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub date: String,
    pub category: String,
    /// Parsed from `amount_text` on every edit. `None` is the non-numeric amount.
    pub amount: Option<i64>,
    amount_text: String,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            date: String::new(),
            category: String::new(),
            amount: Some(0),
            amount_text: "0".to_string(),
        }
    }
}

impl Draft {
    pub fn amount_text(&self) -> &str {
        &self.amount_text
    }

    pub fn set_amount_text(&mut self, text: impl Into<String>) {
        self.amount_text = text.into();
        self.amount = parse_amount(&self.amount_text);
    }

    pub fn text(&self, field: FormField) -> &str {
        match field {
            FormField::Date => &self.date,
            FormField::Category => &self.category,
            FormField::Amount => self.amount_text(),
        }
    }

    /// The record a submit would send. Nothing is validated.
    pub fn to_record(&self) -> Record {
        Record {
            date: self.date.clone(),
            category: self.category.clone(),
            amount: self.amount,
        }
    }

    fn edit(&mut self, field: FormField, f: impl FnOnce(&mut String)) {
        match field {
            FormField::Date => f(&mut self.date),
            FormField::Category => f(&mut self.category),
            FormField::Amount => {
                let mut text = std::mem::take(&mut self.amount_text);
                f(&mut text);
                self.set_amount_text(text);
            }
        }
    }
}

#[derive(Debug)]
pub struct RecordListView {
    records: Vec<Record>,
    draft: Draft,
    focus: FormField,
    last_sync: Option<DateTime<Local>>,
}

impl Default for RecordListView {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordListView {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            draft: Draft::default(),
            focus: FormField::Date,
            last_sync: None,
        }
    }

    /// Records exactly as the service last returned them.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn last_sync(&self) -> Option<DateTime<Local>> {
        self.last_sync
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn input(&mut self, ch: char) {
        self.draft.edit(self.focus, |text| text.push(ch));
    }

    pub fn backspace(&mut self) {
        self.draft.edit(self.focus, |text| {
            text.pop();
        });
    }

    pub fn set_field(&mut self, field: FormField, value: &str) {
        self.draft.edit(field, |text| {
            text.clear();
            text.push_str(value);
        });
    }

    fn replace_records(&mut self, records: Vec<Record>) {
        self.records = records;
        self.last_sync = Some(Local::now());
    }

    /// Initial fetch of the collection.
    ///
    /// Failures of any kind are logged and leave the current list in place.
    pub async fn load(&mut self, client: &Client) {
        match client.records_list().await {
            Ok(records) => self.replace_records(records),
            Err(err) => tracing::error!("failed to load records: {err}"),
        }
    }

    /// Sends the draft as a new record, then re-fetches the list.
    ///
    /// The re-fetch happens whether or not the create succeeded. A create
    /// failure takes precedence over a re-fetch failure in the returned error.
    /// The draft is left as it was.
    pub async fn submit(&mut self, client: &Client) -> Result<(), ClientError> {
        let candidate = self.draft.to_record();
        let created = client.record_create(&candidate).await;

        let reloaded = client
            .records_list()
            .await
            .map(|records| self.replace_records(records));

        created?;
        reloaded
    }
}

#[cfg(test)]
pub(crate) fn view_with_records(records: Vec<Record>) -> RecordListView {
    let mut view = RecordListView::new();
    view.replace_records(records);
    view
}
