//! Letter labels for grid rows. Rows are numbered in bijective base 26, the
//! same way spreadsheet columns are: `A` is 1, `Z` is 26, `AA` is 27, and so
//! on. Labels are only a presentation detail, the transforms always work on
//! numeric rows.

use anyhow::{anyhow, bail};

const ALPHABET_LEN: i32 = 26;

/// Convert a 1-based row number to its letter label. Fails for rows below 1.
pub fn row_to_label(row: i32) -> anyhow::Result<String> {
    if row < 1 {
        bail!("row must be at least 1 to have a label, got {}", row);
    }

    let mut letters = Vec::new();
    let mut remaining = row;
    while remaining > 0 {
        // Shift down by one each step, since there's no "zero" letter
        remaining -= 1;
        letters.push((b'A' + (remaining % ALPHABET_LEN) as u8) as char);
        remaining /= ALPHABET_LEN;
    }
    Ok(letters.into_iter().rev().collect())
}

/// Convert a letter label to its 1-based row number. Case-insensitive.
pub fn label_to_row(label: &str) -> anyhow::Result<i32> {
    if label.is_empty() {
        bail!("row label cannot be empty");
    }

    label.chars().try_fold(0i32, |row, c| {
        if !c.is_ascii_alphabetic() {
            bail!("invalid character {:?} in row label {:?}", c, label);
        }
        let digit = (c.to_ascii_uppercase() as u8 - b'A') as i32 + 1;
        row.checked_mul(ALPHABET_LEN)
            .and_then(|row| row.checked_add(digit))
            .ok_or_else(|| anyhow!("row label {:?} is too large", label))
    })
}
