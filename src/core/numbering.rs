use super::error::BillingError;

/// Monotonic invoice number generator.
///
/// Generates numbers in the format `{prefix}{sequential}`, e.g. "INV-0001",
/// "INV-0002". Numbers never repeat within one sequence.
#[derive(Debug, Clone)]
pub struct InvoiceNumberSequence {
    prefix: String,
    next_number: u64,
    zero_pad: usize,
    exhausted: bool,
}

impl InvoiceNumberSequence {
    /// Create a new sequence starting at 1.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next_number: 1,
            zero_pad: 4,
            exhausted: false,
        }
    }

    /// Create a sequence continuing from a given number.
    pub fn starting_at(prefix: impl Into<String>, next_number: u64) -> Result<Self, BillingError> {
        if next_number == 0 {
            return Err(BillingError::Numbering(
                "sequence must start at 1 or later".into(),
            ));
        }
        Ok(Self {
            prefix: prefix.into(),
            next_number,
            zero_pad: 4,
            exhausted: false,
        })
    }

    /// Set zero-padding width (default: 4, so "0001").
    pub fn with_padding(mut self, width: usize) -> Self {
        self.zero_pad = width;
        self
    }

    /// Generate the next invoice number.
    ///
    /// Fails once the sequence has issued `u64::MAX`, so no number repeats.
    pub fn next_number(&mut self) -> Result<String, BillingError> {
        if self.exhausted {
            return Err(BillingError::Numbering(format!(
                "sequence {:?} is exhausted",
                self.prefix
            )));
        }
        let formatted = self.peek();
        match self.next_number.checked_add(1) {
            Some(next) => self.next_number = next,
            None => self.exhausted = true,
        }
        Ok(formatted)
    }

    /// Preview the next number without consuming it.
    pub fn peek(&self) -> String {
        format!(
            "{}{:0>width$}",
            self.prefix,
            self.next_number,
            width = self.zero_pad
        )
    }

    /// Get the next number that will be issued (without prefix/formatting).
    pub fn next_raw(&self) -> u64 {
        self.next_number
    }
}
