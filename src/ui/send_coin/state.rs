use crate::api::TransactionRequest;
use crate::ui::mvi::UiState;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Recipient,
    Value,
    Fee,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Recipient, FormField::Value, FormField::Fee];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Recipient => "Pay to",
            FormField::Value => "Value",
            FormField::Fee => "Fee",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Recipient => "Enter recipient address",
            FormField::Value => "Enter value (Bitcoin)",
            FormField::Fee => "Enter fee (Bitcoin)",
        }
    }

    pub fn next(self) -> Self {
        match self {
            FormField::Recipient => FormField::Value,
            FormField::Value => FormField::Fee,
            FormField::Fee => FormField::Recipient,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Recipient => FormField::Fee,
            FormField::Value => FormField::Recipient,
            FormField::Fee => FormField::Value,
        }
    }
}

/// Why the form could not be turned into a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Recipient address is required")]
    MissingRecipient,
    #[error("Value must be a whole number, got '{0}'")]
    InvalidValue(String),
    #[error("Fee must be a whole number, got '{0}'")]
    InvalidFee(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SendCoinFormState {
    pub recipient: String,
    pub value: String,
    pub fee: String,
    pub focused: FormField,
    /// A transaction from this form is in flight.
    pub submitting: bool,
}

impl UiState for SendCoinFormState {}

impl SendCoinFormState {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Recipient => &self.recipient,
            FormField::Value => &self.value,
            FormField::Fee => &self.fee,
        }
    }

    pub(crate) fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Recipient => &mut self.recipient,
            FormField::Value => &mut self.value,
            FormField::Fee => &mut self.fee,
        }
    }

    /// Build the request body. An empty fee means no fee.
    pub fn to_request(&self) -> Result<TransactionRequest, FormError> {
        let recipient = self.recipient.trim();
        if recipient.is_empty() {
            return Err(FormError::MissingRecipient);
        }

        let value = self
            .value
            .trim()
            .parse::<u64>()
            .map_err(|_| FormError::InvalidValue(self.value.clone()))?;

        let fee_text = self.fee.trim();
        let fee = if fee_text.is_empty() {
            0
        } else {
            fee_text
                .parse::<u64>()
                .map_err(|_| FormError::InvalidFee(self.fee.clone()))?
        };

        Ok(TransactionRequest {
            recipient: recipient.to_string(),
            value,
            fee,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(recipient: &str, value: &str, fee: &str) -> SendCoinFormState {
        SendCoinFormState {
            recipient: recipient.to_string(),
            value: value.to_string(),
            fee: fee.to_string(),
            ..SendCoinFormState::default()
        }
    }

    #[test]
    fn builds_request_from_trimmed_fields() {
        let request = filled(" abc ", "1", " 0").to_request().unwrap();
        assert_eq!(
            request,
            TransactionRequest {
                recipient: "abc".to_string(),
                value: 1,
                fee: 0,
            }
        );
    }

    #[test]
    fn empty_fee_defaults_to_zero() {
        assert_eq!(filled("abc", "5", "").to_request().unwrap().fee, 0);
    }

    #[test]
    fn rejects_missing_recipient() {
        assert_eq!(
            filled("  ", "1", "0").to_request(),
            Err(FormError::MissingRecipient)
        );
    }

    #[test]
    fn rejects_fractional_value() {
        assert_eq!(
            filled("abc", "0.5", "0").to_request(),
            Err(FormError::InvalidValue("0.5".to_string()))
        );
    }

    #[test]
    fn rejects_negative_fee() {
        assert!(matches!(
            filled("abc", "1", "-1").to_request(),
            Err(FormError::InvalidFee(_))
        ));
    }

    #[test]
    fn focus_cycles_both_ways() {
        for field in FormField::ALL {
            assert_eq!(field.next().prev(), field);
        }
        assert_eq!(FormField::Fee.next(), FormField::Recipient);
    }
}
