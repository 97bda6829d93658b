use chrono::NaiveDate;

use super::amount::MonetaryAmount;
use super::config::IssuerConfig;
use super::date::parse_iso_date;
use super::error::ReciboError;
use super::types::*;
use super::validation;

/// Longest description accepted by [`ReceiptRequestBuilder::build`].
pub const MAX_DESCRIPTION_CHARS: usize = 2_000;

/// Builder for constructing valid receipt requests.
///
/// ```
/// use recibo::core::*;
/// use chrono::NaiveDate;
///
/// let request = ReceiptRequestBuilder::new(
///     MonetaryAmount::parse_br("150,00").unwrap(),
///     NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
/// )
/// .payer(Party::new("Maria Silva", "123.456.789-01", "Rua das Flores, 10"))
/// .issuer(IssuerConfig::default().issuer())
/// .description("Cestas básicas")
/// .build()
/// .unwrap();
///
/// assert_eq!(request.payer.identifier_kind(), IdentifierKind::Cpf);
/// ```
pub struct ReceiptRequestBuilder {
    amount: MonetaryAmount,
    issue_date: NaiveDate,
    payer: Option<Party>,
    issuer: Option<Issuer>,
    description: String,
    logo: Option<ImagePayload>,
}

impl ReceiptRequestBuilder {
    pub fn new(amount: MonetaryAmount, issue_date: NaiveDate) -> Self {
        Self {
            amount,
            issue_date,
            payer: None,
            issuer: None,
            description: String::new(),
            logo: None,
        }
    }

    pub fn payer(mut self, party: Party) -> Self {
        self.payer = Some(party);
        self
    }

    pub fn issuer(mut self, issuer: Issuer) -> Self {
        self.issuer = Some(issuer);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn logo(mut self, logo: ImagePayload) -> Self {
        self.logo = Some(logo);
        self
    }

    /// Set or clear the logo.
    pub fn maybe_logo(mut self, logo: Option<ImagePayload>) -> Self {
        self.logo = logo;
        self
    }

    /// Build the request and run validation.
    /// Returns all validation errors (not just the first).
    pub fn build(self) -> Result<ReceiptRequest, ReciboError> {
        let payer = self
            .payer
            .ok_or_else(|| ReciboError::Builder("payer is required".into()))?;
        let issuer = self
            .issuer
            .ok_or_else(|| ReciboError::Builder("issuer is required".into()))?;

        if self.description.chars().count() > MAX_DESCRIPTION_CHARS {
            return Err(ReciboError::Builder(
                "description cannot exceed 2,000 characters".into(),
            ));
        }

        let request = ReceiptRequest {
            payer,
            issuer,
            amount: self.amount,
            description: self.description,
            issue_date: self.issue_date,
            logo: self.logo,
        };

        let errors = validation::validate_request(&request);
        if !errors.is_empty() {
            return Err(ReciboError::from_validation(&errors));
        }
        Ok(request)
    }
}

impl ReceiptRequest {
    /// Turn a form submission into a request.
    ///
    /// All form fields are required; every missing field is reported at once.
    /// The amount uses a decimal comma and the date is `yyyy-mm-dd`.
    pub fn from_form(
        form: &ReceiptForm,
        config: &IssuerConfig,
        logo: Option<ImagePayload>,
    ) -> Result<Self, ReciboError> {
        let errors = validation::validate_form(form);
        if !errors.is_empty() {
            return Err(ReciboError::from_validation(&errors));
        }
        config.validate()?;

        let amount = MonetaryAmount::parse_br(&form.amount)?;
        let issue_date = parse_iso_date(&form.issue_date)?;
        log::debug!(
            "receipt form accepted: amount {amount}, date {issue_date}, logo: {}",
            logo.is_some()
        );

        ReceiptRequestBuilder::new(amount, issue_date)
            .payer(Party::new(
                form.client_name.trim(),
                form.client_identifier.trim(),
                form.client_address.trim(),
            ))
            .issuer(config.issuer())
            .description(form.description.trim())
            .maybe_logo(logo)
            .build()
    }
}
