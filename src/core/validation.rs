use super::error::ValidationError;
use super::types::*;

/// Validate a form submission: every field is required.
/// Returns all validation errors found (not just the first).
pub fn validate_form(form: &ReceiptForm) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let fields = [
        ("clienteNome", &form.client_name),
        ("clienteCpf", &form.client_identifier),
        ("clienteEndereco", &form.client_address),
        ("valor", &form.amount),
        ("descricao", &form.description),
        ("dataEmissao", &form.issue_date),
    ];
    for (field, value) in fields {
        require(value, field, &mut errors);
    }
    errors
}

/// Validate a receipt request before rendering.
/// Returns all validation errors found (not just the first).
pub fn validate_request(request: &ReceiptRequest) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    require(&request.payer.name, "payer.name", &mut errors);
    require_identifier(&request.payer.identifier, "payer.identifier", &mut errors);
    require(&request.payer.address, "payer.address", &mut errors);

    let issuer = &request.issuer;
    require(&issuer.name, "issuer.name", &mut errors);
    require_identifier(&issuer.identifier, "issuer.identifier", &mut errors);
    require(&issuer.address, "issuer.address", &mut errors);
    require(&issuer.phone, "issuer.phone", &mut errors);
    require(&issuer.email, "issuer.email", &mut errors);
    require(&issuer.pix_key, "issuer.pix_key", &mut errors);

    require(&request.description, "description", &mut errors);

    errors
}

fn require(value: &str, field: &str, errors: &mut Vec<ValidationError>) {
    if value.trim().is_empty() {
        errors.push(ValidationError::new(field, "must not be empty"));
    }
}

// Length and check digits are not verified.
fn require_identifier(value: &str, field: &str, errors: &mut Vec<ValidationError>) {
    if value.trim().is_empty() {
        errors.push(ValidationError::new(field, "must not be empty"));
    } else if !value.chars().any(|c| c.is_ascii_digit()) {
        errors.push(ValidationError::new(
            field,
            format!("'{value}' contains no digits"),
        ));
    }
}
