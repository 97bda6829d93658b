//! Receipt markup.
//!
//! The document is fully self-contained: styling is inlined and the only
//! image is the optional logo, which callers supply as a `data:` URI.

use quick_xml::escape::escape;

/// Values printed on the receipt, unescaped.
pub(super) struct ReceiptView<'a> {
    pub logo: Option<&'a str>,
    pub amount: &'a str,
    pub amount_words: &'a str,
    pub payer_name: &'a str,
    pub payer_label: &'a str,
    pub payer_identifier: &'a str,
    pub payer_address: &'a str,
    pub description: &'a str,
    pub issuer_name: &'a str,
    pub issuer_label: &'a str,
    pub issuer_identifier: &'a str,
    pub issuer_address: &'a str,
    pub issuer_phone: &'a str,
    pub issuer_email: &'a str,
    pub pix_key: &'a str,
    pub date: &'a str,
}

const STYLE: &str = r#"    * {
      margin: 0;
      padding: 0;
      box-sizing: border-box;
    }

    body {
      font-family: Arial, Helvetica, sans-serif;
      padding: 40px;
      background: #fff;
    }

    .container {
      max-width: 800px;
      margin: 0 auto;
      border: 2px solid #000;
      padding: 40px;
    }

    .header {
      position: relative;
      text-align: center;
      margin-bottom: 30px;
      min-height: 80px;
    }

    .logo {
      position: absolute;
      left: 0;
      top: 0;
      max-width: 120px;
      max-height: 80px;
      object-fit: contain;
    }

    .header h1 {
      font-size: 28px;
      font-weight: bold;
      text-transform: uppercase;
      padding-top: 10px;
    }

    .amount {
      font-size: 18px;
      margin: 20px 0;
      text-align: center;
    }

    .amount strong {
      font-size: 22px;
    }

    .content {
      line-height: 1.8;
      font-size: 14px;
      text-align: justify;
    }

    .content p {
      margin-bottom: 15px;
    }

    .info-block {
      margin: 20px 0;
      padding: 15px;
      background: #f5f5f5;
      border-left: 4px solid #333;
    }

    .info-block strong {
      display: block;
      margin-bottom: 5px;
    }

    .date {
      text-align: right;
      margin-top: 30px;
    }

    .signature {
      margin-top: 60px;
      text-align: center;
    }

    .signature-line {
      border-top: 1px solid #000;
      width: 300px;
      margin: 0 auto 10px;
    }

    @media print {
      body {
        padding: 0;
      }

      .container {
        border: none;
      }
    }
"#;

pub(super) fn render(view: &ReceiptView<'_>) -> String {
    let logo = view
        .logo
        .map(|src| {
            format!(
                "\n      <img src=\"{}\" alt=\"Logo\" class=\"logo\" />",
                escape(src)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Recibo</title>
  <style>
{style}  </style>
</head>
<body>
  <div class="container">
    <div class="header">{logo}
      <h1>Recibo</h1>
    </div>

    <div class="amount">
      Valor: <strong>R$ {amount}</strong>
    </div>

    <div class="content">
      <p>
        Recebi de <strong>{payer_name}</strong>,
        {payer_label} nº <strong>{payer_identifier}</strong>,
        residente em <strong>{payer_address}</strong>,
        a quantia de <strong>R$ {amount} ({amount_words})</strong>
        referente a <strong>{description}</strong>.
      </p>

      <div class="info-block">
        <strong>Dados do Fornecedor:</strong>
        Nome: {issuer_name}<br>
        {issuer_label}: {issuer_identifier}<br>
        Endereço: {issuer_address}<br>
        Telefone: {issuer_phone}<br>
        E-mail: {issuer_email}
      </div>

      <div class="info-block">
        <strong>Informações de Pagamento:</strong>
        Chave PIX: {pix_key}
      </div>

      <p class="date">
        Data: {date}
      </p>

      <div class="signature">
        <div class="signature-line"></div>
        {issuer_name}<br>
        {issuer_label}: {issuer_identifier}
      </div>
    </div>
  </div>
</body>
</html>
"#,
        style = STYLE,
        logo = logo,
        amount = escape(view.amount),
        amount_words = escape(view.amount_words),
        payer_name = escape(view.payer_name),
        payer_label = escape(view.payer_label),
        payer_identifier = escape(view.payer_identifier),
        payer_address = escape(view.payer_address),
        description = escape(view.description),
        issuer_name = escape(view.issuer_name),
        issuer_label = escape(view.issuer_label),
        issuer_identifier = escape(view.issuer_identifier),
        issuer_address = escape(view.issuer_address),
        issuer_phone = escape(view.issuer_phone),
        issuer_email = escape(view.issuer_email),
        pix_key = escape(view.pix_key),
        date = escape(view.date),
    )
}
