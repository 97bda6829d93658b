use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use recibo::core::*;
use recibo::html;

fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn build_request() -> ReceiptRequest {
    ReceiptRequestBuilder::new(MonetaryAmount::parse_br("123456789,99").unwrap(), test_date())
        .payer(Party::new(
            "Maria da Silva",
            "52998224725",
            "Rua das Flores, 10 - Recife/PE",
        ))
        .issuer(IssuerConfig::default().issuer())
        .description("Cestas básicas")
        .logo(ImagePayload::from_base64("image/jpeg", &"A".repeat(64 * 1024)).unwrap())
        .build()
        .unwrap()
}

fn bench_spell_amount(c: &mut Criterion) {
    let amount = MonetaryAmount::parse_br("987654321,12").unwrap();
    c.bench_function("spell_amount", |b| {
        b.iter(|| black_box(spell_amount(black_box(&amount))));
    });
}

fn bench_spell_range(c: &mut Criterion) {
    let amounts: Vec<MonetaryAmount> = (0u32..1_000)
        .map(|n| MonetaryAmount::new((n * 1_234_567 % 1_000_000_000).into()).unwrap())
        .collect();
    c.bench_function("spell_amount_1000", |b| {
        b.iter(|| {
            for amount in &amounts {
                black_box(spell_amount(amount));
            }
        });
    });
}

fn bench_format_identifier(c: &mut Criterion) {
    c.bench_function("format_cpf", |b| {
        b.iter(|| black_box(format_identifier(black_box("529.982.247-25"))));
    });
    c.bench_function("format_cnpj", |b| {
        b.iter(|| black_box(format_identifier(black_box("11222333000181"))));
    });
}

fn bench_parse_amount(c: &mut Criterion) {
    c.bench_function("parse_amount_br", |b| {
        b.iter(|| black_box(MonetaryAmount::parse_br(black_box("1234,56"))));
    });
}

fn bench_assemble(c: &mut Criterion) {
    let request = build_request();
    c.bench_function("assemble_with_64k_logo", |b| {
        b.iter(|| black_box(html::assemble(black_box(&request))));
    });
}

criterion_group!(
    benches,
    bench_spell_amount,
    bench_spell_range,
    bench_format_identifier,
    bench_parse_amount,
    bench_assemble,
);
criterion_main!(benches);
