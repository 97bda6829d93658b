//! Valor por extenso: amounts spelled out in Brazilian Portuguese.
//!
//! An integer is split into three magnitude tiers (millions, thousands,
//! units). Each 0–999 chunk is spelled by [`spell_group`]; empty chunks are
//! skipped together with their magnitude word.

use super::amount::MonetaryAmount;

const UNITS: [&str; 10] = [
    "", "um", "dois", "três", "quatro", "cinco", "seis", "sete", "oito", "nove",
];

const TEENS: [&str; 10] = [
    "dez",
    "onze",
    "doze",
    "treze",
    "quatorze",
    "quinze",
    "dezesseis",
    "dezessete",
    "dezoito",
    "dezenove",
];

const TENS: [&str; 10] = [
    "", "", "vinte", "trinta", "quarenta", "cinquenta", "sessenta", "setenta", "oitenta",
    "noventa",
];

const HUNDREDS: [&str; 10] = [
    "",
    "cento",
    "duzentos",
    "trezentos",
    "quatrocentos",
    "quinhentos",
    "seiscentos",
    "setecentos",
    "oitocentos",
    "novecentos",
];

/// Spell a chunk in `0..=999`. Zero yields an empty string.
fn spell_group(n: u32) -> String {
    debug_assert!(n < 1000, "group out of range: {n}");
    if n == 0 {
        return String::new();
    }
    if n == 100 {
        return "cem".into();
    }

    let hundreds = (n / 100) as usize;
    let tens = ((n % 100) / 10) as usize;
    let units = (n % 10) as usize;

    let mut out = String::new();
    if hundreds > 0 {
        out.push_str(HUNDREDS[hundreds]);
        if tens > 0 || units > 0 {
            out.push_str(" e ");
        }
    }

    if tens == 1 {
        out.push_str(TEENS[units]);
    } else {
        if tens > 0 {
            out.push_str(TENS[tens]);
            if units > 0 {
                out.push_str(" e ");
            }
        }
        if units > 0 {
            out.push_str(UNITS[units]);
        }
    }
    out
}

/// Non-empty tier segments of `n`, most significant first.
fn tier_segments(n: u32) -> Vec<String> {
    let millions = n / 1_000_000;
    let thousands = (n / 1_000) % 1_000;
    let units = n % 1_000;

    let mut segments = Vec::with_capacity(3);
    if millions > 0 {
        let word = if millions == 1 { "milhão" } else { "milhões" };
        segments.push(format!("{} {word}", spell_group(millions)));
    }
    if thousands > 0 {
        segments.push(format!("{} mil", spell_group(thousands)));
    }
    if units > 0 {
        segments.push(spell_group(units));
    }
    segments
}

/// Spell a bare integer without a currency unit.
///
/// Returns `None` for `n >= 1_000_000_000`; there is no billions tier.
pub fn spell_integer(n: u32) -> Option<String> {
    if n >= 1_000_000_000 {
        return None;
    }
    if n == 0 {
        return Some("zero".into());
    }
    Some(tier_segments(n).join(" "))
}

/// Spell an amount in reais and centavos.
///
/// ```
/// use recibo::core::*;
///
/// let amount = MonetaryAmount::parse_br("1234,56").unwrap();
/// assert_eq!(
///     spell_amount(&amount),
///     "um mil duzentos e trinta e quatro reais e cinquenta e seis centavos"
/// );
/// ```
///
/// Zero is the bare word `"zero"`. The unit is `real` only when the whole
/// integer part is exactly one; an amount of only centavos still carries
/// `reais` (`"reais e cinquenta centavos"`).
pub fn spell_amount(amount: &MonetaryAmount) -> String {
    if amount.is_zero() {
        return "zero".into();
    }

    let reais = amount.reais();
    let centavos = amount.centavos();

    let mut parts = tier_segments(reais);
    parts.push(if reais == 1 { "real" } else { "reais" }.into());

    if centavos > 0 {
        parts.push("e".into());
        parts.push(spell_group(centavos));
        parts.push(if centavos == 1 { "centavo" } else { "centavos" }.into());
    }

    parts.join(" ")
}
