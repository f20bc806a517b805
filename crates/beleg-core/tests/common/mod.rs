//! Shared document fixtures modeled on real broker layouts.
//!
//! Each constructor returns the page text of one document family as the
//! upstream text extraction delivers it, figures and identity codes
//! included. Not every test file uses every fixture.

#![allow(dead_code)]

use std::str::FromStr;

use rust_decimal::Decimal;

use beleg_core::{Broker, Document, FileKind, Page};

pub fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn pdf(pages: Vec<Page>) -> Document {
    Document::new(FileKind::Pdf, pages)
}

pub fn consorsbank_buy() -> Document {
    pdf(vec![Page::from_lines(&[
        "CONSORSBANK",
        "Wertpapierabrechnung",
        "KAUF AM 12.02.2020 UM 16:21:57",
        "",
        "ALERIAN MLP ETF",
        "ST 675                        WKN: A1H99H",
        "                              ISIN: US00162Q8666",
        "KURS 7,414 EUR",
        "KURSWERT EUR 5.004,45",
        "PROVISION EUR 17,46",
        "WERT 14.02.2020 EUR 5.021,91",
    ])])
}

pub fn consorsbank_sell_fractional() -> Document {
    pdf(vec![Page::from_lines(&[
        "CONSORSBANK",
        "Wertpapierabrechnung",
        "VERKAUF AM 24.10.2019 UM 12:01:22",
        "",
        "JOHNSON + JOHNSON    DL 1",
        "ST 0,194                      WKN: 853260",
        "                              ISIN: US4781601046",
        "KURSWERT EUR 22,59",
        "WERT 28.10.2019 EUR 22,59",
    ])])
}

pub fn consorsbank_dividend_fx() -> Document {
    pdf(vec![Page::from_lines(&[
        "CONSORSBANK",
        "ERTRAGSGUTSCHRIFT",
        "",
        "Alerian MLP ETF Registered Shares o.N.",
        "ST 1.350                      WKN: A1H99H",
        "                              ISIN: US00162Q8666",
        "BRUTTO                        USD 202,50",
        "DEVISENKURS                   1,0841",
        "BRUTTO                        EUR 186,79",
        "KAPST                         EUR 45,23",
        "SOLZ                          EUR 2,49",
        "NETTO                         EUR 139,07",
        "WERT 14.05.2020",
    ])])
}

/// Pre-2017 dividend advice generation: WKN only, no ISIN anywhere.
pub fn consorsbank_dividend_wkn_only() -> Document {
    pdf(vec![Page::from_lines(&[
        "CONSORSBANK",
        "DIVIDENDENGUTSCHRIFT",
        "",
        "TOTAL S.A.",
        "ST 25                         WKN: A14UJS",
        "BRUTTO                        EUR 15,25",
        "KAPST                         EUR 4,34",
        "SOLZ                          EUR 0,24",
        "NETTO                         EUR 10,67",
        "WERT 01.07.2015",
    ])])
}

/// Reversal advice whose net figure contradicts gross minus tax. The
/// stated figures are extracted literally; no recomputation happens.
pub fn consorsbank_dividend_reversal() -> Document {
    pdf(vec![Page::from_lines(&[
        "CONSORSBANK",
        "ERTRAGSGUTSCHRIFT",
        "STORNIERUNG",
        "REALTY INCOME CORP.",
        "ST 0,68125                    WKN: 899744",
        "                              ISIN: US7561091049",
        "BRUTTO                        USD 0,15",
        "DEVISENKURS                   1,1174",
        "BRUTTO                        EUR 0,13",
        "KAPST                         EUR 0,01",
        "NETTO                         EUR 0,14",
        "WERT 19.02.2020",
    ])])
}

/// Account statement batching two confirmations into one file.
pub fn consorsbank_batch() -> Document {
    pdf(vec![
        Page::from_lines(&[
            "CONSORSBANK",
            "KAUF AM 12.02.2020 UM 16:21:57",
            "",
            "ALERIAN MLP ETF",
            "ST 675                        WKN: A1H99H",
            "                              ISIN: US00162Q8666",
            "KURS 7,414 EUR",
            "KURSWERT EUR 5.004,45",
            "PROVISION EUR 17,46",
        ]),
        Page::from_lines(&[
            "DIVIDENDENGUTSCHRIFT",
            "",
            "BAYERISCHE MOTOREN WERKE AG",
            "ST 153                        WKN: 519000",
            "BRUTTO                        EUR 489,60",
            "KAPST                         EUR 129,09",
            "SOLZ                          EUR 7,11",
            "NETTO                         EUR 353,40",
            "WERT 13.05.2016",
        ]),
    ])
}

/// Single confirmation wrapping onto a follow-up page without its own
/// transaction marker.
pub fn consorsbank_buy_two_pages() -> Document {
    pdf(vec![
        Page::from_lines(&[
            "CONSORSBANK",
            "KAUF AM 12.02.2020 UM 16:21:57",
            "",
            "ALERIAN MLP ETF",
            "ST 675                        WKN: A1H99H",
            "                              ISIN: US00162Q8666",
            "KURS 7,414 EUR",
            "KURSWERT EUR 5.004,45",
        ]),
        Page::from_lines(&[
            "CONSORSBANK Seite 2",
            "PROVISION EUR 17,46",
            "WERT 14.02.2020 EUR 5.021,91",
        ]),
    ])
}

pub fn comdirect_buy() -> Document {
    pdf(vec![Page::from_lines(&[
        "comdirect bank AG",
        "Wertpapierkauf",
        "Geschäftstag : 24.06.2019",
        "Wertpapier-Bezeichnung : GLOB.X SUPERDIVIDEND ETF",
        "WKN : A1JJ54",
        "ISIN : US37950E5490",
        "Nominale : St. 400",
        "Kurs : 14,908 EUR",
        "Provision : 19,86 EUR",
    ])])
}

pub fn comdirect_sell() -> Document {
    pdf(vec![Page::from_lines(&[
        "comdirect bank AG",
        "Wertpapierverkauf",
        "Geschäftstag : 28.01.2020",
        "Wertpapier-Bezeichnung : BASF SE NAMENS-AKTIEN O.N.",
        "WKN : BASF11",
        "ISIN : DE000BASF111",
        "Nominale : St. 30",
        "Kurs : 64,02 EUR",
        "Kurswert : EUR 1.920,60",
        "Provision : 9,90 EUR",
        "Kapitalertragsteuer : EUR 52,13",
        "Solidaritätszuschlag : EUR 2,86",
    ])])
}

/// Foreign dividend stating the gross in USD only; the account-currency
/// amount has to be back-computed from the disclosed rate.
pub fn comdirect_dividend_fx() -> Document {
    pdf(vec![Page::from_lines(&[
        "comdirect bank AG",
        "Ertragsgutschrift",
        "Wertpapier-Bezeichnung : VANG.FTSE D.A.P.X.J.U.ETF",
        "WKN : A1T8FT",
        "ISIN : IE00B9F5YL18",
        "Nominale : St. 46",
        "Bruttobetrag : USD 11,31",
        "Umrechn. zum Devisenkurs : 1,1604",
        "Kapitalertragsteuer : EUR 1,80",
        "Valuta : 10.10.2018",
    ])])
}

pub fn comdirect_dividend_domestic() -> Document {
    pdf(vec![Page::from_lines(&[
        "comdirect bank AG",
        "Dividendengutschrift",
        "Wertpapier-Bezeichnung : DEUTSCHE POST AG NAMENS-AKTIEN O.N.",
        "WKN : 555200",
        "ISIN : DE0005552004",
        "Nominale : St. 21",
        "Bruttobetrag : EUR 24,15",
        "Valuta : 27.04.2018",
    ])])
}

pub fn dkb_buy() -> Document {
    pdf(vec![Page::from_lines(&[
        "Deutsche Kreditbank AG",
        "Wertpapier Abrechnung Kauf",
        "Stück 50 DEUTSCHE POST AG NAMENS-AKTIEN O.N. DE0005552004 (555200)",
        "Ausführungskurs 27,25 EUR",
        "Kurswert 1.362,50- EUR",
        "Provision 10,00- EUR",
        "Schlusstag/-Zeit 27.04.2018 17:33:01",
    ])])
}

pub fn dkb_sell() -> Document {
    pdf(vec![Page::from_lines(&[
        "Deutsche Kreditbank AG",
        "Wertpapier Abrechnung Verkauf",
        "Stück 30 BAYERISCHE MOTOREN WERKE AG INHABER-AKTIEN O.N. DE0005190003 (519000)",
        "Ausführungskurs 72,30 EUR",
        "Kurswert 2.169,00 EUR",
        "Provision 10,00- EUR",
        "Kapitalertragsteuer 24,45- EUR",
        "Solidaritätszuschlag 1,34- EUR",
        "Schlusstag/-Zeit 15.03.2019 10:11:12",
    ])])
}

/// Foreign dividend stating the gross twice under the same label, once
/// per currency.
pub fn dkb_dividend_fx() -> Document {
    pdf(vec![Page::from_lines(&[
        "Deutsche Kreditbank AG",
        "Dividendengutschrift",
        "Stück 64 AGNC INVESTMENT CORP. REGISTERED SHARES DL -,001 US00123Q1040 (A2AR58)",
        "Zahlbarkeitstag 29.06.2020",
        "Dividendengutschrift 6,61+ USD",
        "Devisenkurs (EUR/USD) 1,1263 vom 26.06.2020",
        "Dividendengutschrift 5,87+ EUR",
        "Kapitalertragsteuer 0,88- EUR",
        "Ausmachender Betrag 4,99+ EUR",
    ])])
}

pub fn ing_buy() -> Document {
    pdf(vec![Page::from_lines(&[
        "ING-DiBa AG",
        "Abrechnung Kauf",
        "ISIN (WKN) US37950E5490 (A1JJ54)",
        "Wertpapierbezeichnung GLOB.X SUPERDIVIDEND ETF",
        "Nominale Stück 250,0",
        "Kurs 15,994 EUR",
        "Kurswert EUR 3.998,50",
        "Handelsprovision EUR 14,95",
        "Ausführungstag 29.04.2019",
    ])])
}

pub fn ing_sell() -> Document {
    pdf(vec![Page::from_lines(&[
        "ING-DiBa AG",
        "Abrechnung Verkauf",
        "ISIN (WKN) DE000A0F5UF5 (A0F5UF)",
        "Wertpapierbezeichnung iSh.NASDAQ-100 UCITS ETF DE",
        "Nominale Stück 40,0",
        "Kurs 78,68 EUR",
        "Kurswert EUR 3.147,20",
        "Handelsprovision EUR 9,90",
        "Handelsplatzgebühr EUR 1,90",
        "Ausführungstag 06.03.2020",
    ])])
}

pub fn ing_dividend() -> Document {
    pdf(vec![Page::from_lines(&[
        "ING-DiBa AG",
        "Dividendengutschrift",
        "ISIN (WKN) DE0007664005 (766400)",
        "Wertpapierbezeichnung VOLKSWAGEN AG Inhaber-Stammaktien o.N.",
        "Nominale 14,00 Stück",
        "Brutto EUR 67,20",
        "Kapitalertragsteuer EUR 16,80",
        "Solidaritätszuschlag EUR 0,92",
        "Kirchensteuer EUR 0,96",
        "Valuta 17.05.2019",
    ])])
}

/// One representative document per fixture, tagged with the handler that
/// must claim it.
pub fn catalog() -> Vec<(Broker, Document)> {
    vec![
        (Broker::Consorsbank, consorsbank_buy()),
        (Broker::Consorsbank, consorsbank_sell_fractional()),
        (Broker::Consorsbank, consorsbank_dividend_fx()),
        (Broker::Consorsbank, consorsbank_dividend_wkn_only()),
        (Broker::Consorsbank, consorsbank_dividend_reversal()),
        (Broker::Consorsbank, consorsbank_batch()),
        (Broker::Consorsbank, consorsbank_buy_two_pages()),
        (Broker::Comdirect, comdirect_buy()),
        (Broker::Comdirect, comdirect_sell()),
        (Broker::Comdirect, comdirect_dividend_fx()),
        (Broker::Comdirect, comdirect_dividend_domestic()),
        (Broker::Dkb, dkb_buy()),
        (Broker::Dkb, dkb_sell()),
        (Broker::Dkb, dkb_dividend_fx()),
        (Broker::Ing, ing_buy()),
        (Broker::Ing, ing_sell()),
        (Broker::Ing, ing_dividend()),
    ]
}
