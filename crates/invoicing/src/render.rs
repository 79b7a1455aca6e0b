//! Invoice layout: a fixed, top-to-bottom sequence of cells.
//!
//! The renderer is a formatter, not a calculator. Totals are printed exactly
//! as supplied.

use chrono::NaiveDate;

use crate::format;
use crate::invoice::{InvoiceData, RowData};
use crate::surface::{DrawingSurface, FontWeight, Rgb};

const TITLE_SIZE: f32 = 28.0;
const BODY_SIZE: f32 = 12.0;

const TITLE_COLOR: Rgb = Rgb(50, 60, 50);

const ROW_HEIGHT: f32 = 10.0;
const PARTY_WIDTH: f32 = 100.0;

const ITEM_WIDTH: f32 = 90.0;
const QTY_WIDTH: f32 = 30.0;
const RATE_WIDTH: f32 = 40.0;
const AMOUNT_WIDTH: f32 = 40.0;

/// Empty cell pushing the totals block under the Rate/Amount columns.
const TOTALS_INDENT: f32 = ITEM_WIDTH + QTY_WIDTH;
const TOTALS_LABEL_WIDTH: f32 = 40.0;
const TOTALS_VALUE_WIDTH: f32 = 40.0;

const NOTES_LABEL_WIDTH: f32 = 20.0;
const NOTES_WIDTH: f32 = 180.0;

/// Text shown on the due line when no due date was supplied.
pub const DUE_ON_RECEIPT: &str = "On Receipt";

/// Lay `invoice` out onto `surface`.
///
/// `today` stands in for an empty issued date.
pub fn render_invoice<S: DrawingSurface>(surface: &mut S, invoice: &InvoiceData, today: NaiveDate) {
    surface.set_font(FontWeight::Regular, TITLE_SIZE);
    surface.set_text_color(TITLE_COLOR);
    surface.cell(
        PARTY_WIDTH,
        ROW_HEIGHT,
        &format!("INVOICE #{}", invoice.invoice_number),
        false,
    );
    surface.ln(10.0);

    surface.set_font(FontWeight::SemiBold, BODY_SIZE);
    let issued = if invoice.issued_date.is_empty() {
        format::iso_date(today)
    } else {
        invoice.issued_date.clone()
    };
    surface.cell(PARTY_WIDTH, ROW_HEIGHT, &format!("Issued : {issued}"), false);
    surface.ln(8.0);

    let due = if invoice.due_date.is_empty() {
        DUE_ON_RECEIPT
    } else {
        invoice.due_date.as_str()
    };
    surface.cell(PARTY_WIDTH, ROW_HEIGHT, &format!("Due : {due}"), false);
    surface.ln(20.0);

    party_line(surface, "BILL TO :", "PAY TO :");
    surface.ln(8.0);

    surface.set_font(FontWeight::Regular, BODY_SIZE);
    party_line(surface, &invoice.client_name, &invoice.your_name);
    surface.ln(8.0);
    party_line(surface, &invoice.client_address, &invoice.your_address);
    surface.ln(8.0);
    party_line(
        surface,
        &invoice.client_city_state_zip,
        &invoice.your_city_state_zip,
    );
    surface.ln(24.0);

    surface.set_font(FontWeight::SemiBold, BODY_SIZE);
    surface.set_fill_color(Rgb::BLACK);
    surface.set_text_color(Rgb::WHITE);
    surface.cell(ITEM_WIDTH, ROW_HEIGHT, "Items", true);
    surface.cell(QTY_WIDTH, ROW_HEIGHT, "Qty", true);
    surface.cell(RATE_WIDTH, ROW_HEIGHT, "Rate", true);
    surface.cell(AMOUNT_WIDTH, ROW_HEIGHT, "Amount", true);
    surface.ln(ROW_HEIGHT);

    surface.set_font(FontWeight::Regular, BODY_SIZE);
    surface.set_text_color(Rgb::BLACK);
    for row in &invoice.rows {
        add_invoice_item(surface, row);
    }

    surface.ln(ROW_HEIGHT);
    totals_line(surface, "SubTotal", &format::money(invoice.sub_total));
    if invoice.has_discount() {
        totals_line(surface, "Discount", &format::percent(invoice.discount));
    }
    if invoice.has_tax() {
        totals_line(surface, "Tax", &format::percent(invoice.tax));
    }
    totals_line(surface, "Total", &format::money(invoice.total));

    // totals_line already moved down one row; the gap above Notes is 20.
    surface.ln(10.0);
    surface.set_font(FontWeight::SemiBold, BODY_SIZE);
    surface.cell(NOTES_LABEL_WIDTH, ROW_HEIGHT, "Notes: ", false);
    surface.set_font(FontWeight::Regular, BODY_SIZE);
    surface.cell(NOTES_WIDTH, ROW_HEIGHT, &invoice.note, false);
}

fn party_line<S: DrawingSurface>(surface: &mut S, client: &str, issuer: &str) {
    surface.cell(PARTY_WIDTH, ROW_HEIGHT, client, false);
    surface.cell(PARTY_WIDTH, ROW_HEIGHT, issuer, false);
}

fn add_invoice_item<S: DrawingSurface>(surface: &mut S, row: &RowData) {
    surface.cell(ITEM_WIDTH, ROW_HEIGHT, &row.name, false);
    surface.cell(QTY_WIDTH, ROW_HEIGHT, &format::quantity(row.quantity), false);
    surface.cell(RATE_WIDTH, ROW_HEIGHT, &format::money(row.rate), false);
    surface.cell(AMOUNT_WIDTH, ROW_HEIGHT, &format::money(row.amount), false);
    surface.ln(ROW_HEIGHT);
}

// Label semibold, value regular; leaves the font regular.
fn totals_line<S: DrawingSurface>(surface: &mut S, label: &str, value: &str) {
    surface.cell(TOTALS_INDENT, ROW_HEIGHT, "", false);
    surface.set_font(FontWeight::SemiBold, BODY_SIZE);
    surface.cell(TOTALS_LABEL_WIDTH, ROW_HEIGHT, label, false);
    surface.set_font(FontWeight::Regular, BODY_SIZE);
    surface.cell(TOTALS_VALUE_WIDTH, ROW_HEIGHT, value, false);
    surface.ln(ROW_HEIGHT);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Font(FontWeight, f32),
        TextColor(Rgb),
        FillColor(Rgb),
        Cell { width: f32, text: String, fill: bool },
        Ln(f32),
    }

    #[derive(Debug, Default)]
    struct RecordingSurface {
        ops: Vec<Op>,
    }

    impl RecordingSurface {
        fn texts(&self) -> Vec<&str> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Cell { text, .. } if !text.is_empty() => Some(text.as_str()),
                    _ => None,
                })
                .collect()
        }

        /// Text cells from `marker` onwards, split into lines at each `ln`.
        fn lines_after(&self, marker: &str) -> Vec<Vec<String>> {
            let start = self
                .ops
                .iter()
                .position(|op| matches!(op, Op::Cell { text, .. } if text == marker))
                .expect("marker cell present");
            let mut lines = Vec::new();
            let mut current = Vec::new();
            for op in &self.ops[start..] {
                match op {
                    Op::Cell { text, .. } if !text.is_empty() => current.push(text.clone()),
                    Op::Ln(_) => {
                        if !current.is_empty() {
                            lines.push(std::mem::take(&mut current));
                        }
                    }
                    _ => {}
                }
            }
            if !current.is_empty() {
                lines.push(current);
            }
            lines
        }
    }

    impl DrawingSurface for RecordingSurface {
        fn set_font(&mut self, weight: FontWeight, size_pt: f32) {
            self.ops.push(Op::Font(weight, size_pt));
        }

        fn set_text_color(&mut self, color: Rgb) {
            self.ops.push(Op::TextColor(color));
        }

        fn set_fill_color(&mut self, color: Rgb) {
            self.ops.push(Op::FillColor(color));
        }

        fn cell(&mut self, width: f32, _height: f32, text: &str, fill: bool) {
            self.ops.push(Op::Cell {
                width,
                text: text.to_string(),
                fill,
            });
        }

        fn ln(&mut self, height: f32) {
            self.ops.push(Op::Ln(height));
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 17).unwrap()
    }

    fn widget_invoice() -> InvoiceData {
        InvoiceData {
            invoice_number: 1,
            rows: vec![RowData {
                name: "Widget".to_string(),
                quantity: 2,
                rate: 5.0,
                amount: 10.0,
            }],
            sub_total: 10.0,
            total: 10.0,
            ..InvoiceData::default()
        }
    }

    fn render(invoice: &InvoiceData) -> RecordingSurface {
        let mut surface = RecordingSurface::default();
        render_invoice(&mut surface, invoice, today());
        surface
    }

    #[test]
    fn widget_example_renders_expected_text() {
        let surface = render(&widget_invoice());
        let texts = surface.texts();

        for expected in ["INVOICE #1", "Widget", "2", "$5.00", "$10.00", "SubTotal", "Total"] {
            assert!(texts.contains(&expected), "missing {expected:?} in {texts:?}");
        }
        assert!(!texts.contains(&"Discount"));
        assert!(!texts.contains(&"Tax"));

        let lines = surface.lines_after("Items");
        assert_eq!(
            lines,
            vec![
                vec!["Items", "Qty", "Rate", "Amount"],
                vec!["Widget", "2", "$5.00", "$10.00"],
                vec!["SubTotal", "$10.00"],
                vec!["Total", "$10.00"],
                vec!["Notes: "],
            ]
        );
    }

    #[test]
    fn empty_dates_fall_back_to_today_and_on_receipt() {
        let surface = render(&widget_invoice());
        let texts = surface.texts();
        assert!(texts.contains(&"Issued : 2024-05-17"));
        assert!(texts.contains(&"Due : On Receipt"));
    }

    #[test]
    fn supplied_dates_are_printed_verbatim() {
        let invoice = InvoiceData {
            issued_date: "next tuesday".to_string(),
            due_date: "31/12/2024".to_string(),
            ..widget_invoice()
        };
        let surface = render(&invoice);
        let texts = surface.texts();
        assert!(texts.contains(&"Issued : next tuesday"));
        assert!(texts.contains(&"Due : 31/12/2024"));
    }

    #[test]
    fn parties_are_paired_line_by_line() {
        let invoice = InvoiceData {
            client_name: "Acme Corp".to_string(),
            client_address: "1 Road Runner Way".to_string(),
            client_city_state_zip: "Phoenix, AZ 85001".to_string(),
            your_name: "Jane Doe".to_string(),
            your_address: "42 Main St".to_string(),
            your_city_state_zip: "Springfield, IL 62701".to_string(),
            ..widget_invoice()
        };
        let lines = render(&invoice).lines_after("BILL TO :");
        assert_eq!(lines[0], vec!["BILL TO :", "PAY TO :"]);
        assert_eq!(lines[1], vec!["Acme Corp", "Jane Doe"]);
        assert_eq!(lines[2], vec!["1 Road Runner Way", "42 Main St"]);
        assert_eq!(lines[3], vec!["Phoenix, AZ 85001", "Springfield, IL 62701"]);
    }

    #[test]
    fn empty_rows_render_header_only() {
        let invoice = InvoiceData {
            rows: Vec::new(),
            ..widget_invoice()
        };
        let lines = render(&invoice).lines_after("Items");
        assert_eq!(lines[0], vec!["Items", "Qty", "Rate", "Amount"]);
        assert_eq!(lines[1], vec!["SubTotal", "$10.00"]);
    }

    #[test]
    fn table_header_is_filled_light_on_dark() {
        let surface = render(&widget_invoice());
        let header: Vec<&Op> = surface
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Cell { fill: true, .. }))
            .collect();
        assert_eq!(
            header,
            vec![
                &Op::Cell { width: 90.0, text: "Items".into(), fill: true },
                &Op::Cell { width: 30.0, text: "Qty".into(), fill: true },
                &Op::Cell { width: 40.0, text: "Rate".into(), fill: true },
                &Op::Cell { width: 40.0, text: "Amount".into(), fill: true },
            ]
        );

        let items_at = surface
            .ops
            .iter()
            .position(|op| matches!(op, Op::Cell { text, .. } if text == "Items"))
            .unwrap();
        let before = &surface.ops[..items_at];
        assert!(before.contains(&Op::FillColor(Rgb::BLACK)));
        assert_eq!(
            before.iter().rev().find(|op| matches!(op, Op::TextColor(_))),
            Some(&Op::TextColor(Rgb::WHITE))
        );
        assert_eq!(
            before.iter().rev().find(|op| matches!(op, Op::Font(..))),
            Some(&Op::Font(FontWeight::SemiBold, BODY_SIZE))
        );
    }

    #[test]
    fn discount_and_tax_render_as_percentages() {
        let invoice = InvoiceData {
            discount: 10.0,
            tax: 7.5,
            total: 9.68,
            ..widget_invoice()
        };
        let lines = render(&invoice).lines_after("SubTotal");
        assert_eq!(
            lines,
            vec![
                vec!["SubTotal", "$10.00"],
                vec!["Discount", "10.00 %"],
                vec!["Tax", "7.50 %"],
                vec!["Total", "$9.68"],
                vec!["Notes: "],
            ]
        );
    }

    #[test]
    fn negative_discount_is_still_shown() {
        let invoice = InvoiceData {
            discount: -5.0,
            ..widget_invoice()
        };
        let surface = render(&invoice);
        assert!(surface.texts().contains(&"-5.00 %"));
    }

    #[test]
    fn totals_are_trusted_not_recomputed() {
        let invoice = InvoiceData {
            sub_total: 999.0,
            total: 1.0,
            ..widget_invoice()
        };
        let lines = render(&invoice).lines_after("SubTotal");
        assert_eq!(lines[0], vec!["SubTotal", "$999.00"]);
        assert_eq!(lines[1], vec!["Total", "$1.00"]);
    }

    #[test]
    fn note_is_printed_verbatim() {
        let invoice = InvoiceData {
            note: "Thanks! <b>50%</b> & \"more\"".to_string(),
            ..widget_invoice()
        };
        let lines = render(&invoice).lines_after("Notes: ");
        assert_eq!(lines, vec![vec!["Notes: ", "Thanks! <b>50%</b> & \"more\""]]);
    }

    #[test]
    fn notes_sit_twenty_below_total() {
        let surface = render(&widget_invoice());
        let total = surface
            .ops
            .iter()
            .position(|op| matches!(op, Op::Cell { text, .. } if text == "Total"))
            .unwrap();
        let notes = surface
            .ops
            .iter()
            .position(|op| matches!(op, Op::Cell { text, .. } if text == "Notes: "))
            .unwrap();

        let gap: f32 = surface.ops[total..notes]
            .iter()
            .filter_map(|op| match op {
                Op::Ln(height) => Some(*height),
                _ => None,
            })
            .sum();
        assert_eq!(gap, 20.0);
    }

    #[test]
    fn title_uses_large_regular_font() {
        let surface = render(&widget_invoice());
        assert_eq!(surface.ops[0], Op::Font(FontWeight::Regular, TITLE_SIZE));
        assert_eq!(surface.ops[1], Op::TextColor(TITLE_COLOR));
        assert_eq!(
            surface.ops[2],
            Op::Cell { width: 100.0, text: "INVOICE #1".into(), fill: false }
        );
    }

    fn arb_row() -> impl Strategy<Value = RowData> {
        ("[A-Za-z][A-Za-z ]{0,15}", 0i64..1000, 0.0f64..10_000.0).prop_map(|(name, quantity, rate)| RowData {
            name,
            quantity,
            rate,
            amount: quantity as f64 * rate,
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            ..ProptestConfig::default()
        })]

        /// Property: rows appear in input order, one line each, right after the header.
        #[test]
        fn rows_render_in_input_order(rows in prop::collection::vec(arb_row(), 0..20)) {
            let invoice = InvoiceData { rows: rows.clone(), ..widget_invoice() };
            let lines = render(&invoice).lines_after("Items");

            prop_assert_eq!(&lines[0], &vec!["Items", "Qty", "Rate", "Amount"]);
            for (line, row) in lines[1..=rows.len()].iter().zip(&rows) {
                prop_assert_eq!(line[0].as_str(), row.name.as_str());
                prop_assert_eq!(line[1].clone(), format::quantity(row.quantity));
                prop_assert_eq!(line[2].clone(), format::money(row.rate));
                prop_assert_eq!(line[3].clone(), format::money(row.amount));
            }
            prop_assert_eq!(lines[rows.len() + 1][0].as_str(), "SubTotal");
        }

        /// Property: Discount/Tax lines exist exactly when the value is nonzero.
        #[test]
        fn optional_totals_follow_nonzero_values(
            discount in prop_oneof![Just(0.0f64), -100.0f64..100.0],
            tax in prop_oneof![Just(0.0f64), -100.0f64..100.0],
        ) {
            let invoice = InvoiceData { discount, tax, ..widget_invoice() };
            let lines = render(&invoice).lines_after("SubTotal");
            let labels: Vec<&str> = lines.iter().map(|l| l[0].as_str()).collect();

            let mut expected = vec!["SubTotal"];
            if discount != 0.0 {
                expected.push("Discount");
            }
            if tax != 0.0 {
                expected.push("Tax");
            }
            expected.extend(["Total", "Notes: "]);
            prop_assert_eq!(labels, expected);

            if discount != 0.0 {
                let discount_percent = format::percent(discount);
                prop_assert_eq!(lines[1][1].as_str(), discount_percent.as_str());
            }
        }
    }
}
