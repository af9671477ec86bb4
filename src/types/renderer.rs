use rust_decimal::Decimal;

use crate::{
    traits::{ Canvas, Clock, InvoiceSource, SystemClock },
    types::{
        format,
        totals,
        validator,
        Border,
        Cell,
        Error,
        InvoiceHeader,
        InvoiceId,
        Issuer,
        LineItem,
        RenderedDocument,
        Result,
        Settings,
        Style,
        TextAlignment,
        Writer,
}};

/// usable page width
const WIDTH: f32 = 190.0;
const HALF: f32 = WIDTH / 2.0;
const LABEL_WIDTH: f32 = 60.0;
const VALUE_WIDTH: f32 = 130.0;
const ROW: f32 = 6.0;
const LINE: f32 = 5.0;

/// product table columns, left to right
const COLUMNS: [(&str, f32); 6] = [
    ("Código", 20.0),
    ("Descripción", 80.0),
    ("Cant.", 20.0),
    ("P. Unit.", 25.0),
    ("Desc.", 20.0),
    ("Total", 25.0),
];
const TABLE_FONT: f32 = 8.0;
/// used for shortened descriptions only
const SMALL_FONT: f32 = 7.0;

/// blank space left of the summary block, which lines up with the last two columns
const SUMMARY_OFFSET: f32 = 130.0;
const SUMMARY_LABEL: f32 = 35.0;
const SUMMARY_VALUE: f32 = 25.0;

const TITLE: &str = "FACTURA";
const DISCLAIMER: &str = "Documento generado electrónicamente. No requiere firma.";

/// # Invoice document renderer
///
/// Reads an invoice from an `InvoiceSource` and lays it out on a `Canvas`, one fresh canvas per
/// call. Two layouts are available:
/// - **detailed**: masthead, client block, product table, summary, status lines and footer
/// - **simple**: a title and six lines taken from the header, line items are never read
///
/// ```
/// use factura::types::{MemorySource, Renderer, InvoiceId, Error};
///
/// let renderer = Renderer::new(MemorySource::new());
///
/// assert!(matches!(renderer.render_simple(InvoiceId(1)), Err(Error::NotFound(_))));
/// ```
#[derive(Debug, Clone)]
pub struct Renderer<S, K = SystemClock> {
    source: S,
    settings: Settings,
    clock: K,
}

impl<S: InvoiceSource> Renderer<S> {
    /// default settings and the system clock
    pub fn new(source: S) -> Self {
        Renderer {
            source,
            settings: Settings::default(),
            clock: SystemClock,
        }
    }
}

impl<S: InvoiceSource, K: Clock> Renderer<S, K> {
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_issuer(mut self, issuer: Issuer) -> Self {
        self.settings.issuer = issuer;
        self
    }

    /// swaps the clock used for the footer timestamp
    pub fn with_clock<C: Clock>(self, clock: C) -> Renderer<S, C> {
        Renderer {
            source: self.source,
            settings: self.settings,
            clock,
        }
    }

    /// see `validator::validate`
    pub fn validate(&self, id: InvoiceId) -> Result<()> {
        validator::validate(&self.source, id)
    }

    /// detailed layout as a PDF
    pub fn render_detailed(&self, id: InvoiceId) -> Result<RenderedDocument> {
        let mut writer = Writer::new().with_title(format!("{TITLE} {id}"));
        self.render_detailed_on(id, &mut writer)
    }

    /// simple layout as a PDF
    pub fn render_simple(&self, id: InvoiceId) -> Result<RenderedDocument> {
        let mut writer = Writer::new().with_title(format!("{TITLE} {id}"));
        self.render_simple_on(id, &mut writer)
    }

    /// detailed layout drawn on a caller supplied canvas, which must be fresh
    pub fn render_detailed_on<C: Canvas + ?Sized>(&self, id: InvoiceId, canvas: &mut C) -> Result<RenderedDocument> {
        tracing::debug!(invoice = %id, "rendering detailed invoice");

        self.detailed(id, canvas)
            .inspect(|document| tracing::info!(invoice = %id, bytes = document.len(), "detailed invoice rendered"))
            .inspect_err(|e| tracing::warn!(invoice = %id, error = %e, "detailed invoice render failed"))
    }

    /// simple layout drawn on a caller supplied canvas, which must be fresh
    pub fn render_simple_on<C: Canvas + ?Sized>(&self, id: InvoiceId, canvas: &mut C) -> Result<RenderedDocument> {
        tracing::debug!(invoice = %id, "rendering simple invoice");

        self.simple(id, canvas)
            .inspect(|document| tracing::info!(invoice = %id, bytes = document.len(), "simple invoice rendered"))
            .inspect_err(|e| tracing::warn!(invoice = %id, error = %e, "simple invoice render failed"))
    }

    fn detailed<C: Canvas + ?Sized>(&self, id: InvoiceId, canvas: &mut C) -> Result<RenderedDocument> {
        let header = self.fetch_header(id)?;
        let items = self
            .source
            .fetch_line_items(&id)
            .map_err(|source| Error::DataAccess { invoice: id, source })?;

        tracing::debug!(invoice = %id, items = items.len(), "invoice data fetched");

        Self::title(canvas, 16.0, 10.0, 2.0);
        self.masthead(canvas, &header);
        Self::client_block(canvas, &header);

        let running_total = Self::product_table(canvas, id, &items)?;
        if self.settings.reconcile_totals {
            totals::check_running_total(&header, running_total, self.settings.tolerance)?;
        }
        tracing::debug!(invoice = %id, running_total = %running_total, subtotal = %header.subtotal, "product table laid out");

        self.summary(canvas, &header);
        Self::status_lines(canvas, &header);
        self.footer(canvas);

        Ok(RenderedDocument::from(canvas.finish()?))
    }

    fn simple<C: Canvas + ?Sized>(&self, id: InvoiceId, canvas: &mut C) -> Result<RenderedDocument> {
        let header = self.fetch_header(id)?;

        Self::title(canvas, 20.0, 15.0, 5.0);

        canvas.set_font(Style::Normal, 12.0);
        let lines = [
            format!("Número: {}", header.number),
            format!("Cliente: {}", header.client_name),
            format!("RUC/CI: {}", header.client_tax_id),
            format!("Fecha: {}", format::date(&header.issued_at)),
            format!("Total: {}", format::money(header.total)),
            format!("Estado: {}", header.status),
        ];
        for line in lines {
            canvas.cell(Cell::new(0.0, 8.0, line).and_break());
        }

        Ok(RenderedDocument::from(canvas.finish()?))
    }

    fn fetch_header(&self, id: InvoiceId) -> Result<InvoiceHeader> {
        self.source
            .fetch_invoice(&id)
            .map_err(|e| Error::from_source(id, e))
    }

    fn title<C: Canvas + ?Sized>(canvas: &mut C, size: f32, height: f32, gap: f32) {
        canvas.set_font(Style::Bold, size);
        canvas.cell(Cell::new(0.0, height, TITLE).and_alignment(TextAlignment::Center).and_break());
        canvas.feed(gap);
    }

    /// issuer identity on the left, boxed document data on the right
    fn masthead<C: Canvas + ?Sized>(&self, canvas: &mut C, header: &InvoiceHeader) {
        let issuer = &self.settings.issuer;
        let rows = [
            (
                (Style::Bold, 11.0, issuer.company_name.clone()),
                (Style::Bold, 10.0, format!("No. {}", header.number)),
                Border::TOP,
            ),
            (
                (Style::Normal, 9.0, format!("RUC: {}", issuer.tax_id)),
                (Style::Normal, 9.0, format!("Fecha de Emisión: {}", format::date(&header.issued_at))),
                Border::SIDES,
            ),
            (
                (Style::Normal, 9.0, format!("Dirección: {}", issuer.address)),
                (Style::Bold, 9.0, "CLAVE DE ACCESO:".to_string()),
                Border::SIDES,
            ),
            (
                (Style::Normal, 9.0, format!("Teléfono: {}", issuer.phone)),
                (Style::Normal, 7.0, header.access_key.clone()),
                Border::BOTTOM,
            ),
        ];

        for ((left_style, left_size, left), (right_style, right_size, right), border) in rows {
            canvas.set_font(left_style, left_size);
            canvas.cell(Cell::new(HALF, ROW, left));
            canvas.set_font(right_style, right_size);
            canvas.cell(Cell::new(HALF, ROW, right).with_border(border).and_break());
        }

        canvas.feed(4.0);
    }

    fn client_block<C: Canvas + ?Sized>(canvas: &mut C, header: &InvoiceHeader) {
        Self::section_title(canvas, "DATOS DEL CLIENTE");

        let mut fields = vec![
            ("Razón Social:", header.client_name.as_str()),
            ("RUC/CI:", header.client_tax_id.as_str()),
        ];
        if let Some(address) = header.client_address() {
            fields.push(("Dirección:", address));
        }
        if let Some(phone) = header.client_phone() {
            fields.push(("Teléfono:", phone));
        }

        for (label, value) in fields {
            canvas.set_font(Style::Bold, 9.0);
            canvas.cell(Cell::new(LABEL_WIDTH, ROW, label).with_border(Border::ALL));
            canvas.set_font(Style::Normal, 9.0);
            canvas.cell(Cell::new(VALUE_WIDTH, ROW, value).with_border(Border::ALL).and_break());
        }

        canvas.feed(4.0);
    }

    /// lays out one row per item in fetch order and returns the running total of the rows
    fn product_table<C: Canvas + ?Sized>(canvas: &mut C, id: InvoiceId, items: &[LineItem]) -> Result<Decimal> {
        Self::section_title(canvas, "DETALLE DE PRODUCTOS");

        canvas.set_font(Style::Bold, TABLE_FONT);
        for (index, (title, width)) in COLUMNS.iter().enumerate() {
            let cell = Cell::new(*width, ROW, *title)
                .with_border(Border::ALL)
                .and_alignment(TextAlignment::Center)
                .and_fill();

            canvas.cell(if index == COLUMNS.len() - 1 { cell.and_break() } else { cell });
        }

        canvas.set_font(Style::Normal, TABLE_FONT);
        let mut running_total = Decimal::ZERO;

        for item in items {
            let line_total = item.line_total().ok_or(Error::AmountOverflow(id))?;
            running_total = running_total
                .checked_add(line_total)
                .ok_or(Error::AmountOverflow(id))?;

            canvas.cell(Cell::new(COLUMNS[0].1, ROW, item.code.as_str()).with_border(Border::ALL));

            let description = format::fit_description(&item.description);
            if description.is_shortened() {
                canvas.set_font(Style::Normal, SMALL_FONT);
            }
            canvas.cell(Cell::new(COLUMNS[1].1, ROW, description.text()).with_border(Border::ALL));
            if description.is_shortened() {
                canvas.set_font(Style::Normal, TABLE_FONT);
            }

            let figures = [
                format::fixed2(item.quantity),
                format::money(item.unit_price),
                format::money(item.discount),
                format::money(line_total),
            ];
            for (index, figure) in figures.into_iter().enumerate() {
                let cell = Cell::new(COLUMNS[index + 2].1, ROW, figure)
                    .with_border(Border::ALL)
                    .and_alignment(TextAlignment::Right);

                canvas.cell(if index == 3 { cell.and_break() } else { cell });
            }
        }

        canvas.feed(4.0);
        Ok(running_total)
    }

    /// stored subtotal, tax and total, never recomputed from the items
    fn summary<C: Canvas + ?Sized>(&self, canvas: &mut C, header: &InvoiceHeader) {
        let rows = [
            ("Subtotal:", header.subtotal, false),
            (self.settings.issuer.vat_rate_label.as_str(), header.tax, false),
            ("TOTAL:", header.total, true),
        ];

        for (label, amount, emphasis) in rows {
            let (size, height, value_style) = if emphasis {
                (11.0, 8.0, Style::Bold)
            } else {
                (9.0, ROW, Style::Normal)
            };

            canvas.cell(Cell::new(SUMMARY_OFFSET, height, ""));
            canvas.set_font(Style::Bold, size);
            canvas.cell(Cell::new(SUMMARY_LABEL, height, label).with_border(Border::ALL));
            canvas.set_font(value_style, size);
            canvas.cell(
                Cell::new(SUMMARY_VALUE, height, format::money(amount))
                    .with_border(Border::ALL)
                    .and_alignment(TextAlignment::Right)
                    .and_break(),
            );
        }

        canvas.feed(6.0);
    }

    fn status_lines<C: Canvas + ?Sized>(canvas: &mut C, header: &InvoiceHeader) {
        let mut lines = vec![format!("Estado: {}", header.status)];

        if let Some(number) = header.authorization_number() {
            lines.push(format!("No. Autorización: {number}"));
        }
        if let Some(authorized_at) = header.authorized_at.as_ref() {
            lines.push(format!("Fecha Autorización: {}", format::date_time(authorized_at)));
        }
        lines.push(format!("Ambiente: {}", header.environment));

        canvas.set_font(Style::Normal, 9.0);
        for line in lines {
            canvas.cell(Cell::new(0.0, LINE, line).and_break());
        }

        canvas.feed(8.0);
    }

    fn footer<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        let generated_at = format!("Generado el: {}", format::date_time(&self.clock.now()));

        canvas.set_font(Style::Italic, 8.0);
        for line in [DISCLAIMER.to_string(), generated_at] {
            canvas.cell(Cell::new(0.0, LINE, line).and_alignment(TextAlignment::Center).and_break());
        }
    }

    fn section_title<C: Canvas + ?Sized>(canvas: &mut C, title: &str) {
        canvas.set_font(Style::Bold, 10.0);
        canvas.cell(Cell::new(WIDTH, 7.0, title).with_border(Border::ALL).and_fill().and_break());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        traits::FixedClock,
        types::{ MemorySource, RecordingCanvas, SourceError },
    };
    use chrono::{ NaiveDate, NaiveDateTime };

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap().and_hms_opt(hour, 30, 15).unwrap()
    }

    fn header() -> InvoiceHeader {
        InvoiceHeader {
            id: InvoiceId(1),
            number: "INV-001".into(),
            issued_at: at(15, 10),
            access_key: "1501202401099999999900110010010000000011234567811".into(),
            client_name: "Juan Pérez".into(),
            client_tax_id: "0912345678".into(),
            client_address: None,
            client_phone: None,
            subtotal: dec("100.00"),
            tax: dec("12.00"),
            total: dec("112.00"),
            status: "AUTORIZADO".into(),
            authorization_number: None,
            authorized_at: None,
            environment: "PRUEBAS".into(),
        }
    }

    fn item(code: &str, description: &str, quantity: &str, unit_price: &str, discount: &str) -> LineItem {
        LineItem {
            code: code.into(),
            description: description.into(),
            quantity: dec(quantity),
            unit_price: dec(unit_price),
            discount: dec(discount),
        }
    }

    fn renderer(header: InvoiceHeader, items: Vec<LineItem>) -> Renderer<MemorySource, FixedClock> {
        Renderer::new(MemorySource::new().with_invoice(header, items)).with_clock(FixedClock(at(20, 18)))
    }

    fn detailed(renderer: &Renderer<MemorySource, FixedClock>) -> (RecordingCanvas, String) {
        let mut canvas = RecordingCanvas::new();
        let document = renderer.render_detailed_on(InvoiceId(1), &mut canvas).unwrap();
        let transcript = String::from_utf8(document.into_bytes()).unwrap();
        (canvas, transcript)
    }

    struct BrokenItems;

    impl InvoiceSource for BrokenItems {
        fn fetch_invoice(&self, _: &InvoiceId) -> std::result::Result<InvoiceHeader, SourceError> {
            Ok(header())
        }

        fn fetch_line_items(&self, _: &InvoiceId) -> std::result::Result<Vec<LineItem>, SourceError> {
            Err(SourceError::access("connection reset"))
        }
    }

    #[test]
    fn scenario_single_item() {
        let renderer = renderer(header(), vec![item("P1", "Laptop bag", "2.00", "50.00", "0.00")]);
        let (_, transcript) = detailed(&renderer);

        assert!(transcript.contains("P1 | Laptop bag | 2.00 | $50.00 | $0.00 | $100.00"));
        assert!(transcript.contains("Subtotal: | $100.00"));
        assert!(transcript.contains("IVA (12%) | $12.00"));
        assert!(transcript.contains("TOTAL: | $112.00"));
    }

    #[test]
    fn sections_come_in_fixed_order() {
        let renderer = renderer(header(), vec![item("P1", "Laptop bag", "1", "100", "0")]);
        let (_, transcript) = detailed(&renderer);

        let order = [
            "FACTURA",
            "MI EMPRESA S.A. | No. INV-001",
            "RUC: 0999999999001 | Fecha de Emisión: 15/01/2024",
            "CLAVE DE ACCESO:",
            "DATOS DEL CLIENTE",
            "Razón Social: | Juan Pérez",
            "RUC/CI: | 0912345678",
            "DETALLE DE PRODUCTOS",
            "Código | Descripción | Cant. | P. Unit. | Desc. | Total",
            "Subtotal:",
            "Estado: AUTORIZADO",
            "Ambiente: PRUEBAS",
            "Documento generado electrónicamente. No requiere firma.",
            "Generado el: 20/01/2024 18:30:15",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|needle| transcript.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
            .collect();

        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{transcript}");
    }

    #[test]
    fn rows_keep_fetch_order_and_compute_totals() {
        let items = vec![
            item("Z9", "Last alphabetically", "3", "9.99", "1.50"),
            item("A1", "First alphabetically", "0.5", "10", "0"),
        ];
        let renderer = renderer(header(), items);
        let (_, transcript) = detailed(&renderer);

        let z9 = transcript.find("Z9 | Last alphabetically | 3.00 | $9.99 | $1.50 | $28.47").unwrap();
        let a1 = transcript.find("A1 | First alphabetically | 0.50 | $10.00 | $0.00 | $5.00").unwrap();
        assert!(z9 < a1);
    }

    #[test]
    fn long_description_is_shortened_with_small_font() {
        let description = "abcdefghijklmnopqrstuvwxyz0123456789ABCDE";
        let renderer = renderer(header(), vec![item("P1", description, "1", "1", "0"), item("P2", "Short", "1", "1", "0")]);
        let (canvas, _) = detailed(&renderer);

        let shortened = canvas.find("abcdefghijklmnopqrstuvwxyz0123456789A...").unwrap();
        assert_eq!(shortened.font_size, SMALL_FONT);
        assert_eq!(shortened.cell.text.chars().count(), 40);

        // the rest of the row and the next row go back to the table font
        let quantities: Vec<f32> = canvas
            .cells()
            .filter(|recorded| recorded.cell.text == "1.00")
            .map(|recorded| recorded.font_size)
            .collect();
        assert_eq!(quantities, [TABLE_FONT, TABLE_FONT]);
        assert_eq!(canvas.find("Short").unwrap().font_size, TABLE_FONT);
    }

    #[test]
    fn forty_character_description_is_verbatim() {
        let description = "x".repeat(40);
        let renderer = renderer(header(), vec![item("P1", &description, "1", "1", "0")]);
        let (canvas, _) = detailed(&renderer);

        assert_eq!(canvas.find(&description).unwrap().font_size, TABLE_FONT);
    }

    #[test]
    fn summary_uses_stored_amounts() {
        let mut stored = header();
        stored.subtotal = dec("80.00");
        stored.tax = dec("9.60");
        stored.total = dec("89.60");

        let renderer = renderer(stored, vec![item("P1", "Widget", "2", "50", "0")]);
        let (canvas, transcript) = detailed(&renderer);

        assert!(transcript.contains("Subtotal: | $80.00"));
        assert!(transcript.contains("IVA (12%) | $9.60"));
        assert!(transcript.contains("TOTAL: | $89.60"));
        assert!(transcript.contains("$100.00"));

        let total = canvas.find("$89.60").unwrap();
        assert_eq!((total.style, total.font_size), (Style::Bold, 11.0));
    }

    #[test]
    fn optional_fields_are_omitted_when_blank() {
        let mut blank = header();
        blank.client_address = Some(String::new());
        blank.authorization_number = Some(String::new());

        let renderer = renderer(blank, vec![item("P1", "Widget", "1", "1", "0")]);
        let (_, transcript) = detailed(&renderer);

        assert!(!transcript.contains("Dirección: |"));
        assert!(!transcript.contains("Teléfono: |"));
        assert!(!transcript.contains("No. Autorización"));
        assert!(!transcript.contains("Fecha Autorización"));
    }

    #[test]
    fn optional_fields_are_printed_when_set() {
        let mut full = header();
        full.client_address = Some("Calle 10 y Av. 9 de Octubre".into());
        full.client_phone = Some("0991234567".into());
        full.authorization_number = Some("1501202401099999999900110010010000000011234567811".into());
        full.authorized_at = Some(at(15, 11));

        let renderer = renderer(full, vec![item("P1", "Widget", "1", "1", "0")]);
        let (_, transcript) = detailed(&renderer);

        assert!(transcript.contains("Dirección: | Calle 10 y Av. 9 de Octubre"));
        assert!(transcript.contains("Teléfono: | 0991234567"));
        assert!(transcript.contains("No. Autorización: 1501202401099999999900110010010000000011234567811"));
        assert!(transcript.contains("Fecha Autorización: 15/01/2024 11:30:15"));
    }

    #[test]
    fn empty_invoice_renders_header_row_only() {
        let renderer = renderer(header(), Vec::new());
        let (_, transcript) = detailed(&renderer);

        let rows: Vec<&str> = transcript.lines().collect();
        let column_header = rows.iter().position(|row| row.starts_with("Código")).unwrap();
        assert!(rows[column_header + 1].starts_with("Subtotal:"));

        let mut canvas = RecordingCanvas::new();
        assert!(renderer.render_simple_on(InvoiceId(1), &mut canvas).is_ok());
    }

    #[test]
    fn issuer_comes_from_settings() {
        let issuer = Issuer {
            company_name: "Ferretería Sur".into(),
            tax_id: "0190012345001".into(),
            address: "Av. Loja 1-23".into(),
            phone: "(07) 282-0000".into(),
            vat_rate_label: "IVA (15%)".into(),
        };
        let renderer = renderer(header(), vec![item("P1", "Widget", "1", "1", "0")]).with_issuer(issuer);
        let (_, transcript) = detailed(&renderer);

        assert!(transcript.contains("Ferretería Sur | No. INV-001"));
        assert!(transcript.contains("RUC: 0190012345001"));
        assert!(transcript.contains("IVA (15%) | $12.00"));
        assert!(!transcript.contains("MI EMPRESA"));
    }

    #[test]
    fn reconciliation_is_opt_in() {
        let items = vec![item("P1", "Widget", "1", "90", "0")];

        let (_, transcript) = detailed(&renderer(header(), items.clone()));
        assert!(transcript.contains("TOTAL: | $112.00"));

        let strict = renderer(header(), items).with_settings(Settings {
            reconcile_totals: true,
            ..Settings::default()
        });
        let mut canvas = RecordingCanvas::new();
        let outcome = strict.render_detailed_on(InvoiceId(1), &mut canvas);

        assert!(matches!(outcome, Err(Error::TotalsMismatch { .. })));
    }

    #[test]
    fn simple_layout_has_six_lines() {
        let renderer = renderer(header(), Vec::new());
        let mut canvas = RecordingCanvas::new();
        let document = renderer.render_simple_on(InvoiceId(1), &mut canvas).unwrap();

        assert_eq!(
            String::from_utf8(document.into_bytes()).unwrap(),
            "FACTURA\nNúmero: INV-001\nCliente: Juan Pérez\nRUC/CI: 0912345678\nFecha: 15/01/2024\nTotal: $112.00\nEstado: AUTORIZADO"
        );
        assert_eq!(canvas.find("FACTURA").unwrap().font_size, 20.0);
    }

    #[test]
    fn unknown_invoice_is_not_found() {
        let renderer = renderer(header(), Vec::new());
        let mut canvas = RecordingCanvas::new();

        assert!(matches!(renderer.render_detailed_on(InvoiceId(2), &mut canvas), Err(Error::NotFound(InvoiceId(2)))));
        assert!(matches!(renderer.render_simple_on(InvoiceId(2), &mut canvas), Err(Error::NotFound(InvoiceId(2)))));
        assert!(canvas.instructions.is_empty());
    }

    #[test]
    fn broken_item_fetch_is_data_access() {
        let renderer = Renderer::new(BrokenItems).with_clock(FixedClock(at(20, 18)));
        let mut canvas = RecordingCanvas::new();

        match renderer.render_detailed_on(InvoiceId(1), &mut canvas) {
            Err(Error::DataAccess { invoice, source }) => {
                assert_eq!(invoice, InvoiceId(1));
                assert_eq!(source.to_string(), "connection reset");
            },
            other => panic!("expected DataAccess, got {other:?}"),
        }

        // the simple layout never asks for items
        assert!(renderer.render_simple_on(InvoiceId(1), &mut RecordingCanvas::new()).is_ok());
    }

    #[test]
    fn unrepresentable_amounts_fail_instead_of_panicking() {
        let mut huge = item("P1", "Widget", "1", "1", "0");
        huge.quantity = Decimal::MAX;
        huge.unit_price = dec("2");
        let single = renderer(header(), vec![huge]);

        assert!(matches!(
            single.render_detailed_on(InvoiceId(1), &mut RecordingCanvas::new()),
            Err(Error::AmountOverflow(InvoiceId(1)))
        ));

        let mut half = item("P1", "Widget", "1", "1", "0");
        half.unit_price = Decimal::MAX;
        let summed = renderer(header(), vec![half.clone(), half]);

        assert!(matches!(
            summed.render_detailed_on(InvoiceId(1), &mut RecordingCanvas::new()),
            Err(Error::AmountOverflow(InvoiceId(1)))
        ));
    }

    #[test]
    fn backend_failure_is_surfaced() {
        let renderer = renderer(header(), vec![item("P1", "Widget", "1", "1", "0")]);
        let mut canvas = RecordingCanvas::failing("out of memory");

        assert!(matches!(
            renderer.render_detailed_on(InvoiceId(1), &mut canvas),
            Err(Error::RenderBackend(_))
        ));
        assert!(matches!(
            renderer.render_simple_on(InvoiceId(1), &mut RecordingCanvas::failing("out of memory")),
            Err(Error::RenderBackend(_))
        ));
    }
}
