//! # Introduction
//!
//! Factura renders a fixed-layout invoice PDF from an invoice header and its line
//! items. Built on top of pdf_writer (Typst), the crate is a layout engine and little else: it
//! formats amounts and dates, shortens long product descriptions, keeps a running total of the
//! product rows and decides which optional fields get printed. Everything around it is plugged
//! in through traits:
//!
//! - [`traits::InvoiceSource`] reads invoices and line items from wherever they are stored
//! - [`traits::Canvas`] draws cells and serializes the document
//! - [`traits::Clock`] supplies the timestamp printed in the footer
//!
//! Feature Road Map:
//! - [X] Detailed layout (masthead, client data, product table, summary, status, footer)
//! - [X] Simple one section layout
//! - [X] Validation gate
//! - [X] Configurable issuer identity and tax caption
//! - [X] Optional totals reconciliation
//! - [X] Long product tables continue on a new page
//! - [ ] Repeated table header and page numbers on continuation pages
//! - [ ] Embedded fonts other than Helvetica
//!
//! ## Links
//! PDF Writer:
//!
//! - <https://github.com/typst/pdf-writer>
//!
//! # Basic Usage
//! Build a `Renderer` around a data source, then ask it for a document. `render_detailed` and
//! `render_simple` return PDF bytes; `validate` tells whether an invoice is worth rendering.
//!
//! ```
//! use factura::types::{InvoiceId, MemorySource, Renderer, Settings};
//!
//! let fixture = r#"{
//!     "invoices": [{
//!         "id": 1,
//!         "number": "001-001-000000001",
//!         "issued_at": "2024-01-15T10:30:00",
//!         "access_key": "1501202401099999999900110010010000000011234567811",
//!         "client_name": "Juan Pérez",
//!         "client_tax_id": "0912345678",
//!         "subtotal": "100.00",
//!         "tax": "12.00",
//!         "total": "112.00",
//!         "status": "AUTORIZADO",
//!         "environment": "PRUEBAS",
//!         "items": [
//!             { "code": "P1", "description": "Laptop bag", "quantity": "2", "unit_price": "50.00" }
//!         ]
//!     }]
//! }"#;
//!
//! let source = MemorySource::from_json(fixture).unwrap();
//! let settings = Settings::from_json(r#"{ "issuer": { "company_name": "Comercial Andina S.A." } }"#).unwrap();
//! let renderer = Renderer::new(source).with_settings(settings);
//!
//! renderer.validate(InvoiceId(1)).unwrap();
//! let pdf = renderer.render_detailed(InvoiceId(1)).unwrap();
//!
//! assert!(pdf.as_bytes().starts_with(b"%PDF-"));
//! ```
pub mod traits;
pub mod types;
