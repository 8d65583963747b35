use crate::core::domain::Identifiable;
use crate::core::library::BookKind;

pub mod model;

pub trait Book: Identifiable {
    fn title(&self) -> &str;
    fn author(&self) -> &str;
    fn isbn(&self) -> &str;
    fn kind(&self) -> &BookKind;

    // describe renders the base fields first and, for an e-book, the file format after them.
    fn describe(&self) -> Vec<String> {
        let mut lines = vec![format!("Title: {}, Author: {}, ISBN: {}", self.title(), self.author(), self.isbn())];
        if let BookKind::EBook { file_format } = self.kind() {
            lines.push(format!("File Format: {}", file_format.as_deref().unwrap_or("unspecified")));
        }
        lines
    }
}
