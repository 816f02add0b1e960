mod json_rows_importer;

pub use json_rows_importer::JsonRowsImporter;
