//! CSV 적재 모델

pub mod beer_csv_record;

pub use beer_csv_record::BeerCsvRecord;
