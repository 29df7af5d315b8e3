//! # 맥주 CSV 적재 서비스
//!
//! 부트스트랩 단계에서 `resources/csvdata/beer.csv`를 읽어 맥주 엔티티로 변환합니다.
//!
//! ## 변환 규칙
//!
//! | CSV 컬럼 | Beer 필드 | 규칙 |
//! |----------|-----------|------|
//! | `beer` | `beer_name` | 50자를 넘으면 47자 + `...` |
//! | `style` | `beer_style` | [`style_for`] 매핑, 모르는 스타일은 PILSNER |
//! | `row` | `upc` | 문자열로 변환 |
//! | `count.x` | `quantity_on_hand` | 그대로 |
//! | - | `price` | 10 |

use std::fs::File;
use std::io::Read;
use std::path::Path;
use rust_decimal::Decimal;
use singleton_macro::service;
use crate::{
    core::errors::{AppError, AppResult, ErrorContext},
    domain::{
        entities::{Beer, BeerStyle},
        models::BeerCsvRecord,
    },
    utils::string_utils::abbreviate,
};

/// 맥주 이름 최대 길이
const MAX_BEER_NAME_LEN: usize = 50;

/// CSV로 적재되는 맥주의 가격
const CSV_BEER_PRICE: i64 = 10;

/// CSV 스타일 이름을 맥주 스타일로 매핑합니다.
pub fn style_for(csv_style: &str) -> BeerStyle {
    match csv_style.trim() {
        "American Pale Lager" => BeerStyle::Lager,
        "American Pale Ale (APA)"
        | "American Black Ale"
        | "Belgian Dark Ale"
        | "American Blonde Ale" => BeerStyle::Ale,
        "American IPA" | "American Double / Imperial IPA" | "Belgian IPA" => BeerStyle::Ipa,
        "American Porter" => BeerStyle::Porter,
        "Oatmeal Stout" | "American Stout" => BeerStyle::Stout,
        "Saison / Farmhouse Ale" => BeerStyle::Saison,
        "Fruit / Vegetable Beer" | "Winter Warmer" | "Berliner Weissbier" => BeerStyle::Wheat,
        "English Pale Ale" => BeerStyle::PaleAle,
        _ => BeerStyle::Pilsner,
    }
}

#[service(name = "beercsv")]
pub struct BeerCsvService {
    // 외부 의존성 없음
}

impl BeerCsvService {
    /// CSV 파일을 읽어 레코드 목록으로 변환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 파일이 없음
    /// * `AppError::InternalError` - 파일을 읽을 수 없음
    pub fn convert_csv(&self, path: &Path) -> AppResult<Vec<BeerCsvRecord>> {
        if !path.exists() {
            return Err(AppError::NotFound(format!("CSV file {} not found", path.display())));
        }

        let file = File::open(path)
            .with_context(|| format!("CSV 파일 열기 실패 {}", path.display()))?;

        self.parse_records(file)
    }

    /// 헤더가 있는 CSV를 파싱합니다.
    ///
    /// 형식이 맞지 않는 행은 경고를 남기고 건너뜁니다.
    pub fn parse_records<R: Read>(&self, reader: R) -> AppResult<Vec<BeerCsvRecord>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        let mut skipped = 0usize;

        for result in csv_reader.deserialize::<BeerCsvRecord>() {
            match result {
                Ok(record) => records.push(record),
                Err(e) if e.is_io_error() => {
                    return Err(e).context("CSV 읽기 실패");
                }
                Err(e) => {
                    skipped += 1;
                    log::warn!("⚠️ CSV 행 건너뜀: {}", e);
                }
            }
        }

        if skipped > 0 {
            log::warn!("⚠️ CSV 파싱: {}건 적재, {}건 건너뜀", records.len(), skipped);
        }

        Ok(records)
    }

    pub fn to_beer(&self, record: &BeerCsvRecord) -> Beer {
        Beer::new(
            abbreviate(&record.beer, MAX_BEER_NAME_LEN),
            style_for(&record.style),
            record.row.to_string(),
            Decimal::from(CSV_BEER_PRICE),
            record.count_x,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "row,count.x,abv,ibu,id,beer,style_id,style,brewery_id,ounces,style2,count.y,city,state,label\n";

    fn service() -> BeerCsvService {
        BeerCsvService {}
    }

    #[test]
    fn test_parse_records_reads_all_rows() {
        let data = format!(
            "{}{}{}",
            HEADER,
            "1,1,0.05,,1436,Pub Beer,1,American Pale Lager,408,12,American Pale Lager,1,Minneapolis,MN,Pub\n",
            "2,2,0.066,,2265,Devil's Cup,2,American Pale Ale (APA),177,12,American Pale Ale (APA),2,Anchorage,AK,\n",
        );

        let records = service().parse_records(data.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].beer, "Pub Beer");
        assert_eq!(records[0].count_x, Some(1));
        assert_eq!(records[0].ibu, None);
        assert_eq!(records[1].style, "American Pale Ale (APA)");
        assert_eq!(records[1].abv, Some(0.066));
    }

    #[test]
    fn test_parse_records_skips_malformed_rows() {
        let data = format!(
            "{}{}{}",
            HEADER,
            "not-a-number,1,0.05,,1436,Pub Beer,1,American Pale Lager,408,12,American Pale Lager,1,Minneapolis,MN,Pub\n",
            "3,3,0.07,45,2264,Rise of the Phoenix,3,American IPA,177,12,American IPA,3,Anchorage,AK,Phoenix\n",
        );

        let records = service().parse_records(data.as_bytes()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].row, 3);
    }

    #[test]
    fn test_convert_csv_missing_file() {
        let result = service().convert_csv(Path::new("does/not/exist.csv"));
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_style_mapping() {
        assert_eq!(style_for("American Pale Lager"), BeerStyle::Lager);
        assert_eq!(style_for("Belgian Dark Ale"), BeerStyle::Ale);
        assert_eq!(style_for("American Double / Imperial IPA"), BeerStyle::Ipa);
        assert_eq!(style_for("American Porter"), BeerStyle::Porter);
        assert_eq!(style_for("Oatmeal Stout"), BeerStyle::Stout);
        assert_eq!(style_for("Saison / Farmhouse Ale"), BeerStyle::Saison);
        assert_eq!(style_for("Winter Warmer"), BeerStyle::Wheat);
        assert_eq!(style_for("English Pale Ale"), BeerStyle::PaleAle);
        assert_eq!(style_for("Kölsch"), BeerStyle::Pilsner);
    }

    #[test]
    fn test_to_beer_applies_conversion_rules() {
        let data = format!(
            "{}{}",
            HEADER,
            "17,4,0.06,,2262,Sex and Candy and a Very Long Name That Keeps Going On,4,American IPA,177,12,American IPA,4,Anchorage,AK,\n",
        );
        let records = service().parse_records(data.as_bytes()).unwrap();

        let beer = service().to_beer(&records[0]);

        assert_eq!(beer.beer_name.chars().count(), 50);
        assert!(beer.beer_name.ends_with("..."));
        assert_eq!(beer.beer_style, BeerStyle::Ipa);
        assert_eq!(beer.upc, "17");
        assert_eq!(beer.quantity_on_hand, Some(4));
        assert_eq!(beer.price, Decimal::from(10));
        assert_eq!(beer.version, 0);
    }

    #[test]
    fn test_bundled_csv_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("resources/csvdata/beer.csv");
        let records = service().convert_csv(&path).unwrap();

        assert!(records.len() >= 10);
        assert!(records.iter().any(|r| r.beer.chars().count() > MAX_BEER_NAME_LEN));
    }
}
