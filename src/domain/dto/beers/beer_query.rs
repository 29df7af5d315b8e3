//! 맥주 목록 조회 쿼리 파라미터
//!
//! `GET /api/v1/beer?beerName=IPA&beerStyle=IPA&showInventory=false&pageNumber=2&pageSize=50`

use serde::Deserialize;
use crate::domain::dto::page::PageRequest;
use crate::domain::entities::BeerStyle;
use crate::utils::string_utils::non_blank;

/// 알 수 없는 `beerStyle` 값이나 숫자가 아닌 페이지 값은
/// 역직렬화 단계에서 실패하여 400으로 응답됩니다.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeerListQuery {
    pub beer_name: Option<String>,
    pub beer_style: Option<BeerStyle>,
    pub show_inventory: Option<bool>,
    pub page_number: Option<i64>,
    pub page_size: Option<i64>,
}

impl BeerListQuery {
    /// 공백이 아닌 이름 검색어
    pub fn name_filter(&self) -> Option<&str> {
        non_blank(&self.beer_name).map(str::trim)
    }

    /// `showInventory=false`가 명시된 경우에만 재고를 숨깁니다.
    pub fn hides_inventory(&self) -> bool {
        self.show_inventory == Some(false)
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::of(self.page_number, self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::web::Query;

    #[test]
    fn test_parse_full_query_string() {
        let query = Query::<BeerListQuery>::from_query(
            "beerName=IPA&beerStyle=PALE_ALE&showInventory=false&pageNumber=2&pageSize=50",
        )
        .unwrap()
        .into_inner();

        assert_eq!(query.name_filter(), Some("IPA"));
        assert_eq!(query.beer_style, Some(BeerStyle::PaleAle));
        assert!(query.hides_inventory());
        assert_eq!(query.page_request(), PageRequest { page: 1, size: 50 });
    }

    #[test]
    fn test_empty_query_uses_defaults() {
        let query = Query::<BeerListQuery>::from_query("").unwrap().into_inner();

        assert_eq!(query.name_filter(), None);
        assert_eq!(query.beer_style, None);
        assert!(!query.hides_inventory());
        assert_eq!(query.page_request(), PageRequest::default());
    }

    #[test]
    fn test_show_inventory_true_keeps_inventory() {
        let query = Query::<BeerListQuery>::from_query("showInventory=true").unwrap().into_inner();
        assert!(!query.hides_inventory());
    }

    #[test]
    fn test_blank_name_is_no_filter() {
        let query = Query::<BeerListQuery>::from_query("beerName=%20%20").unwrap().into_inner();
        assert_eq!(query.name_filter(), None);
    }

    #[test]
    fn test_unknown_style_is_rejected() {
        assert!(Query::<BeerListQuery>::from_query("beerStyle=LAMBIC").is_err());
        assert!(Query::<BeerListQuery>::from_query("pageSize=lots").is_err());
    }
}
