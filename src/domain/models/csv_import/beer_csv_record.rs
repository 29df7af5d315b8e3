//! 맥주 CSV 레코드
//!
//! `resources/csvdata/beer.csv`의 한 행입니다. 헤더는 다음과 같습니다.
//!
//! ```text
//! row,count.x,abv,ibu,id,beer,style_id,style,brewery_id,ounces,style2,count.y,city,state,label
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeerCsvRecord {
    pub row: i32,

    #[serde(rename = "count.x")]
    pub count_x: Option<i32>,

    /// 알코올 도수 (비어 있을 수 있음)
    pub abv: Option<f64>,

    /// 쓴맛 지수 (비어 있을 수 있음)
    pub ibu: Option<f64>,

    pub id: i32,

    pub beer: String,

    #[serde(rename = "style_id")]
    pub style_id: Option<i32>,

    pub style: String,

    #[serde(rename = "brewery_id")]
    pub brewery_id: Option<i32>,

    pub ounces: Option<f64>,

    pub style2: Option<String>,

    #[serde(rename = "count.y")]
    pub count_y: Option<i32>,

    pub city: Option<String>,

    pub state: Option<String>,

    pub label: Option<String>,
}
