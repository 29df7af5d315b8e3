//! 맥주 스타일

use std::fmt;
use serde::{Deserialize, Serialize};

/// 맥주 스타일
///
/// JSON, 쿼리 문자열, MongoDB 문서 모두 `PALE_ALE` 같은 대문자 스네이크 표기를 사용합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BeerStyle {
    Lager,
    Pilsner,
    Stout,
    Gose,
    Porter,
    Ale,
    Wheat,
    Ipa,
    PaleAle,
    Saison,
}

impl BeerStyle {
    pub const ALL: [BeerStyle; 10] = [
        BeerStyle::Lager,
        BeerStyle::Pilsner,
        BeerStyle::Stout,
        BeerStyle::Gose,
        BeerStyle::Porter,
        BeerStyle::Ale,
        BeerStyle::Wheat,
        BeerStyle::Ipa,
        BeerStyle::PaleAle,
        BeerStyle::Saison,
    ];

    /// 저장 및 필터에 쓰이는 문자열 표기
    pub fn as_str(&self) -> &'static str {
        match self {
            BeerStyle::Lager => "LAGER",
            BeerStyle::Pilsner => "PILSNER",
            BeerStyle::Stout => "STOUT",
            BeerStyle::Gose => "GOSE",
            BeerStyle::Porter => "PORTER",
            BeerStyle::Ale => "ALE",
            BeerStyle::Wheat => "WHEAT",
            BeerStyle::Ipa => "IPA",
            BeerStyle::PaleAle => "PALE_ALE",
            BeerStyle::Saison => "SAISON",
        }
    }
}

impl fmt::Display for BeerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_uses_screaming_snake_case() {
        for style in BeerStyle::ALL {
            let json = serde_json::to_string(&style).unwrap();
            assert_eq!(json, format!("\"{}\"", style.as_str()));
        }

        let parsed: BeerStyle = serde_json::from_str("\"PALE_ALE\"").unwrap();
        assert_eq!(parsed, BeerStyle::PaleAle);
    }

    #[test]
    fn test_unknown_style_is_rejected() {
        assert!(serde_json::from_str::<BeerStyle>("\"PaleAle\"").is_err());
        assert!(serde_json::from_str::<BeerStyle>("\"LAMBIC\"").is_err());
    }
}
