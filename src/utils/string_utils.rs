//! # 문자열 유틸리티
//!
//! 패치 병합, CSV 적재, 검증 응답에서 공통으로 쓰는 문자열 함수들입니다.

use serde::Deserialize;

/// 공백이 아닌 문자가 하나라도 있는지 검사합니다.
pub fn has_text(value: &str) -> bool {
    !value.trim().is_empty()
}

/// `Option<String>`이 의미 있는 텍스트를 담고 있을 때만 참조를 돌려줍니다.
pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| has_text(s))
}

pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 최대 길이를 넘는 문자열을 `...`로 줄입니다.
///
/// 결과 길이는 `max_len`을 넘지 않습니다 (문자 단위).
pub fn abbreviate(value: &str, max_len: usize) -> String {
    const ELLIPSIS: &str = "...";

    if value.chars().count() <= max_len {
        return value.to_string();
    }
    if max_len <= ELLIPSIS.len() {
        return value.chars().take(max_len).collect();
    }

    let mut shortened: String = value.chars().take(max_len - ELLIPSIS.len()).collect();
    shortened.push_str(ELLIPSIS);
    shortened
}

/// snake_case 식별자를 camelCase로 변환합니다.
///
/// `beer_name` → `beerName`
pub fn to_camel_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut upper_next = false;

    for c in value.chars() {
        if c == '_' {
            upper_next = !result.is_empty();
        } else if upper_next {
            result.extend(c.to_uppercase());
            upper_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}
