//! 페이지 요청과 페이지 응답

use serde::{Deserialize, Serialize};

/// 정규화된 페이지 요청 (0부터 시작하는 페이지 번호)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
}

impl PageRequest {
    pub const DEFAULT_PAGE: u64 = 0;
    pub const DEFAULT_PAGE_SIZE: u64 = 25;
    pub const MAX_PAGE_SIZE: u64 = 1000;

    /// 쿼리 문자열 값으로 페이지 요청을 만듭니다.
    ///
    /// - `page_number`는 1부터 시작합니다. 없거나 0 이하이면 첫 페이지입니다.
    /// - `page_size`가 없거나 0 이하이면 25, 1000을 넘으면 1000입니다.
    pub fn of(page_number: Option<i64>, page_size: Option<i64>) -> Self {
        let page = match page_number {
            Some(n) if n > 0 => (n - 1) as u64,
            _ => Self::DEFAULT_PAGE,
        };

        let size = match page_size {
            Some(s) if s > Self::MAX_PAGE_SIZE as i64 => Self::MAX_PAGE_SIZE,
            Some(s) if s > 0 => s as u64,
            _ => Self::DEFAULT_PAGE_SIZE,
        };

        Self { page, size }
    }

    /// 건너뛸 문서 수
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: Self::DEFAULT_PAGE,
            size: Self::DEFAULT_PAGE_SIZE,
        }
    }
}

/// 페이지 응답
///
/// ```json
/// {
///   "content": [ ... ],
///   "totalElements": 2410,
///   "totalPages": 97,
///   "number": 0,
///   "size": 25,
///   "numberOfElements": 25,
///   "first": true,
///   "last": false,
///   "empty": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u64,
    /// 0부터 시작하는 현재 페이지 번호
    pub number: u64,
    pub size: u64,
    pub number_of_elements: u64,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        let total_pages = if request.size == 0 {
            0
        } else {
            total_elements.div_ceil(request.size)
        };

        Self {
            number_of_elements: content.len() as u64,
            empty: content.is_empty(),
            content,
            total_elements,
            total_pages,
            number: request.page,
            size: request.size,
            first: request.page == 0,
            last: request.page + 1 >= total_pages,
        }
    }

    /// 내용만 변환하고 페이지 정보는 유지합니다.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            number: self.number,
            size: self.size,
            number_of_elements: self.number_of_elements,
            first: self.first,
            last: self.last,
            empty: self.empty,
        }
    }
}
