//! 테마별 추천 검색어
//!
//! 장소 추천 화면의 테마 버튼이 사용하는 고정 테이블입니다.
//! 검색어는 그대로 [`PlaceService::search`](super::PlaceService::search)에 넘겨집니다.

const THEME_KEYWORDS: &[(&str, &[&str])] = &[
    ("바다", &["해수욕장", "해변", "바다 전망 카페", "항구"]),
    ("캠핑", &["캠핑장", "글램핑", "오토캠핑장", "차박"]),
    ("드라이브", &["드라이브 코스", "전망대", "호수공원", "휴게소"]),
    ("맛집", &["맛집", "한식", "카페", "베이커리"]),
    ("도심", &["쇼핑몰", "박물관", "공원", "영화관"]),
    ("산", &["등산로", "자연휴양림", "계곡", "사찰"]),
];

/// 테마의 추천 검색어. 모르는 테마면 `None`.
pub fn recommended_keywords(theme: &str) -> Option<&'static [&'static str]> {
    let theme = theme.trim();

    THEME_KEYWORDS
        .iter()
        .find(|(name, _)| *name == theme)
        .map(|(_, keywords)| *keywords)
}

/// 지원하는 테마 이름 목록
pub fn themes() -> impl Iterator<Item = &'static str> {
    THEME_KEYWORDS.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_theme_returns_keywords() {
        assert_eq!(
            recommended_keywords("바다"),
            Some(&["해수욕장", "해변", "바다 전망 카페", "항구"][..])
        );
        assert_eq!(recommended_keywords(" 캠핑 ").map(|k| k.len()), Some(4));
    }

    #[test]
    fn test_unknown_theme_returns_none() {
        assert_eq!(recommended_keywords("우주"), None);
        assert_eq!(recommended_keywords(""), None);
    }

    #[test]
    fn test_every_theme_has_keywords() {
        for theme in themes() {
            let keywords = recommended_keywords(theme).unwrap();
            assert!(!keywords.is_empty(), "{} 테마에 검색어가 없습니다", theme);
        }
        assert_eq!(themes().count(), THEME_KEYWORDS.len());
    }
}
