//! Kakao Local 키워드 검색 응답 모델
//!
//! `GET /v2/local/search/keyword.json` 응답을 그대로 역직렬화합니다.
//! 누락될 수 있는 문자열 필드는 모두 빈 문자열로 채웁니다.

use serde::Deserialize;

/// 키워드 검색 응답 본문
#[derive(Debug, Clone, Deserialize)]
pub struct KakaoKeywordResponse {
    pub documents: Vec<KakaoPlace>,
    pub meta: KakaoMeta,
}

/// 검색 결과 메타 정보
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KakaoMeta {
    #[serde(default)]
    pub total_count: u32,
    #[serde(default)]
    pub pageable_count: u32,
    #[serde(default)]
    pub is_end: bool,
}

/// 검색된 장소 한 건
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct KakaoPlace {
    pub id: String,
    pub place_name: String,
    pub address_name: String,
    pub road_address_name: String,
    pub category_name: String,
    pub phone: String,
    /// 경도
    pub x: String,
    /// 위도
    pub y: String,
    pub place_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_keyword_response() {
        let body = r#"{
            "documents": [{
                "id": "8129424",
                "place_name": "해운대해수욕장",
                "address_name": "부산 해운대구 우동",
                "road_address_name": "",
                "category_name": "여행 > 관광,명소 > 해수욕장,해변",
                "category_group_code": "AT4",
                "x": "129.158",
                "y": "35.158",
                "place_url": "http://place.map.kakao.com/8129424"
            }],
            "meta": { "total_count": 41, "pageable_count": 41, "is_end": false }
        }"#;

        let parsed: KakaoKeywordResponse = serde_json::from_str(body).unwrap();

        assert_eq!(parsed.documents.len(), 1);
        assert_eq!(parsed.documents[0].place_name, "해운대해수욕장");
        assert_eq!(parsed.documents[0].phone, "");
        assert_eq!(parsed.meta.total_count, 41);
        assert!(!parsed.meta.is_end);
    }
}
