//! Backend endpoint URL builders.
//!
//! Pure functions so request targets can be asserted in tests without a
//! network. Citations may contain `/`, `&`, or spaces and are
//! percent-encoded before insertion into a path segment.

pub fn generate_digest(base: &str) -> String {
    format!("{base}/cases/digest")
}

pub fn digest_by_citation(base: &str, citation: &str) -> String {
    format!("{base}/case-digests/{}", urlencoding::encode(citation))
}

pub fn digest_from_ai(base: &str) -> String {
    format!("{base}/cases/get-case-digest")
}

pub fn bookmark_add(base: &str) -> String {
    format!("{base}/bookmark-nugget")
}

pub fn bookmark_remove(base: &str, nugget_id: u64) -> String {
    format!("{base}/bookmark-nugget/{nugget_id}")
}

pub fn personal_nuggets(base: &str, page: u32) -> String {
    format!("{base}/personal-nuggets?page={page}")
}

pub fn areas_of_law(base: &str, page: u32) -> String {
    format!("{base}/area-of-law?page={page}")
}

pub fn nuggets_by_judge(base: &str, judge_id: u64, page: u32, limit: u32) -> String {
    format!("{base}/nuggets/judge/{judge_id}?page={page}&limit={limit}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://api.example.test";

    #[test]
    fn citation_with_slash_and_ampersand_is_escaped() {
        let citation = "[2019] DLSC 7721/A&B";
        let url = digest_by_citation(BASE, citation);
        assert_eq!(
            url,
            "https://api.example.test/case-digests/%5B2019%5D%20DLSC%207721%2FA%26B"
        );
        // No raw reserved characters leak into the path segment.
        let segment = url.rsplit('/').next().unwrap();
        assert!(!segment.contains('&'));
        assert!(!segment.contains('['));
    }

    #[test]
    fn escaped_citation_round_trips() {
        let citation = "[2019] DLSC 7721/A&B";
        let encoded = urlencoding::encode(citation);
        assert_eq!(urlencoding::decode(&encoded).unwrap(), citation);
    }

    #[test]
    fn list_urls_carry_page_params() {
        assert_eq!(
            personal_nuggets(BASE, 3),
            "https://api.example.test/personal-nuggets?page=3"
        );
        assert_eq!(
            nuggets_by_judge(BASE, 17, 2, 9),
            "https://api.example.test/nuggets/judge/17?page=2&limit=9"
        );
        assert_eq!(
            areas_of_law(BASE, 1),
            "https://api.example.test/area-of-law?page=1"
        );
    }

    #[test]
    fn bookmark_urls() {
        assert_eq!(bookmark_add(BASE), "https://api.example.test/bookmark-nugget");
        assert_eq!(
            bookmark_remove(BASE, 42),
            "https://api.example.test/bookmark-nugget/42"
        );
    }

    #[test]
    fn digest_urls() {
        assert_eq!(generate_digest(BASE), "https://api.example.test/cases/digest");
        assert_eq!(
            digest_from_ai(BASE),
            "https://api.example.test/cases/get-case-digest"
        );
    }
}
