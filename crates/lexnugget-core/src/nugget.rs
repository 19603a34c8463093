//! Case-law record types as served by the nugget backend.

use serde::{Deserialize, Serialize};

/// A judge referenced by nuggets and fetched for judge-detail pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Judge {
    pub id: u64,
    pub fullname: String,
}

/// A flat area-of-law category. No hierarchy exists in the data model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaOfLaw {
    pub id: u64,
    pub name: String,
    pub display_name: String,
}

/// Wire wrapper for a nugget's area-of-law tag: `{"area_of_law": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaOfLawTag {
    pub area_of_law: AreaRef,
}

/// The subset of [`AreaOfLaw`] embedded in a nugget's tag list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaRef {
    pub id: u64,
    pub display_name: String,
}

/// Wire wrapper for a nugget's keyword tag: `{"keyword": {"value": ...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordTag {
    pub keyword: KeywordValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordValue {
    pub value: String,
}

/// A case-law excerpt ("nugget").
///
/// The client holds a read-only, possibly-stale copy per page fetch; only
/// the bookmark flag is ever mutated locally, and that copy is discarded
/// on navigation away.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nugget {
    pub id: u64,
    pub title: String,
    pub principle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headnote: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dl_citation_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_citations: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub judge: Option<Judge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub judge_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    #[serde(default)]
    pub area_of_laws: Vec<AreaOfLawTag>,
    #[serde(default)]
    pub keywords: Vec<KeywordTag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub courts: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(default)]
    pub is_bookmarked: bool,
}

impl Nugget {
    /// Preferred citation for display: `citation_no`, falling back to the
    /// DL citation number.
    pub fn display_citation(&self) -> Option<&str> {
        self.citation_no
            .as_deref()
            .or(self.dl_citation_no.as_deref())
    }

    /// Display headline: the headnote when present, else the title.
    pub fn headline(&self) -> &str {
        self.headnote.as_deref().unwrap_or(&self.title)
    }

    /// Publication status, defaulting to "Published" when absent.
    pub fn status_label(&self) -> &str {
        self.status.as_deref().unwrap_or("Published")
    }

    pub fn keyword_values(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(|k| k.keyword.value.as_str())
    }

    pub fn area_names(&self) -> impl Iterator<Item = &str> {
        self.area_of_laws
            .iter()
            .map(|a| a.area_of_law.display_name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trimmed from a live /nuggets/judge/{id} response.
    const NUGGET_JSON: &str = r#"{
        "id": 42,
        "title": "Republic v High Court; Ex parte Attorney-General",
        "principle": "Certiorari lies to quash a decision made without jurisdiction.",
        "headnote": "Supervisory jurisdiction of the Supreme Court",
        "quote": "The writ issues as of right where the defect is patent.",
        "dl_citation_no": "[2019] DLSC 7721",
        "year": 2019,
        "judge": {"id": 3, "fullname": "Sophia Akuffo"},
        "judge_title": "CJ",
        "page_number": 14,
        "area_of_laws": [{"area_of_law": {"id": 5, "display_name": "Constitutional Law"}}],
        "keywords": [{"keyword": {"value": "certiorari"}}, {"keyword": {"value": "jurisdiction"}}],
        "is_bookmarked": true
    }"#;

    #[test]
    fn nugget_parses_backend_shape() {
        let n: Nugget = serde_json::from_str(NUGGET_JSON).unwrap();
        assert_eq!(n.id, 42);
        assert_eq!(n.judge.as_ref().unwrap().fullname, "Sophia Akuffo");
        assert_eq!(n.area_names().collect::<Vec<_>>(), ["Constitutional Law"]);
        assert_eq!(
            n.keyword_values().collect::<Vec<_>>(),
            ["certiorari", "jurisdiction"]
        );
        assert!(n.is_bookmarked);
    }

    #[test]
    fn sparse_nugget_defaults() {
        let n: Nugget = serde_json::from_str(
            r#"{"id": 1, "title": "T", "principle": "P"}"#,
        )
        .unwrap();
        assert!(n.keywords.is_empty());
        assert!(n.area_of_laws.is_empty());
        assert!(!n.is_bookmarked);
        assert_eq!(n.status_label(), "Published");
        assert_eq!(n.headline(), "T");
        assert_eq!(n.display_citation(), None);
    }

    #[test]
    fn citation_prefers_citation_no() {
        let mut n: Nugget =
            serde_json::from_str(r#"{"id": 1, "title": "T", "principle": "P"}"#).unwrap();
        n.dl_citation_no = Some("[2019] DLSC 7721".into());
        assert_eq!(n.display_citation(), Some("[2019] DLSC 7721"));
        n.citation_no = Some("GLR 123".into());
        assert_eq!(n.display_citation(), Some("GLR 123"));
    }

    #[test]
    fn tag_types_are_reachable_from_the_crate_root() {
        use crate::{AreaOfLawTag, AreaRef, KeywordTag, KeywordValue};

        let area = AreaOfLawTag {
            area_of_law: AreaRef {
                id: 5,
                display_name: "Equity".into(),
            },
        };
        let keyword = KeywordTag {
            keyword: KeywordValue {
                value: "estoppel".into(),
            },
        };
        assert_eq!(area.area_of_law.display_name, "Equity");
        assert_eq!(keyword.keyword.value, "estoppel");
    }

    #[test]
    fn headline_prefers_headnote() {
        let n: Nugget = serde_json::from_str(NUGGET_JSON).unwrap();
        assert_eq!(n.headline(), "Supervisory jurisdiction of the Supreme Court");
    }
}
