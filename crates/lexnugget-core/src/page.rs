//! Paginated list envelope.
//!
//! List endpoints answer in two wire shapes: a meta-nested envelope
//! (`{"data": [...], "meta": {"last_page", "per_page", ...}}`) and a flat
//! paginator (`{"current_page", "data", "last_page", "per_page", "total",
//! ...}`). Both deserialise into the one [`Page`] struct.

use serde::{Deserialize, Serialize};

const DEFAULT_PER_PAGE: u32 = 10;

/// One page of an ordered entity list, with normalised pagination
/// metadata.
///
/// `current_page` is whatever the backend reported; loaders overwrite it
/// with the requested page number, since the page query parameter is the
/// source of truth. The client never clamps pages into `[1, last_page]`,
/// that is the backend's contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub current_page: u32,
    pub per_page: u32,
    pub last_page: u32,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[derive(Deserialize)]
struct Meta {
    #[serde(default)]
    current_page: Option<u32>,
    #[serde(default)]
    per_page: Option<u32>,
    #[serde(default)]
    last_page: Option<u32>,
    #[serde(default)]
    total: Option<u64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Wire<T> {
    MetaNested { data: Vec<T>, meta: Meta },
    Flat {
        data: Vec<T>,
        #[serde(default)]
        current_page: Option<u32>,
        #[serde(default)]
        per_page: Option<u32>,
        #[serde(default)]
        last_page: Option<u32>,
        #[serde(default)]
        total: Option<u64>,
    },
}

fn normalise<T>(
    data: Vec<T>,
    current_page: Option<u32>,
    per_page: Option<u32>,
    last_page: Option<u32>,
    total: Option<u64>,
) -> Page<T> {
    let per_page = per_page.unwrap_or(DEFAULT_PER_PAGE).max(1);
    let total = total.unwrap_or(data.len() as u64);
    // Some endpoints omit last_page and report only a total count.
    let last_page = last_page.unwrap_or_else(|| {
        (total.div_ceil(per_page as u64) as u32).max(1)
    });
    Page {
        data,
        current_page: current_page.unwrap_or(1),
        per_page,
        last_page,
        total,
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Page<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(match Wire::deserialize(deserializer)? {
            Wire::MetaNested { data, meta } => normalise(
                data,
                meta.current_page,
                meta.per_page,
                meta.last_page,
                meta.total,
            ),
            Wire::Flat {
                data,
                current_page,
                per_page,
                last_page,
                total,
            } => normalise(data, current_page, per_page, last_page, total),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nugget::AreaOfLaw;
    use serde_json::json;

    #[test]
    fn meta_nested_shape() {
        let page: Page<u64> = serde_json::from_value(json!({
            "data": [1, 2, 3],
            "meta": {"current_page": 2, "last_page": 7, "per_page": 10, "total": 63}
        }))
        .unwrap();
        assert_eq!(page.data, vec![1, 2, 3]);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.last_page, 7);
        assert_eq!(page.total, 63);
    }

    #[test]
    fn flat_paginator_shape() {
        let page: Page<AreaOfLaw> = serde_json::from_value(json!({
            "current_page": 1,
            "data": [{"id": 5, "name": "constitutional", "display_name": "Constitutional Law"}],
            "first_page_url": "https://api.example/area-of-law?page=1",
            "last_page": 3,
            "per_page": 15,
            "total": 41
        }))
        .unwrap();
        assert_eq!(page.data[0].display_name, "Constitutional Law");
        assert_eq!(page.last_page, 3);
        assert_eq!(page.per_page, 15);
    }

    #[test]
    fn last_page_derived_from_total() {
        // nuggets-by-judge reports only {total, per_page}.
        let page: Page<u64> = serde_json::from_value(json!({
            "data": [1],
            "meta": {"total": 19, "per_page": 9}
        }))
        .unwrap();
        assert_eq!(page.last_page, 3);
        assert_eq!(page.current_page, 1);
    }

    #[test]
    fn empty_page_defaults() {
        let page: Page<u64> =
            serde_json::from_value(json!({"data": [], "meta": {}})).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.last_page, 1);
        assert_eq!(page.per_page, 10);
    }
}
