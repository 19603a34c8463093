//! Page loaders.
//!
//! Loaders run before render, on every navigation including page-query
//! changes. Unlike the raw client calls they never propagate errors
//! across their boundary: every failure is mapped into a user-facing
//! message in [`LoadOutcome`], with missing authentication as a
//! distinct, higher-priority case that short-circuits before any request
//! is issued.

use lexnugget_client::ApiClient;
use lexnugget_core::{AreaOfLaw, Judge, Nugget};
use tracing::warn;

use crate::pagination::{PageQuery, Pagination};
use crate::token::TokenStore;

pub const FETCH_NUGGETS_FAILED_MSG: &str = "Failed to fetch nuggets";
pub const FETCH_JUDGE_FAILED_MSG: &str = "Failed to fetch judge nuggets";
pub const FETCH_AREAS_FAILED_MSG: &str = "Failed to fetch areas of law";

/// Judge pages fetch nine cards per page unless the query overrides it.
const DEFAULT_JUDGE_PAGE_LIMIT: u32 = 9;

/// Unified loader result. `NotAuthenticated` is distinct from an empty
/// `Loaded` page; a page showing it renders a login prompt instead of an
/// empty list.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome<T> {
    Loaded(T),
    NotAuthenticated,
    Failed(String),
}

impl<T> LoadOutcome<T> {
    pub fn loaded(self) -> Option<T> {
        match self {
            LoadOutcome::Loaded(t) => Some(t),
            _ => None,
        }
    }
}

/// Props for the personal-nuggets page.
#[derive(Debug, Clone, PartialEq)]
pub struct NuggetListPage {
    pub nuggets: Vec<Nugget>,
    pub pagination: Pagination,
    pub per_page: u32,
}

/// Props for a judge-detail page. The judge header rides along inside
/// the returned nuggets rather than being fetched separately.
#[derive(Debug, Clone, PartialEq)]
pub struct JudgeNuggetsPage {
    pub judge: Option<Judge>,
    pub nuggets: Vec<Nugget>,
    pub pagination: Pagination,
    pub per_page: u32,
}

/// Props for the area-of-law index page.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaListPage {
    pub areas: Vec<AreaOfLaw>,
    pub pagination: Pagination,
}

/// Load one page of the user's bookmarked nuggets.
///
/// The token is read first; absence short-circuits to
/// `NotAuthenticated` without touching the network.
pub async fn load_personal_nuggets(
    client: &ApiClient,
    tokens: &dyn TokenStore,
    query: &PageQuery,
) -> LoadOutcome<NuggetListPage> {
    let Some(token) = tokens.access_token() else {
        return LoadOutcome::NotAuthenticated;
    };
    match client.personal_nuggets(query.page, &token).await {
        Ok(page) => LoadOutcome::Loaded(NuggetListPage {
            pagination: Pagination::new(query.page, page.last_page),
            per_page: page.per_page,
            nuggets: page.data,
        }),
        Err(e) => {
            warn!(page = query.page, error = %e, "personal nuggets load failed");
            LoadOutcome::Failed(e.user_message(FETCH_NUGGETS_FAILED_MSG))
        }
    }
}

/// Load one page of a judge's nuggets. Unauthenticated.
pub async fn load_judge_nuggets(
    client: &ApiClient,
    judge_id: u64,
    query: &PageQuery,
) -> LoadOutcome<JudgeNuggetsPage> {
    let limit = query.limit.unwrap_or(DEFAULT_JUDGE_PAGE_LIMIT);
    match client.nuggets_by_judge(judge_id, query.page, limit).await {
        Ok(page) => LoadOutcome::Loaded(JudgeNuggetsPage {
            judge: page.data.first().and_then(|n| n.judge.clone()),
            pagination: Pagination::new(query.page, page.last_page),
            per_page: page.per_page,
            nuggets: page.data,
        }),
        Err(e) => {
            warn!(judge_id, page = query.page, error = %e, "judge nuggets load failed");
            LoadOutcome::Failed(e.user_message(FETCH_JUDGE_FAILED_MSG))
        }
    }
}

/// Load one page of the flat area-of-law list. Unauthenticated.
pub async fn load_areas_of_law(client: &ApiClient, query: &PageQuery) -> LoadOutcome<AreaListPage> {
    match client.areas_of_law(query.page).await {
        Ok(page) => LoadOutcome::Loaded(AreaListPage {
            pagination: Pagination::new(query.page, page.last_page),
            areas: page.data,
        }),
        Err(e) => {
            warn!(page = query.page, error = %e, "areas of law load failed");
            LoadOutcome::Failed(e.user_message(FETCH_AREAS_FAILED_MSG))
        }
    }
}
