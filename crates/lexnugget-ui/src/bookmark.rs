//! Bookmark toggle state machine.
//!
//! Each displayed nugget owns one [`BookmarkToggle`]; there is no
//! cross-record coordination. States are `Idle { bookmarked }` and
//! `InFlight`, with at most one outstanding request per record.

use lexnugget_client::ApiClient;
use tracing::warn;

use crate::token::TokenStore;

pub const LOGIN_REQUIRED_MSG: &str = "You must be logged in to bookmark nuggets";
pub const TOGGLE_FAILED_MSG: &str = "Failed to update bookmark. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Idle { bookmarked: bool },
    InFlight { was_bookmarked: bool },
}

/// The request a successfully guarded toggle must issue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BookmarkRequest {
    Add,
    Remove,
}

/// Outcome of the toggle entry guard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToggleStart {
    Request(BookmarkRequest),
    /// A request for this record is already outstanding; ignored.
    AlreadyInFlight,
    /// No token present; no state change, no network call.
    NotAuthenticated,
}

#[derive(Debug)]
pub struct BookmarkToggle {
    state: State,
    error: Option<String>,
}

impl BookmarkToggle {
    pub fn new(bookmarked: bool) -> Self {
        Self {
            state: State::Idle { bookmarked },
            error: None,
        }
    }

    /// Displayed bookmark flag. While a request is in flight the
    /// pre-toggle value is still shown; the flip happens on completion.
    pub fn is_bookmarked(&self) -> bool {
        match self.state {
            State::Idle { bookmarked } => bookmarked,
            State::InFlight { was_bookmarked } => was_bookmarked,
        }
    }

    pub fn in_flight(&self) -> bool {
        matches!(self.state, State::InFlight { .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Entry guard. On acceptance the machine moves to `InFlight` and
    /// yields the request to issue: `Add` when currently unbookmarked,
    /// `Remove` when bookmarked.
    pub fn begin(&mut self, token_present: bool) -> ToggleStart {
        let bookmarked = match self.state {
            State::InFlight { .. } => return ToggleStart::AlreadyInFlight,
            State::Idle { bookmarked } => bookmarked,
        };
        if !token_present {
            self.error = Some(LOGIN_REQUIRED_MSG.to_string());
            return ToggleStart::NotAuthenticated;
        }
        self.error = None;
        self.state = State::InFlight {
            was_bookmarked: bookmarked,
        };
        ToggleStart::Request(if bookmarked {
            BookmarkRequest::Remove
        } else {
            BookmarkRequest::Add
        })
    }

    /// Resolve the outstanding request. Success flips the flag; failure
    /// restores the pre-toggle flag and sets the error message. Returns
    /// whether the displayed flag changed, so a containing list can bump
    /// its refresh key. A completion with no request outstanding is
    /// ignored.
    pub fn complete(&mut self, outcome: Result<(), String>) -> bool {
        let State::InFlight { was_bookmarked } = self.state else {
            return false;
        };
        match outcome {
            Ok(()) => {
                self.state = State::Idle {
                    bookmarked: !was_bookmarked,
                };
                self.error = None;
                true
            }
            Err(message) => {
                self.state = State::Idle {
                    bookmarked: was_bookmarked,
                };
                self.error = Some(message);
                false
            }
        }
    }
}

/// Drive one toggle through the state machine against the backend.
///
/// The token is read from the store at the start of this operation, not
/// cached from earlier ones. Exactly one request is issued per accepted
/// transition and awaited to completion; there is no retry, cancellation,
/// or timeout. Returns whether the bookmark flag changed.
pub async fn toggle_bookmark(
    toggle: &mut BookmarkToggle,
    client: &ApiClient,
    nugget_id: u64,
    tokens: &dyn TokenStore,
) -> bool {
    let token = tokens.access_token();
    match (toggle.begin(token.is_some()), token) {
        (ToggleStart::Request(request), Some(token)) => {
            let result = match request {
                BookmarkRequest::Add => client.add_bookmark(nugget_id, &token).await,
                BookmarkRequest::Remove => client.remove_bookmark(nugget_id, &token).await,
            };
            toggle.complete(result.map_err(|e| {
                warn!(nugget_id, error = %e, "bookmark toggle failed");
                TOGGLE_FAILED_MSG.to_string()
            }))
        }
        _ => false,
    }
}
