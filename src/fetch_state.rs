//! Loading, error and data state of the posts fetch.
//!
//! A fetch goes through two transitions: [`FetchState::start`] when the
//! request is sent and [`FetchState::finish`] when it completes. Each fetch
//! holds a [`FetchTicket`] from a [`FetchGeneration`]; a completion whose
//! ticket is no longer the latest is dropped.

use crate::error::FetchError;
use crate::post::{Post, PostsPage};

/// Fetched data and its status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchState {
    /// Posts of the last successful fetch.
    pub posts: Vec<Post>,
    /// Total posts reported by the server.
    pub total: u32,
    pub loading: bool,
    /// Banner message of the last failed fetch.
    pub error: Option<String>,
}

impl Default for FetchState {
    fn default() -> Self {
        Self {
            posts: Vec::new(),
            total: 0,
            loading: true,
            error: None,
        }
    }
}

impl FetchState {
    /// State while a fetch is in flight. Rows stay visible.
    pub fn start(&self) -> Self {
        Self {
            loading: true,
            error: None,
            ..self.clone()
        }
    }

    /// State after a fetch completes.
    ///
    /// A failure keeps the previous rows and sets the banner message.
    pub fn finish(&self, result: Result<PostsPage, FetchError>) -> Self {
        match result {
            Ok(page) => Self {
                posts: page.posts,
                total: page.total,
                loading: false,
                error: None,
            },
            Err(e) => Self {
                loading: false,
                error: Some(e.banner().to_string()),
                ..self.clone()
            },
        }
    }
}

/// Identifies one fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Issues fetch tickets. Only the most recent ticket is current.
#[derive(Debug, Default)]
pub struct FetchGeneration {
    latest: u64,
}

impl FetchGeneration {
    pub fn issue(&mut self) -> FetchTicket {
        self.latest += 1;
        FetchTicket(self.latest)
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Finish `state` with `result`, or `None` if `ticket` was superseded.
    pub fn complete(
        &self,
        ticket: FetchTicket,
        state: &FetchState,
        result: Result<PostsPage, FetchError>,
    ) -> Option<FetchState> {
        self.is_current(ticket).then(|| state.finish(result))
    }
}
