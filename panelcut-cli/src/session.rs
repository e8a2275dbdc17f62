use crate::config::CutConfig;
use crate::parse::parse_dimension;
use crate::sink::LayoutSink;
use anyhow::Result;
use log::{debug, info, warn};
use panelcut::CutError;
use panelcut::entities::Job;
use panelcut::geometry::Dimension;
use panelcut::packer::{Packing, pack_job};
use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Progress of a single cutting conversation
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    /// Waiting for the size of the stock sheet
    #[default]
    AwaitingStock,
    /// Stock is known, parts are being collected one line at a time
    CollectingParts {
        stock: Dimension,
        parts: Vec<Dimension>,
    },
}

/// Response to a line fed into a [`CutSession`]
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    StockAccepted(Dimension),
    /// A part was added, `count` parts are collected so far
    PartAdded { dim: Dimension, count: usize },
    /// The line could not be used, the session state is unchanged
    Rejected(CutError),
    /// The part list was closed and packed, the session starts over
    Finished(Packing),
}

/// Collects a stock size and a list of parts from user input, line by line.
/// Holds no packing state: the full part list is handed to the packer in one call.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CutSession {
    state: SessionState,
}

impl CutSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn feed(&mut self, line: &str, config: &CutConfig) -> Reply {
        match &mut self.state {
            SessionState::AwaitingStock => match parse_dimension(line) {
                Ok(stock) => {
                    self.state = SessionState::CollectingParts {
                        stock,
                        parts: vec![],
                    };
                    Reply::StockAccepted(stock)
                }
                Err(err) => Reply::Rejected(err),
            },
            SessionState::CollectingParts { stock, parts } => {
                if config.is_finish_keyword(line) {
                    let job = Job::new(*stock, parts.drain(..));
                    self.state = SessionState::AwaitingStock;
                    return Reply::Finished(pack_job(&job));
                }
                match parse_dimension(line) {
                    Ok(dim) => {
                        parts.push(dim);
                        Reply::PartAdded {
                            dim,
                            count: parts.len(),
                        }
                    }
                    Err(err) => Reply::Rejected(err),
                }
            }
        }
    }
}

/// Cutting sessions keyed by session id (a chat id, a user name, ...).
/// Owned by the caller; every session is independent of all others.
#[derive(Debug, Clone)]
pub struct SessionStore<K> {
    sessions: HashMap<K, CutSession>,
}

impl<K> Default for SessionStore<K> {
    fn default() -> Self {
        SessionStore {
            sessions: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Display + Debug + Clone> SessionStore<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fresh session, discarding any unfinished one with the same id
    pub fn start(&mut self, id: K) {
        debug!("[SESSION] starting session {id}");
        self.sessions.insert(id, CutSession::new());
    }

    /// Discards the session, returns true if it existed
    pub fn cancel(&mut self, id: &K) -> bool {
        self.sessions.remove(id).is_some()
    }

    pub fn get(&self, id: &K) -> Option<&CutSession> {
        self.sessions.get(id)
    }

    pub fn contains(&self, id: &K) -> bool {
        self.sessions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Feeds a line into the session with the given id.
    /// Returns `None` if there is no such session.
    /// A finished packing is delivered to `sink`, after which the session is removed.
    /// If the delivery fails the session is rolled back to before the finish keyword,
    /// so feeding the keyword again retries.
    pub fn feed(
        &mut self,
        id: &K,
        line: &str,
        config: &CutConfig,
        sink: &mut impl LayoutSink,
    ) -> Result<Option<Reply>> {
        let Some(session) = self.sessions.get_mut(id) else {
            return Ok(None);
        };
        let rollback = config.is_finish_keyword(line).then(|| session.clone());
        let reply = session.feed(line, config);

        if let Reply::Finished(packing) = &reply {
            if let Err(err) = sink.deliver(&id.to_string(), packing) {
                if let Some(previous) = rollback {
                    *session = previous;
                }
                warn!("[SESSION] session {id}: layout could not be delivered, session kept");
                return Err(err.context(format!("delivering the layout of session {id}")));
            }
            self.sessions.remove(id);
            info!(
                "[SESSION] session {id} finished: {} sheet(s), {} oversize part(s)",
                packing.sheets.len(),
                packing.oversize.len()
            );
        }

        Ok(Some(reply))
    }
}
