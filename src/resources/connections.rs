//! Connection graph: which dots the player has linked, in click order.
//!
//! The graph only knows dot indices. Entities, positions and the drawn lines
//! live in the ECS world; [`Session`](crate::resources::session::Session)
//! maps indices back to entities.
//!
//! The rule is asymmetric: a dot that has been the *target* of a click can
//! never be targeted again, but it can still be the *source* of further
//! connections. The very first selection of a round counts as targeted.

/// A drawn link between two distinct dot indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    pub from: usize,
    pub to: usize,
}

/// Result of feeding one click into the graph.
///
/// None of these are errors; invalid clicks are silent no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectResult {
    /// A new connection was created from the last selection to the clicked dot.
    Connected(Connection),
    /// The clicked dot was already targeted; it becomes the new selection.
    AlreadyTargeted,
    /// There was no selection yet; the clicked dot is now the first one.
    NoSelectionYet,
    /// The click did not hit any dot.
    MissedAllPoints,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionGraph {
    last: Option<usize>,
    targeted: Vec<usize>,
    connections: Vec<Connection>,
}

impl ConnectionGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a click on dot `to`, using the last selection as the source.
    pub fn try_connect(&mut self, to: usize) -> ConnectResult {
        let result = match self.last {
            None => {
                if !self.is_targeted(to) {
                    self.targeted.push(to);
                }
                ConnectResult::NoSelectionYet
            }
            Some(_) if self.is_targeted(to) => ConnectResult::AlreadyTargeted,
            Some(from) => {
                debug_assert_ne!(from, to, "a selected dot is always targeted");
                let connection = Connection { from, to };
                self.connections.push(connection);
                self.targeted.push(to);
                ConnectResult::Connected(connection)
            }
        };
        self.last = Some(to);
        result
    }

    /// True when every one of `total` dots has been targeted.
    pub fn is_fully_connected(&self, total: usize) -> bool {
        self.targeted.len() == total
    }

    pub fn is_targeted(&self, index: usize) -> bool {
        self.targeted.contains(&index)
    }

    /// The pending source for the next connection.
    pub fn last_selection(&self) -> Option<usize> {
        self.last
    }

    /// Targeted dot indices in click order.
    pub fn targeted(&self) -> &[usize] {
        &self.targeted
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    pub fn reset(&mut self) {
        self.last = None;
        self.targeted.clear();
        self.connections.clear();
    }
}
