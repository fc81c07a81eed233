//! Background walks where only the newest request counts.
//!
//! Every [`WalkSession::submit`] cancels the walk before it and bumps a
//! generation counter. Finished walks report back over a channel tagged with
//! their generation, and anything older than the newest request is dropped
//! on the receiving side, so a slow superseded walk can never overwrite the
//! result of a newer one.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use super::config::TraversalConfig;
use super::node::TreeNode;
use super::walker::TreeWalker;

/// Shared flag telling a walk to stop at the next directory boundary.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Receipt for a submitted walk, naming its generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// A finished walk.
#[derive(Debug)]
pub struct Completed {
    pub generation: u64,
    pub tree: TreeNode,
}

/// Runs walks on the rayon pool, keeping only the latest request.
pub struct WalkSession {
    generation: u64,
    current: Option<CancelToken>,
    sender: Sender<Completed>,
    receiver: Receiver<Completed>,
}

impl WalkSession {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            generation: 0,
            current: None,
            sender,
            receiver,
        }
    }

    /// Generation of the most recent request, 0 before the first one.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a walk in the background, superseding any walk in flight.
    pub fn submit(&mut self, config: TraversalConfig) -> Ticket {
        self.cancel();
        self.generation += 1;

        let generation = self.generation;
        let token = CancelToken::new();
        self.current = Some(token.clone());
        let sender = self.sender.clone();

        log::debug!("walk {} submitted for {}", generation, config.root.display());
        rayon::spawn(move || {
            if let Some(tree) = TreeWalker::new(config).walk_until(&token) {
                // The session may be gone already; nobody is waiting then.
                let _ = sender.send(Completed { generation, tree });
            }
        });
        Ticket(generation)
    }

    /// Whether `ticket` is still the newest request.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }

    /// Cancel the walk in flight, if any.
    pub fn cancel(&mut self) {
        if let Some(token) = self.current.take() {
            token.cancel();
        }
    }

    /// Block until the latest request finishes.
    ///
    /// Returns `None` if nothing was submitted or the latest walk was cancelled.
    pub fn wait_latest(&mut self) -> Option<TreeNode> {
        self.current.as_ref()?;
        while let Ok(completed) = self.receiver.recv() {
            if let Some(tree) = self.accept(completed) {
                return Some(tree);
            }
        }
        None
    }

    /// Non-blocking check for the latest result.
    pub fn try_latest(&mut self) -> Option<TreeNode> {
        loop {
            match self.receiver.try_recv() {
                Ok(completed) => {
                    if let Some(tree) = self.accept(completed) {
                        return Some(tree);
                    }
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return None,
            }
        }
    }

    fn accept(&mut self, completed: Completed) -> Option<TreeNode> {
        if completed.generation != self.generation {
            log::debug!(
                "dropping superseded walk {} (latest is {})",
                completed.generation,
                self.generation
            );
            return None;
        }
        self.current = None;
        Some(completed.tree)
    }
}

impl Default for WalkSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::TestDir;

    use super::*;

    #[test]
    fn test_cancel_token_shared_between_clones() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());
    }

    #[test]
    fn test_wait_latest_without_submission() {
        let mut session = WalkSession::new();
        assert!(session.wait_latest().is_none());
        assert_eq!(session.generation(), 0);
    }

    #[test]
    fn test_latest_request_wins() {
        let first = TestDir::new();
        for i in 0..50 {
            first.add_file(&format!("dir{}/file.txt", i), "");
        }
        let second = TestDir::new();
        second.add_file("only.txt", "");

        let mut session = WalkSession::new();
        let stale = session.submit(TraversalConfig::new(first.path()));
        let latest = session.submit(TraversalConfig::new(second.path()));
        assert_eq!(latest.generation(), 2);
        assert!(stale < latest);
        assert!(!session.is_current(stale));
        assert!(session.is_current(latest));

        let tree = session.wait_latest().expect("latest walk should finish");
        assert_eq!(tree.name, second.path().display().to_string());
        assert_eq!(tree.children.len(), 1);

        // Whatever the first walk produced must never surface.
        std::thread::sleep(std::time::Duration::from_millis(50));
        assert!(session.try_latest().is_none());
    }
}
