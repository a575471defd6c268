//! Hooks for watching a search step by step.
//!
//! The solver calls [SearchObserver::observe] synchronously after every expansion and
//! relaxation, so an observer that blocks (to draw a frame, or to wait for a key press)
//! paces the search. Observers only get shared access to the grid and cannot change the
//! search state.
use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::IndexSet;

use crate::grid::Grid;

type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// What the search just did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchEvent {
    /// `current` was taken off the frontier and is about to be expanded.
    Expand,
    /// `neighbor` got a cheaper route through `current` and was put on the frontier.
    Relax { neighbor: Point },
    /// `current` is the goal and the path is complete.
    Complete,
}

/// Whether the search should carry on after an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Flow {
    #[default]
    Continue,
    Stop,
}

/// The state of a search at the moment an event was emitted.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    pub grid: &'a Grid,
    pub start: Point,
    pub goal: Point,
    pub current: Point,
    /// Empty unless `current` is the goal.
    pub path: &'a [Point],
    pub event: SearchEvent,
}

pub trait SearchObserver {
    fn observe(&mut self, snapshot: &Snapshot<'_>) -> Flow;
}

impl<F> SearchObserver for F
where
    F: FnMut(&Snapshot<'_>) -> Flow,
{
    fn observe(&mut self, snapshot: &Snapshot<'_>) -> Flow {
        self(snapshot)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpObserver;

impl SearchObserver for NoOpObserver {
    fn observe(&mut self, _: &Snapshot<'_>) -> Flow {
        Flow::Continue
    }
}

/// One recorded event, detached from the grid borrow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedEvent {
    pub event: SearchEvent,
    pub current: Point,
    pub path: Vec<Point>,
}

/// Keeps every event of a search, e.g. to replay it frame by frame afterwards.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub events: Vec<RecordedEvent>,
    /// Expanded cells in the order they were first expanded.
    pub expanded: FxIndexSet<Point>,
    /// Stop the search once this many events have been recorded.
    pub stop_after: Option<usize>,
}

impl Recorder {
    pub fn new() -> Recorder {
        Recorder::default()
    }
    pub fn stopping_after(events: usize) -> Recorder {
        Recorder {
            stop_after: Some(events),
            ..Recorder::default()
        }
    }
    pub fn relaxations(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e.event, SearchEvent::Relax { .. }))
            .count()
    }
}

impl SearchObserver for Recorder {
    fn observe(&mut self, snapshot: &Snapshot<'_>) -> Flow {
        if snapshot.event == SearchEvent::Expand {
            self.expanded.insert(snapshot.current);
        }
        self.events.push(RecordedEvent {
            event: snapshot.event,
            current: snapshot.current,
            path: snapshot.path.to_vec(),
        });
        match self.stop_after {
            Some(n) if self.events.len() >= n => Flow::Stop,
            _ => Flow::Continue,
        }
    }
}
