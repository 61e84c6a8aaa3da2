//! The joiner: waits until every task of a set has terminated.

use crate::events::DispatchEvent;
use crate::task::{RequestTask, TaskSet};
use std::time::Instant;

/// What [`join_all`] observed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Joined {
    /// Tasks joined. Always equal to the size of the set.
    pub tasks: usize,
    /// Tasks that were torn down instead of finishing, e.g. because the
    /// runtime shut down underneath them.
    pub aborted: usize,
}

/// Waits for every task in `tasks` to terminate.
///
/// This is a barrier, not a fail-fast join: failed requests were already
/// reported by their own tasks, so it keeps waiting until the last task is
/// done and never returns an error. Tasks are awaited in dispatch order, but
/// they run and finish in any order.
///
/// There is no deadline. A request that never completes keeps this future
/// pending forever.
pub async fn join_all(tasks: TaskSet) -> Joined {
    let TaskSet { tasks, config, .. } = tasks;
    let mut joined = Joined::default();

    for RequestTask { target, handle } in tasks {
        if let Err(err) = handle.await {
            joined.aborted += 1;

            #[cfg(feature = "tracing")]
            tracing::error!(
                dispatcher = %config.name,
                index = target.index,
                url = %target.url,
                error = %err,
                "request task did not run to completion"
            );
            #[cfg(not(feature = "tracing"))]
            let _ = (&target, err);
        }
        joined.tasks += 1;
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        dispatcher = %config.name,
        tasks = joined.tasks,
        aborted = joined.aborted,
        "joined request tasks"
    );

    config.event_listeners.emit(&DispatchEvent::AllJoined {
        source_name: config.name.clone(),
        timestamp: Instant::now(),
        tasks: joined.tasks,
        aborted: joined.aborted,
    });

    joined
}
