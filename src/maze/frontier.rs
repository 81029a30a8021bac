use std::collections::VecDeque;

/// A discovered cell waiting to be expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierNode {
    pub x: isize,
    pub y: isize,
    /// Path length from the park cell.
    pub depth: usize,
}

/// Where a node goes back into the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Expanded next: grows long corridors.
    Front,
    /// Expanded after everything queued: grows many short branches.
    Back,
}

/// Maps a uniform draw in `0..10` to queue placements.
#[derive(Debug, Clone, Copy)]
pub struct InsertionPolicy {
    complexity: i32,
}

impl InsertionPolicy {
    /// Upper bound (exclusive) of the draw the policy consumes.
    pub const DRAW_RANGE: u32 = 10;

    #[must_use]
    pub fn new(complexity: i32) -> Self {
        Self { complexity }
    }

    /// Placement of the newly discovered node.
    #[must_use]
    pub fn next_placement(&self, draw: u32) -> Placement {
        if i64::from(draw) < i64::from(self.complexity.unsigned_abs()) {
            Placement::Front
        } else {
            Placement::Back
        }
    }

    /// Placement of the node that was just expanded. Only non-positive
    /// complexity pulls it back to the front.
    #[must_use]
    pub fn current_placement(&self, draw: u32) -> Placement {
        if self.complexity <= 0 && i64::from(draw) < -i64::from(self.complexity) {
            Placement::Front
        } else {
            Placement::Back
        }
    }
}

/// How many nodes went to each end of the queue during a build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrontierStats {
    pub front: usize,
    pub back: usize,
}

impl FrontierStats {
    /// Share of insertions that went to the front, in `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn front_ratio(&self) -> f64 {
        let total = self.front + self.back;
        if total == 0 {
            0.0
        } else {
            self.front as f64 / total as f64
        }
    }
}

/// Work queue of frontier nodes.
#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<FrontierNode>,
    stats: FrontierStats,
}

impl Frontier {
    /// Creates a queue holding only `start`.
    #[must_use]
    pub fn new(start: FrontierNode) -> Self {
        Self {
            queue: VecDeque::from([start]),
            stats: FrontierStats::default(),
        }
    }

    /// Removes the head of the queue.
    pub fn pop(&mut self) -> Option<FrontierNode> {
        self.queue.pop_front()
    }

    pub fn push(&mut self, node: FrontierNode, placement: Placement) {
        match placement {
            Placement::Front => {
                self.stats.front += 1;
                self.queue.push_front(node);
            }
            Placement::Back => {
                self.stats.back += 1;
                self.queue.push_back(node);
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> FrontierStats {
        self.stats
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn node(x: isize, depth: usize) -> FrontierNode {
        FrontierNode { x, y: 0, depth }
    }

    #[test]
    fn zero_complexity_always_appends() {
        let policy = InsertionPolicy::new(0);
        for draw in 0..InsertionPolicy::DRAW_RANGE {
            assert_eq!(policy.next_placement(draw), Placement::Back);
            assert_eq!(policy.current_placement(draw), Placement::Back);
        }
    }

    #[test]
    fn full_complexity_always_prepends_new_node() {
        let policy = InsertionPolicy::new(10);
        for draw in 0..InsertionPolicy::DRAW_RANGE {
            assert_eq!(policy.next_placement(draw), Placement::Front);
            assert_eq!(policy.current_placement(draw), Placement::Back);
        }
    }

    #[test]
    fn negative_complexity_also_pulls_current_node_forward() {
        let policy = InsertionPolicy::new(-4);
        assert_eq!(policy.next_placement(3), Placement::Front);
        assert_eq!(policy.current_placement(3), Placement::Front);
        assert_eq!(policy.next_placement(4), Placement::Back);
        assert_eq!(policy.current_placement(4), Placement::Back);
    }

    #[test]
    fn queue_respects_placement_and_counts() {
        let mut frontier = Frontier::new(node(0, 0));
        frontier.push(node(1, 1), Placement::Back);
        frontier.push(node(2, 1), Placement::Front);
        assert_eq!(frontier.len(), 3);
        assert_eq!(frontier.pop().unwrap().x, 2);
        assert_eq!(frontier.pop().unwrap().x, 0);
        assert_eq!(frontier.pop().unwrap().x, 1);
        assert!(frontier.is_empty());
        let stats = frontier.stats();
        assert_eq!((stats.front, stats.back), (1, 1));
        assert!((stats.front_ratio() - 0.5).abs() < 1e-12);
    }
}
