//! Board graph: adjacency and jump lines.

use std::collections::VecDeque;
use std::sync::{Arc, OnceLock};

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::config::TIGER_COUNT;
use crate::core::Position;
use crate::error::{Error, Result};

/// Nodes on the standard board.
pub const NODE_COUNT: usize = 23;

/// The apex of the standard board.
pub const APEX: u8 = 0;

/// Cell ranges of the standard board's rows, top to bottom.
pub const ROWS: [std::ops::RangeInclusive<u8>; 4] = [1..=6, 7..=12, 13..=18, 19..=22];

/// Landing geometry of a capture: jump over `over`, land on `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Jump {
    pub over: Position,
    pub to: Position,
}

/// Immutable board topology.
///
/// Holds adjacency for simple moves and jump triples for captures, plus
/// the tiger start cells. Built once through `BoardBuilder` and shared
/// read-only behind an `Arc`.
#[derive(Clone, Debug)]
pub struct Board {
    adjacency: Vec<SmallVec<[Position; 6]>>,
    jumps: Vec<SmallVec<[Jump; 4]>>,
    jump_index: FxHashSet<(Position, Position, Position)>,
    tiger_starts: [Position; TIGER_COUNT],
}

impl Board {
    /// The shared standard Aadu Puli Aattam board.
    pub fn standard() -> Arc<Board> {
        static STANDARD: OnceLock<Arc<Board>> = OnceLock::new();
        STANDARD
            .get_or_init(|| {
                Arc::new(
                    BoardBuilder::standard()
                        .build()
                        .expect("standard topology is well-formed"),
                )
            })
            .clone()
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Is `p` a node of this board?
    #[must_use]
    pub fn contains(&self, p: Position) -> bool {
        p.index() < self.node_count()
    }

    /// All nodes, ascending.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        Position::all(self.node_count())
    }

    /// Nodes directly connected to `p`, ascending. Empty for unknown ids.
    #[must_use]
    pub fn neighbors(&self, p: Position) -> &[Position] {
        self.adjacency.get(p.index()).map_or(&[], |n| n.as_slice())
    }

    /// Capture geometries starting at `p`, in the order their jump lines
    /// were added to the builder (forward leg before reverse leg).
    #[must_use]
    pub fn jumps_from(&self, p: Position) -> &[Jump] {
        self.jumps.get(p.index()).map_or(&[], |j| j.as_slice())
    }

    #[must_use]
    pub fn is_adjacent(&self, u: Position, v: Position) -> bool {
        self.neighbors(u).binary_search(&v).is_ok()
    }

    /// Is `(from, over, to)` a jump triple?
    #[must_use]
    pub fn is_jump(&self, from: Position, over: Position, to: Position) -> bool {
        self.jump_index.contains(&(from, over, to))
    }

    /// Where the tigers stand when a game starts.
    #[must_use]
    pub fn tiger_starts(&self) -> &[Position; TIGER_COUNT] {
        &self.tiger_starts
    }

    /// Number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|n| n.len()).sum::<usize>() / 2
    }

    /// Number of directed jump triples.
    #[must_use]
    pub fn jump_count(&self) -> usize {
        self.jump_index.len()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Board(nodes={}, edges={}, jumps={})",
            self.node_count(),
            self.edge_count(),
            self.jump_count()
        )
    }
}

/// Builder for board topologies.
///
/// Edges are undirected. Jump lines are given once as `a - b - c` and
/// produce both `(a, b, c)` and `(c, b, a)`. Each cell's jumps keep the
/// order the lines were added in; move generation tries captures in
/// that order.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    node_count: usize,
    edges: Vec<(u8, u8)>,
    lines: Vec<(u8, u8, u8)>,
    tiger_starts: Option<[u8; TIGER_COUNT]>,
}

impl BoardBuilder {
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            edges: Vec::new(),
            lines: Vec::new(),
            tiger_starts: None,
        }
    }

    /// The standard 23-node board.
    ///
    /// Apex diagonals reach the four inner cells of the first row; rows are
    /// fully connected horizontally; every column runs vertically through
    /// the first three rows; only the four centre columns continue into the
    /// bottom row. The bottom triangle has no diagonal jumps.
    pub fn standard() -> Self {
        let mut builder = Self::new(NODE_COUNT);

        for inner in 2..=5 {
            builder = builder.edge(APEX, inner);
        }
        for col in 1..=6 {
            builder = builder.path(&[col, col + 6, col + 12]);
        }
        for col in 2..=5 {
            // Bottom row sits under the centre columns: 14-19 .. 17-22.
            builder = builder.edge(col + 12, col + 17);
        }

        // Jump lines in capture order: rows, apex diagonals, columns
        // through the first three rows, then the centre columns' lower legs.
        for row in ROWS {
            let cells: Vec<u8> = row.collect();
            builder = builder.path(&cells);
            for w in cells.windows(3) {
                builder = builder.jump_line(w[0], w[1], w[2]);
            }
        }
        for col in 2..=5 {
            builder = builder.jump_line(APEX, col, col + 6);
        }
        for col in 1..=6 {
            builder = builder.jump_line(col, col + 6, col + 12);
        }
        for col in 2..=5 {
            builder = builder.jump_line(col + 6, col + 12, col + 17);
        }

        builder.tiger_starts([APEX, 3, 4])
    }

    /// Add an undirected edge.
    pub fn edge(mut self, u: u8, v: u8) -> Self {
        self.edges.push((u, v));
        self
    }

    /// Add edges between consecutive cells.
    pub fn path(mut self, cells: &[u8]) -> Self {
        for w in cells.windows(2) {
            self.edges.push((w[0], w[1]));
        }
        self
    }

    /// Add a straight jump line `a - over - c` in both directions.
    pub fn jump_line(mut self, a: u8, over: u8, c: u8) -> Self {
        self.lines.push((a, over, c));
        self
    }

    /// Set the tiger start cells.
    pub fn tiger_starts(mut self, starts: [u8; TIGER_COUNT]) -> Self {
        self.tiger_starts = Some(starts);
        self
    }

    /// Validate and freeze the topology.
    ///
    /// Rejects out-of-range ids, self-loops, jump lines whose legs are not
    /// edges, duplicate or missing tiger starts, and disconnected graphs.
    pub fn build(self) -> Result<Board> {
        let n = self.node_count;
        if n == 0 || n > u8::MAX as usize {
            return Err(Error::topology(format!("node count {n} out of range")));
        }
        let in_range = |id: u8| (id as usize) < n;

        let mut adjacency: Vec<SmallVec<[Position; 6]>> = vec![SmallVec::new(); n];
        for &(u, v) in &self.edges {
            if !in_range(u) || !in_range(v) {
                return Err(Error::topology(format!("edge {u}-{v} leaves the board")));
            }
            if u == v {
                return Err(Error::topology(format!("self-loop at {u}")));
            }
            for (a, b) in [(u, v), (v, u)] {
                let list = &mut adjacency[a as usize];
                if !list.contains(&Position(b)) {
                    list.push(Position(b));
                }
            }
        }
        for list in &mut adjacency {
            list.sort_unstable();
        }

        let mut jumps: Vec<SmallVec<[Jump; 4]>> = vec![SmallVec::new(); n];
        let mut jump_index = FxHashSet::default();
        for &(a, over, c) in &self.lines {
            if ![a, over, c].into_iter().all(in_range) {
                return Err(Error::topology(format!("jump {a}-{over}-{c} leaves the board")));
            }
            let leg = |x: u8, y: u8| adjacency[x as usize].contains(&Position(y));
            if a == c || !leg(a, over) || !leg(over, c) {
                return Err(Error::topology(format!("jump {a}-{over}-{c} is not a line")));
            }
            for (from, to) in [(a, c), (c, a)] {
                let triple = (Position(from), Position(over), Position(to));
                if jump_index.insert(triple) {
                    jumps[from as usize].push(Jump {
                        over: Position(over),
                        to: Position(to),
                    });
                }
            }
        }
        let starts = self
            .tiger_starts
            .ok_or_else(|| Error::topology("tiger start cells not set"))?;
        for (i, &s) in starts.iter().enumerate() {
            if !in_range(s) {
                return Err(Error::topology(format!("tiger start {s} leaves the board")));
            }
            if starts[..i].contains(&s) {
                return Err(Error::topology(format!("duplicate tiger start {s}")));
            }
        }

        let reached = reachable_from(&adjacency, 0);
        if reached < n {
            return Err(Error::topology(format!(
                "only {reached} of {n} nodes are reachable"
            )));
        }

        Ok(Board {
            adjacency,
            jumps,
            jump_index,
            tiger_starts: starts.map(Position),
        })
    }
}

fn reachable_from(adjacency: &[SmallVec<[Position; 6]>], start: usize) -> usize {
    let mut seen = vec![false; adjacency.len()];
    let mut queue = VecDeque::from([start]);
    seen[start] = true;
    let mut count = 1;
    while let Some(u) = queue.pop_front() {
        for v in &adjacency[u] {
            if !seen[v.index()] {
                seen[v.index()] = true;
                count += 1;
                queue.push_back(v.index());
            }
        }
    }
    count
}
