//! Search tree with arena allocation.
//!
//! Nodes live in one `Vec` and refer to each other by `NodeId`. Children are
//! owned by the arena; the parent link is a plain index, so there is no
//! ownership cycle.

use crate::error::MoveError;
use crate::game::{Board, Player};

/// Index of a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone)]
pub struct MctsNode {
    board: Board,
    /// Column that led here from the parent; `None` for the root.
    action: Option<usize>,
    parent: Option<NodeId>,
    /// Legal actions not yet expanded. Popped from the back.
    untried: Vec<usize>,
    children: Vec<NodeId>,
    visits: u32,
    /// Sum of rollout payoffs, always from player A's perspective.
    reward_sum: f64,
}

impl MctsNode {
    fn new(board: Board, parent: Option<NodeId>, action: Option<usize>) -> Self {
        let untried = if board.is_terminal() {
            Vec::new()
        } else {
            board.legal_actions()
        };
        MctsNode {
            board,
            action,
            parent,
            untried,
            children: Vec::new(),
            visits: 0,
            reward_sum: 0.0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn action(&self) -> Option<usize> {
        self.action
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn untried_actions(&self) -> &[usize] {
        &self.untried
    }

    pub fn visits(&self) -> u32 {
        self.visits
    }

    pub fn reward_sum(&self) -> f64 {
        self.reward_sum
    }

    pub fn is_fully_expanded(&self) -> bool {
        self.untried.is_empty()
    }

    /// Mean payoff from A's perspective; 0 before the first visit.
    pub fn average_reward(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.reward_sum / self.visits as f64
        }
    }

    /// UCB1 score for choosing this node as a child of a parent with
    /// `parent_visits` visits, oriented so that the chooser always maximizes.
    ///
    /// For A this is `avg + bonus`; for B it is `-(avg - bonus)`, which ranks
    /// children exactly as minimizing `avg - bonus` would.
    pub fn ucb_score(&self, parent_visits: u32, chooser: Player, exploration: f64) -> f64 {
        debug_assert!(self.visits > 0, "UCB evaluated on an unvisited child");
        let bonus = (exploration * (parent_visits as f64).ln() / self.visits as f64).sqrt();
        chooser.sign() as f64 * self.average_reward() + bonus
    }
}

/// Search tree rooted at one board snapshot.
#[derive(Debug)]
pub struct MctsTree {
    nodes: Vec<MctsNode>,
}

impl MctsTree {
    pub fn new(root_board: Board) -> Self {
        let mut nodes = Vec::with_capacity(1024);
        nodes.push(MctsNode::new(root_board, None, None));
        MctsTree { nodes }
    }

    /// Root node ID (always 0).
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &MctsNode {
        &self.nodes[id.0]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &MctsNode)> {
        self.nodes.iter().enumerate().map(|(i, node)| (NodeId(i), node))
    }

    /// Pop one untried action from `id`, build the successor, and attach it
    /// as a new child. Returns `None` if the node has nothing left to expand.
    pub fn expand(&mut self, id: NodeId) -> Result<Option<NodeId>, MoveError> {
        let Some(action) = self.nodes[id.0].untried.pop() else {
            return Ok(None);
        };
        let board = self.nodes[id.0].board.apply_move(action)?;
        let child_id = NodeId(self.nodes.len());
        self.nodes.push(MctsNode::new(board, Some(id), Some(action)));
        self.nodes[id.0].children.push(child_id);
        Ok(Some(child_id))
    }

    /// Child with the best UCB1 score for the side to move at `id`.
    /// Ties go to the lowest column.
    pub fn select_child(&self, id: NodeId, exploration: f64) -> Option<NodeId> {
        let node = self.get(id);
        let chooser = node.board.current_player()?;
        best_by(self, &node.children, |child| {
            child.ucb_score(node.visits, chooser, exploration)
        })
    }

    /// Child with the best average reward for the side to move at `id`, with
    /// no exploration term. Ties go to the most visited, then the lowest
    /// column.
    pub fn best_child(&self, id: NodeId) -> Option<NodeId> {
        let node = self.get(id);
        let chooser = node.board.current_player()?;
        let sign = chooser.sign() as f64;

        let mut best: Option<(NodeId, f64)> = None;
        for &child_id in &node.children {
            let child = self.get(child_id);
            let score = sign * child.average_reward();
            let better = match best {
                None => true,
                Some((best_id, best_score)) => {
                    let incumbent = self.get(best_id);
                    score > best_score
                        || (score == best_score
                            && (child.visits, std::cmp::Reverse(child.action))
                                > (incumbent.visits, std::cmp::Reverse(incumbent.action)))
                }
            };
            if better {
                best = Some((child_id, score));
            }
        }
        best.map(|(id, _)| id)
    }

    /// Add one visit and `reward` to `id` and every ancestor up to the root.
    pub fn backpropagate(&mut self, id: NodeId, reward: f64) {
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = &mut self.nodes[node_id.0];
            node.visits += 1;
            node.reward_sum += reward;
            current = node.parent;
        }
    }
}

/// Highest-scoring child; equal scores go to the lowest column.
fn best_by(
    tree: &MctsTree,
    children: &[NodeId],
    score: impl Fn(&MctsNode) -> f64,
) -> Option<NodeId> {
    let mut best: Option<(NodeId, f64)> = None;
    for &child_id in children {
        let child = tree.get(child_id);
        let s = score(child);
        let better = match best {
            None => true,
            Some((best_id, best_score)) => {
                s > best_score || (s == best_score && child.action < tree.get(best_id).action)
            }
        };
        if better {
            best = Some((child_id, s));
        }
    }
    best.map(|(id, _)| id)
}
