//! Explicit game trees for search unit tests.

use crate::core::Player;
use crate::rules::{ActionList, Game};

/// Shape of a hand-written tree: leaves carry the value for the root mover.
#[derive(Clone, Debug)]
pub(crate) enum Shape {
    Leaf(f64),
    Node(Vec<Shape>),
}

#[derive(Clone, Debug)]
enum Node {
    Leaf(f64),
    Inner(Vec<usize>),
}

/// A game whose states are nodes of a fixed tree. `First` moves at the root
/// and actions are child ordinals.
#[derive(Clone, Debug)]
pub(crate) struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    pub(crate) fn from_shape(shape: &Shape) -> Self {
        let mut tree = Tree { nodes: Vec::new() };
        tree.push(shape);
        tree
    }

    pub(crate) fn leaf(value: f64) -> Self {
        Self::from_shape(&Shape::Leaf(value))
    }

    /// Root with one MIN node per row, each row listing its leaf values.
    pub(crate) fn two_ply(rows: &[&[f64]]) -> Self {
        let shape = Shape::Node(
            rows.iter()
                .map(|row| Shape::Node(row.iter().map(|&v| Shape::Leaf(v)).collect()))
                .collect(),
        );
        Self::from_shape(&shape)
    }

    pub(crate) fn root(&self) -> (usize, Player) {
        (0, Player::First)
    }

    fn push(&mut self, shape: &Shape) -> usize {
        let id = self.nodes.len();
        match shape {
            Shape::Leaf(v) => self.nodes.push(Node::Leaf(*v)),
            Shape::Node(children) => {
                self.nodes.push(Node::Inner(Vec::new()));
                let ids: Vec<usize> = children.iter().map(|c| self.push(c)).collect();
                self.nodes[id] = Node::Inner(ids);
            }
        }
        id
    }
}

impl Game for Tree {
    type State = (usize, Player);
    type Action = usize;

    fn initial_state(&self) -> Self::State {
        self.root()
    }

    fn to_move(&self, state: &Self::State) -> Player {
        state.1
    }

    fn actions(&self, state: &Self::State) -> ActionList<usize> {
        match &self.nodes[state.0] {
            Node::Leaf(_) => ActionList::new(),
            Node::Inner(children) => (0..children.len()).collect(),
        }
    }

    fn result(&self, state: &Self::State, action: &usize) -> Self::State {
        match &self.nodes[state.0] {
            Node::Inner(children) => (children[*action], state.1.opponent()),
            Node::Leaf(_) => *state,
        }
    }

    fn is_terminal(&self, state: &Self::State) -> bool {
        matches!(self.nodes[state.0], Node::Leaf(_))
    }

    fn utility(&self, state: &Self::State, player: Player) -> f64 {
        let value = match self.nodes[state.0] {
            Node::Leaf(v) => v,
            Node::Inner(_) => 0.0,
        };
        if player == Player::First {
            value
        } else {
            -value
        }
    }
}
