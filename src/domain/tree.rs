use std::fmt;

use nonempty::NonEmpty;

use crate::domain::{CourseCode, Requirement};

/// The logical operator of an internal node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Every child must be satisfied.
    And,
    /// At least one child must be satisfied.
    Or,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::And => f.write_str("AND"),
            Self::Or => f.write_str("OR"),
        }
    }
}

/// A node of a prerequisite expression tree.
///
/// A leaf holds exactly one [`Requirement`] and has no children; an internal
/// node holds an [`Operator`] and at least one child. Trees are built once
/// per validation, owned by the caller, and never mutated.
///
/// The parser only ever builds flat trees (a single leaf, or one operator
/// over course leaves), but evaluation is defined for arbitrary nesting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrerequisiteNode {
    /// An atomic requirement.
    Leaf(Requirement),

    /// Children combined with a logical operator.
    Internal {
        /// How the children combine.
        operator: Operator,
        /// The combined sub-expressions, in source order.
        children: NonEmpty<Box<PrerequisiteNode>>,
    },
}

impl PrerequisiteNode {
    /// Creates a course leaf.
    #[must_use]
    pub const fn course(code: CourseCode) -> Self {
        Self::Leaf(Requirement::Course(code))
    }

    /// Creates a year-standing leaf.
    #[must_use]
    pub const fn level(year: u8) -> Self {
        Self::Leaf(Requirement::Level(year))
    }

    /// Creates a program-enrollment leaf.
    #[must_use]
    pub const fn program(name: String) -> Self {
        Self::Leaf(Requirement::Program(name))
    }

    /// Creates an internal node, or `None` if `children` is empty.
    #[must_use]
    pub fn internal(operator: Operator, children: Vec<Self>) -> Option<Self> {
        let children = children.into_iter().map(Box::new).collect();
        NonEmpty::from_vec(children).map(|children| Self::Internal { operator, children })
    }

    /// Returns the node's operator; `None` marks a leaf.
    #[must_use]
    pub const fn operator(&self) -> Option<Operator> {
        match self {
            Self::Leaf(_) => None,
            Self::Internal { operator, .. } => Some(*operator),
        }
    }

    /// Returns the requirement held by a leaf.
    #[must_use]
    pub const fn requirement(&self) -> Option<&Requirement> {
        match self {
            Self::Leaf(requirement) => Some(requirement),
            Self::Internal { .. } => None,
        }
    }

    /// Returns the node's children in order. Leaves have none.
    pub fn children(&self) -> impl Iterator<Item = &Self> {
        let children = match self {
            Self::Leaf(_) => None,
            Self::Internal { children, .. } => Some(children.iter().map(|child| &**child)),
        };
        children.into_iter().flatten()
    }

    /// Returns every leaf requirement in depth-first order.
    #[must_use]
    pub fn leaves(&self) -> Vec<&Requirement> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves<'a>(&'a self, leaves: &mut Vec<&'a Requirement>) {
        match self {
            Self::Leaf(requirement) => leaves.push(requirement),
            Self::Internal { children, .. } => {
                for child in children.iter() {
                    child.collect_leaves(leaves);
                }
            }
        }
    }

    /// Counts the course leaves anywhere in the tree.
    ///
    /// Year-standing and program leaves are not counted.
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.leaves().into_iter().filter(|r| r.is_course()).count()
    }
}

/// Renders the tree in infix form, parenthesizing nested internal nodes.
///
/// ```
/// use prereqs::{CourseCode, Operator, PrerequisiteNode};
///
/// let tree = PrerequisiteNode::internal(
///     Operator::Or,
///     vec![
///         PrerequisiteNode::course(CourseCode::new("STAT 230").unwrap()),
///         PrerequisiteNode::course(CourseCode::new("STAT 240").unwrap()),
///     ],
/// )
/// .unwrap();
/// assert_eq!(tree.to_string(), "STAT 230 OR STAT 240");
/// ```
impl fmt::Display for PrerequisiteNode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Leaf(requirement) => write!(f, "{requirement}"),
            Self::Internal { operator, children } => {
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, " {operator} ")?;
                    }
                    if child.operator().is_some() {
                        write!(f, "({child})")?;
                    } else {
                        write!(f, "{child}")?;
                    }
                }
                Ok(())
            }
        }
    }
}
