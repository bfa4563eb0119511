//! Comments attached to query and value nodes.

/// Where a comment sits relative to the node it is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentPosition {
    /// Rendered in front of the node.
    Before,
    /// Rendered after the node.
    After,
}

/// A group of comments sharing a position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionedComment {
    /// The position of the group.
    pub position: CommentPosition,
    /// The comment bodies, in attachment order.
    pub comments: Vec<String>,
}

/// The comments carried by a node.
///
/// `comments` is a free-form list rendered in front of the node;
/// `positioned` keeps one entry per position, in first-attachment order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comments {
    /// Free-form comments.
    pub comments: Vec<String>,
    /// Positioned comment groups.
    pub positioned: Vec<PositionedComment>,
}

impl Comments {
    /// Creates an empty comment set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            comments: Vec::new(),
            positioned: Vec::new(),
        }
    }

    /// Returns true if no comment of any kind is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty() && self.positioned.iter().all(|p| p.comments.is_empty())
    }

    /// Appends a free-form comment.
    pub fn push(&mut self, comment: impl Into<String>) {
        self.comments.push(comment.into());
    }

    /// Attaches comments at `position`, merging with an existing group.
    pub fn add_positioned(&mut self, position: CommentPosition, comments: Vec<String>) {
        if comments.is_empty() {
            return;
        }
        match self.positioned.iter_mut().find(|p| p.position == position) {
            Some(group) => group.comments.extend(comments),
            None => self.positioned.push(PositionedComment {
                position,
                comments,
            }),
        }
    }

    /// Returns the comments attached at `position`.
    #[must_use]
    pub fn get_positioned(&self, position: CommentPosition) -> Vec<String> {
        self.positioned
            .iter()
            .filter(|p| p.position == position)
            .flat_map(|p| p.comments.iter().cloned())
            .collect()
    }

    /// Returns every positioned comment: `Before` ones first, then `After`.
    #[must_use]
    pub fn get_all_positioned(&self) -> Vec<String> {
        let mut all = self.get_positioned(CommentPosition::Before);
        all.extend(self.get_positioned(CommentPosition::After));
        all
    }

    /// Returns the comments to render in front of the node.
    #[must_use]
    pub fn leading(&self) -> Vec<String> {
        let mut leading = self.comments.clone();
        leading.extend(self.get_positioned(CommentPosition::Before));
        leading
    }
}

/// Nodes that carry `Comments`.
pub trait Commentable {
    /// Returns the comments of the node.
    fn comments(&self) -> &Comments;

    /// Returns the comments of the node for mutation.
    fn comments_mut(&mut self) -> &mut Comments;

    /// Attaches comments at `position`.
    fn add_positioned_comments(&mut self, position: CommentPosition, comments: Vec<String>) {
        self.comments_mut().add_positioned(position, comments);
    }

    /// Returns the comments attached at `position`.
    fn get_positioned_comments(&self, position: CommentPosition) -> Vec<String> {
        self.comments().get_positioned(position)
    }

    /// Returns all positioned comments, `Before` first.
    fn get_all_positioned_comments(&self) -> Vec<String> {
        self.comments().get_all_positioned()
    }
}

impl Commentable for Comments {
    fn comments(&self) -> &Comments {
        self
    }

    fn comments_mut(&mut self) -> &mut Comments {
        self
    }
}
