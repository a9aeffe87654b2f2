//! Operation requests and outcomes exchanged with the front end

use crate::list::{ListMode, NodeId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A request to apply one operation to the list
///
/// Serialized with a `kind` tag, for example
/// `{"kind":"insert-after-key","key":5,"value":7}`. A request missing a
/// required field fails to deserialize and never reaches the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum OperationRequest {
    InsertBeginning { value: i64 },
    InsertEnd { value: i64 },
    InsertAfterKey { key: i64, value: i64 },
    DeleteBeginning,
    DeleteEnd,
    DeleteByKey { key: i64 },
    Search { value: i64 },
    Traverse,
    Clear,
    Reverse,
    ChangeMode { mode: ListMode },
}

impl OperationRequest {
    pub fn kind(&self) -> OperationKind {
        match self {
            OperationRequest::InsertBeginning { .. } => OperationKind::InsertBeginning,
            OperationRequest::InsertEnd { .. } => OperationKind::InsertEnd,
            OperationRequest::InsertAfterKey { .. } => OperationKind::InsertAfterKey,
            OperationRequest::DeleteBeginning => OperationKind::DeleteBeginning,
            OperationRequest::DeleteEnd => OperationKind::DeleteEnd,
            OperationRequest::DeleteByKey { .. } => OperationKind::DeleteByKey,
            OperationRequest::Search { .. } => OperationKind::Search,
            OperationRequest::Traverse => OperationKind::Traverse,
            OperationRequest::Clear => OperationKind::Clear,
            OperationRequest::Reverse => OperationKind::Reverse,
            OperationRequest::ChangeMode { .. } => OperationKind::ChangeMode,
        }
    }
}

/// Operation discriminant, used for the busy state and for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OperationKind {
    InsertBeginning,
    InsertEnd,
    InsertAfterKey,
    DeleteBeginning,
    DeleteEnd,
    DeleteByKey,
    Search,
    Traverse,
    Clear,
    Reverse,
    ChangeMode,
}

impl OperationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            OperationKind::InsertBeginning => "insert-beginning",
            OperationKind::InsertEnd => "insert-end",
            OperationKind::InsertAfterKey => "insert-after-key",
            OperationKind::DeleteBeginning => "delete-beginning",
            OperationKind::DeleteEnd => "delete-end",
            OperationKind::DeleteByKey => "delete-by-key",
            OperationKind::Search => "search",
            OperationKind::Traverse => "traverse",
            OperationKind::Clear => "clear",
            OperationKind::Reverse => "reverse",
            OperationKind::ChangeMode => "change-mode",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an insert placed the new node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertAt {
    Beginning,
    End,
    AfterKey(i64),
}

/// Where a delete removed a node from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteFrom {
    Beginning,
    End,
    Key(i64),
}

/// Successful result of an operation, with the context a front end shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Inserted {
        id: NodeId,
        value: i64,
        position: usize,
        at: InsertAt,
    },
    Deleted {
        id: NodeId,
        value: i64,
        from: DeleteFrom,
    },
    Found {
        id: NodeId,
        value: i64,
        position: usize,
    },
    TraversalStarted {
        nodes: usize,
    },
    Reversed {
        nodes: usize,
    },
    Cleared {
        removed: usize,
    },
    ModeChanged {
        mode: ListMode,
    },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Inserted { value, at, .. } => match at {
                InsertAt::Beginning => write!(f, "Inserted {} at the beginning", value),
                InsertAt::End => write!(f, "Inserted {} at the end", value),
                InsertAt::AfterKey(key) => write!(f, "Inserted {} after key {}", value, key),
            },
            Outcome::Deleted { value, from, .. } => match from {
                DeleteFrom::Beginning => write!(f, "Deleted {} from the beginning", value),
                DeleteFrom::End => write!(f, "Deleted {} from the end", value),
                DeleteFrom::Key(key) => write!(f, "Deleted node with key {}", key),
            },
            Outcome::Found {
                value, position, ..
            } => write!(f, "Found {} at position {}", value, position),
            Outcome::TraversalStarted { nodes } => write!(f, "Traversing {} node(s)", nodes),
            Outcome::Reversed { .. } => f.write_str("List reversed"),
            Outcome::Cleared { .. } => f.write_str("List cleared"),
            Outcome::ModeChanged { mode } => write!(f, "Changed to {} linked list", mode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(r#"{"kind":"insert-beginning","value":3}"#, OperationRequest::InsertBeginning { value: 3 })]
    #[case(r#"{"kind":"insert-after-key","key":5,"value":7}"#, OperationRequest::InsertAfterKey { key: 5, value: 7 })]
    #[case(r#"{"kind":"delete-end"}"#, OperationRequest::DeleteEnd)]
    #[case(r#"{"kind":"change-mode","mode":"circular"}"#, OperationRequest::ChangeMode { mode: ListMode::Circular })]
    #[case(r#"{"kind":"traverse"}"#, OperationRequest::Traverse)]
    fn parses_tagged_requests(#[case] json: &str, #[case] expected: OperationRequest) {
        let request: OperationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request, expected);
        assert_eq!(
            serde_json::to_value(request).unwrap()["kind"],
            expected.kind().as_str()
        );
    }

    #[rstest]
    #[case(r#"{"kind":"insert-end"}"#)]
    #[case(r#"{"kind":"insert-after-key","value":7}"#)]
    #[case(r#"{"kind":"search","value":"seven"}"#)]
    #[case(r#"{"kind":"shuffle"}"#)]
    fn rejects_malformed_requests(#[case] json: &str) {
        assert!(serde_json::from_str::<OperationRequest>(json).is_err());
    }
}
