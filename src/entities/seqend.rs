//! SeqEnd entity (sequence terminator)

/// Terminates an attribute or vertex run.
///
/// SEQEND never appears in a reassembled graph; it is consumed by the pass
/// that closes its container. It is not a drawable shape and carries no
/// layer or color.
#[derive(Debug, Clone, PartialEq)]
pub struct SeqEnd {
    /// Paper space flag
    pub paperspace: bool,
}
