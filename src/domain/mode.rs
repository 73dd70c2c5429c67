/// Operating mode of the network.
///
/// Train: dropout active, batch norm normalises with batch statistics
///        and updates its running statistics.
/// Eval:  dropout is a no-op, batch norm uses the stored running statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Train,
    Eval,
}
