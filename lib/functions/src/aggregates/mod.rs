mod avg;
mod group_concat;
mod min_max;
mod sample;
mod sum;

pub use avg::*;
pub use group_concat::*;
pub use min_max::*;
pub use sample::*;
pub use sum::*;

use sparql_bridge_model::TypedValue;

/// Accumulates the values of one column over one group.
///
/// `step` receives `None` for an unbound input row. `finish` yields `None` when the aggregate
/// itself is unbound for the group.
pub trait TermAccumulator {
    fn step(&mut self, value: Option<&TypedValue>);

    fn finish(self) -> Option<TypedValue>;
}
