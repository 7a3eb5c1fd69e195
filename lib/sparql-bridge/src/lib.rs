#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]

pub mod common {
    pub use sparql_bridge_common::*;
}

pub mod compiler {
    pub use sparql_bridge_compiler::*;
}

pub mod functions {
    pub use sparql_bridge_functions::*;
}

pub mod model {
    pub use sparql_bridge_model::*;
}
