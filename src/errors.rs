//! Error types for the crate, generated by `error_chain!`.
//!
//! Generation itself only fails on programmer errors: an inconsistent connection template or a
//! template that cannot reach every cell of a single path maze. Neither is worth retrying.
use error_chain::*;

use crate::coordinates::Coordinate;
use crate::units::ExitIndex;

error_chain! {

    foreign_links {
        Io(::std::io::Error);
        Json(::serde_json::Error);
    }

    errors {
        NoReverseExit(location: Coordinate, exit: ExitIndex) {
            description("connection template has no reverse connection")
            display("no exit leads back through exit {} of the node at {}, the connection template is inconsistent",
                    exit.0, location)
        }

        SinglePathExhausted(visited: usize, total: usize) {
            description("single path carving ran out of reachable cells")
            display("single path carving visited {} of {} cells, the template cannot reach every cell of the grid",
                    visited, total)
        }

        InvalidConfig(reason: String) {
            description("invalid maze configuration")
            display("invalid maze configuration: {}", reason)
        }
    }
}
