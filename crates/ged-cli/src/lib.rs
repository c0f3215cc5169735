//! # ged-cli: Command-Line Front End
//!
//! Provides the `ged` command-line interface over the validation engine.
//!
//! ## Subcommands
//!
//! - `ged validate`: Validate, and by default repair, a record graph
//!   stored as JSON or YAML.
//!
//! ```bash
//! ged validate family.json
//! ged validate family.yaml --strict --format json
//! ged validate family.json --write repaired.json -vv
//! ```

pub mod graph_io;
pub mod report;
pub mod validate;
