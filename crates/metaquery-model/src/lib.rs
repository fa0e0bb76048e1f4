pub mod decision;
pub mod field;
pub mod governance;
pub mod result;
pub mod selection;

pub use decision::{Control, ControlOutcome, Controls, Decision, Status};
pub use field::{Field, FieldDictionary};
pub use governance::{Advisory, GovernanceError};
pub use result::ValidationResult;
pub use selection::Selection;
