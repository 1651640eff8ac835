mod category;
mod operands;
mod rule_type;

pub use category::{PluralCategory, UnknownCategory};
pub use operands::{Operand, OperandsError, PluralOperands};
pub use rule_type::RuleType;
