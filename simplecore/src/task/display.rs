use std::fmt::{
    Display,
    Formatter,
    Result,
};
use crate::{
    parameter::display::write_tokens,
    task::SimpleTask,
};

impl Display for SimpleTask {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_tokens(f, self.tokens())
    }
}
