//! Output collaborators

use crate::error::Result;

/// Consumer of emitted lines, in order
pub trait LineSink {
    /// Accept one complete line (without its terminator)
    fn accept(&mut self, line: &str) -> Result<()>;

    /// Called once after the last line
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

impl LineSink for Vec<String> {
    fn accept(&mut self, line: &str) -> Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}

impl<S: LineSink + ?Sized> LineSink for &mut S {
    fn accept(&mut self, line: &str) -> Result<()> {
        (**self).accept(line)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}
